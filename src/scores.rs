use std::sync::Arc;

use crate::opentargets::CategoryScore;

/// Evidence categories shown per row, in display order.
pub const KNOWN_CATEGORIES: [&str; 7] = [
    "literature",
    "rna_expression",
    "genetic_association",
    "somatic_mutation",
    "known_drug",
    "animal_model",
    "affected_pathway",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreEntry {
    pub id: &'static str,
    pub label: String,
    pub value: f64,
}

/// Dense projection of a row's sparse category scores onto
/// [`KNOWN_CATEGORIES`]. Always holds exactly seven entries.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedScoreVector {
    entries: Vec<ScoreEntry>,
}

impl NormalizedScoreVector {
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.value).collect()
    }
}

pub fn normalize_scores(scores: &[CategoryScore]) -> NormalizedScoreVector {
    let entries = KNOWN_CATEGORIES
        .iter()
        .map(|&id| ScoreEntry {
            id,
            label: format_category_label(id),
            value: scores
                .iter()
                .find(|score| score.id == id)
                .map(|score| score.score)
                .unwrap_or(0.0),
        })
        .collect();

    NormalizedScoreVector { entries }
}

pub fn format_category_label(id: &str) -> String {
    id.split('_')
        .map(|segment| {
            if segment.eq_ignore_ascii_case("rna") {
                return "RNA".to_owned();
            }

            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remembers the last normalized vector together with the score set it came
/// from. A new computation happens only when the score set is a different
/// allocation.
#[derive(Default)]
pub struct ScoreMemo {
    cached: Option<(Arc<[CategoryScore]>, NormalizedScoreVector)>,
    #[cfg(test)]
    computations: usize,
}

impl ScoreMemo {
    pub fn get(&mut self, scores: &Arc<[CategoryScore]>) -> &NormalizedScoreVector {
        if !matches!(&self.cached, Some((key, _)) if Arc::ptr_eq(key, scores)) {
            #[cfg(test)]
            {
                self.computations += 1;
            }
            self.cached = None;
        }

        let (_, vector) = self
            .cached
            .get_or_insert_with(|| (Arc::clone(scores), normalize_scores(scores)));
        vector
    }

    #[cfg(test)]
    pub fn computations(&self) -> usize {
        self.computations
    }
}
