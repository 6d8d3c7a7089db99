use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetRef {
    pub id: String,
    pub approved_symbol: String,
    pub approved_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryScore {
    pub id: String,
    pub score: f64,
}

impl CategoryScore {
    pub fn new(id: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// One target-disease association as returned by the API.
///
/// Rows are never edited after decoding. The category scores sit behind an
/// `Arc` so their identity can key the normalized-vector memo.
#[derive(Clone, Debug)]
pub struct AssociationRow {
    pub target: TargetRef,
    pub score: f64,
    pub datatype_scores: Arc<[CategoryScore]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiseaseRef {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct AssociationPage {
    pub disease: Option<DiseaseRef>,
    pub total_count: Option<u64>,
    pub rows: Vec<AssociationRow>,
}

impl AssociationPage {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> String {
        match self.total_count {
            Some(total) => format!("showing {} of {total} associations", self.rows.len()),
            None => format!("showing {} associations", self.rows.len()),
        }
    }
}
