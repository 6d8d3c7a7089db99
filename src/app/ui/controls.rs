use std::collections::HashSet;
use std::sync::Arc;

use eframe::egui::{self, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::debug;

use crate::opentargets::AssociationRow;

use super::super::{SearchMatchCache, ViewModel};

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

pub(in crate::app) fn matching_rows(rows: &[AssociationRow], query: &str) -> HashSet<usize> {
    let matcher = SkimMatcherV2::default();
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let symbol = fuzzy_match_score(&matcher, &row.target.approved_symbol, query);
            let name = fuzzy_match_score(&matcher, &row.target.approved_name, query);
            symbol.or(name).map(|_| index)
        })
        .collect()
}

impl ViewModel {
    /// Laid out right to left inside the top bar.
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        let any_expanded = self.rows.iter().any(|row| row.is_expanded());
        if ui
            .add_enabled(any_expanded, egui::Button::new("Collapse all"))
            .on_hover_text("Close every expanded row; chart tabs are kept.")
            .clicked()
        {
            self.collapse_all();
        }

        ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .hint_text("symbol or name")
                .desired_width(180.0),
        )
        .on_hover_text("Highlight matching targets without filtering or reordering the table.");
        ui.label("Search");
    }

    pub(in crate::app) fn collapse_all(&mut self) {
        for row in &mut self.rows {
            row.collapse();
        }
        debug!("all rows collapsed");
    }

    pub(in crate::app) fn cached_search_matches(
        &mut self,
        rows: &[AssociationRow],
    ) -> Option<Arc<HashSet<usize>>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(cached) = &self.search_match_cache
            && cached.query == query
        {
            return Some(Arc::clone(&cached.matches));
        }

        let matches = Arc::new(matching_rows(rows, query));
        self.search_match_cache = Some(SearchMatchCache {
            query: query.to_owned(),
            matches: Arc::clone(&matches),
        });
        Some(matches)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::table::tests::{page_of, row as table_row};
    use crate::opentargets::TargetRef;

    fn row(symbol: &str, name: &str) -> AssociationRow {
        AssociationRow {
            target: TargetRef {
                id: symbol.to_owned(),
                approved_symbol: symbol.to_owned(),
                approved_name: name.to_owned(),
            },
            score: 0.5,
            datatype_scores: Arc::from(Vec::new()),
        }
    }

    #[test]
    fn matches_symbol_or_name() {
        let rows = [
            row("EGFR", "epidermal growth factor receptor"),
            row("KRAS", "KRAS proto-oncogene, GTPase"),
            row("ALK", "ALK receptor tyrosine kinase"),
        ];

        assert_eq!(matching_rows(&rows, "egfr"), HashSet::from([0]));
        assert_eq!(matching_rows(&rows, "receptor"), HashSet::from([0, 2]));
        assert!(matching_rows(&rows, "zzzz").is_empty());
    }

    #[test]
    fn search_cache_reused_for_same_query() {
        let rows = [row("EGFR", "epidermal growth factor receptor")];
        let mut view = ViewModel::new(&page_of(rows.to_vec()));
        assert!(view.cached_search_matches(&rows).is_none());

        view.search = "egfr".to_owned();
        let first = view.cached_search_matches(&rows).unwrap();
        let second = view.cached_search_matches(&rows).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn collapse_all_releases_subscriptions() {
        let mut view = ViewModel::new(&page_of(vec![
            table_row("EGFR", "epidermal growth factor receptor", 0.9),
            table_row("KRAS", "KRAS proto-oncogene, GTPase", 0.7),
            table_row("ALK", "ALK receptor tyrosine kinase", 0.4),
        ]));
        let bus = view.resize_bus.clone();
        for row in &mut view.rows {
            row.expand(&bus);
        }
        assert_eq!(view.resize_bus.subscriber_count(), 3);

        view.collapse_all();
        assert_eq!(view.resize_bus.subscriber_count(), 0);
        assert!(view.rows.iter().all(|row| !row.is_expanded()));
    }

    #[test]
    fn dropping_view_releases_subscriptions() {
        let mut view = ViewModel::new(&page_of(vec![
            table_row("EGFR", "epidermal growth factor receptor", 0.9),
            table_row("KRAS", "KRAS proto-oncogene, GTPase", 0.7),
        ]));
        let bus = view.resize_bus.clone();
        view.rows[1].expand(&bus);
        assert_eq!(bus.subscriber_count(), 1);

        drop(view);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
