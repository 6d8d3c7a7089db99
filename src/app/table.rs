use crate::opentargets::{AssociationPage, target_link};
use crate::util::format_score;

pub(super) const EMPTY_PLACEHOLDER: &str = "No associated targets were returned for this disease.";

#[derive(Clone, Debug, PartialEq)]
pub(super) struct RowCells {
    pub(super) symbol: String,
    pub(super) link: String,
    pub(super) name: String,
    pub(super) score: String,
}

/// Display text of a loaded page, built once when the page arrives.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum TableBody {
    Placeholder(&'static str),
    Rows(Vec<RowCells>),
}

impl TableBody {
    pub(super) fn from_page(page: &AssociationPage) -> Self {
        if page.rows.is_empty() {
            return Self::Placeholder(EMPTY_PLACEHOLDER);
        }

        Self::Rows(
            page.rows
                .iter()
                .map(|row| RowCells {
                    symbol: row.target.approved_symbol.clone(),
                    link: target_link(&row.target.approved_name),
                    name: row.target.approved_name.clone(),
                    score: format_score(row.score),
                })
                .collect(),
        )
    }

    #[cfg(test)]
    pub(super) fn data_row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Placeholder(_) => 0,
        }
    }

    #[cfg(test)]
    pub(super) fn placeholder_row_count(&self) -> usize {
        usize::from(matches!(self, Self::Placeholder(_)))
    }
}

#[cfg(test)]
pub(super) mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::loader::tests::{StubTransport, settle};
    use crate::app::loader::{DataLoader, LoadState};
    use crate::app::view_for;
    use crate::opentargets::{AssociationRow, CategoryScore, TargetRef};

    pub(in crate::app) fn row(symbol: &str, name: &str, score: f64) -> AssociationRow {
        AssociationRow {
            target: TargetRef {
                id: format!("ENSG-{symbol}"),
                approved_symbol: symbol.to_owned(),
                approved_name: name.to_owned(),
            },
            score,
            datatype_scores: Arc::from(vec![CategoryScore::new("literature", 0.1)]),
        }
    }

    pub(in crate::app) fn page_of(rows: Vec<AssociationRow>) -> AssociationPage {
        AssociationPage {
            total_count: Some(rows.len() as u64),
            rows,
            ..AssociationPage::default()
        }
    }

    #[test]
    fn empty_page_renders_single_placeholder() {
        let body = TableBody::from_page(&AssociationPage::default());
        assert_eq!(body.placeholder_row_count(), 1);
        assert_eq!(body.data_row_count(), 0);
    }

    #[test]
    fn rows_keep_received_order_and_format() {
        let page = page_of(vec![
            row("KRAS", "KRAS proto-oncogene, GTPase", 0.5),
            row("EGFR", "epidermal growth factor receptor", 0.86123),
        ]);
        let body = TableBody::from_page(&page);
        let TableBody::Rows(cells) = &body else {
            panic!("expected rows");
        };

        assert_eq!(body.placeholder_row_count(), 0);
        assert_eq!(cells[0].symbol, "KRAS");
        assert_eq!(cells[1].symbol, "EGFR");
        assert_eq!(cells[1].score, "0.861");
        assert_eq!(cells[0].score, "0.500");
        assert!(cells[1].link.ends_with("/epidermal%20growth%20factor%20receptor"));
    }

    #[test]
    fn loading_and_error_have_no_view() {
        assert!(view_for(&LoadState::Loading).is_none());
        assert!(view_for(&LoadState::Error("boom".to_owned())).is_none());
    }

    #[test]
    fn view_holds_cells_built_from_page() {
        let page = page_of(vec![
            row("EGFR", "epidermal growth factor receptor", 0.9),
            row("ALK", "ALK receptor tyrosine kinase", 0.4),
        ]);
        let state = LoadState::Ready(page.clone());
        let view = view_for(&state).expect("ready state builds a view");

        assert_eq!(view.body, TableBody::from_page(&page));
        assert_eq!(view.body.data_row_count(), 2);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn http_500_ends_in_error_with_no_rows() {
        let mut loader = DataLoader::spawn(StubTransport::replying(500, "upstream failure"));
        settle(&mut loader);

        match loader.state() {
            LoadState::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected error state, got {other:?}"),
        }
        assert!(view_for(loader.state()).is_none());
    }

    #[test]
    fn zero_rows_from_server_end_in_placeholder() {
        let body = r#"{"data":{"disease":{"associatedTargets":{"count":0,"rows":[]}}}}"#;
        let mut loader = DataLoader::spawn(StubTransport::replying(200, body));
        settle(&mut loader);

        let view = view_for(loader.state()).expect("ready state builds a view");
        assert_eq!(view.body.placeholder_row_count(), 1);
        assert_eq!(view.body.data_row_count(), 0);
    }
}
