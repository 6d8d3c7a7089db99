use std::sync::Arc;

use tracing::debug;

use crate::opentargets::CategoryScore;
use crate::scores::{NormalizedScoreVector, ScoreMemo};

use super::resize::{ResizeBus, ResizeSubscription};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartTab {
    #[default]
    Bar,
    Radar,
}

impl ChartTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Radar => "Radar",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreView {
    Collapsed,
    ExpandedBar,
    ExpandedRadar,
}

/// Per-row view state. Rows are independent: each one holds its own tab,
/// its own score memo and, while expanded, its own resize subscription.
#[derive(Default)]
pub struct RowViewState {
    expanded: bool,
    tab: ChartTab,
    subscription: Option<ResizeSubscription>,
    resize_requested: bool,
    chart_width: f32,
    memo: ScoreMemo,
}

impl RowViewState {
    pub fn view(&self) -> ScoreView {
        match (self.expanded, self.tab) {
            (false, _) => ScoreView::Collapsed,
            (true, ChartTab::Bar) => ScoreView::ExpandedBar,
            (true, ChartTab::Radar) => ScoreView::ExpandedRadar,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn tab(&self) -> ChartTab {
        self.tab
    }

    pub fn toggle(&mut self, bus: &ResizeBus) {
        if self.expanded {
            self.collapse();
        } else {
            self.expand(bus);
        }
    }

    pub fn expand(&mut self, bus: &ResizeBus) {
        if self.expanded {
            return;
        }

        self.expanded = true;
        self.resize_requested = true;
        self.subscription = Some(bus.subscribe());
        debug!(view = ?self.view(), "row expanded");
    }

    pub fn collapse(&mut self) {
        if !self.expanded {
            return;
        }

        self.expanded = false;
        self.resize_requested = false;
        self.subscription = None;
        debug!("row collapsed");
    }

    pub fn select_tab(&mut self, tab: ChartTab) -> bool {
        if self.tab == tab {
            return false;
        }

        self.tab = tab;
        if self.expanded {
            self.resize_requested = true;
        }
        debug!(tab = tab.label(), "chart tab selected");
        true
    }

    #[cfg(test)]
    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn normalized(&mut self, scores: &Arc<[CategoryScore]>) -> &NormalizedScoreVector {
        self.memo.get(scores)
    }

    #[cfg(test)]
    pub fn normalize_count(&self) -> usize {
        self.memo.computations()
    }

    /// Whether the visible chart has to re-measure its canvas this frame.
    ///
    /// An open or tab request waits until the expand animation reaches
    /// `openness == 1.0`. A pending viewport resize applies right away.
    pub fn resize_due(&mut self, openness: f32) -> bool {
        if !self.expanded {
            return false;
        }

        let mut due = false;
        if self.resize_requested && openness >= 1.0 {
            self.resize_requested = false;
            due = true;
        }

        let viewport_changed = self
            .subscription
            .as_ref()
            .is_some_and(ResizeSubscription::take_pending);
        due || viewport_changed
    }

    pub fn chart_width(&self) -> f32 {
        self.chart_width
    }

    pub fn set_chart_width(&mut self, width: f32) {
        self.chart_width = width.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn scores() -> Arc<[CategoryScore]> {
        Arc::from(vec![
            CategoryScore::new("genetic_association", 0.8),
            CategoryScore::new("literature", 0.2),
        ])
    }

    #[test]
    fn starts_collapsed_and_expands_to_bar() {
        let bus = ResizeBus::default();
        let mut row = RowViewState::default();
        assert_eq!(row.view(), ScoreView::Collapsed);

        row.toggle(&bus);
        assert_eq!(row.view(), ScoreView::ExpandedBar);

        row.select_tab(ChartTab::Radar);
        assert_eq!(row.view(), ScoreView::ExpandedRadar);

        row.toggle(&bus);
        assert_eq!(row.view(), ScoreView::Collapsed);
    }

    #[test]
    fn reexpanding_restores_last_tab() {
        let bus = ResizeBus::default();
        let mut row = RowViewState::default();
        row.toggle(&bus);
        row.select_tab(ChartTab::Radar);
        row.toggle(&bus);
        row.toggle(&bus);
        assert_eq!(row.view(), ScoreView::ExpandedRadar);
    }

    #[test]
    fn rows_do_not_share_state() {
        let bus = ResizeBus::default();
        let mut first = RowViewState::default();
        let second = RowViewState::default();
        first.toggle(&bus);
        first.select_tab(ChartTab::Radar);
        assert_eq!(second.view(), ScoreView::Collapsed);
        assert_eq!(second.tab(), ChartTab::Bar);
    }

    #[test]
    fn subscription_follows_expanded_state() {
        let bus = ResizeBus::default();
        let mut row = RowViewState::default();

        for _ in 0..10 {
            row.toggle(&bus);
            assert!(row.has_subscription());
            assert_eq!(bus.subscriber_count(), 1);
            row.toggle(&bus);
            assert!(!row.has_subscription());
            assert_eq!(bus.subscriber_count(), 0);
        }
    }

    #[test]
    fn dropping_expanded_row_releases_subscription() {
        let bus = ResizeBus::default();
        let mut row = RowViewState::default();
        row.expand(&bus);
        assert_eq!(bus.subscriber_count(), 1);
        drop(row);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn open_resize_waits_for_animation() {
        let bus = ResizeBus::default();
        let mut row = RowViewState::default();
        row.expand(&bus);

        assert!(!row.resize_due(0.4));
        assert!(row.resize_due(1.0));
        assert!(!row.resize_due(1.0));
    }

    #[test]
    fn viewport_resize_reaches_expanded_rows_only() {
        let bus = ResizeBus::default();
        let mut open = RowViewState::default();
        let mut closed = RowViewState::default();
        open.expand(&bus);
        assert!(open.resize_due(1.0));

        bus.notify_viewport(vec2(800.0, 600.0));
        bus.notify_viewport(vec2(640.0, 600.0));

        assert!(open.resize_due(1.0));
        assert!(!open.resize_due(1.0));
        assert!(!closed.resize_due(1.0));
    }

    #[test]
    fn tab_switch_requests_resize() {
        let bus = ResizeBus::default();
        let mut row = RowViewState::default();
        row.expand(&bus);
        assert!(row.resize_due(1.0));

        assert!(row.select_tab(ChartTab::Radar));
        assert!(row.resize_due(1.0));
        assert!(!row.select_tab(ChartTab::Radar));
    }

    #[test]
    fn toggling_and_switching_tabs_keeps_vector() {
        let bus = ResizeBus::default();
        let scores = scores();
        let mut row = RowViewState::default();

        let before = row.normalized(&scores).values();
        row.toggle(&bus);
        row.select_tab(ChartTab::Radar);
        let after = row.normalized(&scores).values();

        assert_eq!(before, after);
        assert_eq!(before.len(), 7);
        assert_eq!(row.normalize_count(), 1);
    }
}
