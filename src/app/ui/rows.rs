use eframe::egui::{Align, Layout, RichText, Sense, Shape, Ui, UiBuilder, Vec2, vec2};

use crate::opentargets::{AssociationPage, AssociationRow};
use crate::util::truncate_label;

use super::super::charts::{CHART_HEIGHT, MIN_CHART_WIDTH, draw_bar_chart, draw_radar_chart};
use super::super::render_utils::{HIGHLIGHT_COLOR, blend_color, score_color};
use super::super::resize::ResizeBus;
use super::super::row_state::{ChartTab, RowViewState};
use super::super::table::{RowCells, TableBody};
use super::super::ViewModel;

const ROW_HEIGHT: f32 = 26.0;
const TOGGLE_WIDTH: f32 = 32.0;
const SYMBOL_WIDTH: f32 = 110.0;
const SCORE_WIDTH: f32 = 90.0;
const TAB_BAR_HEIGHT: f32 = 30.0;
const PANEL_PADDING: f32 = 8.0;
const EXPAND_ANIMATION_SECS: f32 = 0.2;

fn cell(ui: &mut Ui, width: f32, align: Align, add_contents: impl FnOnce(&mut Ui)) {
    ui.allocate_ui_with_layout(
        vec2(width, ROW_HEIGHT),
        Layout::left_to_right(Align::Center).with_main_align(align),
        add_contents,
    );
}

fn name_width(ui: &Ui) -> f32 {
    (ui.available_width() - TOGGLE_WIDTH - SYMBOL_WIDTH - SCORE_WIDTH - 24.0).max(120.0)
}

fn draw_header(ui: &mut Ui) {
    let name_width = name_width(ui);
    ui.horizontal(|ui| {
        cell(ui, TOGGLE_WIDTH, Align::Min, |_| {});
        cell(ui, SYMBOL_WIDTH, Align::Min, |ui| {
            ui.label(RichText::new("Symbol").strong());
        });
        cell(ui, name_width, Align::Min, |ui| {
            ui.label(RichText::new("Name").strong());
        });
        cell(ui, SCORE_WIDTH, Align::Max, |ui| {
            ui.label(RichText::new("Score").strong());
        });
    });
    ui.separator();
}

impl ViewModel {
    pub(in crate::app) fn draw_table(&mut self, ui: &mut Ui, page: &AssociationPage) {
        draw_header(ui);

        if let TableBody::Placeholder(message) = &self.body {
            ui.horizontal(|ui| {
                let width = ui.available_width();
                cell(ui, width, Align::Center, |ui| {
                    ui.label(RichText::new(*message).italics());
                });
            });
            return;
        }

        let matches = self.cached_search_matches(&page.rows);
        let bus = self.resize_bus.clone();
        let TableBody::Rows(cells) = &self.body else {
            return;
        };

        for (index, (row, row_cells)) in page.rows.iter().zip(cells).enumerate() {
            let Some(state) = self.rows.get_mut(index) else {
                continue;
            };
            let highlighted = matches
                .as_ref()
                .is_some_and(|matches| matches.contains(&index));

            let row_id = ui.id().with(("association_row", index, &row.target.id));
            ui.push_id(row_id, |ui| {
                draw_row(ui, row, row_cells, state, &bus, highlighted);

                let openness = ui.ctx().animate_bool_with_time(
                    row_id.with("open"),
                    state.is_expanded(),
                    EXPAND_ANIMATION_SECS,
                );
                if openness > 0.0 {
                    draw_score_panel(ui, row, state, openness);
                }
            });
            ui.separator();
        }
    }
}

fn draw_row(
    ui: &mut Ui,
    row: &AssociationRow,
    cells: &RowCells,
    state: &mut RowViewState,
    bus: &ResizeBus,
    highlighted: bool,
) {
    let name_width = name_width(ui);
    let background = ui.painter().add(Shape::Noop);
    let response = ui
        .horizontal(|ui| {
            cell(ui, TOGGLE_WIDTH, Align::Min, |ui| {
                let icon = if state.is_expanded() { "⏷" } else { "⏵" };
                if ui
                    .small_button(icon)
                    .on_hover_text("Show data type scores")
                    .clicked()
                {
                    state.toggle(bus);
                }
            });
            cell(ui, SYMBOL_WIDTH, Align::Min, |ui| {
                ui.hyperlink_to(cells.symbol.as_str(), cells.link.as_str())
                    .on_hover_text(cells.link.as_str());
            });
            cell(ui, name_width, Align::Min, |ui| {
                let max_chars = (name_width / 7.0) as usize;
                ui.label(truncate_label(&cells.name, max_chars.max(8)))
                    .on_hover_text(cells.name.as_str());
            });
            cell(ui, SCORE_WIDTH, Align::Max, |ui| {
                ui.label(
                    RichText::new(cells.score.as_str())
                        .color(score_color(row.score))
                        .monospace(),
                );
            });
        })
        .response;

    if highlighted {
        let tint = blend_color(ui.visuals().extreme_bg_color, HIGHLIGHT_COLOR, 0.22);
        ui.painter()
            .set(background, Shape::rect_filled(response.rect, 2.0, tint));
    }
}

fn draw_score_panel(ui: &mut Ui, row: &AssociationRow, state: &mut RowViewState, openness: f32) {
    let full_height = TAB_BAR_HEIGHT + CHART_HEIGHT + PANEL_PADDING * 2.0;
    let visible_height = full_height * openness;
    let (block_rect, _) =
        ui.allocate_exact_size(vec2(ui.available_width(), visible_height), Sense::hover());

    let content_rect = block_rect
        .with_max_y(block_rect.top() + full_height)
        .shrink2(Vec2::splat(PANEL_PADDING));
    let mut child = ui.new_child(
        UiBuilder::new()
            .max_rect(content_rect)
            .layout(Layout::top_down(Align::Min)),
    );
    child.set_clip_rect(block_rect.intersect(ui.clip_rect()));

    if state.resize_due(openness) {
        let width = child.available_width();
        tracing::trace!(width, "chart canvas measured");
        state.set_chart_width(width);
    }

    child.horizontal(|ui| {
        let mut tab = state.tab();
        ui.selectable_value(&mut tab, ChartTab::Bar, ChartTab::Bar.label());
        ui.selectable_value(&mut tab, ChartTab::Radar, ChartTab::Radar.label());
        state.select_tab(tab);
    });

    let width = state.chart_width();
    if width < MIN_CHART_WIDTH {
        child.add_space(CHART_HEIGHT);
        return;
    }

    let symbol = row.target.approved_symbol.as_str();
    let tab = state.tab();
    let vector = state.normalized(&row.datatype_scores);
    match tab {
        ChartTab::Bar => draw_bar_chart(&mut child, width, symbol, vector),
        ChartTab::Radar => draw_radar_chart(&mut child, width, symbol, vector),
    }
}
