use eframe::egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Ui, vec2};

use crate::scores::NormalizedScoreVector;
use crate::util::format_score;

use super::super::render_utils::{
    AXIS_COLOR, HIGHLIGHT_COLOR, SERIES_COLOR, TEXT_COLOR, draw_chart_background, draw_title,
    draw_vertical_text, grid_line,
};
use super::{CHART_HEIGHT, chart_title};

const AXIS_TITLE: &str = "Association Score";
const LEFT_MARGIN: f32 = 64.0;
const RIGHT_MARGIN: f32 = 16.0;
const TOP_MARGIN: f32 = 32.0;
const BOTTOM_MARGIN: f32 = 44.0;
const BAR_FILL: f32 = 0.6;
const TICK_STEPS: usize = 5;

pub(in crate::app) fn value_to_y(plot: Rect, value: f64) -> f32 {
    plot.bottom() - plot.height() * value.clamp(0.0, 1.0) as f32
}

pub(in crate::app) fn bar_rects(plot: Rect, values: &[f64]) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }

    let slot = plot.width() / values.len() as f32;
    let bar_width = slot * BAR_FILL;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let left = plot.left() + slot * index as f32 + (slot - bar_width) * 0.5;
            Rect::from_min_max(
                Pos2::new(left, value_to_y(plot, *value)),
                Pos2::new(left + bar_width, plot.bottom()),
            )
        })
        .collect()
}

fn slot_at(plot: Rect, count: usize, pos: Pos2) -> Option<usize> {
    if count == 0 || !plot.contains(pos) {
        return None;
    }

    let slot = plot.width() / count as f32;
    let index = ((pos.x - plot.left()) / slot).floor() as usize;
    Some(index.min(count - 1))
}

pub(in crate::app) fn draw_bar_chart(
    ui: &mut Ui,
    width: f32,
    symbol: &str,
    vector: &NormalizedScoreVector,
) {
    let (rect, response) = ui.allocate_exact_size(vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    draw_chart_background(&painter, rect);
    draw_title(&painter, rect, &chart_title(symbol));

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + LEFT_MARGIN, rect.top() + TOP_MARGIN),
        Pos2::new(rect.right() - RIGHT_MARGIN, rect.bottom() - BOTTOM_MARGIN),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    for step in 0..=TICK_STEPS {
        let value = step as f64 / TICK_STEPS as f64;
        let y = value_to_y(plot, value);
        grid_line(&painter, Pos2::new(plot.left(), y), Pos2::new(plot.right(), y));
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{value:.1}"),
            FontId::proportional(11.0),
            AXIS_COLOR,
        );
    }

    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, AXIS_COLOR),
    );
    painter.line_segment([plot.left_top(), plot.left_bottom()], Stroke::new(1.0, AXIS_COLOR));
    draw_vertical_text(
        &painter,
        Pos2::new(rect.left() + 14.0, plot.center().y),
        AXIS_TITLE,
        FontId::proportional(12.0),
    );

    let entries = vector.entries();
    let values = vector.values();
    let bars = bar_rects(plot, &values);
    let hovered = response
        .hover_pos()
        .and_then(|pos| slot_at(plot, vector.len(), pos));
    let slot = plot.width() / vector.len().max(1) as f32;

    for (index, (bar, label)) in bars.iter().zip(vector.labels()).enumerate() {
        let color = if hovered == Some(index) {
            HIGHLIGHT_COLOR
        } else {
            SERIES_COLOR
        };
        painter.rect_filled(*bar, 2.0, color);

        let galley = painter.layout(
            label.to_owned(),
            FontId::proportional(11.0),
            TEXT_COLOR,
            slot - 4.0,
        );
        let label_pos = Pos2::new(
            bar.center().x - galley.size().x * 0.5,
            plot.bottom() + 6.0,
        );
        painter.galley(label_pos, galley, TEXT_COLOR);
    }

    if let Some(entry) = hovered.and_then(|index| entries.get(index)) {
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(format!("{}: {}", entry.label, format_score(entry.value)));
            ui.weak(entry.id);
        });
    }
}
