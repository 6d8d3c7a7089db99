use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align, Align2, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2, vec2};

use crate::scores::NormalizedScoreVector;
use crate::util::format_score;

use super::super::render_utils::{
    AXIS_COLOR, GRID_COLOR, HIGHLIGHT_COLOR, SERIES_COLOR, TEXT_COLOR, draw_chart_background,
    draw_title, with_alpha,
};
use super::{CHART_HEIGHT, chart_title};

const RINGS: usize = 5;
const LABEL_GAP: f32 = 14.0;
const MARKER_RADIUS: f32 = 3.5;
const HOVER_RADIUS: f32 = 9.0;

/// Upper bound of the radial scale. The suggested range is [0, 1]; larger
/// values stretch it.
pub(in crate::app) fn scale_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0, f64::max)
}

pub(in crate::app) fn ring_ticks(max: f64) -> Vec<f64> {
    (1..=RINGS)
        .map(|ring| max * ring as f64 / RINGS as f64)
        .collect()
}

fn spoke_direction(index: usize, count: usize) -> Vec2 {
    let angle = -FRAC_PI_2 + TAU * index as f32 / count.max(1) as f32;
    vec2(angle.cos(), angle.sin())
}

/// Screen position of `value` on spoke `index`; the first spoke points up
/// and the rest follow clockwise.
pub(in crate::app) fn radar_point(
    center: Pos2,
    radius: f32,
    index: usize,
    count: usize,
    value: f64,
    max: f64,
) -> Pos2 {
    let fraction = if max > 0.0 {
        (value / max).clamp(0.0, 1.0) as f32
    } else {
        0.0
    };
    center + spoke_direction(index, count) * radius * fraction
}

fn label_anchor(direction: Vec2) -> Align2 {
    let horizontal = if direction.x > 0.3 {
        Align::Min
    } else if direction.x < -0.3 {
        Align::Max
    } else {
        Align::Center
    };
    let vertical = if direction.y > 0.3 {
        Align::Min
    } else if direction.y < -0.3 {
        Align::Max
    } else {
        Align::Center
    };
    Align2([horizontal, vertical])
}

pub(in crate::app) fn draw_radar_chart(
    ui: &mut Ui,
    width: f32,
    symbol: &str,
    vector: &NormalizedScoreVector,
) {
    let (rect, response) = ui.allocate_exact_size(vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    draw_chart_background(&painter, rect);
    draw_title(&painter, rect, &chart_title(symbol));

    let entries = vector.entries();
    let count = vector.len();
    if count == 0 {
        return;
    }

    let center = Pos2::new(rect.center().x, rect.center().y + 14.0);
    let radius = ((rect.height() - 84.0) * 0.5).min(rect.width() * 0.5 - 110.0);
    if radius <= 8.0 {
        return;
    }

    let values = vector.values();
    let max = scale_max(&values);
    let ticks = ring_ticks(max);

    for tick in &ticks {
        let ring = (0..count)
            .map(|index| radar_point(center, radius, index, count, *tick, max))
            .collect::<Vec<_>>();
        painter.add(Shape::closed_line(ring, Stroke::new(1.0, GRID_COLOR)));
        painter.text(
            radar_point(center, radius, 0, count, *tick, max) + vec2(4.0, 0.0),
            Align2::LEFT_CENTER,
            format_score(*tick),
            FontId::proportional(10.0),
            AXIS_COLOR,
        );
    }

    for (index, entry) in entries.iter().enumerate() {
        let direction = spoke_direction(index, count);
        painter.line_segment(
            [center, center + direction * radius],
            Stroke::new(1.0, GRID_COLOR),
        );
        painter.text(
            center + direction * (radius + LABEL_GAP),
            label_anchor(direction),
            entry.label.as_str(),
            FontId::proportional(11.0),
            TEXT_COLOR,
        );
    }

    let points = values
        .iter()
        .enumerate()
        .map(|(index, value)| radar_point(center, radius, index, count, *value, max))
        .collect::<Vec<_>>();

    // Fan of triangles around the center; the polygon is star-shaped but
    // not necessarily convex.
    let fill = with_alpha(SERIES_COLOR, 60);
    for index in 0..count {
        let next = (index + 1) % count;
        painter.add(Shape::convex_polygon(
            vec![center, points[index], points[next]],
            fill,
            Stroke::NONE,
        ));
    }
    painter.add(Shape::closed_line(points.clone(), Stroke::new(2.0, SERIES_COLOR)));

    let hovered = response.hover_pos().and_then(|pos| {
        points
            .iter()
            .position(|point| point.distance(pos) <= HOVER_RADIUS)
    });

    for (index, point) in points.iter().enumerate() {
        let color = if hovered == Some(index) {
            HIGHLIGHT_COLOR
        } else {
            SERIES_COLOR
        };
        painter.circle_filled(*point, MARKER_RADIUS, color);
    }

    if let Some(entry) = hovered.and_then(|index| entries.get(index)) {
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(format!("{}: {}", entry.label, format_score(entry.value)));
            ui.weak(entry.id);
        });
    }
}
