use std::f32::consts::FRAC_PI_2;

use eframe::egui::epaint::TextShape;
use eframe::egui::{Color32, FontId, Painter, Pos2, Rect, Stroke, vec2};

pub(super) const CHART_BACKGROUND: Color32 = Color32::from_rgb(19, 23, 29);
pub(super) const GRID_COLOR: Color32 = Color32::from_rgba_premultiplied(42, 49, 56, 70);
pub(super) const AXIS_COLOR: Color32 = Color32::from_rgb(120, 132, 145);
pub(super) const TEXT_COLOR: Color32 = Color32::from_rgb(205, 212, 220);
pub(super) const SERIES_COLOR: Color32 = Color32::from_rgb(92, 160, 230);
pub(super) const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(250, 196, 70);

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub(super) fn draw_chart_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 4.0, CHART_BACKGROUND);
}

pub(super) fn draw_title(painter: &Painter, rect: Rect, title: &str) {
    painter.text(
        Pos2::new(rect.center().x, rect.top() + 12.0),
        eframe::egui::Align2::CENTER_CENTER,
        title,
        FontId::proportional(14.0),
        TEXT_COLOR,
    );
}

/// Draws `text` rotated a quarter turn counter-clockwise, centered on `center`.
pub(super) fn draw_vertical_text(painter: &Painter, center: Pos2, text: &str, font: FontId) {
    let galley = painter.layout_no_wrap(text.to_owned(), font, TEXT_COLOR);
    let size = galley.size();
    let anchor = center + vec2(-size.y * 0.5, size.x * 0.5);
    painter.add(TextShape::new(anchor, galley, TEXT_COLOR).with_angle(-FRAC_PI_2));
}

pub(super) fn grid_line(painter: &Painter, from: Pos2, to: Pos2) {
    painter.line_segment([from, to], Stroke::new(1.0, GRID_COLOR));
}

/// Cold-to-warm tint for a score in [0, 1], used for the score column.
pub(super) fn score_color(score: f64) -> Color32 {
    let t = score.clamp(0.0, 1.0) as f32;
    let r = (55.0 + (190.0 * t)) as u8;
    let g = (150.0 - (40.0 * t)) as u8;
    let b = (215.0 - (155.0 * t)) as u8;
    Color32::from_rgb(r, g, b)
}
