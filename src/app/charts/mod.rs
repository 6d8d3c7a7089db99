mod bar;
mod radar;

pub(super) use bar::draw_bar_chart;
pub(super) use radar::draw_radar_chart;

pub(super) const CHART_HEIGHT: f32 = 300.0;
pub(super) const MIN_CHART_WIDTH: f32 = 120.0;

pub(super) fn chart_title(symbol: &str) -> String {
    format!("Data type scores for {symbol}")
}
