//! Chart styling configuration

use eframe::egui::Color32;

pub struct ChartStyle {
    /// Fill for upward bars and the bullish pie slice
    pub bullish_color: Color32,
    /// Fill for downward bars and the bearish pie slice
    pub bearish_color: Color32,
    /// Bar width in index units (bars sit at 0, 1, 2, ...)
    pub bar_width: f64,
    /// Opacity of the per-record session bands (0.0 = invisible, 1.0 = opaque)
    pub band_opacity: f32,
    /// Rough number of labelled ticks on the breakdown x-axis; the actual
    /// stride is `max(1, record_count / tick_target)`
    pub tick_target: usize,
    /// Where the first pie wedge starts, degrees counterclockwise from 3 o'clock
    pub wedge_start_angle_deg: f64,
    /// Arc resolution when approximating a wedge with a polygon
    pub wedge_segments_per_degree: f64,
    /// Radius of the percentage label position, as a fraction of the pie radius
    pub wedge_label_radius_pct: f64,
}

pub const CHART_STYLE: ChartStyle = ChartStyle {
    bullish_color: Color32::from_rgb(0, 169, 165),  // Teal
    bearish_color: Color32::from_rgb(178, 58, 72),  // Crimson
    bar_width: 0.8,
    band_opacity: 0.3,
    tick_target: 10,
    wedge_start_angle_deg: 140.0,
    wedge_segments_per_degree: 0.5,
    wedge_label_radius_pct: 0.6,
};
