use eframe::egui::{self, RichText, Stroke};
use egui_plot::{
    AxisHints, Bar, BarChart, Corner, GridMark, HPlacement, Legend, Plot, PlotPoint, PlotPoints,
    Polygon, Text,
};

use crate::chart::spec::{BreakdownPanel, ChartSpec, ProportionPanel};
use crate::config::plot::ChartStyle;
use crate::ui::config::UI_CONFIG;

/// Pie radius in plot units. Arbitrary as long as the bounds scale with it.
const WEDGE_RADIUS: f64 = 1.2;

/// The rendering sink.
///
/// Draws a composed `ChartSpec` and nothing else: no raw records, no
/// re-aggregation, so the view can never disagree with the pipeline. All
/// geometry here is presentation; everything with semantics happened in
/// `chart::compose`.
pub struct ChartView;

impl ChartView {
    pub fn show(ui: &mut egui::Ui, spec: &ChartSpec, style: &ChartStyle) {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new(spec.title)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label(
                RichText::new(&spec.subtitle)
                    .small()
                    .color(UI_CONFIG.colors.label),
            );
        });

        // Roughly the original's 1.1 : 1.4 vertical split
        let available = ui.available_height();
        Self::show_proportion(ui, &spec.proportion, style, available * 0.42);
        ui.add_space(8.0);
        let remaining = ui.available_height();
        Self::show_breakdown(ui, &spec.breakdown, style, remaining);
    }

    fn show_proportion(ui: &mut egui::Ui, panel: &ProportionPanel, style: &ChartStyle, height: f32) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(panel.title)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
        });

        let slices = panel.slices.clone();
        let degenerate = panel.is_degenerate();
        let start_angle = panel.start_angle_deg;
        let label_radius = WEDGE_RADIUS * style.wedge_label_radius_pct;
        let segments_per_degree = style.wedge_segments_per_degree;

        Plot::new("proportion_panel")
            .height(height)
            .data_aspect(1.0)
            .show_axes([false, false])
            .show_grid([false, false])
            .legend(Legend::default().position(Corner::RightTop))
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-1.6..=1.6);
                plot_ui.set_plot_bounds_y(-1.6..=1.6);

                if degenerate {
                    // Nothing to sweep; state the 0.00%/0.00% outcome instead
                    // of drawing an empty circle.
                    for (slice, y) in slices.iter().zip([0.2, -0.2]) {
                        plot_ui.text(Text::new(
                            slice.label,
                            PlotPoint::new(0.0, y),
                            RichText::new(format!("{}: {:.2}%", slice.label, slice.pct))
                                .size(13.0)
                                .color(UI_CONFIG.colors.heading),
                        ));
                    }
                    return;
                }

                let mut angle = start_angle;
                for slice in &slices {
                    let sweep = slice.pct / 100.0 * 360.0;
                    if sweep <= 0.0 {
                        continue;
                    }

                    let points = wedge_points(WEDGE_RADIUS, angle, sweep, segments_per_degree);
                    plot_ui.polygon(
                        Polygon::new(slice.label, PlotPoints::new(points))
                            .fill_color(slice.color)
                            .stroke(Stroke::new(1.2, UI_CONFIG.colors.central_panel)),
                    );

                    let mid = (angle + sweep / 2.0).to_radians();
                    plot_ui.text(Text::new(
                        slice.label,
                        PlotPoint::new(label_radius * mid.cos(), label_radius * mid.sin()),
                        RichText::new(format!("{:.2}%", slice.pct))
                            .size(13.0)
                            .strong()
                            .color(UI_CONFIG.colors.central_panel),
                    ));

                    angle += sweep;
                }
            });
    }

    fn show_breakdown(ui: &mut egui::Ui, panel: &BreakdownPanel, style: &ChartStyle, height: f32) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(panel.title)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
        });

        let (y_min, y_max) = padded_bounds(panel);
        let x_max = panel.bars.len() as f64 - 0.5;

        let tick_labels: Vec<(usize, String)> = panel
            .ticks
            .iter()
            .map(|tick| (tick.index, tick.label.clone()))
            .collect();
        let tick_positions = tick_labels.clone();

        let x_axis = AxisHints::new_x()
            .label("Datetime")
            .formatter(move |grid_mark: GridMark, _range| {
                let index = grid_mark.value.round() as i64;
                tick_labels
                    .iter()
                    .find(|(tick_index, _)| *tick_index as i64 == index)
                    .map(|(_, label)| label.clone())
                    .unwrap_or_default()
            });
        let y_axis = AxisHints::new_y()
            .label("Sentiment")
            .placement(HPlacement::Left);

        let bullish_bars: Vec<Bar> = panel
            .bars
            .iter()
            .map(|bar| Bar::new(bar.index as f64, bar.bullish).width(panel.bar_width))
            .collect();
        let bearish_bars: Vec<Bar> = panel
            .bars
            .iter()
            .map(|bar| Bar::new(bar.index as f64, bar.bearish).width(panel.bar_width))
            .collect();

        let half_band = panel.bar_width / 2.0;
        let bands = panel.bands.clone();
        let band_opacity = style.band_opacity;

        Plot::new("breakdown_panel")
            .height(height)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .label_formatter(|_, _| String::new())
            // Grid lines only where the thinned ticks are
            .x_grid_spacer(move |_input| {
                tick_positions
                    .iter()
                    .map(|(tick_index, _)| GridMark {
                        value: *tick_index as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-0.5..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                // Session bands first so the bars draw over them. One name
                // per session gives one legend entry per session.
                for band in &bands {
                    let x = band.index as f64;
                    let points = PlotPoints::new(vec![
                        [x - half_band, y_min],
                        [x + half_band, y_min],
                        [x + half_band, y_max],
                        [x - half_band, y_max],
                    ]);
                    plot_ui.polygon(
                        Polygon::new(band.session.label(), points)
                            .fill_color(band.color.linear_multiply(band_opacity))
                            .stroke(Stroke::NONE),
                    );
                }

                plot_ui.bar_chart(
                    BarChart::new(crate::chart::compose::BULLISH_LABEL, bullish_bars)
                        .color(style.bullish_color),
                );
                plot_ui.bar_chart(
                    BarChart::new(crate::chart::compose::BEARISH_LABEL, bearish_bars)
                        .color(style.bearish_color),
                );
            });
    }
}

/// A zero-height viewport is unusable; give an all-zero window a unit of
/// air instead.
fn padded_bounds(panel: &BreakdownPanel) -> (f64, f64) {
    if panel.y_max - panel.y_min <= f64::EPSILON {
        (panel.y_min - 1.0, panel.y_max + 1.0)
    } else {
        (panel.y_min, panel.y_max)
    }
}

/// Approximate a pie wedge with a fan polygon anchored at the origin.
/// Sweep runs counterclockwise, matching the source charts.
fn wedge_points(radius: f64, start_deg: f64, sweep_deg: f64, per_degree: f64) -> Vec<[f64; 2]> {
    let segments = ((sweep_deg * per_degree).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let angle = (start_deg + sweep_deg * i as f64 / segments as f64).to_radians();
        points.push([radius * angle.cos(), radius * angle.sin()]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_fan_is_anchored_at_origin() {
        let points = wedge_points(1.0, 140.0, 180.0, 0.5);
        assert_eq!(points[0], [0.0, 0.0]);
        // Every rim point sits on the circle
        for point in &points[1..] {
            let r = (point[0] * point[0] + point[1] * point[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tiny_sweeps_still_get_a_fan() {
        // A sliver of a slice must stay a polygon, not collapse to a line
        let points = wedge_points(1.0, 0.0, 0.5, 0.5);
        assert!(points.len() >= 4, "anchor plus at least three rim points");
    }
}
