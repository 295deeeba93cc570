use eframe::egui::{
    CentralPanel, Context, Frame, Margin, Sense, SidePanel, TopBottomPanel, Ui, vec2,
};
use strum::IntoEnumIterator;

use crate::domain::session::Session;
use crate::ui::chart_view::ChartView;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

use super::app::SentimentApp;

impl SentimentApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(10));
        SidePanel::left("range_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ui.label_header(UI_TEXT.range_heading);

                ui.label_subdued(UI_TEXT.start_label);
                ui.text_edit_singleline(&mut self.start_input);
                ui.add_space(4.0);
                ui.label_subdued(UI_TEXT.end_label);
                ui.text_edit_singleline(&mut self.end_input);
                ui.label_subdued(format!("Format: {}", UI_TEXT.input_format_hint));

                ui.add_space(6.0);
                if ui.button(UI_TEXT.reset_button).clicked() {
                    self.reset_range_to_span();
                }

                ui.separator();
                self.render_session_legend(ui);

                ui.separator();
                ui.label_header(UI_TEXT.source_heading);
                ui.label_subdued(self.source_description.clone());
                ui.metric(
                    "Loaded records",
                    &self.table.len().to_string(),
                    UI_CONFIG.colors.heading,
                );
            });
    }

    fn render_session_legend(&self, ui: &mut Ui) {
        ui.label_header(UI_TEXT.legend_heading);
        let swatch = vec2(UI_CONFIG.legend_swatch_size, UI_CONFIG.legend_swatch_size);
        for session in Session::iter() {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(swatch, Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2, self.palette.color(session));
                ui.label_subdued(session.label());
            });
        }
    }

    pub(super) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            match (&self.last_error, &self.chart) {
                (Some(err), _) if err.is_warning() => {
                    ui.label_warning(err.to_string());
                }
                (Some(err), _) => {
                    ui.label_error(err.to_string());
                }
                (None, Some(spec)) => {
                    ui.horizontal(|ui| {
                        ui.metric(
                            UI_TEXT.records_metric,
                            &spec.breakdown.bars.len().to_string(),
                            UI_CONFIG.colors.heading,
                        );
                        let [bullish, bearish] = &spec.proportion.slices;
                        ui.metric(
                            UI_TEXT.bullish_metric,
                            &format!("{:.4}", bullish.value),
                            bullish.color,
                        );
                        ui.metric(
                            UI_TEXT.bearish_metric,
                            &format!("{:.4}", bearish.value),
                            bearish.color,
                        );
                    });
                }
                (None, None) => {
                    ui.label_subdued(UI_TEXT.no_chart_placeholder);
                }
            }
        });
    }

    pub(super) fn render_central_panel(&self, ctx: &Context) {
        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| match &self.chart {
                Some(spec) => ChartView::show(ui, spec, self.style),
                None => {
                    ui.centered_and_justified(|ui| {
                        // The status panel carries the specifics; this keeps
                        // the canvas from being plain blank.
                        ui.label_subdued(UI_TEXT.no_chart_placeholder);
                    });
                }
            });
    }
}
