use std::sync::Arc;

use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::chart::spec::ChartSpec;
use crate::config::plot::{CHART_STYLE, ChartStyle};
use crate::config::sessions::{SESSION_PALETTE, SessionPalette};
use crate::data::source::DataSource;
use crate::domain::date_range::DateRange;
use crate::domain::record::SentimentTable;
use crate::pipeline::{self, PipelineError};
use crate::ui::styles::setup_custom_visuals;
use crate::utils::time_utils::{INPUT_DATETIME_FORMAT, format_input_datetime, parse_input_datetime};

/// Parameters of one chart query.
///
/// `PartialEq` enables change detection: a repaint with unchanged inputs
/// reuses the cached spec instead of re-running the pipeline. A changed
/// query always replaces the previous result wholesale; nothing is merged.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub start_input: String,
    pub end_input: String,
}

pub struct SentimentApp {
    /// Shared immutable dataset (also held by the table cache)
    pub(super) table: Arc<SentimentTable>,
    pub(super) source_description: String,
    pub(super) style: &'static ChartStyle,
    pub(super) palette: &'static SessionPalette,

    // Sidebar inputs, kept as raw text until parse time
    pub(super) start_input: String,
    pub(super) end_input: String,

    last_params: Option<QueryParams>,
    pub(super) chart: Option<ChartSpec>,
    pub(super) last_error: Option<PipelineError>,
}

impl SentimentApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        table: Arc<SentimentTable>,
        source: &DataSource,
    ) -> Self {
        let mut app = Self::with_table(table, source.describe());

        // Restore the previous session's range selection when there is one
        let restored: Option<QueryParams> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        if let Some(params) = restored {
            app.start_input = params.start_input;
            app.end_input = params.end_input;
        }
        app
    }

    /// Constructor without the eframe context, with the default style and
    /// palette and the range seeded to the table's full span.
    pub fn with_table(table: Arc<SentimentTable>, source_description: String) -> Self {
        let (start_input, end_input) = full_span_inputs(&table);
        Self {
            table,
            source_description,
            style: &CHART_STYLE,
            palette: &SESSION_PALETTE,
            start_input,
            end_input,
            last_params: None,
            chart: None,
            last_error: None,
        }
    }

    pub(super) fn reset_range_to_span(&mut self) {
        let (start_input, end_input) = full_span_inputs(&self.table);
        self.start_input = start_input;
        self.end_input = end_input;
    }

    /// Parse the sidebar inputs into a validated range.
    fn parse_range(&self) -> Result<DateRange, PipelineError> {
        let start = parse_input_datetime(&self.start_input).ok_or_else(|| {
            PipelineError::Parse(format!(
                "start datetime '{}' must look like {}",
                self.start_input.trim(),
                INPUT_DATETIME_FORMAT
            ))
        })?;
        let end = parse_input_datetime(&self.end_input).ok_or_else(|| {
            PipelineError::Parse(format!(
                "end datetime '{}' must look like {}",
                self.end_input.trim(),
                INPUT_DATETIME_FORMAT
            ))
        })?;
        DateRange::new(start, end)
    }

    /// Re-run the pipeline when (and only when) the query changed.
    pub(super) fn refresh_chart(&mut self) {
        let params = QueryParams {
            start_input: self.start_input.clone(),
            end_input: self.end_input.clone(),
        };
        if self.last_params.as_ref() == Some(&params) {
            return;
        }
        self.last_params = Some(params);

        let outcome = self
            .parse_range()
            .and_then(|range| pipeline::run(self.table.records(), &range, self.style, self.palette));

        match outcome {
            Ok(spec) => {
                self.chart = Some(spec);
                self.last_error = None;
            }
            Err(err) => {
                if err.is_warning() {
                    log::info!("{}", err);
                } else {
                    log::warn!("Chart rebuild failed: {}", err);
                }
                self.chart = None;
                self.last_error = Some(err);
            }
        }
    }
}

fn full_span_inputs(table: &SentimentTable) -> (String, String) {
    match table.time_span() {
        Some((earliest, latest)) => (
            format_input_datetime(earliest),
            format_input_datetime(latest),
        ),
        None => (String::new(), String::new()),
    }
}

impl eframe::App for SentimentApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(params) = &self.last_params {
            eframe::set_value(storage, eframe::APP_KEY, params);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.refresh_chart();

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::SentimentRecord;
    use chrono::NaiveDate;

    fn table() -> Arc<SentimentTable> {
        let records = (0..3)
            .map(|day| SentimentRecord {
                timestamp: NaiveDate::from_ymd_opt(2024, 3, day + 1)
                    .unwrap()
                    .and_hms_opt(5, 30, 0)
                    .unwrap(),
                bullish: 0.5,
                bearish: -0.25,
                session: None,
            })
            .collect();
        Arc::new(SentimentTable::new(records))
    }

    #[test]
    fn test_inputs_seed_from_the_table_span() {
        let app = SentimentApp::with_table(table(), "test".into());
        assert_eq!(app.start_input, "2024-03-01 05:30:00");
        assert_eq!(app.end_input, "2024-03-03 05:30:00");
    }

    #[test]
    fn test_unchanged_query_reuses_the_cached_spec() {
        let mut app = SentimentApp::with_table(table(), "test".into());
        app.refresh_chart();
        let first = app.chart.clone().expect("full span should chart");

        app.refresh_chart();
        let second = app.chart.clone().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reversed_inputs_surface_invalid_range() {
        let mut app = SentimentApp::with_table(table(), "test".into());
        app.start_input = "2024-03-03 00:00:00".into();
        app.end_input = "2024-03-01 00:00:00".into();
        app.refresh_chart();

        assert!(app.chart.is_none(), "no chart on invalid range");
        assert!(matches!(
            app.last_error,
            Some(PipelineError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_garbled_input_surfaces_parse_error() {
        let mut app = SentimentApp::with_table(table(), "test".into());
        app.start_input = "yesterday-ish".into();
        app.refresh_chart();
        assert!(matches!(app.last_error, Some(PipelineError::Parse(_))));
    }

    #[test]
    fn test_out_of_data_range_is_a_warning_not_an_error() {
        let mut app = SentimentApp::with_table(table(), "test".into());
        app.start_input = "2030-01-01 00:00:00".into();
        app.end_input = "2030-01-02 00:00:00".into();
        app.refresh_chart();
        assert_eq!(app.last_error, Some(PipelineError::EmptyRange));
    }
}
