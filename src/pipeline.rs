use std::fmt;

use chrono::NaiveDateTime;

use crate::analysis::{aggregate, filter_by_range};
use crate::chart::{ChartSpec, compose_chart};
use crate::config::plot::ChartStyle;
use crate::config::sessions::SessionPalette;
use crate::domain::date_range::DateRange;
use crate::domain::record::SentimentRecord;

/// Error types for pipeline operations.
///
/// Every failure mode the pipeline can hit is a variant here so the UI can
/// decide how to present it. `EmptyRange` is the one non-fatal case.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// CSV structure or a value in it did not match the configured schema
    Parse(String),
    /// The raw CSV bytes could not be obtained from the source
    Fetch(String),
    /// Range selection with start after end
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// No records fall inside the selected range
    EmptyRange,
    /// The composed spec is structurally unusable by the rendering sink
    Render(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Parse(msg) => write!(f, "CSV parse failed: {}", msg),
            PipelineError::Fetch(msg) => write!(f, "Could not load data source: {}", msg),
            PipelineError::InvalidRange { start, end } => write!(
                f,
                "Start datetime {} is after end datetime {}",
                start.format("%Y-%m-%d %H:%M:%S"),
                end.format("%Y-%m-%d %H:%M:%S")
            ),
            PipelineError::EmptyRange => {
                write!(f, "No data available for the selected datetime range")
            }
            PipelineError::Render(msg) => write!(f, "Chart could not be rendered: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

impl PipelineError {
    /// `EmptyRange` is an informational notice; everything else blocks.
    pub fn is_warning(&self) -> bool {
        matches!(self, PipelineError::EmptyRange)
    }
}

/// One full filter -> aggregate -> compose cycle.
///
/// Pure function of its inputs: running it twice with the same records and
/// range yields an identical `ChartSpec`. The caller owns the range
/// validation (`DateRange::new` rejects start > end before we get here).
pub fn run(
    records: &[SentimentRecord],
    range: &DateRange,
    style: &ChartStyle,
    palette: &SessionPalette,
) -> Result<ChartSpec, PipelineError> {
    let filtered = filter_by_range(records, range);
    if filtered.is_empty() {
        return Err(PipelineError::EmptyRange);
    }

    let totals = aggregate(&filtered)?;
    // "NaN" and "inf" parse as perfectly good floats, so they can reach
    // this point; a spec built from them would draw garbage.
    if !totals.total_bullish.is_finite() || !totals.total_bearish_abs.is_finite() {
        return Err(PipelineError::Render(format!(
            "non-finite totals (bullish {}, bearish {})",
            totals.total_bullish, totals.total_bearish_abs
        )));
    }
    Ok(compose_chart(&filtered, &totals, range, style, palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::plot::CHART_STYLE;
    use crate::config::sessions::SESSION_PALETTE;
    use crate::domain::session::Session;
    use chrono::NaiveDate;

    fn record(day: u32, hour: u32, bullish: f64, bearish: f64) -> SentimentRecord {
        SentimentRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            bullish,
            bearish,
            session: Some(Session::AsiaOpen),
        }
    }

    fn range(start_day: u32, end_day: u32) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, start_day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, end_day)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_filter_result_is_a_warning() {
        let records = vec![record(1, 6, 0.5, -0.2)];
        // Range entirely after the only record
        let err = run(&records, &range(10, 12), &CHART_STYLE, &SESSION_PALETTE).unwrap_err();
        assert_eq!(err, PipelineError::EmptyRange);
        assert!(err.is_warning(), "empty range must be non-fatal");
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let records = vec![
            record(1, 6, 0.5, -0.2),
            record(1, 10, 0.3, -0.4),
            record(2, 6, 0.8, -0.1),
        ];
        let r = range(1, 2);
        let first = run(&records, &r, &CHART_STYLE, &SESSION_PALETTE).unwrap();
        let second = run(&records, &r, &CHART_STYLE, &SESSION_PALETTE).unwrap();
        assert_eq!(first, second, "identical inputs must produce an identical spec");
    }

    #[test]
    fn test_non_finite_rates_fail_as_render_error() {
        let mut poisoned = record(1, 6, 0.5, -0.2);
        poisoned.bullish = f64::NAN;
        let err = run(&[poisoned], &range(1, 2), &CHART_STYLE, &SESSION_PALETTE).unwrap_err();
        assert!(matches!(err, PipelineError::Render(_)));
    }

    #[test]
    fn test_full_span_round_trip_reproduces_unfiltered_totals() {
        use crate::analysis::aggregate;
        use crate::config::schema::STANDARD_SCHEMA;
        use crate::data::loader::parse_table;

        let csv = "\
Date,Time,Positive Funding Rate,Negative Funding Rate,Session
2024-03-02,09:30:00,0.021,-0.003,Asia Session (9.30 am)
2024-03-01,05:30:00,0.012,-0.004,Asia Session (5.30 am)
2024-03-03,13:30:00,0.002,-0.011,UK Session (1.30 pm)
";
        let table = parse_table(csv.as_bytes(), &STANDARD_SCHEMA).unwrap();
        let unfiltered = aggregate(table.records()).unwrap();

        let (earliest, latest) = table.time_span().unwrap();
        let full_span = DateRange::new(earliest, latest).unwrap();
        let filtered = crate::analysis::filter_by_range(table.records(), &full_span);
        let refiltered = aggregate(&filtered).unwrap();

        assert_eq!(refiltered, unfiltered, "min/max range must keep every record");
    }

    #[test]
    fn test_invalid_range_is_rejected_before_filtering() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = DateRange::new(start, end).unwrap_err();
        assert_eq!(err, PipelineError::InvalidRange { start, end });
        assert!(!err.is_warning());
    }
}
