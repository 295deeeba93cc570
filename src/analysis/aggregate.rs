use crate::domain::record::SentimentRecord;
use crate::pipeline::PipelineError;

/// Headroom multiplier applied to the breakdown panel's y extremes so the
/// tallest bars never touch the plot frame.
const AXIS_HEADROOM: f64 = 1.2;

/// Bullish/bearish totals over a filtered window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    /// Sum of the positive funding rates
    pub total_bullish: f64,
    /// Absolute value of the summed negative funding rates
    pub total_bearish_abs: f64,
}

impl AggregateResult {
    pub fn grand_total(&self) -> f64 {
        self.total_bullish + self.total_bearish_abs
    }
}

/// Sum the filtered window into the two sentiment magnitudes.
///
/// The bearish side sums the signed values first and takes the absolute
/// value of the sum, not the sum of absolute values. With the sign
/// convention enforced at load the two coincide, but the signed-sum order
/// is the documented semantics the proportion chart reproduces.
pub fn aggregate(records: &[SentimentRecord]) -> Result<AggregateResult, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::EmptyRange);
    }

    let total_bullish: f64 = records.iter().map(|record| record.bullish).sum();
    let bearish_sum: f64 = records.iter().map(|record| record.bearish).sum();

    Ok(AggregateResult {
        total_bullish,
        total_bearish_abs: bearish_sum.abs(),
    })
}

/// Y-axis bounds for the breakdown panel:
/// lower = `min(0, min(bearish)) * 1.2`, upper = `max(bullish) * 1.2`.
///
/// Callers filter the empty case out before getting here (see `aggregate`).
pub fn breakdown_y_bounds(records: &[SentimentRecord]) -> (f64, f64) {
    debug_assert!(!records.is_empty(), "bounds of an empty window");

    let min_bearish = records
        .iter()
        .map(|record| record.bearish)
        .fold(f64::INFINITY, f64::min);
    let max_bullish = records
        .iter()
        .map(|record| record.bullish)
        .fold(f64::NEG_INFINITY, f64::max);

    (min_bearish.min(0.0) * AXIS_HEADROOM, max_bullish * AXIS_HEADROOM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(bullish: f64, bearish: f64) -> SentimentRecord {
        SentimentRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(5, 30, 0)
                .unwrap(),
            bullish,
            bearish,
            session: None,
        }
    }

    #[test]
    fn test_totals_match_reference_example() {
        // bullish [1,2,3], bearish [-1,-2] -> 6 and |-3| = 3
        let records = vec![
            record(1.0, -1.0),
            record(2.0, -2.0),
            record(3.0, 0.0),
        ];
        let totals = aggregate(&records).unwrap();
        assert_eq!(totals.total_bullish, 6.0);
        assert_eq!(totals.total_bearish_abs, 3.0);
        assert_eq!(totals.grand_total(), 9.0);
    }

    #[test]
    fn test_empty_window_is_an_error() {
        assert_eq!(aggregate(&[]).unwrap_err(), PipelineError::EmptyRange);
    }

    #[test]
    fn test_y_bounds_apply_headroom_both_ways() {
        let records = vec![record(0.5, -0.25), record(1.0, -0.1)];
        let (lower, upper) = breakdown_y_bounds(&records);
        assert!((lower - (-0.3)).abs() < 1e-12, "min(0, -0.25) * 1.2");
        assert!((upper - 1.2).abs() < 1e-12, "1.0 * 1.2");
    }

    #[test]
    fn test_y_lower_bound_is_clamped_to_zero() {
        // No bearish values below zero: the floor stays at 0, not at
        // 1.2 * smallest-positive.
        let records = vec![record(0.5, 0.0), record(1.0, 0.0)];
        let (lower, _) = breakdown_y_bounds(&records);
        assert_eq!(lower, 0.0);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![record(0.4, -0.3), record(0.1, -0.2)];
        assert_eq!(aggregate(&records).unwrap(), aggregate(&records).unwrap());
    }
}
