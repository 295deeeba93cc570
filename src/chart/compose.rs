use crate::analysis::aggregate::{AggregateResult, breakdown_y_bounds};
use crate::config::plot::ChartStyle;
use crate::config::sessions::SessionPalette;
use crate::domain::date_range::DateRange;
use crate::domain::record::SentimentRecord;

use super::spec::{
    AxisTick, BreakdownPanel, ChartSpec, ProportionPanel, ProportionSlice, SentimentBar,
    SessionBand,
};

pub const FIGURE_TITLE: &str = "Retail Market Sentiment Analysis";
pub const PROPORTION_TITLE: &str = "Retailer Sentiment Indicator";
pub const BREAKDOWN_TITLE: &str = "Intra-session Sentiment Breakdown";
pub const BULLISH_LABEL: &str = "Retailer Bullish";
pub const BEARISH_LABEL: &str = "Retailer Bearish";

/// Compact day+time stamp for thinned axis ticks, e.g. "01 Mar\n05:30"
const TICK_LABEL_FORMAT: &str = "%d %b\n%H:%M";
/// Range subtitle stamp, e.g. "01-Mar-2024"
const SUBTITLE_DATE_FORMAT: &str = "%d-%b-%Y";

/// Build the two-panel figure from an already-filtered, non-empty window.
///
/// Stateless and side-effect free; the records are only read. Callers hold
/// the non-empty guarantee (`aggregate` has already succeeded on the same
/// window).
pub fn compose_chart(
    records: &[SentimentRecord],
    totals: &AggregateResult,
    range: &DateRange,
    style: &ChartStyle,
    palette: &SessionPalette,
) -> ChartSpec {
    ChartSpec {
        title: FIGURE_TITLE,
        subtitle: format!(
            "Data from {} to {}",
            range.start().format(SUBTITLE_DATE_FORMAT),
            range.end().format(SUBTITLE_DATE_FORMAT)
        ),
        proportion: proportion_panel(totals, style),
        breakdown: breakdown_panel(records, style, palette),
    }
}

fn proportion_panel(totals: &AggregateResult, style: &ChartStyle) -> ProportionPanel {
    let grand_total = totals.grand_total();
    ProportionPanel {
        title: PROPORTION_TITLE,
        slices: [
            ProportionSlice {
                label: BULLISH_LABEL,
                value: totals.total_bullish,
                pct: slice_pct(totals.total_bullish, grand_total),
                color: style.bullish_color,
            },
            ProportionSlice {
                label: BEARISH_LABEL,
                value: totals.total_bearish_abs,
                pct: slice_pct(totals.total_bearish_abs, grand_total),
                color: style.bearish_color,
            },
        ],
        start_angle_deg: style.wedge_start_angle_deg,
    }
}

/// All-zero totals degrade to 0%/0% instead of dividing by zero.
fn slice_pct(value: f64, grand_total: f64) -> f64 {
    if grand_total == 0.0 {
        0.0
    } else {
        value / grand_total * 100.0
    }
}

fn breakdown_panel(
    records: &[SentimentRecord],
    style: &ChartStyle,
    palette: &SessionPalette,
) -> BreakdownPanel {
    let bars = records
        .iter()
        .enumerate()
        .map(|(index, record)| SentimentBar {
            index,
            bullish: record.bullish,
            bearish: record.bearish,
        })
        .collect();

    // Records with an unrecognized session label get no band but keep
    // their bar (and their share of the totals).
    let bands = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record.session.map(|session| SessionBand {
                index,
                session,
                color: palette.color(session),
            })
        })
        .collect();

    let (y_min, y_max) = breakdown_y_bounds(records);

    BreakdownPanel {
        title: BREAKDOWN_TITLE,
        bars,
        bands,
        ticks: thin_ticks(records, style.tick_target),
        y_min,
        y_max,
        bar_width: style.bar_width,
    }
}

/// Label every `max(1, n / target)`-th bar so a dense window does not crowd
/// the axis. A readability heuristic only; the bars themselves are never
/// thinned.
fn thin_ticks(records: &[SentimentRecord], target: usize) -> Vec<AxisTick> {
    let stride = (records.len() / target).max(1);
    records
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(index, record)| AxisTick {
            index,
            label: record.timestamp.format(TICK_LABEL_FORMAT).to_string(),
        })
        .collect()
}
