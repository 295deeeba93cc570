use eframe::egui::Color32;

use crate::domain::session::Session;

/// One slice of the proportion panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionSlice {
    pub label: &'static str,
    pub value: f64,
    /// Share of the grand total, 0..=100, already resolved against the
    /// zero-total degenerate case (0.0 instead of NaN).
    pub pct: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProportionPanel {
    pub title: &'static str,
    pub slices: [ProportionSlice; 2],
    /// Degrees counterclockwise from 3 o'clock where the first wedge starts
    pub start_angle_deg: f64,
}

impl ProportionPanel {
    /// True when there is nothing to sweep: both slices are zero.
    pub fn is_degenerate(&self) -> bool {
        self.slices.iter().all(|slice| slice.value == 0.0)
    }
}

/// One record's up/down bar pair. Bars sit at their record index, evenly
/// spaced by row order rather than by elapsed time, which keeps windows
/// with irregular sampling readable.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentBar {
    pub index: usize,
    pub bullish: f64,
    pub bearish: f64,
}

/// Full-height background rectangle behind one bar, colored by session.
/// Only records with a recognized session produce a band.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionBand {
    pub index: usize,
    pub session: Session,
    pub color: Color32,
}

/// A labelled x-axis position. Unlisted indices stay unticked.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownPanel {
    pub title: &'static str,
    pub bars: Vec<SentimentBar>,
    pub bands: Vec<SessionBand>,
    pub ticks: Vec<AxisTick>,
    pub y_min: f64,
    pub y_max: f64,
    /// Bar (and band) width in index units
    pub bar_width: f64,
}

/// The fully resolved two-panel figure.
///
/// This is the contract boundary to the rendering sink: the view draws from
/// the spec alone and never reaches back into raw records. Identical
/// pipeline inputs produce an identical spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    /// "Data from {start} to {end}"
    pub subtitle: String,
    pub proportion: ProportionPanel,
    pub breakdown: BreakdownPanel,
}
