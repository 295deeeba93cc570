// Chart composition: filtered records + totals -> drawing instructions
pub mod compose;
pub mod spec;

// Re-export commonly used types
pub use compose::compose_chart;
pub use spec::{AxisTick, BreakdownPanel, ChartSpec, ProportionPanel, SentimentBar, SessionBand};
