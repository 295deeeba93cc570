//! Configuration module for the sentiment dashboard.

pub mod plot;
pub mod schema;
pub mod sessions;
pub mod source;

// Re-export commonly used items
pub use plot::{CHART_STYLE, ChartStyle};
pub use schema::{COMPACT_SCHEMA, CsvSchema, STANDARD_SCHEMA};
pub use sessions::{SESSION_PALETTE, SessionPalette};
pub use source::{APP_STATE_PATH, DEFAULT_CSV_PATH};
