//! CSV column-schema configuration
//!
//! The dataset exists in a couple of near-identical exports that only differ
//! in header names, so the loader takes an explicit mapping instead of
//! hardcoding columns. Header resolution happens once, up front, and a
//! missing column fails the whole load rather than producing half a table.

/// Maps the logical record fields onto CSV header names.
///
/// Either `datetime` names a single combined column, or `date` + `time`
/// name a split pair that gets joined with a space before parsing. Exactly
/// one of the two shapes must be configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CsvSchema {
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
    pub datetime: Option<&'static str>,
    pub bullish: &'static str,
    pub bearish: &'static str,
    pub session: &'static str,
    /// chrono format string for the (combined) timestamp
    pub datetime_format: &'static str,
}

/// The primary export: split date/time, spelled-out rate columns.
pub const STANDARD_SCHEMA: CsvSchema = CsvSchema {
    date: Some("Date"),
    time: Some("Time"),
    datetime: None,
    bullish: "Positive Funding Rate",
    bearish: "Negative Funding Rate",
    session: "Session",
    datetime_format: "%Y-%m-%d %H:%M:%S",
};

/// The compact export: one combined column, abbreviated rate names.
pub const COMPACT_SCHEMA: CsvSchema = CsvSchema {
    date: None,
    time: None,
    datetime: Some("Datetime"),
    bullish: "PositiveFR",
    bearish: "NegativeFR",
    session: "Session",
    datetime_format: "%Y-%m-%d %H:%M:%S",
};
