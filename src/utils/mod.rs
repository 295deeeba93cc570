// Small shared helpers
pub mod time_utils;

pub use time_utils::{INPUT_DATETIME_FORMAT, format_input_datetime, parse_input_datetime};
