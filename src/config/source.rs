//! Data source defaults

/// Default local dataset path, relative to the working directory.
/// `make_sample_csv` writes a file in this shape.
pub const DEFAULT_CSV_PATH: &str = "crypto_data.csv";

/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";
