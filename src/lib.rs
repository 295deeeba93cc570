// Core modules
pub mod analysis;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod pipeline;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::ChartSpec;
pub use data::{DataSource, TableCache};
pub use domain::{DateRange, SentimentRecord, SentimentTable, Session};
pub use pipeline::PipelineError;
pub use ui::SentimentApp;

use std::path::PathBuf;
use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

use crate::config::schema::{COMPACT_SCHEMA, CsvSchema, STANDARD_SCHEMA};
use crate::config::source::DEFAULT_CSV_PATH;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Local CSV file to load the dataset from
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Load the dataset from a remote CSV URL instead of a local file
    #[arg(long)]
    pub url: Option<String>,

    /// Use the compact column layout (Datetime/PositiveFR/NegativeFR)
    #[arg(long, default_value_t = false)]
    pub compact_columns: bool,
}

impl Cli {
    pub fn source(&self) -> DataSource {
        match &self.url {
            Some(url) => DataSource::Url(url.clone()),
            None => DataSource::File(self.csv.clone()),
        }
    }

    pub fn schema(&self) -> CsvSchema {
        if self.compact_columns {
            COMPACT_SCHEMA
        } else {
            STANDARD_SCHEMA
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    table: Arc<SentimentTable>,
    source: &DataSource,
) -> Box<dyn eframe::App> {
    let app = ui::SentimentApp::new(cc, table, source);
    Box::new(app)
}
