#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use sentiment_scope::config::APP_STATE_PATH;
use sentiment_scope::ui::UI_TEXT;
use sentiment_scope::{Cli, TableCache, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let source = args.source();
    let schema = args.schema();

    // C. Data Loading (Blocking). The cache is process-wide: the UI never
    // re-reads the source, it only ever filters this table.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let cache = TableCache::new();
    let table = match rt.block_on(cache.get_or_load(&source, &schema)) {
        Ok(table) => table,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    if table.is_empty() {
        log::warn!("Dataset {} parsed to zero records", source.describe());
    }

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, table, &source))),
    )
}
