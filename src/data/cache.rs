use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::schema::CsvSchema;
use crate::data::loader::parse_table;
use crate::data::source::{DataSource, fetch_bytes};
use crate::domain::record::SentimentTable;
use crate::pipeline::PipelineError;

/// Process-wide load-once, reuse-many table cache keyed by source identity.
///
/// Sources are treated as immutable for the lifetime of the process, so
/// there is no invalidation path. The mutex guards the map only; tables are
/// shared out as `Arc`s and never mutated after parsing.
#[derive(Default)]
pub struct TableCache {
    tables: Mutex<HashMap<String, Arc<SentimentTable>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `source`, fetching and parsing it on the
    /// first request.
    pub async fn get_or_load(
        &self,
        source: &DataSource,
        schema: &CsvSchema,
    ) -> Result<Arc<SentimentTable>, PipelineError> {
        let key = source.cache_key();

        if let Some(table) = self.tables.lock().expect("cache mutex poisoned").get(&key) {
            return Ok(Arc::clone(table));
        }

        let bytes = fetch_bytes(source).await?;
        let table = Arc::new(parse_table(&bytes, schema)?);
        log::info!("Cached table for {} ({} records)", key, table.len());

        self.tables
            .lock()
            .expect("cache mutex poisoned")
            .insert(key, Arc::clone(&table));
        Ok(table)
    }
}
