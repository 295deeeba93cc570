// Data loading and caching
pub mod cache;
pub mod loader;
pub mod source;

// Re-export commonly used types
pub use cache::TableCache;
pub use loader::parse_table;
pub use source::{DataSource, fetch_bytes};
