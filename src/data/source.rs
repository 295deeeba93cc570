use std::path::PathBuf;

use crate::pipeline::PipelineError;

/// Where the raw CSV bytes come from.
///
/// All three shapes go through the same decode path; a `Bytes` source is
/// what a host passes for an uploaded file it already holds in memory.
#[derive(Debug, Clone)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
    Bytes { name: String, data: Vec<u8> },
}

impl DataSource {
    /// Stable identity used as the table-cache key. A source is treated as
    /// immutable within a run, so identity is all the cache needs.
    pub fn cache_key(&self) -> String {
        match self {
            DataSource::Url(url) => format!("url:{}", url),
            DataSource::File(path) => format!("file:{}", path.display()),
            DataSource::Bytes { name, .. } => format!("bytes:{}", name),
        }
    }

    /// Short human-readable form for the status line.
    pub fn describe(&self) -> String {
        match self {
            DataSource::Url(url) => url.clone(),
            DataSource::File(path) => path.display().to_string(),
            DataSource::Bytes { name, data } => format!("{} ({} bytes)", name, data.len()),
        }
    }
}

/// Fetch the raw CSV bytes for `source`.
///
/// IO and network failures surface as `Fetch`; nothing here inspects the
/// content (that is the loader's job).
pub async fn fetch_bytes(source: &DataSource) -> Result<Vec<u8>, PipelineError> {
    match source {
        DataSource::Url(url) => {
            let response = reqwest::get(url)
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| PipelineError::Fetch(format!("GET {}: {}", url, e)))?;
            let body = response
                .bytes()
                .await
                .map_err(|e| PipelineError::Fetch(format!("GET {}: {}", url, e)))?;
            Ok(body.to_vec())
        }
        DataSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| PipelineError::Fetch(format!("read {}: {}", path.display(), e))),
        DataSource::Bytes { data, .. } => Ok(data.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys_distinguish_source_kinds() {
        let url = DataSource::Url("https://example.com/data.csv".into());
        let file = DataSource::File(PathBuf::from("data.csv"));
        let bytes = DataSource::Bytes {
            name: "data.csv".into(),
            data: vec![],
        };
        assert_ne!(url.cache_key(), file.cache_key());
        assert_ne!(file.cache_key(), bytes.cache_key());
    }

    #[tokio::test]
    async fn test_missing_file_is_a_fetch_error() {
        let source = DataSource::File(PathBuf::from("definitely/not/here.csv"));
        let err = fetch_bytes(&source).await.unwrap_err();
        assert!(matches!(err, PipelineError::Fetch(_)));
    }
}
