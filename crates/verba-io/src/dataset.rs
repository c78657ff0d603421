use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use verba_core::{LoadError, VocabularyStore};

/// Where the CSV dataset comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            DatasetSource::Url(source.to_string())
        } else {
            DatasetSource::File(PathBuf::from(source))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// One-shot fetch of the raw dataset text
pub async fn fetch_dataset(source: &DatasetSource) -> Result<String, LoadError> {
    match source {
        DatasetSource::File(path) => read_file(path).await,
        DatasetSource::Url(url) => fetch_url(url).await,
    }
}

/// Fetch and parse the dataset into a store
pub async fn load_store(source: &DatasetSource) -> Result<VocabularyStore, LoadError> {
    tracing::info!("Loading vocabulary from {}", source);
    let text = fetch_dataset(source).await?;
    VocabularyStore::from_source(&text)
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LoadError::FileNotFound(path.display().to_string())
        } else {
            LoadError::IoError(e)
        }
    })
}

async fn fetch_url(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| LoadError::Http(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| LoadError::Http(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            DatasetSource::parse("https://example.org/vocabulary.csv"),
            DatasetSource::Url("https://example.org/vocabulary.csv".to_string())
        );
        assert_eq!(
            DatasetSource::parse("data/vocabulary.csv"),
            DatasetSource::File(PathBuf::from("data/vocabulary.csv"))
        );
    }

    #[tokio::test]
    async fn test_load_store_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.csv");
        std::fs::write(&path, "latin,definition,frequency\nrosa,rose,3\npuella,girl,5\n").unwrap();

        let store = load_store(&DatasetSource::File(path)).await.unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("rosa"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DatasetSource::File(dir.path().join("missing.csv"));

        let result = load_store(&source).await;
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.csv");
        std::fs::write(&path, "just a header line\nno,columns\n").unwrap();

        let result = load_store(&DatasetSource::File(path)).await;
        assert!(matches!(result, Err(LoadError::NoEntries)));
    }
}
