use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use verba_core::{PersistError, StatePersistence};

/// Study list state kept in a single file, rewritten after every change
pub struct FileStatePersistence {
    path: PathBuf,
}

impl FileStatePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StatePersistence for FileStatePersistence {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Some(blob),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read study list from {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, blob: &str) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write then rename
        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!("Saved study list to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use verba_config::search::SearchConfig;
    use verba_core::{Session, VocabularyStore};

    use super::*;

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FileStatePersistence::new(dir.path().join("study_list.json"));

        assert!(persistence.load().is_none());
    }

    #[test]
    fn test_save_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile").join("study_list.json");
        let mut persistence = FileStatePersistence::new(&path);

        persistence.save(r#"["rosa"]"#).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["rosa"]"#);
        assert!(!dir.path().join("profile").join("study_list.json.tmp").exists());
        assert_eq!(persistence.load().as_deref(), Some(r#"["rosa"]"#));
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study_list.json");
        let dataset = "latin,definition,frequency\nrosa,rose,3\npuella,girl,5\n";

        {
            let store = VocabularyStore::from_source(dataset).unwrap();
            let mut session = Session::new(
                store,
                Box::new(FileStatePersistence::new(&path)),
                &SearchConfig::default(),
            );
            session.add("puella");
            session.add("rosa");
        }

        let store = VocabularyStore::from_source(dataset).unwrap();
        let session = Session::new(
            store,
            Box::new(FileStatePersistence::new(&path)),
            &SearchConfig::default(),
        );

        assert_eq!(session.study_list().iter().collect::<Vec<_>>(), vec!["puella", "rosa"]);
    }
}
