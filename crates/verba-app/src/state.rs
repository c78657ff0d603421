use verba_config::Config;
use verba_core::{Session, VocabularyStore};
use verba_io::{DatasetSource, FileStatePersistence};

pub struct AppState {
    pub config: Config,
    pub dataset: DatasetSource,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dataset = DatasetSource::parse(&config.dataset.source);
        Self { config, dataset }
    }

    /// Load the dataset and restore the saved study list.
    ///
    /// A failed load still yields a usable session over an empty store; the
    /// returned message is meant for the user.
    pub async fn open_session(&self) -> (Session, Option<String>) {
        let (store, load_error) = match verba_io::load_store(&self.dataset).await {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::error!("Error fetching vocabulary: {}", e);
                let message = format!("Could not load vocabulary from {}: {}", self.dataset, e);
                (VocabularyStore::default(), Some(message))
            }
        };

        let persistence = FileStatePersistence::new(self.config.study_list.state_path.clone());
        let session = Session::new(store, Box::new(persistence), &self.config.search);

        (session, load_error)
    }
}
