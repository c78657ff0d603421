use verba_config::search::SearchConfig;
use verba_types::VocabularyEntry;

use crate::codec;
use crate::persistence::StatePersistence;
use crate::search::{self, Suggestion};
use crate::store::VocabularyStore;
use crate::study_list::StudyList;

/// An entry as shown in the detail view
#[derive(Debug, Clone, Copy)]
pub struct WordDetails<'a> {
    pub entry: &'a VocabularyEntry,
    pub in_study_list: bool,
}

/// Owns the vocabulary and the study list for one user session.
///
/// The store never changes after construction. Every study-list mutation is
/// written through to the persistence backend before returning.
pub struct Session {
    store: VocabularyStore,
    study_list: StudyList,
    persistence: Box<dyn StatePersistence>,
    max_suggestions: usize,
}

impl Session {
    pub fn new(
        store: VocabularyStore,
        persistence: Box<dyn StatePersistence>,
        config: &SearchConfig,
    ) -> Self {
        let mut study_list = restore(persistence.as_ref());

        // An empty store means the dataset failed to load; keep the saved
        // list intact rather than pruning everything.
        if !store.is_empty() {
            let dropped = study_list.retain_known(&store);
            if dropped > 0 {
                tracing::warn!("Dropped {} study list entries missing from the dataset", dropped);
            }
        }

        tracing::info!(
            "Session ready: {} entries, {} in study list",
            store.len(),
            study_list.len()
        );

        Self {
            store,
            study_list,
            persistence,
            max_suggestions: config.max_suggestions,
        }
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    pub fn study_list(&self) -> &StudyList {
        &self.study_list
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn search(&self, query: &str) -> Vec<Suggestion<'_>> {
        search::search(&self.store, query, self.max_suggestions)
    }

    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<Suggestion<'_>> {
        search::search(&self.store, query, limit)
    }

    pub fn details(&self, headword: &str) -> Option<WordDetails<'_>> {
        self.store.get(headword).map(|entry| WordDetails {
            entry,
            in_study_list: self.study_list.contains(headword),
        })
    }

    /// Every entry in headword order, flagged when it is in the study list
    pub fn word_wheel(&self) -> impl Iterator<Item = (&VocabularyEntry, bool)> {
        self.store
            .iter()
            .map(|entry| (entry, self.study_list.contains(&entry.headword)))
    }

    /// Add a known headword. Unknown headwords are ignored.
    pub fn add(&mut self, headword: &str) -> bool {
        if !self.store.contains(headword) {
            tracing::debug!("Ignoring unknown headword: {}", headword);
            return false;
        }

        let added = self.study_list.add(headword);
        if added {
            self.persist();
        }
        added
    }

    pub fn remove(&mut self, headword: &str) -> bool {
        let removed = self.study_list.remove(headword);
        self.persist();
        removed
    }

    /// Flip membership. `None` when the headword is neither listed nor known.
    pub fn toggle(&mut self, headword: &str) -> Option<bool> {
        if self.study_list.contains(headword) {
            self.remove(headword);
            Some(false)
        } else if self.add(headword) {
            Some(true)
        } else {
            None
        }
    }

    /// Replace the study list with the candidates found in the store.
    /// The caller is responsible for confirming with the user first.
    pub fn replace_from_import<I, S>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = self
            .study_list
            .replace_from_import(candidates, &self.store);
        self.persist();

        tracing::info!("Imported {} study list entries", accepted);
        accepted
    }

    /// Parse a TSV import and replace the study list with it
    pub fn import_text(&mut self, text: &str) -> usize {
        let candidates = codec::parse_import_source(text);
        tracing::debug!("Import contains {} candidate headwords", candidates.len());
        self.replace_from_import(candidates)
    }

    pub fn display_entries(&self) -> Vec<&VocabularyEntry> {
        self.study_list.to_display_order(&self.store)
    }

    pub fn export_tsv(&self) -> String {
        codec::export_study_list(self.display_entries())
    }

    fn persist(&mut self) {
        let blob = self.study_list.serialize();
        if let Err(e) = self.persistence.save(&blob) {
            tracing::error!("Failed to persist study list: {}", e);
        }
    }
}

fn restore(persistence: &dyn StatePersistence) -> StudyList {
    match persistence.load() {
        Some(blob) => StudyList::deserialize(&blob).unwrap_or_else(|e| {
            tracing::warn!("Discarding saved study list: {}", e);
            StudyList::new()
        }),
        None => StudyList::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistError;
    use crate::persistence::MemoryPersistence;

    const DATASET: &str = "\
latin,definition,frequency,partOfSpeech
puella,girl,120,noun
puer,boy,98,noun
pueritia,childhood,4,noun
rosa,rose,31,noun
\"amo, amare\",to love,210,verb
Rōma,Rome,77,noun
";

    fn session_with(persistence: MemoryPersistence) -> Session {
        let store = VocabularyStore::from_source(DATASET).unwrap();
        Session::new(store, Box::new(persistence), &SearchConfig::default())
    }

    struct BrokenPersistence;

    impl StatePersistence for BrokenPersistence {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&mut self, _blob: &str) -> Result<(), PersistError> {
            Err(PersistError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_mutations_are_persisted() {
        let persistence = MemoryPersistence::new();
        let mut session = session_with(persistence.clone());

        assert!(session.add("rosa"));
        assert_eq!(persistence.blob().as_deref(), Some(r#"["rosa"]"#));

        // Duplicate add is a no-op and does not write
        assert!(!session.add("rosa"));
        assert_eq!(persistence.writes(), 1);

        assert!(session.add("puer"));
        assert!(session.remove("rosa"));
        assert_eq!(persistence.blob().as_deref(), Some(r#"["puer"]"#));
        assert_eq!(persistence.writes(), 3);

        // Removing an absent headword still writes the current state
        assert!(!session.remove("rosa"));
        assert_eq!(persistence.writes(), 4);
    }

    #[test]
    fn test_restores_saved_list() {
        let persistence = MemoryPersistence::with_blob(r#"["rosa","puella"]"#);
        let session = session_with(persistence);

        assert_eq!(session.study_list().iter().collect::<Vec<_>>(), vec!["rosa", "puella"]);
        assert!(session.details("rosa").unwrap().in_study_list);
        assert!(!session.details("puer").unwrap().in_study_list);
    }

    #[test]
    fn test_corrupt_state_starts_empty() {
        let session = session_with(MemoryPersistence::with_blob("rosa;puella"));
        assert!(session.study_list().is_empty());
    }

    #[test]
    fn test_unknown_saved_entries_pruned() {
        let persistence = MemoryPersistence::with_blob(r#"["rosa","vanished"]"#);
        let session = session_with(persistence.clone());

        assert_eq!(session.study_list().iter().collect::<Vec<_>>(), vec!["rosa"]);
        // Nothing is written until the next mutation
        assert_eq!(persistence.writes(), 0);
    }

    #[test]
    fn test_empty_store_keeps_saved_list() {
        let persistence = MemoryPersistence::with_blob(r#"["rosa"]"#);
        let session = Session::new(
            VocabularyStore::default(),
            Box::new(persistence),
            &SearchConfig::default(),
        );

        assert_eq!(session.study_list().len(), 1);
        assert!(session.display_entries().is_empty());
        assert_eq!(session.export_tsv(), "");
        assert!(session.search("ros").is_empty());
    }

    #[test]
    fn test_add_unknown_ignored() {
        let persistence = MemoryPersistence::new();
        let mut session = session_with(persistence.clone());

        assert!(!session.add("nonexistentword"));
        assert!(session.study_list().is_empty());
        assert_eq!(persistence.writes(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut session = session_with(MemoryPersistence::new());

        assert_eq!(session.toggle("puer"), Some(true));
        assert_eq!(session.toggle("puer"), Some(false));
        assert_eq!(session.toggle("nonexistentword"), None);
    }

    #[test]
    fn test_search_uses_configured_limit() {
        let store = VocabularyStore::from_source(DATASET).unwrap();
        let config = SearchConfig { max_suggestions: 2 };
        let session = Session::new(store, Box::new(MemoryPersistence::new()), &config);

        let results = session.search("pue");
        let headwords: Vec<&str> = results.iter().map(|s| s.entry.headword.as_str()).collect();
        assert_eq!(headwords, vec!["puella", "puer"]);

        assert_eq!(session.search_with_limit("pue", 10).len(), 3);
    }

    #[test]
    fn test_import_replaces_list() {
        let persistence = MemoryPersistence::new();
        let mut session = session_with(persistence.clone());
        session.add("puella");

        let accepted = session.import_text("Latin\tDefinition\nrosa\trose\nrosa\trose\nnonexistentword\t?\n");

        assert_eq!(accepted, 1);
        assert_eq!(session.study_list().iter().collect::<Vec<_>>(), vec!["rosa"]);
        assert_eq!(persistence.blob().as_deref(), Some(r#"["rosa"]"#));
    }

    #[test]
    fn test_export_round_trip() {
        let mut session = session_with(MemoryPersistence::new());
        session.add("rosa");
        session.add("amo, amare");
        session.add("Rōma");

        let tsv = session.export_tsv();
        assert_eq!(
            tsv,
            "amo, amare\tto love\t210\tverb\nRōma\tRome\t77\tnoun\nrosa\trose\t31\tnoun"
        );

        let original: Vec<String> = session.study_list().iter().map(String::from).collect();
        let accepted = session.import_text(&tsv);

        assert_eq!(accepted, 3);
        let mut restored: Vec<String> = session.study_list().iter().map(String::from).collect();
        let mut original = original;
        restored.sort();
        original.sort();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_word_wheel_flags_members() {
        let mut session = session_with(MemoryPersistence::new());
        session.add("puer");

        let wheel: Vec<(&str, bool)> = session
            .word_wheel()
            .map(|(entry, listed)| (entry.headword.as_str(), listed))
            .collect();

        assert_eq!(wheel.len(), 6);
        assert_eq!(wheel[0], ("amo, amare", false));
        assert!(wheel.contains(&("puer", true)));
        assert!(wheel.contains(&("puella", false)));
    }

    #[test]
    fn test_persist_failure_is_not_fatal() {
        let store = VocabularyStore::from_source(DATASET).unwrap();
        let mut session = Session::new(store, Box::new(BrokenPersistence), &SearchConfig::default());

        assert!(session.add("rosa"));
        assert!(session.study_list().contains("rosa"));
    }
}
