use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;
use std::ops::Range;

use verba_types::VocabularyEntry;

use crate::codec;
use crate::collation::locale_cmp;
use crate::error::LoadError;
use crate::normalize::normalize;

/// Membership test for headwords, used to validate imports
pub trait HeadwordSet {
    fn contains_headword(&self, headword: &str) -> bool;
}

/// One whitespace-separated token of a headword
#[derive(Debug, Clone)]
pub struct HeadwordToken {
    /// Offset in characters from the start of the headword
    pub char_start: usize,
    pub bytes: Range<usize>,
    /// Memoized `normalize` of the token text
    pub normalized: String,
}

#[derive(Debug, Clone)]
pub(crate) struct IndexedEntry {
    pub(crate) entry: VocabularyEntry,
    pub(crate) tokens: Vec<HeadwordToken>,
}

/// Loaded vocabulary, sorted by headword. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    entries: Vec<IndexedEntry>,
    headword_index: HashMap<String, usize>,
}

impl VocabularyStore {
    /// Build from parsed rows. Empty headwords are dropped and the first
    /// occurrence of a repeated headword wins.
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut indexed = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.headword.is_empty() {
                continue;
            }
            if !seen.insert(entry.headword.clone()) {
                tracing::warn!("Duplicate headword dropped: {}", entry.headword);
                continue;
            }

            let tokens = tokenize(&entry.headword);
            indexed.push(IndexedEntry { entry, tokens });
        }

        indexed.sort_by(|a, b| locale_cmp(&a.entry.headword, &b.entry.headword));

        let headword_index = indexed
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.entry.headword.clone(), idx))
            .collect();

        Self {
            entries: indexed,
            headword_index,
        }
    }

    /// Parse the CSV dataset. Content without a single usable row is a load failure.
    pub fn from_source(text: &str) -> Result<Self, LoadError> {
        let store = Self::from_entries(codec::parse_source(text));

        if store.is_empty() {
            return Err(LoadError::NoEntries);
        }

        tracing::info!("Loaded {} vocabulary entries", store.len());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, headword: &str) -> Option<&VocabularyEntry> {
        self.headword_index
            .get(headword)
            .and_then(|&idx| self.entries.get(idx))
            .map(|e| &e.entry)
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.headword_index.contains_key(headword)
    }

    /// Entries in headword order
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.iter().map(|e| &e.entry)
    }

    pub(crate) fn indexed(&self) -> &[IndexedEntry] {
        &self.entries
    }
}

impl HeadwordSet for VocabularyStore {
    fn contains_headword(&self, headword: &str) -> bool {
        self.contains(headword)
    }
}

impl<S: BuildHasher> HeadwordSet for HashSet<String, S> {
    fn contains_headword(&self, headword: &str) -> bool {
        self.contains(headword)
    }
}

impl<S: BuildHasher> HeadwordSet for HashSet<&str, S> {
    fn contains_headword(&self, headword: &str) -> bool {
        self.contains(headword)
    }
}

/// Split a headword on whitespace, keeping character offsets
pub fn tokenize(headword: &str) -> Vec<HeadwordToken> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    let push = |tokens: &mut Vec<HeadwordToken>, byte_start: usize, char_start: usize, end: usize| {
        tokens.push(HeadwordToken {
            char_start,
            bytes: byte_start..end,
            normalized: normalize(&headword[byte_start..end]),
        });
    };

    for (char_idx, (byte_idx, c)) in headword.char_indices().enumerate() {
        if c.is_whitespace() {
            if let Some((byte_start, char_start)) = start.take() {
                push(&mut tokens, byte_start, char_start, byte_idx);
            }
        } else if start.is_none() {
            start = Some((byte_idx, char_idx));
        }
    }
    if let Some((byte_start, char_start)) = start {
        push(&mut tokens, byte_start, char_start, headword.len());
    }

    tokens
}
