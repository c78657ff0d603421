use std::collections::HashSet;

use verba_types::VocabularyEntry;

use crate::collation::locale_cmp;
use crate::error::StateError;
use crate::store::{HeadwordSet, VocabularyStore};

/// User-curated headwords, in insertion order, without duplicates.
///
/// Only headwords are kept; entries are joined back from the store when
/// displayed or exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyList {
    headwords: Vec<String>,
}

impl StudyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from headwords, keeping the first occurrence of each
    pub fn from_headwords<I, S>(headwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let headwords = headwords
            .into_iter()
            .map(Into::into)
            .filter(|h: &String| !h.is_empty() && seen.insert(h.clone()))
            .collect();

        Self { headwords }
    }

    pub fn len(&self) -> usize {
        self.headwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headwords.is_empty()
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.headwords.iter().any(|h| h == headword)
    }

    /// Headwords in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headwords.iter().map(String::as_str)
    }

    /// Returns false when the headword was already present or is empty
    pub fn add(&mut self, headword: &str) -> bool {
        if headword.is_empty() || self.contains(headword) {
            return false;
        }
        self.headwords.push(headword.to_string());
        true
    }

    /// Returns false when the headword was absent
    pub fn remove(&mut self, headword: &str) -> bool {
        let before = self.headwords.len();
        self.headwords.retain(|h| h != headword);
        self.headwords.len() != before
    }

    /// Flip membership; returns whether the headword is now in the list
    pub fn toggle(&mut self, headword: &str) -> bool {
        if self.remove(headword) {
            false
        } else {
            self.add(headword)
        }
    }

    /// Replace the whole list with the valid, deduplicated candidates.
    ///
    /// Destructive: the previous list is discarded even when nothing is
    /// accepted. Returns the number of headwords accepted.
    pub fn replace_from_import<I, S, V>(&mut self, candidates: I, valid: &V) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        V: HeadwordSet + ?Sized,
    {
        let accepted = candidates
            .into_iter()
            .filter(|c| valid.contains_headword(c.as_ref()))
            .map(|c| c.as_ref().to_string());

        *self = Self::from_headwords(accepted);
        self.headwords.len()
    }

    /// Drop members unknown to `valid`; returns how many were dropped
    pub fn retain_known<V>(&mut self, valid: &V) -> usize
    where
        V: HeadwordSet + ?Sized,
    {
        let before = self.headwords.len();
        self.headwords.retain(|h| valid.contains_headword(h));
        before - self.headwords.len()
    }

    /// Entries for display or export, in headword order. Members missing
    /// from the store are skipped.
    pub fn to_display_order<'a>(&self, store: &'a VocabularyStore) -> Vec<&'a VocabularyEntry> {
        let mut entries: Vec<&VocabularyEntry> =
            self.iter().filter_map(|headword| store.get(headword)).collect();

        entries.sort_by(|a, b| locale_cmp(&a.headword, &b.headword));
        entries
    }

    /// Persisted form: a JSON array of headwords, order preserved
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.headwords).unwrap_or_else(|_| String::from("[]"))
    }

    /// Inverse of [`StudyList::serialize`]. Duplicates in the blob are collapsed.
    pub fn deserialize(blob: &str) -> Result<Self, StateError> {
        let headwords: Vec<String> = serde_json::from_str(blob)?;
        Ok(Self::from_headwords(headwords))
    }
}
