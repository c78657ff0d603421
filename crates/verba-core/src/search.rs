use verba_types::VocabularyEntry;

use crate::collation::locale_cmp;
use crate::normalize::normalize;
use crate::store::VocabularyStore;

pub const DEFAULT_LIMIT: usize = 10;

/// Emphasized run of a headword, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub len: usize,
}

/// Ranked autocomplete candidate
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    pub entry: &'a VocabularyEntry,
    /// The first token of the headword matched
    pub primary: bool,
    /// One span per matching token, in headword order
    pub spans: Vec<HighlightSpan>,
}

impl<'a> Suggestion<'a> {
    /// Split the headword into `(text, highlighted)` runs for rendering
    pub fn segments(&self) -> Vec<(&'a str, bool)> {
        let entry: &'a VocabularyEntry = self.entry;
        let headword = entry.headword.as_str();
        let byte_at = |char_idx: usize| {
            headword
                .char_indices()
                .nth(char_idx)
                .map(|(byte_idx, _)| byte_idx)
                .unwrap_or(headword.len())
        };

        let mut segments = Vec::new();
        let mut cursor = 0;

        for span in &self.spans {
            let start = byte_at(span.start).max(cursor);
            let end = byte_at(span.start + span.len).max(start);

            if start > cursor {
                segments.push((&headword[cursor..start], false));
            }
            if end > start {
                segments.push((&headword[start..end], true));
            }
            cursor = end;
        }
        if cursor < headword.len() {
            segments.push((&headword[cursor..], false));
        }

        segments
    }
}

/// Prefix search over headword tokens.
///
/// Entries whose first token matches come first, then entries matching only a
/// later token; each group in headword order. At most `limit` results.
pub fn search<'a>(store: &'a VocabularyStore, query: &str, limit: usize) -> Vec<Suggestion<'a>> {
    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return Vec::new();
    }

    let raw_len = query.chars().count();

    let mut matches: Vec<Suggestion<'a>> = store
        .indexed()
        .iter()
        .filter_map(|indexed| {
            let headword = &indexed.entry.headword;

            let spans: Vec<HighlightSpan> = indexed
                .tokens
                .iter()
                .filter(|token| token.normalized.starts_with(&normalized_query))
                .map(|token| HighlightSpan {
                    start: token.char_start,
                    len: highlight_len(&headword[token.bytes.clone()], &normalized_query, raw_len),
                })
                .collect();

            if spans.is_empty() {
                return None;
            }

            let primary = indexed
                .tokens
                .first()
                .is_some_and(|token| token.normalized.starts_with(&normalized_query));

            Some(Suggestion {
                entry: &indexed.entry,
                primary,
                spans,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.primary
            .cmp(&a.primary)
            .then_with(|| locale_cmp(&a.entry.headword, &b.entry.headword))
    });
    matches.truncate(limit);

    tracing::debug!("Query {:?}: {} suggestions", query, matches.len());
    matches
}

/// Characters of `token` to emphasize for a query.
///
/// The shortest prefix whose normalized form equals the normalized query.
/// When normalization shifts lengths so no prefix matches exactly, the raw
/// query length is used instead, capped at the token length.
pub fn highlight_len(token: &str, normalized_query: &str, raw_query_len: usize) -> usize {
    let mut token_len = 0;

    for (idx, (byte_idx, c)) in token.char_indices().enumerate() {
        if normalize(&token[..byte_idx + c.len_utf8()]) == normalized_query {
            return idx + 1;
        }
        token_len += 1;
    }

    raw_query_len.min(token_len)
}
