//! Delimited text formats: the CSV dataset, and the TSV study-list
//! export/import.

use verba_types::VocabularyEntry;

/// Minimum fields for a dataset row: headword, definition, frequency
const MIN_FIELDS: usize = 3;

/// Parse the CSV dataset. The first line is a header and is skipped.
///
/// Fields are split on commas outside double quotes. A `"` preceded by a
/// backslash is a literal quote and never opens or closes a quoted run.
/// Malformed rows are dropped, never reported.
pub fn parse_source(text: &str) -> Vec<VocabularyEntry> {
    let mut records = Vec::new();

    for line in text.trim().split('\n').skip(1) {
        let mut values = split_row(line);

        if values.len() < MIN_FIELDS {
            tracing::debug!("Dropping row with {} fields: {:?}", values.len(), line);
            continue;
        }

        if values[0].is_empty() {
            tracing::debug!("Dropping row without headword: {:?}", line);
            continue;
        }

        let part_of_speech = if values.len() > MIN_FIELDS {
            std::mem::take(&mut values[3])
        } else {
            String::new()
        };

        records.push(VocabularyEntry {
            frequency: parse_frequency(&values[2]),
            definition: std::mem::take(&mut values[1]),
            headword: std::mem::take(&mut values[0]),
            part_of_speech,
        });
    }

    records
}

fn split_row(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut prev = None;

    for c in line.chars() {
        match c {
            '"' if prev == Some('\\') => {
                // \" is a literal quote; the backslash is dropped, not kept
                current.pop();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
        prev = Some(c);
    }
    values.push(current.trim().to_string());

    values
}

/// Leading-integer parse; anything without leading digits is 0, values past
/// `u32::MAX` saturate
fn parse_frequency(field: &str) -> u32 {
    let digits = field.strip_prefix('+').unwrap_or(field);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(u32::MAX)
}

/// Study list as TSV: `headword, definition, frequency, part_of_speech`,
/// one entry per line, no header.
pub fn export_study_list<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a VocabularyEntry>,
{
    entries
        .into_iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}",
                entry.headword, entry.definition, entry.frequency, entry.part_of_speech
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Candidate headwords from a TSV import: first column of each line.
///
/// The first row is treated as a header when its first cell mentions
/// "latin" or "word".
pub fn parse_import_source(text: &str) -> Vec<String> {
    let mut lines = text.trim().split('\n').peekable();

    let has_header = lines
        .peek()
        .map(|first| {
            let cell = first.split('\t').next().unwrap_or_default().to_lowercase();
            cell.contains("latin") || cell.contains("word")
        })
        .unwrap_or(false);

    if has_header {
        lines.next();
    }

    lines
        .filter_map(|line| {
            let candidate = line.split('\t').next().unwrap_or_default().trim();
            (!candidate.is_empty()).then(|| candidate.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "latin,definition,frequency,partOfSpeech\n";

    fn entry(headword: &str, definition: &str, frequency: u32, pos: &str) -> VocabularyEntry {
        VocabularyEntry {
            headword: headword.to_string(),
            definition: definition.to_string(),
            frequency,
            part_of_speech: pos.to_string(),
        }
    }

    #[test]
    fn test_parse_basic_rows() {
        let text = format!("{HEADER}puella,girl,12,noun\nrosa,rose,3\n");
        let records = parse_source(&text);

        assert_eq!(
            records,
            vec![entry("puella", "girl", 12, "noun"), entry("rosa", "rose", 3, "")]
        );
    }

    #[test]
    fn test_header_only() {
        assert!(parse_source(HEADER).is_empty());
        assert!(parse_source("").is_empty());
    }

    #[test]
    fn test_two_field_row_dropped() {
        let text = format!("{HEADER}amo,to love\nrosa,rose,3,noun");
        let records = parse_source(&text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].headword, "rosa");
    }

    #[test]
    fn test_non_numeric_frequency() {
        let text = format!("{HEADER}rosa,rose,often,noun\npuer,boy,,noun");
        let records = parse_source(&text);

        assert_eq!(records[0].frequency, 0);
        assert_eq!(records[1].frequency, 0);
    }

    #[test]
    fn test_frequency_leading_digits() {
        assert_eq!(parse_frequency("42"), 42);
        assert_eq!(parse_frequency("+7"), 7);
        assert_eq!(parse_frequency("12abc"), 12);
        assert_eq!(parse_frequency("-5"), 0);
        assert_eq!(parse_frequency("99999999999"), u32::MAX);
        assert_eq!(parse_frequency("4294967295"), u32::MAX);
        assert_eq!(parse_frequency("+"), 0);
    }

    #[test]
    fn test_quoted_commas() {
        let text = format!("{HEADER}\"amo, amare\",\"to love, like\",40,verb");
        let records = parse_source(&text);

        assert_eq!(records, vec![entry("amo, amare", "to love, like", 40, "verb")]);
    }

    #[test]
    fn test_backslash_escaped_quote() {
        let text = format!("{HEADER}dico,\"to say \\\"hello, friend\\\"\",5,verb");
        let records = parse_source(&text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].definition, "to say \"hello, friend\"");
        assert_eq!(records[0].frequency, 5);
    }

    #[test]
    fn test_crlf_and_whitespace_trimmed() {
        let text = "latin,definition,frequency\r\n  rosa , rose ,3\r\npuer,boy,2\r\n";
        let records = parse_source(text);

        assert_eq!(records, vec![entry("rosa", "rose", 3, ""), entry("puer", "boy", 2, "")]);
    }

    #[test]
    fn test_empty_headword_dropped() {
        let text = format!("{HEADER},nothing,1\n\nrosa,rose,3");
        let records = parse_source(&text);

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_export_format() {
        let entries = [entry("puella", "girl", 12, "noun"), entry("rosa", "rose", 3, "")];
        let tsv = export_study_list(&entries);

        assert_eq!(tsv, "puella\tgirl\t12\tnoun\nrosa\trose\t3\t");
        assert_eq!(export_study_list(std::iter::empty::<&VocabularyEntry>()), "");
    }

    #[test]
    fn test_import_with_header() {
        let text = "Latin Word\tDefinition\nrosa\trose\npuella\tgirl\n";
        assert_eq!(parse_import_source(text), vec!["rosa", "puella"]);

        let text = "WORD\nrosa";
        assert_eq!(parse_import_source(text), vec!["rosa"]);
    }

    #[test]
    fn test_import_without_header() {
        let text = "rosa\trose\t3\tnoun\n\n  puer \tboy\n";
        assert_eq!(parse_import_source(text), vec!["rosa", "puer"]);
    }

    #[test]
    fn test_import_empty() {
        assert!(parse_import_source("").is_empty());
        assert!(parse_import_source("latin\tdefinition").is_empty());
    }
}
