use std::fmt::Write as _;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use verba_types::{AppEvent, Segment, WordDetailsView};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Bold highlights instead of brackets
    pub ansi: bool,
}

impl RenderStyle {
    pub fn detect() -> Self {
        Self {
            ansi: atty::is(atty::Stream::Stdout),
        }
    }

    pub fn plain() -> Self {
        Self { ansi: false }
    }
}

/// Prints what the event loop sends until it says `Shutdown`
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let style = RenderStyle::detect();

    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        if matches!(event, AppEvent::Shutdown) {
            tracing::debug!("[UI] Shutdown received");
            break;
        }

        let is_error = matches!(event, AppEvent::Error(_));
        if let Some(text) = render(&event, style) {
            if is_error {
                eprintln!("{text}");
            } else {
                println!("{text}");
            }
        }
    }

    // Stops the shell reader when the event loop went away first
    cancel.cancel();
    Ok(())
}

pub fn render(event: &AppEvent, style: RenderStyle) -> Option<String> {
    let text = match event {
        AppEvent::ShowSuggestions(suggestions) => suggestions
            .iter()
            .map(|s| render_segments(&s.segments, style))
            .collect::<Vec<_>>()
            .join("\n"),
        AppEvent::HideSuggestions => "No matches.".to_string(),
        AppEvent::ShowDetails(details) => render_details(details),
        AppEvent::WordNotFound(headword) => {
            tracing::debug!("Not found: {}", headword);
            "Word not found.".to_string()
        }
        AppEvent::ShowStudyList(entries) if entries.is_empty() => {
            "Your study list is empty.".to_string()
        }
        AppEvent::ShowStudyList(entries) => {
            let width = entries
                .iter()
                .map(|e| e.headword.chars().count())
                .max()
                .unwrap_or(0);
            entries
                .iter()
                .map(|e| format!("{:<width$}  {}", e.headword, e.definition))
                .collect::<Vec<_>>()
                .join("\n")
        }
        AppEvent::ShowWordWheel(items) => items
            .iter()
            .map(|item| {
                let mark = if item.in_study_list { '*' } else { ' ' };
                format!("{mark} {}", item.headword)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        AppEvent::StudyListChanged {
            headword,
            in_study_list: true,
        } => format!("Added {headword} to your study list."),
        AppEvent::StudyListChanged {
            headword,
            in_study_list: false,
        } => format!("Removed {headword} from your study list."),
        AppEvent::Exported { path, count } => {
            format!("Exported {count} words to {}.", path.display())
        }
        AppEvent::Copied { .. } => "Copied!".to_string(),
        AppEvent::ImportComplete { accepted } => {
            format!("Import complete. {accepted} valid words were added.")
        }
        AppEvent::Status(message) => message.clone(),
        AppEvent::Error(message) => format!("Error: {message}"),
        AppEvent::Command(_) | AppEvent::Shutdown => return None,
    };

    Some(text)
}

fn render_segments(segments: &[Segment], style: RenderStyle) -> String {
    let mut out = String::new();
    for segment in segments {
        match (segment.highlighted, style.ansi) {
            (false, _) => out.push_str(&segment.text),
            (true, true) => {
                let _ = write!(out, "{BOLD}{}{RESET}", segment.text);
            }
            (true, false) => {
                let _ = write!(out, "[{}]", segment.text);
            }
        }
    }
    out
}

fn render_details(details: &WordDetailsView) -> String {
    let entry = &details.entry;
    let mut out = entry.headword.clone();
    if !entry.part_of_speech.is_empty() {
        let _ = write!(out, " ({})", entry.part_of_speech);
    }
    let _ = write!(out, "\n  {}", entry.definition);
    let _ = write!(out, "\n  Frequency: {}", entry.frequency);

    let membership = if details.in_study_list {
        "In your study list (remove with :rm)"
    } else {
        "Not in your study list (add with :add)"
    };
    let _ = write!(out, "\n  {membership}");
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use verba_types::{SuggestionView, VocabularyEntry, WheelItem};

    use super::*;

    fn segment(text: &str, highlighted: bool) -> Segment {
        Segment {
            text: text.to_string(),
            highlighted,
        }
    }

    fn entry(headword: &str, definition: &str) -> VocabularyEntry {
        VocabularyEntry {
            headword: headword.to_string(),
            definition: definition.to_string(),
            frequency: 7,
            part_of_speech: String::new(),
        }
    }

    #[test]
    fn test_suggestion_highlight_plain() {
        let event = AppEvent::ShowSuggestions(vec![SuggestionView {
            headword: "puella, puellae".to_string(),
            primary: true,
            segments: vec![segment("pue", true), segment("lla, puellae", false)],
        }]);

        assert_eq!(
            render(&event, RenderStyle::plain()).as_deref(),
            Some("[pue]lla, puellae")
        );
    }

    #[test]
    fn test_suggestion_highlight_ansi() {
        let event = AppEvent::ShowSuggestions(vec![SuggestionView {
            headword: "rosa".to_string(),
            primary: true,
            segments: vec![segment("ros", true), segment("a", false)],
        }]);

        assert_eq!(
            render(&event, RenderStyle { ansi: true }).as_deref(),
            Some("\x1b[1mros\x1b[0ma")
        );
    }

    #[test]
    fn test_wheel_marks_members() {
        let event = AppEvent::ShowWordWheel(vec![
            WheelItem {
                headword: "puella".to_string(),
                in_study_list: false,
            },
            WheelItem {
                headword: "rosa".to_string(),
                in_study_list: true,
            },
        ]);

        assert_eq!(
            render(&event, RenderStyle::plain()).as_deref(),
            Some("  puella\n* rosa")
        );
    }

    #[test]
    fn test_study_list_columns() {
        let event = AppEvent::ShowStudyList(vec![entry("amo", "love"), entry("puella", "girl")]);
        assert_eq!(
            render(&event, RenderStyle::plain()).as_deref(),
            Some("amo     love\npuella  girl")
        );

        let empty = AppEvent::ShowStudyList(Vec::new());
        assert_eq!(
            render(&empty, RenderStyle::plain()).as_deref(),
            Some("Your study list is empty.")
        );
    }

    #[test]
    fn test_details() {
        let mut e = entry("amo, amare", "to love");
        e.part_of_speech = "verb".to_string();
        let event = AppEvent::ShowDetails(WordDetailsView {
            entry: e,
            in_study_list: true,
        });

        let text = render(&event, RenderStyle::plain()).unwrap();
        assert!(text.starts_with("amo, amare (verb)\n  to love\n  Frequency: 7"));
        assert!(text.contains("In your study list"));
    }

    #[test]
    fn test_status_messages() {
        let style = RenderStyle::plain();
        assert_eq!(
            render(&AppEvent::ImportComplete { accepted: 3 }, style).as_deref(),
            Some("Import complete. 3 valid words were added.")
        );
        assert_eq!(
            render(&AppEvent::Copied { count: 2 }, style).as_deref(),
            Some("Copied!")
        );
        assert_eq!(
            render(&AppEvent::WordNotFound("xyz".to_string()), style).as_deref(),
            Some("Word not found.")
        );
        assert_eq!(
            render(
                &AppEvent::Exported {
                    path: PathBuf::from("out.tsv"),
                    count: 2
                },
                style
            )
            .as_deref(),
            Some("Exported 2 words to out.tsv.")
        );
        assert_eq!(render(&AppEvent::Shutdown, style), None);
    }
}
