use kanal::AsyncSender;
use verba_core::{Session, Suggestion};
use verba_types::{AppEvent, Segment, SuggestionView};

pub async fn handle_search(
    session: &Session,
    query: &str,
    limit: Option<usize>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(session.max_suggestions());
    let suggestions = session.search_with_limit(query, limit);

    if suggestions.is_empty() {
        // Empty query or no match: the suggestion list is hidden
        app_to_ui_tx.send(AppEvent::HideSuggestions).await?;
        return Ok(());
    }

    let views = suggestions.iter().map(to_view).collect();
    app_to_ui_tx.send(AppEvent::ShowSuggestions(views)).await?;

    Ok(())
}

fn to_view(suggestion: &Suggestion<'_>) -> SuggestionView {
    SuggestionView {
        headword: suggestion.entry.headword.clone(),
        primary: suggestion.primary,
        segments: suggestion
            .segments()
            .into_iter()
            .map(|(text, highlighted)| Segment {
                text: text.to_string(),
                highlighted,
            })
            .collect(),
    }
}
