use kanal::AsyncSender;
use verba_core::Session;
use verba_types::{AppEvent, WordDetailsView};

pub async fn handle_show(
    session: &Session,
    headword: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match session.details(headword) {
        Some(details) => AppEvent::ShowDetails(WordDetailsView {
            entry: details.entry.clone(),
            in_study_list: details.in_study_list,
        }),
        None => AppEvent::WordNotFound(headword.to_string()),
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}
