use kanal::AsyncSender;
use verba_core::Session;
use verba_types::{AppEvent, WheelItem};

pub async fn handle_add(
    session: &mut Session,
    headword: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !session.store().contains(headword) {
        app_to_ui_tx
            .send(AppEvent::WordNotFound(headword.to_string()))
            .await?;
        return Ok(());
    }

    session.add(headword);
    notify_changed(session, headword, app_to_ui_tx).await
}

pub async fn handle_remove(
    session: &mut Session,
    headword: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.remove(headword);
    notify_changed(session, headword, app_to_ui_tx).await
}

pub async fn handle_toggle(
    session: &mut Session,
    headword: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.toggle(headword) {
        Some(_) => notify_changed(session, headword, app_to_ui_tx).await,
        None => {
            app_to_ui_tx
                .send(AppEvent::WordNotFound(headword.to_string()))
                .await?;
            Ok(())
        }
    }
}

pub async fn handle_list(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries = session.display_entries().into_iter().cloned().collect();
    app_to_ui_tx.send(AppEvent::ShowStudyList(entries)).await?;
    Ok(())
}

pub async fn handle_wheel(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let items = session
        .word_wheel()
        .map(|(entry, in_study_list)| WheelItem {
            headword: entry.headword.clone(),
            in_study_list,
        })
        .collect();

    app_to_ui_tx.send(AppEvent::ShowWordWheel(items)).await?;
    Ok(())
}

async fn notify_changed(
    session: &Session,
    headword: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::StudyListChanged {
            headword: headword.to_string(),
            in_study_list: session.study_list().contains(headword),
        })
        .await?;
    Ok(())
}
