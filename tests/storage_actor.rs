#![cfg(feature = "tui")]

use colormind::palette::PALETTE_SIZE;
use colormind::storage::{EXPORT_FILE, MemoryRepository};
use colormind::tui::action::{Action, AppEvent};
use colormind::tui::storage_actor;
use tokio::sync::mpsc;

fn colors() -> [String; PALETTE_SIZE] {
    ["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"].map(String::from)
}

async fn next_list(rx: &mut mpsc::Receiver<AppEvent>) -> Vec<colormind::model::SavedPalette> {
    loop {
        match rx.recv().await {
            Some(AppEvent::PalettesLoaded(list)) => return list,
            Some(AppEvent::Error(e)) => panic!("actor error: {e}"),
            Some(AppEvent::Status(_)) => continue,
            None => panic!("actor stopped"),
        }
    }
}

#[tokio::test]
async fn test_actor_save_delete_export() {
    let dir = tempfile::tempdir().unwrap();
    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    let actor = tokio::spawn(storage_actor(
        Box::new(MemoryRepository::new()),
        dir.path().to_path_buf(),
        action_rx,
        event_tx,
    ));

    // Initial load
    assert!(next_list(&mut event_rx).await.is_empty());

    action_tx
        .send(Action::SavePalette("Coast".to_string(), colors()))
        .await
        .unwrap();
    let list = next_list(&mut event_rx).await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Coast");
    assert_eq!(list[0].colors, colors());

    action_tx.send(Action::Export(list.clone())).await.unwrap();
    loop {
        match event_rx.recv().await {
            Some(AppEvent::Status(msg)) if msg.starts_with("Exported") => break,
            Some(AppEvent::Status(_)) => continue,
            other => panic!("unexpected {other:?}"),
        }
    }
    assert!(dir.path().join(EXPORT_FILE).exists());

    action_tx
        .send(Action::DeletePalette(list[0].id.clone()))
        .await
        .unwrap();
    assert!(next_list(&mut event_rx).await.is_empty());

    action_tx.send(Action::Quit).await.unwrap();
    actor.await.unwrap();
}
