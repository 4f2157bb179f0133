// File: ./src/tui/mod.rs
pub mod action;
pub mod clipboard;
pub mod keys;
pub mod starfield;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::model::SavedPalette;
use crate::storage::{
    self, FileRepository, MemoryRepository, PaletteRepository, export_palettes_json,
};
use crate::{
    logging, tui::action::*, tui::clipboard::Clipboard, tui::state::AppState, tui::view::draw,
};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Frame period of the UI loop; also paces the starfield.
const FRAME: Duration = Duration::from_millis(50);

pub async fn run() -> Result<()> {
    let data_dir = storage::data_dir();
    if let Some(dir) = &data_dir {
        logging::install_panic_hook(dir);
        if let Err(e) = logging::init(dir) {
            eprintln!("Logging disabled: {}", e);
        }
    }

    let config = Config::load()?;
    log::info!("Starting with {:?}", config);

    let repo: Box<dyn PaletteRepository> = match &config.palettes_path {
        Some(path) => Box::new(FileRepository::new(path.clone())),
        None => match FileRepository::default_location() {
            Ok(repo) => Box::new(repo),
            Err(e) => {
                log::warn!("{}; saved palettes will not persist", e);
                Box::new(MemoryRepository::new())
            }
        },
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut app_state = AppState::new(&config, &mut rng);
    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // SPAWN ACTOR
    let actor = tokio::spawn(storage_actor(repo, config.export_dir(), action_rx, event_tx));

    let result = event_loop(
        &mut terminal,
        &mut app_state,
        &mut rng,
        &action_tx,
        &mut event_rx,
    )
    .await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    drop(action_tx);
    let _ = actor.await;
    log::info!("Bye");
    result
}

async fn event_loop<R: Rng + ?Sized>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app_state: &mut AppState,
    rng: &mut R,
    action_tx: &mpsc::Sender<Action>,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut clipboard = Clipboard::new();
    loop {
        terminal.draw(|f| draw(f, app_state))?;

        while let Ok(event) = event_rx.try_recv() {
            app_state.apply_event(event);
        }

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) => match keys::handle_key(app_state, key, rng) {
                    Some(Action::CopyToClipboard(text)) => {
                        app_state.apply_event(clipboard.copy(&text));
                    }
                    Some(action) => {
                        let quit = matches!(action, Action::Quit);
                        let _ = action_tx.send(action).await;
                        if quit {
                            return Ok(());
                        }
                    }
                    None => {}
                },
                _ => {}
            }
        }

        app_state.tick(rng);
    }
}

/// Owns the repository; every write happens here, off the UI loop.
pub async fn storage_actor(
    mut repo: Box<dyn PaletteRepository>,
    export_dir: PathBuf,
    mut action_rx: mpsc::Receiver<Action>,
    event_tx: mpsc::Sender<AppEvent>,
) {
    let palettes = repo.load();
    let _ = event_tx.send(AppEvent::PalettesLoaded(palettes)).await;

    while let Some(action) = action_rx.recv().await {
        match action {
            Action::Quit => break,
            Action::CopyToClipboard(_) => log::warn!("Clipboard request reached storage; ignored"),

            Action::SavePalette(name, colors) => {
                let palette = SavedPalette::new(&name, &colors);
                let saved_name = palette.name.clone();
                let result = repo.append(palette);
                match result {
                    Ok(list) => {
                        let _ = event_tx.send(AppEvent::PalettesLoaded(list)).await;
                        let _ = event_tx
                            .send(AppEvent::Status(format!("Saved '{}'.", saved_name)))
                            .await;
                    }
                    Err(e) => {
                        log::error!("Save failed: {:#}", e);
                        let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                    }
                }
            }

            Action::DeletePalette(id) => {
                let result = repo.remove(&id);
                match result {
                    Ok(list) => {
                        let _ = event_tx.send(AppEvent::PalettesLoaded(list)).await;
                        let _ = event_tx
                            .send(AppEvent::Status("Deleted.".to_string()))
                            .await;
                    }
                    Err(e) => {
                        log::error!("Delete failed: {:#}", e);
                        let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                    }
                }
            }

            Action::Export(palettes) => match export_palettes_json(&palettes, &export_dir) {
                Ok(path) => {
                    let _ = event_tx
                        .send(AppEvent::Status(format!("Exported to {}", path.display())))
                        .await;
                }
                Err(e) => {
                    log::error!("Export failed: {:#}", e);
                    let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                }
            },
        }
    }
}
