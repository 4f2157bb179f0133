// File: ./src/tui/keys.rs
// Maps key presses to state changes and storage requests
use crate::tui::action::Action;
use crate::tui::state::{AppState, InputMode, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;

pub const HELP_GENERATOR: &str =
    "Space:Gen | ←/→:Pick | Enter/1-5:Lock | c/r:Copy | s:Save | Tab:View | q:Quit";
pub const HELP_HARMONY: &str = "e:Edit Hex | ↑/↓:Pick | Enter:Apply | c:Copy | Tab:View | q:Quit";
pub const HELP_SAVED: &str = "↑/↓:Pick | Enter:Load | d:Del | x:Export | Tab:View | q:Quit";

/// Applies `key` to `state`. Returns the request for the storage actor or
/// the clipboard, if any.
pub fn handle_key<R: Rng + ?Sized>(
    state: &mut AppState,
    key: KeyEvent,
    rng: &mut R,
) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match state.mode {
        InputMode::Naming | InputMode::EditingHex => handle_input_key(state, key),
        InputMode::Normal => handle_normal_key(state, key, rng),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => {
            let mode = state.mode;
            let text = state.input_buffer.clone();
            state.cancel_input();
            match mode {
                InputMode::Naming => {
                    return Some(Action::SavePalette(text, state.palette.colors.clone()));
                }
                InputMode::EditingHex => {
                    if !state.set_base_color(&text) {
                        state.message = format!("Keeping {}.", state.base_color);
                    }
                }
                InputMode::Normal => {}
            }
        }
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Char(c) => state.enter_char(c),
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        _ => {}
    }
    None
}

fn handle_normal_key<R: Rng + ?Sized>(
    state: &mut AppState,
    key: KeyEvent,
    rng: &mut R,
) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Tab => state.next_tab(),
        KeyCode::BackTab => state.previous_tab(),
        _ => match state.tab {
            Tab::Generator => match key.code {
                KeyCode::Char(' ') => state.generate(rng),
                KeyCode::Left | KeyCode::Char('h') => state.select_swatch_left(),
                KeyCode::Right | KeyCode::Char('l') => state.select_swatch_right(),
                KeyCode::Enter => state.toggle_lock(state.selected_swatch),
                KeyCode::Char(c @ '1'..='5') => {
                    let index = c as usize - '1' as usize;
                    state.selected_swatch = index;
                    state.toggle_lock(index);
                }
                KeyCode::Char('c') => return state.swatch_hex_text().map(Action::CopyToClipboard),
                KeyCode::Char('r') => return state.swatch_rgb_text().map(Action::CopyToClipboard),
                KeyCode::Char('s') => {
                    state.start_naming();
                    state.message = "Name the palette (empty: Untitled)".to_string();
                }
                _ => {}
            },
            Tab::Harmony => match key.code {
                KeyCode::Char('e') | KeyCode::Char('#') => state.start_editing_hex(),
                KeyCode::Down | KeyCode::Char('j') => state.next(),
                KeyCode::Up | KeyCode::Char('k') => state.previous(),
                KeyCode::Enter => state.apply_selected_harmony(),
                KeyCode::Char('c') => return state.harmony_copy_text().map(Action::CopyToClipboard),
                _ => {}
            },
            Tab::Saved => match key.code {
                KeyCode::Down | KeyCode::Char('j') => state.next(),
                KeyCode::Up | KeyCode::Char('k') => state.previous(),
                KeyCode::Enter => state.load_selected_saved(),
                KeyCode::Char('d') => {
                    if let Some(p) = state.selected_saved() {
                        return Some(Action::DeletePalette(p.id.clone()));
                    }
                }
                KeyCode::Char('x') => {
                    if state.saved.is_empty() {
                        state.message = "Nothing to export.".to_string();
                    } else {
                        return Some(Action::Export(state.saved.clone()));
                    }
                }
                _ => {}
            },
        },
    }
    None
}

pub fn help_text(tab: Tab) -> &'static str {
    match tab {
        Tab::Generator => HELP_GENERATOR,
        Tab::Harmony => HELP_HARMONY,
        Tab::Saved => HELP_SAVED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::SavedPalette;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (AppState, StdRng) {
        let mut rng = StdRng::seed_from_u64(21);
        (AppState::new(&Config::default(), &mut rng), rng)
    }

    #[test]
    fn test_space_keeps_locked_colors() {
        let (mut state, mut rng) = setup();
        handle_key(&mut state, press(KeyCode::Char('3')), &mut rng);
        let locked = state.palette.colors[2].clone();
        let before = state.palette.colors.clone();
        handle_key(&mut state, press(KeyCode::Char(' ')), &mut rng);
        assert_eq!(state.palette.colors[2], locked);
        assert_ne!(state.palette.colors, before);
    }

    #[test]
    fn test_save_flow() {
        let (mut state, mut rng) = setup();
        assert!(handle_key(&mut state, press(KeyCode::Char('s')), &mut rng).is_none());
        assert_eq!(state.mode, InputMode::Naming);
        for c in "Mood".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)), &mut rng);
        }
        let action = handle_key(&mut state, press(KeyCode::Enter), &mut rng);
        match action {
            Some(Action::SavePalette(name, colors)) => {
                assert_eq!(name, "Mood");
                assert_eq!(colors, state.palette.colors);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_delete_and_export_need_palettes() {
        let (mut state, mut rng) = setup();
        state.tab = Tab::Saved;
        assert!(handle_key(&mut state, press(KeyCode::Char('d')), &mut rng).is_none());
        assert!(handle_key(&mut state, press(KeyCode::Char('x')), &mut rng).is_none());

        let p = SavedPalette::new("p", &state.palette.colors);
        state.set_saved(vec![p.clone()]);
        match handle_key(&mut state, press(KeyCode::Char('d')), &mut rng) {
            Some(Action::DeletePalette(id)) => assert_eq!(id, p.id),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Char('x')), &mut rng),
            Some(Action::Export(list)) if list.len() == 1
        ));
    }

    #[test]
    fn test_quit_only_in_normal_mode() {
        let (mut state, mut rng) = setup();
        state.start_naming();
        assert!(handle_key(&mut state, press(KeyCode::Char('q')), &mut rng).is_none());
        assert_eq!(state.input_buffer, "q");
        handle_key(&mut state, press(KeyCode::Esc), &mut rng);
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Char('q')), &mut rng),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_copy_keys() {
        let (mut state, mut rng) = setup();
        state.selected_swatch = 2;
        let hex = state.palette.colors[2].to_uppercase();
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Char('c')), &mut rng),
            Some(Action::CopyToClipboard(text)) if text == hex
        ));
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Char('r')), &mut rng),
            Some(Action::CopyToClipboard(text)) if text.starts_with("rgb(")
        ));

        state.tab = Tab::Harmony;
        assert!(matches!(
            handle_key(&mut state, press(KeyCode::Char('c')), &mut rng),
            Some(Action::CopyToClipboard(text)) if text == "#6D28D9 #94D926"
        ));
        // Typing a name never copies.
        state.start_naming();
        assert!(handle_key(&mut state, press(KeyCode::Char('c')), &mut rng).is_none());
    }
}
