use crate::color::{canonical_hex, hex_to_rgb, normalize_hex_input};
use crate::config::Config;
use crate::harmony::{HarmonyResult, get_harmonies};
use crate::model::SavedPalette;
use crate::palette::{PALETTE_SIZE, PaletteState};
use crate::tui::action::AppEvent;
use crate::tui::starfield::Starfield;
use rand::Rng;
use ratatui::widgets::ListState;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Tab {
    Generator,
    Harmony,
    Saved,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Generator, Tab::Harmony, Tab::Saved];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Generator => "Generator",
            Tab::Harmony => "Harmony",
            Tab::Saved => "Saved",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Generator => 0,
            Tab::Harmony => 1,
            Tab::Saved => 2,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum InputMode {
    Normal,
    Naming,
    EditingHex,
}

pub struct AppState {
    pub tab: Tab,
    pub palette: PaletteState,
    pub selected_swatch: usize,
    /// Last complete base color; harmonies derive from it.
    pub base_color: String,
    pub harmonies: Vec<HarmonyResult>,
    pub harmony_state: ListState,
    pub saved: Vec<SavedPalette>,
    pub saved_state: ListState,
    pub message: String,
    pub loading: bool,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub starfield: Option<Starfield>,
}

impl AppState {
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let mut h_state = ListState::default();
        h_state.select(Some(0));
        let mut s_state = ListState::default();
        s_state.select(Some(0));
        let mut state = Self {
            tab: Tab::Generator,
            palette: PaletteState::new(rng),
            selected_swatch: 0,
            base_color: String::new(),
            harmonies: vec![],
            harmony_state: h_state,
            saved: vec![],
            saved_state: s_state,
            message: "Space: Generate | Tab: View | s: Save".to_string(),
            loading: true,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            starfield: config
                .starfield
                .then(|| Starfield::new(config.star_count, rng)),
        };
        state.set_base_color(&config.base_color);
        state
    }

    // --- Tabs ---
    pub fn next_tab(&mut self) {
        self.tab = Tab::ALL[(self.tab.index() + 1) % Tab::ALL.len()];
    }
    pub fn previous_tab(&mut self) {
        self.tab = Tab::ALL[(self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len()];
    }

    // --- Generator ---
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.palette.generate(rng);
        self.message = match self.palette.locked_count() {
            0 => "Generated.".to_string(),
            n => format!("Generated ({} locked).", n),
        };
    }
    pub fn select_swatch_left(&mut self) {
        self.selected_swatch = self.selected_swatch.saturating_sub(1);
    }
    pub fn select_swatch_right(&mut self) {
        self.selected_swatch = (self.selected_swatch + 1).min(PALETTE_SIZE - 1);
    }
    pub fn toggle_lock(&mut self, index: usize) {
        self.palette.toggle_lock(index);
    }
    /// Upper-case hex of the selected swatch, as shown on screen.
    pub fn swatch_hex_text(&self) -> Option<String> {
        self.palette
            .colors
            .get(self.selected_swatch)
            .filter(|c| !c.is_empty())
            .map(|c| c.to_uppercase())
    }
    pub fn swatch_rgb_text(&self) -> Option<String> {
        let color = self.palette.colors.get(self.selected_swatch)?;
        hex_to_rgb(color).ok().map(|rgb| rgb.to_string())
    }

    // --- Harmony ---
    /// Accepts a complete hex color and recomputes the harmonies.
    /// Anything else leaves the current base untouched.
    pub fn set_base_color(&mut self, hex: &str) -> bool {
        let Ok(base) = canonical_hex(hex) else {
            return false;
        };
        match get_harmonies(&base) {
            Ok(harmonies) => {
                self.harmonies = harmonies.to_vec();
                self.base_color = base;
                true
            }
            Err(_) => false,
        }
    }
    pub fn selected_harmony(&self) -> Option<&HarmonyResult> {
        self.harmony_state
            .selected()
            .and_then(|i| self.harmonies.get(i))
    }
    /// Upper-case hexes of the selected harmony, space separated.
    pub fn harmony_copy_text(&self) -> Option<String> {
        let harmony = self.selected_harmony()?;
        let hexes: Vec<String> = harmony.colors.iter().map(|c| c.to_uppercase()).collect();
        Some(hexes.join(" "))
    }
    /// Loads the selected harmony into the generator, padded to five colors.
    pub fn apply_selected_harmony(&mut self) {
        if let Some(harmony) = self.selected_harmony().cloned() {
            self.palette.load(&harmony.colors);
            self.tab = Tab::Generator;
            self.message = format!("Applied {}.", harmony.label);
        }
    }

    // --- Saved ---
    pub fn set_saved(&mut self, palettes: Vec<SavedPalette>) {
        self.saved = palettes;
        self.loading = false;
        let sel = self.saved_state.selected().unwrap_or(0);
        if self.saved.is_empty() {
            self.saved_state.select(Some(0));
        } else if sel >= self.saved.len() {
            self.saved_state.select(Some(self.saved.len() - 1));
        }
    }
    pub fn selected_saved(&self) -> Option<&SavedPalette> {
        self.saved_state.selected().and_then(|i| self.saved.get(i))
    }
    pub fn load_selected_saved(&mut self) {
        if let Some(saved) = self.selected_saved().cloned() {
            self.palette.load(&saved.colors);
            self.tab = Tab::Generator;
            self.message = format!("Loaded '{}'.", saved.name);
        }
    }

    // --- Input line ---
    pub fn start_naming(&mut self) {
        self.mode = InputMode::Naming;
        self.reset_input();
    }
    pub fn start_editing_hex(&mut self) {
        self.mode = InputMode::EditingHex;
        self.input_buffer = self.base_color.clone();
        self.cursor_position = self.input_buffer.chars().count();
    }
    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
        self.reset_input();
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let byte_index = self.byte_index();
        if self.mode == InputMode::EditingHex {
            // Keystrokes that cannot lead to a hex color are dropped.
            let mut candidate = self.input_buffer.clone();
            candidate.insert(byte_index, new_char);
            let Some(normalized) = normalize_hex_input(&candidate) else {
                return;
            };
            let grew = normalized.chars().count() - candidate.chars().count();
            self.input_buffer = normalized;
            self.cursor_position += grew;
            self.move_cursor_right();
            self.update_base_from_input();
            return;
        }
        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
            if self.mode == InputMode::EditingHex {
                self.update_base_from_input();
            }
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn update_base_from_input(&mut self) {
        if self.input_buffer.len() == 7 {
            let input = self.input_buffer.clone();
            self.set_base_color(&input);
        }
    }
    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len())
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    // --- Lists ---
    fn list_len(&self) -> usize {
        match self.tab {
            Tab::Generator => 0,
            Tab::Harmony => self.harmonies.len(),
            Tab::Saved => self.saved.len(),
        }
    }
    fn list_state_mut(&mut self) -> &mut ListState {
        match self.tab {
            Tab::Saved => &mut self.saved_state,
            _ => &mut self.harmony_state,
        }
    }
    pub fn next(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let list_state = self.list_state_mut();
        let i = match list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        list_state.select(Some(i));
    }
    pub fn previous(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let list_state = self.list_state_mut();
        let i = match list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        list_state.select(Some(i));
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PalettesLoaded(palettes) => self.set_saved(palettes),
            AppEvent::Error(msg) => {
                self.message = format!("Error: {}", msg);
                self.loading = false;
            }
            AppEvent::Status(msg) => self.message = msg,
        }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(field) = &mut self.starfield {
            field.tick(rng);
        }
    }
}
