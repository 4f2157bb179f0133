use crate::model::SavedPalette;
use crate::palette::PALETTE_SIZE;

/// Requests from the UI loop to the storage actor.
#[derive(Debug)]
pub enum Action {
    SavePalette(String, [String; PALETTE_SIZE]),
    DeletePalette(String),
    Export(Vec<SavedPalette>),
    /// Handled by the UI loop, which owns the clipboard.
    CopyToClipboard(String),
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    PalettesLoaded(Vec<SavedPalette>),
    Error(String),
    Status(String),
}
