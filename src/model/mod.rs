// File: ./src/model/mod.rs
pub mod item;

pub use item::{DEFAULT_PALETTE_NAME, SavedPalette};
