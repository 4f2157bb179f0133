pub mod color;
pub mod config;
pub mod harmony;
pub mod logging;
pub mod model;
pub mod palette;
pub mod storage;

#[cfg(feature = "tui")]
pub mod tui;
