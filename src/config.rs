// File: ./src/config.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_COLOR: &str = "#6d28d9";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the location of `palettes.json`.
    pub palettes_path: Option<PathBuf>,
    /// Where exports land. Defaults to the current directory.
    pub export_dir: Option<PathBuf>,
    /// Starting color of the Harmony tab.
    pub base_color: String,
    pub starfield: bool,
    pub star_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palettes_path: None,
            export_dir: None,
            base_color: DEFAULT_BASE_COLOR.to_string(),
            starfield: true,
            star_count: 80,
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "colormind", "colormind")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Reads the platform config file. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.base_color = match crate::color::canonical_hex(&config.base_color) {
            Ok(hex) => hex,
            Err(e) => {
                log::warn!("{}; using {}", e, DEFAULT_BASE_COLOR);
                DEFAULT_BASE_COLOR.to_string()
            }
        };
        Ok(config)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
