// File: ./src/storage.rs
// Saved palette persistence
use crate::model::SavedPalette;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const PALETTES_FILE: &str = "palettes.json";
pub const EXPORT_FILE: &str = "colormind-palettes.json";

/// Platform data directory, created on first use.
pub fn data_dir() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "colormind", "colormind")?;
    let data_dir = proj.data_dir();
    if !data_dir.exists() {
        let _ = fs::create_dir_all(data_dir);
    }
    Some(data_dir.to_path_buf())
}

pub struct LocalStorage;

impl LocalStorage {
    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Runs `f` while holding an exclusive lock on `<path>.lock`.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let lock_path = path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .with_context(|| format!("opening lock file {}", lock_path.display()))?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = FileExt::unlock(&lock_file);
        result
    }
}

/// Storage for the list of saved palettes, most recent first.
pub trait PaletteRepository: Send {
    /// Never fails: missing or unreadable data yields an empty list.
    fn load(&self) -> Vec<SavedPalette>;

    /// Replaces the whole stored list.
    fn save(&mut self, palettes: &[SavedPalette]) -> Result<()>;

    /// Stores `palette` in front of the existing ones and returns the new list.
    fn append(&mut self, palette: SavedPalette) -> Result<Vec<SavedPalette>> {
        let mut palettes = self.load();
        palettes.insert(0, palette);
        self.save(&palettes)?;
        Ok(palettes)
    }

    /// Drops the palette with `id`, keeping the order of the others.
    fn remove(&mut self, id: &str) -> Result<Vec<SavedPalette>> {
        let mut palettes = self.load();
        palettes.retain(|p| p.id != id);
        self.save(&palettes)?;
        Ok(palettes)
    }
}

/// Palettes kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `palettes.json` in the platform data directory.
    pub fn default_location() -> Result<Self> {
        let dir = data_dir().context("could not determine a data directory")?;
        Ok(Self::new(dir.join(PALETTES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_internal(path: &Path) -> Vec<SavedPalette> {
        if !path.exists() {
            return vec![];
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Vec<SavedPalette>>(&json) {
                Ok(palettes) => palettes,
                Err(e) => {
                    log::warn!("Ignoring corrupt palette file {}: {}", path.display(), e);
                    vec![]
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                vec![]
            }
        }
    }

    fn write_internal(path: &Path, palettes: &[SavedPalette]) -> Result<()> {
        let json = serde_json::to_string(palettes)?;
        LocalStorage::atomic_write(path, json)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Locks -> Loads -> Applies Closure -> Saves -> Unlocks.
    pub fn modify<F>(&self, f: F) -> Result<Vec<SavedPalette>>
    where
        F: FnOnce(&mut Vec<SavedPalette>),
    {
        LocalStorage::with_lock(&self.path, || {
            let mut palettes = Self::load_internal(&self.path);
            f(&mut palettes);
            Self::write_internal(&self.path, &palettes)?;
            Ok(palettes)
        })
    }
}

impl PaletteRepository for FileRepository {
    fn load(&self) -> Vec<SavedPalette> {
        if !self.path.exists() {
            return vec![];
        }
        LocalStorage::with_lock(&self.path, || Ok(Self::load_internal(&self.path)))
            .unwrap_or_default()
    }

    fn save(&mut self, palettes: &[SavedPalette]) -> Result<()> {
        LocalStorage::with_lock(&self.path, || Self::write_internal(&self.path, palettes))
    }

    fn append(&mut self, palette: SavedPalette) -> Result<Vec<SavedPalette>> {
        log::info!("Saving palette '{}' ({})", palette.name, palette.id);
        self.modify(|palettes| palettes.insert(0, palette))
    }

    fn remove(&mut self, id: &str) -> Result<Vec<SavedPalette>> {
        log::info!("Deleting palette {}", id);
        self.modify(|palettes| palettes.retain(|p| p.id != id))
    }
}

/// In-process repository. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    palettes: Vec<SavedPalette>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaletteRepository for MemoryRepository {
    fn load(&self) -> Vec<SavedPalette> {
        self.palettes.clone()
    }

    fn save(&mut self, palettes: &[SavedPalette]) -> Result<()> {
        self.palettes = palettes.to_vec();
        Ok(())
    }
}

/// Writes pretty-printed JSON to `<dir>/colormind-palettes.json`.
pub fn export_palettes_json(palettes: &[SavedPalette], dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let path = dir.join(EXPORT_FILE);
    let json = serde_json::to_string_pretty(palettes)?;
    LocalStorage::atomic_write(&path, json)?;
    log::info!("Exported {} palettes to {}", palettes.len(), path.display());
    Ok(path)
}
