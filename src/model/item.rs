// File: ./src/model/item.rs
use crate::palette::PALETTE_SIZE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PALETTE_NAME: &str = "Untitled";

/// A named palette the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    pub id: String,
    pub name: String,
    pub colors: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl SavedPalette {
    /// Fresh id and timestamp. A blank name becomes "Untitled".
    pub fn new(name: &str, colors: &[String; PALETTE_SIZE]) -> Self {
        let trimmed = name.trim();
        Self {
            id: Uuid::new_v4().to_string(),
            name: if trimmed.is_empty() {
                DEFAULT_PALETTE_NAME.to_string()
            } else {
                trimmed.to_string()
            },
            colors: colors.to_vec(),
            created_at: Utc::now(),
        }
    }

    /// Local date for list display, e.g. `2025-03-14`.
    pub fn created_date(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d")
            .to_string()
    }
}
