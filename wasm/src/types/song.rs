use serde::{Deserialize, Serialize};

use crate::constants::{EMPTY_CELL, STORAGE_KEY_SEPARATOR};
use crate::error::CatalogError;

const SONG_FILE_EXTENSION: &str = ".json";

/// Difficulty tier used for badge colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Classify free-form difficulty text; unknown labels count as medium
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("easy") {
            Difficulty::Easy
        } else if lowered.contains("medium") {
            Difficulty::Medium
        } else if lowered.contains("hard") {
            Difficulty::Hard
        } else if lowered.contains("extreme") || lowered.contains("demon") {
            Difficulty::Extreme
        } else {
            Difficulty::Medium
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "badge easy",
            Difficulty::Medium => "badge medium",
            Difficulty::Hard => "badge hard",
            Difficulty::Extreme => "badge extreme",
        }
    }
}

/// Header information of a song page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongMeta {
    pub difficulty: String,
    pub difficulty_label: String,
    pub badge_class: &'static str,
    pub verification: Option<String>,
    pub notes: String,
}

impl SongMeta {
    pub fn new(difficulty: String, verification: Option<String>, notes: String) -> Self {
        let difficulty_label = if difficulty.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            difficulty.clone()
        };
        Self {
            badge_class: Difficulty::classify(&difficulty).badge_class(),
            difficulty,
            difficulty_label,
            verification: verification.filter(|v| !v.is_empty()),
            notes,
        }
    }
}

impl Default for SongMeta {
    fn default() -> Self {
        Self::new(String::new(), None, String::new())
    }
}

/// Song filename without its first `.json`
pub(crate) fn file_stem(file: &str) -> String {
    file.replacen(SONG_FILE_EXTENSION, "", 1)
}

/// Identity of a song: mod folder id plus song filename
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SongKey {
    pub mod_id: String,
    pub file: String,
}

impl SongKey {
    /// Both parts must be present and non-empty
    pub fn new(mod_id: Option<&str>, file: Option<&str>) -> Result<Self, CatalogError> {
        match (mod_id, file) {
            (Some(m), Some(f)) if !m.is_empty() && !f.is_empty() => Ok(Self {
                mod_id: m.to_string(),
                file: f.to_string(),
            }),
            _ => Err(CatalogError::MissingSongKey),
        }
    }

    /// Page title: explicit title if given, else the filename without `.json`
    pub fn display_title(&self, title: Option<&str>) -> String {
        match title.filter(|t| !t.is_empty()) {
            Some(t) => t.to_string(),
            None => file_stem(&self.file),
        }
    }

    pub fn subtitle(&self) -> String {
        format!("{} • ranking", self.mod_id)
    }

    pub(crate) fn storage_suffix(&self) -> String {
        format!("{}{}{}", self.mod_id, STORAGE_KEY_SEPARATOR, self.file)
    }
}
