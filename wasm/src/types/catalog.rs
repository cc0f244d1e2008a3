use serde::{Deserialize, Deserializer, Serialize};

use super::song::{file_stem, Difficulty};
use crate::constants::UNKNOWN_DIFFICULTY;

const ICON_MAX_CHARS: usize = 2;

/// Entry of `mods.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModDescriptor {
    pub folder: String,
    #[serde(rename = "mod")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub songs: Vec<SongEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: String,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Hand-edited index files use `null` for "nothing here"
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SongEntry {
    /// Configured title, or the filename without `.json`
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            file_stem(&self.file)
        } else {
            self.title.clone()
        }
    }
}

impl ModDescriptor {
    /// Up to two characters: the configured icon or the first letter of the name
    pub fn icon_text(&self) -> String {
        match self.icon.as_deref().filter(|i| !i.is_empty()) {
            Some(icon) => icon.chars().take(ICON_MAX_CHARS).collect(),
            None => self.name.chars().take(1).collect(),
        }
    }

    pub fn accent_gradient(&self) -> Option<String> {
        self.color
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!("linear-gradient(135deg, {c}33, {c}1a)"))
    }

    pub fn card(&self) -> ModCard {
        ModCard {
            folder: self.folder.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            icon: self.icon_text(),
            color: self.color.clone().filter(|c| !c.is_empty()),
            accent: self.accent_gradient(),
        }
    }
}

/// Tile on the mod listing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModCard {
    pub folder: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: Option<String>,
    pub accent: Option<String>,
}

/// Tile on a mod page with the song's current leader
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongCard {
    pub title: String,
    pub file: String,
    pub difficulty: String,
    pub badge_class: &'static str,
    pub preview: String,
}

impl SongCard {
    pub fn new(song: &SongEntry, preview: String) -> Self {
        let difficulty = song.difficulty.clone().filter(|d| !d.is_empty());
        Self {
            title: song.display_title(),
            file: song.file.clone(),
            badge_class: Difficulty::classify(difficulty.as_deref().unwrap_or_default())
                .badge_class(),
            difficulty: difficulty.unwrap_or_else(|| UNKNOWN_DIFFICULTY.to_string()),
            preview,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModPage {
    #[serde(rename = "mod")]
    pub mod_card: ModCard,
    pub songs: Vec<SongCard>,
}
