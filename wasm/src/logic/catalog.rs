use serde_json::Value;
use tracing::{debug, info, warn};

use super::pipeline::SongBoard;
use crate::config::BoardConfig;
use crate::constants::NO_SONG_DATA;
use crate::data::LocalSubmissionStore;
use crate::dependency::{DocumentPath, DocumentSource, KeyValueStore};
use crate::error::{CatalogError, Result};
use crate::types::{ModCard, ModDescriptor, ModPage, SongCard, SongKey};

/// Decode the mods index. It must be a non-empty list of descriptors.
pub fn parse_mods(document: Value) -> Result<Vec<ModDescriptor>> {
    if !document.is_array() {
        return Err(CatalogError::Malformed("expected a list of mods".to_string()));
    }
    let mods: Vec<ModDescriptor> =
        serde_json::from_value(document).map_err(|e| CatalogError::Malformed(e.to_string()))?;
    if mods.is_empty() {
        return Err(CatalogError::NoMods);
    }
    Ok(mods)
}

pub async fn load_mods<D: DocumentSource>(source: &D) -> Result<Vec<ModDescriptor>> {
    let document = source.fetch_json(&DocumentPath::ModsIndex).await?;
    let mods = parse_mods(document)?;
    info!("Loaded {} mods", mods.len());
    Ok(mods)
}

pub fn mod_cards(mods: &[ModDescriptor]) -> Vec<ModCard> {
    mods.iter().map(ModDescriptor::card).collect()
}

pub fn find_mod<'a>(mods: &'a [ModDescriptor], folder: Option<&str>) -> Result<&'a ModDescriptor> {
    let folder = folder
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or(CatalogError::MissingFolder)?;
    mods.iter()
        .find(|m| m.folder == folder)
        .ok_or_else(|| CatalogError::ModNotFound(folder.to_string()))
}

/// Mod header plus one card per song, each with its current leader.
///
/// Song documents are fetched one after another. A song that fails to load
/// still gets a card, previewed as "No song data".
pub async fn load_mod_page<D, S>(
    source: &D,
    store: &LocalSubmissionStore<S>,
    folder: Option<&str>,
    config: &BoardConfig,
) -> Result<ModPage>
where
    D: DocumentSource,
    S: KeyValueStore,
{
    let mods = load_mods(source).await?;
    let descriptor = find_mod(&mods, folder)?;

    let mut songs = Vec::with_capacity(descriptor.songs.len());
    for song in &descriptor.songs {
        let preview = match SongKey::new(Some(&descriptor.folder), Some(&song.file)) {
            Ok(key) => match SongBoard::load(source, key, config).await {
                Ok(board) => board.render(store).preview,
                Err(_) => NO_SONG_DATA.to_string(),
            },
            Err(err) => {
                warn!("Song '{}' in {}: {err}", song.display_title(), descriptor.folder);
                NO_SONG_DATA.to_string()
            }
        };
        songs.push(SongCard::new(song, preview));
    }

    debug!("Mod page {} with {} songs", descriptor.folder, songs.len());
    Ok(ModPage {
        mod_card: descriptor.card(),
        songs,
    })
}
