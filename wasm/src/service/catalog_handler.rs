use tracing::warn;
use wasm_bindgen::prelude::*;

use super::{config_from_js, error_to_js, to_js, SongBoardHandler};
use crate::config::BoardConfig;
use crate::data::LocalSubmissionStore;
use crate::dependency::{BrowserStorage, HttpSource};
use crate::logic::{load_mod_page, load_mods, mod_cards, SongBoard};
use crate::types::SongKey;

fn local_store(config: &BoardConfig) -> LocalSubmissionStore<BrowserStorage> {
    LocalSubmissionStore::new(BrowserStorage::local(), &config.storage_prefix)
}

/// Cards for the mod listing page. Rejects with a displayable message.
#[wasm_bindgen(js_name = loadMods)]
pub async fn load_mods_js(config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let source = HttpSource::new(&config.data_root);
    let mods = load_mods(&source).await.map_err(|err| {
        warn!("{err}");
        error_to_js(err)
    })?;
    to_js(&mod_cards(&mods))
}

/// Header and song cards for one mod (`?mod=` folder id)
#[wasm_bindgen(js_name = loadModPage)]
pub async fn load_mod_page_js(folder: Option<String>, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let source = HttpSource::new(&config.data_root);
    let store = local_store(&config);
    let page = load_mod_page(&source, &store, folder.as_deref(), &config)
        .await
        .map_err(|err| {
            warn!("{err}");
            error_to_js(err)
        })?;
    to_js(&page)
}

/// Load a song page (`?mod=` and `?file=`). The key is checked before any
/// request goes out.
#[wasm_bindgen(js_name = openSongBoard)]
pub async fn open_song_board(
    mod_id: Option<String>,
    file: Option<String>,
    config: JsValue,
) -> Result<SongBoardHandler, JsValue> {
    let config = config_from_js(config)?;
    let key = SongKey::new(mod_id.as_deref(), file.as_deref()).map_err(error_to_js)?;
    let source = HttpSource::new(&config.data_root);
    let board = SongBoard::load(&source, key, &config)
        .await
        .map_err(error_to_js)?;
    Ok(SongBoardHandler::new(board, local_store(&config)))
}
