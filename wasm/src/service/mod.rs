use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::BoardConfig;

mod board_handler;
#[cfg(target_arch = "wasm32")]
mod catalog_handler;

pub use board_handler::SongBoardHandler;
#[cfg(target_arch = "wasm32")]
pub use catalog_handler::{load_mod_page_js, load_mods_js, open_song_board};

#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = crate::dependency::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = crate::dependency::MemoryStore;

/// Plain JS objects and arrays rather than `Map`s
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

/// `undefined` and `null` mean all defaults
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn config_from_js(value: JsValue) -> Result<BoardConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(BoardConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn error_to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
