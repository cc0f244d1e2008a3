mod clock;
mod console;
mod fetch;
mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use console::{init_logging, ConsoleMakeWriter};
pub use fetch::{DocumentPath, DocumentSource, StaticSource};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use fetch::HttpSource;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
