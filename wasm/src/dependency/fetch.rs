use std::collections::HashMap;

use serde_json::Value;

use crate::constants::{MODS_INDEX_FILE, SONGS_DIR};
use crate::error::FetchError;
use crate::types::SongKey;

/// Location of a JSON document in the static data tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentPath {
    ModsIndex,
    Song(SongKey),
}

impl DocumentPath {
    /// Build the request path; `encode` escapes one path segment
    pub fn to_url(&self, data_root: &str, encode: impl Fn(&str) -> String) -> String {
        let root = data_root.trim_end_matches('/');
        match self {
            DocumentPath::ModsIndex => format!("{root}/{MODS_INDEX_FILE}"),
            DocumentPath::Song(key) => format!(
                "{root}/{SONGS_DIR}/{}/{}",
                encode(&key.mod_id),
                encode(&key.file)
            ),
        }
    }
}

/// Async JSON source. One request is in flight at a time; there is no
/// cancellation or timeout.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch_json(&self, path: &DocumentPath) -> Result<Value, FetchError>;
}

/// Documents held in memory, keyed by path. Unknown paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<DocumentPath, Result<Value, FetchError>>,
}

impl StaticSource {
    pub fn with_document(mut self, path: DocumentPath, document: Value) -> Self {
        self.documents.insert(path, Ok(document));
        self
    }

    pub fn with_failure(mut self, path: DocumentPath, error: FetchError) -> Self {
        self.documents.insert(path, Err(error));
        self
    }
}

impl DocumentSource for StaticSource {
    async fn fetch_json(&self, path: &DocumentPath) -> Result<Value, FetchError> {
        self.documents
            .get(path)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

/// Browser `fetch` against the site's data directory
#[cfg(target_arch = "wasm32")]
pub struct HttpSource {
    data_root: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpSource {
    pub fn new(data_root: &str) -> Self {
        Self {
            data_root: data_root.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl DocumentSource for HttpSource {
    async fn fetch_json(&self, path: &DocumentPath) -> Result<Value, FetchError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let url = path.to_url(&self.data_root, |segment| {
            String::from(js_sys::encode_uri_component(segment))
        });
        let window = web_sys::window().ok_or(FetchError::NoWindow)?;

        let init = web_sys::RequestInit::new();
        if matches!(path, DocumentPath::ModsIndex) {
            init.set_cache(web_sys::RequestCache::NoCache);
        }

        tracing::debug!("Fetching {url}");
        let response = JsFuture::from(window.fetch_with_str_and_init(&url, &init))
            .await
            .map_err(|e| FetchError::Network(super::js_error_text(&e)))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch did not yield a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .json()
            .map_err(|e| FetchError::Malformed(super::js_error_text(&e)))?;
        let body = JsFuture::from(body)
            .await
            .map_err(|e| FetchError::Malformed(super::js_error_text(&e)))?;

        serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    fn song(mod_id: &str, file: &str) -> DocumentPath {
        DocumentPath::Song(SongKey::new(Some(mod_id), Some(file)).unwrap())
    }

    #[test]
    fn builds_data_paths() {
        let identity = |s: &str| s.to_string();
        assert_eq!(
            DocumentPath::ModsIndex.to_url("data", identity),
            "data/mods.json"
        );
        assert_eq!(
            song("fnf", "a.json").to_url("data/", identity),
            "data/songs/fnf/a.json"
        );
    }

    #[test]
    fn song_segments_are_encoded() {
        let url = song("my mod", "a b.json").to_url("data", |s| s.replace(' ', "%20"));
        assert_eq!(url, "data/songs/my%20mod/a%20b.json");
    }

    #[test]
    fn static_source_serves_known_documents() {
        let source = StaticSource::default().with_document(DocumentPath::ModsIndex, json!([]));
        assert_eq!(
            block_on(source.fetch_json(&DocumentPath::ModsIndex)),
            Ok(json!([]))
        );
    }

    #[test]
    fn static_source_unknown_path_is_not_found() {
        let source = StaticSource::default()
            .with_failure(song("fnf", "a.json"), FetchError::Network("offline".into()));
        assert_eq!(
            block_on(source.fetch_json(&DocumentPath::ModsIndex)),
            Err(FetchError::Status(404))
        );
        assert_eq!(
            block_on(source.fetch_json(&song("fnf", "a.json"))),
            Err(FetchError::Network("offline".into()))
        );
    }
}
