use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_ROOT, DEFAULT_STORAGE_PREFIX, DEFAULT_USER, DEFAULT_VIDEO_HOSTS, REQUIRED_MISSES,
};
use crate::data::Normalizer;

/// Page-level settings handed over by the JS shell.
///
/// Every field has a default, so the shell may pass `undefined`, `{}` or any
/// subset of keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory that holds `mods.json` and `songs/`
    pub data_root: String,
    pub storage_prefix: String,
    /// Substrings a proof link must contain
    pub video_hosts: Vec<String>,
    pub required_misses: u32,
    pub default_user: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_root: DEFAULT_DATA_ROOT.to_string(),
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            video_hosts: DEFAULT_VIDEO_HOSTS.iter().map(|h| h.to_string()).collect(),
            required_misses: REQUIRED_MISSES,
            default_user: DEFAULT_USER.to_string(),
        }
    }
}

impl BoardConfig {
    pub fn accepts_video(&self, link: &str) -> bool {
        !link.is_empty() && self.video_hosts.iter().any(|host| link.contains(host.as_str()))
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(&self.default_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_defaults() {
        let config: BoardConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.storage_prefix, "ffl_subs_");
        assert_eq!(config.required_misses, 0);
    }

    #[test]
    fn partial_object_overrides_only_given_keys() {
        let config: BoardConfig =
            serde_json::from_value(json!({ "data_root": "static", "video_hosts": ["vimeo.com"] }))
                .unwrap();
        assert_eq!(config.data_root, "static");
        assert_eq!(config.video_hosts, vec!["vimeo.com".to_string()]);
        assert_eq!(config.default_user, "Anon");
    }

    #[test]
    fn video_allow_list_matches_substrings() {
        let config = BoardConfig::default();
        assert!(config.accepts_video("https://www.youtube.com/watch?v=abc"));
        assert!(config.accepts_video("https://youtu.be/x"));
        assert!(!config.accepts_video("https://vimeo.com/123"));
        assert!(!config.accepts_video(""));
    }
}
