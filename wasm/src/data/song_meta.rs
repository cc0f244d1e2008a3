use serde_json::{Map, Value};

use super::coerce::first_text;
use crate::types::SongMeta;

const DIFFICULTY_KEYS: [&str; 3] = ["difficulty", "level", "diff"];
const VERIFICATION_KEYS: [&str; 4] = [
    "verification",
    "verifier",
    "verificationVideo",
    "verification_link",
];
const NOTES_KEYS: [&str; 2] = ["notes", "description"];

/// Read the header fields of a song document
pub fn read_song_meta(document: &Value) -> SongMeta {
    let empty = Map::new();
    let fields = document.as_object().unwrap_or(&empty);

    SongMeta::new(
        first_text(fields, &DIFFICULTY_KEYS).unwrap_or_default(),
        first_text(fields, &VERIFICATION_KEYS),
        first_text(fields, &NOTES_KEYS).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_aliased_fields() {
        let meta = read_song_meta(&json!({
            "level": "Extreme Demon",
            "verificationVideo": "https://youtu.be/v",
            "description": "Tap jacks everywhere",
            "submissions": []
        }));
        assert_eq!(meta.difficulty, "Extreme Demon");
        assert_eq!(meta.badge_class, "badge extreme");
        assert_eq!(meta.verification.as_deref(), Some("https://youtu.be/v"));
        assert_eq!(meta.notes, "Tap jacks everywhere");
    }

    #[test]
    fn array_document_has_empty_meta() {
        let meta = read_song_meta(&json!([{ "user": "Ana" }]));
        assert_eq!(meta, SongMeta::default());
    }
}
