use serde_json::{Map, Value};

use super::coerce::{first_number, first_text, non_null_number};
use crate::constants::DEFAULT_USER;
use crate::types::Submission;

// Field aliases, highest precedence first
const USER_KEYS: [&str; 4] = ["user", "player", "name", "nick"];
// A null primary accuracy falls through to `percent`; other numeric nulls are 0
const ACCURACY_KEY: &str = "accuracy";
const ACCURACY_FALLBACK_KEYS: [&str; 1] = ["percent"];
const LINK_KEYS: [&str; 3] = ["link", "video", "url"];
const DATE_KEYS: [&str; 3] = ["date", "timestamp", "time"];
const HZ_KEYS: [&str; 3] = ["hz", "refresh", "fps"];
const MISSES_KEYS: [&str; 2] = ["misses", "miss"];
const NOTES_KEYS: [&str; 2] = ["notes", "note"];

/// Turns raw score records into canonical [`Submission`]s.
///
/// Total by construction: every input, including non-objects, yields a
/// submission. Fields that cannot be resolved fall back to null/empty.
#[derive(Debug, Clone)]
pub struct Normalizer {
    default_user: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_USER)
    }
}

impl Normalizer {
    pub fn new(default_user: &str) -> Self {
        let default_user = if default_user.trim().is_empty() {
            DEFAULT_USER
        } else {
            default_user
        };
        Self {
            default_user: default_user.to_string(),
        }
    }

    pub fn normalize(&self, raw: &Value) -> Submission {
        let empty = Map::new();
        let record = raw.as_object().unwrap_or(&empty);

        Submission {
            user: first_text(record, &USER_KEYS).unwrap_or_else(|| self.default_user.clone()),
            accuracy: non_null_number(record, ACCURACY_KEY)
                .or_else(|| first_number(record, &ACCURACY_FALLBACK_KEYS)),
            link: first_text(record, &LINK_KEYS).unwrap_or_default(),
            date: first_text(record, &DATE_KEYS),
            hz: first_text(record, &HZ_KEYS).unwrap_or_default(),
            misses: first_number(record, &MISSES_KEYS),
            notes: first_text(record, &NOTES_KEYS).unwrap_or_default(),
        }
    }

    pub fn normalize_all(&self, raws: &[Value]) -> Vec<Submission> {
        raws.iter().map(|raw| self.normalize(raw)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_aliases_from_mixed_record() {
        let submission = Normalizer::default().normalize(&json!({
            "percent": "97.5",
            "name": "Ana",
            "timestamp": "2024-01-01T00:00:00Z"
        }));

        assert_eq!(
            submission,
            Submission {
                user: "Ana".to_string(),
                accuracy: Some(97.5),
                link: String::new(),
                date: Some("2024-01-01T00:00:00Z".to_string()),
                hz: String::new(),
                misses: None,
                notes: String::new(),
            }
        );
    }

    #[test]
    fn primary_key_wins_over_alias() {
        let submission = Normalizer::default().normalize(&json!({
            "user": "Primary",
            "player": "Secondary",
            "accuracy": 90,
            "percent": 10,
            "link": "https://youtu.be/a",
            "video": "https://youtu.be/b",
            "misses": 0,
            "miss": 5
        }));
        assert_eq!(submission.user, "Primary");
        assert_eq!(submission.accuracy, Some(90.0));
        assert_eq!(submission.link, "https://youtu.be/a");
        assert_eq!(submission.misses, Some(0.0));
    }

    #[test]
    fn blank_user_falls_through_to_default() {
        let submission = Normalizer::default().normalize(&json!({ "user": "  ", "nick": "" }));
        assert_eq!(submission.user, "Anon");
    }

    #[test]
    fn malformed_present_accuracy_is_nan_not_null() {
        let submission = Normalizer::default().normalize(&json!({ "accuracy": "abc" }));
        assert!(submission.accuracy.is_some_and(f64::is_nan));
        assert_eq!(submission.accuracy_label(), "NaN%");

        let absent = Normalizer::default().normalize(&json!({}));
        assert_eq!(absent.accuracy, None);
        assert_eq!(absent.accuracy_label(), "—");
    }

    #[test]
    fn null_accuracy_falls_back_to_percent() {
        let submission =
            Normalizer::default().normalize(&json!({ "accuracy": null, "percent": 88.25 }));
        assert_eq!(submission.accuracy, Some(88.25));
    }

    #[test]
    fn null_misses_coerce_to_zero() {
        let normalizer = Normalizer::default();
        let submission = normalizer.normalize(&json!({ "user": "A", "misses": null }));
        assert_eq!(submission.misses, Some(0.0));

        let submission = normalizer.normalize(&json!({ "accuracy": 90, "miss": null }));
        assert_eq!(submission.misses, Some(0.0));
    }

    #[test]
    fn null_percent_is_zero_accuracy() {
        let submission =
            Normalizer::default().normalize(&json!({ "user": "A", "percent": null }));
        assert_eq!(submission.accuracy, Some(0.0));
        assert_eq!(submission.accuracy_label(), "0%");

        let both_null = Normalizer::default()
            .normalize(&json!({ "accuracy": null, "percent": null, "misses": null }));
        assert_eq!(both_null.accuracy, Some(0.0));
        assert_eq!(both_null.misses, Some(0.0));
    }

    #[test]
    fn non_object_input_yields_defaults() {
        let normalizer = Normalizer::default();
        for raw in [json!(null), json!(42), json!("Ana"), json!([1, 2])] {
            let submission = normalizer.normalize(&raw);
            assert_eq!(submission.user, "Anon");
            assert_eq!(submission.accuracy, None);
            assert_eq!(submission.date, None);
        }
    }

    #[test]
    fn every_record_gets_a_non_empty_user() {
        let normalizer = Normalizer::new("   ");
        let raws = vec![
            json!({ "user": "" }),
            json!({ "player": 0 }),
            json!({ "name": false }),
            json!({ "nick": "x" }),
        ];
        for submission in normalizer.normalize_all(&raws) {
            assert!(!submission.user.is_empty());
        }
    }

    #[test]
    fn numeric_hz_is_rendered_as_text() {
        let submission = Normalizer::default().normalize(&json!({ "fps": 240 }));
        assert_eq!(submission.hz, "240");
    }
}
