use serde::Deserialize;

use crate::config::BoardConfig;
use crate::constants::{ACCURACY_MAX, ACCURACY_MIN, ACCURACY_SCALE};
use crate::data::parse_js_number;
use crate::dependency::Clock;
use crate::error::IntakeRejection;
use crate::types::{StoredSubmission, Submission};

/// Raw values of the submission form, as typed by the player
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    pub user: String,
    pub accuracy: String,
    pub video: String,
    pub hz: String,
    pub misses: String,
    pub platform: String,
    pub notes: String,
}

/// Validate a form and build the entry to persist.
///
/// Rules run in a fixed order and the first failure is returned. Nothing is
/// written here; the caller persists only on `Ok`.
pub fn validate_submission(
    form: &SubmissionForm,
    config: &BoardConfig,
    clock: &impl Clock,
) -> Result<StoredSubmission, IntakeRejection> {
    let user = form.user.trim();
    if user.is_empty() {
        return Err(IntakeRejection::MissingUser);
    }

    // `Number("")` is 0, so a blank accuracy passes as 0
    let accuracy = parse_js_number(form.accuracy.trim());
    if accuracy.is_nan() || !(ACCURACY_MIN..=ACCURACY_MAX).contains(&accuracy) {
        return Err(IntakeRejection::InvalidAccuracy);
    }

    let video = form.video.trim();
    if !config.accepts_video(video) {
        return Err(IntakeRejection::InvalidVideoLink);
    }

    let misses_raw = form.misses.trim();
    let misses = parse_js_number(misses_raw);
    if misses_raw.is_empty() || misses.is_nan() {
        return Err(IntakeRejection::InvalidMisses);
    }
    if misses != f64::from(config.required_misses) {
        return Err(IntakeRejection::MissesNotAllowed {
            required: config.required_misses,
        });
    }

    Ok(StoredSubmission {
        submission: Submission {
            user: user.to_string(),
            accuracy: Some(round_accuracy(accuracy)),
            link: video.to_string(),
            date: Some(clock.now_iso()),
            hz: form.hz.trim().to_string(),
            misses: Some(misses),
            notes: form.notes.trim().to_string(),
        },
        platform: form.platform.trim().to_string(),
    })
}

fn round_accuracy(accuracy: f64) -> f64 {
    (accuracy * ACCURACY_SCALE).round() / ACCURACY_SCALE
}
