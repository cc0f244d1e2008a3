use serde::Serialize;

use crate::constants::EMPTY_CELL;
use crate::utils::format_number;

/// One player's recorded run for a song, after normalization.
///
/// Numeric fields follow JavaScript `Number()` coercion: `None` means the
/// source never carried the field, `Some(NaN)` means it carried something
/// that does not parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub user: String,
    #[serde(serialize_with = "js_number::serialize")]
    pub accuracy: Option<f64>,
    pub link: String,
    pub date: Option<String>,
    pub hz: String,
    #[serde(serialize_with = "js_number::serialize")]
    pub misses: Option<f64>,
    pub notes: String,
}

impl Submission {
    /// Table label for the accuracy column: `97.5%`, `NaN%` or the empty marker
    pub fn accuracy_label(&self) -> String {
        match self.accuracy {
            Some(value) => format!("{}%", format_number(value)),
            None => EMPTY_CELL.to_string(),
        }
    }
}

/// Record written to local storage by the intake form.
///
/// `platform` is captured for reviewers and ignored by ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredSubmission {
    #[serde(flatten)]
    pub submission: Submission,
    pub platform: String,
}

pub(crate) mod js_number {
    use serde::Serializer;

    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    /// Write numbers the way `JSON.stringify` does: integral values without a
    /// fraction, NaN and infinities as `null`.
    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) if v.is_finite() => {
                if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*v as i64)
                } else {
                    serializer.serialize_f64(*v)
                }
            }
            _ => serializer.serialize_none(),
        }
    }
}
