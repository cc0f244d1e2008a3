use serde::Serialize;

use super::submission::{js_number, Submission};
use crate::constants::EMPTY_CELL;
use crate::utils::format_date;

const NO_SUBMISSIONS: &str = "No submissions";

/// One display-ready line of the ranking table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize, // 1-based
    pub user: String,
    pub accuracy: String,
    pub date: String,
    pub link: Option<String>,
    pub hz: String,
    #[serde(serialize_with = "js_number::serialize")]
    pub misses: Option<f64>,
    pub notes: String,
}

impl LeaderboardRow {
    fn from_submission(rank: usize, submission: &Submission) -> Self {
        Self {
            rank,
            user: submission.user.clone(),
            accuracy: submission.accuracy_label(),
            date: format_date(submission.date.as_deref()),
            link: Some(submission.link.clone()).filter(|l| !l.is_empty()),
            hz: if submission.hz.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                submission.hz.clone()
            },
            misses: submission.misses,
            notes: submission.notes.clone(),
        }
    }
}

/// Ranked view of a song: canonical submissions in order plus their rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBoard {
    pub submissions: Vec<Submission>,
    pub rows: Vec<LeaderboardRow>,
    pub top: Option<Submission>,
    pub preview: String,
}

impl RankedBoard {
    /// Build from an already ranked sequence
    pub fn from_ranked(submissions: Vec<Submission>) -> Self {
        let rows = submissions
            .iter()
            .enumerate()
            .map(|(idx, s)| LeaderboardRow::from_submission(idx + 1, s))
            .collect();
        let top = submissions.first().cloned();
        let preview = match &top {
            Some(s) => format!("Top: {} • {}", s.user, s.accuracy_label()),
            None => NO_SUBMISSIONS.to_string(),
        };

        Self {
            submissions,
            rows,
            top,
            preview,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }
}

/// Result of a submit attempt, shaped for the form message area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub message: String,
    /// Re-ranked board after a successful append
    pub board: Option<RankedBoard>,
}

impl SubmitOutcome {
    pub fn accepted(message: impl Into<String>, board: RankedBoard) -> Self {
        Self {
            accepted: true,
            message: message.into(),
            board: Some(board),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
            board: None,
        }
    }
}
