use std::cmp::Ordering;

use crate::types::Submission;
use crate::utils::parse_timestamp;

/// Order submissions for display: accuracy descending, then date ascending.
///
/// Missing or NaN accuracy compares as 0 and missing or unparseable dates as
/// the epoch. The sort is stable, so exact ties keep their input order.
pub fn rank_submissions(submissions: &[Submission]) -> Vec<Submission> {
    let mut ranked = submissions.to_vec();
    ranked.sort_by(compare_submissions);
    ranked
}

pub fn compare_submissions(a: &Submission, b: &Submission) -> Ordering {
    sort_accuracy(b)
        .partial_cmp(&sort_accuracy(a))
        .unwrap_or(Ordering::Equal)
        .then_with(|| sort_instant(a).cmp(&sort_instant(b)))
}

fn sort_accuracy(submission: &Submission) -> f64 {
    match submission.accuracy {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

fn sort_instant(submission: &Submission) -> i64 {
    submission
        .date
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(0)
}
