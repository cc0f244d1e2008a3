//! Leaderboard core for a rhythm-game mod site.
//!
//! Song documents come in many hand-edited shapes. They are normalized into
//! one canonical [`Submission`] form, merged with runs submitted from this
//! browser, and ranked by accuracy then date. Locally submitted runs go
//! through intake validation and are never written back to the data files.
//!
//! The browser shell talks to [`service`]; everything below it also builds
//! natively so it can be tested without a browser.

pub mod config;
pub mod constants;
pub mod data;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;
pub mod utils;

pub use config::BoardConfig;
pub use data::{LocalSubmissionStore, Normalizer};
pub use error::{CatalogError, FetchError, IntakeRejection, StoreError, SubmitError};
pub use logic::{merge_and_rank, rank_submissions, validate_submission, SongBoard, SubmissionForm};
pub use service::SongBoardHandler;
pub use types::{RankedBoard, SongKey, StoredSubmission, Submission, SubmitOutcome};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    dependency::init_logging(tracing::Level::INFO);
    tracing::info!("Leaderboard core ready");
}
