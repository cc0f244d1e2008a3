use tracing::warn;
use wasm_bindgen::prelude::*;

use super::{to_js, PlatformStorage};
use crate::constants::SUBMISSION_SAVED;
use crate::data::LocalSubmissionStore;
use crate::dependency::{Clock, SystemClock};
use crate::error::SubmitError;
use crate::logic::{SongBoard, SubmissionForm};
use crate::types::{RankedBoard, SubmitOutcome};

/// One open song page: the loaded board plus the local submission store
#[wasm_bindgen]
pub struct SongBoardHandler {
    board: SongBoard,
    store: LocalSubmissionStore<PlatformStorage>,
}

impl SongBoardHandler {
    pub fn new(board: SongBoard, store: LocalSubmissionStore<PlatformStorage>) -> Self {
        Self { board, store }
    }

    pub fn song(&self) -> &SongBoard {
        &self.board
    }

    pub fn ranked(&self) -> RankedBoard {
        self.board.render(&self.store)
    }

    pub fn submit_form(&mut self, form: &SubmissionForm) -> SubmitOutcome {
        self.submit_with_clock(form, &SystemClock)
    }

    pub fn submit_with_clock(&mut self, form: &SubmissionForm, clock: &impl Clock) -> SubmitOutcome {
        match self.board.submit(&mut self.store, form, clock) {
            Ok(board) => SubmitOutcome::accepted(SUBMISSION_SAVED, board),
            Err(SubmitError::Rejected(rejection)) => SubmitOutcome::rejected(rejection.to_string()),
            Err(SubmitError::Storage(err)) => {
                warn!("Submission not saved: {err}");
                SubmitOutcome::rejected(err.to_string())
            }
        }
    }
}

#[wasm_bindgen]
impl SongBoardHandler {
    /// Explicit title, or the song filename without `.json`
    #[wasm_bindgen]
    pub fn title(&self, title: Option<String>) -> String {
        self.board.key().display_title(title.as_deref())
    }

    #[wasm_bindgen]
    pub fn subtitle(&self) -> String {
        self.board.key().subtitle()
    }

    #[wasm_bindgen]
    pub fn meta(&self) -> Result<JsValue, JsValue> {
        to_js(self.board.meta())
    }

    #[wasm_bindgen]
    pub fn board(&self) -> Result<JsValue, JsValue> {
        to_js(&self.ranked())
    }

    /// Validate and store a form. Rejections come back as an outcome with
    /// `accepted: false`, not as an exception.
    #[wasm_bindgen]
    pub fn submit(&mut self, form: JsValue) -> Result<JsValue, JsValue> {
        let form: SubmissionForm = serde_wasm_bindgen::from_value(form)?;
        to_js(&self.submit_form(&form))
    }
}
