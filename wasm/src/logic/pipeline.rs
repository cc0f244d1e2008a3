use serde_json::Value;
use tracing::{debug, info, warn};

use super::intake::{validate_submission, SubmissionForm};
use super::ranker::rank_submissions;
use crate::config::BoardConfig;
use crate::data::{file_records, read_song_meta, LocalSubmissionStore, SubmissionContainer};
use crate::dependency::{Clock, DocumentPath, DocumentSource, KeyValueStore};
use crate::error::{FetchError, SubmitError};
use crate::types::{RankedBoard, SongKey, SongMeta, Submission};

/// Concatenate file-sourced and local submissions (file first) and rank them.
pub fn merge_and_rank(file: &[Submission], local: &[Submission]) -> RankedBoard {
    let mut combined = Vec::with_capacity(file.len() + local.len());
    combined.extend_from_slice(file);
    combined.extend_from_slice(local);
    RankedBoard::from_ranked(rank_submissions(&combined))
}

/// Everything known about one song page between fetch and re-render.
///
/// Holds the file-sourced submissions so the submit path can re-rank without
/// fetching again.
#[derive(Debug, Clone)]
pub struct SongBoard {
    key: SongKey,
    meta: SongMeta,
    file_submissions: Vec<Submission>,
    config: BoardConfig,
}

impl SongBoard {
    /// Fetch the song document and build the board context
    pub async fn load<D: DocumentSource>(
        source: &D,
        key: SongKey,
        config: &BoardConfig,
    ) -> Result<Self, FetchError> {
        let document = source
            .fetch_json(&DocumentPath::Song(key.clone()))
            .await
            .map_err(|err| {
                warn!("Song {}/{} failed to load: {err}", key.mod_id, key.file);
                err
            })?;
        Ok(Self::from_document(key, &document, config))
    }

    pub fn from_document(key: SongKey, document: &Value, config: &BoardConfig) -> Self {
        let normalizer = config.normalizer();
        let file_submissions = normalizer.normalize_all(file_records(document));

        match SubmissionContainer::locate(document) {
            Some((container, records)) => debug!(
                "Song {}/{}: {} records from {:?}",
                key.mod_id,
                key.file,
                records.len(),
                container
            ),
            None => debug!("Song {}/{}: no submission container", key.mod_id, key.file),
        }

        Self {
            meta: read_song_meta(document),
            key,
            file_submissions,
            config: config.clone(),
        }
    }

    pub fn key(&self) -> &SongKey {
        &self.key
    }

    pub fn meta(&self) -> &SongMeta {
        &self.meta
    }

    pub fn file_submissions(&self) -> &[Submission] {
        &self.file_submissions
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Merge with the local store and rank
    pub fn render<S: KeyValueStore>(&self, store: &LocalSubmissionStore<S>) -> RankedBoard {
        // Local records were canonical when written but are re-normalized in
        // case storage was edited by hand
        let local = self.config.normalizer().normalize_all(&store.load(&self.key));
        let board = merge_and_rank(&self.file_submissions, &local);
        debug!(
            "Rendered {}/{}: {} file + {} local",
            self.key.mod_id,
            self.key.file,
            self.file_submissions.len(),
            local.len()
        );
        board
    }

    /// Validate, persist locally and re-render. Rejections persist nothing.
    pub fn submit<S: KeyValueStore>(
        &self,
        store: &mut LocalSubmissionStore<S>,
        form: &SubmissionForm,
        clock: &impl Clock,
    ) -> Result<RankedBoard, SubmitError> {
        let entry = validate_submission(form, &self.config, clock).map_err(|rejection| {
            debug!("Submission rejected: {rejection}");
            rejection
        })?;

        let count = store.append(&self.key, &entry).map_err(|err| {
            warn!("Could not persist submission: {err}");
            err
        })?;
        info!(
            "Accepted local submission from {} for {}/{} ({count} local)",
            entry.submission.user, self.key.mod_id, self.key.file
        );

        Ok(self.render(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::{FixedClock, MemoryStore, StaticSource};
    use crate::error::IntakeRejection;
    use futures::executor::block_on;
    use serde_json::json;

    const NOW: &str = "2024-06-01T00:00:00.000Z";

    fn key() -> SongKey {
        SongKey::new(Some("fnf"), Some("bopeebo.json")).unwrap()
    }

    fn store() -> LocalSubmissionStore<MemoryStore> {
        LocalSubmissionStore::with_default_prefix(MemoryStore::default())
    }

    fn board(document: Value) -> SongBoard {
        SongBoard::from_document(key(), &document, &BoardConfig::default())
    }

    fn form(user: &str, accuracy: &str, misses: &str) -> SubmissionForm {
        SubmissionForm {
            user: user.to_string(),
            accuracy: accuracy.to_string(),
            video: "https://youtu.be/x".to_string(),
            misses: misses.to_string(),
            ..SubmissionForm::default()
        }
    }

    #[test]
    fn merge_puts_file_entries_before_local_on_ties() {
        let file = board(json!({ "submissions": [{ "user": "File", "accuracy": 90 }] }));
        let local = vec![Submission {
            user: "Local".to_string(),
            accuracy: Some(90.0),
            link: String::new(),
            date: None,
            hz: String::new(),
            misses: None,
            notes: String::new(),
        }];
        let ranked = merge_and_rank(file.file_submissions(), &local);
        assert_eq!(ranked.rows[0].user, "File");
        assert_eq!(ranked.rows[1].user, "Local");
    }

    #[test]
    fn empty_document_renders_empty_state() {
        let ranked = board(json!({ "difficulty": "Hard" })).render(&store());
        assert!(ranked.is_empty());
        assert_eq!(ranked.top, None);
    }

    #[test]
    fn render_includes_local_entries() {
        let song = board(json!({ "records": [{ "player": "Ana", "percent": 95 }] }));
        let mut local = store();
        let storage_key = local.storage_key(&key());
        local
            .storage_mut()
            .set_item(&storage_key, r#"[{"user":"Bob","accuracy":99.5}]"#)
            .unwrap();

        let ranked = song.render(&local);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.top.as_ref().unwrap().user, "Bob");
        assert_eq!(ranked.preview, "Top: Bob • 99.5%");
    }

    #[test]
    fn corrupted_local_store_is_ignored() {
        let song = board(json!([{ "user": "Ana", "accuracy": 80 }]));
        let mut local = store();
        let storage_key = local.storage_key(&key());
        local.storage_mut().set_item(&storage_key, "garbage").unwrap();
        assert_eq!(song.render(&local).len(), 1);
    }

    #[test]
    fn accepted_submission_is_persisted_and_ranked() {
        let song = board(json!({ "submissions": [{ "user": "Ana", "accuracy": 99.0 }] }));
        let mut local = store();

        let ranked = song
            .submit(&mut local, &form("Bob", "99.99", "0"), &FixedClock(NOW.to_string()))
            .unwrap();

        assert_eq!(local.load(&key()).len(), 1);
        assert_eq!(ranked.len(), 2);
        let top = ranked.top.unwrap();
        assert_eq!(top.user, "Bob");
        assert_eq!(top.misses, Some(0.0));
        assert_eq!(top.date.as_deref(), Some(NOW));
    }

    #[test]
    fn rejected_submission_persists_nothing() {
        let song = board(json!({ "submissions": [] }));
        let mut local = store();

        let result = song.submit(&mut local, &form("Bob", "101", "0"), &FixedClock(NOW.into()));

        assert!(matches!(
            result,
            Err(SubmitError::Rejected(IntakeRejection::InvalidAccuracy))
        ));
        assert!(local.load(&key()).is_empty());
        assert!(local.storage().is_empty());
    }

    #[test]
    fn storage_failure_surfaces_as_submit_error() {
        let song = board(json!({ "submissions": [] }));
        let mut local = LocalSubmissionStore::with_default_prefix(MemoryStore::read_only());
        let result = song.submit(&mut local, &form("Bob", "99", "0"), &FixedClock(NOW.into()));
        assert!(matches!(result, Err(SubmitError::Storage(_))));
    }

    #[test]
    fn load_reads_meta_and_submissions_from_source() {
        let source = StaticSource::default().with_document(
            DocumentPath::Song(key()),
            json!({
                "difficulty": "Easy",
                "verification": "https://youtu.be/v",
                "entries": [{ "nick": "Cy", "accuracy": "88" }]
            }),
        );

        let song = block_on(SongBoard::load(&source, key(), &BoardConfig::default())).unwrap();
        assert_eq!(song.meta().badge_class, "badge easy");
        assert_eq!(song.file_submissions()[0].user, "Cy");
        assert_eq!(song.file_submissions()[0].accuracy, Some(88.0));
    }

    #[test]
    fn load_propagates_fetch_failure() {
        let source = StaticSource::default();
        let result = block_on(SongBoard::load(&source, key(), &BoardConfig::default()));
        assert_eq!(result.unwrap_err(), FetchError::Status(404));
    }
}
