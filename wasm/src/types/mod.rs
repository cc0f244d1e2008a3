pub mod board;
pub mod catalog;
pub mod song;
pub mod submission;

pub use board::{LeaderboardRow, RankedBoard, SubmitOutcome};
pub use catalog::{ModCard, ModDescriptor, ModPage, SongCard, SongEntry};
pub use song::{Difficulty, SongKey, SongMeta};
pub use submission::{StoredSubmission, Submission};
