mod catalog;
mod intake;
mod pipeline;
mod ranker;

pub use catalog::{find_mod, load_mod_page, load_mods, mod_cards, parse_mods};
pub use intake::{validate_submission, SubmissionForm};
pub use pipeline::{merge_and_rank, SongBoard};
pub use ranker::{compare_submissions, rank_submissions};
