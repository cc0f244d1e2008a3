mod coerce;
mod container;
mod local_store;
mod normalizer;
mod song_meta;

pub use coerce::{parse_js_number, to_number};
pub use container::{file_records, SubmissionContainer};
pub use local_store::LocalSubmissionStore;
pub use normalizer::Normalizer;
pub use song_meta::read_song_meta;
