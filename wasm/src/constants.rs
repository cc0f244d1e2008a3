// Shared leaderboard constants

// Static data layout under the site root
pub const DEFAULT_DATA_ROOT: &str = "data";
pub const MODS_INDEX_FILE: &str = "mods.json";
pub const SONGS_DIR: &str = "songs";

// Local storage namespace: "{prefix}{mod}__{file}"
pub const DEFAULT_STORAGE_PREFIX: &str = "ffl_subs_";
pub const STORAGE_KEY_SEPARATOR: &str = "__";

pub const DEFAULT_USER: &str = "Anon";
pub const DEFAULT_VIDEO_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];
pub const REQUIRED_MISSES: u32 = 0; // Only flawless runs are accepted locally

pub const ACCURACY_MIN: f64 = 0.0;
pub const ACCURACY_MAX: f64 = 100.0;
pub const ACCURACY_SCALE: f64 = 100.0; // Two decimal places

// Placeholder for empty table cells
pub const EMPTY_CELL: &str = "—";
pub const UNKNOWN_DIFFICULTY: &str = "Unknown";

pub const SUBMISSION_SAVED: &str = "Submission saved locally. Awaiting verification.";
pub const NO_SONG_DATA: &str = "No song data";
