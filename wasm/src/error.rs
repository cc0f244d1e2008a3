//! Error types for the leaderboard core
//!
//! Nothing in here is fatal: every caller recovers into an empty view or a
//! user-facing message.

use thiserror::Error;

/// Failure to obtain a JSON document from the static data tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not valid JSON
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// No browser window (worker or native context)
    #[error("No window available for fetch")]
    NoWindow,
}

/// Local key-value storage failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage backend could not be opened (disabled, private mode)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read failed: {0}")]
    Read(String),

    /// Write rejected, typically quota exceeded
    #[error("Storage write failed: {0}")]
    Write(String),

    #[error("Could not encode submissions: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Reasons a submission form is turned away before anything is stored.
///
/// The `Display` text is the message shown to the player.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntakeRejection {
    #[error("Enter the player's nick.")]
    MissingUser,

    #[error("Accuracy must be a number from 0 to 100.")]
    InvalidAccuracy,

    #[error("Provide a valid YouTube link.")]
    InvalidVideoLink,

    #[error("Enter the number of misses (0 if none).")]
    InvalidMisses,

    #[error("A submission must have {required} misses to be accepted.")]
    MissesNotAllowed { required: u32 },
}

/// Outcome of a rejected or failed submit attempt
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] IntakeRejection),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Mod listing and page-level lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Could not load data/mods.json: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed mods index: {0}")]
    Malformed(String),

    #[error("No mods in data/mods.json")]
    NoMods,

    #[error("Mod not found: {0}")]
    ModNotFound(String),

    #[error("No mod selected. Go back to the main page and pick a mod.")]
    MissingFolder,

    #[error("Missing mod or song file in URL.")]
    MissingSongKey,
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
