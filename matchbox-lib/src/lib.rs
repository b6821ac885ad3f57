//! Preference-list reconciliation for Matchbox.
//!
//! Merges a set of resources with a user's persisted preference records into
//! one ordered working set, applies user edits to it, and derives the
//! insert/update/delete batches a persistence layer needs to store the result.

use thiserror::Error;

pub mod config;
pub mod fs;
pub mod preferences;

pub use preferences::{
    Batches, Direction, ExistingPreference, NewPreferenceRecord, PreferenceEntry,
    PreferenceId, PreferenceReconciler, PreferenceRecord, Resource, ResourceId, UNORDERED,
    UserId,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Preferences(#[from] preferences::Error),
    #[error(transparent)]
    Config(#[from] config::Error),
}
