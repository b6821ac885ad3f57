//! Preferred-resource bookkeeping.
//!
//! A [`PreferenceReconciler`] owns the working set of [`PreferenceEntry`]s built
//! from the available [`Resource`]s and a user's [`ExistingPreference`] records.
//! Every mutation re-derives the dense ordering of preferred entries and the
//! [`Batches`] of records a persistence layer has to insert, update and delete.

use thiserror::Error;

mod entry;
mod ids;
mod inputs;
mod reconciler;
mod records;

pub use entry::{PreferenceEntry, UNORDERED};
pub use ids::{PreferenceId, ResourceId, UserId};
pub use inputs::{ExistingPreference, Resource};
pub use reconciler::{Direction, PreferenceReconciler};
pub use records::{Batches, NewPreferenceRecord, PreferenceRecord};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("No resource with ID '{resource_id}' in the working set")]
    NotFound { resource_id: ResourceId },
}
