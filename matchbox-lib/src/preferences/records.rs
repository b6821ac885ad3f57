use serde::{Deserialize, Serialize};

use crate::preferences::{PreferenceId, ResourceId, UserId};

/// A preference record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPreferenceRecord {
    pub resource_id: ResourceId,
    pub order: u32,
    pub owner_id: UserId,
}

/// A preference record referring to an already persisted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    pub id: PreferenceId,
    pub resource_id: ResourceId,
    pub order: u32,
    pub owner_id: UserId,
}

/// The writes needed to persist the current working set.
///
/// Recomputed from scratch on every re-derivation and never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batches {
    pub insert: Vec<NewPreferenceRecord>,
    pub update: Vec<PreferenceRecord>,
    pub delete: Vec<PreferenceRecord>,
}

impl Batches {
    pub fn is_empty(&self) -> bool {
        self.insert.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }
}
