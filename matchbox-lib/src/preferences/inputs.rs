use serde::{Deserialize, Serialize};

use crate::preferences::{PreferenceId, ResourceId, UserId};

/// Something a user can mark as preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
}

impl Resource {
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A previously persisted preference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingPreference {
    pub id: PreferenceId,
    pub resource_id: ResourceId,
    pub order: u32,
    pub owner_id: UserId,
}
