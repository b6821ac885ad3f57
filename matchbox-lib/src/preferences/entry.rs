use getset::{CopyGetters, Getters};

use crate::preferences::{ExistingPreference, PreferenceId, Resource, ResourceId};

/// Order carried by entries that are not preferred.
pub const UNORDERED: u32 = 999;

/// One item of the working set.
///
/// There is exactly one entry per input [`Resource`]. Only the
/// [`PreferenceReconciler`](super::PreferenceReconciler) mutates entries, so the
/// fields are exposed through read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct PreferenceEntry {
    #[getset(get = "pub")]
    resource_id: ResourceId,
    #[getset(get = "pub")]
    name: String,
    /// Set when a persisted record existed at merge time. Never cleared or assigned afterwards.
    #[getset(get = "pub")]
    preference_id: Option<PreferenceId>,
    #[getset(get_copy = "pub")]
    pub(crate) is_preferred: bool,
    #[getset(get_copy = "pub")]
    pub(crate) order: u32,
}

impl PreferenceEntry {
    pub(crate) fn merge(resource: &Resource, preference: Option<&ExistingPreference>) -> Self {
        Self {
            resource_id: resource.id.clone(),
            name: resource.name.clone(),
            preference_id: preference.map(|p| p.id.clone()),
            is_preferred: preference.is_some(),
            order: preference.map_or(UNORDERED, |p| p.order),
        }
    }
}
