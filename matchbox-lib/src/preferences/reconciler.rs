use std::collections::HashSet;

use strum::{Display, EnumIter, EnumString};
use tracing::{debug, trace, warn};

use crate::preferences::{
    Batches, Error, ExistingPreference, NewPreferenceRecord, PreferenceEntry, PreferenceRecord,
    Resource, ResourceId, Result, UNORDERED, UserId,
};

/// Which neighbour an entry swaps places with when reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Owns the working set of [`PreferenceEntry`]s and the [`Batches`] derived from it.
///
/// The working set is rebuilt from scratch whenever either input collection is supplied and
/// mutated in place by [`prefer`](Self::prefer), [`unprefer`](Self::unprefer),
/// [`move_up`](Self::move_up) and [`move_down`](Self::move_down). Each of those re-derives
/// the batches before returning.
#[derive(Debug, Clone)]
pub struct PreferenceReconciler {
    owner_id: UserId,
    resources: Vec<Resource>,
    existing: Vec<ExistingPreference>,
    entries: Vec<PreferenceEntry>,
    batches: Batches,
}

impl PreferenceReconciler {
    /// Build a reconciler from the available resources and the owner's persisted
    /// preferences. Pass an empty `existing` collection when the owner has none yet.
    pub fn new(
        resources: Vec<Resource>,
        existing: Vec<ExistingPreference>,
        owner_id: impl Into<UserId>,
    ) -> Self {
        let mut reconciler = Self {
            owner_id: owner_id.into(),
            resources,
            existing,
            entries: Vec::new(),
            batches: Batches::default(),
        };
        reconciler.rebuild();
        reconciler
    }

    /// Replace both inputs and the owner, rebuilding the working set.
    pub fn initialize(
        &mut self,
        resources: Vec<Resource>,
        existing: Vec<ExistingPreference>,
        owner_id: impl Into<UserId>,
    ) -> &[PreferenceEntry] {
        self.owner_id = owner_id.into();
        self.resources = resources;
        self.existing = existing;
        self.rebuild();
        &self.entries
    }

    /// Re-supply the resources, rebuilding the working set.
    pub fn set_resources(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
        self.rebuild();
    }

    /// Re-supply the persisted preferences, rebuilding the working set.
    pub fn set_existing_preferences(&mut self, existing: Vec<ExistingPreference>) {
        self.existing = existing;
        self.rebuild();
    }

    // Accessors

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// The working set: preferred entries first in ascending order, then the rest.
    pub fn entries(&self) -> &[PreferenceEntry] {
        &self.entries
    }

    pub fn preferred(&self) -> impl Iterator<Item = &PreferenceEntry> {
        self.entries.iter().filter(|e| e.is_preferred)
    }

    pub fn batches(&self) -> &Batches {
        &self.batches
    }

    pub fn insert_batch(&self) -> &[NewPreferenceRecord] {
        &self.batches.insert
    }

    pub fn update_batch(&self) -> &[PreferenceRecord] {
        &self.batches.update
    }

    pub fn delete_batch(&self) -> &[PreferenceRecord] {
        &self.batches.delete
    }

    // Operations

    pub fn prefer(&mut self, resource_id: &ResourceId) -> Result<&Batches> {
        self.toggle(resource_id, true)
    }

    pub fn unprefer(&mut self, resource_id: &ResourceId) -> Result<&Batches> {
        self.toggle(resource_id, false)
    }

    pub fn move_up(&mut self, resource_id: &ResourceId) -> Result<&Batches> {
        self.reorder(resource_id, Direction::Up)
    }

    pub fn move_down(&mut self, resource_id: &ResourceId) -> Result<&Batches> {
        self.reorder(resource_id, Direction::Down)
    }

    /// Mark the entry for `resource_id` as preferred or not. Its order is left to
    /// re-derivation.
    pub fn toggle(&mut self, resource_id: &ResourceId, preferred: bool) -> Result<&Batches> {
        let index = self.position(resource_id)?;
        if let Some(entry) = self.entries.get_mut(index) {
            entry.is_preferred = preferred;
        }

        debug!("Set {resource_id} preferred: {preferred}");

        Ok(self.rederive())
    }

    /// Swap the entry for `resource_id` with its neighbour in `direction`.
    ///
    /// Moving the first entry up or the last entry down leaves the working set untouched.
    pub fn reorder(&mut self, resource_id: &ResourceId, direction: Direction) -> Result<&Batches> {
        let index = self.position(resource_id)?;

        if swap_adjacent(&mut self.entries, index, direction) {
            debug!("Moved {resource_id} {direction}");
        } else {
            debug!("Cannot move {resource_id} {direction}: already at the boundary");
        }

        Ok(self.rederive())
    }

    /// Assign dense orders to the preferred entries, sort the working set and recompute the
    /// insert, update and delete batches.
    pub fn rederive(&mut self) -> &Batches {
        let mut next = 1;
        for entry in &mut self.entries {
            if entry.is_preferred {
                entry.order = next;
                next += 1;
            } else {
                entry.order = UNORDERED;
            }
        }

        // Stable, so unpreferred entries keep their relative order
        self.entries.sort_by_key(|e| (!e.is_preferred, e.order));

        let mut batches = Batches::default();
        for entry in &self.entries {
            match (entry.is_preferred, entry.preference_id()) {
                (true, Some(id)) => batches.update.push(PreferenceRecord {
                    id: id.clone(),
                    resource_id: entry.resource_id().clone(),
                    order: entry.order,
                    owner_id: self.owner_id.clone(),
                }),
                (true, None) => batches.insert.push(NewPreferenceRecord {
                    resource_id: entry.resource_id().clone(),
                    order: entry.order,
                    owner_id: self.owner_id.clone(),
                }),
                (false, Some(id)) => batches.delete.push(PreferenceRecord {
                    id: id.clone(),
                    resource_id: entry.resource_id().clone(),
                    order: entry.order,
                    owner_id: self.owner_id.clone(),
                }),
                (false, None) => {}
            }
        }

        trace!(
            "Derived {} inserts, {} updates, {} deletes",
            batches.insert.len(),
            batches.update.len(),
            batches.delete.len()
        );

        self.batches = batches;
        &self.batches
    }

    fn rebuild(&mut self) {
        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(&resource.id) {
                warn!("Duplicate resource ID '{}'; lookups use the first", resource.id);
            }
        }

        self.entries = self
            .resources
            .iter()
            .map(|resource| {
                let preference = self.existing.iter().find(|p| p.resource_id == resource.id);
                PreferenceEntry::merge(resource, preference)
            })
            .collect();

        self.entries.sort_by_key(|e| e.order);

        debug!(
            "Built working set of {} entries from {} existing preferences",
            self.entries.len(),
            self.existing.len()
        );

        self.rederive();
    }

    fn position(&self, resource_id: &ResourceId) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.resource_id() == resource_id)
            .ok_or_else(|| Error::NotFound {
                resource_id: resource_id.clone(),
            })
    }
}

/// Swap `entries[index]` with its neighbour in `direction`. Returns `false` without touching
/// `entries` when there is no such neighbour.
fn swap_adjacent(entries: &mut [PreferenceEntry], index: usize, direction: Direction) -> bool {
    let neighbour = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => index.checked_add(1),
    };

    match neighbour {
        Some(neighbour) if index < entries.len() && neighbour < entries.len() => {
            entries.swap(index, neighbour);
            true
        }
        _ => false,
    }
}
