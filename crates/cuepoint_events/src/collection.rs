// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-state event collections and the root event data asset.

use crate::record::EventRecord;
use crate::store::{self, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when writing a finished record into a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The commit addressed a slot more than one past the end. Normal flow
    /// resolves the slot through the store first, so this is a caller bug.
    #[error("commit index {index} is past the end of the collection (len {len})")]
    PastEnd {
        /// Index the caller addressed
        index: usize,
        /// Collection length at the time of the commit
        len: usize,
    },
    /// Invalid index handed to the underlying store
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Ordered event records for one animation state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventCollection {
    /// Hash of the animation state these events belong to
    state_hash: u64,
    /// Authored records, index-addressed
    events: Vec<EventRecord>,
}

impl EventCollection {
    /// Create an empty collection keyed to an animation state
    pub fn new(state_hash: u64) -> Self {
        Self {
            state_hash,
            events: Vec::new(),
        }
    }

    /// Hash of the animation state this collection is filed under
    pub fn state_hash(&self) -> u64 {
        self.state_hash
    }

    /// Re-key the collection to a different animation state
    pub fn set_state_hash(&mut self, state_hash: u64) {
        self.state_hash = state_hash;
    }

    /// Authored records, index-addressed
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Number of authored records
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no records have been authored
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Record at `index`, creating default records up to it as needed
    pub fn event_at(&mut self, index: i64) -> Result<&mut EventRecord, StoreError> {
        store::get_or_create(&mut self.events, index)
    }

    /// Write a finished record into the collection.
    ///
    /// Appends when `index` equals the current length, overwrites in place
    /// when it addresses an existing slot. Addressing further out without
    /// growing the sequence first is a caller error, never a silent gap.
    pub fn commit(&mut self, index: i64, record: EventRecord) -> Result<(), CommitError> {
        let slot = usize::try_from(index).map_err(|_| StoreError::InvalidIndex(index))?;
        match slot.cmp(&self.events.len()) {
            std::cmp::Ordering::Less => self.events[slot] = record,
            std::cmp::Ordering::Equal => self.events.push(record),
            std::cmp::Ordering::Greater => {
                return Err(CommitError::PastEnd {
                    index: slot,
                    len: self.events.len(),
                });
            }
        }
        Ok(())
    }
}

/// Root asset: event collections for every animation state of one model.
///
/// The editor addresses collections by plain integer index in authoring
/// order, mirroring how its index fields work everywhere else; the state
/// hash rides along as the semantic key the runtime resolves against.
/// By-hash lookups are provided for hosts that already know the key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateEventData {
    /// Collections in authoring order
    collections: Vec<EventCollection>,
}

impl StateEventData {
    /// Create an empty asset
    pub fn new() -> Self {
        Self::default()
    }

    /// Collections in authoring order
    pub fn collections(&self) -> &[EventCollection] {
        &self.collections
    }

    /// Number of collections
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// True when the asset holds no collections
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Collection at `index`, creating empty collections up to it as needed
    pub fn collection_at(&mut self, index: i64) -> Result<&mut EventCollection, StoreError> {
        store::get_or_create(&mut self.collections, index)
    }

    /// Collection filed under `state_hash`, if present
    pub fn collection_by_hash(&self, state_hash: u64) -> Option<&EventCollection> {
        self.collections.iter().find(|c| c.state_hash == state_hash)
    }

    /// Mutable collection filed under `state_hash`, if present
    pub fn collection_by_hash_mut(&mut self, state_hash: u64) -> Option<&mut EventCollection> {
        self.collections
            .iter_mut()
            .find(|c| c.state_hash == state_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConditionMode, ParamKind};

    #[test]
    fn test_commit_appends_at_len() {
        let mut collection = EventCollection::new(42);
        collection.commit(0, EventRecord::new("Arm")).unwrap();
        collection.commit(1, EventRecord::new("Cook")).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.events()[1].function_id(), "Cook");
    }

    #[test]
    fn test_commit_overwrites_existing_slot() {
        let mut collection = EventCollection::new(42);
        collection.commit(0, EventRecord::new("MagIn")).unwrap();
        collection.commit(0, EventRecord::new("MagOut")).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.events()[0].function_id(), "MagOut");
    }

    #[test]
    fn test_commit_past_end_is_rejected() {
        let mut collection = EventCollection::new(42);
        let result = collection.commit(2, EventRecord::default());
        assert!(matches!(
            result,
            Err(CommitError::PastEnd { index: 2, len: 0 })
        ));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_commit_negative_index_is_rejected() {
        let mut collection = EventCollection::new(42);
        let result = collection.commit(-1, EventRecord::default());
        assert!(matches!(
            result,
            Err(CommitError::Store(StoreError::InvalidIndex(-1)))
        ));
    }

    #[test]
    fn test_event_at_grows_with_defaults() {
        let mut collection = EventCollection::new(7);
        collection.event_at(2).unwrap().set_function_id("ShellEject");
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.events()[0].function_id(), "None");
        assert_eq!(collection.events()[2].function_id(), "ShellEject");
    }

    #[test]
    fn test_collection_lookup_by_hash() {
        let mut asset = StateEventData::new();
        asset.collection_at(0).unwrap().set_state_hash(100);
        asset.collection_at(1).unwrap().set_state_hash(200);

        assert_eq!(asset.collection_by_hash(200).unwrap().state_hash(), 200);
        assert!(asset.collection_by_hash(999).is_none());

        asset
            .collection_by_hash_mut(100)
            .unwrap()
            .commit(0, EventRecord::new("WeapIn"))
            .unwrap();
        assert_eq!(asset.collections()[0].events()[0].function_id(), "WeapIn");
    }

    #[test]
    fn test_asset_round_trips_through_ron() {
        let mut asset = StateEventData::new();
        let collection = asset.collection_at(0).unwrap();
        collection.set_state_hash(0xDEAD_BEEF);

        let mut record = EventRecord::new("Sound");
        record.set_normalized_time(0.4);
        let parameter = record.ensure_parameter();
        parameter.kind = ParamKind::String;
        parameter.string_value = "bolt_release".to_string();
        {
            let condition = record.condition_at(0).unwrap();
            condition.param_name = "IsProne".to_string();
            condition.compare = ConditionMode::IfNot;
        }
        collection.commit(0, record).unwrap();
        collection.commit(1, EventRecord::new("OnBoltCatch")).unwrap();

        let text = ron::ser::to_string_pretty(&asset, ron::ser::PrettyConfig::default()).unwrap();
        let restored: StateEventData = ron::from_str(&text).unwrap();
        assert_eq!(restored, asset);
    }
}
