//! # Generic Resource Store
//!
//! This module defines the `ResourceStore`, the component that owns the records of one
//! entity type. It keeps an id-keyed map for lookups and an append-only insertion order,
//! assigns ids for new records and applies updates and actions atomically.

use crate::framework::{Entity, FrameworkError};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The generic store that manages a collection of entities.
///
/// # Architecture Note
/// Records are never removed: the insertion order only grows, which is what lets a
/// derived view be rebuilt from it at any time.
///
/// **Atomicity**:
/// `update` and `perform_action` run the entity hook on a clone and only swap it in when
/// the hook succeeds. A failing hook therefore leaves the stored record untouched, even if
/// it had already changed some fields of the scratch copy.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: Entity> {
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn entity_type() -> &'static str {
        // "HomestayUnit" instead of "homestay_rental::model::homestay::HomestayUnit"
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.store.get(id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[T::Id] {
        &self.order
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.store.get(id))
    }

    /// Cloned records in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// The id the next `create` will use: one past the largest id ever stored.
    pub fn next_id(&self) -> Result<T::Id, FrameworkError> {
        let Some(max) = self.order.iter().map(|id| Into::<u32>::into(*id)).max() else {
            return Ok(<T::Id as From<u32>>::from(1));
        };
        max.checked_add(1)
            .map(<T::Id as From<u32>>::from)
            .ok_or_else(|| FrameworkError::IdSpaceExhausted(<T::Id as From<u32>>::from(max).to_string()))
    }

    /// Builds a new entity from its creation payload and appends it.
    pub fn create(&mut self, params: T::Create) -> Result<T::Id, T::Error> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");
        let id = match self.next_id() {
            Ok(id) => id,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(e.into());
            }
        };

        let mut item = match T::from_create_params(id, params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(e);
            }
        };
        if let Err(e) = item.on_create() {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(e);
        }

        self.store.insert(id, item);
        self.order.push(id);
        info!(entity_type, %id, size = self.order.len(), "Created");
        Ok(id)
    }

    /// Appends an already-built entity under its own id (used for seeding).
    pub fn insert(&mut self, mut item: T) -> Result<T::Id, T::Error> {
        let entity_type = Self::entity_type();
        let id = item.id();
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Duplicate id");
            return Err(FrameworkError::DuplicateId(id.to_string()).into());
        }
        if let Err(e) = item.on_create() {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(e);
        }

        self.store.insert(id, item);
        self.order.push(id);
        debug!(entity_type, %id, size = self.order.len(), "Inserted");
        Ok(id)
    }

    pub fn update(&mut self, id: T::Id, update: T::Update) -> Result<T, T::Error> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");
        let Some(current) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()).into());
        };

        let mut scratch = current.clone();
        if let Err(e) = scratch.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(e);
        }

        self.store.insert(id, scratch.clone());
        info!(entity_type, %id, "Updated");
        Ok(scratch)
    }

    pub fn perform_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?action, "Action");
        let Some(current) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()).into());
        };

        let mut scratch = current.clone();
        match scratch.handle_action(action) {
            Ok(result) => {
                self.store.insert(id, scratch);
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    // --- Test Entity ---

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct CounterId(u32);

    impl From<u32> for CounterId {
        fn from(id: u32) -> Self {
            Self(id)
        }
    }

    impl From<CounterId> for u32 {
        fn from(id: CounterId) -> Self {
            id.0
        }
    }

    impl fmt::Display for CounterId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "counter_{}", self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: CounterId,
        label: String,
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Bump,
        // Bumps, then fails, to prove the scratch copy is discarded.
        BumpThenFail,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum CounterError {
        #[error("bad label")]
        BadLabel,
        #[error("refused")]
        Refused,
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    impl Entity for Counter {
        type Id = CounterId;
        type Create = String;
        type Update = String;
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = CounterError;

        fn id(&self) -> CounterId {
            self.id
        }

        fn from_create_params(id: CounterId, label: String) -> Result<Self, CounterError> {
            Ok(Self { id, label, value: 0 })
        }

        fn on_create(&mut self) -> Result<(), CounterError> {
            if self.label.is_empty() {
                return Err(CounterError::BadLabel);
            }
            Ok(())
        }

        fn on_update(&mut self, label: String) -> Result<(), CounterError> {
            self.value += 100;
            if label.is_empty() {
                return Err(CounterError::BadLabel);
            }
            self.label = label;
            Ok(())
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
            self.value += 1;
            match action {
                CounterAction::Bump => Ok(self.value),
                CounterAction::BumpThenFail => Err(CounterError::Refused),
            }
        }
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let mut store = ResourceStore::<Counter>::new();
        store
            .insert(Counter { id: CounterId(7), label: "seed".into(), value: 0 })
            .unwrap();

        let id = store.create("next".into()).unwrap();
        assert_eq!(id, CounterId(8));
        assert_eq!(store.ids(), &[CounterId(7), CounterId(8)]);
    }

    #[test]
    fn test_create_starts_at_one_when_empty() {
        let mut store = ResourceStore::<Counter>::new();
        assert_eq!(store.create("first".into()).unwrap(), CounterId(1));
    }

    #[test]
    fn test_create_fails_when_ids_run_out() {
        let mut store = ResourceStore::<Counter>::new();
        store
            .insert(Counter { id: CounterId(u32::MAX), label: "last".into(), value: 0 })
            .unwrap();

        let err = store.create("next".into()).unwrap_err();
        assert_eq!(
            err,
            CounterError::Framework(FrameworkError::IdSpaceExhausted(format!("counter_{}", u32::MAX)))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_create_stores_nothing() {
        let mut store = ResourceStore::<Counter>::new();
        assert_eq!(store.create(String::new()), Err(CounterError::BadLabel));
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = ResourceStore::<Counter>::new();
        let item = Counter { id: CounterId(1), label: "a".into(), value: 0 };
        store.insert(item.clone()).unwrap();

        let err = store.insert(item).unwrap_err();
        assert_eq!(
            err,
            CounterError::Framework(FrameworkError::DuplicateId("counter_1".into()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_update_is_atomic() {
        let mut store = ResourceStore::<Counter>::new();
        let id = store.create("a".into()).unwrap();

        assert!(store.update(id, String::new()).is_err());
        let stored = store.get(&id).unwrap();
        assert_eq!(stored.value, 0);
        assert_eq!(stored.label, "a");

        let updated = store.update(id, "b".into()).unwrap();
        assert_eq!(updated.label, "b");
        assert_eq!(store.get(&id).unwrap().value, 100);
    }

    #[test]
    fn test_failed_action_is_atomic() {
        let mut store = ResourceStore::<Counter>::new();
        let id = store.create("a".into()).unwrap();

        assert_eq!(store.perform_action(id, CounterAction::Bump), Ok(1));
        assert_eq!(
            store.perform_action(id, CounterAction::BumpThenFail),
            Err(CounterError::Refused)
        );
        assert_eq!(store.get(&id).unwrap().value, 1);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store = ResourceStore::<Counter>::new();
        let err = store.perform_action(CounterId(9), CounterAction::Bump).unwrap_err();
        assert_eq!(
            err,
            CounterError::Framework(FrameworkError::NotFound("counter_9".into()))
        );
    }
}
