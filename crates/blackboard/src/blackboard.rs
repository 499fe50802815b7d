use std::collections::BTreeMap;
use std::fmt;

use crate::{BlackboardError, BlackboardKey, BlackboardValue, Result, Value, ValueType};

/// Deferred side effect queued during a scholar's execution and run by the host after the tick.
pub type PendingAction = Box<dyn FnOnce() + 'static>;

#[derive(Debug, Clone, PartialEq)]
pub struct BlackboardEntry {
    key: BlackboardKey,
    value: Value,
}

impl BlackboardEntry {
    pub fn new(key: BlackboardKey, value: Value) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &BlackboardKey {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The type of the most recent write.
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }
}

/// Hash-keyed store of typed values plus a FIFO of pending actions.
///
/// Entries are ordered by key hash so enumeration is deterministic. Not thread-safe: a blackboard
/// is owned by one host loop and mutated only between or during its ticks.
#[derive(Default)]
pub struct Blackboard {
    key_registry: BTreeMap<String, BlackboardKey>,
    entries: BTreeMap<BlackboardKey, BlackboardEntry>,
    pending_actions: Vec<PendingAction>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key interned for `name`, registering it on first use.
    pub fn get_or_register_key(&mut self, name: &str) -> Result<BlackboardKey> {
        if name.is_empty() {
            return Err(BlackboardError::InvalidKeyName);
        }

        if let Some(key) = self.key_registry.get(name) {
            return Ok(key.clone());
        }

        let key = BlackboardKey::new(name);
        self.key_registry.insert(name.to_owned(), key.clone());
        Ok(key)
    }

    /// Looks up a previously registered key without registering.
    pub fn lookup_key(&self, name: &str) -> Option<BlackboardKey> {
        self.key_registry.get(name).cloned()
    }

    pub fn keys(&self) -> impl Iterator<Item = &BlackboardKey> {
        self.key_registry.values()
    }

    /// Writes `value`, replacing any previous value and its type.
    pub fn set_value<T: BlackboardValue>(&mut self, key: &BlackboardKey, value: T) {
        self.insert(key, value.into_value());
    }

    /// Untyped write used by the ingestion path and by callers that already hold a [`Value`].
    pub fn insert(&mut self, key: &BlackboardKey, value: Value) {
        self.entries
            .insert(key.clone(), BlackboardEntry::new(key.clone(), value));
    }

    /// `None` if the key is absent or holds a different type than `T`.
    pub fn try_get_value<T: BlackboardValue>(&self, key: &BlackboardKey) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|entry| T::from_value(&entry.value))
    }

    /// `(value, found)`, with `T::default()` when not found.
    pub fn get_value_or_default<T: BlackboardValue>(&self, key: &BlackboardKey) -> (T, bool) {
        match self.try_get_value(key) {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Like [`try_get_value`](Self::try_get_value) but reports why the read failed.
    pub fn get_value<T: BlackboardValue>(&self, key: &BlackboardKey) -> Result<T> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| BlackboardError::MissingKey(key.name().to_owned()))?;

        T::from_value(&entry.value).ok_or_else(|| BlackboardError::TypeMismatch {
            key: key.name().to_owned(),
            expected: T::VALUE_TYPE,
            actual: entry.value_type(),
        })
    }

    pub fn get(&self, key: &BlackboardKey) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    pub fn value_type(&self, key: &BlackboardKey) -> Option<ValueType> {
        self.entries.get(key).map(BlackboardEntry::value_type)
    }

    pub fn contains_key(&self, key: &BlackboardKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &BlackboardKey) -> Option<Value> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    pub fn entries(&self) -> impl Iterator<Item = &BlackboardEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry. Registered keys and pending actions are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn add_action(&mut self, action: impl FnOnce() + 'static) {
        self.pending_actions.push(Box::new(action));
    }

    pub fn add_boxed_action(&mut self, action: PendingAction) {
        self.pending_actions.push(action);
    }

    /// Drops every pending action without running it.
    pub fn clear_actions(&mut self) {
        self.pending_actions.clear();
    }

    /// Drops pending actions queued after the first `len`, keeping the older ones.
    pub fn truncate_actions(&mut self, len: usize) {
        self.pending_actions.truncate(len);
    }

    pub fn pending_actions(&self) -> usize {
        self.pending_actions.len()
    }

    /// Drains the pending actions in enqueue order.
    pub fn take_actions(&mut self) -> Vec<PendingAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Every entry with its textual value, in key-hash order.
    pub fn describe_all(&self) -> Vec<(BlackboardKey, String)> {
        self.entries
            .values()
            .map(|entry| (entry.key.clone(), entry.value.to_string()))
            .collect()
    }

    pub fn log(&self) {
        for (key, value) in self.describe_all() {
            tracing::info!(key = %key, value = %value, "blackboard entry");
        }
    }
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blackboard")
            .field("keys", &self.key_registry.len())
            .field("entries", &self.entries)
            .field("pending_actions", &self.pending_actions.len())
            .finish()
    }
}
