//! Ingestion of authoring records into a [`Blackboard`].
//!
//! Authoring tools persist rows of `{key_name, value_type, value}`. Ingestion resolves the key
//! and then dispatches on the row's tag to the one concrete setter for that kind, so the typed
//! store is written without any runtime reflection.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AnyValue, Blackboard, BlackboardKey, BlackboardValue, Quaternion, Result, ValueType, Vector2,
    Vector2Int, Vector3, Vector3Int,
};

/// Writes an [`AnyValue`] into the store as one concrete type.
pub type ValueSetter = fn(&mut Blackboard, &BlackboardKey, &AnyValue);

fn set_as<T: BlackboardValue>(blackboard: &mut Blackboard, key: &BlackboardKey, value: &AnyValue) {
    blackboard.set_value::<T>(key, value.convert_to::<T>());
}

/// The setter for each value kind. Total over [`ValueType`].
pub fn setter_for(value_type: ValueType) -> ValueSetter {
    match value_type {
        ValueType::Bool => set_as::<bool>,
        ValueType::Int => set_as::<i32>,
        ValueType::Float => set_as::<f32>,
        ValueType::String => set_as::<String>,
        ValueType::Vector2 => set_as::<Vector2>,
        ValueType::Vector2Int => set_as::<Vector2Int>,
        ValueType::Vector3 => set_as::<Vector3>,
        ValueType::Vector3Int => set_as::<Vector3Int>,
        ValueType::Quaternion => set_as::<Quaternion>,
    }
}

/// One authoring row.
///
/// `value_type` is authoritative: the payload's own tag is overwritten by it before ingestion, so
/// rows whose payload tag was never filled in (the usual case for persisted data) still land as
/// the declared kind.
///
/// Ingestion dispatches on the row's `value_type`, never on `value.value_type`. For rows whose two
/// tags agree (anything built with [`new`](Self::new) or passed through
/// [`sync_value_type`](Self::sync_value_type)) this is the same thing. For a row built by hand with
/// disagreeing tags, the declared kind wins and the matching payload slot is read, even if the
/// payload tag names another kind.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlackboardEntryData {
    pub key_name: String,
    pub value_type: ValueType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: AnyValue,
}

impl BlackboardEntryData {
    pub fn new(key_name: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        let value = value.into();
        Self {
            key_name: key_name.into(),
            value_type: value.value_type,
            value,
        }
    }

    /// Copies `value_type` into the payload tag.
    pub fn sync_value_type(&mut self) {
        self.value.value_type = self.value_type;
    }

    fn synced_value(&self) -> Cow<'_, AnyValue> {
        if self.value.value_type == self.value_type {
            Cow::Borrowed(&self.value)
        } else {
            let mut value = self.value.clone();
            value.value_type = self.value_type;
            Cow::Owned(value)
        }
    }

    pub fn set_value_on_blackboard(&self, blackboard: &mut Blackboard) -> Result<BlackboardKey> {
        let key = blackboard.get_or_register_key(&self.key_name)?;
        let value = self.synced_value();
        setter_for(self.value_type)(blackboard, &key, &value);
        tracing::trace!(key = %key, value_type = %self.value_type, "ingested blackboard entry");
        Ok(key)
    }
}

/// An ordered list of authoring rows. Later rows win when names repeat.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlackboardAsset {
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<BlackboardEntryData>,
}

impl BlackboardAsset {
    pub fn new(entries: Vec<BlackboardEntryData>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: BlackboardEntryData) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sync_value_types(&mut self) {
        self.entries
            .iter_mut()
            .for_each(BlackboardEntryData::sync_value_type);
    }

    /// Ingests every row in order, stopping at the first invalid one.
    pub fn set_values_on_blackboard(&self, blackboard: &mut Blackboard) -> Result<()> {
        for entry in &self.entries {
            entry.set_value_on_blackboard(blackboard)?;
        }
        tracing::debug!(entries = self.entries.len(), "blackboard asset ingested");
        Ok(())
    }
}

impl FromIterator<BlackboardEntryData> for BlackboardAsset {
    fn from_iter<I: IntoIterator<Item = BlackboardEntryData>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
