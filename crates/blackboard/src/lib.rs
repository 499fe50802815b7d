//! Shared, hash-keyed state for game AI.
//!
//! A [`Blackboard`] stores one value per [`BlackboardKey`]. Values are drawn from a closed set of
//! kinds ([`ValueType`]); authoring data arrives as [`AnyValue`] records and is ingested through
//! [`BlackboardAsset`]. The blackboard also carries a queue of deferred actions that a scheduler
//! drains once per tick.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod any_value;
pub mod asset;
pub mod blackboard;
pub mod error;
pub mod key;
pub mod math;
pub mod value;

pub use any_value::AnyValue;
pub use asset::{setter_for, BlackboardAsset, BlackboardEntryData, ValueSetter};
pub use blackboard::{Blackboard, BlackboardEntry, PendingAction};
pub use error::{BlackboardError, Result};
pub use key::{fnv1a_32, BlackboardKey};
pub use math::{Quaternion, Vector2, Vector2Int, Vector3, Vector3Int};
pub use value::{BlackboardValue, Value, ValueType};
