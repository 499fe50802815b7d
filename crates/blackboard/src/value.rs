use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AnyValue, Quaternion, Vector2, Vector2Int, Vector3, Vector3Int};

/// The closed set of value kinds a blackboard entry can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    #[default]
    Bool,
    Int,
    Float,
    String,
    Vector2,
    Vector2Int,
    Vector3,
    Vector3Int,
    Quaternion,
}

impl ValueType {
    pub const ALL: [ValueType; 9] = [
        ValueType::Bool,
        ValueType::Int,
        ValueType::Float,
        ValueType::String,
        ValueType::Vector2,
        ValueType::Vector2Int,
        ValueType::Vector3,
        ValueType::Vector3Int,
        ValueType::Quaternion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::String => "String",
            ValueType::Vector2 => "Vector2",
            ValueType::Vector2Int => "Vector2Int",
            ValueType::Vector3 => "Vector3",
            ValueType::Vector3Int => "Vector3Int",
            ValueType::Quaternion => "Quaternion",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A stored blackboard value. The variant is the entry's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
    Vector2(Vector2),
    Vector2Int(Vector2Int),
    Vector3(Vector3),
    Vector3Int(Vector3Int),
    Quaternion(Quaternion),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Vector2(_) => ValueType::Vector2,
            Value::Vector2Int(_) => ValueType::Vector2Int,
            Value::Vector3(_) => ValueType::Vector3,
            Value::Vector3Int(_) => ValueType::Vector3Int,
            Value::Quaternion(_) => ValueType::Quaternion,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Int(v) => fmt::Display::fmt(v, f),
            Value::Float(v) => fmt::Display::fmt(v, f),
            Value::String(v) => f.write_str(v),
            Value::Vector2(v) => fmt::Display::fmt(v, f),
            Value::Vector2Int(v) => fmt::Display::fmt(v, f),
            Value::Vector3(v) => fmt::Display::fmt(v, f),
            Value::Vector3Int(v) => fmt::Display::fmt(v, f),
            Value::Quaternion(v) => fmt::Display::fmt(v, f),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A Rust type that maps onto exactly one [`ValueType`].
///
/// Implemented for the nine supported kinds only; the trait is sealed so the set stays closed.
pub trait BlackboardValue: sealed::Sealed + Clone + Default + 'static {
    const VALUE_TYPE: ValueType;

    fn into_value(self) -> Value;

    /// Returns the payload if `value` holds this type.
    fn from_value(value: &Value) -> Option<Self>;

    /// The [`AnyValue`] storage slot for this type, regardless of the tag.
    fn slot(any: &AnyValue) -> &Self;
}

macro_rules! impl_blackboard_value {
    ($ty:ty, $variant:ident, $slot:ident) => {
        impl sealed::Sealed for $ty {}

        impl BlackboardValue for $ty {
            const VALUE_TYPE: ValueType = ValueType::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }

            fn slot(any: &AnyValue) -> &Self {
                &any.$slot
            }
        }

        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }
    };
}

impl_blackboard_value!(bool, Bool, bool_value);
impl_blackboard_value!(i32, Int, int_value);
impl_blackboard_value!(f32, Float, float_value);
impl_blackboard_value!(String, String, string_value);
impl_blackboard_value!(Vector2, Vector2, vector2_value);
impl_blackboard_value!(Vector2Int, Vector2Int, vector2_int_value);
impl_blackboard_value!(Vector3, Vector3, vector3_value);
impl_blackboard_value!(Vector3Int, Vector3Int, vector3_int_value);
impl_blackboard_value!(Quaternion, Quaternion, quaternion_value);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}
