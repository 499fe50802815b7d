#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    BlackboardValue, Quaternion, Value, ValueType, Vector2, Vector2Int, Vector3, Vector3Int,
};

/// Authoring-time tagged union over the nine [`ValueType`] kinds.
///
/// Every kind has its own storage slot so that an editor can flip `value_type` without losing
/// what was typed into another slot. Only the slot matching `value_type` is meaningful.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnyValue {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub value_type: ValueType,

    pub bool_value: bool,
    pub int_value: i32,
    pub float_value: f32,
    pub string_value: String,
    pub vector2_value: Vector2,
    pub vector2_int_value: Vector2Int,
    pub vector3_value: Vector3,
    pub vector3_int_value: Vector3Int,
    pub quaternion_value: Quaternion,
}

impl AnyValue {
    pub fn new(value: Value) -> Self {
        let mut any = Self {
            value_type: value.value_type(),
            ..Self::default()
        };
        match value {
            Value::Bool(v) => any.bool_value = v,
            Value::Int(v) => any.int_value = v,
            Value::Float(v) => any.float_value = v,
            Value::String(v) => any.string_value = v,
            Value::Vector2(v) => any.vector2_value = v,
            Value::Vector2Int(v) => any.vector2_int_value = v,
            Value::Vector3(v) => any.vector3_value = v,
            Value::Vector3Int(v) => any.vector3_int_value = v,
            Value::Quaternion(v) => any.quaternion_value = v,
        }
        any
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the tagged slot if the tag is exactly `T`, otherwise `T::default()`.
    ///
    /// A tag mismatch is not reported: an `Int` read as `f32` yields `0.0`.
    pub fn convert_to<T: BlackboardValue>(&self) -> T {
        if self.value_type == T::VALUE_TYPE {
            T::slot(self).clone()
        } else {
            T::default()
        }
    }

    /// The tagged slot as a store value.
    pub fn to_value(&self) -> Value {
        match self.value_type {
            ValueType::Bool => Value::Bool(self.bool_value),
            ValueType::Int => Value::Int(self.int_value),
            ValueType::Float => Value::Float(self.float_value),
            ValueType::String => Value::String(self.string_value.clone()),
            ValueType::Vector2 => Value::Vector2(self.vector2_value),
            ValueType::Vector2Int => Value::Vector2Int(self.vector2_int_value),
            ValueType::Vector3 => Value::Vector3(self.vector3_value),
            ValueType::Vector3Int => Value::Vector3Int(self.vector3_int_value),
            ValueType::Quaternion => Value::Quaternion(self.quaternion_value),
        }
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_any_value_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AnyValue {
                fn from(value: $ty) -> Self {
                    Self::new(value.into_value())
                }
            }

            impl From<&AnyValue> for $ty {
                fn from(value: &AnyValue) -> Self {
                    value.convert_to()
                }
            }

            impl From<AnyValue> for $ty {
                fn from(value: AnyValue) -> Self {
                    value.convert_to()
                }
            }
        )*
    };
}

impl_any_value_conversions!(
    bool, i32, f32, String, Vector2, Vector2Int, Vector3, Vector3Int, Quaternion,
);

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        Self::new(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_tag_and_only_the_matching_slot() {
        let any = AnyValue::new(Value::Vector3Int(Vector3Int::new(1, 2, 3)));
        assert_eq!(any.value_type, ValueType::Vector3Int);
        assert_eq!(any.vector3_int_value, Vector3Int::new(1, 2, 3));
        assert_eq!(any.int_value, 0);
        assert_eq!(any.vector3_value, Vector3::ZERO);
    }

    #[test]
    fn stale_slots_are_ignored_after_retagging() {
        let mut any = AnyValue::from(12_i32);
        any.float_value = 3.5;
        assert_eq!(any.convert_to::<f32>(), 0.0);

        any.value_type = ValueType::Float;
        assert_eq!(any.convert_to::<f32>(), 3.5);
        assert_eq!(any.convert_to::<i32>(), 0);
        assert_eq!(any.to_value(), Value::Float(3.5));
    }
}
