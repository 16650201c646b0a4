//! Representable / Initializable capabilities and their primitive impls.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::accessor::ArrayAccessor;
use crate::error::ModelError;

/// Total conversion of a domain value into JSON.
pub trait Representable {
    fn to_json(&self) -> Value;
}

/// Fallible conversion of a JSON value into a domain value.
///
/// Leaf conversions fail with an empty path; the enclosing accessor supplies
/// the key or index that led here.
///
/// Calling `from_json` directly skips the nesting-depth guard; only the
/// `from_value`/`from_str`/`from_slice` entry points apply
/// [`DecodeOptions::max_depth`](crate::DecodeOptions::max_depth).
pub trait Initializable: Sized {
    fn from_json(value: &Value) -> Result<Self, ModelError>;
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

impl Representable for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Initializable for String {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(ModelError::invalid_element)
    }
}

impl Representable for str {
    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Representable for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Initializable for bool {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        value.as_bool().ok_or_else(ModelError::invalid_element)
    }
}

macro_rules! impl_signed {
    ($($ty:ty),+) => {$(
        impl Representable for $ty {
            fn to_json(&self) -> Value {
                Value::Number(Number::from(*self as i64))
            }
        }

        impl Initializable for $ty {
            fn from_json(value: &Value) -> Result<Self, ModelError> {
                value
                    .as_i64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .ok_or_else(ModelError::invalid_element)
            }
        }
    )+};
}

macro_rules! impl_unsigned {
    ($($ty:ty),+) => {$(
        impl Representable for $ty {
            fn to_json(&self) -> Value {
                Value::Number(Number::from(*self as u64))
            }
        }

        impl Initializable for $ty {
            fn from_json(value: &Value) -> Result<Self, ModelError> {
                value
                    .as_u64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .ok_or_else(ModelError::invalid_element)
            }
        }
    )+};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl Representable for f64 {
    fn to_json(&self) -> Value {
        // Non-finite floats have no JSON form and become null.
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

impl Initializable for f64 {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        value.as_f64().ok_or_else(ModelError::invalid_element)
    }
}

impl Representable for f32 {
    fn to_json(&self) -> Value {
        f64::from(*self).to_json()
    }
}

impl Initializable for f32 {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let n = f64::from_json(value)?;
        let narrowed = n as f32;
        if n.is_finite() && !narrowed.is_finite() {
            return Err(ModelError::invalid_element());
        }
        Ok(narrowed)
    }
}

impl Representable for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl Initializable for Value {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        Ok(value.clone())
    }
}

// ---------------------------------------------------------------------------
// Composites
// ---------------------------------------------------------------------------

impl<T: Representable + ?Sized> Representable for &T {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

impl<T: Representable + ?Sized> Representable for Box<T> {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

impl<T: Initializable> Initializable for Box<T> {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        T::from_json(value).map(Box::new)
    }
}

impl<T: Representable> Representable for [T] {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Representable::to_json).collect())
    }
}

impl<T: Representable> Representable for Vec<T> {
    fn to_json(&self) -> Value {
        self.as_slice().to_json()
    }
}

impl<T: Initializable> Initializable for Vec<T> {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        ArrayAccessor::from_json(value)?.elements()
    }
}

impl<T: Representable> Representable for BTreeMap<String, T> {
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in self {
            map.insert(key.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

impl<T: Initializable> Initializable for BTreeMap<String, T> {
    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let object = value.as_object().ok_or_else(ModelError::invalid_shape)?;
        let mut out = BTreeMap::new();
        for (key, entry) in object {
            let decoded = T::from_json(entry).map_err(|e| e.nested(key.as_str()))?;
            out.insert(key.clone(), decoded);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn primitive_mismatch_is_invalid_element_with_empty_path() {
        let cases: Vec<Result<(), ModelError>> = vec![
            String::from_json(&json!(23)).map(drop),
            bool::from_json(&json!("true")).map(drop),
            i64::from_json(&json!(1.5)).map(drop),
            f64::from_json(&json!(null)).map(drop),
            u32::from_json(&json!(-1)).map(drop),
        ];
        for result in cases {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidElement);
            assert!(err.path().is_empty());
        }
    }

    #[test]
    fn integer_range_is_checked() {
        assert_eq!(u8::from_json(&json!(255)).unwrap(), 255);
        assert!(u8::from_json(&json!(256)).is_err());
        assert_eq!(i16::from_json(&json!(-32768)).unwrap(), i16::MIN);
        assert!(i16::from_json(&json!(40000)).is_err());
        assert_eq!(u64::from_json(&json!(u64::MAX)).unwrap(), u64::MAX);
    }

    #[test]
    fn floats_accept_integers() {
        assert_eq!(f64::from_json(&json!(43)).unwrap(), 43.0);
        assert_eq!(f32::from_json(&json!(0.5)).unwrap(), 0.5);
        assert_eq!(f32::from_json(&json!(f32::MAX)).unwrap(), f32::MAX);
    }

    #[test]
    fn f32_range_is_checked() {
        let err = f32::from_json(&json!(1e39)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidElement);
        assert!(f32::from_json(&json!(-1e39)).is_err());
        assert_eq!(f64::NAN.to_json(), Value::Null);
    }

    #[test]
    fn vec_failure_carries_index() {
        let err = Vec::<String>::from_json(&json!(["a", "b", 3])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidElement);
        assert_eq!(err.path().to_string(), "[2]");

        let err = Vec::<String>::from_json(&json!({"a": 1})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        assert!(err.path().is_empty());
    }

    #[test]
    fn map_failure_carries_field() {
        let ok = BTreeMap::<String, i32>::from_json(&json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(ok.get("b"), Some(&2));
        assert_eq!(ok.to_json(), json!({"a": 1, "b": 2}));

        let err = BTreeMap::<String, i32>::from_json(&json!({"a": 1, "b": "2"})).unwrap_err();
        assert_eq!(err.path().to_string(), "[b]");
    }

    #[test]
    fn composite_representations() {
        assert_eq!(vec![1u8, 2, 3].to_json(), json!([1, 2, 3]));
        assert_eq!(Box::new(true).to_json(), json!(true));
    }
}
