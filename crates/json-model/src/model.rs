//! Object- and array-shaped models.

use serde_json::{Map, Value};

use crate::accessor::{ArrayAccessor, ObjectAccessor};
use crate::convert::{Initializable, Representable};
use crate::error::ModelError;
use crate::key::ModelKey;

/// A model stored as a JSON object whose fields are named by [`Self::Key`].
pub trait ObjectModel: Sized {
    type Key: ModelKey;

    /// Assembles the model field by field.
    fn decode(object: &ObjectAccessor<'_, Self::Key>) -> Result<Self, ModelError>;

    /// Lists the fields to write. Keys left unset are omitted.
    fn encode(&self, fields: &mut FieldMap<Self::Key>);
}

/// A model stored as a JSON array, such as a fixed-position tuple.
pub trait ArrayModel: Sized {
    fn decode(array: &ArrayAccessor<'_>) -> Result<Self, ModelError>;

    fn encode(&self) -> Vec<Value>;
}

/// Something that decodes from and encodes to a JSON object.
///
/// Implemented for every [`ObjectModel`] that also carries the
/// [`Initializable`] and [`Representable`] impls generated by
/// [`json_model!`](crate::json_model).
pub trait Model: ObjectModel + Initializable + Representable {}

impl<T> Model for T where T: ObjectModel + Initializable + Representable {}

/// Builds an [`ObjectAccessor`] over `value` and runs `M::decode` on it.
pub fn decode_object<M: ObjectModel>(value: &Value) -> Result<M, ModelError> {
    let object = ObjectAccessor::from_json(value)?;
    M::decode(&object)
}

pub fn encode_object<M: ObjectModel>(model: &M) -> Value {
    let mut fields = FieldMap::new();
    model.encode(&mut fields);
    fields.into_json()
}

pub fn decode_array<M: ArrayModel>(value: &Value) -> Result<M, ModelError> {
    let array = ArrayAccessor::from_json(value)?;
    M::decode(&array)
}

pub fn encode_array<M: ArrayModel>(model: &M) -> Value {
    Value::Array(model.encode())
}

/// Mapping from key to optional encoded value, written out in insertion
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap<K: ModelKey> {
    entries: Vec<(K, Option<Value>)>,
}

impl<K: ModelKey> Default for FieldMap<K> {
    fn default() -> Self {
        Self {
            entries: Vec::with_capacity(K::ALL.len()),
        }
    }
}

impl<K: ModelKey> FieldMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T: Representable + ?Sized>(&mut self, key: K, value: &T) -> &mut Self {
        self.put(key, Some(value.to_json()))
    }

    /// `None` leaves the key out of the encoded object.
    pub fn set_optional<T: Representable>(&mut self, key: K, value: Option<&T>) -> &mut Self {
        self.put(key, value.map(Representable::to_json))
    }

    pub fn remove(&mut self, key: K) -> &mut Self {
        self.put(key, None)
    }

    pub fn get(&self, key: K) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    fn put(&mut self, key: K, value: Option<Value>) -> &mut Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Object holding exactly the keys with a present value.
    pub fn into_json(self) -> Value {
        let mut map = Map::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            if let Some(value) = value {
                map.insert(key.token().to_string(), value);
            }
        }
        Value::Object(map)
    }
}

/// Implements [`Initializable`] and [`Representable`] for [`ObjectModel`]
/// types.
#[macro_export]
macro_rules! json_model {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Initializable for $ty {
            fn from_json(value: &$crate::serde_json::Value) -> ::core::result::Result<Self, $crate::ModelError> {
                $crate::decode_object(value)
            }
        }

        impl $crate::Representable for $ty {
            fn to_json(&self) -> $crate::serde_json::Value {
                $crate::encode_object(self)
            }
        }
    )+};
}

/// Implements [`Initializable`] and [`Representable`] for [`ArrayModel`]
/// types.
#[macro_export]
macro_rules! json_array_model {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Initializable for $ty {
            fn from_json(value: &$crate::serde_json::Value) -> ::core::result::Result<Self, $crate::ModelError> {
                $crate::decode_array(value)
            }
        }

        impl $crate::Representable for $ty {
            fn to_json(&self) -> $crate::serde_json::Value {
                $crate::encode_array(self)
            }
        }
    )+};
}
