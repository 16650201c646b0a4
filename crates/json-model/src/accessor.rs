//! Typed accessors over object- and array-shaped JSON values.
//!
//! Every lookup that fails below an accessor is re-raised with exactly one
//! segment prepended: the key or index this accessor was resolving. Nothing
//! is shared between frames, so the full root-to-leaf path is built purely by
//! unwinding.

use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::convert::Initializable;
use crate::error::ModelError;
use crate::key::ModelKey;

/// Read-only view of a JSON object whose fields are addressed by `K`.
///
/// Holding one proves the wrapped value is an object.
#[derive(Debug, Clone, Copy)]
pub struct ObjectAccessor<'a, K: ModelKey> {
    object: &'a Map<String, Value>,
    keys: PhantomData<K>,
}

impl<'a, K: ModelKey> ObjectAccessor<'a, K> {
    /// Fails with `InvalidShape` and an empty path unless `value` is an
    /// object; the caller adds its own segment if this object is nested.
    pub fn from_json(value: &'a Value) -> Result<Self, ModelError> {
        value
            .as_object()
            .map(Self::from_map)
            .ok_or_else(ModelError::invalid_shape)
    }

    pub fn from_map(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            keys: PhantomData,
        }
    }

    /// The raw value stored under `key`, if any.
    pub fn raw(&self, key: K) -> Option<&'a Value> {
        self.object.get(key.token())
    }

    pub fn contains(&self, key: K) -> bool {
        self.object.contains_key(key.token())
    }

    pub fn required<T: Initializable>(&self, key: K) -> Result<T, ModelError> {
        let value = self
            .raw(key)
            .ok_or_else(|| ModelError::missing(key.token()))?;
        T::from_json(value).map_err(|e| e.nested(key.token()))
    }

    /// `Ok(None)` only when the key is absent. A present value that fails to
    /// convert (including `null`) is an error, exactly as for
    /// [`required`](Self::required).
    pub fn optional<T: Initializable>(&self, key: K) -> Result<Option<T>, ModelError> {
        match self.raw(key) {
            None => Ok(None),
            Some(value) => T::from_json(value)
                .map(Some)
                .map_err(|e| e.nested(key.token())),
        }
    }

    /// Element `i` failing with `E` is reported at `[key][i] ++ E.path`.
    pub fn required_array<T: Initializable>(&self, key: K) -> Result<Vec<T>, ModelError> {
        let value = self
            .raw(key)
            .ok_or_else(|| ModelError::missing(key.token()))?;
        decode_elements(value).map_err(|e| e.nested(key.token()))
    }

    pub fn optional_array<T: Initializable>(&self, key: K) -> Result<Option<Vec<T>>, ModelError> {
        match self.raw(key) {
            None => Ok(None),
            Some(value) => decode_elements(value)
                .map(Some)
                .map_err(|e| e.nested(key.token())),
        }
    }

    /// Field names present in the object that `K` does not declare.
    ///
    /// Decoding ignores them; this is for diagnostics only.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.object
            .keys()
            .filter(|name| K::from_token(name).is_none())
            .map(String::as_str)
    }
}

fn decode_elements<T: Initializable>(value: &Value) -> Result<Vec<T>, ModelError> {
    ArrayAccessor::from_json(value)?.elements()
}

/// Read-only view of a JSON array.
#[derive(Debug, Clone, Copy)]
pub struct ArrayAccessor<'a> {
    items: &'a [Value],
}

impl<'a> ArrayAccessor<'a> {
    /// Fails with `InvalidShape` and an empty path unless `value` is an
    /// array.
    pub fn from_json(value: &'a Value) -> Result<Self, ModelError> {
        value
            .as_array()
            .map(|items| Self::from_slice(items))
            .ok_or_else(ModelError::invalid_shape)
    }

    pub fn from_slice(items: &'a [Value]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn raw(&self, index: usize) -> Option<&'a Value> {
        self.items.get(index)
    }

    /// Out-of-range positions fail with `MissingValue` at `[index]`.
    pub fn element<T: Initializable>(&self, index: usize) -> Result<T, ModelError> {
        let value = self.raw(index).ok_or_else(|| ModelError::missing(index))?;
        T::from_json(value).map_err(|e| e.nested(index))
    }

    pub fn optional_element<T: Initializable>(&self, index: usize) -> Result<Option<T>, ModelError> {
        match self.raw(index) {
            None => Ok(None),
            Some(value) => T::from_json(value).map(Some).map_err(|e| e.nested(index)),
        }
    }

    /// Decodes every element in order, stopping at the first failure.
    pub fn elements<T: Initializable>(&self) -> Result<Vec<T>, ModelError> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, value)| T::from_json(value).map_err(|e| e.nested(index)))
            .collect()
    }
}
