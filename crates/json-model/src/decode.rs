//! Root decode and encode entry points.
//!
//! The root call adds no path segment of its own: a failure `n` levels below
//! the document root carries a path of exactly `n` segments.

use serde_json::Value;
use thiserror::Error;

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::convert::{Initializable, Representable};
use crate::depth::check_depth;
use crate::error::ModelError;

/// Options for the root decode entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest container nesting accepted; `None` disables the check.
    pub max_depth: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl DecodeOptions {
    pub fn unlimited() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Failure to decode a model from JSON text.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl DecodeError {
    pub fn as_model(&self) -> Option<&ModelError> {
        match self {
            Self::Model(err) => Some(err),
            Self::Parse(_) => None,
        }
    }
}

pub fn from_value<T: Initializable>(value: &Value) -> Result<T, ModelError> {
    from_value_with(value, &DecodeOptions::default())
}

pub fn from_value_with<T: Initializable>(
    value: &Value,
    options: &DecodeOptions,
) -> Result<T, ModelError> {
    if let Some(max_depth) = options.max_depth {
        check_depth(value, max_depth)?;
    }
    T::from_json(value)
}

pub fn from_str<T: Initializable>(text: &str) -> Result<T, DecodeError> {
    from_str_with(text, &DecodeOptions::default())
}

pub fn from_str_with<T: Initializable>(
    text: &str,
    options: &DecodeOptions,
) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(from_value_with(&value, options)?)
}

pub fn from_slice<T: Initializable>(bytes: &[u8]) -> Result<T, DecodeError> {
    from_slice_with(bytes, &DecodeOptions::default())
}

pub fn from_slice_with<T: Initializable>(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(from_value_with(&value, options)?)
}

/// Encodes into a freshly built value; the model is left untouched and may be
/// encoded again.
pub fn to_value<T: Representable + ?Sized>(model: &T) -> Value {
    model.to_json()
}

/// Compact JSON text.
pub fn to_string<T: Representable + ?Sized>(model: &T) -> String {
    model.to_json().to_string()
}

pub fn to_string_pretty<T: Representable + ?Sized>(model: &T) -> String {
    format!("{:#}", model.to_json())
}
