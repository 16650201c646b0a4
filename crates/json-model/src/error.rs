//! Decode failures and the path they were found at.

use std::fmt;

use json_model_path::{FieldPath, PathSegment};
use serde_json::Value;
use thiserror::Error;

/// What went wrong at a failing location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required key is absent from its object.
    MissingValue,
    /// A value is present but did not convert to the target type, either
    /// directly or because something nested inside it failed.
    InvalidElement,
    /// A value that had to be an object or an array was something else.
    InvalidShape,
    /// The document nests deeper than the configured limit.
    TooDeep,
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub fn name(self) -> &'static str {
        match self {
            Self::MissingValue => "MISSING_VALUE",
            Self::InvalidElement => "INVALID_ELEMENT",
            Self::InvalidShape => "INVALID_SHAPE",
            Self::TooDeep => "TOO_DEEP",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::MissingValue => "No value",
            Self::InvalidElement => "Invalid element",
            Self::InvalidShape => "Invalid shape",
            Self::TooDeep => "Nesting too deep",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A decode failure located by its root-to-leaf path.
///
/// Rendered as `[city][country][name]: Invalid element`. An error whose path
/// is empty (the failing value was the root handed to the decoder) renders as
/// the bare description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{kind}", path_prefix(.path))]
pub struct ModelError {
    kind: ErrorKind,
    origin: ErrorKind,
    path: FieldPath,
}

fn path_prefix(path: &FieldPath) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{path}: ")
    }
}

impl ModelError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            origin: kind,
            path: FieldPath::new(),
        }
    }

    pub fn at(kind: ErrorKind, path: FieldPath) -> Self {
        Self {
            kind,
            origin: kind,
            path,
        }
    }

    pub fn invalid_element() -> Self {
        Self::new(ErrorKind::InvalidElement)
    }

    pub fn invalid_shape() -> Self {
        Self::new(ErrorKind::InvalidShape)
    }

    /// `MissingValue` rooted at the absent key or index.
    pub fn missing(segment: impl Into<PathSegment>) -> Self {
        Self::at(ErrorKind::MissingValue, FieldPath::single(segment))
    }

    /// The error as seen one frame further out: `segment` is placed in
    /// front of the path and the kind becomes `InvalidElement`.
    ///
    /// [`origin`](Self::origin) keeps the kind of the original failure.
    #[must_use]
    pub fn nested(self, segment: impl Into<PathSegment>) -> Self {
        Self {
            kind: ErrorKind::InvalidElement,
            origin: self.origin,
            path: self.path.prepend(segment),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Kind of the failure at the leaf of [`path`](Self::path).
    pub fn origin(&self) -> ErrorKind {
        self.origin
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// RFC 6901 pointer to the failing location.
    pub fn pointer(&self) -> String {
        self.path.to_pointer()
    }

    /// The value at the failing location in `document`, if it exists.
    ///
    /// `None` for `MissingValue`, since the addressed key is absent.
    pub fn locate<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        json_model_path::get(document, self.path.segments())
    }
}
