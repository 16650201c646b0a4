//! json-model-path - addressing failures inside JSON documents.
//!
//! A [`FieldPath`] is the ordered list of [`PathSegment`]s from a document
//! root to the value a decoder gave up on. It renders in two forms:
//!
//! - bracketed, `[city][country][name]`, used in error messages;
//! - RFC 6901 JSON Pointer, `/city/country/name`, for tooling.
//!
//! [`get`] resolves a path back to the value it addresses.

mod find;
mod path;
mod pointer;
mod segment;

pub use find::get;
pub use path::FieldPath;
pub use pointer::{
    escape_component, format_json_pointer, parse_json_pointer, unescape_component, PathError,
};
pub use segment::PathSegment;
