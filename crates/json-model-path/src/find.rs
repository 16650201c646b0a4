//! Resolving a path against a JSON document.

use serde_json::Value;

use crate::segment::PathSegment;

/// Walks `path` from `root`, returning the addressed value.
///
/// Field segments only descend into objects and index segments only into
/// arrays; any mismatch or missing step yields `None`.
pub fn get<'a>(root: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    let mut current = root;
    for segment in path {
        current = match (segment, current) {
            (PathSegment::Field(name), Value::Object(map)) => map.get(name)?,
            (PathSegment::Index(position), Value::Array(items)) => items.get(*position)?,
            _ => return None,
        };
    }
    Some(current)
}
