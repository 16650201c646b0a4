//! Nesting-depth guard run before decoding.

use json_model_path::{FieldPath, PathSegment};
use serde_json::{map, Value};

use crate::error::{ErrorKind, ModelError};

enum Children<'a> {
    Array(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Object(map::Iter<'a>),
}

enum Step<'a> {
    Index(usize),
    Field(&'a str),
}

fn children(value: &Value) -> Option<Children<'_>> {
    match value {
        Value::Array(items) => Some(Children::Array(items.iter().enumerate())),
        Value::Object(map) => Some(Children::Object(map.iter())),
        _ => None,
    }
}

/// Fails with `TooDeep` if containers nest more than `max_depth` levels.
///
/// The root container is level 1; scalars do not count. The walk keeps its
/// own stack, so arbitrarily deep input cannot overflow the call stack here.
/// The error path addresses the first container found beyond the limit.
pub(crate) fn check_depth(root: &Value, max_depth: usize) -> Result<(), ModelError> {
    let Some(first) = children(root) else {
        return Ok(());
    };
    if max_depth == 0 {
        return Err(ModelError::new(ErrorKind::TooDeep));
    }

    // Invariant: path.len() + 1 == stack.len() while the stack is non-empty.
    let mut stack = vec![first];
    let mut path: Vec<PathSegment> = Vec::new();

    while let Some(top) = stack.last_mut() {
        let next = match top {
            Children::Array(iter) => iter.next().map(|(i, v)| (Step::Index(i), v)),
            Children::Object(iter) => iter.next().map(|(k, v)| (Step::Field(k.as_str()), v)),
        };
        let Some((step, value)) = next else {
            stack.pop();
            path.pop();
            continue;
        };
        let Some(grandchildren) = children(value) else {
            continue;
        };
        path.push(match step {
            Step::Index(i) => PathSegment::Index(i),
            Step::Field(name) => PathSegment::field(name),
        });
        if stack.len() >= max_depth {
            return Err(ModelError::at(ErrorKind::TooDeep, FieldPath::from(path)));
        }
        stack.push(grandchildren);
    }
    Ok(())
}
