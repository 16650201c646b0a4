//! JSON Pointer (RFC 6901) rendering of decode paths.

use thiserror::Error;

use crate::segment::PathSegment;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("json pointer must be absolute or empty")]
    NotAbsolute,
}

/// Unescapes one JSON Pointer reference token.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one field name for use as a JSON Pointer reference token.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Formats a segment sequence as an RFC 6901 pointer.
///
/// Field names are escaped; indices are written in decimal.
pub fn format_json_pointer(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        out.push('/');
        match segment {
            PathSegment::Field(name) => out.push_str(&escape_component(name)),
            PathSegment::Index(position) => out.push_str(&position.to_string()),
        }
    }
    out
}

/// Parses an absolute pointer into segments.
///
/// A pointer carries no type information, so every token that is a
/// canonical array index (`0` or a digit string without a leading zero) is
/// returned as [`PathSegment::Index`]; everything else becomes a field.
///
/// - `"" -> []`
/// - `"/" -> [Field("")]`
/// - `"/a~1b/0" -> [Field("a/b"), Index(0)]`
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<PathSegment>, PathError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(PathError::NotAbsolute);
    }
    Ok(pointer
        .split('/')
        .skip(1)
        .map(|token| {
            let token = unescape_component(token);
            match canonical_index(&token) {
                Some(position) => PathSegment::Index(position),
                None => PathSegment::Field(token),
            }
        })
        .collect())
}

fn canonical_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_matrix() {
        assert_eq!(parse_json_pointer("").unwrap(), Vec::<PathSegment>::new());
        assert_eq!(
            parse_json_pointer("/").unwrap(),
            vec![PathSegment::field("")]
        );
        assert_eq!(
            parse_json_pointer("/a~0b/c~1d/1").unwrap(),
            vec![
                PathSegment::field("a~b"),
                PathSegment::field("c/d"),
                PathSegment::index(1)
            ]
        );
        assert_eq!(
            format_json_pointer(&[
                PathSegment::field("a~b"),
                PathSegment::field("c/d"),
                PathSegment::index(1)
            ]),
            "/a~0b/c~1d/1"
        );
        assert_eq!(parse_json_pointer("x/y"), Err(PathError::NotAbsolute));
    }

    #[test]
    fn leading_zero_tokens_stay_fields() {
        assert_eq!(
            parse_json_pointer("/01/0").unwrap(),
            vec![PathSegment::field("01"), PathSegment::index(0)]
        );
    }
}
