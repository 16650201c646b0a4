//! Decoder limits.

/// Default maximum nesting depth accepted by the root decode entry points.
///
/// Only `from_value`, `from_str`, `from_slice` and their `_with` variants
/// check it; calling `Initializable::from_json` directly does not.
///
/// Matches the recursion limit `serde_json` applies when parsing text, so a
/// document that parsed successfully is never rejected for depth by default.
pub const DEFAULT_MAX_DEPTH: usize = 128;
