//! Canonical JSON bytes for reports and plans.
//!
//! A value is canonical once every number in it is an integer. `serde_json`
//! keeps object keys in a sorted map (the `preserve_order` feature is not
//! enabled anywhere in this workspace) and its compact writer emits no
//! whitespace, so the bytes follow from the value alone.
//!
//! Costs and other reals never enter a digest as JSON numbers: float
//! formatting is the one place two equal runs could disagree. Callers render
//! them as strings first.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A float, NaN or infinity at `path` (`$` is the root).
    #[error("non-integer number {raw} at {path}")]
    NonIntegerNumber { path: String, raw: String },

    #[error("canonical JSON serialization failed: {detail}")]
    Serialize { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] naming the first number, in
/// document order, that is not an `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut path = String::from("$");
    integers_only(value, &mut path)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn integers_only(value: &Value, path: &mut String) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => Err(CanonError::NonIntegerNumber {
            path: path.clone(),
            raw: n.to_string(),
        }),
        Value::Array(items) => items.iter().enumerate().try_for_each(|(i, item)| {
            descend(path, &format!("[{i}]"), |path| integers_only(item, path))
        }),
        Value::Object(map) => map.iter().try_for_each(|(key, item)| {
            descend(path, &format!(".{key}"), |path| integers_only(item, path))
        }),
        _ => Ok(()),
    }
}

fn descend(
    path: &mut String,
    segment: &str,
    f: impl FnOnce(&mut String) -> Result<(), CanonError>,
) -> Result<(), CanonError> {
    let len = path.len();
    path.push_str(segment);
    let result = f(path);
    path.truncate(len);
    result
}
