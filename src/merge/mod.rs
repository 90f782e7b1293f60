//! Recursive deep merge of document trees.
//!
//! The merge is a pure pattern match over the variant pair of (base,
//! overlay); everything around it is a left-to-right fold.

use crate::error::MergeError;
use serde_json::Value;

/// Merge `overlay` onto `base`, producing a new tree.
///
/// - Object + Object: the key set is the union of both sides. Keys present
///   on one side carry that side's value unchanged; keys present on both
///   recurse. Base key order comes first, overlay-only keys append in
///   overlay order.
/// - Array + Array: base elements followed by overlay elements. Arrays
///   concatenate, never merge index-wise; downstream consumers depend on
///   concatenation order.
/// - Anything else, scalars included: the overlay value wins outright.
///   `null` is an ordinary scalar, so an explicit `null` overlay replaces
///   the base value.
///
/// Inputs are borrowed and left untouched; the result is freshly allocated.
/// Total over `Value`: merging well-formed trees cannot fail.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, overlay_value) in overlay_map {
                let value = match base_map.get(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            let mut merged = Vec::with_capacity(base_items.len() + overlay_items.len());
            merged.extend(base_items.iter().cloned());
            merged.extend(overlay_items.iter().cloned());
            Value::Array(merged)
        }
        (_, overlay_value) => overlay_value.clone(),
    }
}

/// Fold an ordered list of documents into one tree, strictly left to right.
///
/// The last document has final say on scalar and type conflicts, and array
/// concatenation follows document order. An empty list is a configuration
/// error; a single document comes back as an unshared copy.
pub fn merge_documents(documents: &[Value]) -> Result<Value, MergeError> {
    let (first, rest) = documents
        .split_first()
        .ok_or_else(|| MergeError::InvalidConfig("no input documents to merge".to_string()))?;

    Ok(rest.iter().fold(first.clone(), |merged, next| deep_merge(&merged, next)))
}
