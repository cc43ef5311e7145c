//! Shape inspection and value-removal helpers for sequences.

use serde_json::Value;

/// Checks whether a value is an associative mapping.
///
/// A non-empty mapping is list-like when its keys are exactly `"0"`, `"1"`, ...
/// `"n-1"` in order; any other mapping, including an empty one, is associative.
/// Sequences (empty or not) and scalars are not associative.
pub fn is_assoc_array(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.is_empty()
                || map
                    .keys()
                    .enumerate()
                    .any(|(index, key)| *key != index.to_string())
        }
        _ => false,
    }
}

/// Returns the elements of `array` that are not equal to any of `values`.
///
/// Order is preserved.
///
/// ```
/// use dragon_helpers::array_without;
///
/// assert_eq!(array_without(&["a", "b", "c", "b"], &["b"]), vec!["a", "c"]);
/// ```
pub fn array_without<T: PartialEq + Clone>(array: &[T], values: &[T]) -> Vec<T> {
    array
        .iter()
        .filter(|item| !values.contains(item))
        .cloned()
        .collect()
}

/// Removes every element equal to one of `values` from `array`.
///
/// Returns the removed elements in their original order, duplicates included.
pub fn array_pull_values<T: PartialEq>(array: &mut Vec<T>, values: &[T]) -> Vec<T> {
    let (matches, rest): (Vec<T>, Vec<T>) = std::mem::take(array)
        .into_iter()
        .partition(|item| values.contains(item));
    *array = rest;
    matches
}

/// Removes every occurrence of `value` from `array`, returning the first one.
///
/// Returns `None` if `array` did not contain `value`.
pub fn array_pull_value<T: PartialEq>(array: &mut Vec<T>, value: &T) -> Option<T> {
    array_pull_values(array, std::slice::from_ref(value))
        .into_iter()
        .next()
}
