//! Key-renaming combinators.

use std::collections::HashMap;

use crate::value::ObjectMap;

/// A mapping from original key to replacement key.
///
/// Keys are unique and order is irrelevant; enumeration order always comes
/// from the object being renamed, never from the key-map.
pub type KeyMap = HashMap<String, String>;

/// Returns a new object with the own keys renamed through `keys_map`.
///
/// Keys found in `keys_map` are replaced; keys absent from it pass through
/// unchanged. Values are carried over as-is (cloned, never deep-copied).
/// Entries are processed in the object's own enumeration order, so when two
/// original keys collide on the same new key the later-processed one wins.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::{rename_keys, KeyMap};
/// use adjunct::object;
///
/// let keys_map: KeyMap = [(String::from("a"), String::from("b"))].into_iter().collect();
/// let renamed = rename_keys(&keys_map, &object! { "a" => 1, "c" => 2 });
/// assert_eq!(renamed, object! { "b" => 1, "c" => 2 });
/// ```
///
/// Partially applied:
///
/// ```rust
/// use adjunct::combinator::{rename_keys, KeyMap};
/// use adjunct::{curry2, object};
///
/// let keys_map: KeyMap = [(String::from("a"), String::from("b"))].into_iter().collect();
/// let rename = curry2!(rename_keys)(&keys_map);
/// assert_eq!(rename(&object! { "a" => 1 }), object! { "b" => 1 });
/// ```
#[must_use]
pub fn rename_keys(keys_map: &KeyMap, object: &ObjectMap) -> ObjectMap {
    let mut renamed = ObjectMap::new();
    for (key, value) in object {
        let new_key = keys_map.get(key).cloned().unwrap_or_else(|| key.clone());
        renamed.insert(new_key, value.clone());
    }
    renamed
}

/// Returns a new object with every own key renamed through `rename_function`.
///
/// Same enumeration order and collision rule as [`rename_keys`].
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::rename_keys_with;
/// use adjunct::object;
///
/// let shouted = rename_keys_with(str::to_uppercase, &object! { "a" => 1 });
/// assert_eq!(shouted, object! { "A" => 1 });
/// ```
#[must_use]
pub fn rename_keys_with<F>(rename_function: F, object: &ObjectMap) -> ObjectMap
where
    F: Fn(&str) -> String,
{
    let mut renamed = ObjectMap::new();
    for (key, value) in object {
        renamed.insert(rename_function(key.as_str()), value.clone());
    }
    renamed
}
