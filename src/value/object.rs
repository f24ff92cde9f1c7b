//! Object values: insertion-ordered own entries plus a prototype shape.
//!
//! Host objects are modelled as two orthogonal pieces:
//!
//! - [`ObjectMap`]: the object's own enumerable entries, in insertion order.
//!   Re-inserting an existing key replaces the value but keeps the key's
//!   original position, matching the assignment semantics of a host object.
//! - [`Prototype`]: the shape the object was created with (the base object
//!   prototype, no prototype at all, or a named class), which is what the
//!   plain-object predicate dispatches on.
//!
//! Equality of [`ObjectMap`] is order-insensitive (two objects are equal
//! when their own entries agree), while iteration is always in insertion
//! order. Both properties are relied upon by the rename and merge
//! combinators.

use std::fmt;

use super::Value;

/// An insertion-ordered map of an object's own enumerable entries.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
/// use adjunct::value::Value;
///
/// let mut map = object! { "a" => 1, "b" => 2 };
/// map.insert(String::from("a"), Value::from(3));
///
/// // Replacement keeps the original position.
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["a", "b"]);
/// assert_eq!(map.get("a"), Some(&Value::from(3)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObjectMap {
    entries: Vec<(String, Value)>,
}

impl ObjectMap {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of own entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the object has no own entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when `key` is an own entry.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Inserts `value` under `key`, returning the previous value if any.
    ///
    /// An existing key keeps its position in the enumeration order; a new
    /// key is appended at the end.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(std::mem::replace(&mut entry.1, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    /// Iterates over own keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over own values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over own entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }
}

/// Borrowing iterator over an [`ObjectMap`]'s entries, in insertion order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Value)> for ObjectMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iterable: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iterable {
            map.insert(key, value);
        }
        map
    }
}

/// Order-insensitive: two maps are equal when their own entries agree.
impl PartialEq for ObjectMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

/// The shape an object was created with.
///
/// This is the classification-relevant remainder of a host object's
/// prototype: the identity of the prototype object itself does not survive
/// a realm crossing, but which *kind* of prototype it was does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prototype {
    /// The base object prototype: an object literal or a bare constructor
    /// call.
    Base,
    /// No prototype at all.
    Null,
    /// A named class or built-in subtype.
    Class(String),
}

/// A host object: own entries plus the prototype shape.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
/// use adjunct::value::{ObjectValue, Prototype};
///
/// let point = ObjectValue::class_instance("Point", object! { "x" => 1 });
/// assert_eq!(point.prototype(), &Prototype::Class(String::from("Point")));
/// assert_eq!(point.entries().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    prototype: Prototype,
    entries: ObjectMap,
}

impl ObjectValue {
    /// An object with the base prototype (the plain-object shape).
    #[inline]
    #[must_use]
    pub const fn plain(entries: ObjectMap) -> Self {
        Self { prototype: Prototype::Base, entries }
    }

    /// An object with no prototype (also a plain-object shape).
    #[inline]
    #[must_use]
    pub const fn with_null_prototype(entries: ObjectMap) -> Self {
        Self { prototype: Prototype::Null, entries }
    }

    /// An instance of the named class; never a plain object.
    #[inline]
    pub fn class_instance(class_name: impl Into<String>, entries: ObjectMap) -> Self {
        Self { prototype: Prototype::Class(class_name.into()), entries }
    }

    /// The object's prototype shape.
    #[inline]
    #[must_use]
    pub const fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    /// The object's own entries.
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &ObjectMap {
        &self.entries
    }

    /// Mutable access to the object's own entries.
    #[inline]
    pub const fn entries_mut(&mut self) -> &mut ObjectMap {
        &mut self.entries
    }

    /// Consumes the object, returning its own entries.
    #[inline]
    #[must_use]
    pub fn into_entries(self) -> ObjectMap {
        self.entries
    }
}

impl fmt::Display for Prototype {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => formatter.write_str("Object"),
            Self::Null => formatter.write_str("null"),
            Self::Class(name) => formatter.write_str(name),
        }
    }
}

/// Builds an [`ObjectMap`] from `key => value` pairs.
///
/// Keys are anything convertible to `String`, values anything convertible
/// to [`Value`]; entries keep the written order.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
///
/// let map = object! { "a" => 1, "b" => "two" };
/// assert_eq!(map.len(), 2);
///
/// let empty = object! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::ObjectMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::value::ObjectMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::value::Value::from($value));
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn insert_preserves_first_position_on_replacement() {
        let mut map = crate::object! { "a" => 1, "b" => 2, "c" => 3 };
        let previous = map.insert(String::from("b"), Value::from(20));

        assert_eq!(previous, Some(Value::from(2)));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(map.get("b"), Some(&Value::from(20)));
    }

    #[rstest]
    fn insert_appends_new_keys_in_order() {
        let mut map = ObjectMap::new();
        assert_eq!(map.insert(String::from("z"), Value::from(1)), None);
        assert_eq!(map.insert(String::from("a"), Value::from(2)), None);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[rstest]
    fn equality_ignores_entry_order() {
        let left = crate::object! { "a" => 1, "b" => 2 };
        let right = crate::object! { "b" => 2, "a" => 1 };
        assert_eq!(left, right);
    }

    #[rstest]
    fn equality_compares_values() {
        let left = crate::object! { "a" => 1 };
        let right = crate::object! { "a" => 2 };
        assert_ne!(left, right);
    }

    #[rstest]
    fn from_iterator_applies_last_write_wins() {
        let map: ObjectMap = vec![
            (String::from("a"), Value::from(1)),
            (String::from("a"), Value::from(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&Value::from(2)));
    }

    #[rstest]
    fn class_instances_expose_their_prototype() {
        let instance = ObjectValue::class_instance("Widget", ObjectMap::new());
        assert_eq!(instance.prototype(), &Prototype::Class(String::from("Widget")));
        assert_eq!(instance.prototype().to_string(), "Widget");
    }
}
