//! Multi-path extraction: arrays of paths in, array of values out.

use smallvec::SmallVec;

use crate::value::Value;

/// One step of a [`Path`]: an object key or a sequence index.
///
/// Steps resolve the way host property access does: an `Index` applied to
/// an object looks up the stringified key, a numeric-string `Key` applied
/// to an array indexes into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A key into an object's own entries.
    Key(String),
    /// An index into an array; negative indexes never resolve.
    Index(i64),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<i64> for PathSegment {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for PathSegment {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

/// An ordered sequence of steps locating a nested value.
///
/// Most paths are short, so segments are stored inline.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::Path;
/// use adjunct::path;
///
/// let built = Path::new().key("users").index(0).key("name");
/// assert_eq!(built, path!["users", 0, "name"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    segments: SmallVec<[PathSegment; 4]>,
}

impl Path {
    /// The empty path, which resolves to the root value itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key step.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Appends an index step.
    #[must_use]
    pub fn index(mut self, index: i64) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// The path's steps, in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iterable: I) -> Self {
        Self { segments: iterable.into_iter().collect() }
    }
}

/// Builds a [`Path`] from key and index literals.
///
/// # Examples
///
/// ```rust
/// use adjunct::path;
///
/// let into_first_name = path!["users", 0, "name"];
/// assert_eq!(into_first_name.segments().len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::combinator::Path::new()
    };
    ($($segment:expr),+ $(,)?) => {
        <$crate::combinator::Path as ::std::iter::FromIterator<_>>::from_iter([
            $($crate::combinator::PathSegment::from($segment)),+
        ])
    };
}

/// Resolves each path in `path_set` against `value`, in order.
///
/// The result has exactly one entry per path, in path-set order. A path
/// that cannot be fully resolved (a missing key, an out-of-range or
/// negative index, or a step into a value that has no members) yields
/// `Value::Undefined` at its position instead of failing.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::paths;
/// use adjunct::value::Value;
/// use adjunct::{object, path};
///
/// let tree = Value::from(object! { "a" => object! { "b" => 5 } });
/// let resolved = paths(&[path!["a", "b"], path!["x"]], &tree);
/// assert_eq!(resolved, [Value::Number(5.0), Value::Undefined]);
/// ```
#[must_use]
pub fn paths(path_set: &[Path], value: &Value) -> Vec<Value> {
    path_set.iter().map(|path| resolve(path, value)).collect()
}

fn resolve(path: &Path, value: &Value) -> Value {
    let mut current = value;
    for segment in path.segments() {
        match step(current, segment) {
            Some(next) => current = next,
            None => return Value::Undefined,
        }
    }
    current.clone()
}

fn step<'a>(value: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match (value, segment) {
        (Value::Array(items), PathSegment::Index(index)) => {
            usize::try_from(*index).ok().and_then(|index| items.get(index))
        }
        (Value::Array(items), PathSegment::Key(key)) => {
            key.parse::<usize>().ok().and_then(|index| items.get(index))
        }
        (Value::Object(object), PathSegment::Key(key)) => object.entries().get(key),
        (Value::Object(object), PathSegment::Index(index)) => {
            object.entries().get(&index.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{object, path};
    use rstest::rstest;

    fn tree() -> Value {
        Value::from(object! {
            "a" => object! { "b" => 5 },
            "list" => Value::Array(vec![Value::from("zero"), Value::from("one")]),
        })
    }

    #[rstest]
    fn results_preserve_path_set_order_and_length() {
        let resolved = paths(&[path!["a", "b"], path!["x"]], &tree());
        assert_eq!(resolved, [Value::Number(5.0), Value::Undefined]);
    }

    #[rstest]
    fn the_empty_path_resolves_to_the_root() {
        let resolved = paths(&[path![]], &tree());
        assert_eq!(resolved, [tree()]);
    }

    #[rstest]
    fn index_steps_resolve_into_arrays() {
        let resolved = paths(&[path!["list", 1], path!["list", 5], path!["list", -1]], &tree());
        assert_eq!(resolved, [Value::from("one"), Value::Undefined, Value::Undefined]);
    }

    #[rstest]
    fn numeric_keys_and_stringified_indexes_cross_over() {
        let by_string_key = paths(&[path!["list", "1"]], &tree());
        assert_eq!(by_string_key, [Value::from("one")]);

        let keyed = Value::from(object! { "0" => "zeroth" });
        let by_index = paths(&[path![0]], &keyed);
        assert_eq!(by_index, [Value::from("zeroth")]);
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Undefined)]
    #[case(Value::from("text"))]
    #[case(Value::Number(3.0))]
    fn steps_into_memberless_values_yield_undefined(#[case] root: Value) {
        let resolved = paths(&[path!["a"]], &root);
        assert_eq!(resolved, [Value::Undefined]);
    }

    #[rstest]
    fn partial_application_equals_the_full_call() {
        let path_set = vec![path!["a", "b"]];
        let extract = crate::curry2!(paths);
        let from_tree = extract(path_set.as_slice());
        assert_eq!(from_tree(&tree()), paths(&path_set, &tree()));
    }
}
