//! Sequence-building combinators.

use crate::value::Value;

/// Picks values from `items` by position, in the order the indexes are
/// given.
///
/// The result has exactly one entry per index. An out-of-range index yields
/// `Value::Undefined` at its position rather than failing.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::pick_indexes;
/// use adjunct::list;
///
/// let picked = pick_indexes(&[2, 0], &list!["x", "y", "z"]);
/// assert_eq!(picked, list!["z", "x"]);
/// ```
#[must_use]
pub fn pick_indexes(indexes: &[usize], items: &[Value]) -> Vec<Value> {
    indexes
        .iter()
        .map(|&index| items.get(index).cloned().unwrap_or(Value::Undefined))
        .collect()
}

/// Collects its arguments into an ordered sequence of values.
///
/// Accepts zero or more items, each anything convertible to
/// [`Value`](crate::value::Value), and preserves the written order.
///
/// # Examples
///
/// ```rust
/// use adjunct::list;
/// use adjunct::value::Value;
///
/// assert_eq!(list![1, 2, 3], vec![Value::from(1), Value::from(2), Value::from(3)]);
/// assert!(list![].is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($item)),+]
    };
}
