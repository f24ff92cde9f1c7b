//! Array-likeness.
//!
//! A value is array-like when it is an ordered, indexable sequence with a
//! numeric length: every array, plus any object carrying a valid own
//! `length` entry together with the boundary index entries that make the
//! length believable. Strings and functions are indexable in some hosts but
//! are excluded by contract; only arrays and list-like objects count.

use super::complement;
use crate::value::{ObjectValue, Value};

/// Largest believable list length: 2^32 − 1.
const MAX_LENGTH: f64 = 4_294_967_295.0;

/// Checks whether the value is array-like.
///
/// Arrays always are. A non-array object is array-like when it has an own
/// `length` entry holding an integer in `0..=2^32 − 1` and, for a non-zero
/// length, own `"0"` and `"length − 1"` entries. Strings and functions are
/// never array-like.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
/// use adjunct::predicate::is_array_like;
/// use adjunct::value::Value;
///
/// assert!(is_array_like(&Value::Array(vec![])));
///
/// let listlike = object! { "0" => "a", "1" => "b", "length" => 2 };
/// assert!(is_array_like(&Value::from(listlike)));
///
/// assert!(!is_array_like(&Value::from("indexable but excluded")));
/// ```
#[must_use]
pub fn is_array_like(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(object) => has_believable_length(object),
        _ => false,
    }
}

fn has_believable_length(object: &ObjectValue) -> bool {
    let entries = object.entries();
    let Some(Value::Number(length)) = entries.get("length") else {
        return false;
    };
    if length.fract() != 0.0 || *length < 0.0 || *length > MAX_LENGTH {
        return false;
    }
    if *length == 0.0 {
        return true;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let last_index = (*length as u64) - 1;
    entries.contains_key("0") && entries.contains_key(&last_index.to_string())
}

complement!(array_like);
