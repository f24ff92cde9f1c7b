//! Shallow option merging: `defaults` and its asymmetric counterpart.

use crate::value::ObjectMap;

/// Fills in missing options from `default_options`.
///
/// A shallow, right-biased merge: every key present in `options` overrides
/// the corresponding key in `default_options`; defaulted keys keep the
/// defaults' enumeration order, extra option keys are appended.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::defaults;
/// use adjunct::object;
///
/// let merged = defaults(&object! { "a" => 1, "b" => 2 }, &object! { "b" => 3 });
/// assert_eq!(merged, object! { "a" => 1, "b" => 3 });
/// ```
///
/// Partially applied:
///
/// ```rust
/// use adjunct::combinator::defaults;
/// use adjunct::{curry2, object};
///
/// let default_options = object! { "retries" => 3 };
/// let with_defaults = curry2!(defaults)(&default_options);
/// assert_eq!(with_defaults(&object! {}), object! { "retries" => 3 });
/// ```
#[must_use]
pub fn defaults(default_options: &ObjectMap, options: &ObjectMap) -> ObjectMap {
    let mut merged = default_options.clone();
    for (key, value) in options {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Forces defined defaults back over `options`.
///
/// The asymmetric counterpart of [`defaults`]: the same shallow merge, but
/// `default_options` is authoritative for every key it defines. Keys of
/// `options` that the defaults do not define pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::reset_to_default;
/// use adjunct::object;
///
/// let reset = reset_to_default(&object! { "a" => 1, "b" => 2 }, &object! { "b" => 9, "c" => 4 });
/// assert_eq!(reset, object! { "a" => 1, "b" => 2, "c" => 4 });
/// ```
#[must_use]
pub fn reset_to_default(default_options: &ObjectMap, options: &ObjectMap) -> ObjectMap {
    let mut merged = options.clone();
    for (key, value) in default_options {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object;
    use crate::value::Value;
    use rstest::rstest;

    #[rstest]
    fn options_win_in_defaults() {
        let merged = defaults(&object! { "a" => 1, "b" => 2 }, &object! { "b" => 3 });
        assert_eq!(merged, object! { "a" => 1, "b" => 3 });
    }

    #[rstest]
    fn defaults_keeps_unknown_option_keys() {
        let merged = defaults(&object! { "a" => 1 }, &object! { "z" => 26 });
        assert_eq!(merged, object! { "a" => 1, "z" => 26 });
    }

    #[rstest]
    fn defined_defaults_win_in_reset_to_default() {
        let reset = reset_to_default(&object! { "a" => 1, "b" => 2 }, &object! { "b" => 9 });
        assert_eq!(reset, object! { "a" => 1, "b" => 2 });
    }

    #[rstest]
    fn reset_passes_through_undefaulted_option_keys() {
        let reset = reset_to_default(&object! { "a" => 1 }, &object! { "c" => 4 });
        assert_eq!(reset, object! { "a" => 1, "c" => 4 });
    }

    /// The two merges agree exactly when no key is contested.
    #[rstest]
    fn the_merges_differ_only_on_contested_keys() {
        let default_options = object! { "a" => 1 };
        let options = object! { "b" => 2 };
        assert_eq!(
            defaults(&default_options, &options),
            reset_to_default(&default_options, &options)
        );

        let contested = object! { "a" => 99 };
        assert_eq!(defaults(&default_options, &contested).get("a"), Some(&Value::from(99)));
        assert_eq!(
            reset_to_default(&default_options, &contested).get("a"),
            Some(&Value::from(1))
        );
    }

    #[rstest]
    fn partial_application_equals_the_full_call() {
        let default_options = object! { "a" => 1 };
        let options = object! { "b" => 2 };

        let with_defaults = crate::curry2!(defaults)(&default_options);
        assert_eq!(with_defaults(&options), defaults(&default_options, &options));
    }

    #[rstest]
    fn inputs_are_not_mutated() {
        let default_options = object! { "a" => 1 };
        let options = object! { "a" => 2 };
        let _ = defaults(&default_options, &options);
        let _ = reset_to_default(&default_options, &options);
        assert_eq!(default_options, object! { "a" => 1 });
        assert_eq!(options, object! { "a" => 2 });
    }
}
