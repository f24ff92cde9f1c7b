//! Type-strict numeric predicates.
//!
//! Each of these requires the value to already be numeric (a primitive or
//! wrapped number) before looking at the payload. Non-numeric input is
//! never coerced; it simply fails the check. This is what separates
//! [`is_nan`] from a permissive host-global check that would first convert
//! `"NaN"` or `undefined` to a number.

use super::complement;
use crate::value::Value;

/// Checks whether the value is numeric and is the `NaN` sentinel.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_nan;
/// use adjunct::value::Value;
///
/// assert!(is_nan(&Value::Number(f64::NAN)));
/// assert!(!is_nan(&Value::from("NaN")));
/// assert!(!is_nan(&Value::Undefined));
/// assert!(!is_nan(&Value::Number(1.0)));
/// ```
#[inline]
#[must_use]
pub fn is_nan(value: &Value) -> bool {
    value.number_value().is_some_and(f64::is_nan)
}

/// Checks whether the value is numeric and finite.
///
/// `NaN` and the infinities fail; so does every non-numeric value.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_finite;
/// use adjunct::value::Value;
///
/// assert!(is_finite(&Value::Number(1.5)));
/// assert!(!is_finite(&Value::Number(f64::INFINITY)));
/// assert!(!is_finite(&Value::from("1")));
/// ```
#[inline]
#[must_use]
pub fn is_finite(value: &Value) -> bool {
    value.number_value().is_some_and(f64::is_finite)
}

/// Checks whether the value is numeric, finite, and integral.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_integer;
/// use adjunct::value::Value;
///
/// assert!(is_integer(&Value::Number(4.0)));
/// assert!(!is_integer(&Value::Number(4.5)));
/// assert!(!is_integer(&Value::Number(f64::NAN)));
/// assert!(!is_integer(&Value::from("4")));
/// ```
#[inline]
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    value
        .number_value()
        .is_some_and(|number| number.is_finite() && number.fract() == 0.0)
}

complement!(nan, finite, integer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrimitiveWrapper;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Number(f64::NAN), true)]
    #[case(Value::Wrapper(PrimitiveWrapper::Number(f64::NAN)), true)]
    #[case(Value::from("NaN"), false)]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::Number(0.0), false)]
    fn nan_requires_the_numeric_category(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_nan(&value), expected);
        assert_eq!(is_not_nan(&value), !expected);
    }

    #[rstest]
    #[case(Value::Number(0.0), true)]
    #[case(Value::Number(-2.75), true)]
    #[case(Value::Wrapper(PrimitiveWrapper::Number(3.0)), true)]
    #[case(Value::Number(f64::INFINITY), false)]
    #[case(Value::Number(f64::NEG_INFINITY), false)]
    #[case(Value::Number(f64::NAN), false)]
    #[case(Value::from("1"), false)]
    #[case(Value::Bool(true), false)]
    fn finiteness_never_coerces(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_finite(&value), expected);
    }

    #[rstest]
    #[case(Value::Number(4.0), true)]
    #[case(Value::Number(-0.0), true)]
    #[case(Value::Number(1e15), true)]
    #[case(Value::Number(4.5), false)]
    #[case(Value::Number(f64::INFINITY), false)]
    #[case(Value::Number(f64::NAN), false)]
    #[case(Value::from("4"), false)]
    fn integrality_requires_a_finite_number(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_integer(&value), expected);
    }
}
