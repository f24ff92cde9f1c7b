//! The predicate engine: total, pure classifiers over
//! [`Value`](crate::value::Value).
//!
//! Every predicate takes any value and returns a `bool`; none can fail and
//! none keeps state, so classifying the same value twice always agrees.
//! Dispatch is on the value's intrinsic [`TypeTag`](crate::value::TypeTag)
//! (or its structural category), never on identity, so values from foreign
//! execution realms classify exactly like local ones.
//!
//! For every positive predicate there is an `is_not_*` complement generated
//! by the same macro invocation, which makes the law
//!
//! ```text
//! is_not_x(v) == !is_x(v)
//! ```
//!
//! hold by construction rather than by parallel maintenance.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::predicate::{is_finite, is_nan, is_not_string, is_string};
//! use adjunct::value::Value;
//!
//! assert!(is_string(&Value::from("hi")));
//! assert!(is_not_string(&Value::Number(1.0)));
//!
//! // Type-strict: only a numeric value can be NaN.
//! assert!(is_nan(&Value::Number(f64::NAN)));
//! assert!(!is_nan(&Value::from("NaN")));
//! assert!(is_finite(&Value::Number(1.0)));
//! ```

/// Generates the `is_not_*` complement for each named positive predicate.
///
/// `complement!(array)` expands to an `is_not_array` function defined as
/// the negation of `is_array` in the invoking module.
macro_rules! complement {
    ($($name:ident),+ $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = concat!(
                    "Complement of [`is_", stringify!($name), "`]: `true` exactly when ",
                    "[`is_", stringify!($name), "`] returns `false`."
                )]
                #[inline]
                #[must_use]
                pub fn [<is_not_ $name>](value: &$crate::value::Value) -> bool {
                    ![<is_ $name>](value)
                }
            )+
        }
    };
}

pub(crate) use complement;

mod array_like;
mod emptiness;
mod function_kind;
mod numeric;
mod object_shape;
mod primitives;

pub use array_like::{is_array_like, is_not_array_like};
pub use emptiness::{
    is_empty, is_nil, is_nil_or_empty, is_not_empty, is_not_nil, is_not_nil_or_empty,
};
pub use function_kind::{
    is_async_function, is_generator_function, is_not_async_function, is_not_generator_function,
};
pub use numeric::{is_finite, is_integer, is_nan, is_not_finite, is_not_integer, is_not_nan};
pub use object_shape::{
    is_not_object, is_not_object_like, is_not_plain_object, is_object, is_object_like,
    is_plain_object,
};
pub use primitives::{
    is_array, is_boolean, is_date, is_function, is_not_array, is_not_boolean, is_not_date,
    is_not_function, is_not_null, is_not_number, is_not_string, is_not_undefined, is_null,
    is_number, is_string, is_undefined,
};
