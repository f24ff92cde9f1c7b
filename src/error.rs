//! Error type for the dynamic value boundary.
//!
//! Predicates are total and never fail. The only fallible surface of this
//! library is the typed accessor family on [`Value`](crate::value::Value):
//! asking a value for a representation it does not have is a caller contract
//! violation and is reported as a [`TypeError`] rather than translated or
//! retried.

use thiserror::Error;

use crate::value::TypeTag;

/// A value was used through a representation it does not support.
///
/// Produced by the `as_*` accessors on [`Value`](crate::value::Value) when
/// the value's intrinsic tag does not match the requested one. This is the
/// library's "unsupported operation" error class: there is nothing to
/// recover; the caller handed the wrong kind of value across the boundary.
///
/// # Examples
///
/// ```rust
/// use adjunct::error::TypeError;
/// use adjunct::value::{TypeTag, Value};
///
/// let error = Value::Null.as_array().unwrap_err();
/// assert_eq!(
///     error,
///     TypeError::Mismatch { expected: TypeTag::Array, actual: TypeTag::Null }
/// );
/// assert_eq!(error.to_string(), "expected Array, found Null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The value's intrinsic tag differs from the one the caller asked for.
    #[error("expected {expected}, found {actual}")]
    Mismatch {
        /// The tag the accessor required.
        expected: TypeTag,
        /// The tag the value actually carries.
        actual: TypeTag,
    },
}
