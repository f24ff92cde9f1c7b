//! Function-subtype predicates.
//!
//! Plain, generator, and async functions share the function primitive
//! family but carry distinct intrinsic tags; these predicates dispatch on
//! that tag, not on anything about the call signature.

use super::complement;
use crate::value::{TypeTag, Value};

/// Checks whether the value is a generator function.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_generator_function;
/// use adjunct::value::{FunctionValue, Value};
///
/// assert!(is_generator_function(&Value::Function(FunctionValue::generator("walk"))));
/// assert!(!is_generator_function(&Value::Function(FunctionValue::plain("run"))));
/// ```
#[inline]
#[must_use]
pub fn is_generator_function(value: &Value) -> bool {
    value.type_tag() == TypeTag::GeneratorFunction
}

/// Checks whether the value is an async function.
///
/// # Examples
///
/// ```rust
/// use adjunct::predicate::is_async_function;
/// use adjunct::value::{FunctionValue, Value};
///
/// assert!(is_async_function(&Value::Function(FunctionValue::async_function("load"))));
/// assert!(!is_async_function(&Value::Function(FunctionValue::plain("run"))));
/// ```
#[inline]
#[must_use]
pub fn is_async_function(value: &Value) -> bool {
    value.type_tag() == TypeTag::AsyncFunction
}

complement!(generator_function, async_function);
