//! # adjunct
//!
//! Runtime value predicates and point-free combinators over a dynamic
//! value model.
//!
//! ## Overview
//!
//! This library augments a functional toolkit with two independent groups:
//!
//! - **Predicates**: pure, total classifiers over [`value::Value`]: is this
//!   an array? a plain object? a finite number? a generator function? Every
//!   positive predicate ships with an `is_not_*` complement, and every
//!   classification dispatches on the value's intrinsic type tag so it stays
//!   correct for values that crossed an execution-realm boundary.
//! - **Combinators**: higher-order operations: lifting n-ary functions over
//!   [`combinator::Apply`]-capable containers, catamorphism dispatch on
//!   two-branch disjunctions, key renaming, multi-path extraction,
//!   defaulting, index picking; all usable partially applied through the
//!   [`curry2!`]/[`curry3!`] utilities.
//!
//! ## Feature Flags
//!
//! - `predicate`: the predicate engine
//! - `combinator`: capability traits and combinators
//!
//! Both are enabled by default. The value model and error type are always
//! available.
//!
//! ## Example
//!
//! ```rust
//! use adjunct::prelude::*;
//! use adjunct::object;
//!
//! let user = object! { "name" => "ada", "tags" => Value::Array(vec![]) };
//!
//! assert!(is_plain_object(&Value::from(user.clone())));
//! assert!(is_nil_or_empty(user.get("tags").unwrap()));
//!
//! let renamed = rename_keys_with(str::to_uppercase, &user);
//! assert!(renamed.contains_key("NAME"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model and, per enabled feature, the predicate and
/// combinator surfaces.
///
/// # Usage
///
/// ```rust
/// use adjunct::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::TypeError;
    pub use crate::value::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

pub mod error;

pub mod value;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "combinator")]
pub mod combinator;
