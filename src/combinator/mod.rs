//! The combinator layer: arity-aware, partially-applicable higher-order
//! operations.
//!
//! Two kinds of operation live here:
//!
//! - **Capability combinators** consume boxed values polymorphically
//!   through the [`Functor`]/[`Apply`]/[`Catamorphism`] traits:
//!   [`lift_f2`]/[`lift_f3`] (and the arity-inferring
//!   [`lift_f!`](crate::lift_f)) sequence an n-ary function through
//!   Apply-capable containers; [`cata`] collapses a disjunction through its
//!   own catamorphism.
//! - **Data combinators** transform dynamic values:
//!   [`rename_keys`]/[`rename_keys_with`], [`paths`],
//!   [`defaults`]/[`reset_to_default`], [`pick_indexes`],
//!   [`list!`](crate::list), and the stubs
//!   [`noop`]/[`stub_null`]/[`stub_undefined`].
//!
//! Every multi-argument combinator is an ordinary function, so the
//! [`curry2!`](crate::curry2)/[`curry3!`](crate::curry3) utilities give the
//! partially-applied forms: a prefix of the arguments returns a function
//! over the remainder in the original order, and each partial application
//! is an independent, reusable closure.
//!
//! None of these operations mutate their inputs, perform I/O, or keep
//! state; this module does not depend on the predicate engine.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::combinator::{cata, defaults, paths};
//! use adjunct::value::Value;
//! use adjunct::{object, path};
//!
//! let config = defaults(&object! { "retries" => 3 }, &object! { "host" => "local" });
//! let tree = Value::from(config);
//!
//! let resolved = paths(&[path!["retries"], path!["missing"]], &tree);
//! assert_eq!(resolved, [Value::from(3), Value::Undefined]);
//!
//! let parsed: Result<i32, String> = "7".parse().map_err(|_| String::from("not a number"));
//! assert_eq!(cata(|_| 0, |n| n, parsed), 7);
//! ```

mod capability;
mod cata;
mod curry;
mod defaults;
mod keys;
mod lift;
mod paths;
mod sequence;
mod stubs;

pub use capability::{Apply, Catamorphism, Functor, TypeConstructor};
pub use cata::cata;
pub use defaults::{defaults, reset_to_default};
pub use keys::{rename_keys, rename_keys_with, KeyMap};
pub use lift::{lift_f2, lift_f3, Partial};
pub use paths::{paths, Path, PathSegment};
pub use sequence::pick_indexes;
pub use stubs::{noop, stub_null, stub_undefined};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
pub use crate::lift_f;
pub use crate::list;
pub use crate::path;
