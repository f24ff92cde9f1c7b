//! Function values: the classification-relevant surface of a host function.
//!
//! Plain, generator, and async functions all belong to the same "function"
//! primitive family but carry distinct intrinsic tags. The model keeps the
//! tag (and the declared name), which is everything the predicate engine
//! needs; behaviour is out of scope.

/// The intrinsic subtype tag of a function value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// An ordinary function.
    Plain,
    /// A generator function.
    Generator,
    /// An async function.
    Async,
}

/// A host function, reduced to its tag and name.
///
/// # Examples
///
/// ```rust
/// use adjunct::value::{FunctionKind, FunctionValue};
///
/// let pump = FunctionValue::generator("pump");
/// assert_eq!(pump.kind(), FunctionKind::Generator);
/// assert_eq!(pump.name(), "pump");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionValue {
    kind: FunctionKind,
    name: String,
}

impl FunctionValue {
    /// A function value with the given subtype tag and name.
    pub fn new(kind: FunctionKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }

    /// An ordinary function.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(FunctionKind::Plain, name)
    }

    /// A generator function.
    pub fn generator(name: impl Into<String>) -> Self {
        Self::new(FunctionKind::Generator, name)
    }

    /// An async function.
    pub fn async_function(name: impl Into<String>) -> Self {
        Self::new(FunctionKind::Async, name)
    }

    /// The function's subtype tag.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// The function's declared name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
