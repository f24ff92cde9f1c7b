//! The Functor capability: mapping over a contained value.

use super::higher::TypeConstructor;

/// A container whose inner value can be transformed in place.
///
/// # Laws
///
/// ```text
/// fa.map(|x| x)            == fa                    (identity)
/// fa.map(f).map(g)         == fa.map(|x| g(f(x)))   (composition)
/// ```
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::Functor;
///
/// let doubled = Functor::map(Some(21), |n: i32| n * 2);
/// assert_eq!(doubled, Some(42));
///
/// let failed: Result<i32, String> = Err(String::from("no value"));
/// assert_eq!(Functor::map(failed, |n| n * 2), Err(String::from("no value")));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the inner value, preserving the container
    /// shape.
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Option::map(self, function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        Result::map(self, function)
    }
}
