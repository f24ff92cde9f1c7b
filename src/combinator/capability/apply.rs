//! The Apply capability: applying a contained function to a contained value.

use super::functor::Functor;

/// A [`Functor`] that can additionally apply a function carried inside the
/// same constructor.
///
/// `value.ap(function)` applies the function inside `function` to the value
/// inside `value`. For disjunction-shaped containers the function side is
/// resolved first, so when both sides are failures the function's failure
/// wins; this is what gives the lift combinators their left-to-right
/// argument precedence.
///
/// # Laws
///
/// ```text
/// v.ap(pure(|x| x))                  == v            (identity)
/// pure(x).ap(pure(f))                == pure(f(x))   (homomorphism)
/// ```
///
/// (`pure` is whatever "wrap a value" means for the implementing
/// constructor: `Some` / `Ok` for the std bridges.)
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::Apply;
///
/// let function: Option<fn(i32) -> i32> = Some(|n| n + 1);
/// assert_eq!(Some(5).ap(function), Some(6));
///
/// let missing: Option<fn(i32) -> i32> = None;
/// assert_eq!(Some(5).ap(missing), None);
/// ```
pub trait Apply: Functor {
    /// Applies the function inside `function` to the value inside `self`.
    fn ap<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;
}

impl<A> Apply for Option<A> {
    #[inline]
    fn ap<B, F>(self, function: Option<F>) -> Option<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        match (function, self) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

impl<T, E> Apply for Result<T, E> {
    #[inline]
    fn ap<B, F>(self, function: Result<F, E>) -> Result<B, E>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        match (function, self) {
            (Ok(function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}
