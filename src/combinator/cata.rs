//! Catamorphism dispatch as a free, curryable function.

use super::capability::Catamorphism;

/// Collapses a two-branch disjunction by running exactly one of two
/// handlers.
///
/// This is point-free access to the disjunction's own
/// [`Catamorphism::cata`]: whichever branch the value carries selects the
/// handler, and the handler's result is returned directly.
///
/// # Currying
///
/// `cata` is an ordinary 3-argument function, so [`curry3!`](crate::curry3)
/// provides the prefix forms: one bound argument awaits
/// `(right_function, either)`, two bound arguments await `either`; same
/// function, same argument order.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::cata;
///
/// let success: Result<i32, String> = Ok(2);
/// let described = cata(
///     |error: String| format!("failed: {error}"),
///     |value: i32| format!("got {value}"),
///     success,
/// );
/// assert_eq!(described, "got 2");
/// ```
///
/// Partially applied:
///
/// ```rust
/// use adjunct::combinator::cata;
/// use adjunct::curry3;
///
/// let fallback = curry3!(cata::<Option<i32>, i32, _, _>)(|()| -1)(|value| value);
/// assert_eq!(fallback(Some(9)), 9);
/// assert_eq!(fallback(None), -1);
/// ```
pub fn cata<V, T, L, R>(left_function: L, right_function: R, either: V) -> T
where
    V: Catamorphism,
    L: FnOnce(V::Left) -> T,
    R: FnOnce(V::Right) -> T,
{
    either.cata(left_function, right_function)
}
