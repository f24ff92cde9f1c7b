//! The Catamorphism capability: collapsing a two-branch disjunction.

/// A disjunction that can be collapsed by running exactly one of two
/// handlers.
///
/// Which handler fires is the disjunction's own decision; callers supply
/// both and get back a single value of the common result type.
///
/// The std bridges treat the conventional failure side as left:
///
/// - `Result<T, E>`: `Err` is left, `Ok` is right.
/// - `Option<A>`: `None` is left (handled with a unit argument), `Some` is
///   right.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::Catamorphism;
///
/// let parsed: Result<i32, String> = Ok(7);
/// let described = parsed.cata(|error| format!("failed: {error}"), |n| format!("got {n}"));
/// assert_eq!(described, "got 7");
/// ```
pub trait Catamorphism {
    /// The payload of the left branch.
    type Left;
    /// The payload of the right branch.
    type Right;

    /// Collapses the disjunction, running the handler for whichever branch
    /// is inhabited.
    fn cata<T, L, R>(self, left_function: L, right_function: R) -> T
    where
        L: FnOnce(Self::Left) -> T,
        R: FnOnce(Self::Right) -> T;
}

impl<A> Catamorphism for Option<A> {
    type Left = ();
    type Right = A;

    #[inline]
    fn cata<T, L, R>(self, left_function: L, right_function: R) -> T
    where
        L: FnOnce(()) -> T,
        R: FnOnce(A) -> T,
    {
        match self {
            None => left_function(()),
            Some(value) => right_function(value),
        }
    }
}

impl<T2, E> Catamorphism for Result<T2, E> {
    type Left = E;
    type Right = T2;

    #[inline]
    fn cata<T, L, R>(self, left_function: L, right_function: R) -> T
    where
        L: FnOnce(E) -> T,
        R: FnOnce(T2) -> T,
    {
        match self {
            Err(error) => left_function(error),
            Ok(value) => right_function(value),
        }
    }
}
