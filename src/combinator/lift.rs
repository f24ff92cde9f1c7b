//! Lifting n-ary functions over Apply-capable containers.
//!
//! `lift_f2(f, fa, fb)` runs `f` "inside" the container: `f` is mapped over
//! the first operand, yielding a contained partially-applied function, which
//! is then applied through each remaining operand's own [`Apply::ap`] in
//! argument order. All operands must belong to the same constructor; a
//! mixed call simply fails the trait bounds and never compiles.
//!
//! [`lift_f2`] and [`lift_f3`] take the arity in their name (use these when
//! the call shape alone would be ambiguous); the [`lift_f!`](crate::lift_f)
//! macro infers the arity from the number of operands it is given. The
//! ceiling of three mirrors how far pointwise combination usefully goes
//! before a dedicated intermediate type reads better.

use super::capability::{Apply, Functor};

/// A contained partially-applied function, produced while lifting.
///
/// The intermediate closures created by the lift combinators are boxed so
/// the chain of application steps has a nameable type.
pub type Partial<A, B> = Box<dyn FnOnce(A) -> B>;

/// Lifts a binary function over two Apply-capable containers.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::lift_f2;
///
/// let sum = lift_f2(|a: i32, b: i32| a + b, Some(1), Some(2));
/// assert_eq!(sum, Some(3));
///
/// let missing = lift_f2(|a: i32, b: i32| a + b, Some(1), None);
/// assert_eq!(missing, None);
/// ```
pub fn lift_f2<FA, B, C, F>(function: F, first: FA, second: FA::WithType<B>) -> FA::WithType<C>
where
    FA: Functor,
    FA::Inner: 'static,
    B: 'static,
    C: 'static,
    F: FnOnce(FA::Inner, B) -> C + 'static,
    FA::WithType<B>: Apply<
            Inner = B,
            WithType<C> = FA::WithType<C>,
            WithType<Partial<B, C>> = FA::WithType<Partial<B, C>>,
        >,
{
    let partially_applied: FA::WithType<Partial<B, C>> = first.map(move |first_value| {
        Box::new(move |second_value| function(first_value, second_value)) as Partial<B, C>
    });
    second.ap::<C, Partial<B, C>>(partially_applied)
}

/// Lifts a ternary function over three Apply-capable containers.
///
/// # Examples
///
/// ```rust
/// use adjunct::combinator::lift_f3;
///
/// let volume = lift_f3(|a: i32, b: i32, c: i32| a * b * c, Some(2), Some(3), Some(4));
/// assert_eq!(volume, Some(24));
/// ```
pub fn lift_f3<FA, B, C, D, F>(
    function: F,
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
) -> FA::WithType<D>
where
    FA: Functor,
    FA::Inner: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    F: FnOnce(FA::Inner, B, C) -> D + 'static,
    FA::WithType<B>: Apply<
            Inner = B,
            WithType<Partial<C, D>> = FA::WithType<Partial<C, D>>,
            WithType<Partial<B, Partial<C, D>>> = FA::WithType<Partial<B, Partial<C, D>>>,
        >,
    FA::WithType<C>: Apply<
            Inner = C,
            WithType<D> = FA::WithType<D>,
            WithType<Partial<C, D>> = FA::WithType<Partial<C, D>>,
        >,
{
    let curried: FA::WithType<Partial<B, Partial<C, D>>> = first.map(move |first_value| {
        Box::new(move |second_value| {
            Box::new(move |third_value| function(first_value, second_value, third_value))
                as Partial<C, D>
        }) as Partial<B, Partial<C, D>>
    });
    let partially_applied: FA::WithType<Partial<C, D>> =
        second.ap::<Partial<C, D>, Partial<B, Partial<C, D>>>(curried);
    third.ap::<D, Partial<C, D>>(partially_applied)
}

/// Lifts a function over Apply-capable containers, inferring the arity from
/// the number of operands.
///
/// `lift_f!(f, fa, fb)` is [`lift_f2`]; `lift_f!(f, fa, fb, fc)` is
/// [`lift_f3`].
///
/// # Examples
///
/// ```rust
/// use adjunct::lift_f;
///
/// let sum = lift_f!(|a: i32, b: i32| a + b, Ok::<_, String>(1), Ok(2));
/// assert_eq!(sum, Ok(3));
///
/// let product = lift_f!(|a: i32, b: i32, c: i32| a * b * c, Some(2), Some(3), Some(4));
/// assert_eq!(product, Some(24));
/// ```
#[macro_export]
macro_rules! lift_f {
    ($function:expr, $first:expr, $second:expr $(,)?) => {
        $crate::combinator::lift_f2($function, $first, $second)
    };
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {
        $crate::combinator::lift_f3($function, $first, $second, $third)
    };
}
