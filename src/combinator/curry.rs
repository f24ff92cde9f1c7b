//! Arity-aware partial application.
//!
//! Every multi-argument combinator in this crate supports partial
//! application through these macros: calling the curried form with a prefix
//! of the arguments returns a function over the remainder, in the original
//! order. Each level captures its argument immutably and clones it on
//! dispatch, so every partial application is an independent closure:
//! reusable, shareable across call sites, and incapable of interfering with
//! any other partial application of the same function.
//!
//! The function and all bound arguments must implement `Clone` (function
//! items, function pointers, and closures over `Clone` captures all do).

/// Converts a 2-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use adjunct::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// assert_eq!(curried(5)(3), 8);
///
/// // Partial applications are independent and reusable.
/// let add_five = curried(5);
/// assert_eq!(add_five(1), 6);
/// assert_eq!(add_five(2), 7);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = ::std::clone::Clone::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use adjunct::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let curried = curry3!(clamp);
/// let percent = curried(0)(100);
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-20), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = ::std::clone::Clone::clone(&function);
            move |second| {
                let function = ::std::clone::Clone::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}
