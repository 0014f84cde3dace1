//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. The value flows
/// through the steps in the order they are written, which is how the
/// fallible pipelines in this crate are usually read: each step receives
/// the previous step's [`Outcome`](crate::control::Outcome) or
/// [`Maybe`](crate::control::Maybe).
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`].
///
/// # Examples
///
/// ```
/// use fp_lessons::pipe;
///
/// let trim = |text: &'static str| text.trim();
/// let size = |text: &str| text.len();
/// let at_least_three = |length: usize| length >= 3;
///
/// assert!(!pipe!(" hi ", trim, size, at_least_three));
/// ```
///
/// ## Piping through fallible steps
///
/// ```
/// use fp_lessons::control::Outcome;
/// use fp_lessons::pipe;
///
/// fn positive(number: i32) -> Outcome<&'static str, i32> {
///     if number > 0 { Outcome::success(number) } else { Outcome::failure("not positive") }
/// }
///
/// let result = pipe!(-4, positive, |outcome: Outcome<_, i32>| outcome.map(|n| n * 2));
/// assert_eq!(result, Outcome::Failure("not positive"));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
