//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition, and the
/// function used to state the functor identity law:
/// `outcome.map(identity) == outcome`.
///
/// # Examples
///
/// ```
/// use fp_lessons::compose::identity;
/// use fp_lessons::control::Outcome;
///
/// let outcome: Outcome<String, i32> = Outcome::success(7);
/// assert_eq!(outcome.clone().map(identity), outcome);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Handy as a fallback for [`Outcome::get_or_else`](crate::control::Outcome::get_or_else),
/// whose default function receives the error.
///
/// # Examples
///
/// ```
/// use fp_lessons::compose::constant;
/// use fp_lessons::control::Outcome;
///
/// let outcome: Outcome<&str, i32> = Outcome::failure("boom");
/// assert_eq!(outcome.get_or_else(constant(0)), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fp_lessons::compose::flip;
///
/// let concat = |first: &str, second: &str| format!("{first}{second}");
/// let flipped = flip(concat);
///
/// assert_eq!(flipped("world", "hello "), "hello world");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
