//! Outcome type - the result of a fallible computation.
//!
//! `Outcome<E, A>` is in exactly one of two states: `Failure(E)` carrying an
//! error payload or `Success(A)` carrying a value. Every combinator consumes
//! the receiver and returns a new `Outcome`; nothing is mutated in place.
//!
//! Chains built from [`map`](Outcome::map) and [`flat_map`](Outcome::flat_map)
//! short-circuit at the first failure and carry exactly that failure to the
//! end unless it is explicitly recovered with [`or_else`](Outcome::or_else)
//! or [`alt`](Outcome::alt).
//!
//! # Examples
//!
//! ```rust
//! use fp_lessons::control::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! enum ParseError {
//!     Empty,
//!     NotANumber,
//! }
//!
//! fn non_empty(text: &str) -> Outcome<ParseError, &str> {
//!     Outcome::from_predicate(text, |text| !text.is_empty(), |_| ParseError::Empty)
//! }
//!
//! fn number(text: &str) -> Outcome<ParseError, i32> {
//!     Outcome::try_catch_result(|| text.parse(), |_| ParseError::NotANumber)
//! }
//!
//! assert_eq!(non_empty("21").flat_map(number).map(|n| n * 2), Outcome::Success(42));
//! assert_eq!(non_empty("").flat_map(number), Outcome::Failure(ParseError::Empty));
//! assert_eq!(non_empty("x").flat_map(number), Outcome::Failure(ParseError::NotANumber));
//! ```
//!
//! # Widening
//!
//! Steps of one chain often fail with different error types. The `_widen`
//! combinators lift every error into a caller-declared sum type through
//! [`Into`], so the chain's error type is the union of all the errors its
//! steps can produce:
//!
//! ```rust
//! use fp_lessons::control::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! struct Decode;
//! #[derive(Debug, PartialEq)]
//! struct Parse;
//!
//! #[derive(Debug, PartialEq)]
//! enum DecodeOrParse {
//!     Decode(Decode),
//!     Parse(Parse),
//! }
//! impl From<Decode> for DecodeOrParse {
//!     fn from(error: Decode) -> Self { Self::Decode(error) }
//! }
//! impl From<Parse> for DecodeOrParse {
//!     fn from(error: Parse) -> Self { Self::Parse(error) }
//! }
//!
//! let decoded: Outcome<Decode, &str> = Outcome::success("oops");
//! let parsed: Outcome<DecodeOrParse, i32> =
//!     decoded.flat_map_widen(|text| {
//!         Outcome::<Parse, i32>::try_catch_result(|| text.parse(), |_| Parse)
//!     });
//! assert_eq!(parsed, Outcome::Failure(DecodeOrParse::Parse(Parse)));
//! ```

use super::either::Either;
use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a `Failure` carrying an error or a `Success`
/// carrying a value.
///
/// # Type Parameters
///
/// * `E` - The type of the error payload
/// * `A` - The type of the success payload
///
/// # Examples
///
/// ```rust
/// use fp_lessons::control::Outcome;
///
/// let paid: Outcome<String, u64> = Outcome::success(20);
/// let message = paid.fold(
///     |error| error,
///     |balance| format!("Success. Remaining balance {balance}"),
/// );
/// assert_eq!(message, "Success. Remaining balance 20");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<E, A> {
    /// The failed state, holding the error payload.
    Failure(E),
    /// The successful state, holding the value payload.
    Success(A),
}

impl<E, A> Outcome<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Constructs the `Success` variant.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Constructs the `Failure` variant.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Lifts `value` into `Success` if `predicate` holds, otherwise into
    /// `Failure` with the error `on_false` builds from the original input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// let even = |n: i32| Outcome::from_predicate(n, |n| n % 2 == 0, |n| format!("{n} is odd"));
    /// assert_eq!(even(4), Outcome::Success(4));
    /// assert_eq!(even(5), Outcome::Failure("5 is odd".to_string()));
    /// ```
    #[inline]
    pub fn from_predicate<P, G>(value: A, predicate: P, on_false: G) -> Self
    where
        P: FnOnce(&A) -> bool,
        G: FnOnce(A) -> E,
    {
        if predicate(&value) {
            Self::Success(value)
        } else {
            Self::Failure(on_false(value))
        }
    }

    /// Curried form of [`from_predicate`](Self::from_predicate), reusable as
    /// a step of a [`flow!`](crate::flow!) or [`pipe!`](crate::pipe!).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// let positive = Outcome::lift_predicate(|n: &i32| *n > 0, |n| format!("{n} <= 0"));
    /// assert_eq!(positive(3), Outcome::Success(3));
    /// assert_eq!(positive(-1), Outcome::Failure("-1 <= 0".to_string()));
    /// ```
    #[inline]
    pub fn lift_predicate<P, G>(predicate: P, on_false: G) -> impl Fn(A) -> Self
    where
        P: Fn(&A) -> bool,
        G: Fn(A) -> E,
    {
        move |value| {
            if predicate(&value) {
                Self::Success(value)
            } else {
                Self::Failure(on_false(value))
            }
        }
    }

    /// Lifts `value` into `Success` of a *narrower* type.
    ///
    /// `refine` either hands back the narrowed payload (`Ok`) or returns the
    /// original input untouched (`Err`), which `on_false` turns into the
    /// error. Downstream steps receive the narrowed type and never need to
    /// re-check the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Circle { radius: f64 }
    /// #[derive(Debug, PartialEq)]
    /// enum Shape { Circle(Circle), Square { side: f64 } }
    ///
    /// let as_circle = |shape: Shape| {
    ///     Outcome::from_refinement(
    ///         shape,
    ///         |shape| match shape {
    ///             Shape::Circle(circle) => Ok(circle),
    ///             other => Err(other),
    ///         },
    ///         |other| format!("{other:?} is not a circle"),
    ///     )
    /// };
    ///
    /// // The success payload is a `Circle`, not a `Shape`.
    /// let radius = as_circle(Shape::Circle(Circle { radius: 1.0 })).map(|circle| circle.radius);
    /// assert_eq!(radius, Outcome::Success(1.0));
    /// assert!(as_circle(Shape::Square { side: 2.0 }).is_failure());
    /// ```
    #[inline]
    pub fn from_refinement<S, R, G>(value: S, refine: R, on_false: G) -> Self
    where
        R: FnOnce(S) -> Result<A, S>,
        G: FnOnce(S) -> E,
    {
        match refine(value) {
            Ok(narrowed) => Self::Success(narrowed),
            Err(original) => Self::Failure(on_false(original)),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the success payload, if any.
    #[inline]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error payload, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Converts `&Outcome<E, A>` into `Outcome<&E, &A>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Converts into `Option<A>`, discarding any error.
    #[inline]
    pub fn into_success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding any value.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Converts into a [`Maybe`], discarding any error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Empty,
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to the success payload. A `Failure` passes through
    /// and `function` is never called.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }

    /// Applies `function` to the error payload. A `Success` passes through.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(function(error)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Maps both sides at once.
    #[inline]
    pub fn bimap<E2, B, F, G>(self, on_failure: F, on_success: G) -> Outcome<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
            Self::Success(value) => Outcome::Success(on_success(value)),
        }
    }

    /// Lifts the error into a wider error type.
    ///
    /// Equivalent to `map_error(Into::into)`.
    #[inline]
    pub fn widen<W>(self) -> Outcome<W, A>
    where
        E: Into<W>,
    {
        self.map_error(Into::into)
    }

    /// Swaps the two variants.
    #[inline]
    pub fn swap(self) -> Outcome<A, E> {
        match self {
            Self::Failure(error) => Outcome::Success(error),
            Self::Success(value) => Outcome::Failure(value),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Replaces a `Success` with the outcome produced by `function`.
    ///
    /// A `Failure` short-circuits: `function` is not called and the original
    /// failure is returned unchanged.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => function(value),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        self.flat_map(function)
    }

    /// [`flat_map`](Self::flat_map) whose step may fail with a different
    /// error type. Both the receiver's and the step's errors are widened
    /// into `W`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// let base: Outcome<u8, i32> = Outcome::success(1);
    /// let next: Outcome<u16, i32> = base.flat_map_widen(|_| Outcome::<u16, i32>::failure(300));
    /// assert_eq!(next, Outcome::Failure(300_u16));
    /// ```
    #[inline]
    pub fn flat_map_widen<W, E2, B, F>(self, function: F) -> Outcome<W, B>
    where
        F: FnOnce(A) -> Outcome<E2, B>,
        E: Into<W>,
        E2: Into<W>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error.into()),
            Self::Success(value) => function(value).widen(),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Attempts a fallback computation seeded with the error.
    ///
    /// A `Success` passes through and `function` is never called. The
    /// fallback decides, from the error, whether to recover or to fail again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// let retried: Outcome<&str, i32> = Outcome::<&str, i32>::failure("retry")
    ///     .or_else(|error| {
    ///         if error == "retry" {
    ///             Outcome::success(1)
    ///         } else {
    ///             Outcome::failure(error)
    ///         }
    ///     });
    /// assert_eq!(retried, Outcome::Success(1));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, function: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> Outcome<E2, A>,
    {
        match self {
            Self::Failure(error) => function(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// [`or_else`](Self::or_else) whose fallback may succeed with a
    /// different value type. Both value types are widened into `V`.
    #[inline]
    pub fn or_else_widen<E2, B, V, F>(self, function: F) -> Outcome<E2, V>
    where
        F: FnOnce(E) -> Outcome<E2, B>,
        A: Into<V>,
        B: Into<V>,
    {
        match self {
            Self::Failure(error) => function(error).map(Into::into),
            Self::Success(value) => Outcome::Success(value.into()),
        }
    }

    /// Discards the error of a `Failure` and substitutes `fallback()`.
    ///
    /// Unlike [`or_else`](Self::or_else), the fallback does not see why the
    /// first computation failed. A `Success` passes through and `fallback`
    /// is never called.
    #[inline]
    pub fn alt<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Failure(_) => fallback(),
            success @ Self::Success(_) => success,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Unwraps the success payload, or computes a default of the same type
    /// from the error.
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Failure(error) => function(error),
            Self::Success(value) => value,
        }
    }

    /// Unwraps the success payload, or computes a default of a *different*
    /// type. The result is the union of both: `Right` for the payload,
    /// `Left` for the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::{Either, Outcome};
    ///
    /// let missing: Outcome<(), f64> = Outcome::failure(());
    /// assert_eq!(missing.get_or_else_widen(|()| "string"), Either::Left("string"));
    /// ```
    #[inline]
    pub fn get_or_else_widen<B, F>(self, function: F) -> Either<B, A>
    where
        F: FnOnce(E) -> B,
    {
        match self {
            Self::Failure(error) => Either::Left(function(error)),
            Self::Success(value) => Either::Right(value),
        }
    }

    /// Folds both branches into a common result type.
    ///
    /// This is the `match` of the outcome vocabulary: presentation code
    /// goes through `fold` rather than inspecting the variant directly.
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(A) -> R,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Calls `function` with a reference to the success payload and returns
    /// the outcome unchanged.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the error payload and returns
    /// the outcome unchanged.
    #[inline]
    pub fn inspect_error<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }
}

impl<E, A> Outcome<E, Outcome<E, A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<E, A> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    /// `Ok(a)` becomes `Success(a)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        match outcome {
            Outcome::Failure(error) => Err(error),
            Outcome::Success(value) => Ok(value),
        }
    }
}

impl<E, A, C> FromIterator<Outcome<E, A>> for Outcome<E, C>
where
    C: FromIterator<A>,
{
    /// Collects successes; stops at, and returns, the first failure.
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// let all: Outcome<&str, Vec<i32>> =
    ///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
    /// assert_eq!(all, Outcome::Success(vec![1, 2]));
    ///
    /// let first_failure: Outcome<&str, Vec<i32>> =
    ///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
    ///         .into_iter()
    ///         .collect();
    /// assert_eq!(first_failure, Outcome::Failure("a"));
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<E, A>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Result::from)
            .collect::<Result<C, E>>()
            .into()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Outcome<E, A> {
    type Inner = A;
    type WithType<B> = Outcome<E, B>;
}

impl<E: Clone, A> Functor for Outcome<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error.clone()),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }
}

impl<E: Clone, A> Applicative for Outcome<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        function: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}

impl<E: Clone, A> Monad for Outcome<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Outcome<String, i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn success_and_failure_are_disjoint() {
        let success: Outcome<String, i32> = Outcome::success(1);
        let failure: Outcome<String, i32> = Outcome::failure("e".to_string());
        assert!(success.is_success() && !success.is_failure());
        assert!(failure.is_failure() && !failure.is_success());
    }

    #[rstest]
    fn map_never_calls_function_on_failure() {
        let calls = Cell::new(0);
        let failure: Outcome<&str, i32> = Outcome::failure("e");
        let mapped = failure.map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(mapped, Outcome::Failure("e"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn or_else_never_calls_function_on_success() {
        let calls = Cell::new(0);
        let success: Outcome<&str, i32> = Outcome::success(3);
        let recovered = success.or_else(|_| {
            calls.set(calls.get() + 1);
            Outcome::<(), i32>::success(0)
        });
        assert_eq!(recovered, Outcome::Success(3));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn alt_ignores_error_content() {
        let failure: Outcome<&str, i32> = Outcome::failure("whatever");
        assert_eq!(failure.alt(|| Outcome::success(9)), Outcome::Success(9));
    }

    #[rstest]
    #[case(Outcome::success(2), 2)]
    #[case(Outcome::failure("e"), 0)]
    fn get_or_else_returns_payload_or_default(
        #[case] outcome: Outcome<&str, i32>,
        #[case] expected: i32,
    ) {
        assert_eq!(outcome.get_or_else(|_| 0), expected);
    }

    #[rstest]
    fn flatten_removes_one_level() {
        let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::success(Outcome::failure("inner"));
        assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<String, i32> = ok.into();
        assert_eq!(outcome, Outcome::Success(42));
        let back: Result<i32, String> = outcome.into();
        assert_eq!(back, Ok(42));
    }

    #[rstest]
    fn inspect_error_sees_the_error_only() {
        let seen = Cell::new(false);
        let failure: Outcome<i32, i32> = Outcome::failure(1);
        let unchanged = failure
            .inspect(|_| panic!("success tap on a failure"))
            .inspect_error(|_| seen.set(true));
        assert_eq!(unchanged, Outcome::Failure(1));
        assert!(seen.get());
    }

    #[rstest]
    fn map2_reports_first_failure() {
        let first: Outcome<&str, i32> = Outcome::failure("first");
        let second: Outcome<&str, i32> = Outcome::failure("second");
        assert_eq!(first.map2(second, |a, b| a + b), Outcome::Failure("first"));
    }
}
