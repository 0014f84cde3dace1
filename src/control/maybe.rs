//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Empty` or `Present(A)`. It shares the mapping,
//! chaining and folding vocabulary of [`Outcome`] without an error payload.
//!
//! # Examples
//!
//! ```rust
//! use fp_lessons::control::Maybe;
//!
//! fn inverse(x: f64) -> Maybe<f64> {
//!     if x == 0.0 { Maybe::none() } else { Maybe::some(1.0 / x) }
//! }
//!
//! let message = |x: f64| {
//!     inverse(x).fold(
//!         || format!("Cannot get the inverse of {x}."),
//!         |ix| format!("The inverse of {x} is {ix}"),
//!     )
//! };
//!
//! assert_eq!(message(0.0), "Cannot get the inverse of 0.");
//! assert_eq!(message(2.0), "The inverse of 2 is 0.5");
//! ```

use super::either::Either;
use super::outcome::Outcome;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: `Empty` or `Present(A)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    Empty,
    /// A value is present.
    Present(A),
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> Maybe<A> {
    /// Constructs `Present(value)`.
    #[inline]
    pub const fn some(value: A) -> Self {
        Self::Present(value)
    }

    /// Constructs `Empty`.
    #[inline]
    pub const fn none() -> Self {
        Self::Empty
    }

    /// Lifts a nullable value: `Some(a)` becomes `Present(a)`, `None`
    /// becomes `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(3)), Maybe::Present(3));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::Empty);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        value.map_or(Self::Empty, Self::Present)
    }

    /// `Present(value)` if `predicate` holds, `Empty` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Maybe;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    /// assert_eq!(Maybe::from_predicate(4, is_even), Maybe::Present(4));
    /// assert_eq!(Maybe::from_predicate(5, is_even), Maybe::Empty);
    /// ```
    #[inline]
    pub fn from_predicate<P>(value: A, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&value) {
            Self::Present(value)
        } else {
            Self::Empty
        }
    }

    /// Curried form of [`from_predicate`](Self::from_predicate).
    #[inline]
    pub fn lift_predicate<P>(predicate: P) -> impl Fn(A) -> Self
    where
        P: Fn(&A) -> bool,
    {
        move |value| Self::from_predicate(value, &predicate)
    }

    /// `Present` of a narrower type when `refine` accepts the input.
    ///
    /// The payload is statically the narrowed type, so callers never
    /// re-check the variant downstream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Maybe;
    ///
    /// struct Circle { radius: f64 }
    /// enum Shape { Circle(Circle), Square { side: f64 } }
    ///
    /// let circle_of = |shape: Shape| {
    ///     Maybe::from_refinement(shape, |shape| match shape {
    ///         Shape::Circle(circle) => Some(circle),
    ///         Shape::Square { .. } => None,
    ///     })
    /// };
    ///
    /// let circle = circle_of(Shape::Circle(Circle { radius: 1.0 }));
    /// assert_eq!(circle.map(|c| c.radius), Maybe::Present(1.0));
    /// assert!(circle_of(Shape::Square { side: 2.0 }).is_empty());
    /// ```
    #[inline]
    pub fn from_refinement<S, R>(value: S, refine: R) -> Self
    where
        R: FnOnce(S) -> Option<A>,
    {
        Self::from_nullable(refine(value))
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Converts `&Maybe<A>` into `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Empty => Maybe::Empty,
            Self::Present(value) => Maybe::Present(value),
        }
    }

    /// Applies `function` to a present value; `Empty` passes through.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Empty => Maybe::Empty,
            Self::Present(value) => Maybe::Present(function(value)),
        }
    }

    /// Replaces a present value with the `Maybe` produced by `function`.
    /// `Empty` short-circuits and `function` is never called.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Empty => Maybe::Empty,
            Self::Present(value) => function(value),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.flat_map(function)
    }

    /// Keeps a present value only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Empty,
        }
    }

    /// Substitutes `fallback()` when empty. A present value passes through
    /// and `fallback` is never called.
    #[inline]
    pub fn alt<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Empty => fallback(),
            present @ Self::Present(_) => present,
        }
    }

    /// Unwraps the value or computes a default of the same type.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Empty => default(),
            Self::Present(value) => value,
        }
    }

    /// Unwraps the value or computes a default of a different type; the
    /// result is `Right(value)` or `Left(default)`.
    #[inline]
    pub fn get_or_else_widen<B, F>(self, default: F) -> Either<B, A>
    where
        F: FnOnce() -> B,
    {
        match self {
            Self::Empty => Either::Left(default()),
            Self::Present(value) => Either::Right(value),
        }
    }

    /// Folds both branches into a common result type.
    #[inline]
    pub fn fold<R, F, G>(self, on_empty: F, on_present: G) -> R
    where
        F: FnOnce() -> R,
        G: FnOnce(A) -> R,
    {
        match self {
            Self::Empty => on_empty(),
            Self::Present(value) => on_present(value),
        }
    }

    /// Turns absence into a failure built by `on_empty`.
    #[inline]
    pub fn to_outcome<E, F>(self, on_empty: F) -> Outcome<E, A>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Empty => Outcome::Failure(on_empty()),
            Self::Present(value) => Outcome::Success(value),
        }
    }

    /// Calls `function` with a reference to a present value and returns
    /// `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Present(value) = &self {
            function(value);
        }
        self
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Empty => None,
            Self::Present(value) => Some(value),
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Empty,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Empty,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4, Maybe::Present(4))]
    #[case(5, Maybe::Empty)]
    fn from_predicate_keeps_even_numbers(#[case] input: i32, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::from_predicate(input, |n| n % 2 == 0), expected);
    }

    #[rstest]
    fn chain_short_circuits_on_empty() {
        let empty: Maybe<i32> = Maybe::none();
        let chained = empty.chain(|_| -> Maybe<i32> { panic!("must not run") });
        assert_eq!(chained, Maybe::Empty);
    }

    #[rstest]
    fn alt_is_not_called_when_present() {
        let present = Maybe::some("award");
        assert_eq!(present.alt(|| panic!("must not run")), Maybe::Present("award"));
    }

    #[rstest]
    fn get_or_else_widen_returns_the_union() {
        assert_eq!(Maybe::some(0.5).get_or_else_widen(|| "string"), Either::Right(0.5));
        assert_eq!(Maybe::<f64>::none().get_or_else_widen(|| "string"), Either::Left("string"));
    }

    #[rstest]
    fn filter_drops_rejected_values() {
        assert_eq!(Maybe::some(3).filter(|n| *n > 5), Maybe::Empty);
        assert_eq!(Maybe::some(7).filter(|n| *n > 5), Maybe::Present(7));
    }

    #[rstest]
    fn to_outcome_builds_failure_from_absence() {
        let missing: Maybe<i32> = Maybe::none();
        assert_eq!(missing.to_outcome(|| "missing"), Outcome::Failure("missing"));
    }

    #[rstest]
    fn option_roundtrip() {
        let maybe: Maybe<i32> = Some(1).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(1));
    }
}
