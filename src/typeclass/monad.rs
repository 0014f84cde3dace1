//! Monad type class - sequencing computations with dependency.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   (left identity)
//! m.flat_map(pure) == m                                         (right identity)
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) (associativity)
//! ```
//!
//! `flat_map` is the short-circuiting step: once a failure (or absence)
//! has been produced, later functions are never called.

use super::applicative::Applicative;

/// A type class for applicatives whose next computation may depend on the
/// value produced by the previous one.
///
/// # Examples
///
/// ```rust
/// use fp_lessons::control::Maybe;
/// use fp_lessons::typeclass::Monad;
///
/// let inverse = |x: f64| if x == 0.0 { Maybe::none() } else { Maybe::some(1.0 / x) };
/// assert_eq!(Maybe::some(4.0).flat_map(inverse), Maybe::Present(0.25));
/// assert_eq!(Maybe::some(0.0).flat_map(inverse), Maybe::Empty);
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is a failure the failure propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_some_to_none() {
        let result = Some(5).flat_map(|n| if n > 10 { Some(n) } else { None });
        assert_eq!(result, None);
    }

    #[rstest]
    fn option_flat_map_none_skips_function() {
        let missing: Option<i32> = None;
        let result = missing.flat_map(|_| -> Option<i32> { panic!("must not run") });
        assert_eq!(result, None);
    }

    #[rstest]
    fn option_then_none() {
        let first: Option<i32> = None;
        assert_eq!(first.then(Some("hello")), None);
    }
}
