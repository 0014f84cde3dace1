//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))        (homomorphism)
//! fa.map2(pure(()), |a, _| a) == fa                 (right identity)
//! ```
//!
//! `map2` keeps the short-circuit semantics of the container: the first
//! failure (in argument order) wins.

use super::functor::Functor;

/// A type class for functors that can lift plain values and combine two or
/// three independent containers.
///
/// # Examples
///
/// ```rust
/// use fp_lessons::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two applicative values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_map2_short_circuits_on_none() {
        assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    }

    #[rstest]
    fn option_map3_combines_all_present_values() {
        assert_eq!(Some(1).map3(Some(2), Some(3), |a, b, c| a + b + c), Some(6));
        assert_eq!(Some(1).map3(None::<i32>, Some(3), |a, b, c| a + b + c), None);
    }

    #[rstest]
    fn option_product_pairs_values() {
        assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
    }
}
