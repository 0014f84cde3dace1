//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For failure-carrying containers (`Outcome::Failure`, `Maybe::Empty`,
//! `None`, `Err`) the function is never invoked and the container passes
//! through unchanged.

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use fp_lessons::control::Outcome;
/// use fp_lessons::typeclass::Functor;
///
/// let parsed: Outcome<String, i32> = Outcome::success(5);
/// assert_eq!(parsed.fmap(|n| n.to_string()), Outcome::Success("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::typeclass::Functor;
    ///
    /// let name = Some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles_present_values(
        #[case] input: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn option_fmap_ref_leaves_the_original_in_place() {
        let name = Some("dude".to_string());
        assert_eq!(name.fmap_ref(String::len), Some(4));
        assert_eq!(name.as_deref(), Some("dude"));
    }

    #[rstest]
    fn void_keeps_the_shape() {
        assert_eq!(Some(5).void(), Some(()));
        assert_eq!(None::<i32>.void(), None);
    }
}
