//! Naming "the same container around another type" with a GAT.
//!
//! `Functor::fmap` and `Monad::flat_map` return the receiver's container
//! with a new payload type. [`TypeConstructor::WithType`] is how the traits
//! spell that return type.
//!
//! # Example
//!
//! ```rust
//! use fp_lessons::control::Maybe;
//! use fp_lessons::typeclass::TypeConstructor;
//!
//! fn nothing_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let empty: Maybe<String> = nothing_like(Maybe::some(42));
//! assert_eq!(empty, Maybe::Empty);
//! ```

/// A container whose payload type can be swapped.
///
/// For `Outcome<E, A>` the constructor is `Outcome<E, _>`: `Inner` is `A`
/// and `WithType<B>` is `Outcome<E, B>`. The error type stays fixed, which
/// is why widening the error is a separate operation on `Outcome` rather
/// than part of the type classes.
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` again.
pub trait TypeConstructor {
    /// The payload type.
    type Inner;

    /// The same container holding a `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_payload<T: TypeConstructor<Inner = P>, P>() {}

    #[test]
    fn option_payload_is_its_inner_type() {
        assert_payload::<Option<u8>, u8>();
    }

    #[test]
    fn with_type_round_trips_to_the_original() {
        type Text = <Option<i32> as TypeConstructor>::WithType<String>;
        type Back = <Text as TypeConstructor>::WithType<i32>;

        assert_payload::<Text, String>();
        let back: Back = Some(1);
        assert_eq!(back, Some(1_i32));
    }

    #[cfg(feature = "control")]
    #[test]
    fn outcome_keeps_its_error_type() {
        use crate::control::Outcome;

        fn assert_outcome_with_type<E, A, B>()
        where
            Outcome<E, A>: TypeConstructor<Inner = A, WithType<B> = Outcome<E, B>>,
        {
        }

        assert_outcome_with_type::<String, i32, bool>();
        assert_payload::<<Outcome<String, i32> as TypeConstructor>::WithType<bool>, bool>();
    }
}
