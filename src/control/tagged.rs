//! Exhaustive dispatch over the kinds of a tagged union.
//!
//! [`Tagged`] exposes the string discriminant ("kind") of every variant.
//! [`Dispatch`] routes a value to exactly one handler out of a handlers
//! record that has one field per kind. Because the record is a plain
//! struct, leaving a kind without a handler or naming a kind that does not
//! exist is rejected when the record is constructed.
//!
//! `#[derive(Tagged)]` generates both impls and the handlers record for an
//! enum. The handlers record is named `<Enum>Handlers`, with one field per
//! variant in snake case. Each handler receives the variant's payload:
//!
//! - unit variant: `()`
//! - single-field tuple variant: the field
//! - any other variant: a tuple of its fields in declaration order
//!
//! # Examples
//!
//! ```rust
//! use fp_lessons::control::{Dispatch, Tagged, dispatch};
//!
//! #[derive(Debug, Tagged)]
//! enum PayError {
//!     AccountFrozen,
//!     NotEnoughBalance { amount: u64, balance: u64 },
//! }
//!
//! let error = PayError::NotEnoughBalance { amount: 50, balance: 30 };
//! assert_eq!(error.kind(), "NotEnoughBalance");
//! assert_eq!(PayError::KINDS, ["AccountFrozen", "NotEnoughBalance"]);
//!
//! let describe = dispatch::<PayError, _>(PayErrorHandlers {
//!     account_frozen: |(): ()| "Cannot pay with a frozen account!".to_string(),
//!     not_enough_balance: |(amount, balance): (u64, u64)| {
//!         format!("Cannot pay {amount} with a balance of {balance}!")
//!     },
//! });
//!
//! assert_eq!(describe(error), "Cannot pay 50 with a balance of 30!");
//! ```
//!
//! A missing handler does not compile:
//!
//! ```compile_fail
//! use fp_lessons::control::{Dispatch, Tagged};
//!
//! #[derive(Tagged)]
//! enum PayError {
//!     AccountFrozen,
//!     NotEnoughBalance(u64),
//! }
//!
//! let text = PayError::AccountFrozen.dispatch(PayErrorHandlers {
//!     account_frozen: |(): ()| "frozen",
//! });
//! ```
//!
//! Neither does a handler for a kind the enum does not declare:
//!
//! ```compile_fail
//! use fp_lessons::control::{Dispatch, Tagged};
//!
//! #[derive(Tagged)]
//! enum PayError {
//!     AccountFrozen,
//! }
//!
//! let text = PayError::AccountFrozen.dispatch(PayErrorHandlers {
//!     account_frozen: |(): ()| "frozen",
//!     card_expired: |(): ()| "expired",
//! });
//! ```

use super::maybe::Maybe;
use super::outcome::Outcome;

/// A tagged union whose variants carry a string discriminant.
pub trait Tagged {
    /// Every kind declared by the type, in declaration order.
    const KINDS: &'static [&'static str];

    /// The kind of this value. Always one of [`KINDS`](Self::KINDS).
    fn kind(&self) -> &'static str;
}

/// Total dispatch of a [`Tagged`] value to one handler per kind.
///
/// `H` is the handlers record. Every handler returns the same `Output`.
pub trait Dispatch<H>: Tagged + Sized {
    /// The common result type of every handler.
    type Output;

    /// Consumes `self` and calls the handler registered for its kind.
    fn dispatch(self, handlers: H) -> Self::Output;
}

/// Curried form of [`Dispatch::dispatch`]: fixes the handlers first and
/// returns a function awaiting the tagged value.
///
/// The tagged type usually has to be named, as in
/// `dispatch::<PayError, _>(handlers)`, unless the returned function is
/// passed straight to something that fixes its argument type.
#[inline]
pub fn dispatch<T, H>(handlers: H) -> impl FnOnce(T) -> T::Output
where
    T: Dispatch<H>,
{
    move |tagged| tagged.dispatch(handlers)
}

// =============================================================================
// Outcome and Maybe
// =============================================================================

/// Handlers record for [`Outcome`].
#[derive(Debug, Clone, Copy)]
pub struct OutcomeHandlers<F, S> {
    /// Called with the error of a `Failure`.
    pub failure: F,
    /// Called with the value of a `Success`.
    pub success: S,
}

impl<E, A> Tagged for Outcome<E, A> {
    const KINDS: &'static [&'static str] = &["Failure", "Success"];

    fn kind(&self) -> &'static str {
        match self {
            Self::Failure(_) => "Failure",
            Self::Success(_) => "Success",
        }
    }
}

impl<E, A, R, F, S> Dispatch<OutcomeHandlers<F, S>> for Outcome<E, A>
where
    F: FnOnce(E) -> R,
    S: FnOnce(A) -> R,
{
    type Output = R;

    fn dispatch(self, handlers: OutcomeHandlers<F, S>) -> R {
        self.fold(handlers.failure, handlers.success)
    }
}

/// Handlers record for [`Maybe`].
#[derive(Debug, Clone, Copy)]
pub struct MaybeHandlers<N, P> {
    /// Called when the value is absent.
    pub empty: N,
    /// Called with a present value.
    pub present: P,
}

impl<A> Tagged for Maybe<A> {
    const KINDS: &'static [&'static str] = &["Empty", "Present"];

    fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Present(_) => "Present",
        }
    }
}

impl<A, R, N, P> Dispatch<MaybeHandlers<N, P>> for Maybe<A>
where
    N: FnOnce(()) -> R,
    P: FnOnce(A) -> R,
{
    type Output = R;

    fn dispatch(self, handlers: MaybeHandlers<N, P>) -> R {
        let MaybeHandlers { empty, present } = handlers;
        self.fold(|| empty(()), present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn outcome_dispatch_matches_fold() {
        let handlers = OutcomeHandlers {
            failure: |error: &str| error.len(),
            success: |value: usize| value,
        };
        assert_eq!(Outcome::<&str, usize>::failure("four").dispatch(handlers), 4);
        assert_eq!(Outcome::<&str, usize>::success(9).dispatch(handlers), 9);
    }

    #[rstest]
    fn maybe_kind_and_dispatch() {
        let present = Maybe::some(2);
        assert_eq!(present.kind(), "Present");
        let doubled = dispatch::<Maybe<i32>, _>(MaybeHandlers {
            empty: |(): ()| 0,
            present: |n: i32| n * 2,
        })(present);
        assert_eq!(doubled, 4);
    }

    #[cfg(feature = "derive")]
    mod derived {
        use super::*;

        #[derive(Debug, crate::control::Tagged)]
        enum Signal {
            Quiet,
            Level(u8),
            Pair(i32, i32),
            Named { label: &'static str },
        }

        fn describe(signal: Signal) -> String {
            signal.dispatch(SignalHandlers {
                quiet: |(): ()| "quiet".to_string(),
                level: |level: u8| format!("level {level}"),
                pair: |(x, y): (i32, i32)| format!("pair {x},{y}"),
                named: |(label,): (&'static str,)| format!("named {label}"),
            })
        }

        #[rstest]
        #[case(Signal::Quiet, "Quiet", "quiet")]
        #[case(Signal::Level(3), "Level", "level 3")]
        #[case(Signal::Pair(1, 2), "Pair", "pair 1,2")]
        #[case(Signal::Named { label: "x" }, "Named", "named x")]
        fn derived_dispatch_covers_every_payload_shape(
            #[case] signal: Signal,
            #[case] kind: &str,
            #[case] expected: &str,
        ) {
            assert_eq!(signal.kind(), kind);
            assert_eq!(describe(signal), expected);
        }

        #[rstest]
        fn derived_kinds_follow_declaration_order() {
            assert_eq!(Signal::KINDS, ["Quiet", "Level", "Pair", "Named"]);
        }
    }
}
