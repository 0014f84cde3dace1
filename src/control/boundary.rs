//! Boundary between code that may fail abruptly and [`Outcome`].
//!
//! Two kinds of abrupt failure are absorbed here:
//!
//! - a panic, caught with [`std::panic::catch_unwind`] and normalized into
//!   [`CaughtPanic`] by [`to_error`];
//! - a standard `Result` returned by a primitive such as `str::parse`.
//!
//! In both cases the caller supplies a mapper that turns the raw failure
//! into its own typed error, so nothing untyped leaks past the boundary.
//!
//! # Examples
//!
//! ```rust
//! use fp_lessons::control::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! struct Base64DecodeError(String);
//!
//! let outcome: Outcome<Base64DecodeError, u8> =
//!     Outcome::try_catch(|| "300".parse::<u8>().unwrap_or_else(|e| panic!("{e}")), |caught| {
//!         Base64DecodeError(caught.message().to_string())
//!     });
//!
//! assert_eq!(
//!     outcome,
//!     Outcome::Failure(Base64DecodeError("number too large to fit in target type".to_string()))
//! );
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::outcome::Outcome;

const UNKNOWN_PAYLOAD: &str = "unknown panic payload";

/// A panic caught at the boundary, reduced to its message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Creates a caught panic carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl Error for CaughtPanic {}

/// Normalizes an arbitrary panic payload into a [`CaughtPanic`].
///
/// `String` and `&'static str` payloads (everything `panic!` produces)
/// keep their text. Anything else becomes a generic message.
///
/// # Examples
///
/// ```rust
/// use fp_lessons::control::to_error;
///
/// assert_eq!(to_error(Box::new("boom")).message(), "boom");
/// assert_eq!(to_error(Box::new(42_u8)).message(), "unknown panic payload");
/// ```
pub fn to_error(payload: Box<dyn Any + Send>) -> CaughtPanic {
    match payload.downcast::<String>() {
        Ok(message) => CaughtPanic::new(*message),
        Err(payload) => payload
            .downcast_ref::<&'static str>()
            .map_or_else(
                || CaughtPanic::new(UNKNOWN_PAYLOAD),
                |message| CaughtPanic::new(*message),
            ),
    }
}

impl<E, A> Outcome<E, A> {
    /// Runs `thunk`, mapping a panic into a typed failure.
    ///
    /// A normal return becomes `Success`. A panic is caught, passed through
    /// [`to_error`], and handed to `on_throw`.
    ///
    /// Any thunk is accepted, including one that captures `&Cell` or
    /// `&mut` state. State the thunk mutated before panicking is left as
    /// it was at the panic. The default panic hook still prints the panic
    /// to stderr.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// let calm: Outcome<String, i32> = Outcome::try_catch(|| 7, |caught| caught.to_string());
    /// assert_eq!(calm, Outcome::Success(7));
    ///
    /// let loud: Outcome<String, i32> =
    ///     Outcome::try_catch(|| panic!("boom"), |caught| caught.to_string());
    /// assert_eq!(loud, Outcome::Failure("boom".to_string()));
    /// ```
    pub fn try_catch<T, H>(thunk: T, on_throw: H) -> Self
    where
        T: FnOnce() -> A,
        H: FnOnce(CaughtPanic) -> E,
    {
        match panic::catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(on_throw(to_error(payload))),
        }
    }

    /// Runs `thunk`, mapping an `Err` returned by a fallible primitive into
    /// a typed failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_lessons::control::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct JsonParseError(String);
    ///
    /// let parsed: Outcome<JsonParseError, serde_json::Value> = Outcome::try_catch_result(
    ///     || serde_json::from_str("{"),
    ///     |e| JsonParseError(e.to_string()),
    /// );
    /// assert!(parsed.is_failure());
    /// ```
    pub fn try_catch_result<T, X, H>(thunk: T, on_error: H) -> Self
    where
        T: FnOnce() -> Result<A, X>,
        H: FnOnce(X) -> E,
    {
        match thunk() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(on_error(error)),
        }
    }
}

/// Lifts a fallible function into one returning [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use fp_lessons::control::{Outcome, try_catch_k};
///
/// let parse = try_catch_k(|text: &str| text.parse::<i32>(), |_| "not a number");
///
/// assert_eq!(parse("12"), Outcome::Success(12));
/// assert_eq!(parse("twelve"), Outcome::Failure("not a number"));
/// ```
pub fn try_catch_k<I, A, X, E, F, H>(function: F, on_error: H) -> impl Fn(I) -> Outcome<E, A>
where
    F: Fn(I) -> Result<A, X>,
    H: Fn(X) -> E,
{
    move |input| Outcome::try_catch_result(|| function(input), &on_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn to_error_keeps_formatted_messages() {
        let payload: Box<dyn Any + Send> = Box::new(format!("bad byte at {}", 3));
        assert_eq!(to_error(payload), CaughtPanic::new("bad byte at 3"));
    }

    #[rstest]
    fn to_error_falls_back_for_foreign_payloads() {
        let payload: Box<dyn Any + Send> = Box::new(vec![1, 2, 3]);
        assert_eq!(to_error(payload).message(), UNKNOWN_PAYLOAD);
    }

    #[rstest]
    fn try_catch_maps_panics() {
        let outcome: Outcome<String, ()> =
            Outcome::try_catch(|| panic!("exploded"), |caught| format!("caught: {caught}"));
        assert_eq!(outcome, Outcome::Failure("caught: exploded".to_string()));
    }

    #[rstest]
    fn try_catch_accepts_thunks_over_shared_state() {
        let calls = Cell::new(0);
        let outcome: Outcome<String, i32> = Outcome::try_catch(
            || {
                calls.set(calls.get() + 1);
                calls.get() * 10
            },
            |caught| caught.to_string(),
        );
        assert_eq!(outcome, Outcome::Success(10));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn try_catch_keeps_state_written_before_the_panic() {
        let mut log = Vec::new();
        let outcome: Outcome<String, ()> = Outcome::try_catch(
            || {
                log.push("started");
                panic!("halfway");
            },
            |caught| caught.to_string(),
        );
        assert_eq!(outcome, Outcome::Failure("halfway".to_string()));
        assert_eq!(log, ["started"]);
    }

    #[rstest]
    fn try_catch_result_does_not_call_mapper_on_success() {
        let outcome: Outcome<String, i32> =
            Outcome::try_catch_result(|| "5".parse::<i32>(), |_| panic!("must not run"));
        assert_eq!(outcome, Outcome::Success(5));
    }
}
