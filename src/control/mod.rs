//! Control structures for fallible and optional computations.
//!
//! - [`Outcome`]: a disjoint success/failure container with chaining,
//!   recovery and widening of the error type
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a plain union of two types, returned by the widening
//!   eliminations
//! - [`Tagged`] / [`Dispatch`]: exhaustive dispatch over error kinds
//! - [`try_catch_k`], [`to_error`], [`CaughtPanic`]: the boundary that
//!   turns panics and `std` results into typed failures
//!
//! # Examples
//!
//! ## Short-circuiting chains
//!
//! ```rust
//! use fp_lessons::control::Outcome;
//!
//! let calls = std::cell::Cell::new(0);
//! let failed: Outcome<&str, i32> = Outcome::failure("first");
//!
//! let result = failed
//!     .flat_map(|n| {
//!         calls.set(calls.get() + 1);
//!         Outcome::success(n + 1)
//!     })
//!     .map(|n| n * 2);
//!
//! assert_eq!(result, Outcome::Failure("first"));
//! assert_eq!(calls.get(), 0);
//! ```
//!
//! ## Recovery
//!
//! ```rust
//! use fp_lessons::control::Outcome;
//!
//! let award: Outcome<(), String> = Outcome::failure(());
//! let highlight = award
//!     .alt(|| Outcome::success("In TOP 10 at position: 3".to_string()))
//!     .get_or_else(|()| "Released in 2023".to_string());
//!
//! assert_eq!(highlight, "In TOP 10 at position: 3");
//! ```

mod boundary;
mod either;
mod maybe;
mod outcome;
mod tagged;

pub use boundary::{CaughtPanic, to_error, try_catch_k};
pub use either::Either;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use tagged::{Dispatch, MaybeHandlers, OutcomeHandlers, Tagged, dispatch};

#[cfg(feature = "derive")]
pub use fp_lessons_derive::Tagged;
