//! # fp-lessons
//!
//! Small functional-programming primitives for Rust: a disjoint
//! success/failure container, an optional value, left-to-right pipelines
//! and exhaustive dispatch over tagged error kinds.
//!
//! ## Overview
//!
//! - **Control**: [`Outcome`](control::Outcome), [`Maybe`](control::Maybe),
//!   [`Either`](control::Either) and the panic boundary
//!   ([`try_catch`](control::Outcome::try_catch)).
//! - **Dispatch**: [`Tagged`](control::Tagged) / [`Dispatch`](control::Dispatch)
//!   and `#[derive(Tagged)]` for exhaustive handling of error kinds.
//! - **Function Composition**: `pipe!`, `flow!`, `compose!` macros.
//! - **Type Classes**: Functor, Applicative, Monad over the containers above.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition macros and helpers
//! - `control`: `Outcome`, `Maybe`, `Either`, dispatch traits
//! - `derive`: `#[derive(Tagged)]`
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`, `Maybe` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fp_lessons::control::Outcome;
//! use fp_lessons::pipe;
//!
//! fn parse(text: &str) -> Outcome<String, i32> {
//!     Outcome::try_catch_result(|| text.trim().parse::<i32>(), |error| error.to_string())
//! }
//!
//! let doubled = pipe!(" 21 ", parse).map(|number| number * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets `#[derive(Tagged)]` output (which names `::fp_lessons`) compile inside this crate.
extern crate self as fp_lessons;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use fp_lessons::prelude::*;
///
/// let value: Outcome<String, i32> = Outcome::success(1);
/// assert_eq!(value.fmap(|n| n + 1), Outcome::Success(2));
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
