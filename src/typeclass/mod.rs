//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! `Outcome` and `Maybe` from [`control`](crate::control) implement all
//! three, as does `Option`, so code (and law tests) can be written once
//! against the traits.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same container holding a different type",
//! which is what `fmap` and `flat_map` return.
//!
//! # Examples
//!
//! ```rust
//! use fp_lessons::typeclass::{Applicative, Functor, Monad};
//!
//! let halved = Some(10).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(5));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum.fmap(|n| n * 10), Some(30));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
