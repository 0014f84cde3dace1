//! Function composition utilities.
//!
//! Point-free building blocks for wiring fallible steps together:
//!
//! - [`pipe!`]: Apply functions to a value left-to-right (data flow style)
//! - [`flow!`]: Compose functions left-to-right into a new function
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Pipeline (left-to-right application)
//!
//! ```
//! use fp_lessons::pipe;
//!
//! let size = |text: &str| text.len();
//! let at_least_three = |length: usize| length >= 3;
//!
//! assert!(pipe!("hello", size, at_least_three));
//! // is equal to
//! assert!(at_least_three(size("hello")));
//! ```
//!
//! ## Flow (left-to-right composition)
//!
//! ```
//! use fp_lessons::flow;
//!
//! let trim = |text: &'static str| text.trim();
//! let size = |text: &str| text.len();
//! let at_least_three = |length: usize| length >= 3;
//!
//! let is_valid = flow!(trim, size, at_least_three);
//! assert!(!is_valid(" hi "));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `flow!(f, flow!(g, h)) == flow!(flow!(f, g), h)`
//! - **Identity**: `flow!(identity, f) == f == flow!(f, identity)`
//! - **Duality**: `flow!(f, g, h) == compose!(h, g, f)` and
//!   `pipe!(x, f, g) == flow!(f, g)(x)`

mod compose_macro;
mod flow_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::flow;
pub use crate::pipe;
