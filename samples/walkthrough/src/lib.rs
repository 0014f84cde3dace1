//! Walkthrough
//!
//! Guided lessons for the fp-lessons library. Each module is one lesson;
//! [`lessons`] runs them and turns their results into log lines.
//!
//! # fp-lessons Features Used
//!
//! - `pipe!` and `flow!` for left-to-right pipelines
//! - `Maybe` for values that may be absent
//! - `Outcome` for steps that may fail, with widening of error types
//! - `#[derive(Tagged)]` and `dispatch` for exhaustive handling of error kinds
//! - `try_catch_result` and `try_catch_k` around third-party decoders and parsers

pub mod checkout;
pub mod config;
pub mod inverse;
pub mod lessons;
pub mod login_name;
pub mod movies;
pub mod pipelines;
pub mod user_decoding;
