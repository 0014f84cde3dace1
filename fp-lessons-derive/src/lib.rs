//! Derive macro for fp-lessons' exhaustive kind dispatch.
//!
//! # Available Derive Macros
//!
//! - [`Tagged`]: Generates `Tagged` and `Dispatch` impls plus a handlers
//!   record for an enum
//!
//! # Example
//!
//! ```rust,ignore
//! use fp_lessons::control::{Dispatch, Tagged};
//!
//! #[derive(Tagged)]
//! enum LoginNameError {
//!     MalformedEmail(String),
//!     InvalidPhoneNumber(String),
//! }
//!
//! // Generated:
//! // - impl Tagged for LoginNameError
//! // - struct LoginNameErrorHandlers<MalformedEmailHandler, InvalidPhoneNumberHandler> {
//! //       pub malformed_email: MalformedEmailHandler,
//! //       pub invalid_phone_number: InvalidPhoneNumberHandler,
//! //   }
//! // - impl Dispatch<LoginNameErrorHandlers<..>> for LoginNameError
//!
//! let error = LoginNameError::MalformedEmail("a@b".to_string());
//! let text = error.dispatch(LoginNameErrorHandlers {
//!     malformed_email: |input: String| format!("{input} is not a valid email"),
//!     invalid_phone_number: |input: String| format!("{input} is not a valid phone number"),
//! });
//! assert_eq!(text, "a@b is not a valid email");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod tagged;

use proc_macro::TokenStream;

/// Derive macro for exhaustive dispatch over an enum's variants.
///
/// # Requirements
///
/// - The type must be an enum with at least one variant
/// - The enum must not have generic parameters
///
/// # Generated Code
///
/// For `enum Name { A, B(T), C(T, U), D { x: X } }`, generates:
///
/// ```rust,ignore
/// impl Tagged for Name {
///     const KINDS: &'static [&'static str] = &["A", "B", "C", "D"];
///     fn kind(&self) -> &'static str { ... }
/// }
///
/// pub struct NameHandlers<AHandler, BHandler, CHandler, DHandler> {
///     pub a: AHandler,
///     pub b: BHandler,
///     pub c: CHandler,
///     pub d: DHandler,
/// }
///
/// impl<Output, AHandler, BHandler, CHandler, DHandler> Dispatch<NameHandlers<..>> for Name
/// where
///     AHandler: FnOnce(()) -> Output,
///     BHandler: FnOnce(T) -> Output,
///     CHandler: FnOnce((T, U)) -> Output,
///     DHandler: FnOnce((X,)) -> Output,
/// { ... }
/// ```
///
/// The handlers struct has the same visibility as the enum.
#[proc_macro_derive(Tagged)]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    tagged::derive_tagged_impl(input)
}
