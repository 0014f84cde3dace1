//! Decoding a user from a base64 encoded JSON payload.
//!
//! Three fallible steps are chained: base64 decoding, JSON parsing and a
//! shape check. Each fails with its own error type and the chain widens
//! them into [`DecodeUserError`]. The first failure stops the chain.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fp_lessons::control::{Outcome, Tagged, try_catch_k};
use fp_lessons::pipe;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A decoded user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// An HTTP-like response carrying a JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Serialized body.
    pub body: String,
    /// Length of the body in bytes.
    pub content_length: usize,
}

// =============================================================================
// Errors
// =============================================================================

/// The input is not valid base64, or does not decode to UTF-8 text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot decode base64 input: {message}")]
pub struct Base64DecodeError {
    /// Description from the decoder.
    pub message: String,
}

/// The text is not valid JSON.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot parse JSON: {message}")]
pub struct JsonParseError {
    /// Description from the parser.
    pub message: String,
}

/// The value cannot be written as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot serialize to JSON: {message}")]
pub struct JsonStringifyError {
    /// Description from the serializer.
    pub message: String,
}

/// The parsed value does not have the shape of a [`User`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("not a user: {obj}")]
pub struct InvalidUser {
    /// The rejected value.
    pub obj: Value,
}

/// Every way [`decode_user`] can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error, Tagged)]
pub enum DecodeUserError {
    /// See [`Base64DecodeError`].
    #[error(transparent)]
    Base64Decode(#[from] Base64DecodeError),
    /// See [`JsonParseError`].
    #[error(transparent)]
    JsonParse(#[from] JsonParseError),
    /// See [`InvalidUser`].
    #[error(transparent)]
    InvalidUser(#[from] InvalidUser),
}

// =============================================================================
// Primitives
// =============================================================================

/// Encodes text with the standard base64 alphabet.
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text)
}

/// Decodes standard base64 into UTF-8 text.
pub fn base64_decode(encoded: &str) -> Outcome<Base64DecodeError, String> {
    Outcome::try_catch_result(
        || STANDARD.decode(encoded),
        |error| Base64DecodeError {
            message: error.to_string(),
        },
    )
    .flat_map(|bytes| {
        Outcome::try_catch_result(
            || String::from_utf8(bytes),
            |error| Base64DecodeError {
                message: error.to_string(),
            },
        )
    })
}

/// Parses JSON text into an untyped value.
///
/// # Examples
///
/// ```
/// use walkthrough::user_decoding::json_parse;
///
/// assert!(json_parse(r#"{"foo": "bar"}"#).is_success());
/// assert!(json_parse("{invalid}").is_failure());
/// ```
pub fn json_parse(text: &str) -> Outcome<JsonParseError, Value> {
    let parse = try_catch_k(
        |text: &str| serde_json::from_str::<Value>(text),
        |error: serde_json::Error| JsonParseError {
            message: error.to_string(),
        },
    );
    parse(text)
}

/// Serializes a value to JSON text.
pub fn json_stringify<T>(payload: &T) -> Outcome<JsonStringifyError, String>
where
    T: Serialize + ?Sized,
{
    Outcome::try_catch_result(
        || serde_json::to_string(payload),
        |error| JsonStringifyError {
            message: error.to_string(),
        },
    )
}

/// Builds a [`Response`] whose body is `payload` as JSON.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use walkthrough::user_decoding::create_response;
///
/// let response = create_response(&json!({ "balance": 100, "success": true }));
/// let response = response.into_success().map(|response| response.content_length);
/// assert_eq!(response, Some(30));
/// ```
pub fn create_response<T>(payload: &T) -> Outcome<JsonStringifyError, Response>
where
    T: Serialize + ?Sized,
{
    json_stringify(payload).map(|body| Response {
        content_length: body.len(),
        body,
    })
}

// =============================================================================
// Decoding chain
// =============================================================================

/// Narrows an untyped value to a [`User`].
///
/// Only objects with an `id` and a `name` of the right types are accepted.
/// Anything else is returned inside [`InvalidUser`].
pub fn decode_user_object(value: Value) -> Outcome<InvalidUser, User> {
    Outcome::from_refinement(
        value,
        |value| {
            let has_id = value.as_object().is_some_and(|object| object.contains_key("id"));
            match User::deserialize(&value) {
                Ok(user) if has_id => Ok(user),
                _ => Err(value),
            }
        },
        |obj| InvalidUser { obj },
    )
}

/// Decodes a base64 encoded JSON user.
///
/// # Examples
///
/// ```
/// use fp_lessons::control::Tagged;
/// use walkthrough::user_decoding::{base64_encode, decode_user};
///
/// let encoded = base64_encode(r#"{"id":1,"name":"Dude"}"#);
/// assert!(decode_user(&encoded).is_success());
///
/// let failure = decode_user("invalidBase64!!!").into_failure();
/// assert_eq!(failure.map(|error| error.kind()), Some("Base64Decode"));
/// ```
pub fn decode_user(encoded: &str) -> Outcome<DecodeUserError, User> {
    decode_user_with(encoded, json_parse)
}

/// [`decode_user`] with a caller-supplied JSON parser.
///
/// The parser runs only if base64 decoding succeeded.
pub fn decode_user_with<P>(encoded: &str, parser: P) -> Outcome<DecodeUserError, User>
where
    P: FnOnce(&str) -> Outcome<JsonParseError, Value>,
{
    pipe!(encoded, base64_decode)
        .flat_map_widen::<DecodeUserError, _, _, _>(|text| parser(&text))
        .flat_map_widen(decode_user_object)
}
