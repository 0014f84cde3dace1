//! Integration tests for the panic boundary.
//!
//! A panic or an `Err` raised inside a thunk must come out as a typed
//! `Failure`, and must never escape the boundary.

use std::collections::BTreeMap;

use fp_lessons::control::{CaughtPanic, Outcome, try_catch_k};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParseError(String);

fn divide(numerator: i32, denominator: i32) -> Outcome<ParseError, i32> {
    Outcome::try_catch(
        move || numerator / denominator,
        |caught| ParseError(caught.message().to_string()),
    )
}

#[rstest]
fn normal_return_is_success() {
    assert_eq!(divide(10, 2), Outcome::Success(5));
}

#[rstest]
fn arithmetic_panic_is_caught() {
    assert_eq!(
        divide(1, 0),
        Outcome::Failure(ParseError("attempt to divide by zero".to_string()))
    );
}

#[rstest]
fn string_and_str_payloads_keep_their_message() {
    let from_str: Outcome<CaughtPanic, ()> =
        Outcome::try_catch(|| panic!("static"), |caught| caught);
    let code = 42;
    let from_string: Outcome<CaughtPanic, ()> =
        Outcome::try_catch(move || panic!("code {code}"), |caught| caught);

    assert_eq!(from_str, Outcome::Failure(CaughtPanic::new("static")));
    assert_eq!(from_string, Outcome::Failure(CaughtPanic::new("code 42")));
}

#[rstest]
fn foreign_payload_gets_a_generic_message() {
    let outcome: Outcome<String, ()> = Outcome::try_catch(
        || std::panic::panic_any(7_u32),
        |caught| caught.to_string(),
    );
    assert_eq!(outcome, Outcome::Failure("unknown panic payload".to_string()));
}

#[rstest]
fn try_catch_result_maps_the_error() {
    let map: BTreeMap<(i32, i32), i32> = BTreeMap::from([((1, 2), 3)]);
    let outcome: Outcome<ParseError, String> = Outcome::try_catch_result(
        || serde_json::to_string(&map),
        |error| ParseError(error.to_string()),
    );
    assert!(outcome.is_failure());
}

#[rstest]
#[case("12", Outcome::Success(12))]
#[case("1e3", Outcome::Failure(ParseError("invalid digit found in string".to_string())))]
#[case("", Outcome::Failure(ParseError("cannot parse integer from empty string".to_string())))]
fn try_catch_k_lifts_a_parser(#[case] input: &str, #[case] expected: Outcome<ParseError, i64>) {
    let parse = try_catch_k(
        |text: &str| text.parse::<i64>(),
        |error: std::num::ParseIntError| ParseError(error.to_string()),
    );
    assert_eq!(parse(input), expected);
}

#[rstest]
fn lifted_parser_is_reusable() {
    let parse = try_catch_k(|text: &str| text.parse::<u8>(), |_| "out of range");
    let parsed: Vec<Outcome<&str, u8>> = ["1", "256", "3"].into_iter().map(&parse).collect();
    assert_eq!(
        parsed,
        vec![Outcome::Success(1), Outcome::Failure("out of range"), Outcome::Success(3)]
    );
}

#[rstest]
fn caught_panic_is_an_error() {
    let error: Box<dyn std::error::Error> = Box::new(CaughtPanic::new("boom"));
    assert_eq!(error.to_string(), "boom");
}
