//! End-to-end lesson scenarios, exercised through the public API only.

use fp_lessons::control::{Maybe, Outcome, Tagged};
use rstest::rstest;
use serde_json::json;
use walkthrough::checkout::{Account, Cart, Item, NotEnoughBalance, PayError, checkout, pay};
use walkthrough::config::WalkthroughConfig;
use walkthrough::inverse::{best_movie, get_even, inverse_head, inverse_message};
use walkthrough::lessons::{self, Lesson};
use walkthrough::login_name::{
    Email, LoginName, LoginNameError, MalformedEmail, describe_login_name, validate_login_name,
};
use walkthrough::user_decoding::{
    DecodeUserError, User, base64_encode, create_response, decode_user,
};

// =============================================================================
// Checkout
// =============================================================================

#[rstest]
#[case(Account::open(70), "Success. Remaining balance 20")]
#[case(Account::open(30), "Cannot pay 50 with a balance of 30!")]
#[case(Account::frozen(100), "Cannot pay with a frozen account!")]
fn checkout_of_fifty(#[case] account: Account, #[case] expected: &str) {
    let cart = Cart::from_items(vec![
        Item {
            name: "book".to_string(),
            price: 35,
        },
        Item {
            name: "pen".to_string(),
            price: 15,
        },
    ]);
    assert_eq!(checkout(&cart)(account), expected);
}

#[rstest]
fn frozen_account_wins_over_low_balance() {
    let failure = pay(500)(Account::frozen(0)).into_failure();
    assert_eq!(failure.map(|error| error.kind()), Some("AccountFrozen"));
}

#[rstest]
fn low_balance_reports_amount_and_balance() {
    assert_eq!(
        pay(50)(Account::open(49)),
        Outcome::Failure(PayError::NotEnoughBalance(NotEnoughBalance {
            amount: 50,
            balance: 49,
        }))
    );
}

// =============================================================================
// User decoding
// =============================================================================

#[rstest]
#[case("invalidBase64!!!", "Base64Decode")]
#[case("e2ludmFsaWR9", "JsonParse")]
#[case("eyJhIjoxLCJiIjoyfQ==", "InvalidUser")]
fn decode_user_failure_kinds(#[case] encoded: &str, #[case] kind: &str) {
    let failure = decode_user(encoded).into_failure();
    assert_eq!(failure.as_ref().map(Tagged::kind), Some(kind));
}

#[rstest]
fn decode_user_success() {
    let encoded = base64_encode(r#"{"id":1,"name":"Dude"}"#);
    assert_eq!(
        decode_user(&encoded),
        Outcome::Success(User {
            id: 1,
            name: "Dude".to_string(),
        })
    );
}

#[rstest]
fn invalid_user_keeps_the_parsed_value() {
    let encoded = base64_encode(r#"{"a":1,"b":2}"#);
    let failure = decode_user(&encoded).into_failure();
    assert!(matches!(
        failure,
        Some(DecodeUserError::InvalidUser(invalid)) if invalid.obj == json!({ "a": 1, "b": 2 })
    ));
}

#[rstest]
fn create_response_measures_the_body() {
    let response = create_response(&json!({ "balance": 100, "success": true }));
    let body = response.into_success().map(|response| response.body);
    assert_eq!(body.as_deref(), Some(r#"{"balance":100,"success":true}"#));
}

// =============================================================================
// Login names
// =============================================================================

#[rstest]
fn email_is_accepted_as_email() {
    assert_eq!(
        validate_login_name("a@b.cd"),
        Outcome::Success(LoginName::Email(Email {
            value: "a@b.cd".to_string(),
        }))
    );
}

#[rstest]
fn malformed_email_is_not_retried_as_phone() {
    assert_eq!(
        validate_login_name("a@b"),
        Outcome::Failure(LoginNameError::MalformedEmail(MalformedEmail {
            input: "a@b".to_string(),
        }))
    );
}

#[rstest]
#[case("1-123-123", "phone number 1-123-123")]
#[case("ftw?", "ftw? is not a valid phone number")]
fn login_name_descriptions(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(describe_login_name(input), expected);
}

// =============================================================================
// Optional values
// =============================================================================

#[rstest]
fn optional_values_compose() {
    assert_eq!(inverse_message(0.0), "Cannot get the inverse of 0.");
    assert_eq!(best_movie(&[]), Maybe::Empty);
    assert_eq!(inverse_head(&[4.0]), Maybe::Present(0.25));
    assert_eq!(get_even(3), Maybe::Empty);
}

// =============================================================================
// Lessons
// =============================================================================

#[rstest]
fn every_configured_lesson_runs() {
    let config = WalkthroughConfig::default();
    for lesson in &config.lessons {
        assert!(!lessons::run(*lesson, &config).is_empty(), "{lesson} observed nothing");
    }
}

#[rstest]
fn report_accepts_any_observation_list() {
    let config = WalkthroughConfig::default();
    lessons::report(Lesson::Arrays, &lessons::run(Lesson::Arrays, &config));
    lessons::report(Lesson::Arrays, &[]);
}
