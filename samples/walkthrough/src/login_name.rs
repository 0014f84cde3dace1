//! Validating a login name that is either an email or a phone number.
//!
//! Email validation is tried first. Only an input that does not look like
//! an email at all is retried as a phone number; an input containing `@`
//! that fails the email pattern is reported as malformed and never
//! retried.
//!
//! The patterns are illustrative and reject some valid addresses and
//! numbers, such as phone numbers written with spaces.

use std::sync::LazyLock;

use fp_lessons::control::{Dispatch, Outcome, Tagged};
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._-]+@[a-z0-9.-]+\.[a-z]{2,4}$").expect("Invalid email regex pattern")
});

static PHONE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\-+]{9,15}$").expect("Invalid phone number regex pattern")
});

/// A validated email address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Email {
    /// The address as entered.
    pub value: String,
}

/// A validated phone number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    /// The number as entered.
    pub value: String,
}

/// A login name: the union of the two accepted forms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Tagged)]
pub enum LoginName {
    /// An email address.
    Email(Email),
    /// A phone number.
    PhoneNumber(PhoneNumber),
}

impl From<Email> for LoginName {
    fn from(email: Email) -> Self {
        Self::Email(email)
    }
}

impl From<PhoneNumber> for LoginName {
    fn from(phone_number: PhoneNumber) -> Self {
        Self::PhoneNumber(phone_number)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Contains `@` but does not match the email pattern.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{input} is a malformed email")]
pub struct MalformedEmail {
    /// The rejected input.
    pub input: String,
}

/// Does not contain `@`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{input} is not an email")]
pub struct NotAnEmail {
    /// The rejected input.
    pub input: String,
}

/// Does not match the phone number pattern.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{input} is not a valid phone number")]
pub struct InvalidPhoneNumber {
    /// The rejected input.
    pub input: String,
}

/// Every way [`validate_email`] can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error, Tagged)]
pub enum EmailError {
    /// See [`MalformedEmail`].
    #[error(transparent)]
    MalformedEmail(#[from] MalformedEmail),
    /// See [`NotAnEmail`].
    #[error(transparent)]
    NotAnEmail(#[from] NotAnEmail),
}

/// Every way [`validate_login_name`] can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error, Tagged)]
pub enum LoginNameError {
    /// See [`MalformedEmail`].
    #[error(transparent)]
    MalformedEmail(#[from] MalformedEmail),
    /// See [`InvalidPhoneNumber`].
    #[error(transparent)]
    InvalidPhoneNumber(#[from] InvalidPhoneNumber),
}

// =============================================================================
// Validation
// =============================================================================

/// Validates an email address.
pub fn validate_email(input: &str) -> Outcome<EmailError, Email> {
    Outcome::from_predicate(
        input,
        |input| EMAIL_PATTERN.is_match(input),
        |input| {
            let input = input.to_string();
            if input.contains('@') {
                EmailError::from(MalformedEmail { input })
            } else {
                EmailError::from(NotAnEmail { input })
            }
        },
    )
    .map(|email| Email {
        value: email.to_string(),
    })
}

/// Validates a phone number.
pub fn validate_phone_number(input: &str) -> Outcome<InvalidPhoneNumber, PhoneNumber> {
    let matches_pattern = Outcome::lift_predicate(
        |input: &&str| PHONE_NUMBER_PATTERN.is_match(input),
        |input: &str| InvalidPhoneNumber {
            input: input.to_string(),
        },
    );

    matches_pattern(input).map(|phone_number| PhoneNumber {
        value: phone_number.to_string(),
    })
}

/// Validates a login name as an email, falling back to a phone number when
/// the input is not email-shaped.
///
/// # Examples
///
/// ```
/// use fp_lessons::control::Outcome;
/// use walkthrough::login_name::{Email, LoginName, validate_login_name};
///
/// assert_eq!(
///     validate_login_name("a@b.cd"),
///     Outcome::Success(LoginName::Email(Email { value: "a@b.cd".to_string() }))
/// );
/// ```
pub fn validate_login_name(login_name: &str) -> Outcome<LoginNameError, LoginName> {
    validate_email(login_name).or_else_widen(|error| {
        error.dispatch(EmailErrorHandlers {
            malformed_email: |error: MalformedEmail| {
                Outcome::<LoginNameError, PhoneNumber>::failure(error.into())
            },
            not_an_email: |_: NotAnEmail| {
                validate_phone_number(login_name).widen::<LoginNameError>()
            },
        })
    })
}

/// Describes a validated login name or the reason it was rejected.
pub fn describe_login_name(login_name: &str) -> String {
    validate_login_name(login_name).fold(
        |error| {
            error.dispatch(LoginNameErrorHandlers {
                malformed_email: |error: MalformedEmail| error.to_string(),
                invalid_phone_number: |error: InvalidPhoneNumber| error.to_string(),
            })
        },
        |name| {
            name.dispatch(LoginNameHandlers {
                email: |email: Email| format!("email {}", email.value),
                phone_number: |phone: PhoneNumber| format!("phone number {}", phone.value),
            })
        },
    )
}
