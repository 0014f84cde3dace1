//! The lessons and their observations.
//!
//! Running a lesson produces a list of [`Observation`]s: a label naming an
//! expression and the value it produced. [`report`] sends them to the
//! `tracing` log. The log is write-only; nothing read back from it feeds
//! into a computation.

use std::fmt;
use std::str::FromStr;

use serde_json::json;
use thiserror::Error;

use crate::checkout::{Account, Cart, checkout, pay};
use crate::config::WalkthroughConfig;
use crate::inverse::{
    Circle, Shape, Square, best_movie, circle_from_shape, get_even, head, inverse, inverse_head,
    inverse_message, safe_inverse, safe_inverse_or_label,
};
use crate::login_name::{describe_login_name, validate_login_name};
use crate::movies::{movie_highlight, sample_movies};
use crate::pipelines::{
    at_least_3, count_sum_max_common, is_long_enough, is_strings_valid, is_valid, size, trim,
};
use crate::user_decoding::{base64_encode, create_response, decode_user, json_parse};

/// A lesson that can be run on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lesson {
    /// `pipe!` and `flow!` over string helpers.
    Pipelines,
    /// `Maybe`: inverses, heads, predicates and refinements.
    Inverse,
    /// `Maybe::alt` over movie highlights.
    Movies,
    /// `Outcome` and dispatch for paying a cart.
    Checkout,
    /// Widening chains: base64, JSON and shape validation.
    UserDecoding,
    /// Recovery with `or_else_widen`.
    LoginName,
    /// Zipping two lists.
    Arrays,
}

impl Lesson {
    /// Every lesson, in presentation order.
    pub const ALL: [Self; 7] = [
        Self::Pipelines,
        Self::Inverse,
        Self::Movies,
        Self::Checkout,
        Self::UserDecoding,
        Self::LoginName,
        Self::Arrays,
    ];

    /// Name used in configuration and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pipelines => "pipelines",
            Self::Inverse => "inverse",
            Self::Movies => "movies",
            Self::Checkout => "checkout",
            Self::UserDecoding => "user-decoding",
            Self::LoginName => "login-name",
            Self::Arrays => "arrays",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The lesson name is not known.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown lesson `{0}`")]
pub struct UnknownLesson(pub String);

impl FromStr for Lesson {
    type Err = UnknownLesson;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lesson| lesson.name() == name)
            .ok_or_else(|| UnknownLesson(name.to_string()))
    }
}

/// A labelled value produced while running a lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// The expression that was evaluated.
    pub label: String,
    /// Its value, formatted for reading.
    pub value: String,
}

impl Observation {
    fn new(label: &str, value: impl fmt::Debug) -> Self {
        Self {
            label: label.to_string(),
            value: format!("{value:?}"),
        }
    }
}

/// Runs `lesson` and returns what it observed.
pub fn run(lesson: Lesson, config: &WalkthroughConfig) -> Vec<Observation> {
    match lesson {
        Lesson::Pipelines => pipelines(),
        Lesson::Inverse => inverse_lesson(),
        Lesson::Movies => movies(),
        Lesson::Checkout => checkout_lesson(config.checkout_total),
        Lesson::UserDecoding => user_decoding(),
        Lesson::LoginName => login_name(),
        Lesson::Arrays => arrays(),
    }
}

/// Writes every observation of `lesson` to the log.
pub fn report(lesson: Lesson, observations: &[Observation]) {
    let _span = tracing::info_span!("lesson", name = %lesson).entered();
    for observation in observations {
        tracing::info!(label = %observation.label, value = %observation.value, "observed");
    }
    tracing::debug!(count = observations.len(), "lesson finished");
}

fn pipelines() -> Vec<Observation> {
    vec![
        Observation::new("pipe!(\"hello\", size)", fp_lessons::pipe!("hello", size)),
        Observation::new(
            "pipe!(\"hello\", size, at_least_3)",
            fp_lessons::pipe!("hello", size, at_least_3),
        ),
        Observation::new(
            "pipe!(\" hi \", trim, size, at_least_3)",
            fp_lessons::pipe!(" hi ", trim, size, at_least_3),
        ),
        Observation::new("is_long_enough(\"hello\")", is_long_enough("hello")),
        Observation::new("is_valid(\" hi \")", is_valid(" hi ")),
        Observation::new(
            "is_strings_valid(\" hi \", \"dude \")",
            is_strings_valid(" hi ", "dude "),
        ),
    ]
}

fn inverse_lesson() -> Vec<Observation> {
    vec![
        Observation::new("inverse(0)", inverse(0.0)),
        Observation::new("inverse(2)", inverse(2.0)),
        Observation::new("inverse_message(0)", inverse_message(0.0)),
        Observation::new("inverse_message(2)", inverse_message(2.0)),
        Observation::new("safe_inverse(0)", safe_inverse(0.0)),
        Observation::new("safe_inverse_or_label(0)", safe_inverse_or_label(0.0)),
        Observation::new("head([])", head::<i32>(&[])),
        Observation::new("head([1, 2, 3])", head(&[1, 2, 3])),
        Observation::new("best_movie([\"a\", \"b\"])", best_movie(&["a", "b"])),
        Observation::new("inverse_head([2, 0])", inverse_head(&[2.0, 0.0])),
        Observation::new("get_even(4)", get_even(4)),
        Observation::new("get_even(5)", get_even(5)),
        Observation::new(
            "circle_from_shape(circle)",
            circle_from_shape(Shape::Circle(Circle { radius: 1.0 })),
        ),
        Observation::new(
            "circle_from_shape(square)",
            circle_from_shape(Shape::Square(Square { side: 2.0 })),
        ),
    ]
}

fn movies() -> Vec<Observation> {
    sample_movies()
        .iter()
        .map(|movie| Observation::new(&movie.title, movie_highlight(movie)))
        .collect()
}

fn checkout_lesson(total: u64) -> Vec<Observation> {
    let accounts = [
        ("account1", Account::open(70)),
        ("account2", Account::open(30)),
        ("account3", Account::frozen(100)),
    ];
    let checkout_total = checkout(&Cart::with_total(total));

    accounts
        .iter()
        .flat_map(|(name, account)| {
            [
                Observation::new(&format!("pay({total})({name})"), pay(total)(*account)),
                Observation::new(&format!("checkout({total})({name})"), checkout_total(*account)),
            ]
        })
        .collect()
}

fn user_decoding() -> Vec<Observation> {
    let encoded_user = base64_encode(r#"{"id":1,"name":"Dude"}"#);
    let encoded_not_user = base64_encode(r#"{"a":1,"b":2}"#);

    vec![
        Observation::new("json_parse('{\"foo\": \"bar\"}')", json_parse(r#"{"foo": "bar"}"#)),
        Observation::new("json_parse(\"{invalid}\")", json_parse("{invalid}")),
        Observation::new(
            "create_response({ balance: 100, success: true })",
            create_response(&json!({ "balance": 100, "success": true })),
        ),
        Observation::new("decode_user(encoded_user)", decode_user(&encoded_user)),
        Observation::new("decode_user(\"invalidBase64!!!\")", decode_user("invalidBase64!!!")),
        Observation::new("decode_user(encoded_not_user)", decode_user(&encoded_not_user)),
    ]
}

fn login_name() -> Vec<Observation> {
    ["a@b.cd", "1-123-123", "ftw?", "a@b"]
        .into_iter()
        .flat_map(|input| {
            [
                Observation::new(
                    &format!("validate_login_name({input:?})"),
                    validate_login_name(input),
                ),
                Observation::new(
                    &format!("describe_login_name({input:?})"),
                    describe_login_name(input),
                ),
            ]
        })
        .collect()
}

fn arrays() -> Vec<Observation> {
    vec![Observation::new(
        "count_sum_max_common([1, 2, 3], [4, 0, 7, 1])",
        count_sum_max_common(&[1, 2, 3], &[4, 0, 7, 1]),
    )]
}
