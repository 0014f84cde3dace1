//! Optional values: inverses, list heads and narrowing shapes.

use fp_lessons::control::{Either, Maybe};
use fp_lessons::pipe;

/// `1 / x`, absent for zero.
pub fn inverse(x: f64) -> Maybe<f64> {
    if x == 0.0 {
        Maybe::none()
    } else {
        Maybe::some(1.0 / x)
    }
}

/// Describes the inverse of `x`.
///
/// # Examples
///
/// ```
/// use walkthrough::inverse::inverse_message;
///
/// assert_eq!(inverse_message(0.0), "Cannot get the inverse of 0.");
/// assert_eq!(inverse_message(2.0), "The inverse of 2 is 0.5");
/// ```
pub fn inverse_message(x: f64) -> String {
    pipe!(x, inverse).fold(
        || format!("Cannot get the inverse of {x}."),
        |ix| format!("The inverse of {x} is {ix}"),
    )
}

/// The inverse of `x`, or `0` when there is none.
pub fn safe_inverse(x: f64) -> f64 {
    pipe!(x, inverse).get_or_else(|| 0.0)
}

/// The inverse of `x`, or a label of a different type when there is none.
pub fn safe_inverse_or_label(x: f64) -> Either<&'static str, f64> {
    pipe!(x, inverse).get_or_else_widen(|| "string")
}

/// The first element.
pub fn head<A: Clone>(items: &[A]) -> Maybe<A> {
    Maybe::from_nullable(items.first().cloned())
}

/// The first title, upper-cased and labelled.
pub fn best_movie(titles: &[&str]) -> Maybe<String> {
    pipe!(titles, head)
        .map(|title| title.to_uppercase())
        .map(|title| format!("Best - {title}"))
}

/// The inverse of the first number.
pub fn inverse_head(numbers: &[f64]) -> Maybe<f64> {
    pipe!(numbers, head).chain(inverse)
}

/// Whether `n` is even.
pub const fn is_even(n: &i64) -> bool {
    *n % 2 == 0
}

/// `n` if it is even.
pub fn get_even(n: i64) -> Maybe<i64> {
    let even = Maybe::lift_predicate(is_even);
    even(n)
}

/// A circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Radius.
    pub radius: f64,
}

/// A square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    /// Side length.
    pub side: f64,
}

/// Either shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A square.
    Square(Square),
}

/// The circle inside `shape`; the payload is typed as [`Circle`], not
/// [`Shape`].
///
/// # Examples
///
/// ```
/// use walkthrough::inverse::{Circle, Shape, Square, circle_from_shape};
///
/// let circle = circle_from_shape(Shape::Circle(Circle { radius: 1.0 }));
/// let radius = circle.map(|circle| circle.radius);
/// assert_eq!(radius.into_option(), Some(1.0));
/// assert!(circle_from_shape(Shape::Square(Square { side: 2.0 })).is_empty());
/// ```
pub fn circle_from_shape(shape: Shape) -> Maybe<Circle> {
    Maybe::from_refinement(shape, |shape| match shape {
        Shape::Circle(circle) => Some(circle),
        Shape::Square(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Maybe::Empty)]
    #[case(2.0, Maybe::Present(0.5))]
    fn inverse_cases(#[case] x: f64, #[case] expected: Maybe<f64>) {
        assert_eq!(inverse(x), expected);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(2.0, 0.5)]
    fn safe_inverse_cases(#[case] x: f64, #[case] expected: f64) {
        assert!((safe_inverse(x) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn safe_inverse_or_label_widens_the_default() {
        assert_eq!(safe_inverse_or_label(0.0), Either::Left("string"));
        assert_eq!(safe_inverse_or_label(2.0), Either::Right(0.5));
    }

    #[rstest]
    fn head_of_empty_is_empty() {
        assert_eq!(head::<i32>(&[]), Maybe::Empty);
        assert_eq!(head(&[1, 2, 3]), Maybe::Present(1));
    }

    #[rstest]
    fn best_movie_labels_the_first_title() {
        assert_eq!(best_movie(&["a", "b"]), Maybe::Present("Best - A".to_string()));
        assert_eq!(best_movie(&[]), Maybe::Empty);
    }

    #[rstest]
    #[case(&[], Maybe::Empty)]
    #[case(&[0.0, 1.0], Maybe::Empty)]
    #[case(&[2.0, 0.0], Maybe::Present(0.5))]
    fn inverse_head_cases(#[case] numbers: &[f64], #[case] expected: Maybe<f64>) {
        assert_eq!(inverse_head(numbers), expected);
    }

    #[rstest]
    fn chain_into_inverse() {
        assert_eq!(Maybe::some(5.0).chain(inverse), Maybe::Present(0.2));
        assert_eq!(Maybe::some(0.0).chain(inverse), Maybe::Empty);
    }

    #[rstest]
    #[case(4, Maybe::Present(4))]
    #[case(5, Maybe::Empty)]
    #[case(-2, Maybe::Present(-2))]
    fn get_even_cases(#[case] n: i64, #[case] expected: Maybe<i64>) {
        assert_eq!(get_even(n), expected);
    }
}
