//! Small string and number helpers, combined with `pipe!` and `flow!`.

use fp_lessons::{flow, pipe};

/// Number of characters in `text`.
pub fn size(text: &str) -> usize {
    text.chars().count()
}

/// Whether `length` is at least 3.
pub const fn at_least_3(length: usize) -> bool {
    length >= 3
}

/// `text` without leading and trailing whitespace.
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// Joins two strings.
pub fn concat((first, second): (&str, &str)) -> String {
    format!("{first}{second}")
}

/// Whether `text` has at least 3 characters.
pub fn is_long_enough(text: &str) -> bool {
    let check = flow!(size, at_least_3);
    check(text)
}

/// Whether `text` has at least 3 characters once trimmed.
///
/// # Examples
///
/// ```
/// use walkthrough::pipelines::is_valid;
///
/// assert!(!is_valid(" hi "));
/// assert!(is_valid(" hey "));
/// ```
pub fn is_valid(text: &str) -> bool {
    let check = flow!(trim, size, at_least_3);
    check(text)
}

/// Whether the concatenation of two strings is valid.
pub fn is_strings_valid(first: &str, second: &str) -> bool {
    pipe!((first, second), concat, |joined: String| is_valid(&joined))
}

/// Sum of the pairwise maxima of two lists, over their common length.
///
/// # Examples
///
/// ```
/// use walkthrough::pipelines::count_sum_max_common;
///
/// assert_eq!(count_sum_max_common(&[1, 2, 3], &[4, 0, 7, 1]), 13);
/// ```
pub fn count_sum_max_common(first: &[i64], second: &[i64]) -> i64 {
    first
        .iter()
        .zip(second)
        .map(|(left, right)| *left.max(right))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn pipe_reads_left_to_right() {
        assert_eq!(pipe!("hello", size), 5);
        assert!(pipe!("hello", size, at_least_3));
        assert!(!pipe!(" hi ", trim, size, at_least_3));
    }

    #[rstest]
    #[case("hello", true)]
    #[case("hi", false)]
    fn is_long_enough_cases(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_long_enough(text), expected);
    }

    #[rstest]
    fn is_strings_valid_trims_the_concatenation() {
        assert!(is_strings_valid(" hi ", "dude "));
        assert!(!is_strings_valid(" h", "i "));
    }

    #[rstest]
    #[case(&[], &[1, 2], 0)]
    #[case(&[1, 2, 3], &[4, 0, 7, 1], 13)]
    #[case(&[-5, -1], &[-3, -4], -4)]
    fn count_sum_max_common_cases(
        #[case] first: &[i64],
        #[case] second: &[i64],
        #[case] expected: i64,
    ) {
        assert_eq!(count_sum_max_common(first, second), expected);
    }

    proptest! {
        #[test]
        fn count_sum_max_common_is_symmetric(
            first in prop::collection::vec(-1000_i64..1000, 0..20),
            second in prop::collection::vec(-1000_i64..1000, 0..20),
        ) {
            prop_assert_eq!(
                count_sum_max_common(&first, &second),
                count_sum_max_common(&second, &first)
            );
        }
    }
}
