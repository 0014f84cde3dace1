//! The `flow!` macro for left-to-right function composition.

/// Composes functions from left to right into a new function.
///
/// `flow!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the output type of
/// each function must match the input type of the next one. Unlike
/// [`pipe!`](crate::pipe!), nothing is applied until the resulting closure
/// is called.
///
/// The first function may take several arguments packed as a tuple:
///
/// ```
/// use fp_lessons::flow;
///
/// let concat = |(first, second): (&str, &str)| format!("{first}{second}");
/// let size = |text: String| text.trim().len();
/// let at_least_three = |length: usize| length >= 3;
///
/// let is_strings_valid = flow!(concat, size, at_least_three);
/// assert!(is_strings_valid((" hi ", "dude ")));
/// ```
///
/// # Syntax
///
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g)` - Returns `|x| g(f(x))`
/// - `flow!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use fp_lessons::flow;
///
/// let size = |text: &str| text.len();
/// let at_least_three = |length: usize| length >= 3;
///
/// let is_long_enough = flow!(size, at_least_three);
/// assert!(is_long_enough("hello"));
/// assert!(!is_long_enough("hi"));
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::flow!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
