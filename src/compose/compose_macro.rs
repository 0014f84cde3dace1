//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`, the mathematical
/// reading of composition. It is the mirror image of [`flow!`](crate::flow!):
/// `compose!(h, g, f)` builds the same function as `flow!(f, g, h)`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use fp_lessons::compose;
///
/// let size = |text: &str| text.len();
/// let at_least_three = |length: usize| length >= 3;
///
/// let is_long_enough = compose!(at_least_three, size);
/// assert!(is_long_enough("hello"));
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use fp_lessons::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn test_compose_runs_right_to_left() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = compose!(add_one, double);
        assert_eq!(composed(5), 11);
    }
}
