//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which chains functions from
//! left to right: the first function listed is the first one applied.

/// Composes functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// The output type of each function must match the input type of the next
/// one; mismatches and an empty argument list are compile errors.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use functorial::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = g(f(x)) = double(add_one(5)) = 12
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 12);
/// ```
///
/// ## Type conversion
///
/// ```
/// use functorial::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(to_string, get_length);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## String transforms
///
/// ```
/// use functorial::compose;
///
/// fn shout(text: String) -> String { text.to_uppercase() }
/// fn exclaim(text: String) -> String { text + "!" }
///
/// let headline = compose!(shout, exclaim);
/// assert_eq!(headline("test".to_string()), "TEST!");
/// ```
///
/// ## Empty composition does not compile
///
/// ```compile_fail
/// use functorial::compose;
///
/// let nothing = compose!();
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        compile_error!("compose! requires at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g, ...)(x) = compose!(g, ...)(f(x))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::compose!($($remaining_functions),+);
        move |input| remaining(first(input))
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
    fn test_compose_two_applies_left_first() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = compose!(add_one, double);
        assert_eq!(composed(5), 12);
    }

    #[test]
    fn test_compose_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // add_one(double(square(3))) = 19
        let composed = compose!(square, double, add_one);
        assert_eq!(composed(3), 19);
    }

    #[test]
    fn test_compose_trailing_comma() {
        let negate = |x: i32| -x;
        let composed = compose!(negate, negate,);
        assert_eq!(composed(4), 4);
    }
}
