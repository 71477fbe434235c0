//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, the same value `compose!(f, g, h)(x)`
/// produces. Where [`compose!`](crate::compose!) builds a function, `pipe!`
/// applies each stage immediately, so a stage only needs to be [`FnOnce`].
/// `pipe!(x)` is `x`.
///
/// # Examples
///
/// ```
/// use functorial::pipe;
///
/// fn capitalize(text: String) -> String {
///     let mut characters = text.chars();
///     characters
///         .next()
///         .map(|first| first.to_uppercase().chain(characters).collect())
///         .unwrap_or_default()
/// }
/// fn enhance(text: String) -> String { text + " is awesome" }
///
/// assert_eq!(pipe!("rust".to_string(), capitalize, enhance), "Rust is awesome");
/// ```
///
/// ## Agreement with compose
///
/// ```
/// use functorial::{compose, pipe};
///
/// let trim = |text: String| text.trim().to_string();
/// let exclaim = |text: String| text + "!";
///
/// assert_eq!(
///     pipe!("  hi  ".to_string(), trim, exclaim),
///     compose!(trim, exclaim)("  hi  ".to_string()),
/// );
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $stage:expr)* $(,)?) => {{
        let value = $value;
        $(
            let value = $stage(value);
        )*
        value
    }};
}
