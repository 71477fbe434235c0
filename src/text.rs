//! String transforms used by the walkthrough and the examples.
//!
//! Every function here takes and returns owned `String`s so they line up with
//! each other inside [`compose!`](crate::compose!), [`Maybe::map`] and
//! [`Pipeline`](crate::compose::Pipeline).

use crate::control::Maybe;

/// The suffix appended by [`enhance`].
pub const DEFAULT_SUFFIX: &str = " is awesome";

/// Uppercases the first character.
///
/// # Examples
///
/// ```
/// use functorial::text::capitalize;
///
/// assert_eq!(capitalize("functional".to_string()), "Functional");
/// assert_eq!(capitalize("éclair".to_string()), "Éclair");
/// assert_eq!(capitalize(String::new()), "");
/// ```
pub fn capitalize(text: String) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}

/// Appends [`DEFAULT_SUFFIX`].
///
/// # Examples
///
/// ```
/// use functorial::text::enhance;
///
/// assert_eq!(enhance("Rust".to_string()), "Rust is awesome");
/// ```
pub fn enhance(text: String) -> String {
    enhance_with(DEFAULT_SUFFIX)(text)
}

/// Returns a transform that appends `suffix`.
pub fn enhance_with(suffix: &str) -> impl Fn(String) -> String + Send + Sync + 'static {
    let suffix = suffix.to_owned();
    move |mut text| {
        text.push_str(&suffix);
        text
    }
}

/// Writes `text` to standard output and passes it through unchanged.
///
/// This is the only stage in the crate with a side effect.
#[allow(clippy::print_stdout)]
pub fn announce(text: String) -> String {
    println!("{text}");
    text
}

/// Keeps `text` only if it contains something other than whitespace.
///
/// # Examples
///
/// ```
/// use functorial::control::Maybe;
/// use functorial::text::non_blank;
///
/// assert_eq!(non_blank("hi".to_string()), Maybe::Present("hi".to_string()));
/// assert_eq!(non_blank("   ".to_string()), Maybe::Absent);
/// ```
pub fn non_blank(text: String) -> Maybe<String> {
    if text.trim().is_empty() {
        Maybe::empty()
    } else {
        Maybe::of(text)
    }
}
