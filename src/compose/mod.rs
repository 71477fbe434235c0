//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions left-to-right into a new function
//! - [`pipe!`]: Apply functions left-to-right to a value immediately
//! - [`Pipeline`]: Runtime composition of any number of `A -> A` stages
//! - [`compose_all`]: Fold an ordered sequence of `A -> A` functions into one
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`lift_map`], [`lift_chain`]: Curried `fmap` / `flat_map` that slot into
//!   a composition
//!
//! # Examples
//!
//! ## Function Composition
//!
//! ```
//! use functorial::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = g(f(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 12);
//! ```
//!
//! ## Composing over wrapped values
//!
//! ```
//! use functorial::compose;
//! use functorial::compose::{lift_chain, lift_map};
//!
//! fn parse(text: String) -> Option<i32> {
//!     text.trim().parse().ok()
//! }
//!
//! let parse_and_double = compose!(
//!     lift_chain::<Option<String>, _, _>(parse),
//!     lift_map::<Option<i32>, _, _>(|n| n * 2),
//! );
//!
//! assert_eq!(parse_and_double(Some(" 21 ".to_string())), Some(42));
//! assert_eq!(parse_and_double(Some("many".to_string())), None);
//! assert_eq!(parse_and_double(None), None);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`

mod compose_macro;
mod pipe_macro;
mod pipeline;
mod utils;

pub use pipeline::{ComposeError, Pipeline, Stage, compose_all};
pub use utils::{constant, identity, lift_chain, lift_map};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
