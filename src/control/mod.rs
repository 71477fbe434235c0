//! Control structures for functional programming.
//!
//! - [`Maybe`]: a value that is either present or absent, with
//!   short-circuiting `map` and `chain`
//!
//! # Examples
//!
//! ```rust
//! use functorial::control::Maybe;
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { Maybe::of("ada") } else { Maybe::empty() }
//! }
//!
//! let greeting = Maybe::of(1)
//!     .chain(find_user)
//!     .map(|name| format!("hello, {name}"));
//! assert_eq!(greeting, Maybe::Present("hello, ada".to_string()));
//!
//! let missing = Maybe::of(2).chain(find_user).map(|name| format!("hello, {name}"));
//! assert!(missing.is_absent());
//! ```

mod maybe;

pub use maybe::Maybe;
