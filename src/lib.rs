//! # functorial
//!
//! Function composition, the Functor and Monad type classes, and two small
//! containers that implement them.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor) and [`Monad`](typeclass::Monad),
//!   built on a GAT-based [`TypeConstructor`](typeclass::TypeConstructor)
//! - **Function Composition**: [`compose!`], [`pipe!`], a runtime
//!   [`Pipeline`](compose::Pipeline), and point-free `lift_map` / `lift_chain`
//! - **Containers**: [`Identity`](typeclass::Identity) (always present) and
//!   [`Maybe`](control::Maybe) (present or absent)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and `Identity`
//! - `compose`: Function composition utilities
//! - `control`: The `Maybe` container
//! - `serde`: Serialization for the containers
//! - `cli`: The `functorial` walkthrough binary (scenarios live in
//!   `walkthrough` whenever `typeclass`, `compose` and `control` are on)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "typeclass", feature = "control"))]
//! # {
//! use functorial::prelude::*;
//! use functorial::text::{capitalize, enhance};
//!
//! let greeting = Maybe::of_nullable(Some("functional programming".to_string()))
//!     .map(capitalize)
//!     .map(enhance);
//!
//! assert_eq!(
//!     greeting,
//!     Maybe::Present("Functional programming is awesome".to_string())
//! );
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use functorial::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(all(feature = "typeclass", feature = "control"))]
pub mod text;

#[cfg(all(feature = "typeclass", feature = "compose", feature = "control"))]
pub mod walkthrough;
