//! Type class traits for wrapped values.
//!
//! - [`Functor`]: mapping over a wrapped value
//! - [`Monad`]: lifting values and sequencing wrapper-producing functions
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to express
//! "the same wrapper around a different type", which is what `fmap` and
//! `flat_map` return.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: the always-present wrapper
//!
//! # Examples
//!
//! ```rust
//! use functorial::typeclass::{Functor, Identity, Monad};
//!
//! let doubled = Some(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let sequenced = Identity::new(5)
//!     .flat_map(|x| Identity::new(x + 1))
//!     .fmap(|x| x * 2);
//! assert_eq!(sequenced, Identity(12));
//! ```

mod functor;
mod higher;
mod identity;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
