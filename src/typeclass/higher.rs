//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! [`TypeConstructor`] records the type a container is applied to and how to
//! re-apply the same container to another type, which is all [`Functor`] and
//! [`Monad`] need to describe `map` and `chain` generically.
//!
//! [`Functor`]: super::Functor
//! [`Monad`]: super::Monad
//!
//! # Example
//!
//! ```rust
//! use functorial::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = empty_like(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is the same type as `F`.
pub trait TypeConstructor {
    /// The type that this type constructor is applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`. The bound
    /// keeps the result chainable.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
