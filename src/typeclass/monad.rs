//! Monad type class - sequencing computations that produce wrapped values.
//!
//! A `Monad` is a [`Functor`] with two more operations:
//!
//! - [`pure`](Monad::pure) (also called *unit* or *of*) lifts a plain value
//!   into the simplest wrapper holding it.
//! - [`flat_map`](Monad::flat_map) (also called *chain* or *bind*) feeds the
//!   wrapped value to a function that already returns a wrapper, and hands
//!   that wrapper back as-is. Where `fmap` with such a function would produce
//!   a wrapper inside a wrapper, `flat_map` never does.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functorial::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .chain(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::functor::Functor;

/// A type class for wrappers that support sequencing.
///
/// # Laws
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// m.flat_map(Self::pure) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use functorial::typeclass::{Identity, Monad};
///
/// let result = Identity::new(5)
///     .chain(|x| Identity::new(x + 1))
///     .chain(|x| Identity::new(x * 2));
/// assert_eq!(result, Identity::new(12));
/// ```
pub trait Monad: Functor {
    /// Lifts a plain value into the wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::typeclass::Monad;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a wrapper-producing function to the wrapped value.
    ///
    /// The function's result is returned directly. Wrappers without a value
    /// return their empty form and never call `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(x.flat_map(|n| Some(n * 2)), Some(10));
    ///
    /// let z = Some(5);
    /// assert_eq!(z.flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Alias for [`flat_map`](Monad::flat_map) matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// An empty `self` short-circuits and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Monad for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> Box<B>,
    {
        function(*self)
    }
}
