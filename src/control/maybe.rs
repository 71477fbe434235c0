//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Present(A)` or `Absent`. Mapping and chaining over
//! `Absent` return `Absent` without calling the supplied function, so a
//! pipeline of transformations needs no null checks between stages: absence
//! flows through untouched and is inspected once, at the end.
//!
//! # Examples
//!
//! ```rust
//! use functorial::control::Maybe;
//!
//! let present = Maybe::of(20).map(|n| n + 1).chain(|n| Maybe::of(n * 2));
//! assert_eq!(present, Maybe::Present(42));
//!
//! let absent = Maybe::<i32>::empty().map(|n| n + 1).chain(|n| Maybe::of(n * 2));
//! assert_eq!(absent, Maybe::Absent);
//!
//! let described = present.fold(|| "nothing".to_string(), |n| format!("got {n}"));
//! assert_eq!(described, "got 42");
//! ```

use std::fmt;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `A` - The type of the value when present
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A value is present.
    Present(A),
    /// No value.
    Absent,
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` unconditionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// assert_eq!(Maybe::of("text"), Maybe::Present("text"));
    /// ```
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Converts an `Option`, mapping `None` to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// assert_eq!(Maybe::of_nullable(Some(3)), Maybe::Present(3));
    /// assert_eq!(Maybe::<i32>::of_nullable(None), Maybe::Absent);
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// `function` is not called when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(2).map(|n| n * 10), Maybe::Present(20));
    /// assert_eq!(Maybe::<i32>::Absent.map(|n| n * 10), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a `Maybe`-producing `function` to a present value and returns
    /// its result unchanged.
    ///
    /// `function` is not called when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::of(n / 2) } else { Maybe::empty() }
    /// }
    ///
    /// assert_eq!(Maybe::of(8).chain(half), Maybe::Present(4));
    /// assert_eq!(Maybe::of(7).chain(half), Maybe::Absent);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps a present value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    /// Borrows the content, producing a `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Handles both variants, returning a single result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::of(4);
    /// assert_eq!(present.fold(|| 0, |n| n * 2), 8);
    ///
    /// let absent: Maybe<i32> = Maybe::empty();
    /// assert_eq!(absent.fold(|| 0, |n| n * 2), 0);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_absent: F, on_present: G) -> T
    where
        F: FnOnce() -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the present value or computes one with `default`.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one layer of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// let nested = Maybe::of(5).map(Maybe::of);
    /// assert_eq!(nested.flatten(), Maybe::Present(5));
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.chain(|inner| inner)
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        Self::of_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}
