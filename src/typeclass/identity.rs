//! Identity wrapper type - the always-present container.
//!
//! `Identity` holds exactly one value and adds no behavior of its own. It is
//! the simplest [`Functor`] and [`Monad`]: `fmap` applies the function,
//! `flat_map` returns the function's result, and nothing is ever skipped.

use super::{Functor, Monad, TypeConstructor};

/// A wrapper that always holds a value.
///
/// # Examples
///
/// ```rust
/// use functorial::typeclass::{Functor, Identity};
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.fmap(|n| n + 1).into_inner(), 43);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

static_assertions::assert_impl_all!(Identity<String>: Send, Sync, Clone);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> Identity<Identity<A>> {
    /// Removes one layer of nesting.
    #[inline]
    pub fn flatten(self) -> Identity<A> {
        self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[rstest]
    fn identity_fmap_always_applies() {
        let mut calls = 0;
        let result = Identity::new(20).fmap(|n| {
            calls += 1;
            n + 1
        });
        assert_eq!(result, Identity(21));
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn identity_chain_does_not_double_wrap() {
        let result: Identity<i32> = Identity::new(5)
            .chain(|x| Identity::new(x + 1))
            .chain(|x| Identity::new(x * 2));
        assert_eq!(result, Identity(12));
    }

    #[rstest]
    fn identity_fmap_with_wrapping_function_nests() {
        let nested: Identity<Identity<i32>> = Identity::new(5).fmap(Identity::new);
        assert_eq!(nested.flatten(), Identity(5));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MAX)]
    fn identity_right_identity_law(#[case] value: i32) {
        let wrapped = Identity::new(value);
        assert_eq!(wrapped.flat_map(Identity::new), wrapped);
    }

    #[rstest]
    fn identity_debug_output() {
        let debug_output = format!("{:?}", Identity::new(42));
        assert_eq!(debug_output, "Identity(42)");
    }
}
