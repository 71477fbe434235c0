//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that always returns the same value (K combinator)
//! - [`lift_map`]: A curried, wrapper-aware `fmap`
//! - [`lift_chain`]: A curried, wrapper-aware `flat_map`
//!
//! The lifted forms take the transformation first and the wrapper later,
//! which lets `fmap` and `flat_map` steps sit inside [`compose!`](crate::compose!)
//! like any other function.

use crate::typeclass::{Functor, Monad};

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose!(identity, f)` and `compose!(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use functorial::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use functorial::compose::constant;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Turns `function` into a function over wrappers that calls `fmap`.
///
/// `lift_map(f)(wrapped) == wrapped.fmap(f)`.
///
/// # Examples
///
/// ```
/// use functorial::compose;
/// use functorial::compose::lift_map;
///
/// let pipeline = compose!(
///     lift_map::<Option<i32>, _, _>(|n| n + 1),
///     lift_map::<Option<i32>, _, _>(|n| n * 2),
/// );
///
/// assert_eq!(pipeline(Some(5)), Some(12));
/// assert_eq!(pipeline(None), None);
/// ```
#[inline]
pub fn lift_map<M, B, F>(function: F) -> impl Fn(M) -> M::WithType<B>
where
    M: Functor,
    F: Fn(M::Inner) -> B,
{
    move |wrapped: M| wrapped.fmap(&function)
}

/// Turns a wrapper-producing `function` into a function over wrappers that
/// calls `flat_map`.
///
/// `lift_chain(f)(wrapped) == wrapped.flat_map(f)`.
///
/// # Examples
///
/// ```
/// use functorial::compose::lift_chain;
///
/// let halve = lift_chain::<Option<i32>, _, _>(|n| (n % 2 == 0).then_some(n / 2));
///
/// assert_eq!(halve(Some(10)), Some(5));
/// assert_eq!(halve(Some(7)), None);
/// assert_eq!(halve(None), None);
/// ```
#[inline]
pub fn lift_chain<M, B, F>(function: F) -> impl Fn(M) -> M::WithType<B>
where
    M: Monad,
    F: Fn(M::Inner) -> M::WithType<B>,
{
    move |wrapped: M| wrapped.flat_map(&function)
}
