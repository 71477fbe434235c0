//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

#![cfg(all(feature = "typeclass", feature = "control"))]

use functorial::control::Maybe;
use functorial::typeclass::{Functor, Identity};
use proptest::prelude::*;

fn maybe_of<T: Arbitrary + 'static>() -> impl Strategy<Value = Maybe<T>> {
    any::<Option<T>>().prop_map(Maybe::of_nullable)
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Maybe<i32>
    #[test]
    fn prop_maybe_identity_law(value in maybe_of::<i32>()) {
        let result = value.fmap(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Maybe<i32>
    #[test]
    fn prop_maybe_composition_law(value in maybe_of::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Composition Law for Maybe<String> with a type change
    #[test]
    fn prop_maybe_string_composition_law(value in maybe_of::<String>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// The variant never changes under fmap
    #[test]
    fn prop_maybe_fmap_preserves_variant(value in maybe_of::<i32>()) {
        let mapped = value.fmap(|n| n.to_string());
        prop_assert_eq!(mapped.is_present(), value.is_present());
    }
}

// =============================================================================
// Identity<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Identity<String>
    #[test]
    fn prop_identity_wrapper_identity_law(value in any::<String>()) {
        let wrapped = Identity::new(value);
        let result = wrapped.clone().fmap(|x| x);
        prop_assert_eq!(result, wrapped);
    }

    /// Composition Law for Identity<i32>
    #[test]
    fn prop_identity_wrapper_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Identity::new(value).fmap(function1).fmap(function2);
        let right = Identity::new(value).fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Option / Result / Box Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Option<i32>
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for Result<i32, String>
    #[test]
    fn prop_result_composition_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Composition Law for Box<i32>
    #[test]
    fn prop_box_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Box::new(value).fmap(function1).fmap(function2);
        let right = Box::new(value).fmap(|x| function2(function1(x)));

        prop_assert_eq!(*left, *right);
    }
}

// =============================================================================
// Derived Operation Tests
// =============================================================================

proptest! {
    /// replace is fmap with a constant function
    #[test]
    fn prop_maybe_replace_is_fmap_const(
        original in maybe_of::<i32>(),
        replacement in any::<String>()
    ) {
        let left = original.replace(replacement.clone());
        let right = original.fmap(|_| replacement);
        prop_assert_eq!(left, right);
    }

    /// fmap_ref agrees with fmap and leaves the receiver intact
    #[test]
    fn prop_maybe_fmap_ref_consistent_with_fmap(value in maybe_of::<String>()) {
        let result_ref = value.fmap_ref(|s| s.len());
        let result_owned = value.clone().fmap(|s| s.len());
        prop_assert_eq!(result_ref, result_owned);
    }

    /// Maybe::Present and Identity agree
    #[test]
    fn prop_present_consistent_with_identity(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        let maybe_result = Maybe::of(value).fmap(function);
        let identity_result = Identity::new(value).fmap(function);

        prop_assert_eq!(maybe_result, Maybe::of(identity_result.into_inner()));
    }
}
