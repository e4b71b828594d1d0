//! Property-based tests for Applicative laws.
//!
//! Verifies that the Applicative implementations satisfy:
//!
//! - **Identity Law**: `pure(|x| x).apply(v) == v`
//! - **Homomorphism Law**: `pure(f).apply(pure(x)) == pure(f(x))`
//! - **Interchange Law**: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
//! - **Composition Law**:
//!   `pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))`
//! - **Product Consistency**: `a.product(b) == a.map2(b, |x, y| (x, y))`
//!
//! plus the structural contracts the cartesian instance promises: element
//! count and combination order.

use kinded::control::{Either, Sequence};
use kinded::typeclass::Applicative;
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn sequence_strategy() -> impl Strategy<Value = Sequence<i32>> {
    prop::collection::vec(any::<i32>(), 0..6).prop_map(Sequence::wrap)
}

fn function_strategy() -> impl Strategy<Value = fn(i32) -> i32> {
    prop_oneof![
        Just((|x: i32| x.wrapping_add(1)) as fn(i32) -> i32),
        Just((|x: i32| x.wrapping_mul(2)) as fn(i32) -> i32),
        Just((|x: i32| x.wrapping_sub(7)) as fn(i32) -> i32),
    ]
}

fn either_function_strategy() -> impl Strategy<Value = Either<String, fn(i32) -> i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        function_strategy().prop_map(Either::Right),
    ]
}

fn sequence_function_strategy() -> impl Strategy<Value = Sequence<fn(i32) -> i32>> {
    prop::collection::vec(function_strategy(), 0..4).prop_map(Sequence::wrap)
}

// The composition-law tests build the curried composer inline:
//
//     |f| move |g| move |x| f(g(x))
//
// Closures capturing only fn pointers, so every partially-applied stage
// stays Clone, which the cartesian instance needs.

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        let identity: Option<fn(i32) -> i32> = <Option<()>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value), value);
    }

    #[test]
    fn prop_option_homomorphism_law(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_mul(3);
        prop_assert_eq!(
            <Option<()>>::pure(function).apply(<Option<()>>::pure(value)),
            <Option<()>>::pure(function(value)),
        );
    }

    #[test]
    fn prop_option_interchange_law(
        holds_function in any::<bool>(),
        value in any::<i32>(),
    ) {
        let u: Option<fn(i32) -> i32> = if holds_function {
            Some(|x| x.wrapping_mul(7))
        } else {
            None
        };
        let left = u.apply(<Option<()>>::pure(value));
        let right = <Option<()>>::pure(move |f: fn(i32) -> i32| f(value)).apply(u);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_composition_law(
        u in prop::option::of(function_strategy()),
        v in prop::option::of(function_strategy()),
        w in any::<Option<i32>>(),
    ) {
        let compose = |f: fn(i32) -> i32| move |g: fn(i32) -> i32| move |x: i32| f(g(x));
        let composed = <Option<()>>::pure(compose).apply(u).apply(v).apply(w);
        prop_assert_eq!(composed, u.apply(v.apply(w)));
    }

    #[test]
    fn prop_option_product_consistency(a in any::<Option<i32>>(), b in any::<Option<i32>>()) {
        prop_assert_eq!(a.product(b), a.map2(b, |x, y| (x, y)));
    }

    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        let identity: Either<String, fn(i32) -> i32> = Either::Right(|x| x);
        prop_assert_eq!(identity.apply(value.clone()), value);
    }

    #[test]
    fn prop_either_homomorphism_law(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_mul(3);
        prop_assert_eq!(
            <Either<String, ()>>::pure(function).apply(<Either<String, ()>>::pure(value)),
            <Either<String, ()>>::pure(function(value)),
        );
    }

    #[test]
    fn prop_either_interchange_law(
        u in either_function_strategy(),
        value in any::<i32>(),
    ) {
        let left = u.clone().apply(<Either<String, ()>>::pure(value));
        let right = <Either<String, ()>>::pure(move |f: fn(i32) -> i32| f(value)).apply(u);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_composition_law(
        u in either_function_strategy(),
        v in either_function_strategy(),
        w in either_strategy(),
    ) {
        let compose = |f: fn(i32) -> i32| move |g: fn(i32) -> i32| move |x: i32| f(g(x));
        let composed = <Either<String, ()>>::pure(compose)
            .apply(u.clone())
            .apply(v.clone())
            .apply(w.clone());
        prop_assert_eq!(composed, u.apply(v.apply(w)));
    }

    #[test]
    fn prop_either_first_left_wins(
        first_error in any::<String>(),
        second in either_strategy(),
    ) {
        let first: Either<String, i32> = Either::Left(first_error.clone());
        prop_assert_eq!(
            first.map2(second, |a, b| a.wrapping_add(b)),
            Either::Left(first_error),
        );
    }

    #[test]
    fn prop_sequence_identity_law(value in sequence_strategy()) {
        let identity: Sequence<fn(i32) -> i32> = <Sequence<()>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value.clone()), value);
    }

    #[test]
    fn prop_sequence_homomorphism_law(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_mul(3);
        prop_assert_eq!(
            <Sequence<()>>::pure(function).apply(<Sequence<()>>::pure(value)),
            <Sequence<()>>::pure(function(value)),
        );
    }

    #[test]
    fn prop_sequence_interchange_law(
        u in sequence_function_strategy(),
        value in any::<i32>(),
    ) {
        let left = u.clone().apply(<Sequence<()>>::pure(value));
        let right = <Sequence<()>>::pure(move |f: fn(i32) -> i32| f(value)).apply(u);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_sequence_composition_law(
        u in sequence_function_strategy(),
        v in sequence_function_strategy(),
        w in sequence_strategy(),
    ) {
        let compose = |f: fn(i32) -> i32| move |g: fn(i32) -> i32| move |x: i32| f(g(x));
        let composed = <Sequence<()>>::pure(compose)
            .apply(u.clone())
            .apply(v.clone())
            .apply(w.clone());
        prop_assert_eq!(composed, u.apply(v.apply(w)));
    }

    #[test]
    fn prop_sequence_map2_length_is_product(
        left in sequence_strategy(),
        right in sequence_strategy(),
    ) {
        let expected = left.len() * right.len();
        let combined = left.map2(right, |a, b| a.wrapping_add(b));
        prop_assert_eq!(combined.len(), expected);
    }

    #[test]
    fn prop_sequence_map2_is_receiver_major(
        left in prop::collection::vec(any::<i16>(), 0..5),
        right in prop::collection::vec(any::<i16>(), 0..5),
    ) {
        let combined = Sequence::wrap(left.clone())
            .map2(Sequence::wrap(right.clone()), |a, b| (a, b));

        let mut expected = Vec::new();
        for a in &left {
            for b in &right {
                expected.push((*a, *b));
            }
        }
        prop_assert_eq!(combined.into_inner(), expected);
    }

    #[test]
    fn prop_product_left_and_right_agree_with_map2(
        a in any::<Option<i32>>(),
        b in any::<Option<i32>>(),
    ) {
        prop_assert_eq!(a.product_left(b), a.map2(b, |x, _| x));
        prop_assert_eq!(a.product_right(b), a.map2(b, |_, y| y));
    }
}
