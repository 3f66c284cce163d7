// ============================================================================
// Property Tests
// Algebraic laws of the arithmetic engine and the storage contract
// ============================================================================

use crate::numeric::BigNum;
use proptest::prelude::*;
use quickcheck::quickcheck;

fn finite(mantissa: u64, exponent: i64) -> BigNum {
    BigNum::from_u64(mantissa).mul_pow10(exponent)
}

fn any_big_num() -> impl Strategy<Value = BigNum> {
    prop_oneof![
        1 => Just(BigNum::zero()),
        1 => Just(BigNum::saturated()),
        8 => (1u64.., -40i64..450).prop_map(|(m, e)| finite(m, e)),
    ]
}

fn finite_big_num() -> impl Strategy<Value = BigNum> {
    (1u64.., -40i64..450).prop_map(|(m, e)| finite(m, e))
}

proptest! {
    #[test]
    fn storage_round_trip_keeps_every_field(x in any_big_num()) {
        let back = BigNum::from_storage(&x.to_storage()).unwrap();
        prop_assert_eq!(back.significand(), x.significand());
        prop_assert_eq!(back.exponent(), x.exponent());
        prop_assert_eq!(back.is_saturated(), x.is_saturated());
        prop_assert_eq!(back.precision(), x.precision());
    }

    #[test]
    fn saturation_absorbs(x in any_big_num()) {
        let sat = BigNum::saturated();
        prop_assert!(sat.add(&x).is_saturated());
        prop_assert!(x.add(&sat).is_saturated());
        prop_assert!(sat.sub(&x).is_saturated());
        prop_assert!(sat.mul_u64(3).is_saturated());
        if !x.is_zero() {
            prop_assert!(sat.mul_big_num_integer(&x).is_saturated());
        }
    }

    #[test]
    fn subtraction_clamps_at_zero(a in any_big_num(), b in any_big_num()) {
        prop_assert!(a.sub(&a).is_zero() || a.is_saturated());
        if b >= a && !a.is_saturated() {
            prop_assert!(a.sub(&b).is_zero());
        }
        prop_assert!(a.sub(&b) <= a);
    }

    #[test]
    fn addition_is_monotone(a in any_big_num(), b in any_big_num()) {
        let sum = a.add(&b);
        prop_assert!(sum >= a);
        prop_assert!(sum >= b);
    }

    #[test]
    fn addition_commutes(a in any_big_num(), b in any_big_num()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn ordering_is_antisymmetric(a in any_big_num(), b in any_big_num()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn log10_inverts_within_last_digit(m in 1u64..1_000_000_000_000, e in 20i64..200) {
        let v = finite(m, e).with_precision(12).unwrap();
        let back = BigNum::from_log10_with_precision(v.approx_log10(), 12).unwrap();
        let diff = if back >= v { back.sub(&v) } else { v.sub(&back) };
        prop_assert!(
            diff.is_zero() || diff.approx_log10() <= v.approx_log10() - 10.0,
            "{} came back as {}",
            v,
            back
        );
    }

    #[test]
    fn log10_inverts_to_f64_accuracy_at_default_precision(
        m in 1u64..,
        e in 20i64..200,
    ) {
        let v = finite(m, e);
        let back = BigNum::from_log10(v.approx_log10()).unwrap();
        let diff = if back >= v { back.sub(&v) } else { v.sub(&back) };
        prop_assert!(
            diff.is_zero() || diff.approx_log10() <= v.approx_log10() - 12.0,
            "{} came back as {}",
            v,
            back
        );
    }

    #[test]
    fn floor_never_exceeds_value(x in finite_big_num()) {
        let floored = x.floor_to_integer();
        prop_assert!(floored <= x);
        prop_assert!(floored.is_integer());
    }
}

#[test]
fn cmp_matches_machine_integers() {
    fn prop(a: u64, b: u64) -> bool {
        let x = BigNum::from_u64(a).with_precision(20).unwrap();
        let y = BigNum::from_u64(b).with_precision(20).unwrap();
        x.cmp(&y) == a.cmp(&b)
    }
    quickcheck(prop as fn(u64, u64) -> bool);
}

#[test]
fn add_matches_machine_integers() {
    fn prop(a: u32, b: u32) -> bool {
        let sum = BigNum::from_u64(u64::from(a)).add(&BigNum::from_u64(u64::from(b)));
        sum == BigNum::from_u64(u64::from(a) + u64::from(b))
    }
    quickcheck(prop as fn(u32, u32) -> bool);
}
