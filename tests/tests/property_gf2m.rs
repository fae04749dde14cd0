//! Property-based tests for the GF(2^m) engine and codec

use gfpoly_algorithms::{codec, codec::Encoding, degree, BinaryField};
use gfpoly_tests::{field_element, nonzero_field_element};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;

/// Carry-less polynomial product over GF(2)[x], no reduction.
fn clmul(a: &BigUint, b: &BigUint) -> BigUint {
    let mut result = BigUint::zero();
    for i in 0..b.bits() {
        if b.bit(i) {
            result ^= a << i;
        }
    }
    result
}

proptest! {
    #[test]
    fn add_equals_subtract(a in field_element(8), b in field_element(8)) {
        let field = BinaryField::new(8).unwrap();
        prop_assert_eq!(field.add(&a, &b), field.subtract(&a, &b));
    }

    #[test]
    fn add_is_self_inverse(a in field_element(8), b in field_element(8)) {
        let field = BinaryField::new(8).unwrap();
        let sum = field.add(&a, &b);
        prop_assert_eq!(field.add(&sum, &b), a);
    }

    #[test]
    fn multiply_commutes(a in field_element(163), b in field_element(163)) {
        let field = BinaryField::new(163).unwrap();
        prop_assert_eq!(field.multiply(&a, &b), field.multiply(&b, &a));
    }

    #[test]
    fn multiply_by_zero_is_zero(a in field_element(163)) {
        let field = BinaryField::new(163).unwrap();
        prop_assert!(field.multiply(&a, &BigUint::zero()).is_zero());
    }

    #[test]
    fn multiply_matches_reduce_of_carryless_product(
        a in field_element(163),
        b in field_element(163),
    ) {
        let field = BinaryField::new(163).unwrap();
        prop_assert_eq!(field.multiply(&a, &b), field.reduce(&clmul(&a, &b)));
    }

    #[test]
    fn multiply_by_inverse_is_one(a in nonzero_field_element(163)) {
        // degree 163 has a genuinely irreducible registry polynomial, so
        // every nonzero element must invert
        let field = BinaryField::new(163).unwrap();
        let inverse = field.invert(&a).unwrap();
        prop_assert_eq!(field.multiply(&a, &inverse), BigUint::one());
    }

    #[test]
    fn division_round_trips_through_multiply(
        a in field_element(8),
        b in nonzero_field_element(8),
    ) {
        let field = BinaryField::new(8).unwrap();
        let quotient = field.divide(&a, &b).unwrap();
        prop_assert_eq!(field.multiply(&quotient, &b), a);
    }

    #[test]
    fn long_division_identity(
        dividend in field_element(163),
        divisor in nonzero_field_element(163),
    ) {
        let field = BinaryField::new(163).unwrap();
        let (quotient, remainder) =
            field.divide_with_remainder(&dividend, &divisor).unwrap();
        prop_assert!(degree(&remainder) < degree(&divisor));
        prop_assert_eq!(clmul(&quotient, &divisor) ^ remainder, dividend);
    }

    #[test]
    fn codec_round_trips_at_every_width(value in field_element(16)) {
        for &width in gfpoly_params::SUPPORTED_WIDTHS {
            let encoded = codec::encode(&value, width as usize);
            prop_assert_eq!(
                codec::decode(encoded.hex.trim_start_matches("0x"), Encoding::Hex).unwrap(),
                value.clone()
            );
            prop_assert_eq!(
                codec::decode(encoded.bin.trim_start_matches("0b"), Encoding::Bin).unwrap(),
                value.clone()
            );
        }
    }
}

#[test]
fn zero_degree_field_is_rejected() {
    let err = BinaryField::new(0).unwrap_err();
    assert!(matches!(err, gfpoly_api::Error::InvalidParameter { .. }));
}
