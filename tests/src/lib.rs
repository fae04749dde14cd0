//! Shared helpers for the gfpoly integration test suite

use num_bigint::BigUint;
use proptest::prelude::*;

/// Strategy producing a field element of degree below `m`, as random
/// bytes masked down to m bits.
pub fn field_element(m: u32) -> impl Strategy<Value = BigUint> {
    let len = (m as usize + 7) / 8;
    prop::collection::vec(any::<u8>(), len).prop_map(move |bytes| {
        let mask = (BigUint::from(1u32) << m) - 1u32;
        BigUint::from_bytes_be(&bytes) & mask
    })
}

/// Strategy producing a nonzero field element of degree below `m`.
pub fn nonzero_field_element(m: u32) -> impl Strategy<Value = BigUint> {
    use num_traits::Zero;
    field_element(m).prop_filter("nonzero element", |value| !value.is_zero())
}
