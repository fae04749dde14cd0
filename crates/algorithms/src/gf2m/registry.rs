//! Field degree to irreducible polynomial lookup

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

// Materialized once from the gfpoly-params byte constants; read-only for
// the lifetime of the process.
static STANDARD_POLYNOMIALS: Lazy<BTreeMap<u32, BigUint>> = Lazy::new(|| {
    gfpoly_params::STANDARD_FIELDS
        .iter()
        .map(|&(m, bytes)| (m, BigUint::from_bytes_be(bytes)))
        .collect()
});

/// Canonical irreducible polynomial for the field of degree `m`.
///
/// Standard degrees (8, 163, 233, 239, 283, 409, 571) come from the
/// [`gfpoly_params`] table. Every other degree falls back to the candidate
/// `(1 << (m - 1)) | 1`, which is kept for compatibility with existing
/// callers but is NOT guaranteed irreducible; for most degrees it is not
/// (any even-weight value is divisible by x + 1). Under such a modulus
/// [`BinaryField::invert`](super::BinaryField::invert) reports
/// `NoInverseExists` for valid nonzero elements sharing a factor with it.
/// Note also that the candidate has degree m - 1, not m, so unlike the
/// table entries it never clears bit m during the multiply fold.
///
/// Always returns a value; there are no error conditions. Degrees start
/// at 1, which [`BinaryField`](super::BinaryField) construction enforces
/// before looking anything up.
pub fn irreducible_polynomial(m: u32) -> BigUint {
    match STANDARD_POLYNOMIALS.get(&m) {
        Some(poly) => poly.clone(),
        None => (BigUint::one() << (m - 1)) | BigUint::one(),
    }
}
