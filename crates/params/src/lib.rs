//! Constant parameters for binary finite fields GF(2^m)
//!
//! Irreducible field polynomials for the standard binary field degrees,
//! stored as big-endian byte slices (bit `i` of the value is the
//! coefficient of x^i, so a degree-m polynomial occupies m+1 bits), plus
//! the bounds the request boundary validates against.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod gf2m;

pub use gf2m::{
    GF2_8_POLYNOMIAL, GF2_163_POLYNOMIAL, GF2_233_POLYNOMIAL, GF2_239_POLYNOMIAL,
    GF2_283_POLYNOMIAL, GF2_409_POLYNOMIAL, GF2_571_POLYNOMIAL, MAX_FIELD_DEGREE,
    STANDARD_FIELDS, SUPPORTED_WIDTHS,
};
