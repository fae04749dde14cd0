//! Irreducible polynomials for standard GF(2^m) degrees
//!
//! The degrees carried here are the ones used by common binary-curve
//! standards (SEC 2 / ANSI X9.62) plus the AES field. The polynomials are
//! trusted as irreducible; nothing in the workspace verifies that.

/// Largest field degree the request boundary accepts
pub const MAX_FIELD_DEGREE: u32 = 8192;

/// Encoding widths (in bits) the request boundary accepts
pub const SUPPORTED_WIDTHS: &[u32] = &[16, 32, 64, 128, 256];

/// x^8 + x^4 + x^3 + x + 1 (the AES field polynomial, 0x11B)
pub const GF2_8_POLYNOMIAL: &[u8] = &[0x01, 0x1B];

/// x^163 + x^7 + x^6 + x^3 + 1 (sect163 field polynomial)
pub const GF2_163_POLYNOMIAL: &[u8] = &[
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC9,
];

/// x^233 + x^74 + 1 (sect233 field polynomial)
pub const GF2_233_POLYNOMIAL: &[u8] = &[
    0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

/// x^239 + x^36 + 1 (ANSI X9.62 c2tnb239 field polynomial)
pub const GF2_239_POLYNOMIAL: &[u8] = &[
    0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10, 0x00, 0x00, 0x00, 0x01,
];

/// x^283 + x^12 + x^7 + x^5 + 1 (sect283 field polynomial)
pub const GF2_283_POLYNOMIAL: &[u8] = &[
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xA1,
];

/// x^409 + x^87 + 1 (sect409 field polynomial)
pub const GF2_409_POLYNOMIAL: &[u8] = &[
    0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01,
];

/// x^571 + x^10 + x^5 + x^2 + 1 (sect571 field polynomial)
pub const GF2_571_POLYNOMIAL: &[u8] = &[
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x25,
];

/// Degree-to-polynomial table of every standard field above
pub const STANDARD_FIELDS: &[(u32, &[u8])] = &[
    (8, GF2_8_POLYNOMIAL),
    (163, GF2_163_POLYNOMIAL),
    (233, GF2_233_POLYNOMIAL),
    (239, GF2_239_POLYNOMIAL),
    (283, GF2_283_POLYNOMIAL),
    (409, GF2_409_POLYNOMIAL),
    (571, GF2_571_POLYNOMIAL),
];
