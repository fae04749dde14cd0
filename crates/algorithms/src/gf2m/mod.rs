//! Binary finite field arithmetic
//!
//! Elements of GF(2^m) are polynomials over GF(2) of degree below `m`,
//! encoded as [`BigUint`] values whose bit `i` is the coefficient of x^i.
//! Addition is XOR, multiplication is shift-and-add with reduction folded
//! into every shift step, and inversion runs the binary extended Euclidean
//! algorithm using only shifts and XORs.
//!
//! Operands are expected to be already reduced (degree < m). The
//! exceptions are [`BinaryField::reduce`], which exists precisely to bring
//! an over-wide polynomial back into the field, and
//! [`BinaryField::divide_with_remainder`], which is plain polynomial long
//! division over GF(2)[x] and never consults the modulus.

mod registry;

pub use registry::irreducible_polynomial;

use crate::error::{Error, Result};
use core::mem;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Degree of a polynomial: the index of its highest set bit.
///
/// Returns `None` for the zero polynomial, which has no degree.
#[inline]
pub fn degree(poly: &BigUint) -> Option<u64> {
    if poly.is_zero() {
        None
    } else {
        Some(poly.bits() - 1)
    }
}

/// A binary finite field GF(2^m): a degree together with the irreducible
/// polynomial multiplication reduces by.
///
/// The modulus is trusted. If a caller supplies (or the registry falls
/// back to) a reducible polynomial, [`invert`](Self::invert) reports
/// `NoInverseExists` for operands sharing a factor with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryField {
    m: u32,
    modulus: BigUint,
}

impl BinaryField {
    /// Build the field of degree `m` using the registry polynomial.
    ///
    /// Fails with `InvalidParameter` when `m` is zero or beyond
    /// [`MAX_FIELD_DEGREE`](gfpoly_params::MAX_FIELD_DEGREE).
    pub fn new(m: u32) -> Result<Self> {
        if m == 0 || m > gfpoly_params::MAX_FIELD_DEGREE {
            return Err(Error::parameter(
                "m",
                format!(
                    "field degree must be in 1..={}, got {}",
                    gfpoly_params::MAX_FIELD_DEGREE,
                    m
                ),
            ));
        }
        Ok(Self {
            m,
            modulus: irreducible_polynomial(m),
        })
    }

    /// Build a field with a caller-supplied modulus.
    ///
    /// The modulus must have degree exactly `m` (bit `m` set); its
    /// irreducibility is trusted, not checked.
    pub fn with_modulus(m: u32, modulus: BigUint) -> Result<Self> {
        if m == 0 || m > gfpoly_params::MAX_FIELD_DEGREE {
            return Err(Error::parameter(
                "m",
                format!(
                    "field degree must be in 1..={}, got {}",
                    gfpoly_params::MAX_FIELD_DEGREE,
                    m
                ),
            ));
        }
        if degree(&modulus) != Some(u64::from(m)) {
            return Err(Error::parameter(
                "modulus",
                format!("modulus must have degree exactly {}", m),
            ));
        }
        Ok(Self { m, modulus })
    }

    /// The field degree m.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.m
    }

    /// The field's irreducible polynomial (bit-width m+1).
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Field addition: XOR of the coefficient vectors.
    ///
    /// Total and self-inverse (`add(a, a) == 0`). No reduction is needed:
    /// XOR never raises the degree past `max(deg a, deg b)`.
    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a ^ b
    }

    /// Field subtraction. In characteristic 2 every element is its own
    /// additive inverse, so this is identical to [`add`](Self::add).
    #[inline]
    pub fn subtract(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.add(a, b)
    }

    /// Field multiplication with on-the-fly reduction.
    ///
    /// Shift-and-add over the bits of `b`, LSB first: whenever the current
    /// bit is set, the accumulator absorbs the current shift of `a`; after
    /// every step `a` shifts left once and folds back below degree m the
    /// moment bit m becomes set. Reducing at each shift rather than once
    /// at the end keeps intermediate values within m+1 bits.
    pub fn multiply(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let mut result = BigUint::zero();
        let mut a = a.clone();
        let mut b = b.clone();

        while !b.is_zero() {
            if b.bit(0) {
                result ^= &a;
            }

            a <<= 1u32;
            if a.bit(u64::from(self.m)) {
                a ^= &self.modulus;
            }

            b >>= 1u32;
        }

        result
    }

    /// Polynomial long division over GF(2)[x], returning `(quotient,
    /// remainder)` with `deg(remainder) < deg(divisor)`.
    ///
    /// While the remainder's degree is at least the divisor's, the divisor
    /// is shifted up to the remainder's degree and XOR-subtracted; the
    /// corresponding quotient bit is set. The remainder's degree strictly
    /// decreases every iteration, so the loop terminates.
    ///
    /// Fails with `DivisionByZero` when the divisor is the zero
    /// polynomial.
    pub fn divide_with_remainder(
        &self,
        dividend: &BigUint,
        divisor: &BigUint,
    ) -> Result<(BigUint, BigUint)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero {
                context: "polynomial long division",
            });
        }

        let divisor_bits = divisor.bits();
        let mut quotient = BigUint::zero();
        let mut remainder = dividend.clone();

        while remainder.bits() >= divisor_bits {
            let shift = remainder.bits() - divisor_bits;
            quotient ^= BigUint::one() << shift;
            remainder ^= divisor << shift;
        }

        Ok((quotient, remainder))
    }

    /// Reduce an arbitrary-width polynomial modulo the field polynomial.
    ///
    /// Same shift-and-XOR degree reduction as long division, looping until
    /// the value's degree drops below the modulus degree. Accepts inputs
    /// of any width (e.g. an unreduced 2m-bit product).
    pub fn reduce(&self, poly: &BigUint) -> BigUint {
        let modulus_bits = self.modulus.bits();
        let mut poly = poly.clone();

        while poly.bits() >= modulus_bits {
            let shift = poly.bits() - modulus_bits;
            poly ^= &self.modulus << shift;
        }

        poly
    }

    /// Multiplicative inverse of a nonzero element, by the binary extended
    /// Euclidean algorithm.
    ///
    /// Maintains the pairs `(u, g1)` and `(v, g2)` starting from `(a, 1)`
    /// and `(modulus, 0)`. Each round swaps the pairs if needed so that
    /// `deg(u) >= deg(v)`, then cancels u's leading term:
    /// `u ^= v << s; g1 ^= g2 << s` with `s = deg(u) - deg(v)`. When `u`
    /// reaches 1 the invariant `u = g1 * a (mod modulus)` makes `g1` the
    /// inverse; when `v` collapses to 0 first the gcd is larger than 1 and
    /// no inverse exists.
    ///
    /// Fails with `ZeroHasNoInverse` for `a == 0` and `NoInverseExists`
    /// when the modulus is not actually irreducible and shares a factor
    /// with `a`.
    pub fn invert(&self, a: &BigUint) -> Result<BigUint> {
        if a.is_zero() {
            return Err(Error::ZeroHasNoInverse {
                context: "field inversion",
            });
        }

        let one = BigUint::one();
        let mut u = a.clone();
        let mut v = self.modulus.clone();
        let mut g1 = BigUint::one();
        let mut g2 = BigUint::zero();

        loop {
            // bits() orders polynomials by degree, with bits(0) == 0
            if u.bits() < v.bits() {
                mem::swap(&mut u, &mut v);
                mem::swap(&mut g1, &mut g2);
            }

            if u == one {
                return Ok(self.reduce(&g1));
            }
            if v.is_zero() {
                return Err(Error::NoInverseExists {
                    context: "field inversion",
                });
            }

            let shift = u.bits() - v.bits();
            u ^= &v << shift;
            g1 ^= &g2 << shift;
        }
    }

    /// Field division: `dividend * inverse(divisor)`.
    ///
    /// Fails with `DivisionByZero` when the divisor is zero and
    /// `NoInverseExists` when the divisor is not invertible under the
    /// field's modulus.
    pub fn divide(&self, dividend: &BigUint, divisor: &BigUint) -> Result<BigUint> {
        let inverse = self.invert(divisor).map_err(|err| match err {
            Error::ZeroHasNoInverse { .. } => Error::DivisionByZero {
                context: "field division",
            },
            other => other,
        })?;

        Ok(self.multiply(dividend, &inverse))
    }
}
