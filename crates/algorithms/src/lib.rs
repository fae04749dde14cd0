//! GF(2^m) arithmetic primitives
//!
//! This crate is the computational core of the gfpoly workspace: binary
//! finite field arithmetic over polynomials represented as
//! arbitrary-precision unsigned integers (bit `i` of a value is the
//! coefficient of x^i), the registry mapping field degrees to their
//! irreducible polynomials, and the fixed-width hex/binary text codec the
//! request boundary feeds operands through.
//!
//! Every operation is a pure function of its inputs. Nothing here blocks,
//! retries or holds mutable state; the registry table is materialized once
//! and read-only afterwards.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Field arithmetic engine and registry
pub mod gf2m;
pub use gf2m::{degree, BinaryField};

// Fixed-width hex/binary text codec
pub mod codec;
pub use codec::{decode, encode, Encoded, Encoding};

// Error module and re-exports
pub use gfpoly_api::error;
pub use gfpoly_api::{Error, Result};
