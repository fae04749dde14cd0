//! # gfpoly
//!
//! Arithmetic over binary finite fields GF(2^m), with polynomials
//! represented as arbitrary-precision unsigned integers (bit `i` is the
//! coefficient of x^i).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gfpoly = "0.1"
//! ```
//!
//! ```
//! use gfpoly::prelude::*;
//! use num_bigint::BigUint;
//!
//! let field = BinaryField::new(8)?;
//! let product = field.multiply(&BigUint::from(0x1Au32), &BigUint::from(0x2Bu32));
//! assert_eq!(product, BigUint::from(0x93u32));
//! # Ok::<(), gfpoly::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `service` (default): the validated request/response boundary
//! - `serde`: serde derives on the codec types
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`gfpoly-api`]: error taxonomy and result types
//! - [`gfpoly-params`]: standard field polynomial constants
//! - [`gfpoly-algorithms`]: the arithmetic engine, registry and codec
//! - [`gfpoly-service`]: request validation and status mapping

// Core re-exports (always available)
pub use gfpoly_algorithms as algorithms;
pub use gfpoly_api as api;
pub use gfpoly_params as params;

// Feature-gated re-exports
#[cfg(feature = "service")]
pub use gfpoly_service as service;

/// Common imports for gfpoly users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the engine surface
    pub use crate::algorithms::{
        codec::{decode, encode, Encoded, Encoding},
        gf2m::irreducible_polynomial,
        BinaryField,
    };

    #[cfg(feature = "service")]
    pub use crate::service::{BinaryOpRequest, ServiceError, UnaryOpRequest};
}
