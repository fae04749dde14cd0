//! Request boundary for the gfpoly arithmetic engine
//!
//! This crate is the seam an HTTP binding (or any other transport) calls
//! into: deserializable request payloads, schema validation that collects
//! every violation, operation entry points that decode operands, run the
//! engine and re-encode results at the requested width, and an error type
//! that maps onto client-visible status codes. No transport lives here:
//! the host server owns routing and concurrency, and each entry point is
//! a pure function of its request.

#![forbid(unsafe_code)]

pub mod error;
pub mod ops;
pub mod schema;

pub use error::ServiceError;
pub use ops::{
    add, divide, divide_with_remainder, invert, modulo, multiply, subtract,
    QuotientRemainderResponse, ValueResponse,
};
pub use schema::{BinaryOpRequest, UnaryOpRequest};
