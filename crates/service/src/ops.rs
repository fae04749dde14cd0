//! Operation entry points
//!
//! One function per operation the boundary exposes. Each validates the
//! payload, decodes the operand text, runs the engine and re-encodes the
//! result at the requested width. Engine failures convert into
//! [`ServiceError`] and are logged on the way out.

use crate::error::ServiceError;
use crate::schema::{BinaryOpRequest, UnaryOpRequest};
use gfpoly_algorithms::{codec, BinaryField};
use num_bigint::BigUint;
use serde::Serialize;
use tracing::{debug, warn};

/// Response carrying a single encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueResponse {
    /// The operation result in both text forms
    pub result: codec::Encoded,
}

/// Response of polynomial long division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotientRemainderResponse {
    /// Quotient, hex form
    pub quotient_hex: String,
    /// Quotient, binary form
    pub quotient_bin: String,
    /// Remainder, hex form
    pub remainder_hex: String,
    /// Remainder, binary form
    pub remainder_bin: String,
}

/// Field addition of the two operands.
pub fn add(request: &BinaryOpRequest) -> Result<ValueResponse, ServiceError> {
    debug!(m = request.m, bits = request.bits, "add request");
    let (field, a, b) = prepare_binary(request)?;
    Ok(value_response(&field.add(&a, &b), request.bits))
}

/// Field subtraction of the two operands (identical to addition).
pub fn subtract(request: &BinaryOpRequest) -> Result<ValueResponse, ServiceError> {
    debug!(m = request.m, bits = request.bits, "subtract request");
    let (field, a, b) = prepare_binary(request)?;
    Ok(value_response(&field.subtract(&a, &b), request.bits))
}

/// Field multiplication of the two operands.
pub fn multiply(request: &BinaryOpRequest) -> Result<ValueResponse, ServiceError> {
    debug!(m = request.m, bits = request.bits, "multiply request");
    let (field, a, b) = prepare_binary(request)?;
    Ok(value_response(&field.multiply(&a, &b), request.bits))
}

/// Field division: first operand times the inverse of the second.
pub fn divide(request: &BinaryOpRequest) -> Result<ValueResponse, ServiceError> {
    debug!(m = request.m, bits = request.bits, "divide request");
    let (field, a, b) = prepare_binary(request)?;
    let quotient = field.divide(&a, &b).map_err(|err| {
        warn!(%err, "field division failed");
        ServiceError::from(err)
    })?;
    Ok(value_response(&quotient, request.bits))
}

/// Polynomial long division of the two operands.
pub fn divide_with_remainder(
    request: &BinaryOpRequest,
) -> Result<QuotientRemainderResponse, ServiceError> {
    debug!(m = request.m, bits = request.bits, "long division request");
    let (field, dividend, divisor) = prepare_binary(request)?;
    let (quotient, remainder) = field
        .divide_with_remainder(&dividend, &divisor)
        .map_err(|err| {
            warn!(%err, "long division failed");
            ServiceError::from(err)
        })?;

    let width = request.bits as usize;
    let quotient = codec::encode(&quotient, width);
    let remainder = codec::encode(&remainder, width);
    Ok(QuotientRemainderResponse {
        quotient_hex: quotient.hex,
        quotient_bin: quotient.bin,
        remainder_hex: remainder.hex,
        remainder_bin: remainder.bin,
    })
}

/// Reduce the operand modulo the field's irreducible polynomial.
pub fn modulo(request: &UnaryOpRequest) -> Result<ValueResponse, ServiceError> {
    debug!(m = request.m, bits = request.bits, "modulo request");
    let (field, poly) = prepare_unary(request)?;
    Ok(value_response(&field.reduce(&poly), request.bits))
}

/// Multiplicative inverse of the operand.
pub fn invert(request: &UnaryOpRequest) -> Result<ValueResponse, ServiceError> {
    debug!(m = request.m, bits = request.bits, "invert request");
    let (field, operand) = prepare_unary(request)?;
    let inverse = field.invert(&operand).map_err(|err| {
        warn!(%err, "inversion failed");
        ServiceError::from(err)
    })?;
    Ok(value_response(&inverse, request.bits))
}

fn prepare_binary(
    request: &BinaryOpRequest,
) -> Result<(BinaryField, BigUint, BigUint), ServiceError> {
    let (first, second) = request.validate()?;
    let a = codec::decode(first, request.encoding)?;
    let b = codec::decode(second, request.encoding)?;
    let field = BinaryField::new(request.m)?;
    Ok((field, a, b))
}

fn prepare_unary(request: &UnaryOpRequest) -> Result<(BinaryField, BigUint), ServiceError> {
    let operand = request.validate()?;
    let poly = codec::decode(operand, request.encoding)?;
    let field = BinaryField::new(request.m)?;
    Ok((field, poly))
}

fn value_response(value: &BigUint, bits: u32) -> ValueResponse {
    ValueResponse {
        result: codec::encode(value, bits as usize),
    }
}
