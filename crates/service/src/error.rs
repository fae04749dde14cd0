//! Boundary error type and status mapping

use gfpoly_api::Error as ApiError;
use thiserror::Error;

/// Failures a request can surface, each mapped to a client-visible status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request payload violated the schema; carries every violation
    /// found, not just the first.
    #[error("invalid request: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Inversion of the zero polynomial.
    #[error("zero has no inverse in GF(2^m)")]
    ZeroHasNoInverse,

    /// The operand is not invertible under the field's modulus.
    #[error("no inverse exists for operand in GF(2^m)")]
    NoInverseExists,

    /// Anything unexpected; details are logged, not echoed to the client.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    /// The HTTP-shaped status this error maps to at the transport:
    /// 400 for schema violations, 404 for zero-divisor/zero-inverse, 405
    /// for a non-invertible divisor, 500 otherwise.
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::DivisionByZero | ServiceError::ZeroHasNoInverse => 404,
            ServiceError::NoInverseExists => 405,
            ServiceError::Internal => 500,
        }
    }
}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DivisionByZero { .. } => ServiceError::DivisionByZero,
            ApiError::ZeroHasNoInverse { .. } => ServiceError::ZeroHasNoInverse,
            ApiError::NoInverseExists { .. } => ServiceError::NoInverseExists,
            ApiError::InvalidEncoding { message, .. } => ServiceError::Validation(vec![message]),
            ApiError::InvalidParameter { context, message } => {
                ServiceError::Validation(vec![format!("{}: {}", context, message)])
            }
            ApiError::Other { .. } => ServiceError::Internal,
        }
    }
}
