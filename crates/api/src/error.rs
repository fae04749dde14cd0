//! Error type definitions for GF(2^m) arithmetic operations

/// Primary error type for field arithmetic and encoding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand text does not match the declared encoding
    InvalidEncoding {
        /// Operation or field where the text was rejected
        context: &'static str,
        /// Why the text was rejected
        message: String,
    },

    /// Divisor is the zero polynomial
    DivisionByZero {
        /// Operation that received the zero divisor
        context: &'static str,
    },

    /// The zero polynomial has no multiplicative inverse
    ZeroHasNoInverse {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// The extended Euclidean process found no inverse. With a genuinely
    /// irreducible modulus this cannot happen for nonzero operands; it
    /// signals a reducible modulus sharing a factor with the operand.
    NoInverseExists {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Parameter that was rejected
        context: &'static str,
        /// Why the parameter was rejected
        message: String,
    },

    /// Other error
    Other {
        /// Where the error originated
        context: &'static str,
        /// Detailed error message
        message: String,
    },
}

/// Result type for field arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::ZeroHasNoInverse { .. } => Self::ZeroHasNoInverse { context },
            Self::NoInverseExists { .. } => Self::NoInverseExists { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Shorthand to create an InvalidParameter error
    pub fn parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding in {}: {}", context, message)
            }
            Self::DivisionByZero { context } => {
                write!(f, "Division by the zero polynomial in {}", context)
            }
            Self::ZeroHasNoInverse { context } => {
                write!(f, "Zero has no inverse in GF(2^m): {}", context)
            }
            Self::NoInverseExists { context } => {
                write!(f, "No inverse exists for operand in GF(2^m): {}", context)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter '{}': {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}
