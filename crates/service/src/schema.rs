//! Request payloads and schema validation
//!
//! Validation collects every violation before failing, so a client sees
//! the full list at once. The rules mirror the wire contract: `m` within
//! the supported degree range, `bits` one of the supported widths, and
//! per operand exactly one of the `bin`/`hex` fields (the one matching
//! the declared `type`) at the width the declared `bits` implies.

use crate::error::ServiceError;
use gfpoly_algorithms::codec::{self, Encoding};
use gfpoly_api::Error as ApiError;
use gfpoly_params::{MAX_FIELD_DEGREE, SUPPORTED_WIDTHS};
use serde::Deserialize;

/// Payload of a two-operand operation (add, subtract, multiply, divide).
#[derive(Debug, Clone, Deserialize)]
pub struct BinaryOpRequest {
    /// Field degree
    pub m: u32,
    /// Encoding width in bits
    pub bits: u32,
    /// Which operand fields carry the value
    #[serde(rename = "type")]
    pub encoding: Encoding,
    /// First operand, binary form
    #[serde(default)]
    pub bin1: Option<String>,
    /// First operand, hex form
    #[serde(default)]
    pub hex1: Option<String>,
    /// Second operand, binary form
    #[serde(default)]
    pub bin2: Option<String>,
    /// Second operand, hex form
    #[serde(default)]
    pub hex2: Option<String>,
}

/// Payload of a single-operand operation (modulo, invert).
#[derive(Debug, Clone, Deserialize)]
pub struct UnaryOpRequest {
    /// Field degree
    pub m: u32,
    /// Encoding width in bits
    pub bits: u32,
    /// Which operand field carries the value
    #[serde(rename = "type")]
    pub encoding: Encoding,
    /// Operand, binary form
    #[serde(default)]
    pub bin: Option<String>,
    /// Operand, hex form
    #[serde(default)]
    pub hex: Option<String>,
}

impl BinaryOpRequest {
    /// Validate the payload, returning both operand texts on success.
    pub fn validate(&self) -> Result<(&str, &str), ServiceError> {
        let mut errors = Vec::new();
        validate_common(self.m, self.bits, &mut errors);
        let first = validate_operand(
            self.encoding,
            self.bits,
            self.bin1.as_deref(),
            self.hex1.as_deref(),
            "bin1",
            "hex1",
            &mut errors,
        );
        let second = validate_operand(
            self.encoding,
            self.bits,
            self.bin2.as_deref(),
            self.hex2.as_deref(),
            "bin2",
            "hex2",
            &mut errors,
        );
        match (first, second) {
            (Some(first), Some(second)) if errors.is_empty() => Ok((first, second)),
            _ => Err(ServiceError::Validation(errors)),
        }
    }
}

impl UnaryOpRequest {
    /// Validate the payload, returning the operand text on success.
    pub fn validate(&self) -> Result<&str, ServiceError> {
        let mut errors = Vec::new();
        validate_common(self.m, self.bits, &mut errors);
        let operand = validate_operand(
            self.encoding,
            self.bits,
            self.bin.as_deref(),
            self.hex.as_deref(),
            "bin",
            "hex",
            &mut errors,
        );
        match operand {
            Some(operand) if errors.is_empty() => Ok(operand),
            _ => Err(ServiceError::Validation(errors)),
        }
    }
}

fn validate_common(m: u32, bits: u32, errors: &mut Vec<String>) {
    if m == 0 || m > MAX_FIELD_DEGREE {
        errors.push(format!("m must be in 1..={}, got {}", MAX_FIELD_DEGREE, m));
    }
    if !SUPPORTED_WIDTHS.contains(&bits) {
        errors.push(format!(
            "bits must be one of {:?}, got {}",
            SUPPORTED_WIDTHS, bits
        ));
    }
}

fn validate_operand<'a>(
    encoding: Encoding,
    bits: u32,
    bin: Option<&'a str>,
    hex: Option<&'a str>,
    bin_name: &str,
    hex_name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a str> {
    match (bin, hex) {
        (None, None) => {
            errors.push(format!(
                "either {} or {} must be provided",
                bin_name, hex_name
            ));
            return None;
        }
        (Some(_), Some(_)) => {
            errors.push(format!(
                "either {} or {} must be provided, not both",
                bin_name, hex_name
            ));
            return None;
        }
        _ => {}
    }

    let (name, text, expected_len) = match encoding {
        Encoding::Bin => match bin {
            Some(text) => (bin_name, text, bits as usize),
            None => {
                errors.push(format!("{} is required when type is bin", bin_name));
                return None;
            }
        },
        Encoding::Hex => match hex {
            Some(text) => (hex_name, text, bits as usize / 4),
            None => {
                errors.push(format!("{} is required when type is hex", hex_name));
                return None;
            }
        },
    };

    let mut valid = true;
    if text.len() != expected_len {
        errors.push(format!(
            "{} must be {} characters for bits={}",
            name, expected_len, bits
        ));
        valid = false;
    }
    if let Err(ApiError::InvalidEncoding { message, .. }) = codec::decode(text, encoding) {
        errors.push(format!("{}: {}", name, message));
        valid = false;
    }

    valid.then_some(text)
}
