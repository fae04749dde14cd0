//! Fixed-width hexadecimal/binary text codec
//!
//! Converts between operand text and the arbitrary-precision integers the
//! engine works on. Decoding is strict: upper-case hex digits only, no
//! prefixes, no empty input. Encoding renders both forms at once, zero
//! padded to a declared bit width, with `0x`/`0b` prefixes.

use crate::error::{Error, Result};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operand text encoding: binary or hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// Binary digits matching `^[01]+$`
    Bin,
    /// Upper-case hexadecimal digits matching `^[0-9A-F]+$`
    Hex,
}

impl Encoding {
    /// The wire name of this encoding (`"bin"` / `"hex"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Bin => "bin",
            Encoding::Hex => "hex",
        }
    }

    fn radix(&self) -> u32 {
        match self {
            Encoding::Bin => 2,
            Encoding::Hex => 16,
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Encoding::Bin => matches!(c, '0' | '1'),
            Encoding::Hex => matches!(c, '0'..='9' | 'A'..='F'),
        }
    }
}

/// Both fixed-width text renditions of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Encoded {
    /// `0x`-prefixed upper-case hex, zero padded to width/4 digits
    pub hex: String,
    /// `0b`-prefixed binary, zero padded to width digits
    pub bin: String,
}

/// Decode operand text into a polynomial.
///
/// Fails with `InvalidEncoding` when the text is empty or contains a
/// character outside the encoding's alphabet (lower-case hex included).
pub fn decode(text: &str, encoding: Encoding) -> Result<BigUint> {
    if text.is_empty() {
        return Err(Error::InvalidEncoding {
            context: "operand decoding",
            message: format!("empty {} operand", encoding.as_str()),
        });
    }
    if let Some(bad) = text.chars().find(|&c| !encoding.accepts(c)) {
        return Err(Error::InvalidEncoding {
            context: "operand decoding",
            message: format!(
                "character {:?} is not a valid {} digit",
                bad,
                encoding.as_str()
            ),
        });
    }

    // alphabet is validated above, so parsing can only fail on internal
    // misuse; surface that instead of panicking
    BigUint::parse_bytes(text.as_bytes(), encoding.radix()).ok_or_else(|| Error::InvalidEncoding {
        context: "operand decoding",
        message: format!("unparsable {} operand", encoding.as_str()),
    })
}

/// Encode a value at a fixed bit width.
///
/// The hex form gets `width_bits / 4` digits, the binary form
/// `width_bits` digits, both zero padded and prefixed. Values wider than
/// `width_bits` render at their natural width; nothing is truncated.
pub fn encode(value: &BigUint, width_bits: usize) -> Encoded {
    Encoded {
        hex: format!("0x{:0width$X}", value, width = width_bits / 4),
        bin: format!("0b{:0width$b}", value, width = width_bits),
    }
}
