//! Integer to binary and hexadecimal conversion.
//!
//! Non-negative values are written in plain positional notation, most
//! significant digit first, without leading zeros. Negative values are
//! encoded as fixed-width two's complement: 10 bits for binary, 40 bits for
//! hexadecimal.
//!
//! The field is never widened. A negative value whose magnitude does not fit
//! keeps receiving the field size until it becomes non-negative, so the
//! result is `n mod 2^bits`. For binary that means anything below `-512`
//! comes out as a small positive pattern that no longer reflects the sign.
//!
//! ```rust
//! use linestats::convert::{to_binary, to_hexadecimal};
//!
//! assert_eq!(to_binary(5), "101");
//! assert_eq!(to_binary(-1), "1111111111");
//! assert_eq!(to_hexadecimal(-1), "FFFFFFFFFF");
//! ```

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A fixed-width two's-complement field in a given radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth {
    pub bits: u32,
    pub radix: u32,
}

/// 10-bit binary field.
pub const BINARY_FIELD: FixedWidth = FixedWidth { bits: 10, radix: 2 };

/// 40-bit hexadecimal field.
pub const HEX_FIELD: FixedWidth = FixedWidth { bits: 40, radix: 16 };

impl FixedWidth {
    /// `2^bits`, the value added to negative inputs.
    pub const fn size(&self) -> i64 {
        1i64 << self.bits
    }

    /// Smallest value the field represents faithfully.
    pub const fn min_signed(&self) -> i64 {
        -(self.size() / 2)
    }

    /// Encode `value`, applying two's complement to negatives.
    pub fn encode(&self, value: i64) -> String {
        let unsigned = if value < 0 {
            value.rem_euclid(self.size()) as u64
        } else {
            value as u64
        };
        to_radix(unsigned, self.radix)
    }
}

/// Digits of `value` in `radix`, most significant first.
fn to_radix(mut value: u64, radix: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let radix = u64::from(radix);
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Binary representation, 10-bit two's complement for negatives.
pub fn to_binary(value: i64) -> String {
    BINARY_FIELD.encode(value)
}

/// Uppercase hexadecimal representation, 40-bit two's complement for negatives.
pub fn to_hexadecimal(value: i64) -> String {
    HEX_FIELD.encode(value)
}

/// One converted input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    /// 1-based line number of the value in the input.
    pub item: usize,
    pub value: i64,
    pub binary: String,
    pub hexadecimal: String,
}

pub fn convert(item: usize, value: i64) -> ConversionRecord {
    ConversionRecord {
        item,
        value,
        binary: to_binary(value),
        hexadecimal: to_hexadecimal(value),
    }
}
