use log::trace;
use rug::Integer;
use thiserror::Error;

/// Smallest supported base
pub const MIN_BASE: u32 = 2;
/// Largest supported base, using digits `0-9` and letters `a-z`
pub const MAX_BASE: u32 = 36;

#[derive(Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DecodeError {
    #[error("Invalid base `{base}`: must be an integer between 2 and 36")]
    InvalidBase { base: String },
    #[error("Invalid digit '{digit}' at position {pos} for base {base}")]
    InvalidDigit { digit: char, pos: usize, base: u32 },
    #[error("Cannot decode an empty digit string")]
    Empty,
}

/// Decode a digit string in the given base into an exact integer
///
/// Digits are `0-9` followed by `a-z` (case-insensitive). The most
/// significant digit comes first.
pub fn decode(value: &str, base: u32) -> Result<Integer, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase {
            base: base.to_string(),
        });
    }
    if value.is_empty() {
        return Err(DecodeError::Empty);
    }
    let mut res = Integer::new();
    for (pos, digit) in value.chars().enumerate() {
        let d = digit
            .to_digit(MAX_BASE)
            .filter(|d| *d < base)
            .ok_or(DecodeError::InvalidDigit { digit, pos, base })?;
        res *= base;
        res += d;
    }
    trace!("Decoded {value} in base {base}: {res}");
    Ok(res)
}

/// Decode a digit string with a base given in textual form
///
/// A base specifier that is not a decimal integer is reported as
/// `InvalidBase`.
pub fn decode_with_base_str(
    value: &str,
    base: &str,
) -> Result<Integer, DecodeError> {
    let parsed = parse_base(base)?;
    decode(value, parsed)
}

/// Parse a textual base specifier and check its range
pub fn parse_base(base: &str) -> Result<u32, DecodeError> {
    let invalid = || DecodeError::InvalidBase {
        base: base.to_owned(),
    };
    let trimmed = base.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match trimmed.parse::<u32>() {
        Ok(b) if (MIN_BASE..=MAX_BASE).contains(&b) => Ok(b),
        _ => Err(invalid()),
    }
}
