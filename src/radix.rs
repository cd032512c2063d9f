use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 36;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("base {0} is outside of the supported range [2, 36]")]
    InvalidBase(u32),
    #[error("character {character:?} is not a valid digit in base {base}")]
    InvalidDigit { character: char, base: u32 },
    #[error("numeral string is empty")]
    EmptyNumeral,
}

/// Decodes a numeral string written in `base` into an unbounded non-negative integer.
///
/// Digits are `0-9` then `a-z` (case-insensitive) for the values 10 to 35, most significant
/// digit first. Surrounding whitespace is ignored.
pub fn decode(numeral: &str, base: u32) -> Result<BigUint, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase(base));
    }
    let numeral = numeral.trim();
    if numeral.is_empty() {
        return Err(DecodeError::EmptyNumeral);
    }

    let mut value = BigUint::zero();
    for character in numeral.chars() {
        // `to_digit` rejects anything outside of the alphabet as well as digits >= base
        let digit = character
            .to_digit(base)
            .ok_or(DecodeError::InvalidDigit { character, base })?;
        value = value * base + digit;
    }
    Ok(value)
}
