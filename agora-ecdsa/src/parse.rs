use crate::Error;

use num_bigint::BigInt;
use num_traits::Num;

/// Parses a decimal or `0x`-prefixed hexadecimal integer.
pub fn parse_int(input: &str) -> Result<BigInt, Error> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parsed = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => BigInt::from_str_radix(hex, 16),
        None => BigInt::from_str_radix(unsigned, 10),
    };

    // NOTE the sign is handled above, so `from_str_radix` must not
    // accept a second one
    match parsed {
        Ok(value) if !unsigned.starts_with(['+', '-']) => {
            Ok(if negative { -value } else { value })
        }
        _ => Err(Error::InvalidInteger(input.to_string())),
    }
}
