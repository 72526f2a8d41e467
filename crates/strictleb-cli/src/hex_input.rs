//! Hex input parsing shared by `decode` and `scan`.
//!
//! Accepted forms, all of which yield `[0xE5, 0x8E, 0x26]`:
//!
//! ```text
//! e58e26
//! e5 8e 26
//! 0xE5,0x8E,0x26
//! E5, 8E, 26
//! ```
//!
//! Each whitespace- or comma-separated token may carry a `0x` prefix. A
//! single-digit token is one byte, so `0x7` is `0x07`. Any other token with
//! an odd number of digits is rejected.
use anyhow::{Context, Result, bail};

pub fn parse_hex(parts: &[String]) -> Result<Vec<u8>> {
    let mut digits = String::new();

    for token in parts
        .iter()
        .flat_map(|part| part.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|token| !token.is_empty())
    {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        match token.len() {
            1 => digits.push('0'),
            n if n % 2 == 1 => bail!("odd number of hex digits in {token:?}"),
            _ => {}
        }
        digits.push_str(token);
    }

    if digits.is_empty() {
        bail!("no hex bytes given");
    }

    hex::decode(&digits).with_context(|| format!("invalid hex input {digits:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[&str]) -> Result<Vec<u8>> {
        let owned: Vec<String> = input.iter().map(ToString::to_string).collect();
        parse_hex(&owned)
    }

    #[test]
    fn accepts_common_forms() {
        let expected = vec![0xE5, 0x8E, 0x26];
        assert_eq!(parse(&["e58e26"]).unwrap(), expected);
        assert_eq!(parse(&["e5 8e 26"]).unwrap(), expected);
        assert_eq!(parse(&["0xE5,0x8E,0x26"]).unwrap(), expected);
        assert_eq!(parse(&["E5,", "8E,", "26"]).unwrap(), expected);
    }

    #[test]
    fn pads_single_digit_tokens() {
        assert_eq!(parse(&["0x7", "0x80"]).unwrap(), vec![0x07, 0x80]);
        assert_eq!(parse(&["e5 8e 2"]).unwrap(), vec![0xE5, 0x8E, 0x02]);
    }

    #[test]
    fn rejects_odd_multibyte_token() {
        let err = parse(&["e58e2"]).unwrap_err();
        assert!(err.to_string().contains("odd number of hex digits"));
        assert!(parse(&["0x123"]).is_err());
        assert!(parse(&["e5", "8e2"]).is_err());
    }

    #[test]
    fn rejects_empty_and_non_hex() {
        assert!(parse(&[" , "]).is_err());
        assert!(parse(&["zz"]).is_err());
    }
}
