//! Luhn (mod 10) checksum helpers.

use crate::error::{Error, Result};

/// Characters skipped when reading a number.
const SEPARATORS: &[char] = &[' ', '-', '/', '*'];

fn parse_digits(number: &str) -> Result<Vec<u32>> {
    number
        .chars()
        .filter(|ch| !SEPARATORS.contains(ch))
        .map(|ch| {
            ch.to_digit(10)
                .ok_or_else(|| Error::InvalidInput(format!("luhn: '{ch}' is not a digit")))
        })
        .collect()
}

/// Sum of digits read right to left, doubling every other one.
fn weighted_sum(digits: &[u32], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, &digit)| {
            if (idx % 2 == 0) == double_rightmost {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}

/// Check digit to append to `payload` so the full number passes Luhn.
pub fn luhn_checksum(payload: &str) -> Result<u8> {
    let digits = parse_digits(payload)?;
    Ok(luhn_check_digit(&digits))
}

/// Check digit for a payload already split into digit values.
///
/// Values above 9 are reduced mod 10, so this never fails.
pub fn luhn_check_digit(digits: &[u32]) -> u8 {
    let digits: Vec<u32> = digits.iter().map(|digit| digit % 10).collect();
    let sum = weighted_sum(&digits, true);
    ((10 - sum % 10) % 10) as u8
}

/// Whether `number`, check digit included, passes Luhn.
pub fn luhn_is_valid(number: &str) -> bool {
    match parse_digits(number) {
        Ok(digits) if !digits.is_empty() => weighted_sum(&digits, false) % 10 == 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(luhn_checksum("7992739871").unwrap(), 3);
        assert_eq!(luhn_checksum("49015420323751").unwrap(), 8);
        assert_eq!(luhn_checksum("0").unwrap(), 0);
    }

    #[test]
    fn check_digit_over_digit_values() {
        assert_eq!(luhn_check_digit(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1]), 3);
        assert_eq!(luhn_check_digit(&[]), 0);
        assert_eq!(luhn_check_digit(&[17, 9, 9, 2, 7, 3, 9, 8, 7, 1]), 3);
    }

    #[test]
    fn empty_payload_has_zero_check_digit() {
        assert_eq!(luhn_checksum("").unwrap(), 0);
    }

    #[test]
    fn separators_are_ignored() {
        assert_eq!(luhn_checksum("799 273-9871").unwrap(), 3);
        assert!(luhn_is_valid("4539 1488 0343 6467"));
        assert!(luhn_is_valid("79927398713"));
    }

    #[test]
    fn rejects_non_digits() {
        let err = luhn_checksum("12a4").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(!luhn_is_valid("12a4"));
        assert!(!luhn_is_valid(""));
    }

    #[test]
    fn detects_single_digit_errors() {
        assert!(!luhn_is_valid("79927398710"));
        assert!(!luhn_is_valid("79927398714"));
    }

    #[test]
    fn appended_check_digit_validates() {
        for payload in ["1", "12", "123456789", "490154203237518", "000000"] {
            let check = luhn_checksum(payload).unwrap();
            assert!(luhn_is_valid(&format!("{payload}{check}")), "{payload}");
        }
    }
}
