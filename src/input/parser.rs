/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Validators for single lines of user input
//!
//! Every validator trims surrounding whitespace first. Keyword answers are
//! case-folded to uppercase before being matched.

use super::errors::{InputError, Result};
use crate::physics::EnergyUnit;
use std::num::IntErrorKind;

/// Answer to the "repeat?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatChoice {
    /// Run another calculation
    Repeat,
    /// Terminate the program
    Stop,
}

/// Parse a strictly positive base-10 integer that fits in an `i32`
pub fn parse_positive_integer(text: &str) -> Result<u32> {
    let trimmed = text.trim();

    let value: i32 = trimmed.parse().map_err(|err: std::num::ParseIntError| {
        match err.kind() {
            IntErrorKind::Empty | IntErrorKind::InvalidDigit => {
                InputError::NonNumeric(trimmed.to_string())
            }
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                InputError::OutOfRange(trimmed.to_string())
            }
            _ => InputError::Unknown(err.to_string()),
        }
    })?;

    if value <= 0 {
        return Err(InputError::OutOfRange(trimmed.to_string()));
    }

    u32::try_from(value).map_err(|err| InputError::Unknown(err.to_string()))
}

/// Parse "J" or "eV"
pub fn parse_unit(text: &str) -> Result<EnergyUnit> {
    text.parse().map_err(InputError::UnrecognizedUnit)
}

/// Parse "Y" or "N"
pub fn parse_repeat(text: &str) -> Result<RepeatChoice> {
    match text.trim().to_uppercase().as_str() {
        "Y" => Ok(RepeatChoice::Repeat),
        "N" => Ok(RepeatChoice::Stop),
        other => Err(InputError::UnrecognizedRepeat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_integer_accepts() {
        assert_eq!(parse_positive_integer("3").unwrap(), 3);
        assert_eq!(parse_positive_integer(" 7").unwrap(), 7);
        assert_eq!(parse_positive_integer("42\n").unwrap(), 42);
        assert_eq!(parse_positive_integer("+5").unwrap(), 5);
        assert_eq!(parse_positive_integer("2147483647").unwrap(), 2_147_483_647);
    }

    #[test]
    fn test_positive_integer_non_numeric() {
        for text in ["abc", "", "   ", "3abc", "1.5", "-"] {
            assert!(
                matches!(parse_positive_integer(text), Err(InputError::NonNumeric(_))),
                "expected non-numeric for {text:?}"
            );
        }
    }

    #[test]
    fn test_positive_integer_out_of_range() {
        for text in ["0", "-5", "2147483648", "-99999999999"] {
            assert!(
                matches!(parse_positive_integer(text), Err(InputError::OutOfRange(_))),
                "expected out of range for {text:?}"
            );
        }
    }

    #[test]
    fn test_unit_tokens() {
        assert_eq!(parse_unit(" j ").unwrap(), EnergyUnit::Joule);
        assert_eq!(parse_unit("Ev\n").unwrap(), EnergyUnit::ElectronVolt);
        assert!(matches!(
            parse_unit("k"),
            Err(InputError::UnrecognizedUnit(token)) if token == "K"
        ));
    }

    #[test]
    fn test_repeat_tokens() {
        assert_eq!(parse_repeat("y").unwrap(), RepeatChoice::Repeat);
        assert_eq!(parse_repeat(" N \n").unwrap(), RepeatChoice::Stop);
        assert!(matches!(
            parse_repeat("yes"),
            Err(InputError::UnrecognizedRepeat(_))
        ));
    }
}
