/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for interactive input

use std::io;
use thiserror::Error;

/// Errors that can occur while reading and validating console input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid argument: {0:?} is not a whole number")]
    NonNumeric(String),

    #[error("Out of range: {0:?} is not a positive whole number")]
    OutOfRange(String),

    #[error("Unrecognized unit: {0:?}")]
    UnrecognizedUnit(String),

    #[error("Unrecognized repeat answer: {0:?}")]
    UnrecognizedRepeat(String),

    #[error("Unexpected parse failure: {0}")]
    Unknown(String),

    #[error("Gave up on {field} after {attempts} invalid attempts")]
    TooManyAttempts { field: &'static str, attempts: u32 },

    #[error("Input stream closed")]
    EndOfInput,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl InputError {
    /// Whether the error is bad user input, resolved by asking again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InputError::NonNumeric(_)
                | InputError::OutOfRange(_)
                | InputError::UnrecognizedUnit(_)
                | InputError::UnrecognizedRepeat(_)
                | InputError::Unknown(_)
        )
    }

    /// Fixed message printed before the field is prompted again, if any
    pub fn reprompt_message(&self) -> Option<&'static str> {
        match self {
            InputError::NonNumeric(_) => {
                Some("Invalid argument: please enter a positive whole number.")
            }
            InputError::OutOfRange(_) => {
                Some("Out of range: please enter a positive whole number.")
            }
            InputError::Unknown(_) => Some("Unexpected error reading input, please try again."),
            _ => None,
        }
    }
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
