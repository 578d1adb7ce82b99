/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Blocking prompt loops over a line-oriented console
//!
//! A [`Prompter`] writes a prompt, reads one line and validates it, asking
//! again until the answer is valid. Bad answers never escape as errors unless
//! an attempt limit was configured.

use super::errors::{InputError, Result};
use super::parser::{parse_positive_integer, parse_repeat, parse_unit, RepeatChoice};
use crate::physics::EnergyUnit;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Prompt asking for the unit of the result
pub const UNIT_PROMPT: &str = "Would you like the energy in J or eV?\nEnter 'J' or 'eV': ";
/// Prompt repeated after an unrecognized unit
pub const UNIT_RETRY_PROMPT: &str = "Please enter 'J' or 'eV': ";
/// Prompt asking whether to run another calculation
pub const REPEAT_PROMPT: &str = "Do you want to repeat? Y/N: ";
/// Prompt repeated after an unrecognized repeat answer
pub const REPEAT_RETRY_PROMPT: &str = "Please enter 'Y' or 'N': ";

/// Reads validated answers from `R`, writing prompts to `W`
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<u32>,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter that asks again without limit
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: None,
            line: Vec::new(),
        }
    }

    /// Give up on a field after `max_attempts` invalid answers
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Ask for a strictly positive integer
    pub fn read_positive_integer(&mut self, field: &'static str, prompt: &str) -> Result<u32> {
        self.ask(field, prompt, prompt, parse_positive_integer)
    }

    /// Ask for the unit of the result
    pub fn read_unit(&mut self) -> Result<EnergyUnit> {
        self.ask("unit", UNIT_PROMPT, UNIT_RETRY_PROMPT, parse_unit)
    }

    /// Ask whether to run another calculation
    pub fn read_repeat(&mut self) -> Result<RepeatChoice> {
        self.ask("repeat", REPEAT_PROMPT, REPEAT_RETRY_PROMPT, parse_repeat)
    }

    /// Write one full line of output
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the prompter, returning the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask<T, F>(
        &mut self,
        field: &'static str,
        prompt: &str,
        retry_prompt: &str,
        parse: F,
    ) -> Result<T>
    where
        T: std::fmt::Debug,
        F: Fn(&str) -> Result<T>,
    {
        let mut attempts = 0;
        let mut current_prompt = prompt;

        loop {
            write!(self.writer, "{current_prompt}")?;
            self.writer.flush()?;

            match self.next_line().and_then(&parse) {
                Ok(value) => {
                    debug!("{field}: accepted {value:?}");
                    return Ok(value);
                }
                Err(err) if err.is_recoverable() => {
                    warn!("{field}: {err}");
                    if let Some(message) = err.reprompt_message() {
                        writeln!(self.writer, "{message}")?;
                    }

                    attempts += 1;
                    if let Some(limit) = self.max_attempts {
                        if attempts >= limit {
                            return Err(InputError::TooManyAttempts { field, attempts });
                        }
                    }
                    current_prompt = retry_prompt;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Read one line; bytes that are not UTF-8 count as an unreadable answer
    fn next_line(&mut self) -> Result<&str> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        std::str::from_utf8(&self.line).map_err(|err| InputError::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_integer_reprompts_until_valid() {
        let mut p = prompter("abc\n-5\n0\n 7\n");
        let value = p.read_positive_integer("atomic number", "Enter the atomic number: ");
        assert_eq!(value.unwrap(), 7);

        let expected = "Enter the atomic number: \
                        Invalid argument: please enter a positive whole number.\n\
                        Enter the atomic number: \
                        Out of range: please enter a positive whole number.\n\
                        Enter the atomic number: \
                        Out of range: please enter a positive whole number.\n\
                        Enter the atomic number: ";
        assert_eq!(output(p), expected);
    }

    #[test]
    fn test_unit_reprompts_with_short_prompt() {
        let mut p = prompter("k\n ev \n");
        assert_eq!(p.read_unit().unwrap(), EnergyUnit::ElectronVolt);
        assert_eq!(output(p), format!("{UNIT_PROMPT}{UNIT_RETRY_PROMPT}"));
    }

    #[test]
    fn test_repeat_reprompts() {
        let mut p = prompter("maybe\n\nn\n");
        assert_eq!(p.read_repeat().unwrap(), RepeatChoice::Stop);
        assert_eq!(
            output(p),
            format!("{REPEAT_PROMPT}{REPEAT_RETRY_PROMPT}{REPEAT_RETRY_PROMPT}")
        );
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("abc\n");
        assert!(matches!(
            p.read_positive_integer("n", "n: "),
            Err(InputError::EndOfInput)
        ));
    }

    #[test]
    fn test_attempt_limit() {
        let mut p = prompter("x\ny\nz\n3\n").with_max_attempts(Some(2));
        match p.read_positive_integer("final quantum number", "n: ") {
            Err(InputError::TooManyAttempts { field, attempts }) => {
                assert_eq!(field, "final quantum number");
                assert_eq!(attempts, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"5\n");
        let mut p = Prompter::new(Cursor::new(input), Vec::new());

        assert_eq!(p.read_positive_integer("n", "n: ").unwrap(), 5);
        assert_eq!(output(p), "n: Unexpected error reading input, please try again.\nn: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("4");
        assert_eq!(p.read_positive_integer("n", "n: ").unwrap(), 4);
    }
}
