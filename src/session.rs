/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Interactive transition energy session
//!
//! The session is a small state machine:
//!
//! ```text
//! PromptInputs -> ComputeAndPrint -> PromptRepeat -> PromptInputs
//!                                                 \-> Terminated
//! ```
//!
//! Each field is validated inside `PromptInputs` by asking again until the
//! answer is valid. The only way out is answering "N" to the repeat question,
//! or the input stream closing.

use crate::input::{InputError, Prompter, RepeatChoice};
use crate::physics::{EnergyUnit, LevelOrder, PhysicalConstants, Transition, TransitionError};
use crate::utils::format::{format_general, DEFAULT_PRECISION};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use thiserror::Error;

pub const ATOMIC_NUMBER_PROMPT: &str = "Enter the atomic number: ";
pub const INITIAL_QUANTUM_NUMBER_PROMPT: &str = "Enter the initial quantum number: ";
pub const FINAL_QUANTUM_NUMBER_PROMPT: &str = "Enter the final quantum number: ";
pub const SWAP_NOTICE: &str =
    "Final quantum number is greater than the initial quantum number; swapping them.";
pub const EQUAL_NOTICE: &str =
    "Initial and final quantum numbers are equal; the transition energy will be zero.";
pub const TERMINATION_MESSAGE: &str = "Terminating program";

/// Errors that end a session early
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Settings for a session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionConfig {
    /// Constants used by the energy formula
    pub constants: PhysicalConstants,
    /// Invalid answers allowed per field; `None` asks forever
    pub max_attempts: Option<u32>,
}

/// Values collected from one pass over the input prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub atomic_number: u32,
    pub n_initial: u32,
    pub n_final: u32,
    pub unit: EnergyUnit,
}

#[derive(Debug)]
enum State {
    PromptInputs,
    ComputeAndPrint(Request),
    PromptRepeat,
    Terminated,
}

/// One interactive session reading from `R` and writing to `W`
#[derive(Debug)]
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: SessionConfig) -> Self {
        let prompter = Prompter::new(reader, writer).with_max_attempts(config.max_attempts);
        Self { prompter, config }
    }

    /// Run until the user declines to repeat
    ///
    /// Returns the number of energies that were printed.
    pub fn run(&mut self) -> Result<usize> {
        let mut state = State::PromptInputs;
        let mut completed = 0;

        loop {
            debug!("session state: {state:?}");
            state = match state {
                State::PromptInputs => match self.prompt_inputs() {
                    Ok(request) => State::ComputeAndPrint(request),
                    Err(err) => self.handle_input_error(err)?,
                },
                State::ComputeAndPrint(request) => {
                    self.compute_and_print(&request)?;
                    completed += 1;
                    State::PromptRepeat
                }
                State::PromptRepeat => match self.prompter.read_repeat() {
                    Ok(RepeatChoice::Repeat) => State::PromptInputs,
                    Ok(RepeatChoice::Stop) => {
                        self.prompter.write_line(TERMINATION_MESSAGE)?;
                        State::Terminated
                    }
                    Err(err) => self.handle_input_error(err)?,
                },
                State::Terminated => break,
            };
        }

        info!("session finished after {completed} calculation(s)");
        Ok(completed)
    }

    /// Consume the session, returning the reader and writer
    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }

    fn prompt_inputs(&mut self) -> std::result::Result<Request, InputError> {
        let atomic_number = self
            .prompter
            .read_positive_integer("atomic number", ATOMIC_NUMBER_PROMPT)?;
        let n_initial = self
            .prompter
            .read_positive_integer("initial quantum number", INITIAL_QUANTUM_NUMBER_PROMPT)?;
        let n_final = self
            .prompter
            .read_positive_integer("final quantum number", FINAL_QUANTUM_NUMBER_PROMPT)?;
        let unit = self.prompter.read_unit()?;

        Ok(Request {
            atomic_number,
            n_initial,
            n_final,
            unit,
        })
    }

    fn compute_and_print(&mut self, request: &Request) -> Result<f64> {
        let transition =
            Transition::new(request.atomic_number, request.n_initial, request.n_final)?;

        match transition.ordering() {
            LevelOrder::Swapped => {
                info!(
                    "swapped levels to n_initial={}, n_final={}",
                    transition.n_initial(),
                    transition.n_final()
                );
                self.prompter.write_line(SWAP_NOTICE)?;
            }
            LevelOrder::Equal => self.prompter.write_line(EQUAL_NOTICE)?,
            LevelOrder::Descending => {}
        }

        let energy = transition.energy(&self.config.constants, request.unit);
        info!(
            "Z={} n {} -> {}: {energy:e} {}",
            transition.atomic_number(),
            transition.n_initial(),
            transition.n_final(),
            request.unit
        );

        self.prompter.write_line(&format!(
            "Transition energy = {} {}",
            format_general(energy, DEFAULT_PRECISION),
            request.unit
        ))?;

        Ok(energy)
    }

    /// A closed input stream ends the session; anything else is fatal
    fn handle_input_error(&mut self, err: InputError) -> Result<State> {
        match err {
            InputError::EndOfInput => {
                warn!("input closed before the session was finished");
                self.prompter.write_line("")?;
                self.prompter.write_line(TERMINATION_MESSAGE)?;
                Ok(State::Terminated)
            }
            err => Err(err.into()),
        }
    }
}
