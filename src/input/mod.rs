/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Interactive console input
//!
//! Validators for single answers live in [`parser`]; the re-prompting loops
//! that drive them over a console live in [`prompt`].

pub mod errors;
pub mod parser;
pub mod prompt;

pub use errors::{InputError, Result};
pub use parser::{parse_positive_integer, parse_repeat, parse_unit, RepeatChoice};
pub use prompt::Prompter;
