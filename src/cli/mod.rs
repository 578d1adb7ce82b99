/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Every option is optional. Without arguments the program runs the plain
//! interactive session with the textbook constants.

use crate::physics::constants::{ELEMENTARY_CHARGE, RYDBERG_ENERGY_EV};
use crate::physics::{ConfigError, PhysicalConstants};
use crate::session::SessionConfig;
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Interactive calculator for Bohr/Rydberg transition energies
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "rydberg-rs",
    version = crate::VERSION,
    author = crate::AUTHORS,
    about,
    long_about = None,
    allow_negative_numbers = true
)]
pub struct Args {
    /// Rydberg energy in eV
    #[arg(long, value_name = "EV", default_value_t = RYDBERG_ENERGY_EV)]
    pub rydberg_energy: f64,

    /// Elementary charge in C, used to convert eV to J
    #[arg(long, value_name = "C", default_value_t = ELEMENTARY_CHARGE)]
    pub elementary_charge: f64,

    /// Give up after this many invalid answers to a single prompt
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the `-v` flags
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Build a validated session configuration
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        Ok(SessionConfig {
            constants: PhysicalConstants::new(self.rydberg_energy, self.elementary_charge)?,
            max_attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["rydberg-rs"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Warn);
        assert_eq!(args.session_config().unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "rydberg-rs",
            "--rydberg-energy",
            "13.6057",
            "--max-attempts",
            "3",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let config = args.session_config().unwrap();
        assert_eq!(config.constants.rydberg_energy_ev, 13.6057);
        assert_eq!(config.constants.elementary_charge, 1.6e-19);
        assert_eq!(config.max_attempts, Some(3));
    }

    #[test]
    fn test_command_metadata() {
        let command = Args::command();
        assert_eq!(command.get_author(), Some(crate::AUTHORS));
        assert_eq!(command.get_version(), Some(crate::VERSION));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["rydberg-rs", "--max-attempts", "0"]).is_err());

        let args = Args::try_parse_from(["rydberg-rs", "--elementary-charge", "-1"]).unwrap();
        assert_eq!(
            args.session_config(),
            Err(ConfigError::InvalidElementaryCharge(-1.0))
        );

        let args = Args::try_parse_from(["rydberg-rs", "--rydberg-energy", "-13.6"]).unwrap();
        assert_eq!(
            args.session_config(),
            Err(ConfigError::InvalidRydbergEnergy(-13.6))
        );
    }
}
