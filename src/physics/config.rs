/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration of the physical constants fed into the energy calculation

use super::constants::{ELEMENTARY_CHARGE, RYDBERG_ENERGY_EV};
use thiserror::Error;

/// Errors raised when building a [`PhysicalConstants`] value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid Rydberg energy: {0} (must be finite and positive)")]
    InvalidRydbergEnergy(f64),

    #[error("Invalid elementary charge: {0} (must be finite and positive)")]
    InvalidElementaryCharge(f64),
}

/// Immutable set of constants used by [`Transition::energy`](super::Transition::energy)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Rydberg energy in eV
    pub rydberg_energy_ev: f64,
    /// Conversion factor from eV to J
    pub elementary_charge: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            rydberg_energy_ev: RYDBERG_ENERGY_EV,
            elementary_charge: ELEMENTARY_CHARGE,
        }
    }
}

impl PhysicalConstants {
    /// Create a validated set of constants
    pub fn new(rydberg_energy_ev: f64, elementary_charge: f64) -> Result<Self, ConfigError> {
        if !rydberg_energy_ev.is_finite() || rydberg_energy_ev <= 0.0 {
            return Err(ConfigError::InvalidRydbergEnergy(rydberg_energy_ev));
        }
        if !elementary_charge.is_finite() || elementary_charge <= 0.0 {
            return Err(ConfigError::InvalidElementaryCharge(elementary_charge));
        }

        Ok(Self {
            rydberg_energy_ev,
            elementary_charge,
        })
    }
}
