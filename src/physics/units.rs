/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Energy units supported for reporting a transition energy

use std::fmt;
use std::str::FromStr;

/// Unit in which a transition energy is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    /// Joule
    Joule,
    /// Electronvolt
    ElectronVolt,
}

impl EnergyUnit {
    /// Symbol printed after the energy value
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::ElectronVolt => "eV",
        }
    }

    /// Convert an energy given in eV into this unit
    pub fn convert_ev(&self, energy_ev: f64, elementary_charge: f64) -> f64 {
        match self {
            EnergyUnit::Joule => energy_ev * elementary_charge,
            EnergyUnit::ElectronVolt => energy_ev,
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for EnergyUnit {
    type Err = String;

    /// Parses "J" or "eV", ignoring surrounding whitespace and case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "J" => Ok(EnergyUnit::Joule),
            "EV" => Ok(EnergyUnit::ElectronVolt),
            other => Err(other.to_string()),
        }
    }
}
