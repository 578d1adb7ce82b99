/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Electronic transitions in a hydrogen-like atom
//!
//! The energy of the photon emitted when the electron drops from level
//! `n_initial` to level `n_final` follows the Rydberg formula
//!
//! ```text
//! E = R * Z^2 * (1 / n_final^2 - 1 / n_initial^2)
//! ```
//!
//! Levels are always stored with `n_initial >= n_final`, so the energy is
//! never negative.

use super::config::PhysicalConstants;
use super::units::EnergyUnit;
use std::cmp::Ordering;
use thiserror::Error;

/// Errors raised when building a [`Transition`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid atomic number: {0} (must be positive)")]
    InvalidAtomicNumber(u32),

    #[error("Invalid quantum number: {0} (must be positive)")]
    InvalidQuantumNumber(u32),
}

/// How the quantum numbers were arranged when the transition was built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOrder {
    /// Given with `n_initial > n_final`, used as is
    Descending,
    /// Given with `n_final > n_initial`, swapped
    Swapped,
    /// Both levels are the same, the energy is zero
    Equal,
}

/// A transition between two principal quantum levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    atomic_number: u32,
    n_initial: u32,
    n_final: u32,
    ordering: LevelOrder,
}

impl Transition {
    /// Create a transition, swapping the levels if `n_final > n_initial`
    pub fn new(
        atomic_number: u32,
        n_initial: u32,
        n_final: u32,
    ) -> Result<Self, TransitionError> {
        if atomic_number == 0 {
            return Err(TransitionError::InvalidAtomicNumber(atomic_number));
        }
        for n in [n_initial, n_final] {
            if n == 0 {
                return Err(TransitionError::InvalidQuantumNumber(n));
            }
        }

        let (n_initial, n_final, ordering) = match n_initial.cmp(&n_final) {
            Ordering::Greater => (n_initial, n_final, LevelOrder::Descending),
            Ordering::Less => (n_final, n_initial, LevelOrder::Swapped),
            Ordering::Equal => (n_initial, n_final, LevelOrder::Equal),
        };

        Ok(Self {
            atomic_number,
            n_initial,
            n_final,
            ordering,
        })
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Upper level, after any swap
    pub fn n_initial(&self) -> u32 {
        self.n_initial
    }

    /// Lower level, after any swap
    pub fn n_final(&self) -> u32 {
        self.n_final
    }

    pub fn ordering(&self) -> LevelOrder {
        self.ordering
    }

    /// Transition energy in eV
    pub fn energy_ev(&self, constants: &PhysicalConstants) -> f64 {
        let z = f64::from(self.atomic_number);
        let n_i = f64::from(self.n_initial);
        let n_f = f64::from(self.n_final);

        constants.rydberg_energy_ev * z.powi(2) * (1.0 / n_f.powi(2) - 1.0 / n_i.powi(2))
    }

    /// Transition energy in the requested unit
    pub fn energy(&self, constants: &PhysicalConstants, unit: EnergyUnit) -> f64 {
        unit.convert_ev(self.energy_ev(constants), constants.elementary_charge)
    }
}
