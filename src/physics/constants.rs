/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants used in transition energy calculations

/// Rydberg energy in eV, rounded to the value used by the Bohr model textbook formula
pub const RYDBERG_ENERGY_EV: f64 = 13.6;

/// Elementary charge in Coulombs (J per eV)
pub const ELEMENTARY_CHARGE: f64 = 1.6e-19;
