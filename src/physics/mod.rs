/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Bohr model physics
//!
//! This module provides the constants, energy units and the Rydberg formula
//! for transitions between levels of a hydrogen-like atom.

pub mod config;
pub mod constants;
pub mod transition;
pub mod units;

pub use config::{ConfigError, PhysicalConstants};
pub use transition::{LevelOrder, Transition, TransitionError};
pub use units::EnergyUnit;
