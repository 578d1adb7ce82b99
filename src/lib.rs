/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # rydberg-rs
//!
//! Photon energies for electronic transitions in hydrogen-like atoms, using
//! the Bohr model and the Rydberg formula.
//!
//! The library exposes the formula itself ([`physics::Transition`]), the input
//! validators ([`input`]) and the interactive loop ([`session::Session`]) that
//! the `rydberg-rs` binary runs over stdin and stdout.

pub mod cli;
pub mod input;
pub mod physics;
pub mod session;
pub mod utils;

pub use physics::{EnergyUnit, PhysicalConstants, Transition};
pub use session::{Session, SessionConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
