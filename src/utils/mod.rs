/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the calculator

pub mod format;

pub use format::format_general;
