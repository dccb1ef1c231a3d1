//! Error types for the front end.
//!
//! This module defines the diagnostics produced while parsing:
//!
//! - Error structures with source position information
//! - One `ErrorImpl` variant per failure class (structural, expression grammar,
//!   literal conversion)
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
