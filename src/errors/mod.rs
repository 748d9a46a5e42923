//! Diagnostic types for the front end.
//!
//! This module defines the diagnostics recorded during parsing:
//!
//! - Diagnostic structures with source position information
//! - Specific variants for each syntax fault category
//! - Diagnostic formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
