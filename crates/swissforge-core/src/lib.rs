//! SwissForge Core - Core types for Swiss-system pairing
//!
//! This crate provides the fundamental abstractions for SwissForge:
//! - Competitor, match record and pairing types
//! - Standings with an explicit, deterministic rank comparator
//! - Symmetric match history for rematch detection
//! - Error types shared by the solver and storage layers

pub mod error;
pub mod history;
pub mod model;
pub mod standings;

#[cfg(test)]
mod standings_tests;

pub use error::{PairingError, Result, SwissForgeError};
pub use history::MatchHistory;
pub use model::{Competitor, CompetitorId, MatchRecord, Pairing, RoundPairing};
pub use standings::{compare_standing, Standings};
