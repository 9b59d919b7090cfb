//! SwissForge Solver Engine
//!
//! This crate computes Swiss-system round pairings:
//! - Working pool and valid-opponent sets
//! - Most-constrained-first prioritizer and rank-proximity opponent selector
//! - Greedy pairing engine with an optional exhaustive fallback
//! - Storage capability trait and an in-memory backend
//! - Round orchestration against a store
//!
//! # Example
//!
//! ```
//! use swissforge_core::{Competitor, MatchHistory, Pairing, Standings};
//! use swissforge_solver::compute_round_pairings;
//!
//! let standings = Standings::new(vec![
//!     Competitor::new(1, "Ada").with_record(3, 3),
//!     Competitor::new(2, "Ben").with_record(3, 3),
//!     Competitor::new(3, "Cy").with_record(2, 3),
//!     Competitor::new(4, "Di").with_record(2, 3),
//! ]).unwrap();
//!
//! let mut history = MatchHistory::new();
//! history.record(1u64, 2u64);
//!
//! let pairings = compute_round_pairings(&standings, &history).unwrap();
//! assert_eq!(pairings, vec![Pairing::new(1u64, 3u64), Pairing::new(2u64, 4u64)]);
//! ```

pub mod engine;
pub mod exhaustive;
pub mod heuristic;
pub mod pool;
pub mod round;
pub mod store;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod pool_tests;

pub use engine::{
    compute_round_pairings, verify_round, EngineState, PairingEngine, RoundResult, RoundStats,
};
pub use exhaustive::ExhaustiveSearch;
pub use heuristic::{
    candidate_sets, valid_opponents, CandidateSet, ConstraintPrioritizer, OpponentSelector,
    Priority, Selection,
};
pub use pool::{RankedId, WorkingPool};
pub use round::swiss_pairings;
pub use store::{InMemoryTournament, TournamentStore};
