//! SwissForge - Swiss-system tournament pairing in Rust
//!
//! Register competitors, record results and ask for the next round.
//!
//! # Example
//!
//! ```rust
//! use swissforge::prelude::*;
//!
//! let mut tournament = InMemoryTournament::new();
//! for name in ["Ada", "Ben", "Cy", "Di"] {
//!     tournament.register_player(name);
//! }
//!
//! let round = swiss_pairings(&mut tournament, &PairingEngine::default()).unwrap();
//! assert_eq!(round.len(), 2);
//! assert_eq!(round[0].name1, "Ada");
//! assert_eq!(round[0].name2, "Ben");
//! ```

// Core types
pub use swissforge_core::{
    compare_standing, Competitor, CompetitorId, MatchHistory, MatchRecord, Pairing, PairingError,
    RoundPairing, Standings, SwissForgeError,
};

// Configuration
pub use swissforge_config::{
    ConfigError, DeadEndPolicy, EnvironmentMode, FallbackConfig, PairingConfig,
};

// Engine and storage
pub use swissforge_solver::{
    compute_round_pairings, swiss_pairings, verify_round, InMemoryTournament, PairingEngine,
    RoundResult, RoundStats, TournamentStore,
};

/// Lower-level pairing building blocks.
pub mod heuristic {
    pub use swissforge_solver::heuristic::*;
    pub use swissforge_solver::{ExhaustiveSearch, RankedId, WorkingPool};
}

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        compute_round_pairings, swiss_pairings, Competitor, CompetitorId, InMemoryTournament,
        MatchHistory, Pairing, PairingConfig, PairingEngine, PairingError, RoundPairing,
        Standings, SwissForgeError, TournamentStore,
    };
}
