//! Storage capability boundary.
//!
//! The engine never talks to storage itself. [`swiss_pairings`](crate::round::swiss_pairings)
//! reads a snapshot through this trait before the round is computed and
//! writes the result back afterwards.

mod memory;


pub use memory::InMemoryTournament;

use swissforge_core::{Competitor, CompetitorId, MatchHistory, Result, RoundPairing};

/// Data access a tournament backend provides to the pairing round.
///
/// Implementations decide how state is kept; callers holding `&mut` get the
/// exclusive access one round's computation needs.
pub trait TournamentStore {
    /// Competitors ordered by wins descending, then id ascending.
    fn list_standings(&self) -> Result<Vec<Competitor>>;

    /// Every pair that has already played.
    fn list_match_history(&self) -> Result<MatchHistory>;

    /// Records one committed pairing of the working round.
    fn persist_pairing(&mut self, player1: CompetitorId, player2: CompetitorId) -> Result<()>;

    /// Discards the working round.
    fn clear_round_working_state(&mut self) -> Result<()>;

    /// Working round pairings with player names, in persist order.
    fn fetch_full_round_pairings(&self) -> Result<Vec<RoundPairing>>;
}
