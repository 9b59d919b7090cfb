//! Valid-opponent sets.
//!
//! A valid opponent is another pooled competitor the player has never met.
//! Competitors already committed this round are no longer pooled, so they
//! drop out without a separate check.

use smallvec::SmallVec;
use swissforge_core::{CompetitorId, MatchHistory, PairingError};

use crate::pool::{RankedId, WorkingPool};

/// A pooled competitor and its legal opponents, in standings order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    pub competitor: RankedId,
    opponents: SmallVec<[RankedId; 8]>,
}

impl CandidateSet {
    /// Creates a candidate set. `opponents` are expected in standings order.
    pub fn new(competitor: RankedId, opponents: impl IntoIterator<Item = RankedId>) -> Self {
        Self {
            competitor,
            opponents: opponents.into_iter().collect(),
        }
    }

    /// Number of legal opponents.
    pub fn degree(&self) -> usize {
        self.opponents.len()
    }

    pub fn opponents(&self) -> &[RankedId] {
        &self.opponents
    }

    pub fn opponent_ids(&self) -> impl Iterator<Item = CompetitorId> + '_ {
        self.opponents.iter().map(|o| o.id)
    }
}

/// Returns every legal opponent of `id` in standings order.
///
/// # Errors
///
/// [`PairingError::PlayerNotFound`] if `id` is not in the pool.
pub fn valid_opponents(
    pool: &WorkingPool<'_>,
    history: &MatchHistory,
    id: CompetitorId,
) -> Result<Vec<CompetitorId>, PairingError> {
    let competitor = pool.lookup(id)?;
    Ok(candidate_set(pool, history, competitor).opponent_ids().collect())
}

/// Candidate sets for the whole pool, in standings order.
pub fn candidate_sets(pool: &WorkingPool<'_>, history: &MatchHistory) -> Vec<CandidateSet> {
    pool.members()
        .map(|competitor| candidate_set(pool, history, competitor))
        .collect()
}

fn candidate_set(
    pool: &WorkingPool<'_>,
    history: &MatchHistory,
    competitor: RankedId,
) -> CandidateSet {
    let opponents = pool
        .members()
        .filter(|other| other.rank != competitor.rank)
        .filter(|other| !history.has_played(competitor.id, other.id));
    CandidateSet::new(competitor, opponents)
}
