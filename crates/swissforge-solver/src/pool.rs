//! Competitors still waiting for an opponent in the current round.

use std::collections::BTreeSet;

use swissforge_core::{CompetitorId, MatchHistory, PairingError, Standings};

use crate::heuristic::{candidate_sets, CandidateSet};

/// A competitor together with its zero-based standings rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankedId {
    pub rank: usize,
    pub id: CompetitorId,
}

/// The set of competitors not yet assigned in this round's computation.
///
/// Members are kept by rank, so iteration always follows standings order.
/// Every member is a ranked competitor; ids outside the standings can never
/// enter the pool.
#[derive(Debug, Clone)]
pub struct WorkingPool<'s> {
    standings: &'s Standings,
    members: BTreeSet<usize>,
}

impl<'s> WorkingPool<'s> {
    /// Pool holding every ranked competitor.
    pub fn from_standings(standings: &'s Standings) -> Self {
        Self {
            standings,
            members: (0..standings.len()).collect(),
        }
    }

    pub fn standings(&self) -> &'s Standings {
        self.standings
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: CompetitorId) -> bool {
        self.standings
            .rank_of(id)
            .is_some_and(|rank| self.members.contains(&rank))
    }

    /// Pooled competitors in standings order.
    pub fn members(&self) -> impl Iterator<Item = RankedId> + '_ {
        self.members.iter().map(move |&rank| self.ranked(rank))
    }

    /// Pooled ids in standings order.
    pub fn ids(&self) -> impl Iterator<Item = CompetitorId> + '_ {
        self.members().map(|m| m.id)
    }

    /// Resolves `id` to its pool entry.
    ///
    /// # Errors
    ///
    /// [`PairingError::PlayerNotFound`] if `id` is unranked or already assigned.
    pub fn lookup(&self, id: CompetitorId) -> Result<RankedId, PairingError> {
        match self.standings.rank_of(id) {
            Some(rank) if self.members.contains(&rank) => Ok(RankedId { rank, id }),
            _ => Err(PairingError::PlayerNotFound(id)),
        }
    }

    /// Smallest number of legal opponents any pooled competitor has left.
    ///
    /// `None` for an empty pool.
    pub fn min_degree(&self, history: &MatchHistory) -> Option<usize> {
        candidate_sets(self, history)
            .iter()
            .map(CandidateSet::degree)
            .min()
    }

    /// Removes both players of a committed pairing.
    ///
    /// # Errors
    ///
    /// [`PairingError::DuplicatePairingAttempt`] if either player was already
    /// assigned this round, [`PairingError::PlayerNotFound`] if either is not
    /// ranked at all.
    pub fn commit(&mut self, a: CompetitorId, b: CompetitorId) -> Result<(), PairingError> {
        let rank_a = self.assignable_rank(a)?;
        let rank_b = self.assignable_rank(b)?;
        if rank_a == rank_b {
            return Err(PairingError::DuplicatePairingAttempt(a));
        }
        self.members.remove(&rank_a);
        self.members.remove(&rank_b);
        Ok(())
    }

    /// Puts a previously committed pair back. Used when backtracking.
    pub(crate) fn release(&mut self, a: RankedId, b: RankedId) {
        self.members.insert(a.rank);
        self.members.insert(b.rank);
    }

    fn assignable_rank(&self, id: CompetitorId) -> Result<usize, PairingError> {
        let rank = self
            .standings
            .rank_of(id)
            .ok_or(PairingError::PlayerNotFound(id))?;
        if !self.members.contains(&rank) {
            return Err(PairingError::DuplicatePairingAttempt(id));
        }
        Ok(rank)
    }

    fn ranked(&self, rank: usize) -> RankedId {
        RankedId {
            rank,
            id: self.standings.competitors()[rank].id,
        }
    }
}
