//! Ranked view over the registered competitors.
//!
//! Ranking is a pure comparator: more wins first, then ascending id. Rank 0
//! is the current leader.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::PairingError;
use crate::model::{Competitor, CompetitorId};

/// Orders two competitors by standing: wins descending, then id ascending.
pub fn compare_standing(a: &Competitor, b: &Competitor) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

/// Competitors in standings order with constant-time rank lookup.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    entries: Vec<Competitor>,
    ranks: HashMap<CompetitorId, usize>,
}

impl Standings {
    /// Sorts `competitors` into standings order.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::DuplicateCompetitor`] if an id appears twice.
    pub fn new(mut competitors: Vec<Competitor>) -> Result<Self, PairingError> {
        competitors.sort_by(compare_standing);

        let mut ranks = HashMap::with_capacity(competitors.len());
        for (rank, competitor) in competitors.iter().enumerate() {
            if ranks.insert(competitor.id, rank).is_some() {
                return Err(PairingError::DuplicateCompetitor(competitor.id));
            }
        }

        Ok(Self {
            entries: competitors,
            ranks,
        })
    }

    /// Number of ranked competitors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Competitors in rank order.
    pub fn competitors(&self) -> &[Competitor] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Competitor> {
        self.entries.iter()
    }

    /// Ids in rank order.
    pub fn ids(&self) -> impl Iterator<Item = CompetitorId> + '_ {
        self.entries.iter().map(|c| c.id)
    }

    /// Zero-based rank of `id`, if it is ranked.
    pub fn rank_of(&self, id: CompetitorId) -> Option<usize> {
        self.ranks.get(&id).copied()
    }

    pub fn get(&self, id: CompetitorId) -> Option<&Competitor> {
        self.rank_of(id).map(|rank| &self.entries[rank])
    }

    /// Competitor holding `rank`.
    pub fn at_rank(&self, rank: usize) -> Option<&Competitor> {
        self.entries.get(rank)
    }

    pub fn contains(&self, id: CompetitorId) -> bool {
        self.ranks.contains_key(&id)
    }
}
