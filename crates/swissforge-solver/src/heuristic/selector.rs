//! Rank-proximity opponent choice.

use smallvec::SmallVec;

use super::CandidateSet;
use crate::pool::RankedId;

/// Picks the legal opponent closest in the standings.
///
/// Distance is the absolute difference of standings ranks; equal distances
/// go to the lower id.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpponentSelector;

impl OpponentSelector {
    pub fn new() -> Self {
        Self
    }

    /// Best opponent for the fixed competitor, `None` if it has none.
    pub fn pick(&self, candidates: &CandidateSet) -> Option<RankedId> {
        match candidates.opponents() {
            [] => None,
            [only] => Some(*only),
            opponents => {
                let fixed = candidates.competitor.rank;
                opponents
                    .iter()
                    .copied()
                    .min_by_key(|o| (o.rank.abs_diff(fixed), o.id))
            }
        }
    }

    /// All legal opponents, best first.
    pub fn ordered(&self, candidates: &CandidateSet) -> SmallVec<[RankedId; 8]> {
        let fixed = candidates.competitor.rank;
        let mut ordered: SmallVec<[RankedId; 8]> = candidates.opponents().iter().copied().collect();
        ordered.sort_by_key(|o| (o.rank.abs_diff(fixed), o.id));
        ordered
    }
}
