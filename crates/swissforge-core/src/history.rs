//! Set of already-played competitor pairs.
//!
//! Pairs are stored order-independently, so `(a, b)` and `(b, a)` are the
//! same entry. The set only grows.

use std::collections::BTreeSet;

use crate::model::{pair_key, CompetitorId, MatchRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchHistory {
    pairs: BTreeSet<(CompetitorId, CompetitorId)>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `a` and `b` have met. Returns `false` if they already had.
    pub fn record(&mut self, a: impl Into<CompetitorId>, b: impl Into<CompetitorId>) -> bool {
        self.pairs.insert(pair_key(a.into(), b.into()))
    }

    /// Adds the participants of `record`.
    pub fn record_match(&mut self, record: &MatchRecord) -> bool {
        self.pairs.insert(record.key())
    }

    pub fn has_played(&self, a: CompetitorId, b: CompetitorId) -> bool {
        self.pairs.contains(&pair_key(a, b))
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in ascending order, smaller id first.
    pub fn iter(&self) -> impl Iterator<Item = (CompetitorId, CompetitorId)> + '_ {
        self.pairs.iter().copied()
    }

    /// Everyone `id` has already played.
    pub fn opponents_of(&self, id: CompetitorId) -> impl Iterator<Item = CompetitorId> + '_ {
        self.pairs.iter().filter_map(move |&(a, b)| {
            if a == id {
                Some(b)
            } else if b == id {
                Some(a)
            } else {
                None
            }
        })
    }
}

impl<'a> FromIterator<&'a MatchRecord> for MatchHistory {
    fn from_iter<I: IntoIterator<Item = &'a MatchRecord>>(iter: I) -> Self {
        let mut history = MatchHistory::new();
        history.extend(iter);
        history
    }
}

impl FromIterator<(CompetitorId, CompetitorId)> for MatchHistory {
    fn from_iter<I: IntoIterator<Item = (CompetitorId, CompetitorId)>>(iter: I) -> Self {
        let mut history = MatchHistory::new();
        for (a, b) in iter {
            history.record(a, b);
        }
        history
    }
}

impl<'a> Extend<&'a MatchRecord> for MatchHistory {
    fn extend<I: IntoIterator<Item = &'a MatchRecord>>(&mut self, iter: I) {
        for record in iter {
            self.record_match(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_symmetric() {
        let mut history = MatchHistory::new();
        assert!(history.record(2u64, 1u64));
        assert!(history.has_played(CompetitorId(1), CompetitorId(2)));
        assert!(history.has_played(CompetitorId(2), CompetitorId(1)));
        assert!(!history.record(1u64, 2u64));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_from_records_ignores_winner_order() {
        let records = [MatchRecord::new(1u64, 2u64), MatchRecord::new(2u64, 1u64)];
        let history: MatchHistory = records.iter().collect();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_opponents_of() {
        let history: MatchHistory = [
            (CompetitorId(1), CompetitorId(2)),
            (CompetitorId(3), CompetitorId(1)),
            (CompetitorId(3), CompetitorId(4)),
        ]
        .into_iter()
        .collect();

        let opponents: Vec<CompetitorId> = history.opponents_of(CompetitorId(1)).collect();
        assert_eq!(opponents, vec![CompetitorId(2), CompetitorId(3)]);
    }
}
