//! Round invariant assertions.

use std::collections::BTreeSet;

use swissforge_core::{CompetitorId, MatchHistory, Pairing, Standings};

/// Asserts that `pairings` is a complete, rematch-free round for `standings`.
///
/// # Panics
///
/// If a competitor is missing, appears twice, is not ranked, or meets a
/// previous opponent.
pub fn assert_valid_round(standings: &Standings, history: &MatchHistory, pairings: &[Pairing]) {
    let mut seen = BTreeSet::new();
    for p in pairings {
        assert_ne!(p.player1, p.player2, "{p} pairs a competitor with itself");
        for id in [p.player1, p.player2] {
            assert!(standings.contains(id), "{id} is not in the standings");
            assert!(seen.insert(id), "{id} is paired twice");
        }
        assert!(
            !history.has_played(p.player1, p.player2),
            "{p} repeats a previous match"
        );
    }
    assert_eq!(
        pairings.len() * 2,
        standings.len(),
        "round does not cover every competitor"
    );
}

/// Every id appearing in `pairings`.
pub fn covered_ids(pairings: &[Pairing]) -> BTreeSet<CompetitorId> {
    pairings
        .iter()
        .flat_map(|p| [p.player1, p.player2])
        .collect()
}
