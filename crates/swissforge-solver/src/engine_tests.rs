//! Tests for the pairing engine.

use swissforge_config::{EnvironmentMode, PairingConfig};
use swissforge_core::{CompetitorId, MatchHistory, Pairing, PairingError};
use swissforge_test::{assert_valid_round, flat_standings, history, id, lettered_standings, pairing};

use crate::engine::{compute_round_pairings, verify_round, PairingEngine, RoundScope};
use crate::exhaustive::ExhaustiveSearch;

fn fallback_engine(node_limit: u64) -> PairingEngine {
    PairingEngine::new(PairingConfig::new().with_fallback_node_limit(node_limit))
}

/// C has met D, E and F, so the greedy A-B opening strands C.
fn stranded_history() -> MatchHistory {
    history(&[('C', 'D'), ('C', 'E'), ('C', 'F')])
}

#[test]
fn test_adjacent_pairs_without_history() {
    let standings = lettered_standings(&[3, 3, 2, 2]);
    let pairings = compute_round_pairings(&standings, &MatchHistory::new()).unwrap();
    assert_eq!(pairings, vec![pairing('A', 'B'), pairing('C', 'D')]);
}

#[test]
fn test_rematch_pushes_to_next_rank() {
    let standings = lettered_standings(&[3, 3, 2, 2]);
    let played = history(&[('A', 'B')]);
    let pairings = compute_round_pairings(&standings, &played).unwrap();
    assert_eq!(pairings, vec![pairing('A', 'C'), pairing('B', 'D')]);
}

#[test]
fn test_forced_move_committed_first() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = history(&[('D', 'A'), ('D', 'B')]);

    let result = PairingEngine::default().solve(&standings, &played).unwrap();
    assert_eq!(result.pairings[0], pairing('D', 'C'));
    assert_eq!(result.pairings, vec![pairing('D', 'C'), pairing('A', 'B')]);
    assert_eq!(result.stats.forced_moves, 2);
    assert_eq!(result.stats.step_count, 2);
}

#[test]
fn test_odd_pool_fails() {
    let standings = flat_standings(3);
    let result = compute_round_pairings(&standings, &MatchHistory::new());
    assert_eq!(result, Err(PairingError::OddPlayerCount { pool_size: 3 }));
}

#[test]
fn test_dead_end_detected() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = history(&[('A', 'B'), ('A', 'C'), ('A', 'D')]);
    let result = compute_round_pairings(&standings, &played);
    assert_eq!(
        result,
        Err(PairingError::DeadEndPairing {
            competitor: id('A')
        })
    );
}

#[test]
fn test_empty_standings_complete_immediately() {
    let standings = flat_standings(0);
    let pairings = compute_round_pairings(&standings, &MatchHistory::new()).unwrap();
    assert!(pairings.is_empty());
}

#[test]
fn test_complete_round_for_even_pool() {
    let standings = flat_standings(10);
    let played = MatchHistory::new();
    let pairings = compute_round_pairings(&standings, &played).unwrap();

    assert_eq!(pairings.len(), 5);
    assert_valid_round(&standings, &played, &pairings);
    let expected: Vec<Pairing> = (0..5u64)
        .map(|i| Pairing::new(2 * i + 1, 2 * i + 2))
        .collect();
    assert_eq!(pairings, expected);
}

#[test]
fn test_never_repeats_history() {
    let standings = flat_standings(8);
    let mut played = MatchHistory::new();
    for (a, b) in [(1u64, 2u64), (3, 4), (5, 6), (7, 8), (1, 3), (2, 4), (5, 7), (6, 8)] {
        played.record(a, b);
    }

    let pairings = compute_round_pairings(&standings, &played).unwrap();
    assert_valid_round(&standings, &played, &pairings);
}

#[test]
fn test_deterministic() {
    let standings = lettered_standings(&[2, 1, 2, 0, 1, 1]);
    let played = history(&[('A', 'C'), ('B', 'E'), ('D', 'E')]);

    let first = compute_round_pairings(&standings, &played).unwrap();
    for _ in 0..5 {
        assert_eq!(compute_round_pairings(&standings, &played).unwrap(), first);
    }
}

#[test]
fn test_greedy_dead_end_without_fallback() {
    let standings = lettered_standings(&[0; 6]);
    let result = compute_round_pairings(&standings, &stranded_history());
    assert_eq!(
        result,
        Err(PairingError::DeadEndPairing {
            competitor: id('C')
        })
    );
}

#[test]
fn test_fallback_recovers_from_greedy_dead_end() {
    let standings = lettered_standings(&[0; 6]);
    let played = stranded_history();

    let result = fallback_engine(1_000).solve(&standings, &played).unwrap();
    assert_eq!(
        result.pairings,
        vec![pairing('A', 'C'), pairing('B', 'D'), pairing('E', 'F')]
    );
    assert_eq!(result.stats.fallback_nodes, 4);
    assert_valid_round(&standings, &played, &result.pairings);
}

#[test]
fn test_fallback_budget_exhausted_keeps_dead_end() {
    let standings = lettered_standings(&[0; 6]);
    let result = fallback_engine(1).solve(&standings, &stranded_history());
    assert_eq!(
        result,
        Err(PairingError::DeadEndPairing {
            competitor: id('C')
        })
    );
}

#[test]
fn test_fallback_cannot_fix_unsolvable_round() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = history(&[('A', 'B'), ('A', 'C'), ('A', 'D')]);
    let result = fallback_engine(1_000).solve(&standings, &played);
    assert!(matches!(result, Err(PairingError::DeadEndPairing { .. })));
}

#[test]
fn test_fallback_matches_greedy_when_greedy_succeeds() {
    let standings = lettered_standings(&[3, 3, 2, 2, 1, 1]);
    let played = history(&[('A', 'B'), ('C', 'D')]);

    let greedy = compute_round_pairings(&standings, &played).unwrap();
    let mut search = ExhaustiveSearch::new(&played, 1_000);
    assert_eq!(search.solve(&standings), Some(greedy));
    assert!(!search.is_exhausted());
}

#[test]
fn test_full_assert_accepts_valid_round() {
    let config = PairingConfig::new().with_environment_mode(EnvironmentMode::FullAssert);
    let standings = lettered_standings(&[3, 3, 2, 2]);
    let played = history(&[('A', 'B')]);

    let result = PairingEngine::new(config).solve(&standings, &played).unwrap();
    assert_eq!(result.pairings, vec![pairing('A', 'C'), pairing('B', 'D')]);
}

#[test]
fn test_verify_round_rejects_rematch() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = history(&[('A', 'B')]);
    let result = verify_round(
        &standings,
        &played,
        &[pairing('B', 'A'), pairing('C', 'D')],
    );
    assert_eq!(result, Err(PairingError::Rematch(id('B'), id('A'))));
}

#[test]
fn test_verify_round_rejects_duplicate() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let result = verify_round(
        &standings,
        &MatchHistory::new(),
        &[pairing('A', 'B'), pairing('B', 'C')],
    );
    assert_eq!(result, Err(PairingError::DuplicatePairingAttempt(id('B'))));
}

#[test]
fn test_verify_round_rejects_missing_and_unknown() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = MatchHistory::new();

    let result = verify_round(&standings, &played, &[pairing('A', 'B')]);
    assert_eq!(result, Err(PairingError::PlayerNotFound(id('C'))));

    let result = verify_round(
        &standings,
        &played,
        &[pairing('A', 'B'), Pairing::new(id('C'), CompetitorId(40))],
    );
    assert_eq!(result, Err(PairingError::PlayerNotFound(CompetitorId(40))));
}

#[test]
fn test_verify_round_accepts_full_partition() {
    let standings = lettered_standings(&[3, 3, 2, 2, 1, 1]);
    let played = history(&[('A', 'B')]);
    let result = verify_round(
        &standings,
        &played,
        &[pairing('A', 'C'), pairing('B', 'D'), pairing('E', 'F')],
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn test_full_assert_reports_greedy_dead_end() {
    let config = PairingConfig::new().with_environment_mode(EnvironmentMode::FullAssert);
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = history(&[('A', 'B'), ('A', 'C'), ('A', 'D')]);

    let result = PairingEngine::new(config).solve(&standings, &played);
    assert_eq!(
        result.unwrap_err(),
        PairingError::DeadEndPairing { competitor: id('A') }
    );
}

#[test]
fn test_round_scope_commit_counts_steps() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let mut scope = RoundScope::new(&standings);

    scope.commit(id('A'), id('C')).unwrap();
    assert_eq!(scope.pairings, vec![pairing('A', 'C')]);
    assert_eq!(scope.stats.step_count, 1);
    assert_eq!(scope.pool.len(), 2);

    let unknown = scope.commit(id('B'), CompetitorId(40));
    assert_eq!(unknown, Err(PairingError::PlayerNotFound(CompetitorId(40))));
    assert_eq!(scope.stats.step_count, 1);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "paired twice")]
fn test_round_scope_commit_twice_is_fatal() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let mut scope = RoundScope::new(&standings);

    scope.commit(id('A'), id('B')).unwrap();
    let _ = scope.commit(id('A'), id('C'));
}
