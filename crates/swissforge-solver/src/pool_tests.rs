//! Tests for the working pool.

use swissforge_core::{CompetitorId, MatchHistory, PairingError};
use swissforge_test::{history, id, lettered_standings};

use crate::pool::WorkingPool;

#[test]
fn test_min_degree_empty_pool() {
    let standings = lettered_standings(&[]);
    let pool = WorkingPool::from_standings(&standings);
    assert_eq!(pool.min_degree(&MatchHistory::new()), None);
}

#[test]
fn test_min_degree_without_history() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let pool = WorkingPool::from_standings(&standings);
    assert_eq!(pool.min_degree(&MatchHistory::new()), Some(3));
}

#[test]
fn test_min_degree_forced_move() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = history(&[('A', 'B'), ('A', 'C')]);
    let pool = WorkingPool::from_standings(&standings);
    assert_eq!(pool.min_degree(&played), Some(1));
}

#[test]
fn test_min_degree_dead_end() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let played = history(&[('A', 'B'), ('A', 'C'), ('A', 'D')]);
    let pool = WorkingPool::from_standings(&standings);
    assert_eq!(pool.min_degree(&played), Some(0));
}

#[test]
fn test_min_degree_ignores_committed_players() {
    let standings = lettered_standings(&[0, 0, 0, 0, 0, 0]);
    let played = history(&[('E', 'F')]);
    let mut pool = WorkingPool::from_standings(&standings);

    pool.commit(id('A'), id('B')).unwrap();
    pool.commit(id('C'), id('D')).unwrap();
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.min_degree(&played), Some(0));
}

#[test]
fn test_commit_twice_and_unknown() {
    let standings = lettered_standings(&[0, 0, 0, 0]);
    let mut pool = WorkingPool::from_standings(&standings);

    pool.commit(id('A'), id('B')).unwrap();
    assert!(!pool.contains(id('A')));
    assert_eq!(
        pool.commit(id('C'), id('A')),
        Err(PairingError::DuplicatePairingAttempt(id('A')))
    );
    assert_eq!(
        pool.commit(id('C'), CompetitorId(9)),
        Err(PairingError::PlayerNotFound(CompetitorId(9)))
    );
    assert_eq!(pool.ids().collect::<Vec<_>>(), vec![id('C'), id('D')]);
}
