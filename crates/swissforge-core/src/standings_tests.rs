//! Tests for standings ordering.

use crate::error::PairingError;
use crate::model::{Competitor, CompetitorId};
use crate::standings::Standings;

fn competitor(id: u64, wins: u32) -> Competitor {
    Competitor::new(id, format!("Player {id}")).with_record(wins, wins)
}

#[test]
fn test_orders_by_wins_then_id() {
    let standings = Standings::new(vec![
        competitor(4, 1),
        competitor(2, 3),
        competitor(3, 1),
        competitor(1, 3),
    ])
    .unwrap();

    let ids: Vec<u64> = standings.ids().map(CompetitorId::get).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(standings.rank_of(CompetitorId(3)), Some(2));
}

#[test]
fn test_leader_is_rank_zero() {
    let standings = Standings::new(vec![competitor(7, 0), competitor(9, 2)]).unwrap();
    assert_eq!(standings.at_rank(0).map(|c| c.id), Some(CompetitorId(9)));
    assert_eq!(standings.get(CompetitorId(7)).map(|c| c.wins), Some(0));
}

#[test]
fn test_unknown_id_has_no_rank() {
    let standings = Standings::new(vec![competitor(1, 0)]).unwrap();
    assert_eq!(standings.rank_of(CompetitorId(2)), None);
    assert!(!standings.contains(CompetitorId(2)));
}

#[test]
fn test_duplicate_id_rejected() {
    let result = Standings::new(vec![competitor(1, 0), competitor(1, 2)]);
    assert_eq!(
        result.unwrap_err(),
        PairingError::DuplicateCompetitor(CompetitorId(1))
    );
}

#[test]
fn test_empty_standings() {
    let standings = Standings::new(Vec::new()).unwrap();
    assert!(standings.is_empty());
    assert_eq!(standings.len(), 0);
}
