//! Bounded backtracking search used when the greedy pass dead-ends.
//!
//! Depth-first over the same choices the greedy pass makes: fix the most
//! constrained competitor, then try its legal opponents nearest rank first.
//! Any perfect pairing must give the fixed competitor one of those opponents,
//! so the search is complete up to its node limit. Because the first branch
//! at every node is the greedy choice, a round the greedy pass can finish
//! comes out identical here.

use swissforge_core::{MatchHistory, Pairing, Standings};
use tracing::trace;

use crate::heuristic::{candidate_sets, ConstraintPrioritizer, OpponentSelector};
use crate::pool::WorkingPool;

/// Depth-first exact pairing search with a node budget.
#[derive(Debug)]
pub struct ExhaustiveSearch<'h> {
    history: &'h MatchHistory,
    node_limit: u64,
    nodes: u64,
    prioritizer: ConstraintPrioritizer,
    selector: OpponentSelector,
}

impl<'h> ExhaustiveSearch<'h> {
    pub fn new(history: &'h MatchHistory, node_limit: u64) -> Self {
        Self {
            history,
            node_limit,
            nodes: 0,
            prioritizer: ConstraintPrioritizer::new(),
            selector: OpponentSelector::new(),
        }
    }

    /// Nodes expanded by the last call to [`solve`](Self::solve).
    pub fn nodes_explored(&self) -> u64 {
        self.nodes
    }

    /// Whether the last search stopped on the node budget.
    pub fn is_exhausted(&self) -> bool {
        self.nodes >= self.node_limit
    }

    /// Finds a complete rematch-free round, or `None` if there is none within
    /// the node budget.
    pub fn solve(&mut self, standings: &Standings) -> Option<Vec<Pairing>> {
        self.nodes = 0;
        if standings.len() % 2 == 1 {
            return None;
        }

        let mut pool = WorkingPool::from_standings(standings);
        let mut pairings = Vec::with_capacity(standings.len() / 2);
        self.descend(&mut pool, &mut pairings).then_some(pairings)
    }

    fn descend(&mut self, pool: &mut WorkingPool<'_>, pairings: &mut Vec<Pairing>) -> bool {
        if pool.is_empty() {
            return true;
        }
        if self.nodes >= self.node_limit {
            return false;
        }
        self.nodes += 1;

        let candidates = candidate_sets(pool, self.history);
        let selection = match self.prioritizer.select(&candidates) {
            Ok(Some(selection)) => selection,
            // A dead end prunes this branch.
            Ok(None) | Err(_) => return false,
        };

        let fixed = &candidates[selection.index];
        for opponent in self.selector.ordered(fixed) {
            if pool.commit(fixed.competitor.id, opponent.id).is_err() {
                continue;
            }
            pairings.push(Pairing::new(fixed.competitor.id, opponent.id));
            trace!(
                event = "fallback_try",
                depth = pairings.len() as u64,
                player1 = fixed.competitor.id.get(),
                player2 = opponent.id.get(),
            );

            if self.descend(pool, pairings) {
                return true;
            }

            pairings.pop();
            pool.release(fixed.competitor, opponent);
        }
        false
    }
}
