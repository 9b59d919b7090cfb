//! Round pairing engine.
//!
//! Drives the greedy loop: compute candidate sets, fix the most constrained
//! competitor, give it the nearest-ranked legal opponent, repeat until the
//! pool is empty. Committed pairings are never revisited.
//!
//! Logging levels:
//! - **INFO**: Round start/end, dead ends, fallback summaries
//! - **DEBUG**: Individual commits and forced moves
//! - **TRACE**: Candidate degree tables

use std::time::{Duration, Instant};

use swissforge_config::{DeadEndPolicy, PairingConfig};
use swissforge_core::{CompetitorId, MatchHistory, Pairing, PairingError, Standings};
use tracing::{debug, info, trace, Level};

use crate::exhaustive::ExhaustiveSearch;
use crate::heuristic::{candidate_sets, ConstraintPrioritizer, OpponentSelector, Priority};
use crate::pool::WorkingPool;

/// State of one round's computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineState {
    /// Competitors are still waiting for an opponent.
    Active,
    /// Everyone is paired.
    Completed,
    /// The round cannot be completed.
    Failed(PairingError),
}

/// Counters collected while pairing a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    /// Pairings committed by the greedy pass.
    pub step_count: u64,
    /// Commits made because only one opponent was left.
    pub forced_moves: u64,
    /// Nodes expanded by the exhaustive fallback, zero if it never ran.
    pub fallback_nodes: u64,
    pub duration: Duration,
}

/// A completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Pairings in commit order.
    pub pairings: Vec<Pairing>,
    pub stats: RoundStats,
}

/// Greedy Swiss pairing engine.
///
/// The engine is a pure function of the standings and history it is given;
/// it holds configuration only.
#[derive(Debug, Clone, Default)]
pub struct PairingEngine {
    config: PairingConfig,
    prioritizer: ConstraintPrioritizer,
    selector: OpponentSelector,
}

impl PairingEngine {
    pub fn new(config: PairingConfig) -> Self {
        Self {
            config,
            prioritizer: ConstraintPrioritizer::new(),
            selector: OpponentSelector::new(),
        }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Pairs every ranked competitor for the next round.
    ///
    /// # Errors
    ///
    /// - [`PairingError::OddPlayerCount`] if the standings hold an odd number of competitors
    /// - [`PairingError::DeadEndPairing`] if the greedy pass (and the fallback,
    ///   when enabled) cannot complete the round
    /// - [`PairingError::DuplicatePairingAttempt`], [`PairingError::Rematch`] or
    ///   [`PairingError::PlayerNotFound`] only on a broken internal invariant
    pub fn solve(
        &self,
        standings: &Standings,
        history: &MatchHistory,
    ) -> Result<RoundResult, PairingError> {
        let start = Instant::now();
        info!(
            event = "round_start",
            pool_size = standings.len() as u64,
            history_size = history.len() as u64,
        );

        if standings.len() % 2 == 1 {
            let err = PairingError::OddPlayerCount {
                pool_size: standings.len(),
            };
            info!(event = "round_failed", error = %err);
            return Err(err);
        }

        let mut scope = RoundScope::new(standings);
        let outcome = match self.run_greedy(&mut scope, history) {
            EngineState::Completed => Ok(scope.pairings),
            EngineState::Failed(err @ PairingError::DeadEndPairing { .. })
                if self.config.dead_end_policy == DeadEndPolicy::ExhaustiveFallback =>
            {
                self.run_fallback(standings, history, &mut scope.stats)
                    .ok_or(err)
            }
            EngineState::Failed(err) => Err(err),
            EngineState::Active => unreachable!("greedy pass returns only terminal states"),
        };
        let outcome = outcome.and_then(|pairings| {
            if self.config.is_full_assert() {
                verify_round(standings, history, &pairings)?;
            }
            Ok(pairings)
        });

        let pairings = match outcome {
            Ok(pairings) => pairings,
            Err(err) => {
                info!(event = "round_failed", error = %err);
                return Err(err);
            }
        };

        let mut stats = scope.stats;
        stats.duration = start.elapsed();
        info!(
            event = "round_end",
            pairings = pairings.len() as u64,
            steps = stats.step_count,
            forced_moves = stats.forced_moves,
            duration_ms = stats.duration.as_millis() as u64,
        );

        Ok(RoundResult { pairings, stats })
    }

    fn run_greedy(&self, scope: &mut RoundScope<'_>, history: &MatchHistory) -> EngineState {
        // Each commit removes two competitors, so the pool drains in at most
        // len / 2 iterations.
        let mut state = EngineState::Active;
        while state == EngineState::Active {
            state = self.step(scope, history);
        }
        state
    }

    /// Performs one transition of the round state machine.
    fn step(&self, scope: &mut RoundScope<'_>, history: &MatchHistory) -> EngineState {
        match scope.pool.len() {
            0 => return EngineState::Completed,
            1 => {
                return EngineState::Failed(PairingError::OddPlayerCount {
                    pool_size: scope.pool.standings().len(),
                })
            }
            _ => {}
        }

        let candidates = candidate_sets(&scope.pool, history);
        if tracing::enabled!(Level::TRACE) {
            let table: Vec<(u64, usize)> = candidates
                .iter()
                .map(|c| (c.competitor.id.get(), c.degree()))
                .collect();
            trace!(event = "degrees", step = scope.stats.step_count, table = ?table);
        }

        let selection = match self.prioritizer.select(&candidates) {
            Ok(Some(selection)) => selection,
            Ok(None) => return EngineState::Completed,
            Err(err) => {
                info!(event = "dead_end", step = scope.stats.step_count, error = %err);
                return EngineState::Failed(err);
            }
        };

        let fixed = &candidates[selection.index];
        let Some(opponent) = self.selector.pick(fixed) else {
            return EngineState::Failed(PairingError::DeadEndPairing {
                competitor: fixed.competitor.id,
            });
        };

        if selection.priority == Priority::Forced {
            scope.stats.forced_moves += 1;
            debug!(event = "forced_move", competitor = fixed.competitor.id.get());
        }

        if let Err(err) = scope.commit(fixed.competitor.id, opponent.id) {
            return EngineState::Failed(err);
        }
        debug!(
            event = "pairing_committed",
            step = scope.stats.step_count,
            player1 = fixed.competitor.id.get(),
            player2 = opponent.id.get(),
            degree = fixed.degree() as u64,
        );

        EngineState::Active
    }

    fn run_fallback(
        &self,
        standings: &Standings,
        history: &MatchHistory,
        stats: &mut RoundStats,
    ) -> Option<Vec<Pairing>> {
        let node_limit = self.config.fallback_node_limit();
        info!(event = "fallback_start", node_limit = node_limit);

        let mut search = ExhaustiveSearch::new(history, node_limit);
        let result = search.solve(standings);
        stats.fallback_nodes = search.nodes_explored();

        info!(
            event = "fallback_end",
            nodes = stats.fallback_nodes,
            found = result.is_some(),
        );
        result
    }
}

/// Working state of one round: the shrinking pool and what has been
/// committed so far.
pub(crate) struct RoundScope<'s> {
    pub(crate) pool: WorkingPool<'s>,
    pub(crate) pairings: Vec<Pairing>,
    pub(crate) stats: RoundStats,
}

impl<'s> RoundScope<'s> {
    pub(crate) fn new(standings: &'s Standings) -> Self {
        Self {
            pool: WorkingPool::from_standings(standings),
            pairings: Vec::with_capacity(standings.len() / 2),
            stats: RoundStats::default(),
        }
    }

    /// Commits `a` against `b` and counts the step.
    ///
    /// Candidates only ever come from the pool, so a competitor committed
    /// twice is a broken invariant and asserts in debug builds.
    pub(crate) fn commit(&mut self, a: CompetitorId, b: CompetitorId) -> Result<(), PairingError> {
        if let Err(err) = self.pool.commit(a, b) {
            debug_assert!(
                !matches!(err, PairingError::DuplicatePairingAttempt(_)),
                "{err}"
            );
            return Err(err);
        }
        self.pairings.push(Pairing::new(a, b));
        self.stats.step_count += 1;
        Ok(())
    }
}

/// Pairs `standings` with the default configuration.
///
/// Convenience wrapper around [`PairingEngine::solve`] returning the pairings
/// in commit order.
pub fn compute_round_pairings(
    standings: &Standings,
    history: &MatchHistory,
) -> Result<Vec<Pairing>, PairingError> {
    PairingEngine::default()
        .solve(standings, history)
        .map(|result| result.pairings)
}

/// Checks that `pairings` partition the standings without rematches.
///
/// # Errors
///
/// - [`PairingError::PlayerNotFound`] for an unranked id or a competitor left unpaired
/// - [`PairingError::DuplicatePairingAttempt`] for an id paired twice
/// - [`PairingError::Rematch`] for a pair already in `history`
pub fn verify_round(
    standings: &Standings,
    history: &MatchHistory,
    pairings: &[Pairing],
) -> Result<(), PairingError> {
    let mut pool = WorkingPool::from_standings(standings);
    for p in pairings {
        if history.has_played(p.player1, p.player2) {
            return Err(PairingError::Rematch(p.player1, p.player2));
        }
        pool.commit(p.player1, p.player2)?;
    }
    let unpaired = pool.ids().next();
    match unpaired {
        Some(id) => Err(PairingError::PlayerNotFound(id)),
        None => Ok(()),
    }
}
