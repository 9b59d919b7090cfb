//! Most-constrained-first choice of the next competitor to fix.

use swissforge_core::PairingError;

use super::CandidateSet;

/// Why a competitor was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Only one legal opponent was left.
    Forced,
    /// No forced move; the highest-ranked pooled competitor goes first.
    Leader,
}

/// Outcome of [`ConstraintPrioritizer::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index into the candidate slice.
    pub index: usize,
    pub priority: Priority,
}

/// Picks the competitor to commit next.
///
/// Rules, first match wins:
/// 1. anyone with no legal opponent makes the state a dead end;
/// 2. anyone with exactly one legal opponent is a forced move;
/// 3. otherwise the leader of the pool.
///
/// Candidate sets arrive in standings order, so "first" in each rule is the
/// best-ranked competitor and ties are settled by rank, then id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintPrioritizer;

impl ConstraintPrioritizer {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// [`PairingError::DeadEndPairing`] naming the best-ranked competitor with
    /// no legal opponent. An empty slice yields `None` inside `Ok`.
    pub fn select(&self, candidates: &[CandidateSet]) -> Result<Option<Selection>, PairingError> {
        if let Some(stuck) = candidates.iter().find(|c| c.degree() == 0) {
            return Err(PairingError::DeadEndPairing {
                competitor: stuck.competitor.id,
            });
        }

        if let Some(index) = candidates.iter().position(|c| c.degree() == 1) {
            return Ok(Some(Selection {
                index,
                priority: Priority::Forced,
            }));
        }

        Ok((!candidates.is_empty()).then_some(Selection {
            index: 0,
            priority: Priority::Leader,
        }))
    }
}
