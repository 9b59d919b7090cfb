//! In-memory tournament backend.

use swissforge_core::{
    compare_standing, Competitor, CompetitorId, MatchHistory, MatchRecord, PairingError, Pairing,
    Result, RoundPairing, SwissForgeError,
};
use tracing::debug;

use super::TournamentStore;

/// A complete tournament kept in memory.
///
/// Registers competitors, records results and holds the working round.
/// Win and match counts are always derived from the recorded results.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTournament {
    players: Vec<Competitor>,
    matches: Vec<MatchRecord>,
    scheduled: Vec<Pairing>,
    last_id: u64,
}

impl InMemoryTournament {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a competitor and returns its new id.
    ///
    /// Ids are assigned serially from 1 and never reused, even after
    /// [`delete_players`](Self::delete_players). Names need not be unique.
    pub fn register_player(&mut self, name: impl Into<String>) -> CompetitorId {
        self.last_id += 1;
        let id = CompetitorId(self.last_id);
        self.players.push(Competitor::new(id, name));
        debug!(event = "player_registered", id = id.get());
        id
    }

    /// Records the outcome of one match.
    ///
    /// # Errors
    ///
    /// [`PairingError::PlayerNotFound`] for an unregistered id,
    /// [`SwissForgeError::InvalidState`] if both ids are the same.
    pub fn report_match(&mut self, winner: CompetitorId, loser: CompetitorId) -> Result<()> {
        if winner == loser {
            return Err(SwissForgeError::InvalidState(format!(
                "competitor {winner} cannot play itself"
            )));
        }
        let w = self.index_of(winner)?;
        let l = self.index_of(loser)?;

        self.players[w].wins += 1;
        self.players[w].matches_played += 1;
        self.players[l].matches_played += 1;
        self.matches.push(MatchRecord { winner, loser });
        debug!(event = "match_reported", winner = winner.get(), loser = loser.get());
        Ok(())
    }

    /// Removes every match record and resets all win records.
    pub fn delete_matches(&mut self) {
        self.matches.clear();
        for player in &mut self.players {
            player.wins = 0;
            player.matches_played = 0;
        }
    }

    /// Removes every competitor, with their matches and the working round.
    pub fn delete_players(&mut self) {
        self.players.clear();
        self.matches.clear();
        self.scheduled.clear();
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Competitors in standings order.
    pub fn player_standings(&self) -> Vec<Competitor> {
        let mut standings = self.players.clone();
        standings.sort_by(compare_standing);
        standings
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Pairings of the working round in persist order.
    pub fn scheduled(&self) -> &[Pairing] {
        &self.scheduled
    }

    /// Competitors not yet placed in the working round.
    pub fn count_unassigned(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !self.scheduled.iter().any(|s| s.contains(p.id)))
            .count()
    }

    pub fn player(&self, id: CompetitorId) -> Option<&Competitor> {
        self.players.iter().find(|p| p.id == id)
    }

    fn index_of(&self, id: CompetitorId) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PairingError::PlayerNotFound(id).into())
    }

    fn name_of(&self, id: CompetitorId) -> Result<String> {
        let idx = self.index_of(id)?;
        Ok(self.players[idx].name.clone())
    }
}

impl TournamentStore for InMemoryTournament {
    fn list_standings(&self) -> Result<Vec<Competitor>> {
        Ok(self.player_standings())
    }

    fn list_match_history(&self) -> Result<MatchHistory> {
        Ok(self.matches.iter().collect())
    }

    fn persist_pairing(&mut self, player1: CompetitorId, player2: CompetitorId) -> Result<()> {
        self.index_of(player1)?;
        self.index_of(player2)?;
        for id in [player1, player2] {
            if self.scheduled.iter().any(|s| s.contains(id)) {
                return Err(PairingError::DuplicatePairingAttempt(id).into());
            }
        }
        if player1 == player2 {
            return Err(PairingError::DuplicatePairingAttempt(player1).into());
        }
        self.scheduled.push(Pairing::new(player1, player2));
        Ok(())
    }

    fn clear_round_working_state(&mut self) -> Result<()> {
        self.scheduled.clear();
        Ok(())
    }

    fn fetch_full_round_pairings(&self) -> Result<Vec<RoundPairing>> {
        self.scheduled
            .iter()
            .map(|p| -> Result<RoundPairing> {
                Ok(RoundPairing {
                    player1_id: p.player1,
                    name1: self.name_of(p.player1)?,
                    player2_id: p.player2,
                    name2: self.name_of(p.player2)?,
                })
            })
            .collect()
    }
}
