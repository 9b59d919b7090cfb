//! Tournament data model.
//!
//! Competitors are registered and scored by the storage layer. The pairing
//! engine only ever reads them.

use std::fmt;

/// Unique identifier of a registered competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompetitorId(pub u64);

impl CompetitorId {
    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CompetitorId {
    fn from(id: u64) -> Self {
        CompetitorId(id)
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered competitor with its current win record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl Competitor {
    /// Creates a competitor with an empty record.
    pub fn new(id: impl Into<CompetitorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wins: 0,
            matches_played: 0,
        }
    }

    /// Sets the win and match counts.
    pub fn with_record(mut self, wins: u32, matches_played: u32) -> Self {
        self.wins = wins;
        self.matches_played = matches_played;
        self
    }
}

/// Outcome of one played match.
///
/// Winner and loser order matters for standings only. For rematch detection
/// the record is an unordered pair, see [`MatchRecord::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    pub winner: CompetitorId,
    pub loser: CompetitorId,
}

impl MatchRecord {
    pub fn new(winner: impl Into<CompetitorId>, loser: impl Into<CompetitorId>) -> Self {
        Self {
            winner: winner.into(),
            loser: loser.into(),
        }
    }

    /// Order-independent key of the two participants.
    pub fn key(&self) -> (CompetitorId, CompetitorId) {
        pair_key(self.winner, self.loser)
    }

    pub fn involves(&self, id: CompetitorId) -> bool {
        self.winner == id || self.loser == id
    }
}

/// One pairing of a round, in the order it was committed.
///
/// `player1` is the competitor the engine fixed, `player2` the opponent it
/// picked. Two pairings with swapped players denote the same match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pairing {
    pub player1: CompetitorId,
    pub player2: CompetitorId,
}

impl Pairing {
    pub fn new(player1: impl Into<CompetitorId>, player2: impl Into<CompetitorId>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// Order-independent key of the two players.
    pub fn key(&self) -> (CompetitorId, CompetitorId) {
        pair_key(self.player1, self.player2)
    }

    pub fn contains(&self, id: CompetitorId) -> bool {
        self.player1 == id || self.player2 == id
    }

    /// Returns the other player, or `None` if `id` is not in this pairing.
    pub fn opponent_of(&self, id: CompetitorId) -> Option<CompetitorId> {
        if self.player1 == id {
            Some(self.player2)
        } else if self.player2 == id {
            Some(self.player1)
        } else {
            None
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.player1, self.player2)
    }
}

/// A pairing enriched with player names, as handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundPairing {
    pub player1_id: CompetitorId,
    pub name1: String,
    pub player2_id: CompetitorId,
    pub name2: String,
}

impl RoundPairing {
    /// Strips the names.
    pub fn pairing(&self) -> Pairing {
        Pairing::new(self.player1_id, self.player2_id)
    }
}

pub(crate) fn pair_key(a: CompetitorId, b: CompetitorId) -> (CompetitorId, CompetitorId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
