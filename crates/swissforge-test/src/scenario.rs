//! Lettered tournament fixtures.
//!
//! Competitor `A` has id 1, `B` id 2 and so on, and is registered under its
//! letter as name. This keeps scenario tests readable:
//!
//! ```
//! use swissforge_test::scenario::{history, id, lettered_standings};
//!
//! let standings = lettered_standings(&[3, 3, 2, 2]);
//! let played = history(&[('A', 'B')]);
//!
//! assert_eq!(standings.rank_of(id('C')), Some(2));
//! assert!(played.has_played(id('B'), id('A')));
//! ```

use swissforge_core::{Competitor, CompetitorId, MatchHistory, Pairing, Standings};

/// Id of the competitor registered as `letter`.
pub fn id(letter: char) -> CompetitorId {
    assert!(letter.is_ascii_uppercase(), "fixture letters are A..=Z");
    CompetitorId(u64::from(letter as u8 - b'A') + 1)
}

/// Competitors `A`, `B`, ... with the given win counts.
pub fn lettered_competitors(wins: &[u32]) -> Vec<Competitor> {
    wins.iter()
        .enumerate()
        .map(|(i, &w)| {
            let name = char::from(b'A' + i as u8).to_string();
            Competitor::new(i as u64 + 1, name).with_record(w, w)
        })
        .collect()
}

/// Standings of lettered competitors with the given win counts.
pub fn lettered_standings(wins: &[u32]) -> Standings {
    Standings::new(lettered_competitors(wins)).expect("fixture ids are unique")
}

/// `n` competitors with ids `1..=n` and no wins.
pub fn flat_standings(n: usize) -> Standings {
    let competitors = (1..=n as u64)
        .map(|i| Competitor::new(i, format!("Player {i}")))
        .collect();
    Standings::new(competitors).expect("fixture ids are unique")
}

/// History of already-played lettered pairs.
pub fn history(pairs: &[(char, char)]) -> MatchHistory {
    pairs.iter().map(|&(a, b)| (id(a), id(b))).collect()
}

/// Pairing of two lettered competitors.
pub fn pairing(a: char, b: char) -> Pairing {
    Pairing::new(id(a), id(b))
}
