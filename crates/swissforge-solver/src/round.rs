//! One Swiss round against a storage backend.

use swissforge_core::{Result, RoundPairing, Standings};
use tracing::warn;

use crate::engine::PairingEngine;
use crate::store::TournamentStore;

/// Computes, persists and returns the next round's pairings.
///
/// The working round is cleared before the computation and again on every
/// exit path, so a failed round leaves nothing behind. The `&mut` borrow on
/// `store` keeps other rounds out for the whole call.
///
/// # Errors
///
/// Pairing failures from the engine and any storage error, unmodified.
pub fn swiss_pairings<S>(store: &mut S, engine: &PairingEngine) -> Result<Vec<RoundPairing>>
where
    S: TournamentStore + ?Sized,
{
    store.clear_round_working_state()?;
    let result = pair_round(store, engine);
    let cleared = store.clear_round_working_state();

    match (result, cleared) {
        (Ok(pairings), Ok(())) => Ok(pairings),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(clear_err)) => {
            warn!(event = "clear_failed", error = %clear_err);
            Err(err)
        }
    }
}

fn pair_round<S>(store: &mut S, engine: &PairingEngine) -> Result<Vec<RoundPairing>>
where
    S: TournamentStore + ?Sized,
{
    let standings = Standings::new(store.list_standings()?)?;
    let history = store.list_match_history()?;

    let round = engine.solve(&standings, &history)?;
    for pairing in &round.pairings {
        store.persist_pairing(pairing.player1, pairing.player2)?;
    }
    store.fetch_full_round_pairings()
}
