//! Club Night Example
//!
//! Eight players meet for a three-round Swiss evening. Each round is paired
//! from the current standings, and the better-seeded player (lower id) wins
//! every game so the run is reproducible.
//!
//! Pairing behavior can be tuned through an optional `pairing.toml` in the
//! working directory.

use swissforge::prelude::*;

const PLAYERS: [&str; 8] = [
    "Magnus", "Hikaru", "Fabiano", "Ding", "Ian", "Alireza", "Wesley", "Anish",
];
const ROUNDS: usize = 3;

fn main() -> Result<(), SwissForgeError> {
    swissforge::console::init();

    let config = PairingConfig::load_or_default("pairing.toml")?;
    let engine = PairingEngine::new(config);

    let mut tournament = InMemoryTournament::new();
    for name in PLAYERS {
        tournament.register_player(name);
    }

    for round in 1..=ROUNDS {
        let pairings = swiss_pairings(&mut tournament, &engine)?;

        println!("\nRound {round}");
        for p in &pairings {
            println!("  {:<10} vs {}", p.name1, p.name2);
            let (winner, loser) = if p.player1_id < p.player2_id {
                (p.player1_id, p.player2_id)
            } else {
                (p.player2_id, p.player1_id)
            };
            tournament.report_match(winner, loser)?;
        }
    }

    println!("\nFinal standings");
    for (place, c) in tournament.player_standings().iter().enumerate() {
        println!(
            "  {:>2}. {:<10} {} / {}",
            place + 1,
            c.name,
            c.wins,
            c.matches_played
        );
    }

    Ok(())
}
