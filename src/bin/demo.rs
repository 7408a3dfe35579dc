//! Demonstration driver.
//!
//! Replays a three-player opening on the classic 25-space board, then lets
//! seeded dice finish the game, printing the standings as it goes. Run with
//! `RUST_LOG=debug` to watch every settlement.

use realty_engine::{DiceRng, GameEngine, GameResult, MoveOutcome};

const RENTS: [i64; 24] = [
    50, 50, 50, 75, 75, 75, 100, 100, 100, 150, 150, 150, 200, 200, 200, 250, 250, 250, 300, 300,
    300, 350, 350, 350,
];

const NAMES: [&str; 3] = ["Player 1", "Player 2", "Player 3"];

fn main() -> GameResult<()> {
    env_logger::init();

    let mut game = GameEngine::new();
    game.create_spaces(50, &RENTS)?;
    for name in NAMES {
        game.create_player(name, 300)?;
    }

    // Scripted opening: everyone steps out and grabs what they can afford.
    for (name, steps) in [("Player 1", 1), ("Player 2", 2), ("Player 3", 3)] {
        game.move_player(name, steps)?;
        let bought = game.buy_space(name)?;
        println!(
            "{name} is on {} with {} (bought: {bought})",
            game.location(name)?,
            game.balance(name)?
        );
    }

    // Dice take it from here. The GO bonus mints money every lap, so a
    // stalemate is possible; cap the rounds rather than spin forever.
    let mut dice = DiceRng::new(2022);
    for round in 1..=10_000 {
        for name in NAMES {
            match game.move_player(name, dice.roll())? {
                MoveOutcome::Skipped => continue,
                MoveOutcome::Eliminated { owner, surrendered, .. } => {
                    println!("round {round}: {name} goes broke, {surrendered} to {owner}");
                }
                MoveOutcome::RentPaid { .. } | MoveOutcome::Landed(_) => {
                    game.buy_space(name)?;
                }
            }
        }

        let standing = game.check_game_over();
        if !standing.is_empty() || game.players().all(|(_, p)| p.is_eliminated()) {
            match standing.first() {
                Some(winner) => println!("game over after {round} rounds: {winner} wins"),
                None => println!("game over after {round} rounds: everyone is broke"),
            }
            break;
        }
    }

    for (_, player) in game.players() {
        println!(
            "{}: {} at {}, owns {} spaces",
            player.name(),
            player.balance(),
            player.location(),
            player.properties().count()
        );
    }
    Ok(())
}
