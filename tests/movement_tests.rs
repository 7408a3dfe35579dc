//! Movement tests: wraparound arithmetic and the GO-bonus boundary.

use proptest::prelude::*;
use realty_engine::{GameEngine, MoveOutcome, SpaceId};

fn solo_game(go_bonus: i64, rent_count: usize, balance: i64) -> GameEngine {
    let mut game = GameEngine::new();
    game.create_spaces(go_bonus, &vec![1; rent_count]).unwrap();
    game.create_player("Runner", balance).unwrap();
    game
}

#[test]
fn test_landing_exactly_on_last_space_pays_no_bonus() {
    // Track of 7: GO plus six spaces. Six steps from GO is the last space.
    let mut game = solo_game(50, 6, 300);
    game.move_player("Runner", 6).unwrap();

    assert_eq!(game.location("Runner").unwrap(), SpaceId::new(6));
    assert_eq!(game.balance("Runner").unwrap(), 300);
}

#[test]
fn test_overshooting_by_one_pays_the_bonus() {
    // One more step from the last space wraps onto GO: bonus due.
    let mut game = solo_game(50, 6, 300);
    game.move_player("Runner", 6).unwrap();
    let outcome = game.move_player("Runner", 1).unwrap();

    assert_eq!(outcome, MoveOutcome::Landed(SpaceId::GO));
    assert_eq!(game.location("Runner").unwrap(), SpaceId::GO);
    assert_eq!(game.balance("Runner").unwrap(), 350);
}

#[test]
fn test_passing_go_mid_move_pays_the_bonus() {
    // Five steps from space 4 on a 7-track crosses GO and lands on space 2.
    let mut game = solo_game(50, 6, 300);
    game.move_player("Runner", 4).unwrap();
    game.move_player("Runner", 5).unwrap();

    assert_eq!(game.location("Runner").unwrap(), SpaceId::new(2));
    assert_eq!(game.balance("Runner").unwrap(), 350);
}

proptest! {
    /// Movement always lands on `(old + steps) % track_length`, and the
    /// bonus is credited exactly when the raw sum runs past the last index.
    #[test]
    fn prop_move_wraps_and_credits_go(
        rent_count in 1usize..40,
        go_bonus in 1i64..200,
        steps in proptest::collection::vec(1u8..=6, 1..60),
    ) {
        let track_length = rent_count + 1;
        let mut game = solo_game(go_bonus, rent_count, 1_000);

        let mut location = 0usize;
        let mut balance = 1_000i64;
        for step in steps {
            game.move_player("Runner", step).unwrap();

            let raw = location + step as usize;
            location = raw % track_length;
            if raw > track_length - 1 {
                balance += go_bonus;
            }
            prop_assert_eq!(
                game.location("Runner").unwrap(),
                SpaceId::new(location as u16)
            );
            prop_assert_eq!(game.balance("Runner").unwrap(), balance);
        }
    }

    /// A broke player never moves, whatever step count is requested.
    #[test]
    fn prop_eliminated_player_never_moves(steps in proptest::collection::vec(1u8..=6, 1..20)) {
        let mut game = solo_game(50, 6, 0);
        for step in steps {
            prop_assert_eq!(game.move_player("Runner", step).unwrap(), MoveOutcome::Skipped);
            prop_assert_eq!(game.location("Runner").unwrap(), SpaceId::GO);
            prop_assert_eq!(game.balance("Runner").unwrap(), 0);
        }
    }

    /// Rent settlement conserves money between mover and owner.
    #[test]
    fn prop_settlement_conserves_money(mover_balance in 1i64..2_000) {
        let mut game = GameEngine::new();
        game.create_spaces(0, &[100; 6]).unwrap();
        game.create_player("Owner", 1_000).unwrap();
        game.create_player("Mover", mover_balance).unwrap();

        game.move_player("Owner", 3).unwrap();
        prop_assume!(game.buy_space("Owner").unwrap());
        let total = game.balance("Owner").unwrap() + game.balance("Mover").unwrap();

        // GO bonus is zero on this board, so the move only settles rent.
        game.move_player("Mover", 3).unwrap();
        prop_assert_eq!(
            game.balance("Owner").unwrap() + game.balance("Mover").unwrap(),
            total
        );
    }
}
