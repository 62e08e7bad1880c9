//! End-to-end turn and round flow through the public facade

use zonk::core::{Dice, Game, GameError, Player, RollOutcome, ScriptedDice, Strategy};
use zonk::types::Roll;

fn roll(faces: &[u8]) -> Roll {
    Roll::new(faces).unwrap()
}

fn scripted_game(target_score: u32, script: &[&[u8]]) -> Game<ScriptedDice> {
    let players = ["Careful", "Reckless", "Steady"]
        .into_iter()
        .map(Player::new)
        .collect();
    let strategies = vec![
        Strategy::conservative(),
        Strategy::aggressive(),
        Strategy::balanced(),
    ];
    let dice = ScriptedDice::with_fallback(script.iter().map(|f| roll(f)), Dice::new(99));
    Game::new(players, strategies, target_score, dice).unwrap()
}

#[test]
fn test_second_player_wins_on_first_bank() {
    let mut game = scripted_game(100, &[&[2, 3, 4, 6, 2, 3], &[1, 1, 1, 2, 3, 4]]);

    let first = game.play_turn();
    assert_eq!(first.player, "Careful");
    assert!(first.zonk);
    assert!(!first.banked);
    assert_eq!(first.final_score, None);
    assert_eq!(first.rolls.len(), 1);
    assert!(!game.is_game_over());

    let second = game.play_turn();
    assert_eq!(second.player, "Reckless");
    assert!(second.banked);
    assert_eq!(second.final_score, Some(1000));
    match &second.rolls[0].outcome {
        RollOutcome::Scored {
            points, kept_dice, ..
        } => {
            assert_eq!(*points, 1000);
            assert_eq!(kept_dice, &roll(&[1, 1, 1]));
        }
        RollOutcome::Zonk => panic!("expected a scoring roll"),
    }

    assert!(game.is_game_over());
    assert_eq!(game.get_winner().map(Player::name), Some("Reckless"));
    assert_eq!(game.winner_index(), Some(1));
    assert_eq!(game.players()[0].total_score(), 0);
    assert_eq!(game.current_player_index(), 2);
    assert_eq!(game.round_number(), 1);
}

#[test]
fn test_conservative_rolls_again_then_banks() {
    let mut game = scripted_game(10_000, &[&[1, 2, 3, 4, 6, 6], &[5, 5, 5, 2, 3]]);

    let report = game.play_turn();
    assert_eq!(report.rolls.len(), 2);
    assert_eq!(report.rolls[0].num_dice, 6);
    assert_eq!(report.rolls[1].num_dice, 5);
    assert!(report.banked);
    assert_eq!(report.final_score, Some(600));
    assert_eq!(game.players()[0].total_score(), 600);
    assert_eq!(game.players()[0].round_score(), 0);
}

#[test]
fn test_play_passes_around_the_table() {
    let mut game = scripted_game(
        10_000,
        &[&[2, 2, 3, 3, 4, 6], &[2, 2, 3, 3, 4, 6], &[2, 2, 3, 3, 4, 6]],
    );

    for expected in 0..3 {
        assert_eq!(game.current_player_index(), expected);
        assert_eq!(game.round_number(), 1);
        assert!(game.play_turn().zonk);
    }
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.round_number(), 2);
}

#[test]
fn test_construction_errors() {
    let err = Game::from_names(["A", "B"], vec![Strategy::balanced()], 1000, 1).unwrap_err();
    assert_eq!(
        err,
        GameError::StrategyCountMismatch {
            players: 2,
            strategies: 1
        }
    );

    let err = Game::from_names(Vec::<String>::new(), Vec::new(), 1000, 1).unwrap_err();
    assert_eq!(err, GameError::NoPlayers);

    let err = Game::from_names(["A"], vec![Strategy::balanced()], 0, 1).unwrap_err();
    assert_eq!(err, GameError::ZeroTargetScore);
}

#[test]
fn test_seeded_game_reaches_a_winner() {
    let mut game = Game::from_names(
        ["Careful", "Reckless", "Steady"],
        vec![
            Strategy::conservative(),
            Strategy::aggressive(),
            Strategy::balanced(),
        ],
        2000,
        2024,
    )
    .unwrap();

    let winner = game.play_game(Some(100)).cloned().unwrap();
    assert!(game.is_game_over());
    assert!(
        winner.total_score() >= 2000
            || game
                .players()
                .iter()
                .all(|p| p.total_score() <= winner.total_score())
    );
    for p in game.players() {
        assert_eq!(p.total_score() % 50, 0);
        assert_eq!(p.round_score(), 0);
    }
}

#[test]
fn test_uncapped_game_ends_only_at_target() {
    let new_game = || {
        Game::from_names(
            ["Careful", "Reckless", "Steady"],
            vec![
                Strategy::conservative(),
                Strategy::aggressive(),
                Strategy::balanced(),
            ],
            2000,
            7,
        )
        .unwrap()
    };

    // Step a twin game to find who banks past the target first
    let mut twin = new_game();
    let first_to_target = loop {
        let report = twin.play_turn();
        if report.final_score.is_some_and(|total| total >= 2000) {
            break report.player;
        }
    };

    let mut game = new_game();
    let winner = game.play_game(None).cloned().unwrap();
    assert!(game.is_game_over());
    assert!(winner.total_score() >= game.target_score());
    assert_eq!(winner.name(), first_to_target);
    assert_eq!(game.round_number(), twin.round_number());
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = Game::from_names(
            ["A", "B"],
            vec![Strategy::aggressive(), Strategy::balanced()],
            3000,
            seed,
        )
        .unwrap();
        let mut reports = Vec::new();
        while !game.is_game_over() && reports.len() < 200 {
            reports.push(game.play_turn());
        }
        reports
    };

    assert_eq!(play(31), play(31));
}

#[test]
fn test_round_cap_awards_leader() {
    // Only Steady scores in round 1; round 2 would start past a cap of 1.
    let mut game = scripted_game(
        10_000,
        &[&[2, 2, 3, 3, 4, 6], &[2, 3, 4, 6, 6, 3], &[1, 1, 1, 5, 2, 3]],
    );
    let winner = game.play_game(Some(1)).map(|p| p.name().to_string());

    assert_eq!(winner.as_deref(), Some("Steady"));
    assert_eq!(game.players()[2].total_score(), 1050);
    assert_eq!(game.round_number(), 2);
    assert!(game.is_game_over());
}
