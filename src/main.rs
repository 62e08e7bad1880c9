//! Non-interactive Zonk demo (default binary).
//!
//! Three bots play each other until one banks the target score or the turn
//! cap runs out. Settings come from `GameConfig::from_env` (see
//! `zonk_core::config`); this binary changes the defaults to a 2000-point
//! target and a 30-turn cap. Set `ZONK_JSON=1` to print one JSON turn report
//! per line instead of the text view, and `RUST_LOG=debug` to trace rolls.

use std::env;

use anyhow::{Context, Result};
use log::info;

use zonk::core::{Dice, Game, GameConfig, Player, RollOutcome, Strategy, TurnReport};
use zonk::types::StrategyKind;

const DEMO_TARGET_SCORE: u32 = 2000;
const DEMO_MAX_TURNS: u32 = 30;

const BOTS: [(&str, StrategyKind); 3] = [
    ("ConservativeBot", StrategyKind::Conservative),
    ("AggressiveBot", StrategyKind::Aggressive),
    ("BalancedBot", StrategyKind::Balanced),
];

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::from_env_or(GameConfig {
        target_score: DEMO_TARGET_SCORE,
        max_turns: Some(DEMO_MAX_TURNS),
        ..GameConfig::default()
    })
    .context("loading configuration")?;
    let json = env::var("ZONK_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    run(&config, json)
}

fn run(config: &GameConfig, json: bool) -> Result<()> {
    let dice = config.seed.map(Dice::new).unwrap_or_else(Dice::from_entropy);

    let players = BOTS.iter().map(|(name, _)| Player::new(*name)).collect();
    let strategies = BOTS
        .iter()
        .map(|(_, kind)| Strategy::from_config(*kind, config))
        .collect();
    let mut game = Game::new(players, strategies, config.target_score, dice)?;
    info!("dice seed {}", game.dice().seed());

    if !json {
        print_banner(config);
    }

    let max_turns = config.max_turns.unwrap_or(u32::MAX);
    let mut turns = 0u32;
    while !game.is_game_over() && turns < max_turns {
        if !json {
            print!("{}", game.display_game_state());
        }

        let report = game.play_turn();
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_turn(&report);
        }
        turns += 1;

        if let Some(max_rounds) = config.max_rounds {
            game.enforce_round_cap(max_rounds);
        }
    }

    if json {
        println!("{}", serde_json::to_string(&game.get_game_state())?);
        return Ok(());
    }

    let rule = "=".repeat(60);
    println!("\n{rule}\nGAME OVER!\n{rule}");
    print!("{}", game.display_game_state());

    if let Some(winner) = game.get_winner() {
        println!(
            "\n*** WINNER: {} with {} points! ***",
            winner.name(),
            winner.total_score()
        );
    }

    println!("\nFinal Standings:");
    let mut standings: Vec<&Player> = game.players().iter().collect();
    standings.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
    for (i, player) in standings.iter().enumerate() {
        println!("  {}. {}: {} points", i + 1, player.name(), player.total_score());
    }
    println!("\n{rule}");

    Ok(())
}

fn print_banner(config: &GameConfig) {
    let rule = "=".repeat(60);
    println!("\n{rule}\nZONK GAME - Demo (Non-Interactive)\n{rule}");
    println!(
        "\nThree bots will compete to reach {} points:",
        config.target_score
    );
    println!(
        "  - ConservativeBot: Banks after {} points, avoids risks",
        config.conservative.bank_at
    );
    println!(
        "  - AggressiveBot: Takes more risks, banks after {} points",
        config.aggressive.bank_at
    );
    println!(
        "  - BalancedBot: Moderate risk-taking, banks after {} points",
        config.balanced.bank_at
    );
    println!("{rule}");
}

fn print_turn(report: &TurnReport) {
    let rule = "=".repeat(60);
    println!("\n{rule}\nPlayer: {}\n{rule}", report.player);

    for (i, roll) in report.rolls.iter().enumerate() {
        println!("\n  Roll {}:", i + 1);
        println!("    Dice: {}", roll.dice);
        match &roll.outcome {
            RollOutcome::Zonk => println!("    [X] ZONK! No scoring combinations!"),
            RollOutcome::Scored {
                points,
                scoring_dice,
                kept_dice,
            } => {
                println!("    Score: {points}");
                println!("    Scoring dice: {scoring_dice}");
                println!("    Kept dice: {kept_dice}");
            }
        }
    }

    if report.zonk {
        println!("\n  [!] ZONK! Lost all round points!");
    } else if let Some(total) = report.final_score {
        println!("\n  [OK] Banked score! Total: {total}");
    }
    println!("{rule}");
}
