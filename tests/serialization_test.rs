//! JSON shape of turn reports and game snapshots

use serde_json::json;
use zonk::core::{Dice, Game, Player, ScriptedDice, Strategy};
use zonk::types::Roll;

fn two_player_game(script: &[&[u8]]) -> Game<ScriptedDice> {
    let dice = ScriptedDice::with_fallback(
        script.iter().map(|f| Roll::new(f).unwrap()),
        Dice::new(5),
    );
    Game::new(
        vec![Player::new("Ann"), Player::new("Bob")],
        vec![Strategy::balanced(), Strategy::conservative()],
        500,
        dice,
    )
    .unwrap()
}

#[test]
fn test_banked_turn_report_json() {
    let mut game = two_player_game(&[&[1, 2, 3, 4, 5, 6]]);
    let report = game.play_turn();

    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(
        v,
        json!({
            "player": "Ann",
            "rolls": [{
                "num_dice": 6,
                "dice": [1, 2, 3, 4, 5, 6],
                "result": "scored",
                "points": 1500,
                "scoring_dice": [1, 2, 3, 4, 5, 6],
                "kept_dice": [1, 2, 3, 4, 5, 6],
            }],
            "zonk": false,
            "banked": true,
            "final_score": 1500,
        })
    );
}

#[test]
fn test_zonk_turn_report_json() {
    let mut game = two_player_game(&[&[2, 2, 3, 4, 6, 6]]);
    let v = serde_json::to_value(game.play_turn()).unwrap();

    assert_eq!(v["zonk"], true);
    assert_eq!(v["banked"], false);
    assert!(v["final_score"].is_null());
    assert_eq!(v["rolls"][0]["result"], "zonk");
    assert!(v["rolls"][0].get("points").is_none());
}

#[test]
fn test_game_snapshot_json() {
    let mut game = two_player_game(&[&[1, 2, 3, 4, 5, 6]]);
    game.play_turn();

    let v = serde_json::to_value(game.get_game_state()).unwrap();
    assert_eq!(v["round"], 1);
    assert_eq!(v["current_player"], "Bob");
    assert_eq!(v["target_score"], 500);
    assert_eq!(v["game_over"], true);
    assert_eq!(v["winner"], "Ann");
    assert_eq!(
        v["players"],
        json!([
            {"name": "Ann", "total_score": 1500, "round_score": 0},
            {"name": "Bob", "total_score": 0, "round_score": 0},
        ])
    );
}
