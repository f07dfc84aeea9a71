//! Turn engine behavior: command replies, alternation, catching, outcomes.

use super::test_support::*;
use super::*;
use crate::view::WindowPos;

#[test]
fn hello_and_gold_report_counts() {
    let mut game = game_on(gold_room_fixture(), 1);
    assert_eq!(game.human_command("hello"), Ok("Gold to win: 1".to_string()));
    assert_eq!(game.human_command("gold"), Ok("Gold owned: 0".to_string()));
}

#[test]
fn every_human_command_is_followed_by_one_bot_turn() {
    let mut game = game_on(gold_room_fixture(), 2);
    place(&mut game, Pos { row: 1, col: 1 }, Pos { row: 4, col: 6 });
    for expected in 1..=5u64 {
        game.human_command("hello").expect("game running");
        assert_eq!(game.turn(), expected * 2);
    }
    assert_eq!(game.bot_core().map(BotDecisionCore::decisions_made), Some(5));
}

#[test]
fn unknown_command_wastes_the_turn() {
    let mut game = game_on(gold_room_fixture(), 3);
    place(&mut game, Pos { row: 1, col: 1 }, Pos { row: 4, col: 6 });
    let reply = game.human_command("dance").expect("game running");
    assert_eq!(reply, "Unrecognized command.\nFAIL.");
    assert!(game.log().contains(&LogEvent::CommandRejected { kind: AgentKind::Human }));
    assert_eq!(game.turn(), 2);
}

#[test]
fn human_moves_and_bumps_walls() {
    let mut game = game_on(gold_room_fixture(), 4);
    place(&mut game, Pos { row: 1, col: 1 }, Pos { row: 4, col: 6 });
    assert_eq!(game.human_command("move n"), Ok("FAIL".to_string()));
    assert_eq!(game.human().pos, Pos { row: 1, col: 1 });
    assert_eq!(game.human_command("move e"), Ok("SUCCESS".to_string()));
    assert_eq!(game.human().pos, Pos { row: 1, col: 2 });
}

#[test]
fn pickup_takes_gold_once() {
    let mut game = game_on(gold_room_fixture(), 5);
    place(&mut game, Pos { row: 1, col: 4 }, Pos { row: 4, col: 1 });
    assert_eq!(game.human_command("pickup"), Ok("SUCCESS. Gold owned: 1".to_string()));
    assert_eq!(game.human_command("pickup"), Ok("FAIL. Gold owned: 1".to_string()));
    assert_eq!(game.map().remaining_gold(), 0);
}

#[test]
fn look_shows_window_with_markers() {
    let mut game = game_on(gold_room_fixture(), 6);
    place(&mut game, Pos { row: 1, col: 3 }, Pos { row: 3, col: 5 });
    let reply = game.human_command("look").expect("game running");
    assert_eq!(reply, "#####\n#####\n..PG.\n.....\n....B");
}

#[test]
fn human_view_matches_the_look_reply() {
    let mut game = game_on(gold_room_fixture(), 6);
    place(&mut game, Pos { row: 3, col: 2 }, Pos { row: 4, col: 3 });
    let rows = game.human_view().render('P', 'B');
    assert_eq!(game.human_command("look"), Ok(rows.join("\n")));
}

#[test]
fn bot_look_caches_the_captured_window() {
    let mut game = game_on(gold_room_fixture(), 7);
    place(&mut game, Pos { row: 2, col: 2 }, Pos { row: 2, col: 4 });
    assert_eq!(game.bot_core().and_then(BotDecisionCore::cached_view), None);

    game.human_command("hello").expect("game running");
    let seen = LocalView::capture(game.map(), game.bot().pos, game.human().pos);
    assert_eq!(game.bot_core().and_then(BotDecisionCore::cached_view), Some(&seen));
}

#[test]
fn bot_first_turn_is_a_look_that_spots_a_nearby_human() {
    let mut game = game_on(gold_room_fixture(), 7);
    place(&mut game, Pos { row: 2, col: 2 }, Pos { row: 2, col: 4 });
    game.human_command("hello").expect("game running");
    assert_eq!(
        game.log().last(),
        Some(&LogEvent::BotLooked { target: Some(WindowPos { row: 2, col: 0 }) })
    );
}

#[test]
fn bot_chases_and_catches_a_stationary_human() {
    let mut game = game_on(gold_room_fixture(), 8);
    place(&mut game, Pos { row: 2, col: 2 }, Pos { row: 2, col: 4 });
    // look, step west, look, step west onto the human.
    for _ in 0..4 {
        if game.is_over() {
            break;
        }
        game.human_command("gold").expect("game running");
    }
    assert!(game.was_caught());
    assert_eq!(game.outcome(), Some(RunOutcome::Lose));
    assert!(game.log().contains(&LogEvent::Caught { at: Pos { row: 2, col: 2 } }));
    assert_eq!(game.human_command("hello"), Err(GameError::GameOver));
}

#[test]
fn walking_into_the_bot_also_ends_the_game() {
    let mut game = game_on(gold_room_fixture(), 9);
    place(&mut game, Pos { row: 2, col: 2 }, Pos { row: 2, col: 3 });
    assert_eq!(game.human_command("move e"), Ok(String::new()));
    assert_eq!(game.outcome(), Some(RunOutcome::Lose));
    assert_eq!(game.turn(), 1, "bot does not act once the game is over");
}

#[test]
fn quitting_on_exit_with_enough_gold_wins() {
    let mut game = game_on(gold_room_fixture(), 10);
    place(&mut game, Pos { row: 1, col: 4 }, Pos { row: 4, col: 1 });
    game.human_command("pickup").expect("game running");
    place(&mut game, Pos { row: 4, col: 7 }, Pos { row: 1, col: 1 });
    game.human_command("quit").expect("game running");
    assert_eq!(game.outcome(), Some(RunOutcome::Win));
}

#[test]
fn quitting_on_exit_without_gold_loses() {
    let mut game = game_on(gold_room_fixture(), 11);
    place(&mut game, Pos { row: 4, col: 7 }, Pos { row: 1, col: 1 });
    game.human_command("quit").expect("game running");
    assert_eq!(game.outcome(), Some(RunOutcome::Lose));
}

#[test]
fn bot_behind_a_wall_never_sees_the_human() {
    let mut game = game_on(split_rooms_fixture(), 12);
    place(&mut game, Pos { row: 1, col: 1 }, Pos { row: 1, col: 9 });
    game.human_command("hello").expect("game running");
    assert_eq!(game.log().last(), Some(&LogEvent::BotLooked { target: None }));
}

#[test]
fn boxed_in_bot_forfeits_its_move() {
    let map = map_from_rows(0, &["#####", "#.#.#", "#####"]);
    let mut game = game_on(map, 13);
    place(&mut game, Pos { row: 1, col: 1 }, Pos { row: 1, col: 3 });
    game.human_command("hello").expect("look turn");
    game.human_command("hello").expect("act turn");
    assert_eq!(game.log().last(), Some(&LogEvent::BotStuck));
    assert_eq!(game.bot().pos, Pos { row: 1, col: 3 });
    assert_eq!(game.turn(), 4);
}

#[test]
fn same_seed_same_spawns_and_hash() {
    let left = game_on(gold_room_fixture(), 99);
    let right = game_on(gold_room_fixture(), 99);
    assert_eq!(left.human().pos, right.human().pos);
    assert_eq!(left.bot().pos, right.bot().pos);
    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    assert_eq!((left.seed(), right.seed()), (99, 99));
    assert_ne!(left.human().pos, left.bot().pos);
}

#[test]
fn human_never_spawns_on_gold_or_wall() {
    for seed in 0..64 {
        let game = game_on(gold_room_fixture(), seed);
        let tile = game.map().tile_at(game.human().pos);
        assert!(matches!(tile, Tile::Floor | Tile::Exit), "seed {seed}: {tile:?}");
        assert_ne!(game.map().tile_at(game.bot().pos), Tile::Wall, "seed {seed}");
    }
}
