//! Shared fixtures for the `game` test suites.
//! This module exists to avoid repeating map setup and agent placement.
//! It does not own production gameplay logic.

use super::*;

pub(super) fn map_from_rows(gold_to_win: u32, rows: &[&str]) -> DungeonMap {
    let source = format!("name Fixture\nwin {gold_to_win}\n{}\n", rows.join("\n"));
    DungeonMap::parse(&source).expect("fixture map should parse")
}

/// Open room with a gold pile in the middle of the north wall row and an exit in
/// the south-east corner.
pub(super) fn gold_room_fixture() -> DungeonMap {
    map_from_rows(1, &[
        "#########",
        "#...G...#",
        "#.......#",
        "#.......#",
        "#......E#",
        "#########",
    ])
}

/// Two rooms joined by a one-tile door; the bot cannot see through walls.
pub(super) fn split_rooms_fixture() -> DungeonMap {
    map_from_rows(0, &[
        "###########",
        "#...#.....#",
        "#.........#",
        "#...#.....#",
        "###########",
    ])
}

pub(super) fn game_on(map: DungeonMap, seed: u64) -> Game {
    Game::new(map, seed).expect("fixture game should spawn")
}

/// Move both agents to fixed tiles and reset the bot's memory.
pub(super) fn place(game: &mut Game, human: Pos, bot: Pos) {
    game.agents[game.human_id].pos = human;
    game.agents[game.bot_id].pos = bot;
    game.agents[game.bot_id].role = Role::Bot(BotDecisionCore::new());
}
