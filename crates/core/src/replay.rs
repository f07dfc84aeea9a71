use crate::{
    game::Game,
    journal::CommandJournal,
    map::DungeonMap,
    types::{GameError, RunOutcome},
};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    Setup(GameError),
    /// Commands ran out before the game ended.
    MissingInput { turns: u64 },
    /// The game ended with commands left over.
    TrailingInput { unused: usize },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_outcome: RunOutcome,
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
}

pub fn replay_to_end(
    map: &DungeonMap,
    journal: &CommandJournal,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(map.clone(), journal.seed).map_err(ReplayError::Setup)?;
    let mut commands = journal.commands.iter();

    for command in commands.by_ref() {
        game.human_command(command).map_err(ReplayError::Setup)?;
        if game.is_over() {
            break;
        }
    }

    let Some(final_outcome) = game.outcome() else {
        return Err(ReplayError::MissingInput { turns: game.turn() });
    };
    let unused = commands.count();
    if unused > 0 {
        return Err(ReplayError::TrailingInput { unused });
    }

    Ok(ReplayResult {
        final_outcome,
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.turn(),
    })
}
