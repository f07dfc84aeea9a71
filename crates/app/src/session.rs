//! Line-oriented game session over any reader/writer pair.

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use doom_core::{CommandJournal, Game, RunOutcome};
use log::{debug, info};

/// Feed human lines to `game` until it ends, echoing replies. End of input
/// counts as `quit`. Every command is appended to `journal`.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
    journal: &mut CommandJournal,
) -> Result<RunOutcome> {
    writeln!(output, "{}", game.map().name())?;
    output.flush()?;

    let mut line = String::new();
    while !game.is_over() {
        line.clear();
        let command = if input.read_line(&mut line)? == 0 {
            info!("input closed; quitting");
            "quit"
        } else {
            line.trim()
        };

        journal.record(command);
        let reply =
            game.human_command(command).map_err(|e| anyhow!("command rejected: {e:?}"))?;
        debug!("turn {}: {command:?} -> {reply:?}", game.turn());
        if !reply.is_empty() {
            writeln!(output, "{reply}")?;
            output.flush()?;
        }
    }

    let outcome = game.outcome().unwrap_or(RunOutcome::Lose);
    writeln!(output, "{}", outcome.label())?;
    output.flush()?;
    Ok(outcome)
}
