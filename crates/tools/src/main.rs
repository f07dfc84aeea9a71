use anyhow::{Context, Result};
use clap::Parser;
use doom_core::{CommandJournal, DungeonMap, ReplayResult, replay_to_end};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the recorded command journal (JSON)
    #[arg(short, long)]
    journal: PathBuf,
    /// Map file the journal was recorded on
    #[arg(short, long)]
    map: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal = CommandJournal::load(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let map_source = fs::read_to_string(&args.map)
        .with_context(|| format!("Failed to read map file: {}", args.map.display()))?;
    let map = DungeonMap::parse(&map_source).with_context(|| "Failed to parse map file")?;

    if map.name() != journal.map_name {
        eprintln!(
            "warning: journal was recorded on '{}' but map is '{}'",
            journal.map_name,
            map.name()
        );
    }

    let result: ReplayResult = replay_to_end(&map, &journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;

    println!("Replay complete.");
    println!("Final Turn: {}", result.final_turn);
    println!("Outcome: {}", result.final_outcome.label());
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
