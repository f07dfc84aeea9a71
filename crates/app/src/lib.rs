use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub mod config;
pub mod maps;
pub mod seed;
pub mod session;

pub const APP_NAME: &str = "Dungeons Of Doom";

/// Play Dungeons Of Doom against a bot that hunts you by sight.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `*.txt` map files
    #[arg(long)]
    pub maps_dir: Option<PathBuf>,
    /// Map to play (file name without `.txt`); skips the menu
    #[arg(short, long)]
    pub map: Option<String>,
    /// Seed for spawn placement and bot randomness
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Write the session's command journal here when the game ends
    #[arg(long)]
    pub record: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
