use std::env;
use std::io::{self, BufRead};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use doom::config::{DoomConfig, MAPS_DIR_ENV, resolve_settings};
use doom::maps::{self, MapEntry};
use doom::seed::generate_runtime_seed;
use doom::session::run_session;
use doom::{APP_NAME, Cli, format_snapshot_hash};
use doom_core::{CommandJournal, Game};
use log::{LevelFilter, info};

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn choose_entry<R: BufRead>(
    entries: &[MapEntry],
    requested: Option<&str>,
    default_map: &str,
    input: &mut R,
) -> Result<MapEntry> {
    if let Some(stem) = requested {
        return maps::find_map(entries, stem)
            .cloned()
            .with_context(|| format!("map '{stem}' not found"));
    }
    let mut stdout = io::stdout().lock();
    maps::prompt_for_map(entries, default_map, input, &mut stdout).cloned()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => DoomConfig::load(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => DoomConfig::default(),
    };
    let settings =
        resolve_settings(&cli, env::var(MAPS_DIR_ENV).ok(), &file_config, generate_runtime_seed());

    let entries = maps::discover_maps(&settings.maps_dir).with_context(|| {
        format!("Failed to list maps directory: {}", settings.maps_dir.display())
    })?;
    if entries.is_empty() {
        return Err(anyhow!("no maps found in {}", settings.maps_dir.display()));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let entry = choose_entry(&entries, settings.map.as_deref(), &settings.default_map, &mut input)?;
    let map = maps::load_map(&entry)?;

    let seed = settings.seed;
    info!("{APP_NAME}: map '{}' seed {} ({})", entry.stem, seed.value(), seed.source());
    let mut game = Game::new(map, seed.value())
        .map_err(|e| anyhow!("Failed to start game on '{}': {e:?}", entry.stem))?;
    let mut journal = CommandJournal::new(seed.value(), game.map().name());

    let mut stdout = io::stdout().lock();
    let outcome = run_session(&mut game, &mut input, &mut stdout, &mut journal)?;
    info!(
        "{:?} after {} turns, snapshot {}",
        outcome,
        game.turn(),
        format_snapshot_hash(game.snapshot_hash())
    );

    if let Some(path) = &settings.record {
        journal
            .write_atomic(path)
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        info!("journal written to {}", path.display());
    }

    Ok(())
}
