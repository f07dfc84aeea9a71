use anyhow::{Context, Result, bail};
use clap::Parser;
use doom_core::{DungeonMap, Game, LogEvent, Tile};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Games to play on each map
    #[arg(short, long, default_value_t = 50)]
    games: u32,
    /// Human commands per game before quitting
    #[arg(short, long, default_value_t = 500)]
    turns: u32,
    #[arg(long, default_value = "maps")]
    maps_dir: PathBuf,
}

const HUMAN_COMMANDS: [&str; 9] =
    ["move n", "move s", "move e", "move w", "look", "pickup", "gold", "hello", "shout"];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

#[derive(Default)]
struct Tally {
    games: u32,
    caught: u32,
    stuck_turns: u32,
}

fn play_one(map: &DungeonMap, game_seed: u64, rng: &mut ChaCha8Rng, turns: u32) -> Result<Game> {
    let mut game = Game::new(map.clone(), game_seed)
        .map_err(|e| anyhow::anyhow!("failed to start game: {e:?}"))?;
    let mut last_gold = 0;

    for _ in 0..turns {
        if game.is_over() {
            break;
        }
        game.human_command(&choose(rng, &HUMAN_COMMANDS))
            .map_err(|e| anyhow::anyhow!("command rejected: {e:?}"))?;

        for agent in game.agents() {
            if game.map().tile_at(agent.pos) == Tile::Wall {
                bail!("Invariant failed: {:?} inside wall at {:?}", agent.kind(), agent.pos);
            }
        }
        if game.human().gold() < last_gold {
            bail!("Invariant failed: gold decreased");
        }
        last_gold = game.human().gold();
        if !game.is_over() && game.turn() % 2 != 0 {
            bail!("Invariant failed: turn parity broken at turn {}", game.turn());
        }
    }
    if !game.is_over() {
        game.human_command("quit").map_err(|e| anyhow::anyhow!("quit rejected: {e:?}"))?;
    }
    Ok(game)
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "Starting Fuzz harness on seed {} for {} games x {} turns per map...",
        args.seed, args.games, args.turns
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut paths: Vec<PathBuf> = fs::read_dir(&args.maps_dir)
        .with_context(|| format!("Failed to list maps: {}", args.maps_dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    for path in paths {
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read map: {}", path.display()))?;
        let map = DungeonMap::parse(&source)
            .with_context(|| format!("Failed to parse map: {}", path.display()))?;

        let mut tally = Tally::default();
        for _ in 0..args.games {
            let game_seed = rng.next_u64();
            let game = play_one(&map, game_seed, &mut rng, args.turns)
                .with_context(|| format!("map '{}' game seed {game_seed}", map.name()))?;
            tally.games += 1;
            tally.caught += u32::from(game.was_caught());
            tally.stuck_turns +=
                game.log().iter().filter(|event| **event == LogEvent::BotStuck).count() as u32;
        }
        println!(
            "{}: {} games, caught {}, bot stuck turns {}",
            map.name(),
            tally.games,
            tally.caught,
            tally.stuck_turns
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
