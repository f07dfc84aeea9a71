//! Optional TOML configuration and its merge with flags and environment.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Cli;
use crate::seed::{SeedChoice, resolve_seed};

pub const MAPS_DIR_ENV: &str = "DOOM_MAPS_DIR";
pub const DEFAULT_MAPS_DIR: &str = "maps";
pub const DEFAULT_MAP: &str = "easyMap";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DoomConfig {
    pub maps_dir: Option<PathBuf>,
    pub default_map: Option<String>,
    pub seed: Option<u64>,
}

impl DoomConfig {
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Everything a session needs, after precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub maps_dir: PathBuf,
    pub default_map: String,
    pub map: Option<String>,
    pub seed: SeedChoice,
    pub record: Option<PathBuf>,
}

/// Flag > environment > config file > built-in default.
pub fn resolve_settings(
    cli: &Cli,
    env_maps_dir: Option<String>,
    file: &DoomConfig,
    generated_seed: u64,
) -> Settings {
    let maps_dir = cli
        .maps_dir
        .clone()
        .or_else(|| env_maps_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
        .or_else(|| file.maps_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPS_DIR));
    let default_map = file.default_map.clone().unwrap_or_else(|| DEFAULT_MAP.to_string());

    Settings {
        maps_dir,
        default_map,
        map: cli.map.clone(),
        seed: resolve_seed(cli.seed, file.seed, generated_seed),
        record: cli.record.clone(),
    }
}
