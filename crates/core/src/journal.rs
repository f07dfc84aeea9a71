//! Recorded human command streams.
//!
//! A journal holds the seed and every command the human typed, which is
//! enough to rebuild a session exactly: all other randomness comes from the
//! seeded generator.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandJournal {
    pub format_version: u16,
    pub seed: u64,
    pub map_name: String,
    pub commands: Vec<String>,
}

impl CommandJournal {
    pub fn new(seed: u64, map_name: &str) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed,
            map_name: map_name.to_string(),
            commands: Vec::new(),
        }
    }

    pub fn record(&mut self, command: &str) {
        self.commands.push(command.trim().to_string());
    }

    /// Write via a sibling `.json.tmp` file and rename into place.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let journal: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(journal)
    }
}
