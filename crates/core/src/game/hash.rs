//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn handling.
//! It does not own replay execution or journal persistence.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        for agent in [self.human(), self.bot()] {
            hasher.write_i32(agent.pos.row);
            hasher.write_i32(agent.pos.col);
            hasher.write_u32(agent.gold());
        }
        hasher.write_u64(self.map.remaining_gold() as u64);
        hasher.write_u8(u8::from(self.caught));
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(RunOutcome::Win) => 1,
            Some(RunOutcome::Lose) => 2,
        });
        if let Some(core) = self.bot_core() {
            hasher.write_u64(core.decisions_made());
            if let Some(target) = core.target() {
                hasher.write_usize(target.row);
                hasher.write_usize(target.col);
            }
        }
        hasher.finish()
    }
}
