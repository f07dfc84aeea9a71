//! Uniform random movement restricted to enterable neighbors.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;
use thiserror::Error;

use super::*;

/// Every neighbor of the center is a wall or off the map.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no enterable tile next to the bot")]
pub struct NoLegalMove;

pub fn choose_move(view: &LocalView, rng: &mut ChaCha8Rng) -> Result<Direction, NoLegalMove> {
    let open: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|direction| !view.neighbor(*direction).blocks_movement())
        .collect();
    if open.is_empty() {
        return Err(NoLegalMove);
    }
    // Uniform over open neighbors.
    let pick = rng.next_u32() as usize % open.len();
    Ok(open[pick])
}
