//! Random start positions.

use rand_chacha::rand_core::Rng;

use super::*;

pub(super) fn human_may_spawn(tile: Tile) -> bool {
    matches!(tile, Tile::Floor | Tile::Exit)
}

pub(super) fn bot_may_spawn(tile: Tile) -> bool {
    tile != Tile::Wall
}

/// Uniform pick among tiles accepted by `allowed`, skipping `occupied`.
pub(super) fn pick_tile(
    map: &DungeonMap,
    rng: &mut ChaCha8Rng,
    allowed: fn(Tile) -> bool,
    occupied: Option<Pos>,
) -> Option<Pos> {
    let candidates: Vec<Pos> = map
        .positions()
        .filter(|pos| allowed(map.tile_at(*pos)) && Some(*pos) != occupied)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let pick = rng.next_u64() as usize % candidates.len();
    Some(candidates[pick])
}
