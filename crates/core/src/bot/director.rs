//! Recovers the first move of a shortest path by walking back from the target.
//! This module exists to turn a distance table into a single step.
//! It does not compute distances or choose random moves.

use super::*;

/// Result of steering toward a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstStep {
    Toward(Direction),
    /// No usable path; the caller should wander instead.
    Fallback,
}

// Order neighbors are tried while backtracking. Fixed so equal-length
// paths always resolve the same way.
const BACKTRACK_ORDER: [Direction; 4] =
    [Direction::North, Direction::West, Direction::South, Direction::East];

pub fn first_step_toward(target: WindowPos, grid: &DistanceGrid) -> FirstStep {
    if !grid.is_reachable(target) || grid.at(target) == 0 {
        return FirstStep::Fallback;
    }

    let mut current = target;
    while grid.at(current) != 1 {
        let here = grid.at(current);
        let closer = BACKTRACK_ORDER
            .into_iter()
            .filter_map(|direction| current.step(direction))
            .find(|neighbor| grid.at(*neighbor) < here);
        match closer {
            Some(neighbor) => current = neighbor,
            None => {
                debug!("backtrack stalled at {current:?} (distance {here})");
                return FirstStep::Fallback;
            }
        }
    }

    match (current.row, current.col) {
        (2, 3) => FirstStep::Toward(Direction::East),
        (2, 1) => FirstStep::Toward(Direction::West),
        (3, 2) => FirstStep::Toward(Direction::South),
        (1, 2) => FirstStep::Toward(Direction::North),
        _ => {
            debug!("backtrack ended off-center at {current:?}");
            FirstStep::Fallback
        }
    }
}
