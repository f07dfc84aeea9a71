//! Breadth-first step counts from the center of a local view.
//! This module exists so path recovery can work from a plain distance table.
//! It does not pick moves.

use std::collections::VecDeque;

use super::*;

/// Marks cells the center cannot reach. One more than the longest possible
/// path through a 5x5 window.
pub const UNREACHABLE: u8 = 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistanceGrid {
    steps: [[u8; VIEW_SIZE]; VIEW_SIZE],
}

impl DistanceGrid {
    pub fn compute(view: &LocalView) -> Self {
        let mut steps = [[UNREACHABLE; VIEW_SIZE]; VIEW_SIZE];
        let center = WindowPos::CENTER;
        steps[center.row][center.col] = 0;

        let mut queue = VecDeque::from([center]);
        while let Some(current) = queue.pop_front() {
            let next = steps[current.row][current.col] + 1;
            for direction in SEARCH_ORDER {
                let Some(neighbor) = current.step(direction) else {
                    continue;
                };
                if view.cell(neighbor).blocks_movement() {
                    continue;
                }
                if steps[neighbor.row][neighbor.col] > next {
                    steps[neighbor.row][neighbor.col] = next;
                    queue.push_back(neighbor);
                }
            }
        }

        Self { steps }
    }

    pub fn from_steps(steps: [[u8; VIEW_SIZE]; VIEW_SIZE]) -> Self {
        Self { steps }
    }

    pub fn at(&self, at: WindowPos) -> u8 {
        self.steps[at.row][at.col]
    }

    pub fn is_reachable(&self, at: WindowPos) -> bool {
        self.at(at) != UNREACHABLE
    }
}

// Neighbor expansion order; any order yields the same distances.
const SEARCH_ORDER: [Direction; 4] =
    [Direction::North, Direction::East, Direction::South, Direction::West];
