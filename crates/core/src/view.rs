//! The 5x5 window an agent sees around itself.
//! This module exists so every consumer reads the same snapshot shape.
//! It does not decide what the agent does with what it sees.

use crate::map::DungeonMap;
use crate::types::{Cell, Direction, Pos};

pub const VIEW_SIZE: usize = 5;
pub const VIEW_RADIUS: i32 = 2;

/// Window coordinates: `row`/`col` in `0..VIEW_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowPos {
    pub row: usize,
    pub col: usize,
}

impl WindowPos {
    pub const CENTER: WindowPos = WindowPos { row: 2, col: 2 };

    /// Neighbor one step away, or `None` when it leaves the window.
    pub fn step(self, direction: Direction) -> Option<WindowPos> {
        let (d_row, d_col) = direction.offset();
        let row = self.row.checked_add_signed(d_row as isize)?;
        let col = self.col.checked_add_signed(d_col as isize)?;
        (row < VIEW_SIZE && col < VIEW_SIZE).then_some(WindowPos { row, col })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalView {
    cells: [[Cell; VIEW_SIZE]; VIEW_SIZE],
}

impl LocalView {
    pub fn from_cells(cells: [[Cell; VIEW_SIZE]; VIEW_SIZE]) -> Self {
        Self { cells }
    }

    /// Snapshot the window centered on `viewer`.
    pub fn capture(map: &DungeonMap, viewer: Pos, opponent: Pos) -> Self {
        let mut cells = [[Cell::OutOfBounds; VIEW_SIZE]; VIEW_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                let pos = Pos {
                    row: viewer.row + row as i32 - VIEW_RADIUS,
                    col: viewer.col + col as i32 - VIEW_RADIUS,
                };
                *cell = if pos == viewer {
                    Cell::SelfMarker
                } else if !map.in_bounds(pos) {
                    Cell::OutOfBounds
                } else if pos == opponent {
                    Cell::OpponentMarker
                } else {
                    Cell::from_tile(map.tile_at(pos))
                };
            }
        }
        Self { cells }
    }

    /// Build a view from five text rows using map glyphs plus `S` (self),
    /// `O` (opponent) and `X` (out of bounds).
    pub fn parse(rows: [&str; VIEW_SIZE]) -> Option<Self> {
        let mut cells = [[Cell::OutOfBounds; VIEW_SIZE]; VIEW_SIZE];
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != VIEW_SIZE {
                return None;
            }
            for (col, glyph) in text.chars().enumerate() {
                cells[row][col] = match glyph {
                    '.' => Cell::Floor,
                    '#' => Cell::Wall,
                    'G' => Cell::Gold,
                    'E' => Cell::Exit,
                    'S' => Cell::SelfMarker,
                    'O' => Cell::OpponentMarker,
                    'X' => Cell::OutOfBounds,
                    _ => return None,
                };
            }
        }
        Some(Self { cells })
    }

    pub fn cell(&self, at: WindowPos) -> Cell {
        self.cells[at.row][at.col]
    }

    /// Cell one step from the center.
    pub fn neighbor(&self, direction: Direction) -> Cell {
        match WindowPos::CENTER.step(direction) {
            Some(at) => self.cell(at),
            None => Cell::OutOfBounds,
        }
    }

    /// First window position holding `wanted`, scanning row-major.
    pub fn find(&self, wanted: Cell) -> Option<WindowPos> {
        self.positions().find(|at| self.cell(*at) == wanted)
    }

    pub fn positions(&self) -> impl Iterator<Item = WindowPos> {
        (0..VIEW_SIZE).flat_map(|row| (0..VIEW_SIZE).map(move |col| WindowPos { row, col }))
    }

    /// Text rows as shown to a player. Cells beyond the map edge print as walls.
    pub fn render(&self, viewer_glyph: char, opponent_glyph: char) -> Vec<String> {
        self.cells
            .iter()
            .map(|line| {
                line.iter()
                    .map(|cell| match cell {
                        Cell::Floor => '.',
                        Cell::Wall | Cell::OutOfBounds => '#',
                        Cell::Gold => 'G',
                        Cell::Exit => 'E',
                        Cell::SelfMarker => viewer_glyph,
                        Cell::OpponentMarker => opponent_glyph,
                    })
                    .collect()
            })
            .collect()
    }
}
