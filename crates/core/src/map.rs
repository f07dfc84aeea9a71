//! Dungeon map loading and tile queries.
//!
//! Map files are plain text:
//! ```text
//! name Very small Labyrinth of Doom
//! win 2
//! ########
//! #..G..E#
//! ########
//! ```

use thiserror::Error;

use crate::types::{Pos, Tile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map is missing its `name` header line")]
    MissingName,
    #[error("map is missing its `win` header line")]
    MissingWin,
    #[error("`win` header value '{0}' must be a non-negative number")]
    InvalidWin(String),
    #[error("map has no grid rows")]
    EmptyGrid,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown tile '{glyph}' at row {row}, column {col}")]
    UnknownTile { glyph: char, row: usize, col: usize },
    #[error("map has no floor or exit tile to spawn on")]
    NoOpenTile,
}

#[derive(Clone, Debug)]
pub struct DungeonMap {
    name: String,
    gold_to_win: u32,
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl DungeonMap {
    pub fn parse(source: &str) -> Result<Self, MapError> {
        let mut lines = source.lines().map(|line| line.trim_end_matches('\r'));

        let name = lines
            .next()
            .and_then(|line| line.strip_prefix("name "))
            .map(|name| name.trim().to_string())
            .ok_or(MapError::MissingName)?;

        let win_raw = lines
            .next()
            .and_then(|line| line.strip_prefix("win "))
            .ok_or(MapError::MissingWin)?
            .trim();
        let gold_to_win =
            win_raw.parse::<u32>().map_err(|_| MapError::InvalidWin(win_raw.to_string()))?;

        let rows: Vec<&str> = lines.filter(|line| !line.is_empty()).collect();
        let Some(first) = rows.first() else {
            return Err(MapError::EmptyGrid);
        };
        let width = first.chars().count();

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RaggedRow { row, expected: width, found });
            }
            for (col, glyph) in line.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(MapError::UnknownTile { glyph, row, col })?;
                tiles.push(tile);
            }
        }

        if !tiles.iter().any(|tile| matches!(tile, Tile::Floor | Tile::Exit)) {
            return Err(MapError::NoOpenTile);
        }

        Ok(Self { name, gold_to_win, width, height: rows.len(), tiles })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold_to_win(&self) -> u32 {
        self.gold_to_win
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    /// Tile at `pos`; anything off the map reads as wall.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        if !self.in_bounds(pos) {
            return Tile::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| Pos { row: row as i32, col: col as i32 })
        })
    }

    pub fn remaining_gold(&self) -> usize {
        self.tiles.iter().filter(|tile| **tile == Tile::Gold).count()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.width + (pos.col as usize)
    }
}
