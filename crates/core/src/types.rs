use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::view::WindowPos;

new_key_type! {
    pub struct AgentId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (d_row, d_col) = direction.offset();
        Pos { row: self.row + d_row, col: self.col + d_col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::East, Direction::West, Direction::North, Direction::South];

    /// Row/column delta of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }

    pub fn from_letter(letter: &str) -> Option<Direction> {
        match letter {
            "n" => Some(Direction::North),
            "s" => Some(Direction::South),
            "e" => Some(Direction::East),
            "w" => Some(Direction::West),
            _ => None,
        }
    }
}

/// Terrain stored in a dungeon map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Floor,
    Wall,
    Gold,
    Exit,
}

impl Tile {
    pub fn from_glyph(glyph: char) -> Option<Tile> {
        match glyph {
            '.' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            'G' => Some(Tile::Gold),
            'E' => Some(Tile::Exit),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Gold => 'G',
            Tile::Exit => 'E',
        }
    }
}

/// Symbol held by one cell of a [`crate::view::LocalView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Floor,
    Wall,
    Gold,
    Exit,
    SelfMarker,
    OpponentMarker,
    OutOfBounds,
}

impl Cell {
    pub fn from_tile(tile: Tile) -> Cell {
        match tile {
            Tile::Floor => Cell::Floor,
            Tile::Wall => Cell::Wall,
            Tile::Gold => Cell::Gold,
            Tile::Exit => Cell::Exit,
        }
    }

    /// Walls and cells beyond the map edge can never be entered.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Cell::Wall | Cell::OutOfBounds)
    }
}

/// What the bot asks the turn engine to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCommand {
    RequestView,
    Move(Direction),
}

impl ActionCommand {
    /// Text token understood by the engine's command parser.
    pub fn token(self) -> String {
        match self {
            ActionCommand::RequestView => "look".to_string(),
            ActionCommand::Move(direction) => format!("move {}", direction.letter()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Win,
    Lose,
}

impl RunOutcome {
    pub fn label(self) -> &'static str {
        match self {
            RunOutcome::Win => "WIN",
            RunOutcome::Lose => "LOSE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NoSpawnTile(AgentKind),
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Spawned { kind: AgentKind, pos: Pos },
    CommandRejected { kind: AgentKind },
    Moved { kind: AgentKind, to: Pos },
    MoveBlocked { kind: AgentKind, toward: Direction },
    GoldPickedUp { total: u32 },
    BotLooked { target: Option<WindowPos> },
    BotStuck,
    Caught { at: Pos },
    Quit,
}
