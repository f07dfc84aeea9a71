pub mod bot;
pub mod game;
pub mod journal;
pub mod map;
pub mod replay;
pub mod types;
pub mod view;

pub use bot::{BotDecisionCore, DistanceGrid, FirstStep, NoLegalMove};
pub use game::{Agent, Command, Game, Role};
pub use journal::CommandJournal;
pub use map::{DungeonMap, MapError};
pub use replay::*;
pub use types::*;
pub use view::{LocalView, VIEW_SIZE, WindowPos};
