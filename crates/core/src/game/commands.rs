//! Text command grammar shared by the human prompt and the bot's tokens.

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Hello,
    Gold,
    Look,
    Pickup,
    Quit,
    Move(Direction),
    Unknown(String),
}

impl Command {
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Command {
        let normalized = raw.trim().to_lowercase();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        match words.as_slice() {
            ["hello"] => Command::Hello,
            ["gold"] => Command::Gold,
            ["look"] => Command::Look,
            ["pickup"] => Command::Pickup,
            ["quit"] => Command::Quit,
            ["move", letter] => match Direction::from_letter(letter) {
                Some(direction) => Command::Move(direction),
                None => Command::Unknown(normalized.clone()),
            },
            _ => Command::Unknown(normalized.clone()),
        }
    }
}
