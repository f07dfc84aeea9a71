//! Turn engine: owns the map and both agents, and runs human and bot turns
//! strictly in alternation, human first.

use log::debug;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::bot::{BotDecisionCore, NoLegalMove};
use crate::map::DungeonMap;
use crate::types::*;
use crate::view::LocalView;

mod commands;
mod hash;
mod spawn;
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use commands::Command;

const UNRECOGNIZED_REPLY: &str = "Unrecognized command.\nFAIL.";

#[derive(Clone, Debug)]
pub enum Role {
    Human { gold: u32 },
    Bot(BotDecisionCore),
}

#[derive(Clone, Debug)]
pub struct Agent {
    pub id: AgentId,
    pub pos: Pos,
    pub role: Role,
}

impl Agent {
    pub fn kind(&self) -> AgentKind {
        match self.role {
            Role::Human { .. } => AgentKind::Human,
            Role::Bot(_) => AgentKind::Bot,
        }
    }

    pub fn gold(&self) -> u32 {
        match self.role {
            Role::Human { gold } => gold,
            Role::Bot(_) => 0,
        }
    }

    fn glyph(&self) -> char {
        match self.role {
            Role::Human { .. } => 'P',
            Role::Bot(_) => 'B',
        }
    }
}

pub struct Game {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    map: DungeonMap,
    agents: SlotMap<AgentId, Agent>,
    human_id: AgentId,
    bot_id: AgentId,
    log: Vec<LogEvent>,
    caught: bool,
    outcome: Option<RunOutcome>,
}

impl Game {
    pub fn new(map: DungeonMap, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let human_pos = spawn::pick_tile(&map, &mut rng, spawn::human_may_spawn, None)
            .ok_or(GameError::NoSpawnTile(AgentKind::Human))?;
        let bot_pos = spawn::pick_tile(&map, &mut rng, spawn::bot_may_spawn, Some(human_pos))
            .ok_or(GameError::NoSpawnTile(AgentKind::Bot))?;

        let mut agents = SlotMap::with_key();
        let human_id = agents.insert(Agent {
            id: AgentId::default(), // Will be overwritten
            pos: human_pos,
            role: Role::Human { gold: 0 },
        });
        agents[human_id].id = human_id;
        let bot_id = agents.insert(Agent {
            id: AgentId::default(),
            pos: bot_pos,
            role: Role::Bot(BotDecisionCore::new()),
        });
        agents[bot_id].id = bot_id;

        Ok(Self {
            seed,
            turn: 0,
            rng,
            map,
            agents,
            human_id,
            bot_id,
            log: vec![
                LogEvent::Spawned { kind: AgentKind::Human, pos: human_pos },
                LogEvent::Spawned { kind: AgentKind::Bot, pos: bot_pos },
            ],
            caught: false,
            outcome: None,
        })
    }

    /// Run the human's turn with `raw` and, unless that ended the game, the
    /// bot's reply turn. Returns the text shown to the human.
    pub fn human_command(&mut self, raw: &str) -> Result<String, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let reply = self.dispatch(self.human_id, Command::parse(raw));
        self.turn += 1;

        if self.outcome.is_none() {
            self.run_bot_turn();
        }
        Ok(reply)
    }

    fn run_bot_turn(&mut self) {
        let Role::Bot(core) = &mut self.agents[self.bot_id].role else {
            return;
        };
        match core.next_action(&mut self.rng) {
            Ok(action) => {
                let token = action.token();
                debug!("bot turn {}: {token}", self.turn);
                self.dispatch(self.bot_id, Command::parse(&token));
            }
            Err(NoLegalMove) => {
                debug!("bot turn {}: boxed in, turn forfeited", self.turn);
                self.log.push(LogEvent::BotStuck);
            }
        }
        self.turn += 1;
    }

    fn dispatch(&mut self, actor: AgentId, command: Command) -> String {
        match command {
            Command::Hello => format!("Gold to win: {}", self.map.gold_to_win()),
            Command::Gold => format!("Gold owned: {}", self.agents[actor].gold()),
            Command::Look => self.look(actor),
            Command::Pickup => self.pickup(actor),
            Command::Move(direction) => self.step(actor, direction),
            Command::Quit => {
                self.log.push(LogEvent::Quit);
                self.finish();
                String::new()
            }
            Command::Unknown(_) => {
                self.log.push(LogEvent::CommandRejected { kind: self.agents[actor].kind() });
                UNRECOGNIZED_REPLY.to_string()
            }
        }
    }

    fn look(&mut self, actor: AgentId) -> String {
        let opponent = self.opponent_of(actor);
        let view = LocalView::capture(&self.map, self.agents[actor].pos, self.agents[opponent].pos);
        let rows = view.render(self.agents[actor].glyph(), self.agents[opponent].glyph());

        if let Role::Bot(core) = &mut self.agents[actor].role {
            core.report_view_scanned(view);
            self.log.push(LogEvent::BotLooked { target: core.target() });
        }
        rows.join("\n")
    }

    fn pickup(&mut self, actor: AgentId) -> String {
        let pos = self.agents[actor].pos;
        let on_gold = self.map.tile_at(pos) == Tile::Gold;
        if on_gold && let Role::Human { gold } = &mut self.agents[actor].role {
            *gold += 1;
            let total = *gold;
            self.map.set_tile(pos, Tile::Floor);
            self.log.push(LogEvent::GoldPickedUp { total });
            return format!("SUCCESS. Gold owned: {total}");
        }
        format!("FAIL. Gold owned: {}", self.agents[actor].gold())
    }

    fn step(&mut self, actor: AgentId, direction: Direction) -> String {
        let kind = self.agents[actor].kind();
        let target = self.agents[actor].pos.step(direction);

        if target == self.agents[self.opponent_of(actor)].pos {
            self.caught = true;
            self.log.push(LogEvent::Caught { at: target });
            self.finish();
            return String::new();
        }
        if self.map.tile_at(target) == Tile::Wall {
            self.log.push(LogEvent::MoveBlocked { kind, toward: direction });
            return "FAIL".to_string();
        }

        self.agents[actor].pos = target;
        self.log.push(LogEvent::Moved { kind, to: target });
        "SUCCESS".to_string()
    }

    fn finish(&mut self) {
        let human = &self.agents[self.human_id];
        let escaped = self.map.tile_at(human.pos) == Tile::Exit
            && human.gold() >= self.map.gold_to_win();
        let outcome = if escaped && !self.caught { RunOutcome::Win } else { RunOutcome::Lose };
        self.outcome = Some(outcome);
    }

    fn opponent_of(&self, actor: AgentId) -> AgentId {
        if actor == self.human_id { self.bot_id } else { self.human_id }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Turns taken so far, counting human and bot turns separately.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn was_caught(&self) -> bool {
        self.caught
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    pub fn human(&self) -> &Agent {
        &self.agents[self.human_id]
    }

    pub fn bot(&self) -> &Agent {
        &self.agents[self.bot_id]
    }

    pub fn bot_core(&self) -> Option<&BotDecisionCore> {
        match &self.agents[self.bot_id].role {
            Role::Bot(core) => Some(core),
            Role::Human { .. } => None,
        }
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// The human's current window, without spending a turn.
    pub fn human_view(&self) -> LocalView {
        LocalView::capture(&self.map, self.human().pos, self.bot().pos)
    }
}
