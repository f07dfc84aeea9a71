//! Decision core of the computer opponent.
//!
//! The bot only ever knows the 5x5 window from its most recent look. It
//! alternates between refreshing that window and acting on it: odd-numbered
//! decisions request a view, even-numbered ones move. When the last view
//! contained the opponent the move follows a shortest path inside the window,
//! otherwise it is a random step into an open neighbor.

use log::debug;
use rand_chacha::ChaCha8Rng;

use crate::types::{ActionCommand, Cell, Direction};
use crate::view::{LocalView, VIEW_SIZE, WindowPos};

mod director;
mod distance;
mod wander;

pub use director::{FirstStep, first_step_toward};
pub use distance::{DistanceGrid, UNREACHABLE};
pub use wander::{NoLegalMove, choose_move};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotDecisionCore {
    // Parity drives look/act alternation; starts odd so the first decision looks.
    decisions: u64,
    view: Option<LocalView>,
    target: Option<WindowPos>,
}

impl Default for BotDecisionCore {
    fn default() -> Self {
        Self::new()
    }
}

impl BotDecisionCore {
    pub fn new() -> Self {
        Self { decisions: 1, view: None, target: None }
    }

    /// Next command for the turn engine. Every call advances the cadence,
    /// including calls that fail.
    pub fn next_action(&mut self, rng: &mut ChaCha8Rng) -> Result<ActionCommand, NoLegalMove> {
        let refresh = self.decisions % 2 == 1;
        self.decisions += 1;

        if refresh {
            return Ok(ActionCommand::RequestView);
        }
        let Some(view) = self.view else {
            debug!("act phase without a view; looking instead");
            return Ok(ActionCommand::RequestView);
        };

        let direction = match self.target {
            Some(target) => self.chase(target, &view, rng)?,
            None => choose_move(&view, rng)?,
        };
        Ok(ActionCommand::Move(direction))
    }

    /// Result of a view refresh. `target` is the opponent's window position,
    /// `None` when the opponent was not in sight.
    pub fn report_view(&mut self, view: LocalView, target: Option<WindowPos>) {
        self.view = Some(view);
        self.target = target;
    }

    /// Convenience for engines that do not locate the opponent themselves.
    pub fn report_view_scanned(&mut self, view: LocalView) {
        let target = view.find(Cell::OpponentMarker);
        self.report_view(view, target);
    }

    pub fn target(&self) -> Option<WindowPos> {
        self.target
    }

    pub fn cached_view(&self) -> Option<&LocalView> {
        self.view.as_ref()
    }

    pub fn decisions_made(&self) -> u64 {
        self.decisions - 1
    }

    fn chase(
        &self,
        target: WindowPos,
        view: &LocalView,
        rng: &mut ChaCha8Rng,
    ) -> Result<Direction, NoLegalMove> {
        let grid = DistanceGrid::compute(view);
        match first_step_toward(target, &grid) {
            FirstStep::Toward(direction) => {
                debug!("chasing target at {target:?}: {direction:?}");
                Ok(direction)
            }
            FirstStep::Fallback => {
                debug!("target at {target:?} unreachable in view; wandering");
                choose_move(view, rng)
            }
        }
    }
}
