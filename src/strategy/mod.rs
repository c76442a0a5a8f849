//! Pluggable movement controllers
//!
//! Each tick the active strategy turns the observable state (body and food)
//! into the next heading. The keyboard, a greedy chaser and two
//! Hamiltonian-tour autopilots all sit behind the same trait.

mod adaptive;
mod dummy;
mod fixed;
mod player;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use adaptive::AdaptiveCycleStrategy;
pub use dummy::DummyStrategy;
pub use fixed::FixedCycleStrategy;
pub use player::PlayerStrategy;

use crate::game::{Direction, Position};

/// A movement controller. Implementations keep internal state between ticks
/// (last heading, precomputed tours).
pub trait MovementStrategy {
    /// Display name for the status line
    fn name(&self) -> &'static str;

    /// Compute the next heading given the body (head first) and the food
    fn get_move(&mut self, body: &[Position], food: Option<Position>) -> Direction;
}

/// Selector for the four built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Player,
    FixedCycle,
    AdaptiveCycle,
    Dummy,
}

/// All four strategies for one session, one of them active.
///
/// Switching leaves the game state and the other strategies untouched; the
/// strategy keys toggle, so selecting the active autonomous strategy again
/// returns control to the player.
pub struct StrategySet {
    pub player: PlayerStrategy,
    pub dummy: DummyStrategy,
    pub fixed: FixedCycleStrategy,
    pub adaptive: AdaptiveCycleStrategy,
    active: StrategyKind,
}

impl StrategySet {
    pub fn new(
        width: i32,
        height: i32,
        random_cycle: bool,
        initial: StrategyKind,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            player: PlayerStrategy::new(),
            dummy: DummyStrategy::new(),
            fixed: FixedCycleStrategy::new(width, height),
            adaptive: AdaptiveCycleStrategy::new(width, height, random_cycle, rng),
            active: initial,
        }
    }

    pub fn active_kind(&self) -> StrategyKind {
        self.active
    }

    pub fn active_name(&self) -> &'static str {
        self.active_ref().name()
    }

    /// Select `kind`, or return to player control when `kind` is already
    /// active
    pub fn toggle(&mut self, kind: StrategyKind) {
        self.active = if self.active == kind {
            StrategyKind::Player
        } else {
            kind
        };
    }

    pub fn active_mut(&mut self) -> &mut dyn MovementStrategy {
        match self.active {
            StrategyKind::Player => &mut self.player,
            StrategyKind::Dummy => &mut self.dummy,
            StrategyKind::FixedCycle => &mut self.fixed,
            StrategyKind::AdaptiveCycle => &mut self.adaptive,
        }
    }

    fn active_ref(&self) -> &dyn MovementStrategy {
        match self.active {
            StrategyKind::Player => &self.player,
            StrategyKind::Dummy => &self.dummy,
            StrategyKind::FixedCycle => &self.fixed,
            StrategyKind::AdaptiveCycle => &self.adaptive,
        }
    }

    /// Fresh player and chaser state for a new game; the tour strategies keep
    /// their precomputed cycles
    pub fn reset_transient(&mut self) {
        self.player = PlayerStrategy::new();
        self.dummy = DummyStrategy::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set() -> StrategySet {
        let mut rng = StdRng::seed_from_u64(1);
        StrategySet::new(4, 4, false, StrategyKind::Player, &mut rng)
    }

    #[test]
    fn test_toggle_switches_and_returns_to_player() {
        let mut strategies = set();
        assert_eq!(strategies.active_kind(), StrategyKind::Player);

        strategies.toggle(StrategyKind::FixedCycle);
        assert_eq!(strategies.active_kind(), StrategyKind::FixedCycle);

        strategies.toggle(StrategyKind::Dummy);
        assert_eq!(strategies.active_kind(), StrategyKind::Dummy);

        strategies.toggle(StrategyKind::Dummy);
        assert_eq!(strategies.active_kind(), StrategyKind::Player);
    }

    #[test]
    fn test_active_name_follows_selection() {
        let mut strategies = set();
        assert_eq!(strategies.active_name(), "Player");
        strategies.toggle(StrategyKind::AdaptiveCycle);
        assert_eq!(strategies.active_name(), "Cycle+Skip");
    }
}
