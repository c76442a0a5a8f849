//! Session driver shared by both UIs
//!
//! Owns the game state, the strategy set and the tick pacing. The UIs feed it
//! `ControlAction`s and call `tick` on their own timers; everything else
//! (strategy dispatch, speed ramp, restarts) lives here.

use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::config::Config;
use crate::game::{Direction, GameState};
use crate::strategy::{StrategyKind, StrategySet};

/// Administrative inputs produced by the key handlers of both UIs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Steer(Direction),
    ToggleStrategy(StrategyKind),
    ToggleWrapAround,
    /// Start a new game; only honored after game over
    Restart,
    SpeedUp,
    SpeedDown,
    /// Handled by the UI loops, not the controller
    Quit,
}

pub struct GameController {
    pub state: GameState,
    strategies: StrategySet,
    speed_ms: u64,
    initial_speed_ms: u64,
    acceleration_ms: u64,
    min_speed_ms: u64,
}

impl GameController {
    pub fn new(config: &Config, rng: &mut impl Rng) -> Self {
        let game = &config.game;
        let state = GameState::new(game.grid_width, game.grid_height, game.wrap_around, rng);
        let strategies = StrategySet::new(
            game.grid_width,
            game.grid_height,
            config.hamiltonian.random_cycle,
            game.strategy,
            rng,
        );

        Self {
            state,
            strategies,
            speed_ms: game.properties.initial_speed,
            initial_speed_ms: game.properties.initial_speed,
            acceleration_ms: game.properties.speed_acceleration,
            min_speed_ms: game.properties.min_speed,
        }
    }

    /// Advance one simulation step using the active strategy. Every point
    /// scored shortens the tick interval, down to the configured floor.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.state.game_over {
            return;
        }

        let direction = self
            .strategies
            .active_mut()
            .get_move(&self.state.snake.body, self.state.food);

        let old_score = self.state.score;
        self.state.update(direction, rng);

        if self.state.score > old_score {
            self.accelerate();
        }
    }

    /// Current tick interval
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategies.active_name()
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategies.active_kind()
    }

    /// Apply an administrative input. `Quit` is owned by the UI loops and
    /// ignored here.
    pub fn apply(&mut self, action: ControlAction, rng: &mut impl Rng) {
        match action {
            ControlAction::Steer(direction) => {
                // Steering only reaches the snake under player control
                if self.strategies.active_kind() == StrategyKind::Player {
                    self.strategies
                        .player
                        .set_pending_direction(direction, self.state.snake.len());
                }
            }
            ControlAction::ToggleStrategy(kind) => {
                self.strategies.toggle(kind);
                info!(strategy = self.strategies.active_name(), "strategy switched");
            }
            ControlAction::ToggleWrapAround => self.state.toggle_wrap_around(),
            ControlAction::Restart => {
                if self.state.game_over {
                    self.restart(rng);
                }
            }
            ControlAction::SpeedUp => self.accelerate(),
            ControlAction::SpeedDown => self.speed_ms += self.acceleration_ms,
            ControlAction::Quit => {}
        }
    }

    fn accelerate(&mut self) {
        self.speed_ms = self
            .speed_ms
            .saturating_sub(self.acceleration_ms)
            .max(self.min_speed_ms);
    }

    fn restart(&mut self, rng: &mut impl Rng) {
        self.state.reset(rng);
        self.speed_ms = self.initial_speed_ms;
        self.strategies.reset_transient();
        info!("game restarted");
    }
}
