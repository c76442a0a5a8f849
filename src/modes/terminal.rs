//! Terminal UI: an async loop multiplexing key events, simulation ticks and
//! frame rendering

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::rngs::StdRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::control::{ControlAction, GameController};
use crate::input::map_key;
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

pub struct TerminalMode {
    controller: GameController,
    metrics: SessionMetrics,
    renderer: Renderer,
    rng: StdRng,
    should_quit: bool,
}

impl TerminalMode {
    pub fn new(controller: GameController, rng: StdRng) -> Self {
        Self {
            controller,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            rng,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_duration = self.controller.interval();
        let mut tick_timer = interval(tick_duration);

        // Render at 30 FPS regardless of game speed
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.controller, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Eating speeds the game up; follow the controller's interval
            if self.controller.interval() != tick_duration {
                tick_duration = self.controller.interval();
                tick_timer = interval(tick_duration);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match map_key(key) {
                Some(ControlAction::Quit) => self.should_quit = true,
                Some(ControlAction::Restart) => {
                    if self.controller.state.game_over {
                        self.metrics.on_game_start();
                    }
                    self.controller.apply(ControlAction::Restart, &mut self.rng);
                }
                Some(action) => self.controller.apply(action, &mut self.rng),
                None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let was_over = self.controller.state.game_over;
        self.controller.tick(&mut self.rng);

        if !was_over && self.controller.state.game_over {
            self.metrics.on_game_over(self.controller.state.score);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
