//! Windowed UI built on eframe/egui

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::egui;
use rand::rngs::StdRng;

use crate::control::{ControlAction, GameController};
use crate::game::{Direction, Position};
use crate::metrics::SessionMetrics;
use crate::strategy::StrategyKind;

const CELL_PIXELS: f32 = 24.0;
const CELL_GAP: f32 = 1.0;

pub struct GraphicalMode {
    controller: GameController,
    metrics: SessionMetrics,
    rng: StdRng,
    last_tick: Instant,
}

impl GraphicalMode {
    pub fn new(controller: GameController, rng: StdRng) -> Self {
        Self {
            controller,
            metrics: SessionMetrics::new(),
            rng,
            last_tick: Instant::now(),
        }
    }

    /// Open the window and run until it closes
    pub fn run(controller: GameController, rng: StdRng) -> Result<()> {
        let width = controller.state.width as f32 * CELL_PIXELS + 40.0;
        let height = controller.state.height as f32 * CELL_PIXELS + 120.0;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height])
                .with_title("ham_snake"),
            ..Default::default()
        };

        eframe::run_native(
            "ham_snake",
            options,
            Box::new(|_cc| Ok(Box::new(GraphicalMode::new(controller, rng)))),
        )
        .map_err(|e| anyhow!("window error: {e}"))
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(ControlAction::Steer(Direction::Up))
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(ControlAction::Steer(Direction::Down))
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(ControlAction::Steer(Direction::Left))
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(ControlAction::Steer(Direction::Right))
            } else if i.key_pressed(egui::Key::H) {
                Some(ControlAction::ToggleStrategy(StrategyKind::FixedCycle))
            } else if i.key_pressed(egui::Key::J) {
                Some(ControlAction::ToggleStrategy(StrategyKind::AdaptiveCycle))
            } else if i.key_pressed(egui::Key::G) {
                Some(ControlAction::ToggleStrategy(StrategyKind::Dummy))
            } else if i.key_pressed(egui::Key::T) {
                Some(ControlAction::ToggleWrapAround)
            } else if i.key_pressed(egui::Key::Space) {
                Some(ControlAction::Restart)
            } else if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                Some(ControlAction::SpeedUp)
            } else if i.key_pressed(egui::Key::Minus) {
                Some(ControlAction::SpeedDown)
            } else if i.key_pressed(egui::Key::Q) || i.key_pressed(egui::Key::Escape) {
                Some(ControlAction::Quit)
            } else {
                None
            }
        });

        match action {
            Some(ControlAction::Quit) => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
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

    fn tick_if_due(&mut self) {
        if self.last_tick.elapsed() < self.controller.interval() {
            return;
        }
        self.last_tick = Instant::now();

        let was_over = self.controller.state.game_over;
        self.controller.tick(&mut self.rng);
        if !was_over && self.controller.state.game_over {
            self.metrics.on_game_over(self.controller.state.score);
        }
    }

    fn draw(&self, ui: &mut egui::Ui) {
        let state = &self.controller.state;

        ui.vertical_centered(|ui| {
            ui.label(format!(
                "Score: {}   Pilot: {}   Tick: {}ms   Wrap: {}   Time: {}   Best: {}",
                state.score,
                self.controller.strategy_name(),
                self.controller.interval().as_millis(),
                if state.wrap_around { "on" } else { "off" },
                self.metrics.format_time(),
                self.metrics.high_score,
            ));
            ui.add_space(6.0);
        });

        let canvas = egui::Vec2::new(
            state.width as f32 * CELL_PIXELS,
            state.height as f32 * CELL_PIXELS,
        );
        let (response, painter) = ui.allocate_painter(canvas, egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, egui::Color32::from_rgb(20, 24, 28));

        for y in 0..state.height {
            for x in 0..state.width {
                let pos = Position::new(x, y);
                let color = if pos == state.snake.head() {
                    Some(egui::Color32::from_rgb(120, 220, 255))
                } else if state.snake.contains(pos) {
                    Some(egui::Color32::from_rgb(70, 170, 90))
                } else if state.food == Some(pos) {
                    Some(egui::Color32::from_rgb(220, 70, 60))
                } else {
                    None
                };

                if let Some(color) = color {
                    let min = origin + egui::vec2(x as f32 * CELL_PIXELS, y as f32 * CELL_PIXELS);
                    let size = egui::Vec2::splat(CELL_PIXELS - CELL_GAP);
                    painter.rect_filled(egui::Rect::from_min_size(min, size), 2.0, color);
                }
            }
        }

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if state.game_over {
                let (headline, color) = if state.win {
                    ("You win!", egui::Color32::GREEN)
                } else {
                    ("Game over", egui::Color32::RED)
                };
                ui.label(
                    egui::RichText::new(format!("{headline} (final score {})", state.score))
                        .color(color)
                        .size(20.0),
                );
                ui.label("Space restarts");
            } else {
                ui.label("Arrows/WASD move · H cycle · J cycle+skip · G dummy · T wrap · Q quit");
            }
        });
    }
}

impl eframe::App for GraphicalMode {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.tick_if_due();
        self.metrics.update();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw(ui);
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
