//! Session counters for the status line. Nothing here is persisted.

use std::time::{Duration, Instant};

pub struct SessionMetrics {
    started: Instant,
    pub elapsed: Duration,
    pub games_played: u32,
    pub high_score: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
            high_score: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.started.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: usize) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
