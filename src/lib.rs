//! Snake with pluggable pilots
//!
//! The core simulation (game module) is pure data-in data-out; the cycle and
//! strategy modules implement the autonomous movement; control, input,
//! render and modes wire it all to a terminal or a window.

pub mod config;
pub mod control;
pub mod cycle;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod strategy;
