//! Grid Snake - a tick-driven Snake game for the terminal
//!
//! This library provides:
//! - Core simulation (game module), free of I/O and timers
//! - Keyboard and swipe input decoding (input module)
//! - TUI rendering (render module)
//! - The interactive driver and its tick source (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
