//! Snake on a toroidal board.
//!
//! The engine (`geometry`, `snake`, `apple`, `game`, `grid`) is a set of total
//! functions over plain values. The remaining modules drive it from a terminal.

pub mod apple;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod shared;
pub mod snake;
pub mod terminal_runtime;
