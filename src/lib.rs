//! Homestead library crate — the farm simulation model plus its Bevy shell.
//!
//! The binary crate (`main.rs`) is the playable entry point. This library
//! exposes the same modules so that `tests/` integration tests can drive
//! the model and the shell without a window or GPU.

pub mod shared;
pub mod config;
pub mod world;
pub mod data;
pub mod farming;
pub mod player;
pub mod economy;
pub mod model;
pub mod game;
pub mod input;
pub mod ui;
