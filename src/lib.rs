//! # life_engine
//!
//! The core engine for Conway's Game of Life.
//! Owns the grid state, the B3/S23 transition rule, and the
//! play/stop/step/reset control loop. Rendering and input handling belong
//! to a host; see the programs under `demos/` for a terminal host.

pub mod engine;
pub use engine::Engine;
pub use engine::RunState;
pub use engine::StepOutcome;

pub mod patterns;

mod cell;
mod config;
mod error;
mod grid;
mod observer;

pub use cell::Cell;
pub use config::SimulatorConfig;
pub use error::EngineError;
pub use grid::Grid;
pub use observer::GenerationObserver;
