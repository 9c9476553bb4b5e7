//! Deterministic simulation module
//!
//! The physics and run-state core. This module must stay free of rendering
//! and platform dependencies:
//! - Time comes in as explicit timestamps
//! - Control values come in through `configure`
//! - Lengths are integrated in internal units (px)

pub mod engine;
pub mod forces;
pub mod state;
pub mod tick;

pub use engine::SimulationEngine;
pub use forces::Forces;
pub use state::{BlockState, ControlParams, FinalSnapshot, RunState, SimulationClock};
pub use tick::TickOutcome;
