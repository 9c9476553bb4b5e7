//! Ramp Slide - a block sliding down an inclined ramp under gravity and friction
//!
//! Core modules:
//! - `sim`: Deterministic simulation engine (forces, integration, run state)
//! - `controls`: Control surface (slider ranges, key bindings, focus gating)
//! - `hud`: Display readouts in meters/seconds
//! - `renderer`: Toolkit-neutral render primitives and the render sink seam
//! - `app`: Render loop driver and time sources
//! - `settings`: JSON configuration

pub mod app;
pub mod controls;
pub mod error;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{Clock, Demo, ManualClock, SystemClock};
pub use error::{SettingsError, SimError};
pub use settings::Settings;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    use glam::Vec2;

    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f32 = 9.8;
    /// Internal length units per meter. Integration runs in these units;
    /// only the HUD converts back to meters.
    pub const PIXELS_PER_METER: f32 = 100.0;
    /// Travel distance along the ramp before the run completes (px)
    pub const TRACK_LENGTH: f32 = 400.0;
    /// Multiplier applied to wall-clock delta while slow motion is on
    pub const SLOW_MOTION_FACTOR: f32 = 0.25;
    /// Below this speed (px/s) a block on flat ground comes to rest
    pub const STOP_SPEED_THRESHOLD: f32 = 0.5;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Ramp layout (canvas coordinates, y down)
    pub const RAMP_ORIGIN: Vec2 = Vec2::new(200.0, 300.0);
    pub const RAMP_THICKNESS: f32 = 20.0;
    pub const BLOCK_SIZE: f32 = 40.0;

    /// 1 meter reference bar
    pub const SCALE_BAR_ORIGIN: Vec2 = Vec2::new(20.0, 40.0);
    pub const SCALE_BAR_TICK: f32 = 5.0;
}

/// Convert an internal length/velocity/acceleration value to meters
#[inline]
pub fn px_to_m(value: f32) -> f32 {
    value / consts::PIXELS_PER_METER
}

/// Unit vector along the ramp's travel axis in canvas coordinates (y down).
///
/// The ramp is drawn rotated by `-angle` around `RAMP_ORIGIN`, so a positive
/// angle lifts the far end of the track on screen.
#[inline]
pub fn ramp_axis(angle_degrees: f32) -> Vec2 {
    Vec2::from_angle(-angle_degrees.to_radians())
}
