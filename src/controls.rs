//! Control surface: sliders, the slow-motion checkbox and key bindings
//!
//! The engine never sees focus or raw keys. This module turns them into
//! `ControlCommand`s for the render loop to dispatch.

use serde::{Deserialize, Serialize};

use crate::sim::ControlParams;

/// Bounds and granularity of one slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Snap to the nearest step and clamp into range. Non-finite input
    /// falls back to the minimum.
    pub fn clamp(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.min;
        }
        let snapped = if self.step > 0.0 {
            let per_unit = 1.0 / self.step;
            self.min + ((value - self.min) * per_unit).round() / per_unit
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

pub const MASS_RANGE: SliderRange = SliderRange::new(1.0, 20.0, 1.0);
pub const ANGLE_RANGE: SliderRange = SliderRange::new(-30.0, 60.0, 1.0);
pub const FRICTION_RANGE: SliderRange = SliderRange::new(0.0, 1.0, 0.01);

/// Keys the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Shift,
    Other,
}

/// Where keyboard focus sits when a key arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Canvas,
    /// A slider, button or select has focus
    InputControl,
}

/// Command produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    None,
    /// Drop focus from the input control; the key is swallowed
    BlurFocus,
    PauseResume,
    ToggleSlowMotion,
}

/// Current slider and checkbox values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPanel {
    mass: f32,
    angle_degrees: f32,
    friction_coefficient: f32,
    slow_motion: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::from_params(ControlParams::default())
    }
}

impl ControlPanel {
    pub fn from_params(params: ControlParams) -> Self {
        let mut panel = Self {
            mass: MASS_RANGE.min,
            angle_degrees: 0.0,
            friction_coefficient: 0.0,
            slow_motion: false,
        };
        panel.set_mass(params.mass);
        panel.set_angle(params.angle_degrees);
        panel.set_friction(params.friction_coefficient);
        panel
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = MASS_RANGE.clamp(mass);
    }

    pub fn set_angle(&mut self, angle_degrees: f32) {
        self.angle_degrees = ANGLE_RANGE.clamp(angle_degrees);
    }

    pub fn set_friction(&mut self, friction_coefficient: f32) {
        self.friction_coefficient = FRICTION_RANGE.clamp(friction_coefficient);
    }

    /// Checkbox change
    pub fn set_slow_motion(&mut self, enabled: bool) {
        self.slow_motion = enabled;
    }

    pub fn slow_motion(&self) -> bool {
        self.slow_motion
    }

    pub fn params(&self) -> ControlParams {
        ControlParams::new(self.mass, self.angle_degrees, self.friction_coefficient)
    }

    /// Map a key press to a command, keeping the checkbox in sync
    pub fn handle_key(&mut self, key: Key, focus: Focus) -> ControlCommand {
        match key {
            Key::Space if focus == Focus::InputControl => ControlCommand::BlurFocus,
            Key::Space => ControlCommand::PauseResume,
            Key::Shift => {
                self.slow_motion = !self.slow_motion;
                ControlCommand::ToggleSlowMotion
            }
            Key::Other => ControlCommand::None,
        }
    }
}
