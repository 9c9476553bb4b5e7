//! Simulation state types
//!
//! Everything the engine owns between ticks lives here. Lengths are in
//! internal units (px), times in seconds unless suffixed `_ms`.

use serde::{Deserialize, Serialize};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the player to start or resume
    #[default]
    Paused,
    /// Integrating every tick
    Running,
    /// Block reached the end of the track; only a reset leaves this state
    Completed,
}

/// The sliding block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockState {
    /// Distance travelled along the ramp, `0..=TRACK_LENGTH`
    pub position: f32,
    /// Signed speed along the ramp axis, positive = down-slope
    pub velocity: f32,
    /// Derived each tick, kept for display
    pub acceleration: f32,
    /// Copied from the control params every tick (kg)
    pub mass: f32,
}

impl BlockState {
    pub fn at_rest(mass: f32) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            mass,
        }
    }

    /// Stop the block dead at `position`
    pub(crate) fn pin(&mut self, position: f32) {
        self.position = position;
        self.velocity = 0.0;
        self.acceleration = 0.0;
    }
}

/// Elapsed simulated time plus the timestamp of the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Simulated seconds while running (slow motion scaled)
    pub elapsed: f32,
    /// Monotonic timestamp of the previous tick (ms)
    pub last_tick_ms: f64,
}

impl SimulationClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            elapsed: 0.0,
            last_tick_ms: now_ms,
        }
    }

    /// Consume the time since the last tick, returning it in seconds
    pub(crate) fn advance(&mut self, now_ms: f64, scale: f32) -> f32 {
        let dt = ((now_ms - self.last_tick_ms) / 1000.0) as f32 * scale;
        self.elapsed += dt;
        self.last_tick_ms = now_ms;
        dt
    }
}

/// Values captured on the tick the block reached the end of the track,
/// taken before the boundary clamp zeroed them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalSnapshot {
    pub acceleration: f32,
    pub velocity: f32,
    pub elapsed: f32,
}

/// Inputs read from the control surface each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlParams {
    /// kg, must be positive
    pub mass: f32,
    /// Ramp incline from horizontal, degrees (may be negative)
    pub angle_degrees: f32,
    /// Coulomb coefficient μ
    pub friction_coefficient: f32,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            mass: 5.0,
            angle_degrees: 30.0,
            friction_coefficient: 0.1,
        }
    }
}

impl ControlParams {
    pub fn new(mass: f32, angle_degrees: f32, friction_coefficient: f32) -> Self {
        Self {
            mass,
            angle_degrees,
            friction_coefficient,
        }
    }

    /// The flat-surface friction model applies only at exactly zero degrees
    pub fn is_flat(&self) -> bool {
        self.angle_degrees == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advance_scales_delta() {
        let mut clock = SimulationClock::new(1000.0);
        let dt = clock.advance(2000.0, 0.25);
        assert!((dt - 0.25).abs() < 1e-6);
        assert!((clock.elapsed - 0.25).abs() < 1e-6);
        assert_eq!(clock.last_tick_ms, 2000.0);
    }

    #[test]
    fn test_pin_zeroes_motion() {
        let mut block = BlockState {
            position: 12.0,
            velocity: -3.0,
            acceleration: 7.0,
            mass: 2.0,
        };
        block.pin(0.0);
        assert_eq!(block, BlockState::at_rest(2.0));
    }

    #[test]
    fn test_default_params_are_flat_only_at_zero() {
        assert!(!ControlParams::default().is_flat());
        assert!(ControlParams::new(1.0, 0.0, 0.5).is_flat());
        assert!(!ControlParams::new(1.0, -5.0, 0.5).is_flat());
    }
}
