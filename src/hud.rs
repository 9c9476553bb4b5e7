//! HUD readouts
//!
//! Converts internal units to meters at the display boundary and formats
//! every value the page shows.

use serde::Serialize;

use crate::px_to_m;
use crate::sim::{FinalSnapshot, RunState, SimulationEngine};

/// Centered status text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusBanner {
    Paused,
    Complete,
}

impl StatusBanner {
    pub fn for_state(state: RunState) -> Option<Self> {
        match state {
            RunState::Paused => Some(Self::Paused),
            RunState::Completed => Some(Self::Complete),
            RunState::Running => None,
        }
    }

    /// Short status label
    pub fn label(&self) -> &'static str {
        match self {
            StatusBanner::Paused => "PAUSED",
            StatusBanner::Complete => "Simulation Complete",
        }
    }

    /// Full banner including the key hint
    pub fn text(&self) -> &'static str {
        match self {
            StatusBanner::Paused => "PAUSED - Press SPACE to Resume",
            StatusBanner::Complete => "Simulation Complete - Press SPACE to Reset",
        }
    }
}

/// Final stats in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalStats {
    pub acceleration_mps2: f32,
    pub velocity_mps: f32,
    pub elapsed: f32,
}

impl From<&FinalSnapshot> for FinalStats {
    fn from(snapshot: &FinalSnapshot) -> Self {
        Self {
            acceleration_mps2: px_to_m(snapshot.acceleration),
            velocity_mps: px_to_m(snapshot.velocity),
            elapsed: snapshot.elapsed,
        }
    }
}

impl FinalStats {
    /// Heading plus one line per stat, top to bottom
    pub fn lines(&self) -> [String; 4] {
        [
            StatusBanner::Complete.label().to_string(),
            format!("Final Acceleration: {} m/s²", fixed2(self.acceleration_mps2)),
            format!("Final Velocity: {} m/s", fixed2(self.velocity_mps)),
            format!("Elapsed Time: {} s", fixed2(self.elapsed)),
        ]
    }
}

/// Everything shown alongside the canvas for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub velocity_mps: f32,
    pub acceleration_mps2: f32,
    pub elapsed: f32,
    pub status: Option<StatusBanner>,
    pub final_stats: Option<FinalStats>,
    pub mass: f32,
    pub angle_degrees: f32,
    pub friction_coefficient: f32,
    pub slow_motion: bool,
}

impl Readout {
    pub fn capture(engine: &SimulationEngine) -> Self {
        let block = engine.block();
        let params = engine.params();
        let final_stats = match engine.run_state() {
            RunState::Completed => engine.final_snapshot().map(FinalStats::from),
            _ => None,
        };
        Self {
            velocity_mps: px_to_m(block.velocity),
            acceleration_mps2: px_to_m(block.acceleration),
            elapsed: engine.clock().elapsed,
            status: StatusBanner::for_state(engine.run_state()),
            final_stats,
            mass: params.mass,
            angle_degrees: params.angle_degrees,
            friction_coefficient: params.friction_coefficient,
            slow_motion: engine.slow_motion(),
        }
    }

    pub fn velocity_text(&self) -> String {
        format!("{} m/s", fixed2(self.velocity_mps))
    }

    pub fn acceleration_text(&self) -> String {
        format!("{} m/s²", fixed2(self.acceleration_mps2))
    }

    pub fn time_text(&self) -> String {
        format!("Time: {} s", fixed2(self.elapsed))
    }

    pub fn mass_text(&self) -> String {
        self.mass.to_string()
    }

    pub fn angle_text(&self) -> String {
        self.angle_degrees.to_string()
    }

    pub fn friction_text(&self) -> String {
        fixed2(self.friction_coefficient)
    }
}

/// Two decimal places, never "-0.00" for a signed zero
fn fixed2(value: f32) -> String {
    format!("{:.2}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ControlParams;

    #[test]
    fn test_paused_readout() {
        let engine = SimulationEngine::new(0.0);
        let readout = Readout::capture(&engine);
        assert_eq!(readout.status, Some(StatusBanner::Paused));
        assert_eq!(readout.velocity_text(), "0.00 m/s");
        assert_eq!(readout.acceleration_text(), "0.00 m/s²");
        assert_eq!(readout.time_text(), "Time: 0.00 s");
        assert_eq!(readout.mass_text(), "5");
        assert_eq!(readout.angle_text(), "30");
        assert_eq!(readout.friction_text(), "0.10");
        assert!(readout.final_stats.is_none());
    }

    #[test]
    fn test_running_readout_in_meters() {
        let mut engine = SimulationEngine::new(0.0);
        engine.configure(ControlParams::new(5.0, 30.0, 0.1)).unwrap();
        engine.toggle_pause();
        engine.tick(500.0);

        let readout = Readout::capture(&engine);
        assert_eq!(readout.status, None);
        assert_eq!(readout.acceleration_text(), "4.05 m/s²");
        assert_eq!(readout.velocity_text(), "2.03 m/s");
        assert_eq!(readout.time_text(), "Time: 0.50 s");
    }

    #[test]
    fn test_completed_readout_shows_final_stats() {
        let mut engine = SimulationEngine::new(0.0);
        engine.configure(ControlParams::new(5.0, 30.0, 0.1)).unwrap();
        engine.toggle_pause();
        engine.tick(1000.0);

        let readout = Readout::capture(&engine);
        assert_eq!(readout.status, Some(StatusBanner::Complete));
        assert_eq!(
            readout.status.map(|s| s.text()),
            Some("Simulation Complete - Press SPACE to Reset")
        );
        assert_eq!(readout.velocity_text(), "0.00 m/s");

        let lines = readout.final_stats.unwrap().lines();
        assert_eq!(lines[0], "Simulation Complete");
        assert_eq!(lines[1], "Final Acceleration: 4.05 m/s²");
        assert_eq!(lines[2], "Final Velocity: 4.05 m/s");
        assert_eq!(lines[3], "Elapsed Time: 1.00 s");
    }

    #[test]
    fn test_negative_zero_formats_plain() {
        assert_eq!(fixed2(-0.0), "0.00");
        assert_eq!(fixed2(-1.234), "-1.23");
    }
}
