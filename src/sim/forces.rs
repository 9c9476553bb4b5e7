//! Gravity and Coulomb friction on an inclined plane

use serde::{Deserialize, Serialize};

use super::state::ControlParams;
use crate::consts::GRAVITY;

/// Force decomposition for the current params (newtons)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forces {
    pub weight: f32,
    /// Component of weight along the ramp
    pub parallel: f32,
    /// Component of weight into the ramp (normal force magnitude)
    pub perpendicular: f32,
    /// μ · normal force
    pub friction: f32,
}

impl Forces {
    pub fn resolve(params: &ControlParams) -> Self {
        let weight = params.mass * GRAVITY;
        let (sin, cos) = params.angle_degrees.to_radians().sin_cos();
        let perpendicular = weight * cos;
        Self {
            weight,
            parallel: weight * sin,
            perpendicular,
            friction: params.friction_coefficient * perpendicular,
        }
    }

    /// Net down-slope force on an incline. Friction always opposes down-slope
    /// motion, whatever the current velocity.
    #[inline]
    pub fn net_inclined(&self) -> f32 {
        self.parallel - self.friction
    }

    /// Friction magnitude on flat ground, given μ
    #[inline]
    pub fn flat_friction(&self, friction_coefficient: f32) -> f32 {
        friction_coefficient * self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_thirty_degree_decomposition() {
        let forces = Forces::resolve(&ControlParams::new(5.0, 30.0, 0.1));
        assert!(approx(forces.weight, 49.0, 1e-4));
        assert!(approx(forces.parallel, 24.5, 1e-3));
        assert!(approx(forces.perpendicular, 42.435, 1e-2));
        assert!(approx(forces.friction, 4.2435, 1e-3));
        assert!(approx(forces.net_inclined(), 20.256, 1e-2));
    }

    #[test]
    fn test_flat_ground_has_no_parallel_component() {
        let forces = Forces::resolve(&ControlParams::new(2.0, 0.0, 0.5));
        assert_eq!(forces.parallel, 0.0);
        assert!(approx(forces.perpendicular, forces.weight, 1e-6));
        assert!(approx(forces.flat_friction(0.5), 9.8, 1e-5));
    }

    #[test]
    fn test_negative_angle_pulls_up_slope() {
        let forces = Forces::resolve(&ControlParams::new(1.0, -20.0, 0.0));
        assert!(forces.parallel < 0.0);
        assert!(forces.net_inclined() < 0.0);
    }
}
