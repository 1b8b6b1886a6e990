//! Scripted target movement standing in for pointer input.

use glam::DVec2;
use murmuration_core::Simulation;

/// Moves the steering target around a circle centred on the space.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetOrbit {
    pub center: DVec2,
    pub radius: f64,
    /// Radians per tick.
    pub angular_speed: f64,
    angle: f64,
}

impl TargetOrbit {
    pub fn new(center: DVec2, radius: f64, angular_speed: f64) -> Self {
        Self {
            center,
            radius,
            angular_speed,
            angle: 0.0,
        }
    }

    /// A circle filling a third of the shorter side, one lap every 720 ticks.
    pub fn around(sim: &Simulation) -> Self {
        let space = sim.space();
        let radius = space.width().min(space.height()) / 3.0;
        Self::new(space.center(), radius, std::f64::consts::TAU / 720.0)
    }

    /// Advances one tick and returns the new target.
    pub fn advance(&mut self) -> DVec2 {
        self.angle = (self.angle + self.angular_speed) % std::f64::consts::TAU;
        self.center + DVec2::from_angle(self.angle) * self.radius
    }

    pub fn apply(&mut self, sim: &mut Simulation) {
        let target = self.advance();
        sim.update_target(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_stays_on_circle() {
        let mut orbit = TargetOrbit::new(DVec2::new(50.0, 50.0), 10.0, 0.5);
        for _ in 0..40 {
            let p = orbit.advance();
            assert!(((p - orbit.center).length() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quarter_turn() {
        let mut orbit = TargetOrbit::new(DVec2::ZERO, 2.0, std::f64::consts::FRAC_PI_2);
        let p = orbit.advance();
        assert!((p - DVec2::new(0.0, 2.0)).length() < 1e-12);
    }
}
