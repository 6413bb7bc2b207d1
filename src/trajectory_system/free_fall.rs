use tracing::debug;

use super::kinematics::KinematicState;
use super::trajectory::{Sample, Trajectory};

/// Unpowered descent under constant gravity.
#[derive(Debug, Clone, Copy)]
pub struct FreeFallSimulator {
    pub gravity: f64,
    pub time_step: f64,
}

impl FreeFallSimulator {
    pub fn new(gravity: f64, time_step: f64) -> Self {
        FreeFallSimulator { gravity, time_step }
    }

    /// Integrates from `initial` until the lander reaches the surface.
    ///
    /// The last sample always has height 0. A start at or below the surface
    /// yields the single initial sample.
    pub fn simulate(&self, initial: KinematicState) -> Trajectory {
        let mut trajectory = Trajectory::starting_at(initial);
        let mut state = initial;
        let mut steps: u64 = 0;

        while state.is_airborne() {
            state = state.step(self.gravity, self.time_step);
            steps += 1;
            trajectory.push(Sample::new(steps as f64 * self.time_step, state));
        }

        debug!(
            steps,
            impact_velocity = state.velocity,
            "free fall reached the surface"
        );
        trajectory
    }
}
