use tracing::{info, trace};

use super::powered_descent::{PoweredDescent, PoweredDescentSimulator};
use crate::trajectory_system::trajectory::{Sample, Trajectory};

/// Free-fall sample chosen for engine ignition together with the burn it
/// produces.
#[derive(Debug, Clone, PartialEq)]
pub struct IgnitionPoint {
    /// Position of the ignition sample within the free-fall trajectory.
    pub index: usize,
    pub sample: Sample,
    pub descent: PoweredDescent,
}

/// Picks the latest ignition along a free fall that still lands safely.
pub struct GuidanceSystem {
    pub descent: PoweredDescentSimulator,
    pub max_landing_speed: f64,
}

impl GuidanceSystem {
    pub fn new(descent: PoweredDescentSimulator, max_landing_speed: f64) -> Self {
        GuidanceSystem {
            descent,
            max_landing_speed,
        }
    }

    pub fn is_safe_landing(&self, descent: &PoweredDescent) -> bool {
        descent.landing_velocity() <= self.max_landing_speed
    }

    /// Walks the free fall backwards from touchdown, simulating a full burn at
    /// every airborne sample, and stops at the first one that lands within
    /// the speed bound.
    pub fn find_ignition_point(&self, free_fall: &Trajectory) -> Option<IgnitionPoint> {
        let ignition = free_fall
            .samples()
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, sample)| sample.height > 0.0)
            .find_map(|(index, sample)| {
                let descent = self.descent.simulate(sample.state());
                trace!(
                    index,
                    height = sample.height,
                    landing_velocity = descent.landing_velocity(),
                    "evaluated ignition candidate"
                );

                self.is_safe_landing(&descent).then(|| IgnitionPoint {
                    index,
                    sample: *sample,
                    descent,
                })
            });

        if let Some(point) = &ignition {
            info!(
                height = point.sample.height,
                time = point.sample.time,
                landing_velocity = point.descent.landing_velocity(),
                "ignition point found"
            );
        }
        ignition
    }
}
