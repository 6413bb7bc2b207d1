/// Vertical state of the lander. Height is measured from the surface,
/// velocity is positive when descending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub height: f64,
    pub velocity: f64,
}

impl KinematicState {
    pub fn new(height: f64, velocity: f64) -> Self {
        KinematicState { height, velocity }
    }

    /// Advances the state by one step under a constant downward `acceleration`.
    ///
    /// Height is clamped at the surface; velocity is left as integrated.
    pub fn step(self, acceleration: f64, delta_time: f64) -> Self {
        let velocity = self.velocity + acceleration * delta_time;
        let height =
            self.height - self.velocity * delta_time - 0.5 * acceleration * delta_time.powi(2);

        KinematicState {
            height: if height > 0.0 { height } else { 0.0 },
            velocity,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.height > 0.0
    }
}
