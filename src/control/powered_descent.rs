use tracing::trace;

use super::propulsion::PropulsionSystem;
use crate::trajectory_system::{
    kinematics::KinematicState,
    trajectory::{Sample, Trajectory},
};

/// Result of a single engine burn started from an ignition state.
#[derive(Debug, Clone, PartialEq)]
pub struct PoweredDescent {
    pub trajectory: Trajectory,
    /// Net downward acceleration over each step, one entry per interval
    /// between consecutive trajectory samples.
    pub accelerations: Vec<f64>,
    pub final_mass: f64,
}

impl PoweredDescent {
    /// Velocity at the last sample, touchdown or burnout.
    pub fn landing_velocity(&self) -> f64 {
        self.trajectory.last().map_or(0.0, |sample| sample.velocity)
    }

    pub fn landing_height(&self) -> f64 {
        self.trajectory.last().map_or(0.0, |sample| sample.height)
    }

    pub fn touched_down(&self) -> bool {
        self.landing_height() <= 0.0
    }
}

#[derive(Debug, Clone)]
pub struct PoweredDescentSimulator {
    pub gravity: f64,
    pub time_step: f64,
    pub engine: PropulsionSystem,
}

impl PoweredDescentSimulator {
    pub fn new(gravity: f64, time_step: f64, engine: PropulsionSystem) -> Self {
        PoweredDescentSimulator {
            gravity,
            time_step,
            engine,
        }
    }

    /// Burns from `ignition` with a fresh copy of the engine until the lander
    /// touches down or the fuel runs out. Running dry in the air is a normal
    /// result; the caller judges the final velocity.
    pub fn simulate(&self, ignition: KinematicState) -> PoweredDescent {
        let mut engine = self.engine.clone();
        let mut trajectory = Trajectory::starting_at(ignition);
        let mut accelerations = Vec::new();
        let mut state = ignition;
        let mut steps: u64 = 0;

        while state.is_airborne() && !engine.is_out_of_fuel() {
            let acceleration = self.gravity - engine.thrust_deceleration();
            accelerations.push(acceleration);

            state = state.step(acceleration, self.time_step);
            steps += 1;
            trajectory.push(Sample::new(steps as f64 * self.time_step, state));
            engine.burn(self.time_step);
        }

        trace!(
            ignition_height = ignition.height,
            steps,
            final_velocity = state.velocity,
            fuel_left = engine.fuel_mass,
            "powered descent finished"
        );

        PoweredDescent {
            trajectory,
            accelerations,
            final_mass: engine.get_total_mass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn lunar_module() -> PropulsionSystem {
        PropulsionSystem::new(150.0, 15.0, 2150.0, 3660.0)
    }

    #[test]
    fn test_first_acceleration_uses_full_mass() {
        let simulator = PoweredDescentSimulator::new(1.62, 0.01, lunar_module());
        let descent = simulator.simulate(KinematicState::new(500.0, 30.0));

        assert_relative_eq!(
            descent.accelerations[0],
            1.62 - 3660.0 * 15.0 / 2300.0,
            epsilon = 1e-12
        );
        // Deceleration strengthens as the vehicle gets lighter
        assert!(descent.accelerations.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn test_touchdown_before_burnout() {
        let simulator = PoweredDescentSimulator::new(1.62, 0.01, lunar_module());
        let descent = simulator.simulate(KinematicState::new(5.0, 40.0));

        assert!(descent.touched_down());
        assert!(descent.final_mass > 2150.0);
        assert!(descent.landing_velocity() > 30.0);
    }

    #[test]
    fn test_burnout_in_the_air() {
        let simulator = PoweredDescentSimulator::new(1.62, 0.01, lunar_module());
        let descent = simulator.simulate(KinematicState::new(2000.0, 10.0));

        // 150 kg at 15 kg/s lasts ten seconds
        assert!(!descent.touched_down());
        assert_eq!(descent.final_mass, 2150.0);
        assert_relative_eq!(descent.trajectory.duration(), 10.0, epsilon = 0.011);
        // The lander is climbing when the engine cuts out
        assert!(descent.landing_velocity() < 0.0);
    }

    #[test]
    fn test_no_fuel_means_no_burn() {
        let engine = PropulsionSystem::new(0.0, 15.0, 2150.0, 3660.0);
        let simulator = PoweredDescentSimulator::new(1.62, 0.01, engine);
        let descent = simulator.simulate(KinematicState::new(100.0, 12.0));

        assert_eq!(descent.trajectory.len(), 1);
        assert!(descent.accelerations.is_empty());
        assert_eq!(descent.landing_velocity(), 12.0);
    }

    #[test]
    fn test_simulator_engine_is_untouched() {
        let simulator = PoweredDescentSimulator::new(1.62, 0.01, lunar_module());
        let first = simulator.simulate(KinematicState::new(300.0, 25.0));
        let second = simulator.simulate(KinematicState::new(300.0, 25.0));

        assert_eq!(simulator.engine, lunar_module());
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_burns_respect_mass_floor() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..25 {
            let dry_mass = rng.gen_range(500.0..5000.0);
            let engine = PropulsionSystem::new(
                rng.gen_range(0.0..300.0),
                rng.gen_range(1.0..30.0),
                dry_mass,
                rng.gen_range(100.0..4000.0),
            );
            let gravity = rng.gen_range(0.5..5.0);
            let time_step = rng.gen_range(0.005..0.05);
            let simulator = PoweredDescentSimulator::new(gravity, time_step, engine);
            let descent = simulator.simulate(KinematicState::new(
                rng.gen_range(1.0..1000.0),
                rng.gen_range(0.0..60.0),
            ));

            assert!(descent.final_mass >= dry_mass);
            assert_eq!(descent.accelerations.len(), descent.trajectory.len() - 1);
            assert!(descent
                .trajectory
                .samples()
                .iter()
                .all(|sample| sample.height >= 0.0));
        }
    }
}
