use tracing::{debug, warn};

use super::{
    guidance::GuidanceSystem,
    mission::MissionParameters,
    powered_descent::PoweredDescentSimulator,
    propulsion::PropulsionSystem,
};
use crate::errors::SimulationError;
use crate::telemetry_system::report::{LandingReport, SimulationOutcome};
use crate::trajectory_system::{free_fall::FreeFallSimulator, kinematics::KinematicState};

pub const NO_SAFE_IGNITION_MESSAGE: &str =
    "Could not find an engine ignition height that allows a safe landing.";

/// Vertical lander falling toward the surface with a single descent engine.
#[derive(Debug, Clone)]
pub struct Lander {
    parameters: MissionParameters,
}

impl Lander {
    pub fn new(parameters: MissionParameters) -> Result<Self, SimulationError> {
        parameters.validate()?;
        Ok(Lander { parameters })
    }

    pub fn parameters(&self) -> &MissionParameters {
        &self.parameters
    }

    pub fn engine(&self) -> PropulsionSystem {
        PropulsionSystem::new(
            self.parameters.initial_fuel_mass,
            self.parameters.fuel_consumption_rate,
            self.parameters.empty_mass,
            self.parameters.exhaust_velocity,
        )
    }

    pub fn guidance(&self) -> GuidanceSystem {
        let descent = PoweredDescentSimulator::new(
            self.parameters.gravity,
            self.parameters.time_step,
            self.engine(),
        );
        GuidanceSystem::new(descent, self.parameters.max_landing_speed)
    }

    /// Free fall from the approach state, then a search for the latest safe
    /// ignition. Running out of safe candidates is reported as an aborted
    /// outcome rather than an error.
    pub fn run_simulation(&self) -> SimulationOutcome {
        let parameters = &self.parameters;
        debug!(?parameters, "starting landing simulation");

        let free_fall = FreeFallSimulator::new(parameters.gravity, parameters.time_step).simulate(
            KinematicState::new(parameters.initial_height, parameters.initial_velocity),
        );

        match self.guidance().find_ignition_point(&free_fall) {
            Some(ignition) => SimulationOutcome::Landed(LandingReport::stitch(
                &free_fall,
                ignition,
                parameters.gravity,
            )),
            None => {
                warn!(
                    candidates = free_fall.len(),
                    max_landing_speed = parameters.max_landing_speed,
                    "no safe ignition point"
                );
                SimulationOutcome::Aborted {
                    reason: NO_SAFE_IGNITION_MESSAGE.to_string(),
                }
            }
        }
    }
}
