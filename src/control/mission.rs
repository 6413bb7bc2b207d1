use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    EMPTY_MASS, EXHAUST_VELOCITY, FUEL_CONSUMPTION_RATE, INITIAL_FUEL_MASS, INITIAL_HEIGHT,
    INITIAL_VELOCITY, LUNAR_GRAVITY, MAX_LANDING_SPEED, TIME_STEP,
};
use crate::errors::SimulationError;

/// Fixed inputs of a landing run. Keys missing from a configuration file
/// fall back to the reference lunar values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissionParameters {
    pub gravity: f64,
    pub empty_mass: f64,
    pub initial_fuel_mass: f64,
    pub fuel_consumption_rate: f64,
    pub exhaust_velocity: f64,
    pub initial_height: f64,
    pub initial_velocity: f64,
    pub max_landing_speed: f64,
    pub time_step: f64,
}

impl Default for MissionParameters {
    fn default() -> Self {
        MissionParameters {
            gravity: LUNAR_GRAVITY,
            empty_mass: EMPTY_MASS,
            initial_fuel_mass: INITIAL_FUEL_MASS,
            fuel_consumption_rate: FUEL_CONSUMPTION_RATE,
            exhaust_velocity: EXHAUST_VELOCITY,
            initial_height: INITIAL_HEIGHT,
            initial_velocity: INITIAL_VELOCITY,
            max_landing_speed: MAX_LANDING_SPEED,
            time_step: TIME_STEP,
        }
    }
}

impl MissionParameters {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let parameters: MissionParameters = toml::from_str(contents)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn initial_mass(&self) -> f64 {
        self.empty_mass + self.initial_fuel_mass
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("gravity", self.gravity),
            ("empty_mass", self.empty_mass),
            ("initial_fuel_mass", self.initial_fuel_mass),
            ("fuel_consumption_rate", self.fuel_consumption_rate),
            ("exhaust_velocity", self.exhaust_velocity),
            ("initial_height", self.initial_height),
            ("initial_velocity", self.initial_velocity),
            ("max_landing_speed", self.max_landing_speed),
            ("time_step", self.time_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(name, format!("must be finite, got {value}")));
            }
        }

        require_positive("gravity", self.gravity)?;
        require_positive("empty_mass", self.empty_mass)?;
        require_positive("fuel_consumption_rate", self.fuel_consumption_rate)?;
        require_positive("exhaust_velocity", self.exhaust_velocity)?;
        require_positive("time_step", self.time_step)?;
        require_non_negative("initial_fuel_mass", self.initial_fuel_mass)?;
        require_non_negative("initial_height", self.initial_height)?;
        require_non_negative("max_landing_speed", self.max_landing_speed)?;
        Ok(())
    }
}

fn invalid(name: &'static str, reason: String) -> SimulationError {
    SimulationError::InvalidParameter { name, reason }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must be positive, got {value}")))
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must not be negative, got {value}")))
    }
}
