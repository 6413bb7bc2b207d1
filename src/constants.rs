// Physical Constants
pub const LUNAR_GRAVITY: f64 = 1.62; // m/s²

// Lander Constants
pub const EMPTY_MASS: f64 = 2150.0; // kg (structure, pilot and suit, no fuel)
pub const INITIAL_FUEL_MASS: f64 = 150.0; // kg
pub const FUEL_CONSUMPTION_RATE: f64 = 15.0; // kg/s
pub const EXHAUST_VELOCITY: f64 = 3660.0; // m/s

// Approach Constants
pub const INITIAL_HEIGHT: f64 = 2300.0; // m
pub const INITIAL_VELOCITY: f64 = 20.0; // m/s (downward positive)
pub const MAX_LANDING_SPEED: f64 = 3.0; // m/s

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
