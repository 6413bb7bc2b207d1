pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::guidance::{GuidanceSystem, IgnitionPoint};
pub use control::lander::{Lander, NO_SAFE_IGNITION_MESSAGE};
pub use control::mission::MissionParameters;
pub use control::powered_descent::{PoweredDescent, PoweredDescentSimulator};
pub use control::propulsion::PropulsionSystem;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::free_fall::FreeFallSimulator;
pub use trajectory_system::kinematics::KinematicState;
pub use trajectory_system::trajectory::{Sample, Trajectory};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::report::{LandingReport, SimulationOutcome};
pub use telemetry_system::telemetry::Telemetry;
