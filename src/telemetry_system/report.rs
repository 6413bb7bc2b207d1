use std::fmt;

use crate::control::guidance::IgnitionPoint;
use crate::trajectory_system::trajectory::{Sample, Trajectory};

/// Complete descent from the approach state to touchdown (or burnout).
#[derive(Debug, Clone, PartialEq)]
pub struct LandingReport {
    pub trajectory: Trajectory,
    /// Net downward acceleration between consecutive samples; always one
    /// entry shorter than the trajectory.
    pub accelerations: Vec<f64>,
    pub ignition_height: f64,
    pub ignition_time: f64,
    pub landing_velocity: f64,
    pub landing_height: f64,
    pub final_mass: f64,
}

impl LandingReport {
    /// Joins the free fall up to the ignition sample with the burn that
    /// follows it. The burn's first sample duplicates the ignition sample and
    /// is dropped; its times are shifted onto the free-fall clock.
    pub fn stitch(free_fall: &Trajectory, ignition: IgnitionPoint, gravity: f64) -> Self {
        let IgnitionPoint {
            index,
            sample: ignition_sample,
            descent,
        } = ignition;

        let mut trajectory = Trajectory::with_capacity(index + descent.trajectory.len());
        trajectory.extend(free_fall.samples().iter().take(index + 1).copied());
        trajectory.extend(descent.trajectory.samples().iter().skip(1).map(|sample| Sample {
            time: ignition_sample.time + sample.time,
            ..*sample
        }));

        let mut accelerations = vec![gravity; index];
        accelerations.extend_from_slice(&descent.accelerations);

        LandingReport {
            ignition_height: ignition_sample.height,
            ignition_time: ignition_sample.time,
            landing_velocity: descent.landing_velocity(),
            landing_height: descent.landing_height(),
            final_mass: descent.final_mass,
            trajectory,
            accelerations,
        }
    }

    pub fn times(&self) -> Vec<f64> {
        self.trajectory.times()
    }

    pub fn heights(&self) -> Vec<f64> {
        self.trajectory.heights()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.trajectory.velocities()
    }
}

impl fmt::Display for LandingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine ignition height: {:.2} m", self.ignition_height)?;
        write!(f, "Touchdown velocity: {:.2} m/s", self.landing_velocity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationOutcome {
    Landed(LandingReport),
    Aborted { reason: String },
}

impl SimulationOutcome {
    pub fn is_successful(&self) -> bool {
        matches!(self, SimulationOutcome::Landed(_))
    }

    pub fn report(&self) -> Option<&LandingReport> {
        match self {
            SimulationOutcome::Landed(report) => Some(report),
            SimulationOutcome::Aborted { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SimulationOutcome::Landed(_) => None,
            SimulationOutcome::Aborted { reason } => Some(reason),
        }
    }
}

impl fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationOutcome::Landed(report) => fmt::Display::fmt(report, f),
            SimulationOutcome::Aborted { reason } => f.write_str(reason),
        }
    }
}
