use super::report::LandingReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPhase {
    FreeFall,
    PoweredDescent,
    Touchdown,
    Burnout,
}

pub struct Telemetry {
    pub log: Vec<String>,
    flight_time: f64,
    burn_time: f64,
    max_velocity: f64,
    max_deceleration: f64,
    fuel_consumed: f64,
    phase_times: Vec<(FlightPhase, f64)>,
}

impl Telemetry {
    /// Summarises a landing. `initial_mass` is the fully fuelled vehicle
    /// mass; `log_interval` is the spacing, in seconds, between log entries.
    pub fn from_report(report: &LandingReport, initial_mass: f64, log_interval: f64) -> Self {
        let flight_time = report.trajectory.duration();

        let max_velocity = report
            .trajectory
            .samples()
            .iter()
            .map(|sample| sample.velocity)
            .fold(0.0, f64::max);
        // Thrust shows up as negative net acceleration
        let max_deceleration = report
            .accelerations
            .iter()
            .map(|acceleration| -acceleration)
            .fold(0.0, f64::max);

        let mut log = Vec::new();
        let mut next_entry = 0.0;
        for sample in report.trajectory.samples() {
            if sample.time + 1e-9 >= next_entry {
                log.push(format!(
                    "Time: {} | Height: {} | Velocity: {:.2} m/s",
                    Self::format_time(sample.time),
                    Self::format_altitude(sample.height),
                    sample.velocity
                ));
                next_entry += log_interval;
            }
        }

        let end_phase = if report.landing_height <= 0.0 {
            FlightPhase::Touchdown
        } else {
            FlightPhase::Burnout
        };

        Telemetry {
            log,
            flight_time,
            burn_time: flight_time - report.ignition_time,
            max_velocity,
            max_deceleration,
            fuel_consumed: initial_mass - report.final_mass,
            phase_times: vec![
                (FlightPhase::FreeFall, 0.0),
                (FlightPhase::PoweredDescent, report.ignition_time),
                (end_phase, flight_time),
            ],
        }
    }

    pub fn phase_times(&self) -> &[(FlightPhase, f64)] {
        &self.phase_times
    }

    pub fn get_burn_time(&self) -> f64 {
        self.burn_time
    }

    pub fn get_fuel_consumed(&self) -> f64 {
        self.fuel_consumed
    }

    pub fn get_max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn get_max_deceleration(&self) -> f64 {
        self.max_deceleration
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Flight Summary ---");
        println!("Flight Time: {}", Self::format_time(self.flight_time));
        println!("Burn Time: {}", Self::format_time(self.burn_time));
        println!("Max Velocity: {:.2} m/s", self.max_velocity);
        println!("Max Deceleration: {:.2} m/s²", self.max_deceleration);
        println!("Fuel Consumed: {:.2} kg", self.fuel_consumed);

        println!("\n--- Phase Transitions ---");
        for (phase, time) in &self.phase_times {
            println!("Phase {:?} reached at: {}", phase, Self::format_time(*time));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_system::{
        kinematics::KinematicState,
        trajectory::{Sample, Trajectory},
    };
    use approx::assert_abs_diff_eq;

    fn report() -> LandingReport {
        let mut trajectory = Trajectory::starting_at(KinematicState::new(1500.0, 10.0));
        trajectory.push(Sample::new(0.5, KinematicState::new(1200.0, 30.0)));
        trajectory.push(Sample::new(1.0, KinematicState::new(400.0, 12.0)));
        trajectory.push(Sample::new(1.5, KinematicState::new(0.0, 2.0)));

        LandingReport {
            trajectory,
            accelerations: vec![1.62, -20.0, -21.5],
            ignition_height: 1200.0,
            ignition_time: 0.5,
            landing_velocity: 2.0,
            landing_height: 0.0,
            final_mass: 2280.0,
        }
    }

    #[test]
    fn test_flight_statistics() {
        let telemetry = Telemetry::from_report(&report(), 2300.0, 1.0);

        assert_abs_diff_eq!(telemetry.get_burn_time(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(telemetry.get_fuel_consumed(), 20.0, epsilon = 1e-12);
        assert_eq!(telemetry.get_max_velocity(), 30.0);
        assert_eq!(telemetry.get_max_deceleration(), 21.5);
    }

    #[test]
    fn test_phase_transitions() {
        let telemetry = Telemetry::from_report(&report(), 2300.0, 1.0);

        assert_eq!(
            telemetry.phase_times(),
            &[
                (FlightPhase::FreeFall, 0.0),
                (FlightPhase::PoweredDescent, 0.5),
                (FlightPhase::Touchdown, 1.5),
            ]
        );

        let mut stranded = report();
        stranded.landing_height = 40.0;
        let telemetry = Telemetry::from_report(&stranded, 2300.0, 1.0);
        assert_eq!(telemetry.phase_times()[2].0, FlightPhase::Burnout);
    }

    #[test]
    fn test_log_respects_interval() {
        let telemetry = Telemetry::from_report(&report(), 2300.0, 1.0);

        assert_eq!(telemetry.log.len(), 2);
        assert_eq!(
            telemetry.log[0],
            "Time: 0.00s | Height: 1.50 km | Velocity: 10.00 m/s"
        );
        assert_eq!(
            telemetry.log[1],
            "Time: 1.00s | Height: 400.00 m | Velocity: 12.00 m/s"
        );
    }

    #[test]
    fn test_format_time() {
        assert_eq!(Telemetry::format_time(42.5), "42.50s");
        assert_eq!(Telemetry::format_time(75.25), "1m 15.25s");
    }
}
