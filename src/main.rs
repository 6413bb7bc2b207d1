use lander_simulation::*;
use tracing_subscriber::EnvFilter;

// One telemetry line per second of flight
const LOG_INTERVAL: f64 = 1.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let parameters = match std::env::args().nth(1) {
        Some(path) => MissionParameters::load(path)?,
        None => MissionParameters::default(),
    };
    let lander = Lander::new(parameters)?;

    match lander.run_simulation() {
        SimulationOutcome::Landed(report) => {
            println!("{}", report);
            println!();
            Telemetry::from_report(&report, lander.parameters().initial_mass(), LOG_INTERVAL)
                .display_data();
            Ok(())
        }
        SimulationOutcome::Aborted { reason } => {
            println!("{}", reason);
            std::process::exit(1);
        }
    }
}
