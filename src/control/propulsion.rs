/// Descent engine running at a fixed fuel flow.
#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionSystem {
    pub fuel_mass: f64,
    pub fuel_burn_rate: f64,
    pub dry_mass: f64,
    pub exhaust_velocity: f64,
}

impl PropulsionSystem {
    pub fn new(fuel_mass: f64, burn_rate: f64, dry_mass: f64, exhaust_velocity: f64) -> Self {
        PropulsionSystem {
            fuel_mass,
            fuel_burn_rate: burn_rate,
            dry_mass,
            exhaust_velocity,
        }
    }

    pub fn get_thrust(&self) -> f64 {
        self.exhaust_velocity * self.fuel_burn_rate
    }

    /// Upward deceleration the engine imparts on the current total mass.
    pub fn thrust_deceleration(&self) -> f64 {
        self.get_thrust() / self.get_total_mass()
    }

    /// Consumes fuel for one step. Fuel never drops below zero, so the total
    /// mass stays at or above the dry mass.
    pub fn burn(&mut self, delta_time: f64) {
        let fuel_consumed = self.fuel_burn_rate * delta_time;
        self.fuel_mass = (self.fuel_mass - fuel_consumed).max(0.0);
    }

    pub fn get_total_mass(&self) -> f64 {
        self.fuel_mass + self.dry_mass
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel_mass <= 0.0
    }
}
