pub mod guidance;
pub mod lander;
pub mod mission;
pub mod powered_descent;
pub mod propulsion;
