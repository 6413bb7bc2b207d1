pub mod free_fall;
pub mod kinematics;
pub mod trajectory;
