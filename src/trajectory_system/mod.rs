pub mod aerodynamics;
pub mod kinematics;
pub mod time_step;
