// Physical Constants
pub const GRAVITY: f64 = 9.80665; // m/s² (standard gravity)

// Aerodynamic Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Simulation Parameters
pub const SIMULATION_ROUNDS_LIMIT: u32 = 1000;

// Unit Conversions
pub const CENTIMETERS_PER_METER: f64 = 100.0;
