use serde::{Deserialize, Serialize};

/// Drone kinematic state at the moment of release.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneState {
    pub horizontal_velocity: f64, // m/s
    pub vertical_velocity: f64,   // m/s, positive is upward
    pub altitude: f64,            // m above ground
}

impl DroneState {
    pub fn new(horizontal_velocity: f64, vertical_velocity: f64, altitude: f64) -> Self {
        DroneState {
            horizontal_velocity,
            vertical_velocity,
            altitude,
        }
    }
}
