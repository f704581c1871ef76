use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

use super::{cargo::Cargo, drone::DroneState};

/// Everything a single drop prediction needs, fixed before the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    pub cargo: Cargo,
    pub drone: DroneState,
}

impl ReleaseConfig {
    pub fn new(cargo: Cargo, drone: DroneState) -> Self {
        ReleaseConfig { cargo, drone }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: ReleaseConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks the physical preconditions of a run.
    ///
    /// The simulator itself never calls this: a zero weight or size is caller
    /// error and produces non-finite state rather than a reported fault.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("cargo weight", self.cargo.weight),
            ("cargo size", self.cargo.size_cm),
            ("vertical drag coefficient", self.cargo.drag_coefficient_vertical),
            ("horizontal drag coefficient", self.cargo.drag_coefficient_horizontal),
            ("drone horizontal velocity", self.drone.horizontal_velocity),
            ("drone vertical velocity", self.drone.vertical_velocity),
            ("drone altitude", self.drone.altitude),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InitializationError(format!(
                "{} must be a finite number, got {}",
                name, value
            )));
        }

        if self.cargo.weight <= 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "Cargo weight must be positive, got {} kg",
                self.cargo.weight
            )));
        }
        if self.cargo.size_cm <= 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "Cargo size must be positive, got {} cm",
                self.cargo.size_cm
            )));
        }
        if self.cargo.drag_coefficient_vertical < 0.0
            || self.cargo.drag_coefficient_horizontal < 0.0
        {
            return Err(SimulationError::ConfigError(
                "Drag coefficients cannot be negative".to_string(),
            ));
        }
        if self.drone.altitude < 0.0 {
            return Err(SimulationError::ConfigError(format!(
                "Drone altitude cannot be negative, got {} m",
                self.drone.altitude
            )));
        }

        Ok(())
    }
}
