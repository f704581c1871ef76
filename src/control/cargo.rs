use serde::{Deserialize, Serialize};

use crate::constants::CENTIMETERS_PER_METER;

/// Cargo modeled as a cube; only the edge length matters for drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cargo {
    pub weight: f64,  // kg
    pub size_cm: f64, // cm, cube edge
    pub drag_coefficient_vertical: f64,
    pub drag_coefficient_horizontal: f64,
}

impl Cargo {
    pub fn new(
        weight: f64,
        size_cm: f64,
        drag_coefficient_vertical: f64,
        drag_coefficient_horizontal: f64,
    ) -> Self {
        Cargo {
            weight,
            size_cm,
            drag_coefficient_vertical,
            drag_coefficient_horizontal,
        }
    }

    pub fn size_meters(&self) -> f64 {
        self.size_cm / CENTIMETERS_PER_METER
    }

    /// Area of one cube face, m².
    pub fn cross_sectional_area(&self) -> f64 {
        let size = self.size_meters();
        size * size
    }
}

impl Default for Cargo {
    fn default() -> Self {
        Cargo::new(1.0, 10.0, 0.75, 0.75)
    }
}
