use crate::{constants::AIR_DENSITY_SEA_LEVEL, control::cargo::Cargo};

/// Per-axis drag factors (`0.5 * rho * Cd * A`), computed once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFactors {
    /// Acts against vertical motion; built from the vertical coefficient.
    pub vertical: f64,
    /// Acts against horizontal motion; built from the horizontal coefficient.
    pub horizontal: f64,
}

impl DragFactors {
    pub fn new(cargo: &Cargo) -> Self {
        let area = cargo.cross_sectional_area();
        DragFactors {
            vertical: Self::drag_factor(cargo.drag_coefficient_vertical, area),
            horizontal: Self::drag_factor(cargo.drag_coefficient_horizontal, area),
        }
    }

    fn drag_factor(drag_coefficient: f64, cross_sectional_area: f64) -> f64 {
        0.5 * AIR_DENSITY_SEA_LEVEL * drag_coefficient * cross_sectional_area
    }
}

/// Drag deceleration magnitude for one axis.
///
/// The velocity is squared, so the result is never negative regardless of the
/// direction of travel. Callers subtract it unconditionally, which only opposes
/// motion while the velocity is positive.
pub fn drag_deceleration(velocity: f64, drag_factor: f64, mass: f64) -> f64 {
    let velocity_squared = velocity * velocity;
    let drag_force = velocity_squared * drag_factor;
    drag_force / mass
}
