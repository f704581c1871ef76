use crate::{constants::GRAVITY, control::drone::DroneState, utils::vector2d::Vector2D};

use super::aerodynamics::{drag_deceleration, DragFactors};

/// Fall/drift state of one run. `y` components grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallState {
    pub time: f64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub rounds: u32,
}

impl FallState {
    /// Cargo leaves the drone with the drone's velocity. An upward release
    /// speed becomes a negative fall speed.
    pub fn new(drone: &DroneState) -> Self {
        FallState {
            time: 0.0,
            position: Vector2D::new(0.0, 0.0),
            velocity: Vector2D::new(drone.horizontal_velocity, -drone.vertical_velocity),
            rounds: 0,
        }
    }

    /// Advances one round with semi-implicit Euler updates per axis.
    ///
    /// Vertical drag is taken from the post-gravity velocity; positions are
    /// integrated with the updated velocities.
    pub fn step(&mut self, delta_time: f64, drag: &DragFactors, mass: f64) {
        self.time += delta_time;

        self.velocity.y += GRAVITY * delta_time;
        self.velocity.y -= drag_deceleration(self.velocity.y, drag.vertical, mass) * delta_time;

        self.velocity.x -= drag_deceleration(self.velocity.x, drag.horizontal, mass) * delta_time;

        self.position = self.position + self.velocity * delta_time;
        self.rounds += 1;
    }

    pub fn fallen_distance(&self) -> f64 {
        self.position.y
    }

    pub fn horizontal_distance(&self) -> f64 {
        self.position.x
    }

    pub fn fall_speed(&self) -> f64 {
        self.velocity.y
    }

    pub fn horizontal_velocity(&self) -> f64 {
        self.velocity.x
    }
}
