use serde::Serialize;

use crate::{
    constants::SIMULATION_ROUNDS_LIMIT,
    telemetry_system::diagnostics::{DiagnosticSink, TracingSink},
    trajectory_system::{
        aerodynamics::DragFactors, kinematics::FallState, time_step::select_time_step,
    },
    utils::vector2d::Vector2D,
};

use super::release::ReleaseConfig;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SimulationPhase {
    Running,
    Succeeded,
    Exhausted,
}

impl SimulationPhase {
    /// Classifies a state against the release altitude. A NaN fallen distance
    /// never counts as landed.
    pub fn of(state: &FallState, altitude: f64) -> Self {
        if state.rounds < SIMULATION_ROUNDS_LIMIT && state.fallen_distance() < altitude {
            SimulationPhase::Running
        } else if state.fallen_distance() >= altitude {
            SimulationPhase::Succeeded
        } else {
            SimulationPhase::Exhausted
        }
    }
}

/// Terminal state of a successful prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropResult {
    /// Time until reaching the ground, s
    pub fall_duration: f64,
    /// Distance ahead of the release point where the cargo lands, m
    pub horizontal_distance: f64,
    /// Fall speed at the ground, m/s (positive downward)
    pub final_fall_speed: f64,
    /// Horizontal speed at the ground, m/s
    pub final_horizontal_velocity: f64,
    pub simulation_rounds: u32,
}

impl DropResult {
    fn from_state(state: &FallState) -> Self {
        DropResult {
            fall_duration: state.time,
            horizontal_distance: state.horizontal_distance(),
            final_fall_speed: state.fall_speed(),
            final_horizontal_velocity: state.horizontal_velocity(),
            simulation_rounds: state.rounds,
        }
    }

    fn final_velocity(&self) -> Vector2D {
        Vector2D::new(self.final_horizontal_velocity, self.final_fall_speed)
    }

    pub fn impact_speed(&self) -> f64 {
        self.final_velocity().magnitude()
    }

    /// Angle of the impact velocity below the horizontal, degrees.
    pub fn impact_angle_degrees(&self) -> f64 {
        self.final_velocity().angle().to_degrees()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    Landed(DropResult),
    /// The round budget ran out before the cargo reached the ground.
    Inconclusive,
}

impl DropOutcome {
    pub fn result(&self) -> Option<&DropResult> {
        match self {
            DropOutcome::Landed(result) => Some(result),
            DropOutcome::Inconclusive => None,
        }
    }

    pub fn is_inconclusive(&self) -> bool {
        matches!(self, DropOutcome::Inconclusive)
    }
}

/// Predicts where released cargo lands. Holds no per-run state, so one
/// simulator can be shared and run any number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    pub config: ReleaseConfig,
}

impl Simulator {
    pub fn new(config: ReleaseConfig) -> Self {
        Simulator { config }
    }

    pub fn time_step(&self) -> f64 {
        select_time_step(self.config.drone.altitude)
    }

    /// Runs the fall to completion, reporting diagnostics through `sink` when
    /// the run is inconclusive.
    ///
    /// Requires a positive cargo weight and size; see
    /// [`ReleaseConfig::validate`].
    pub fn predict<S: DiagnosticSink>(&self, mut sink: S) -> DropOutcome {
        let delta_time = self.time_step();
        let drag = DragFactors::new(&self.config.cargo);
        let mass = self.config.cargo.weight;
        let altitude = self.config.drone.altitude;

        let mut state = FallState::new(&self.config.drone);
        let mut phase = SimulationPhase::of(&state, altitude);
        while phase == SimulationPhase::Running {
            state.step(delta_time, &drag, mass);
            phase = SimulationPhase::of(&state, altitude);
        }

        match phase {
            SimulationPhase::Succeeded => DropOutcome::Landed(DropResult::from_state(&state)),
            _ => {
                sink.record(&format!("SIMULATION TIME {} seconds", state.time));
                sink.record(&format!(
                    "SIMULATION VERTICAL DISTANCE {}",
                    state.fallen_distance()
                ));
                DropOutcome::Inconclusive
            }
        }
    }

    /// [`Simulator::predict`] with diagnostics sent to `tracing`.
    pub fn predict_traced(&self) -> DropOutcome {
        self.predict(TracingSink)
    }
}
