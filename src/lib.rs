pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::cargo::Cargo;
pub use control::drone::DroneState;
pub use control::release::ReleaseConfig;
pub use control::simulator::{DropOutcome, DropResult, SimulationPhase, Simulator};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::DragFactors;
pub use trajectory_system::kinematics::FallState;
pub use trajectory_system::time_step::select_time_step;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use telemetry_system::report::DropReport;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
