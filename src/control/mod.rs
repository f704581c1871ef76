pub mod cargo;
pub mod drone;
pub mod release;
pub mod simulator;
