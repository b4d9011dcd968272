pub mod event;
pub mod integrator;
pub mod runner;

pub use runner::{run_batch, simulate, Trajectory};
