pub mod dynamics;
pub mod errors;
pub mod io;
pub mod physics;
pub mod scenario;
pub mod shuttle;
pub mod sim;

pub use crate::dynamics::{derivatives, Deriv, SimConfig, State};
pub use crate::errors::SimError;
pub use crate::shuttle::{LaunchCondition, Shuttle};
pub use crate::sim::{run_batch, simulate, Trajectory};
