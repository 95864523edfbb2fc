pub mod integrator;
pub mod runner;

pub use integrator::Method;
pub use runner::{integrate, uniform_grid};
