pub mod analytic;
pub mod diagnostics;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod plot;
pub mod sim;

pub use dynamics::state::{SimConfig, State};
pub use error::SimError;
pub use sim::{integrate, uniform_grid, Method};
