pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::command::parse_fuel_rates;
pub use control::lander::{Lander, LanderState};
pub use control::mission::{MissionConfig, MissionControl, StepRecord};
pub use errors::{RootFindingError, SimulationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::root_finder::Bisection;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{LandingOutcome, Telemetry};

// Re-export commonly used utilities
pub use utils::logger::init_logger;
