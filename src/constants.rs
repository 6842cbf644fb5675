// Physical Constants (miles, seconds, pounds)
pub const LUNAR_GRAVITY: f64 = 0.001; // mi/s²
pub const EXHAUST_VELOCITY: f64 = 1.8; // mi/s

// Simulation Parameters
pub const TIME_STEP: f64 = 10.0; // s, one radar check per pilot command

// Initial Conditions
pub const INITIAL_TIME: f64 = 0.0; // s
pub const INITIAL_ALTITUDE: f64 = 120.0; // mi
pub const INITIAL_VELOCITY: f64 = -1.0; // mi/s, descending
pub const DRY_MASS: f64 = 16_500.0; // lb
pub const INITIAL_MASS: f64 = 32_500.0; // lb, capsule plus 16000 lb of propellant

// Event Tolerances
pub const VELOCITY_TOLERANCE: f64 = 1.89e-4; // mi/s, 1 ft/s
pub const ALTITUDE_TOLERANCE: f64 = 1.89e-4; // mi, 1 ft
pub const TIME_TOLERANCE: f64 = 1e-2; // s
pub const MAX_BISECTION_ITERATIONS: usize = 1000;

// Pilot Input Limits
pub const MIN_FUEL_RATE: f64 = 8.0; // lb/s
pub const MAX_FUEL_RATE: f64 = 200.0; // lb/s

// Display Units
pub const FEET_PER_MILE: f64 = 5280.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const CRATER_DEPTH_PER_MPH: f64 = 0.277777; // ft
