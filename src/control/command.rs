use crate::constants::{MAX_FUEL_RATE, MIN_FUEL_RATE};
use crate::errors::SimulationError;

pub fn parse_fuel_rates(input: &str) -> Result<Vec<f64>, SimulationError> {
    if input.trim().is_empty() {
        return Err(SimulationError::InvalidInput(
            "enter a fuel rate or a comma-separated list of rates".to_string(),
        ));
    }

    input.split(',').map(|part| parse_fuel_rate(part.trim())).collect()
}

fn parse_fuel_rate(part: &str) -> Result<f64, SimulationError> {
    if part.is_empty() {
        return Err(SimulationError::InvalidInput("empty fuel rate".to_string()));
    }
    let rate: f64 = part
        .parse()
        .map_err(|_| SimulationError::InvalidInput(format!("'{}' is not a number", part)))?;

    if is_valid_fuel_rate(rate) {
        Ok(rate)
    } else {
        Err(SimulationError::InvalidInput(format!(
            "fuel rate {} must be 0 or between {} and {}",
            part, MIN_FUEL_RATE, MAX_FUEL_RATE
        )))
    }
}

pub fn is_valid_fuel_rate(rate: f64) -> bool {
    rate == 0.0 || (MIN_FUEL_RATE..=MAX_FUEL_RATE).contains(&rate)
}
