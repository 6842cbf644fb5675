use tracing::{info, warn};

use crate::constants::{
    DRY_MASS, EXHAUST_VELOCITY, INITIAL_ALTITUDE, INITIAL_MASS, INITIAL_TIME, INITIAL_VELOCITY,
    LUNAR_GRAVITY, TIME_STEP,
};
use crate::control::lander::{Lander, LanderState};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionConfig {
    pub gravity: f64,
    pub exhaust_velocity: f64,
    pub step_duration: f64,
    pub initial_state: LanderState,
}

impl Default for MissionConfig {
    fn default() -> Self {
        MissionConfig {
            gravity: LUNAR_GRAVITY,
            exhaust_velocity: EXHAUST_VELOCITY,
            step_duration: TIME_STEP,
            initial_state: LanderState::new(
                INITIAL_TIME,
                INITIAL_ALTITUDE,
                INITIAL_VELOCITY,
                DRY_MASS,
                INITIAL_MASS,
            ),
        }
    }
}

impl MissionConfig {
    pub fn with_gravity(self, gravity: f64) -> Self {
        Self { gravity, ..self }
    }

    pub fn with_exhaust_velocity(self, exhaust_velocity: f64) -> Self {
        Self {
            exhaust_velocity,
            ..self
        }
    }

    pub fn with_step_duration(self, step_duration: f64) -> Self {
        Self {
            step_duration,
            ..self
        }
    }

    pub fn with_initial_state(self, initial_state: LanderState) -> Self {
        Self {
            initial_state,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.step_duration.is_finite() && self.step_duration > 0.0) {
            return Err(SimulationError::InvalidConstant(format!(
                "step duration must be positive and finite, got {}",
                self.step_duration
            )));
        }
        // Lander::new checks the physical constants and the initial state.
        Lander::new(self.initial_state, self.gravity, self.exhaust_velocity).map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    pub state: LanderState,
    pub fuel_rate: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct MissionControl {
    lander: Lander,
    step_duration: f64,
    history: Vec<StepRecord>,
    fuel_out_time: Option<f64>,
    final_state: Option<LanderState>,
}

impl MissionControl {
    pub fn new(config: MissionConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let lander = Lander::new(config.initial_state, config.gravity, config.exhaust_velocity)?;

        Ok(MissionControl {
            lander,
            step_duration: config.step_duration,
            history: vec![StepRecord {
                state: config.initial_state,
                fuel_rate: None,
            }],
            fuel_out_time: None,
            final_state: None,
        })
    }

    /// Runs the given fuel rates in order and returns the records they produced.
    ///
    /// Stops early on touchdown or when the tank is empty. A batch that leaves
    /// the tank empty ends with one unpowered step down to the surface. If a
    /// step fails, the records made before it are still in `history()`.
    pub fn execute(&mut self, fuel_rates: &[f64]) -> Result<Vec<StepRecord>, SimulationError> {
        if self.is_complete() {
            warn!("mission already complete, ignoring {} commands", fuel_rates.len());
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut touchdown = false;
        for &fuel_rate in fuel_rates {
            if self.lander.state().is_out_of_propellant() {
                break;
            }
            touchdown = self.lander.advance(fuel_rate, self.step_duration)?;
            records.push(self.record(fuel_rate));

            if touchdown {
                self.final_state = Some(self.lander.state());
                break;
            }
        }

        let current = self.lander.state();
        if !touchdown && current.is_out_of_propellant() {
            info!(time = current.time, "fuel out, switching to free fall");
            self.fuel_out_time = Some(current.time);
            self.lander.advance(0.0, self.step_duration)?;
            records.push(self.record(0.0));
            self.final_state = Some(self.lander.state());
        }

        Ok(records)
    }

    fn record(&mut self, fuel_rate: f64) -> StepRecord {
        let record = StepRecord {
            state: self.lander.state(),
            fuel_rate: Some(fuel_rate),
        };
        self.history.push(record);
        record
    }

    pub fn state(&self) -> LanderState {
        self.lander.state()
    }

    pub fn is_complete(&self) -> bool {
        self.final_state.is_some()
    }

    pub fn final_state(&self) -> Option<LanderState> {
        self.final_state
    }

    pub fn fuel_out_time(&self) -> Option<f64> {
        self.fuel_out_time
    }

    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }
}
