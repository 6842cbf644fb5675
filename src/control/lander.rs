use tracing::{debug, info};

use crate::constants::{ALTITUDE_TOLERANCE, TIME_TOLERANCE, VELOCITY_TOLERANCE};
use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::{altitude, ballistic_impact_time, velocity};
use crate::trajectory_system::root_finder::Bisection;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LanderState {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub dry_mass: f64,
    pub mass: f64,
}

impl LanderState {
    pub fn new(time: f64, altitude: f64, velocity: f64, dry_mass: f64, mass: f64) -> Self {
        LanderState {
            time,
            altitude,
            velocity,
            dry_mass,
            mass,
        }
    }

    pub fn with_time(self, time: f64) -> Self {
        Self { time, ..self }
    }

    pub fn with_altitude(self, altitude: f64) -> Self {
        Self { altitude, ..self }
    }

    pub fn with_velocity(self, velocity: f64) -> Self {
        Self { velocity, ..self }
    }

    pub fn with_mass(self, mass: f64) -> Self {
        Self { mass, ..self }
    }

    pub fn remaining_propellant(&self) -> f64 {
        self.mass - self.dry_mass
    }

    pub fn is_out_of_propellant(&self) -> bool {
        self.mass == self.dry_mass
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("time", self.time),
            ("altitude", self.altitude),
            ("velocity", self.velocity),
            ("dry mass", self.dry_mass),
            ("mass", self.mass),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InvalidState(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
        if self.altitude < 0.0 {
            return Err(SimulationError::InvalidState(format!(
                "altitude must not be negative, got {}",
                self.altitude
            )));
        }
        if self.dry_mass <= 0.0 {
            return Err(SimulationError::InvalidState(format!(
                "dry mass must be positive, got {}",
                self.dry_mass
            )));
        }
        if self.mass < self.dry_mass {
            return Err(SimulationError::InvalidState(format!(
                "mass {} is below dry mass {}",
                self.mass, self.dry_mass
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Lander {
    state: LanderState,
    gravity: f64,
    exhaust_velocity: f64,
}

impl Lander {
    pub fn new(
        state: LanderState,
        gravity: f64,
        exhaust_velocity: f64,
    ) -> Result<Self, SimulationError> {
        validate_constant("gravity", gravity)?;
        validate_constant("exhaust velocity", exhaust_velocity)?;
        state.validate()?;

        Ok(Lander {
            state,
            gravity,
            exhaust_velocity,
        })
    }

    pub fn state(&self) -> LanderState {
        self.state
    }

    /// Burns propellant at `fuel_rate` for up to `duration` seconds and returns
    /// whether the lander touched down during the step.
    ///
    /// The step ends early when the tank runs dry or the lander reaches the
    /// surface. With an empty tank the lander falls freely until impact,
    /// whatever the command. On error the held state is left untouched.
    pub fn advance(&mut self, fuel_rate: f64, duration: f64) -> Result<bool, SimulationError> {
        let s0 = self.state;
        let (g, u) = (self.gravity, self.exhaust_velocity);

        if s0.is_out_of_propellant() {
            let t1 = ballistic_impact_time(s0.altitude, s0.velocity, g);
            self.state = LanderState {
                time: s0.time + t1,
                altitude: 0.0,
                velocity: velocity(t1, s0.velocity, s0.mass, u, 0.0, g),
                ..s0
            };
            info!(
                time = self.state.time,
                velocity = self.state.velocity,
                "ballistic impact"
            );
            return Ok(true);
        }

        validate_command(fuel_rate, duration)?;
        let k = fuel_rate;
        let v = |t: f64| velocity(t, s0.velocity, s0.mass, u, k, g);
        let r = |t: f64| altitude(t, s0.altitude, s0.velocity, s0.mass, u, k, g);

        let mut t1 = duration;
        let mut exhausted = false;

        let remaining = s0.remaining_propellant();
        if k > 0.0 && remaining < k * t1 {
            t1 = remaining / k;
            exhausted = true;
        }

        // Thrust turning a descent into a climb: altitude bottoms out where v == 0.
        if s0.velocity <= 0.0 && v(t1) > 0.0 {
            let t_min =
                Bisection::new(VELOCITY_TOLERANCE, TIME_TOLERANCE).find_root(v, 0.0, t1)?;
            let min_altitude = r(t_min);
            info!(
                time = s0.time,
                offset = t_min,
                min_altitude,
                "temporary ascent"
            );
            if min_altitude <= 0.0 {
                t1 = t_min;
                exhausted = false;
            }
        }

        let touchdown = r(t1) <= 0.0;
        if touchdown {
            t1 = Bisection::new(ALTITUDE_TOLERANCE, TIME_TOLERANCE).find_root(r, 0.0, t1)?;
            exhausted = false;
        }

        let mass = if exhausted {
            s0.dry_mass
        } else {
            (s0.mass - k * t1).max(s0.dry_mass)
        };

        self.state = LanderState {
            time: s0.time + t1,
            altitude: if touchdown { 0.0 } else { r(t1) },
            velocity: v(t1),
            dry_mass: s0.dry_mass,
            mass,
        };

        debug!(fuel_rate = k, state = ?self.state, "step completed");
        if exhausted {
            info!(time = self.state.time, "fuel out");
        }
        if touchdown {
            info!(
                time = self.state.time,
                velocity = self.state.velocity,
                "touchdown"
            );
        }
        Ok(touchdown)
    }
}

fn validate_constant(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidConstant(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

fn validate_command(fuel_rate: f64, duration: f64) -> Result<(), SimulationError> {
    if !(fuel_rate.is_finite() && fuel_rate >= 0.0) {
        return Err(SimulationError::InvalidCommand(format!(
            "fuel rate must be non-negative, got {}",
            fuel_rate
        )));
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(SimulationError::InvalidCommand(format!(
            "duration must be positive, got {}",
            duration
        )));
    }
    Ok(())
}
