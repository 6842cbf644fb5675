use std::fmt;

use crate::constants::{CRATER_DEPTH_PER_MPH, FEET_PER_MILE, SECONDS_PER_HOUR};
use crate::control::lander::LanderState;
use crate::control::mission::StepRecord;

pub const BANNER: [&str; 6] = [
    "CONTROL CALLING LUNAR MODULE. MANUAL CONTROL IS NECESSARY",
    "YOU MAY RESET FUEL RATE K EACH 10 SECS TO 0 OR ANY VALUE",
    "BETWEEN 8 & 200 LBS/SEC. YOU'VE 16000 LBS FUEL. ESTIMATED",
    "FREE FALL IMPACT TIME-120 SECS. CAPSULE WEIGHT-32500 LBS",
    "FIRST RADAR CHECK COMING UP",
    "COMMENCE LANDING PROCEDURE",
];

pub const HEADER: &str = "TIME,SECS   ALTITUDE,MILES+FEET   VELOCITY,MPH   FUEL,LBS   FUEL RATE";

// Written as a subtraction so a resting lander prints 0.00, not -0.00.
pub fn descent_speed_mph(velocity: f64) -> f64 {
    0.0 - velocity * SECONDS_PER_HOUR
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingOutcome {
    Perfect,
    Good,
    Poor,
    CraftDamage,
    CrashLanding,
    NoSurvivors { crater_depth: f64 },
}

impl LandingOutcome {
    pub fn from_impact_velocity(velocity: f64) -> Self {
        let mph = descent_speed_mph(velocity);
        if mph <= 1.0 {
            LandingOutcome::Perfect
        } else if mph <= 10.0 {
            LandingOutcome::Good
        } else if mph <= 22.0 {
            LandingOutcome::Poor
        } else if mph <= 40.0 {
            LandingOutcome::CraftDamage
        } else if mph <= 60.0 {
            LandingOutcome::CrashLanding
        } else {
            LandingOutcome::NoSurvivors {
                crater_depth: mph * CRATER_DEPTH_PER_MPH,
            }
        }
    }
}

impl fmt::Display for LandingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandingOutcome::Perfect => write!(f, "PERFECT LANDING !-(LUCKY)"),
            LandingOutcome::Good => write!(f, "GOOD LANDING-(COULD BE BETTER)"),
            LandingOutcome::Poor => write!(f, "CONGRATULATIONS ON A POOR LANDING"),
            LandingOutcome::CraftDamage => write!(f, "CRAFT DAMAGE. GOOD LUCK"),
            LandingOutcome::CrashLanding => write!(f, "CRASH LANDING-YOU'VE 5 HRS OXYGEN"),
            LandingOutcome::NoSurvivors { crater_depth } => write!(
                f,
                "SORRY,BUT THERE WERE NO SURVIVORS-YOU BLEW IT!\n\
                 IN FACT YOU BLASTED A NEW LUNAR CRATER {:.2} FT. DEEP",
                crater_depth
            ),
        }
    }
}

/// Flight log as printed on the pilot console.
#[derive(Debug, Default)]
pub struct Telemetry {
    pub log: Vec<String>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry { log: Vec::new() }
    }

    pub fn record(&mut self, record: &StepRecord) -> &str {
        self.log.push(Self::format_line(&record.state, record.fuel_rate));
        &self.log[self.log.len() - 1]
    }

    pub fn lines(&self) -> &[String] {
        &self.log
    }

    /// Formats one radar check: time, altitude as miles plus feet, descent
    /// speed in mph, remaining fuel and the commanded rate.
    pub fn format_line(state: &LanderState, fuel_rate: Option<f64>) -> String {
        let miles = state.altitude.floor();
        let feet = (FEET_PER_MILE * (state.altitude - miles)).round();
        let rate = fuel_rate.map(|k| format!("{:>3}", k)).unwrap_or_default();
        format!(
            "{:>8.2}{:>15}{:>7}{:>15.2}{:>12.1}         {}",
            state.time,
            miles,
            feet,
            descent_speed_mph(state.velocity),
            state.remaining_propellant(),
            rate
        )
    }

    pub fn final_report(final_state: &LanderState, fuel_out_time: Option<f64>) -> String {
        let mut report = String::new();
        if let Some(time) = fuel_out_time {
            report.push_str(&format!("FUEL OUT AT {:.2} SECS\n", time));
        }
        report.push_str(&format!("ON THE MOON AT {:.2} SECS\n", final_state.time));
        report.push_str(&LandingOutcome::from_impact_velocity(final_state.velocity).to_string());
        report
    }
}
