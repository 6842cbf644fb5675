//! Interval bisection for locating event times inside a simulation step.
//!
//! Convergence requires both criteria at once: `|f(c)| < delta` and the
//! remaining half-interval `< epsilon`. Altitude and velocity are not
//! dimensionless, so a tiny time bracket can still leave a physically
//! significant residual, and the other way around.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::constants::MAX_BISECTION_ITERATIONS;
use crate::errors::RootFindingError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    pub delta: f64,
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Bisection {
    pub fn new(delta: f64, epsilon: f64) -> Self {
        Bisection {
            delta,
            epsilon,
            max_iterations: MAX_BISECTION_ITERATIONS,
        }
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Returns a root of `f` inside `[a, b]`.
    ///
    /// `f(a)` and `f(b)` must bracket a root. No search for a bracket is made.
    pub fn find_root<F>(&self, mut f: F, a: f64, b: f64) -> Result<f64, RootFindingError>
    where
        F: FnMut(f64) -> f64,
    {
        // Also rejects NaN bounds.
        if !(a < b) {
            return Err(RootFindingError::InvalidInterval { a, b });
        }

        let mut a = a;
        let mut fa = evaluate(&mut f, a)?;
        let fb = evaluate(&mut f, b)?;

        if sign(fa) == sign(fb) {
            return Err(RootFindingError::NoSignChange { a, fa, b, fb });
        }

        let mut error = b - a;
        let mut c = a;
        let mut fc = fa;
        for i in 0..self.max_iterations {
            error /= 2.0;
            c = a + error;
            fc = evaluate(&mut f, c)?;
            trace!(iteration = i, c, fc, error, "bisection step");

            if fc.abs() < self.delta && error.abs() < self.epsilon {
                debug!(
                    iterations = i,
                    c,
                    fc,
                    delta = self.delta,
                    error,
                    epsilon = self.epsilon,
                    "bisection converged"
                );
                return Ok(c);
            }

            // Otherwise the root stays in [a, c], which `error` already tracks.
            if sign(fa) == sign(fc) {
                a = c;
                fa = fc;
            }
        }

        Err(RootFindingError::NotConverged {
            iterations: self.max_iterations,
            c,
            fc,
            error,
        })
    }
}

fn evaluate<F>(f: &mut F, x: f64) -> Result<f64, RootFindingError>
where
    F: FnMut(f64) -> f64,
{
    let fx = f(x);
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(RootFindingError::NonFiniteValue { x })
    }
}

// Three-way sign: zero is its own sign, unlike `f64::signum`.
fn sign(x: f64) -> Ordering {
    x.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}
