use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("Invalid interval [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("Function has same signs at a and b (f({a}) = {fa}, f({b}) = {fb})")]
    NoSignChange { a: f64, fa: f64, b: f64, fb: f64 },

    #[error("Root not found within {iterations} iterations (c: {c}, f(c): {fc}, error: {error})")]
    NotConverged {
        iterations: usize,
        c: f64,
        fc: f64,
        error: f64,
    },

    #[error("Function is not finite at x = {x}")]
    NonFiniteValue { x: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid constant: {0}")]
    InvalidConstant(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Root finding error: {0}")]
    RootFinding(#[from] RootFindingError),
}
