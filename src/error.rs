//! Error types for the simulation core
//!
//! Configuration problems (bad integrator name, negative mass, bad timestep)
//! are surfaced eagerly through [`Error`] before any stepping occurs.
//! Numerical degeneracy (coincident bodies) is deliberately *not* an error
//! value: it propagates as non-finite state that callers detect after a step
//! via `Simulator::energy` or `System::is_finite`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown integrator '{name}' (expected one of: euler, euler_cromer, rk2, rk4, leapfrog)")]
    UnknownIntegrator { name: String },

    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },

    #[error("no body named '{name}' in the system")]
    UnknownBody { name: String },

    #[error("body '{name}' has negative mass {mass}")]
    NegativeMass { name: String, mass: f64 },

    #[error("timestep must be positive and finite, got {dt}")]
    NonPositiveTimestep { dt: f64 },

    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },
}
