//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - total integration time and fixed step size,
//! - snapshot stride for batched runs,
//! - random seed for sampled initial conditions,
//! - gravitational constant `G`
//!
//! The default unit system is astronomical units, days, and solar masses.

/// Gravitational constant in AU^3 day^-2 M_sun^-1.
pub const G_AU_DAY_MSUN: f64 = 2.9591220828559e-4;

/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub t_end: f64,           // total integration time (days)
    pub dt: f64,              // fixed step size (days)
    pub store_every_n: usize, // snapshot stride for batched runs
    pub seed: u64,            // deterministic seed for sampled initial conditions
    pub G: f64,               // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: years_to_days(1.0),
            dt: 0.1,
            store_every_n: 1,
            seed: 42,
            G: G_AU_DAY_MSUN,
        }
    }
}
