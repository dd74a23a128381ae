//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator selection and kernel path
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each explicit body
//! - [`BeltConfig`]       – optional randomized belt of test particles
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "leapfrog"  # euler | euler_cromer | rk2 | rk4 | leapfrog
//!   massless: false          # true -> massive-sources fast path
//!
//! parameters:
//!   t_end: 365.25            # total simulation time (days)
//!   dt: 0.5                  # fixed step size (days)
//!   store_every_n: 10        # snapshot stride for batched runs
//!   seed: 42                 # deterministic seed for belt sampling
//!   G: 2.9591220828559e-4    # gravitational constant (AU^3 day^-2 M_sun^-1)
//!
//! preset: "sun_earth"        # optional named base system
//!
//! bodies:                    # optional explicit bodies appended after the preset
//!   - name: "Probe"
//!     x: [ 1.5, 0.0, 0.0 ]
//!     v: [ 0.0, 0.012, 0.0 ]
//!     m: 0.0
//!
//! belt:                      # optional massless test-particle belt
//!   n: 10000
//!   a_min: 2.1
//!   a_max: 3.2
//!   ecc_max: 0.2
//!   inc_max: 0.5
//!
//! com_correction: true       # shift into the barycentric frame before running
//! ```
//!
//! All validation happens eagerly in [`ScenarioConfig::validate`], before
//! any stepping: a bad value is fatal to the run, never silently corrected.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::simulation::integrator::Integrator;
use crate::simulation::params::G_AU_DAY_MSUN;

/// Integrator selection and kernel path.
/// Unknown integrator names fail YAML deserialization up front.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: Integrator, // euler, euler_cromer, rk2, rk4 or leapfrog
    #[serde(default)]
    pub massless: bool, // true -> only loop over massive sources
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulation time (days)
    pub dt: f64,    // fixed step size (days)
    #[serde(default = "default_store_every_n")]
    pub store_every_n: usize, // snapshot stride
    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic seed for belt sampling
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
}

fn default_store_every_n() -> usize {
    1
}

fn default_seed() -> u64 {
    42
}

fn default_g() -> f64 {
    G_AU_DAY_MSUN
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // display name; generated if absent
    pub x: Vec<f64>, // initial position, 3 components
    pub v: Vec<f64>, // initial velocity, 3 components
    pub m: f64,      // mass, zero for a test particle
}

/// Randomized belt of massless test particles around the massive bodies.
/// Defaults match the main asteroid belt (AU, radians).
#[derive(Deserialize, Debug)]
pub struct BeltConfig {
    pub n: usize, // number of test particles
    #[serde(default = "default_belt_a_min")]
    pub a_min: f64,
    #[serde(default = "default_belt_a_max")]
    pub a_max: f64,
    #[serde(default = "default_belt_ecc_max")]
    pub ecc_max: f64,
    #[serde(default = "default_belt_inc_max")]
    pub inc_max: f64,
}

fn default_belt_a_min() -> f64 {
    2.1
}

fn default_belt_a_max() -> f64 {
    3.2
}

fn default_belt_ecc_max() -> f64 {
    0.2
}

fn default_belt_inc_max() -> f64 {
    0.5
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // integrator and kernel path
    pub parameters: ParametersConfig, // numerical parameters
    #[serde(default)]
    pub preset: Option<String>, // named base system, e.g. "solar_system"
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // explicit bodies appended after the preset
    #[serde(default)]
    pub belt: Option<BeltConfig>, // optional test-particle belt
    #[serde(default)]
    pub com_correction: bool, // shift into the barycentric frame before running
}

impl ScenarioConfig {
    /// Check every configuration value before the run is built.
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        if !(p.dt > 0.0 && p.dt.is_finite()) {
            return Err(Error::NonPositiveTimestep { dt: p.dt });
        }
        if !(p.t_end >= 0.0 && p.t_end.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "t_end",
                message: format!("must be non-negative and finite, got {}", p.t_end),
            });
        }
        if p.store_every_n == 0 {
            return Err(Error::InvalidParameter {
                name: "store_every_n",
                message: "must be at least 1".to_string(),
            });
        }
        if !(p.G > 0.0 && p.G.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "G",
                message: format!("must be positive and finite, got {}", p.G),
            });
        }

        for (i, body) in self.bodies.iter().enumerate() {
            let name = body
                .name
                .clone()
                .unwrap_or_else(|| format!("bodies[{i}]"));
            if body.m < 0.0 || !body.m.is_finite() {
                return Err(Error::NegativeMass { name, mass: body.m });
            }
            if body.x.len() != 3 || body.v.len() != 3 {
                return Err(Error::InvalidParameter {
                    name: "bodies",
                    message: format!("'{name}': x and v must each have 3 components"),
                });
            }
            if body.x.iter().chain(body.v.iter()).any(|c| !c.is_finite()) {
                return Err(Error::InvalidParameter {
                    name: "bodies",
                    message: format!("'{name}': non-finite position or velocity component"),
                });
            }
        }

        if let Some(belt) = &self.belt {
            if !(belt.a_min > 0.0 && belt.a_max >= belt.a_min) {
                return Err(Error::InvalidParameter {
                    name: "belt",
                    message: format!(
                        "semi-major axis range [{}, {}] must be positive and ordered",
                        belt.a_min, belt.a_max
                    ),
                });
            }
            if !(0.0..1.0).contains(&belt.ecc_max) {
                return Err(Error::InvalidParameter {
                    name: "belt",
                    message: format!("ecc_max {} must be in [0, 1)", belt.ecc_max),
                });
            }
            if belt.inc_max < 0.0 {
                return Err(Error::InvalidParameter {
                    name: "belt",
                    message: format!("inc_max {} must be non-negative", belt.inc_max),
                });
            }
        }

        Ok(())
    }
}
