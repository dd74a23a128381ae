//! Fixed-step time integrators for the N-body system
//!
//! Provides five schemes sharing one contract: consume the current
//! (x, v, a, m, dt), produce the next (x, v[, a]). They differ in accuracy
//! order and in how many acceleration evaluations they perform internally:
//!
//! - `euler`        1st order, 0 internal evaluations
//! - `euler_cromer` 1st order (semi-implicit), 0 internal evaluations
//! - `rk2`          2nd order, 1 midpoint evaluation
//! - `rk4`          4th order, 3 evaluations (k1 is the supplied `a`)
//! - `leapfrog`     2nd order, symplectic, 1 evaluation; returns the new
//!   acceleration through the caller's buffer so the next step can reuse it
//!
//! Leapfrog is the long-horizon workhorse: being symplectic it keeps energy
//! bounded over many orbital periods where the Euler variants drift without
//! bound. None of these functions advance `sys.t`; the orchestrator owns
//! the step lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::simulation::forces::Acceleration;
use crate::simulation::states::{NVec3, System};

/// Which integrator advances the system.
///
/// Exactly one variant is active at a time; dispatch is exhaustive. The
/// serde names match the scenario-file and `set_integrator` spellings.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrator {
    #[serde(rename = "euler")]
    Euler,
    #[serde(rename = "euler_cromer")]
    EulerCromer,
    #[serde(rename = "rk2")]
    Rk2,
    #[serde(rename = "rk4")]
    Rk4,
    #[serde(rename = "leapfrog")]
    Leapfrog,
}

impl Integrator {
    pub const ALL: [Integrator; 5] = [
        Integrator::Euler,
        Integrator::EulerCromer,
        Integrator::Rk2,
        Integrator::Rk4,
        Integrator::Leapfrog,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Integrator::Euler => "euler",
            Integrator::EulerCromer => "euler_cromer",
            Integrator::Rk2 => "rk2",
            Integrator::Rk4 => "rk4",
            Integrator::Leapfrog => "leapfrog",
        }
    }
}

impl FromStr for Integrator {
    type Err = Error;

    /// Unrecognized names are a configuration error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "euler" => Ok(Integrator::Euler),
            "euler_cromer" => Ok(Integrator::EulerCromer),
            "rk2" => Ok(Integrator::Rk2),
            "rk4" => Ok(Integrator::Rk4),
            "leapfrog" => Ok(Integrator::Leapfrog),
            _ => Err(Error::UnknownIntegrator { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Explicit Euler step using the supplied accelerations.
/// x' = x + v dt (old v), then v' = v + a dt.
pub fn euler(sys: &mut System, a: &[NVec3], dt: f64) {
    for i in 0..sys.len() {
        sys.x[i] += sys.v[i] * dt;
        sys.v[i] += a[i] * dt;
    }
}

/// Euler-Cromer (semi-implicit Euler) step.
/// v' = v + a dt first, then x' = x + v' dt with the *updated* velocity.
pub fn euler_cromer(sys: &mut System, a: &[NVec3], dt: f64) {
    for i in 0..sys.len() {
        sys.v[i] += a[i] * dt;
        sys.x[i] += sys.v[i] * dt;
    }
}

/// 2nd-order Runge-Kutta (midpoint) step.
/// Half-step Euler to the midpoint, evaluate acceleration there, apply the
/// midpoint slopes over the full step.
pub fn rk2(sys: &mut System, forces: &dyn Acceleration, a: &[NVec3], dt: f64) {
    let n = sys.len();
    let half_dt = 0.5 * dt;

    // Midpoint state from a half Euler step
    let mut x_half = vec![NVec3::zeros(); n];
    let mut v_half = vec![NVec3::zeros(); n];
    for i in 0..n {
        x_half[i] = sys.x[i] + sys.v[i] * half_dt;
        v_half[i] = sys.v[i] + a[i] * half_dt;
    }

    // k2_v = a(x_half), k2_x = v_half
    let mut k2_v = vec![NVec3::zeros(); n];
    forces.acceleration(&x_half, &sys.m, &mut k2_v);

    // Full-step correction with the midpoint slopes
    for i in 0..n {
        sys.v[i] += k2_v[i] * dt;
        sys.x[i] += v_half[i] * dt;
    }
}

/// Classical 4th-order Runge-Kutta step.
/// k1 is the supplied acceleration; k2-k4 are evaluated at trial states.
/// dv = dt (k1 + 2 k2 + 2 k3 + k4) / 6, same weighted form for dx using
/// the velocity stages.
pub fn rk4(sys: &mut System, forces: &dyn Acceleration, a: &[NVec3], dt: f64) {
    let n = sys.len();
    let half_dt = 0.5 * dt;

    // k1_v = a, k1_x = v
    let mut x_trial = vec![NVec3::zeros(); n];

    // k2 at x + 0.5 k1_x dt
    for i in 0..n {
        x_trial[i] = sys.x[i] + sys.v[i] * half_dt;
    }
    let mut k2_v = vec![NVec3::zeros(); n];
    forces.acceleration(&x_trial, &sys.m, &mut k2_v);
    // k2_x = v + 0.5 k1_v dt, needed for the k3 trial position
    let k2_x: Vec<NVec3> = (0..n).map(|i| sys.v[i] + a[i] * half_dt).collect();

    // k3 at x + 0.5 k2_x dt
    for i in 0..n {
        x_trial[i] = sys.x[i] + k2_x[i] * half_dt;
    }
    let mut k3_v = vec![NVec3::zeros(); n];
    forces.acceleration(&x_trial, &sys.m, &mut k3_v);
    let k3_x: Vec<NVec3> = (0..n).map(|i| sys.v[i] + k2_v[i] * half_dt).collect();

    // k4 at x + k3_x dt
    for i in 0..n {
        x_trial[i] = sys.x[i] + k3_x[i] * dt;
    }
    let mut k4_v = vec![NVec3::zeros(); n];
    forces.acceleration(&x_trial, &sys.m, &mut k4_v);
    let k4_x: Vec<NVec3> = (0..n).map(|i| sys.v[i] + k3_v[i] * dt).collect();

    // Weighted average of the four stages
    for i in 0..n {
        let dv = (a[i] + 2.0 * k2_v[i] + 2.0 * k3_v[i] + k4_v[i]) * (dt / 6.0);
        let dx = (sys.v[i] + 2.0 * k2_x[i] + 2.0 * k3_x[i] + k4_x[i]) * (dt / 6.0);
        sys.v[i] += dv;
        sys.x[i] += dx;
    }
}

/// Leapfrog (kick-drift form) step, symplectic and time-reversible.
///
/// Drift: x' = x + v dt + 0.5 a0 dt^2
/// Evaluate a1 = a(x'), then kick: v' = v + 0.5 (a0 + a1) dt.
///
/// `a` holds a0 on entry and a1 on return, so the orchestrator carries the
/// acceleration forward instead of recomputing it next step.
pub fn leapfrog(sys: &mut System, forces: &dyn Acceleration, a: &mut [NVec3], dt: f64) {
    let n = sys.len();
    let half_dt = 0.5 * dt;

    // Drift with the carried acceleration a0
    for i in 0..n {
        sys.x[i] += sys.v[i] * dt + a[i] * (half_dt * dt);
    }

    // a1 at the new positions
    let mut a_new = vec![NVec3::zeros(); n];
    forces.acceleration(&sys.x, &sys.m, &mut a_new);

    // Kick with the average of old and new accelerations, then hand a1
    // back through the caller's buffer
    for i in 0..n {
        sys.v[i] += (a[i] + a_new[i]) * half_dt;
        a[i] = a_new[i];
    }
}
