//! High-level runtime engine settings
//!
//! Selects the time integrator and the acceleration-kernel path used when
//! building and running a `Scenario`

use crate::simulation::integrator::Integrator;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: Integrator, // euler, euler_cromer, rk2, rk4 or leapfrog
    pub massless: bool,         // false = all-pairs kernel, true = massive-sources fast path
}
