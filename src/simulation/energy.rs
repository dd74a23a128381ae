//! Mechanical-energy diagnostic
//!
//! Total energy is a read-only validation quantity recomputed after each
//! completed step. It never feeds back into integration. Cost is O(N^2),
//! same order as the acceleration kernel.
//!
//! The potential term sums over *ordered* pairs (j, k != j), so every pair
//! is counted twice. That is the convention this engine's diagnostics have
//! always used, and downstream consumers of exported energies rely on it;
//! a two-body system therefore reports `-2 G m1 m2 / r` of potential
//! energy, not the half-sum form.

use crate::simulation::states::NVec3;

/// Kinetic term: `sum of 0.5 * m[j] * |v[j]|^2`.
pub fn kinetic_energy(v: &[NVec3], m: &[f64]) -> f64 {
    v.iter()
        .zip(m.iter())
        .map(|(v, m)| 0.5 * m * v.norm_squared())
        .sum()
}

/// Potential term over ordered pairs: `sum over j, k != j of -G m[j] m[k] / |x[j] - x[k]|`.
/// Coincident bodies divide by zero and the resulting infinity propagates.
#[allow(non_snake_case)]
pub fn potential_energy(x: &[NVec3], m: &[f64], G: f64) -> f64 {
    let n = x.len();
    let mut e = 0.0;
    for j in 0..n {
        for k in 0..n {
            if j == k {
                continue;
            }
            let r = x[j] - x[k];
            e -= G * m[j] * m[k] / r.norm();
        }
    }
    e
}

/// Total mechanical energy of the system.
#[allow(non_snake_case)]
pub fn total_energy(x: &[NVec3], v: &[NVec3], m: &[f64], G: f64) -> f64 {
    kinetic_energy(v, m) + potential_energy(x, m, G)
}
