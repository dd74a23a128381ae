//! Acceleration kernels for the n-body engine
//!
//! Defines the [`Acceleration`] trait and two direct O(N^2) Newtonian
//! gravity implementations: the general all-pairs kernel and a fast path
//! that only loops over massive sources, for systems dominated by
//! massless test particles.
//!
//! The kernels are exact: there is no softening. If two distinct bodies
//! coincide the division by zero propagates infinity/NaN into the output,
//! and callers detect that after the step (see `System::is_finite`). The
//! kernel never masks it.

use crate::simulation::states::NVec3;

/// Trait for acceleration sources.
///
/// Implementations take immutable views over positions and masses and
/// write one acceleration per body into `out`, overwriting its previous
/// contents. `out` is a separate buffer from `x`; no aliasing.
pub trait Acceleration {
    fn acceleration(&self, x: &[NVec3], m: &[f64], out: &mut [NVec3]);
}

/// Newtonian gravity, direct all-pairs sum.
///
/// `a[j] = sum over k != j of -G * m[k] * (x[j] - x[k]) / |x[j] - x[k]|^3`
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, x: &[NVec3], m: &[f64], out: &mut [NVec3]) {
        let n = x.len();

        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }

        // Ordered (j, k) loop: body j accumulates the pull from every
        // other body k. Matches the summation order of the massless path
        // restricted to massive sources.
        for j in 0..n {
            for k in 0..n {
                if j == k {
                    continue;
                }

                // Displacement from source k to target j; the pull on j
                // points along -r
                let r = x[j] - x[k];

                // 1 / |r| and 1 / |r|^3; |r| = 0 divides by zero here,
                // which is the documented degeneracy behavior
                let inv_r = r.norm().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                out[j] -= self.G * m[k] * inv_r3 * r;
            }
        }
    }
}

/// Newtonian gravity with massless test particles.
///
/// Same contract as [`NewtonianGravity`], but the inner loop runs only
/// over bodies with `m > 0`. With N_m massive bodies among N total the
/// cost drops from O(N^2) to O(N * N_m), which is what makes belts of
/// tens of thousands of test particles affordable. A genuinely distinct
/// loop, not a zero weight.
#[allow(non_snake_case)]
pub struct NewtonianGravityMassless {
    pub G: f64,
}

impl Acceleration for NewtonianGravityMassless {
    fn acceleration(&self, x: &[NVec3], m: &[f64], out: &mut [NVec3]) {
        let n = x.len();

        // Source indices are collected per call rather than cached, so the
        // kernel stays pure over its input views and survives bodies being
        // added or removed between steps.
        let sources: Vec<usize> = (0..n).filter(|&k| m[k] > 0.0).collect();

        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }

        for j in 0..n {
            for &k in &sources {
                if j == k {
                    continue;
                }

                let r = x[j] - x[k];

                let inv_r = r.norm().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                out[j] -= self.G * m[k] * inv_r3 * r;
            }
        }
    }
}
