//! Wall-clock benchmarks for the acceleration kernels and integrators
//!
//! Invoked from the binary with `--bench`. Output is plain println tables;
//! body placement is deterministic so runs are comparable.

use std::time::Instant;

use crate::simulation::forces::{Acceleration, NewtonianGravity, NewtonianGravityMassless};
use crate::simulation::integrator::{euler, euler_cromer, leapfrog, rk2, rk4, Integrator};
use crate::simulation::params::G_AU_DAY_MSUN;
use crate::simulation::states::{NVec3, System};

/// Build a system of `n_massive` unit-mass bodies plus `n_massless` test
/// particles, placed deterministically (no rand needed).
fn make_system(n_massive: usize, n_massless: usize) -> System {
    let n = n_massive + n_massless;
    let mut x = Vec::with_capacity(n);
    let mut v = Vec::with_capacity(n);
    let mut m = Vec::with_capacity(n);
    let mut names = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        x.push(NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        ));
        v.push(NVec3::zeros());
        m.push(if i < n_massive { 1.0 } else { 0.0 });
        names.push(format!("body_{i}"));
    }

    System { x, v, m, names, t: 0.0 }
}

/// Compare the all-pairs kernel against the massive-sources fast path for
/// a handful of massive bodies swamped by test particles.
pub fn bench_gravity() {
    let n_massive = 8;
    let ns = [200, 400, 800, 1600, 3200, 6400];

    let direct = NewtonianGravity { G: G_AU_DAY_MSUN };
    let fast = NewtonianGravityMassless { G: G_AU_DAY_MSUN };

    println!("kernel eval, {} massive sources:", n_massive);
    for n_massless in ns {
        let sys = make_system(n_massive, n_massless);
        let n = sys.len();
        let mut out = vec![NVec3::zeros(); n];

        // Warm-up
        direct.acceleration(&sys.x, &sys.m, &mut out);

        let evals = if n <= 1000 { 10 } else { 3 };

        let t0 = Instant::now();
        for _ in 0..evals {
            direct.acceleration(&sys.x, &sys.m, &mut out);
        }
        let direct_per_eval = t0.elapsed().as_secs_f64() / evals as f64;

        let t1 = Instant::now();
        for _ in 0..evals {
            fast.acceleration(&sys.x, &sys.m, &mut out);
        }
        let fast_per_eval = t1.elapsed().as_secs_f64() / evals as f64;

        println!(
            "N = {:5}, direct = {:9.6} s,   massless = {:9.6} s",
            n, direct_per_eval, fast_per_eval
        );
    }
}

/// Per-step cost of every integrator at a fixed system size.
pub fn bench_step() {
    let n = 800;
    let dt = 0.001;
    let steps = 20;

    let forces = NewtonianGravity { G: G_AU_DAY_MSUN };

    println!("integrator step, N = {}:", n);
    for integrator in Integrator::ALL {
        let mut sys = make_system(n, 0);
        let mut a = vec![NVec3::zeros(); n];
        forces.acceleration(&sys.x, &sys.m, &mut a);

        let t0 = Instant::now();
        for _ in 0..steps {
            match integrator {
                Integrator::Euler => {
                    forces.acceleration(&sys.x, &sys.m, &mut a);
                    euler(&mut sys, &a, dt);
                }
                Integrator::EulerCromer => {
                    forces.acceleration(&sys.x, &sys.m, &mut a);
                    euler_cromer(&mut sys, &a, dt);
                }
                Integrator::Rk2 => {
                    forces.acceleration(&sys.x, &sys.m, &mut a);
                    rk2(&mut sys, &forces, &a, dt);
                }
                Integrator::Rk4 => {
                    forces.acceleration(&sys.x, &sys.m, &mut a);
                    rk4(&mut sys, &forces, &a, dt);
                }
                Integrator::Leapfrog => {
                    leapfrog(&mut sys, &forces, &mut a, dt);
                }
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("{:12} step = {:9.6} s", integrator.name(), per_step);
    }
}
