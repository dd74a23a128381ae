//! Keplerian orbital elements and conversion to Cartesian state vectors
//!
//! Used to produce initial conditions: single bodies from classical
//! elements, and randomized belts of massless test particles. Angles are
//! in radians; the inclination convention is 0..pi.

use std::f64::consts::PI;

use rand::Rng;

use crate::simulation::states::NVec3;

/// Classical orbital elements of one body around a central mass.
#[derive(Debug, Clone)]
pub struct OrbitalElements {
    pub semimajor_axis: f64, // AU
    pub eccentricity: f64,
    pub inclination: f64,                 // rad
    pub argument_of_periapsis: f64,       // rad
    pub longitude_of_ascending_node: f64, // rad
    pub true_anomaly: f64,                // rad
}

/// Normalize an angle into [0, 2 pi).
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(2.0 * PI)
}

/// Solve Kepler's equation M = E - e sin E for the eccentric anomaly by
/// Newton-Raphson, then convert to true anomaly.
pub fn true_anomaly_from_mean(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = normalize_angle(mean_anomaly);
    let e = eccentricity;

    // Starting guess: M itself converges for low eccentricity
    let mut ea = if e < 0.8 { m } else { PI };
    for _ in 0..50 {
        let f = ea - e * ea.sin() - m;
        let fp = 1.0 - e * ea.cos();
        let delta = f / fp;
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }

    // tan(nu/2) = sqrt((1+e)/(1-e)) * tan(E/2)
    let half_nu = ((1.0 + e) / (1.0 - e)).sqrt() * (ea / 2.0).tan();
    2.0 * half_nu.atan()
}

/// Position and velocity of a body of mass `ms` orbiting a primary of mass
/// `mp`, from its orbital elements, relative to the primary.
#[allow(non_snake_case)]
pub fn to_cartesian(mp: f64, ms: f64, el: &OrbitalElements, G: f64) -> (NVec3, NVec3) {
    let cos_nu = el.true_anomaly.cos();
    let sin_nu = el.true_anomaly.sin();

    let cos_inc = el.inclination.cos();
    let sin_inc = el.inclination.sin();

    let cos_argp = el.argument_of_periapsis.cos();
    let sin_argp = el.argument_of_periapsis.sin();

    let cos_raan = el.longitude_of_ascending_node.cos();
    let sin_raan = el.longitude_of_ascending_node.sin();

    // e_vec: unit vector toward periapsis
    let e_vec = NVec3::new(
        cos_raan * cos_argp - sin_raan * sin_argp * cos_inc,
        sin_raan * cos_argp + cos_raan * sin_argp * cos_inc,
        sin_argp * sin_inc,
    );

    // q_vec: in-plane unit vector perpendicular to e_vec and the orbital
    // angular momentum
    let q_vec = NVec3::new(
        -cos_raan * sin_argp - sin_raan * cos_argp * cos_inc,
        -sin_raan * sin_argp + cos_raan * cos_argp * cos_inc,
        cos_argp * sin_inc,
    );

    let a = el.semimajor_axis;
    let ecc = el.eccentricity;

    let separation = a * (1.0 - ecc * ecc) / (1.0 + ecc * cos_nu);
    let position = separation * cos_nu * e_vec + separation * sin_nu * q_vec;

    let velocity_tilde = (G * (mp + ms) / (a * (1.0 - ecc * ecc))).sqrt();
    let velocity = -velocity_tilde * sin_nu * e_vec + velocity_tilde * (ecc + cos_nu) * q_vec;

    (position, velocity)
}

/// Draw `n` massless test-particle states on randomized orbits around a
/// primary of mass `mp`: semi-major axis uniform over `a_range`,
/// eccentricity in [0, ecc_max], inclination in [-inc_max, inc_max], and
/// uniform node/periapsis/anomaly angles. Deterministic for a given rng
/// state.
#[allow(non_snake_case)]
pub fn sample_belt<R: Rng>(
    rng: &mut R,
    n: usize,
    a_range: (f64, f64),
    ecc_max: f64,
    inc_max: f64,
    mp: f64,
    G: f64,
) -> Vec<(NVec3, NVec3)> {
    let mut states = Vec::with_capacity(n);
    for _ in 0..n {
        let el = OrbitalElements {
            semimajor_axis: rng.random_range(a_range.0..=a_range.1),
            eccentricity: rng.random_range(0.0..=ecc_max),
            inclination: rng.random_range(-inc_max..=inc_max),
            argument_of_periapsis: rng.random_range(0.0..=2.0 * PI),
            longitude_of_ascending_node: rng.random_range(0.0..=2.0 * PI),
            true_anomaly: rng.random_range(0.0..=2.0 * PI),
        };
        states.push(to_cartesian(mp, 0.0, &el, G));
    }
    states
}
