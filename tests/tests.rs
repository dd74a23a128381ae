use gravsim::elements::{sample_belt, to_cartesian, true_anomaly_from_mean, OrbitalElements};
use gravsim::presets;
use gravsim::{
    total_energy, Acceleration, Error, Integrator, NewtonianGravity, NewtonianGravityMassless,
    NVec3, Phase, Simulator, System, G_AU_DAY_MSUN as G,
};
use gravsim::{BeltConfig, BodyConfig, EngineConfig, ParametersConfig, Scenario, ScenarioConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;

use std::f64::consts::PI;

/// Build a simple 2-body system separated along the x-axis, at rest
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let mut sys = System::new();
    sys.add_body("a", NVec3::new(-dist / 2.0, 0.0, 0.0), NVec3::zeros(), m1)
        .unwrap();
    sys.add_body("b", NVec3::new(dist / 2.0, 0.0, 0.0), NVec3::zeros(), m2)
        .unwrap();
    sys
}

/// Sun plus a planet on a circular 1 AU orbit, in the barycentric frame.
/// Returns the system and the orbital period in days.
pub fn circular_orbit_system() -> (System, f64) {
    let m_sun = 1.0;
    let m_planet = 3.00349e-6;
    let a = 1.0;

    let mut sys = System::new();
    sys.add_body("Sun", NVec3::zeros(), NVec3::zeros(), m_sun)
        .unwrap();
    let v_circ = (G * (m_sun + m_planet) / a).sqrt();
    sys.add_body(
        "Planet",
        NVec3::new(a, 0.0, 0.0),
        NVec3::new(0.0, v_circ, 0.0),
        m_planet,
    )
    .unwrap();
    sys.center_of_mass_correction();

    let period = 2.0 * PI * (a * a * a / (G * (m_sun + m_planet))).sqrt();
    (sys, period)
}

/// Evaluate a kernel over a system into a fresh buffer
pub fn accels(kernel: &dyn Acceleration, sys: &System) -> Vec<NVec3> {
    let mut out = vec![NVec3::zeros(); sys.len()];
    kernel.acceleration(&sys.x, &sys.m, &mut out);
    out
}

/// Simulator over the direct kernel with the default unit system
pub fn make_sim(system: System, integrator: Integrator) -> Simulator {
    Simulator::new(system, integrator, Box::new(NewtonianGravity { G }), G).unwrap()
}

// ==================================================================================
// Gravity kernel tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let acc = accels(&NewtonianGravity { G }, &sys);

    let net = acc[0] * sys.m[0] + acc[1] * sys.m[1];

    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let acc = accels(&NewtonianGravity { G }, &sys);

    let dx = sys.x[1] - sys.x[0];

    assert!(dx.norm() > 0.0);
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let kernel = NewtonianGravity { G };

    let acc_r = accels(&kernel, &sys_r);
    let acc_2r = accels(&kernel, &sys_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_single_body_feels_nothing() {
    let mut sys = System::new();
    sys.add_body("lone", NVec3::new(1.0, 2.0, 3.0), NVec3::new(0.1, 0.0, 0.0), 1.0)
        .unwrap();

    let acc = accels(&NewtonianGravity { G }, &sys);

    assert_eq!(acc[0], NVec3::zeros());
}

#[test]
fn gravity_massless_path_matches_direct_kernel() {
    // A couple of massive sources plus test particles scattered around
    let mut sys = System::new();
    sys.add_body("Sun", NVec3::zeros(), NVec3::zeros(), 1.0).unwrap();
    sys.add_body(
        "Jupiter",
        NVec3::new(5.2, 0.0, 0.0),
        NVec3::new(0.0, 7.5e-3, 0.0),
        9.54792e-4,
    )
    .unwrap();
    sys.add_body("p1", NVec3::new(2.0, 0.5, 0.1), NVec3::zeros(), 0.0).unwrap();
    sys.add_body("p2", NVec3::new(-1.3, 2.2, -0.4), NVec3::zeros(), 0.0).unwrap();
    sys.add_body("p3", NVec3::new(0.4, -3.0, 0.9), NVec3::zeros(), 0.0).unwrap();

    let direct = accels(&NewtonianGravity { G }, &sys);
    let fast = accels(&NewtonianGravityMassless { G }, &sys);

    for i in 0..sys.len() {
        let diff = (direct[i] - fast[i]).norm();
        assert!(
            diff < 1e-14,
            "Kernel mismatch on body {}: direct {:?}, massless {:?}",
            i,
            direct[i],
            fast[i]
        );
    }
}

#[test]
fn gravity_coincident_bodies_go_non_finite() {
    let mut sys = System::new();
    sys.add_body("a", NVec3::zeros(), NVec3::zeros(), 1.0).unwrap();
    sys.add_body("b", NVec3::zeros(), NVec3::zeros(), 1.0).unwrap();

    let mut sim = make_sim(sys, Integrator::Euler);
    sim.step(0.1).unwrap();

    // The division by zero must propagate, not be masked
    assert!(!sim.energy().is_finite(), "Coincident bodies should blow up");
    assert!(!sim.system().is_finite());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn all_integrators_keep_uniform_motion_without_forces() {
    for integrator in Integrator::ALL {
        let mut sys = System::new();
        sys.add_body(
            "lone",
            NVec3::new(1.0, -2.0, 0.5),
            NVec3::new(0.3, 0.1, -0.2),
            1.0,
        )
        .unwrap();
        let x0 = sys.x[0];
        let v0 = sys.v[0];

        let mut sim = make_sim(sys, integrator);
        let dt = 0.7;
        let steps = 10;
        for _ in 0..steps {
            sim.step(dt).unwrap();
        }

        let expected = x0 + v0 * (dt * steps as f64);
        assert!(
            (sim.system().x[0] - expected).norm() < 1e-12,
            "{} drifted from the straight line",
            integrator
        );
        assert!(
            (sim.system().v[0] - v0).norm() < 1e-15,
            "{} changed velocity with no forces",
            integrator
        );
    }
}

#[test]
fn euler_single_step_matches_update_rule() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let a = accels(&NewtonianGravity { G }, &sys);
    let x0 = sys.x.clone();
    let v0 = sys.v.clone();

    let mut sim = make_sim(sys, Integrator::Euler);
    let dt = 0.25;
    sim.step(dt).unwrap();

    // x' = x + v dt (old v), v' = v + a dt
    for i in 0..2 {
        assert!((sim.system().x[i] - (x0[i] + v0[i] * dt)).norm() < 1e-15);
        assert!((sim.system().v[i] - (v0[i] + a[i] * dt)).norm() < 1e-15);
    }
}

#[test]
fn euler_cromer_uses_updated_velocity_for_position() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let a = accels(&NewtonianGravity { G }, &sys);
    let x0 = sys.x.clone();
    let v0 = sys.v.clone();

    let mut sim = make_sim(sys, Integrator::EulerCromer);
    let dt = 0.25;
    sim.step(dt).unwrap();

    for i in 0..2 {
        let v1 = v0[i] + a[i] * dt;
        assert!((sim.system().v[i] - v1).norm() < 1e-15);
        assert!((sim.system().x[i] - (x0[i] + v1 * dt)).norm() < 1e-15);
    }
}

#[test]
fn leapfrog_closes_a_kepler_orbit() {
    let (sys, period) = circular_orbit_system();
    let x_start = sys.x[1];

    let steps = (period / 0.5).round() as usize;
    let dt = period / steps as f64;

    let mut sim = make_sim(sys, Integrator::Leapfrog);
    for _ in 0..steps {
        sim.step(dt).unwrap();
    }

    let closure_error = (sim.system().x[1] - x_start).norm();
    assert!(
        closure_error < 0.01,
        "Planet missed its starting point by {} AU after one period",
        closure_error
    );
}

#[test]
fn rk4_closes_a_kepler_orbit() {
    let (sys, period) = circular_orbit_system();
    let x_start = sys.x[1];

    let steps = (period / 1.0).round() as usize;
    let dt = period / steps as f64;

    let mut sim = make_sim(sys, Integrator::Rk4);
    for _ in 0..steps {
        sim.step(dt).unwrap();
    }

    let closure_error = (sim.system().x[1] - x_start).norm();
    assert!(
        closure_error < 1e-3,
        "rk4 closure error too large: {} AU",
        closure_error
    );
}

#[test]
fn symplectic_schemes_beat_euler_on_energy_drift() {
    let horizon_orbits = 3.0;
    let dt = 0.5;

    let drift_of = |integrator: Integrator| {
        let (sys, period) = circular_orbit_system();
        let mut sim = make_sim(sys, integrator);
        let solution = sim
            .launch(horizon_orbits * period, dt, 20)
            .unwrap();
        solution.max_energy_drift()
    };

    let euler_drift = drift_of(Integrator::Euler);
    let leapfrog_drift = drift_of(Integrator::Leapfrog);
    let rk4_drift = drift_of(Integrator::Rk4);

    // Leapfrog is symplectic: bounded drift over long horizons
    assert!(
        leapfrog_drift < 1e-3,
        "leapfrog drift {} exceeds bound",
        leapfrog_drift
    );
    assert!(rk4_drift < 1e-4, "rk4 drift {} exceeds bound", rk4_drift);
    // Plain Euler drifts without bound and must lose clearly
    assert!(
        euler_drift > 1e-2,
        "euler drift {} suspiciously small",
        euler_drift
    );
    assert!(euler_drift > 10.0 * leapfrog_drift);
}

#[test]
fn step_is_deterministic() {
    let (sys, _) = circular_orbit_system();

    let mut sim1 = make_sim(sys.clone(), Integrator::Rk4);
    let mut sim2 = make_sim(sys, Integrator::Rk4);
    for _ in 0..100 {
        sim1.step(0.5).unwrap();
        sim2.step(0.5).unwrap();
    }

    // Bit-for-bit identical, not merely close
    assert_eq!(sim1.system().x, sim2.system().x);
    assert_eq!(sim1.system().v, sim2.system().v);
    assert_eq!(sim1.energy(), sim2.energy());
}

// ==================================================================================
// Integrator selection and seeding
// ==================================================================================

#[test]
fn switching_integrators_passes_through_uninitialized() {
    let (sys, _) = circular_orbit_system();
    let mut sim = make_sim(sys, Integrator::Leapfrog);

    assert_eq!(sim.phase(), Phase::Uninitialized);
    sim.step(0.5).unwrap();
    assert_eq!(sim.phase(), Phase::Seeded);

    sim.select_integrator(Integrator::Rk4);
    assert_eq!(sim.phase(), Phase::Uninitialized);
    assert_eq!(sim.integrator(), Integrator::Rk4);

    sim.step(0.5).unwrap();
    assert_eq!(sim.phase(), Phase::Seeded);
}

#[test]
fn switching_reseeds_instead_of_reusing_stale_acceleration() {
    // Run one simulator under euler, then switch it to leapfrog
    let (sys, _) = circular_orbit_system();
    let mut switched = make_sim(sys, Integrator::Euler);
    for _ in 0..3 {
        switched.step(0.5).unwrap();
    }
    let state_at_switch = switched.system().clone();
    switched.select_integrator(Integrator::Leapfrog);
    switched.step(0.5).unwrap();

    // A fresh leapfrog simulator from the same state must agree exactly:
    // the switch re-seeded rather than reusing euler's buffer
    let mut fresh = make_sim(state_at_switch, Integrator::Leapfrog);
    fresh.step(0.5).unwrap();

    assert_eq!(switched.system().x, fresh.system().x);
    assert_eq!(switched.system().v, fresh.system().v);
}

#[test]
fn set_integrator_rejects_unknown_names() {
    let (sys, _) = circular_orbit_system();
    let mut sim = make_sim(sys, Integrator::Leapfrog);

    let err = sim.set_integrator("rk3").unwrap_err();
    assert!(matches!(err, Error::UnknownIntegrator { .. }));
    // Selection untouched
    assert_eq!(sim.integrator(), Integrator::Leapfrog);

    sim.set_integrator("euler_cromer").unwrap();
    assert_eq!(sim.integrator(), Integrator::EulerCromer);
}

// ==================================================================================
// Energy monitor tests
// ==================================================================================

#[test]
fn total_energy_matches_hand_computation() {
    let mut sys = two_body_system(1.0, 2.0, 3.0);
    sys.v[0] = NVec3::new(0.1, 0.0, 0.0);
    sys.v[1] = NVec3::new(-0.2, 0.0, 0.0);

    // Kinetic plus the ordered-pair potential sum (every pair twice)
    let expected = 0.5 * 2.0 * 0.01 + 0.5 * 3.0 * 0.04 - 2.0 * G * 2.0 * 3.0 / 1.0;
    let e = total_energy(&sys.x, &sys.v, &sys.m, G);

    assert!((e - expected).abs() < 1e-15, "E = {}, expected {}", e, expected);
}

#[test]
fn energy_is_recorded_every_step() {
    let (sys, _) = circular_orbit_system();
    let e0 = total_energy(&sys.x, &sys.v, &sys.m, G);

    let mut sim = make_sim(sys, Integrator::Leapfrog);
    assert_eq!(sim.energy(), e0);
    assert!(e0 < 0.0, "Bound orbit should have negative total energy");

    sim.step(0.5).unwrap();
    let e1 = sim.energy();
    assert!(e1.is_finite());
    assert!((e1 - e0).abs() / e0.abs() < 1e-4);
}

// ==================================================================================
// Orchestration tests
// ==================================================================================

#[test]
fn step_rejects_bad_timesteps() {
    let (sys, _) = circular_orbit_system();
    let mut sim = make_sim(sys, Integrator::Leapfrog);
    let x_before = sim.system().x.clone();

    for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = sim.step(dt).unwrap_err();
        assert!(matches!(err, Error::NonPositiveTimestep { .. }));
    }

    // State untouched by the rejected calls
    assert_eq!(sim.system().t, 0.0);
    assert_eq!(sim.system().x, x_before);
}

#[test]
fn simulator_rejects_negative_mass() {
    let mut sys = System::new();
    sys.x.push(NVec3::zeros());
    sys.v.push(NVec3::zeros());
    sys.m.push(-1.0);
    sys.names.push("bad".to_string());

    let err = Simulator::new(sys, Integrator::Euler, Box::new(NewtonianGravity { G }), G)
        .err()
        .unwrap();
    assert!(matches!(err, Error::NegativeMass { .. }));
}

#[test]
fn launch_stores_snapshots_at_the_requested_stride() {
    let (sys, _) = circular_orbit_system();
    let mut sim = make_sim(sys, Integrator::Leapfrog);

    let solution = sim.launch(10.0, 1.0, 2).unwrap();

    // Initial state plus every 2nd of 10 steps
    assert_eq!(solution.len(), 6);
    let times: Vec<f64> = solution.snapshots.iter().map(|s| s.t).collect();
    for (stored, expected) in times.iter().zip([0.0, 2.0, 4.0, 6.0, 8.0, 10.0]) {
        assert!((stored - expected).abs() < 1e-12);
    }
    assert_eq!(solution.snapshots[0].x.len(), 2);
}

#[test]
fn launch_validates_its_arguments() {
    let (sys, _) = circular_orbit_system();
    let mut sim = make_sim(sys, Integrator::Leapfrog);

    assert!(matches!(
        sim.launch(10.0, 0.0, 1).unwrap_err(),
        Error::NonPositiveTimestep { .. }
    ));
    assert!(matches!(
        sim.launch(-5.0, 1.0, 1).unwrap_err(),
        Error::InvalidParameter { name: "t_end", .. }
    ));
    assert!(matches!(
        sim.launch(10.0, 1.0, 0).unwrap_err(),
        Error::InvalidParameter { name: "store_every_n", .. }
    ));
}

// ==================================================================================
// System state tests
// ==================================================================================

#[test]
fn remove_keeps_parallel_containers_aligned() {
    let mut sys = System::new();
    sys.add_body("a", NVec3::new(1.0, 0.0, 0.0), NVec3::zeros(), 1.0).unwrap();
    sys.add_body("b", NVec3::new(2.0, 0.0, 0.0), NVec3::zeros(), 2.0).unwrap();
    sys.add_body("c", NVec3::new(3.0, 0.0, 0.0), NVec3::zeros(), 3.0).unwrap();

    sys.remove("b").unwrap();

    assert_eq!(sys.len(), 2);
    assert_eq!(sys.names, vec!["a", "c"]);
    assert_eq!(sys.m, vec![1.0, 3.0]);
    assert_eq!(sys.x[1], NVec3::new(3.0, 0.0, 0.0));

    let err = sys.remove("b").unwrap_err();
    assert!(matches!(err, Error::UnknownBody { .. }));
}

#[test]
fn add_body_rejects_negative_mass() {
    let mut sys = System::new();
    let err = sys
        .add_body("bad", NVec3::zeros(), NVec3::zeros(), -0.5)
        .unwrap_err();
    assert!(matches!(err, Error::NegativeMass { .. }));
    assert!(sys.is_empty());
}

#[test]
fn center_of_mass_correction_zeroes_the_barycenter() {
    let mut sys = System::new();
    sys.add_body("a", NVec3::zeros(), NVec3::new(1.0, 0.0, 0.0), 1.0).unwrap();
    sys.add_body("b", NVec3::new(4.0, 0.0, 0.0), NVec3::zeros(), 3.0).unwrap();

    sys.center_of_mass_correction();

    let mut x_com = NVec3::zeros();
    let mut p = NVec3::zeros();
    for i in 0..sys.len() {
        x_com += sys.m[i] * sys.x[i];
        p += sys.m[i] * sys.v[i];
    }
    assert!(x_com.norm() < 1e-12, "Center of mass not at origin: {:?}", x_com);
    assert!(p.norm() < 1e-12, "Net momentum not zero: {:?}", p);
}

#[test]
fn massive_count_ignores_test_particles() {
    let mut sys = System::new();
    sys.add_body("a", NVec3::zeros(), NVec3::zeros(), 1.0).unwrap();
    sys.add_body("p", NVec3::new(1.0, 0.0, 0.0), NVec3::zeros(), 0.0).unwrap();
    sys.add_body("q", NVec3::new(2.0, 0.0, 0.0), NVec3::zeros(), 0.0).unwrap();

    assert_eq!(sys.massive_count(), 1);
}

// ==================================================================================
// Orbital elements and presets
// ==================================================================================

#[test]
fn circular_elements_give_circular_state() {
    let el = OrbitalElements {
        semimajor_axis: 2.0,
        eccentricity: 0.0,
        inclination: 0.0,
        argument_of_periapsis: 0.0,
        longitude_of_ascending_node: 0.0,
        true_anomaly: 0.0,
    };
    let (x, v) = to_cartesian(1.0, 0.0, &el, G);

    assert!((x.norm() - 2.0).abs() < 1e-12);
    assert!((v.norm() - (G / 2.0).sqrt()).abs() < 1e-12);
    // Velocity perpendicular to radius on a circle
    assert!(x.dot(&v).abs() < 1e-12);
}

#[test]
fn kepler_solver_handles_easy_cases() {
    // Zero eccentricity: true anomaly equals mean anomaly
    let nu = true_anomaly_from_mean(1.234, 0.0);
    assert!((nu - 1.234).abs() < 1e-10);

    // Periapsis stays periapsis at any eccentricity
    let nu = true_anomaly_from_mean(0.0, 0.4);
    assert!(nu.abs() < 1e-10);
}

#[test]
fn belt_sampling_is_deterministic_and_in_range() {
    let draw = || {
        let mut rng = StdRng::seed_from_u64(7);
        sample_belt(&mut rng, 100, (2.1, 3.2), 0.2, 0.5, 1.0, G)
    };

    let belt1 = draw();
    let belt2 = draw();
    assert_eq!(belt1, belt2, "Same seed must reproduce the same belt");
    assert_eq!(belt1.len(), 100);

    for (x, _) in &belt1 {
        let r = x.norm();
        // r = a(1 - e^2)/(1 + e cos nu) stays within a(1 +/- e)
        assert!(r > 2.1 * 0.8 - 1e-9 && r < 3.2 * 1.2 + 1e-9, "r = {} out of range", r);
    }
}

#[test]
fn solar_system_preset_is_well_formed() {
    let sys = presets::load("solar_system").unwrap();

    assert_eq!(sys.len(), 9);
    assert_eq!(sys.names[0], "Sun");
    assert_eq!(sys.m[0], 1.0);
    assert_eq!(sys.massive_count(), 9);

    // Earth sits near 1 AU from the Sun
    let earth = sys.names.iter().position(|n| n == "Earth").unwrap();
    let r = (sys.x[earth] - sys.x[0]).norm();
    assert!((0.95..1.05).contains(&r), "Earth at {} AU", r);

    let err = presets::load("alpha_centauri").unwrap_err();
    assert!(matches!(err, Error::UnknownPreset { .. }));
}

// ==================================================================================
// Configuration and scenario tests
// ==================================================================================

fn base_config() -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            integrator: Integrator::Leapfrog,
            massless: false,
        },
        parameters: ParametersConfig {
            t_end: 10.0,
            dt: 0.5,
            store_every_n: 1,
            seed: 42,
            G,
        },
        preset: Some("sun_earth".to_string()),
        bodies: Vec::new(),
        belt: None,
        com_correction: false,
    }
}

#[test]
fn scenario_yaml_round_trip() {
    let yaml = r#"
engine:
  integrator: "rk4"
  massless: true

parameters:
  t_end: 365.25
  dt: 0.5
  store_every_n: 10

preset: "solar_system"

belt:
  n: 50

com_correction: true
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.engine.integrator, Integrator::Rk4);
    assert!(cfg.engine.massless);
    assert_eq!(cfg.parameters.store_every_n, 10);
    // Defaults fill in the omitted fields
    assert_eq!(cfg.parameters.seed, 42);
    assert!((cfg.parameters.G - G).abs() < 1e-18);
    let belt = cfg.belt.unwrap();
    assert_eq!(belt.n, 50);
    assert!((belt.a_min - 2.1).abs() < 1e-12);
}

#[test]
fn unknown_integrator_name_fails_to_parse() {
    let yaml = r#"
engine:
  integrator: "rk3"
parameters:
  t_end: 1.0
  dt: 0.5
"#;
    assert!(serde_yaml::from_str::<ScenarioConfig>(yaml).is_err());
}

#[test]
fn validate_catches_bad_values() {
    let mut cfg = base_config();
    cfg.parameters.dt = 0.0;
    assert!(matches!(
        cfg.validate().unwrap_err(),
        Error::NonPositiveTimestep { .. }
    ));

    let mut cfg = base_config();
    cfg.bodies.push(BodyConfig {
        name: Some("bad".to_string()),
        x: vec![0.0, 0.0, 0.0],
        v: vec![0.0, 0.0, 0.0],
        m: -1.0,
    });
    assert!(matches!(cfg.validate().unwrap_err(), Error::NegativeMass { .. }));

    let mut cfg = base_config();
    cfg.bodies.push(BodyConfig {
        name: None,
        x: vec![0.0, 0.0],
        v: vec![0.0, 0.0, 0.0],
        m: 1.0,
    });
    assert!(matches!(
        cfg.validate().unwrap_err(),
        Error::InvalidParameter { name: "bodies", .. }
    ));

    let mut cfg = base_config();
    cfg.belt = Some(BeltConfig {
        n: 10,
        a_min: 2.1,
        a_max: 3.2,
        ecc_max: 1.5,
        inc_max: 0.5,
    });
    assert!(matches!(
        cfg.validate().unwrap_err(),
        Error::InvalidParameter { name: "belt", .. }
    ));
}

#[test]
fn unknown_preset_is_a_configuration_error() {
    let mut cfg = base_config();
    cfg.preset = Some("nibiru".to_string());

    let err = Scenario::build_scenario(cfg).err().unwrap();
    assert!(matches!(err, Error::UnknownPreset { .. }));
}

#[test]
fn belt_scenario_builds_and_runs() {
    let mut cfg = base_config();
    cfg.engine.integrator = Integrator::Rk4;
    cfg.engine.massless = true;
    cfg.parameters.t_end = 5.0;
    cfg.parameters.dt = 1.0;
    cfg.belt = Some(BeltConfig {
        n: 50,
        a_min: 2.1,
        a_max: 3.2,
        ecc_max: 0.2,
        inc_max: 0.5,
    });
    cfg.com_correction = true;

    let mut scenario = Scenario::build_scenario(cfg).unwrap();
    assert_eq!(scenario.simulator.system().len(), 52);
    assert_eq!(scenario.simulator.system().massive_count(), 2);

    let solution = scenario.run().unwrap();
    assert!(scenario.simulator.system().is_finite());
    assert!(scenario.simulator.energy().is_finite());
    assert_eq!(solution.last().unwrap().x.len(), 52);
}

#[test]
fn belt_scenarios_are_reproducible_across_builds() {
    let make = || {
        let mut cfg = base_config();
        cfg.belt = Some(BeltConfig {
            n: 20,
            a_min: 2.1,
            a_max: 3.2,
            ecc_max: 0.2,
            inc_max: 0.5,
        });
        Scenario::build_scenario(cfg).unwrap()
    };

    let s1 = make();
    let s2 = make();
    assert_eq!(s1.simulator.system().x, s2.simulator.system().x);
    assert_eq!(s1.simulator.system().v, s2.simulator.system().v);
}
