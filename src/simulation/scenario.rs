//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - a ready-to-step `Simulator` with the system state at t = 0 and the
//!   selected acceleration kernel
//!
//! The system is assembled in order: named preset (if any), then explicit
//! bodies, then the sampled test-particle belt, then the optional
//! barycentric correction.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::elements::sample_belt;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{Acceleration, NewtonianGravity, NewtonianGravityMassless};
use crate::simulation::params::Parameters;
use crate::simulation::presets;
use crate::simulation::simulator::{Simulator, Solution};
use crate::simulation::states::{NVec3, System};

/// Runtime bundle for one configured simulation run.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub simulator: Simulator,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            store_every_n: p_cfg.store_every_n,
            seed: p_cfg.seed,
            G: p_cfg.G,
        };

        // Base system: named preset or empty
        let mut system = match &cfg.preset {
            Some(name) => presets::load(name)?,
            None => System::new(),
        };

        // Explicit bodies appended after the preset
        for body in &cfg.bodies {
            let name = body
                .name
                .clone()
                .unwrap_or_else(|| format!("body_{}", system.len()));
            system.add_body(
                name,
                NVec3::new(body.x[0], body.x[1], body.x[2]),
                NVec3::new(body.v[0], body.v[1], body.v[2]),
                body.m,
            )?;
        }

        // Test-particle belt orbiting the total massive content
        if let Some(belt) = &cfg.belt {
            let central_mass: f64 = system.m.iter().sum();
            let mut rng = StdRng::seed_from_u64(parameters.seed);
            let states = sample_belt(
                &mut rng,
                belt.n,
                (belt.a_min, belt.a_max),
                belt.ecc_max,
                belt.inc_max,
                central_mass,
                parameters.G,
            );
            for (x, v) in states {
                system.add_body(format!("belt_{}", system.len()), x, v, 0.0)?;
            }
        }

        if cfg.com_correction {
            system.center_of_mass_correction();
        }

        // Kernel: massive-sources fast path or the general all-pairs sum
        let forces: Box<dyn Acceleration + Send + Sync> = if cfg.engine.massless {
            Box::new(NewtonianGravityMassless { G: parameters.G })
        } else {
            Box::new(NewtonianGravity { G: parameters.G })
        };

        let engine = Engine {
            integrator: cfg.engine.integrator,
            massless: cfg.engine.massless,
        };

        info!(
            "scenario: {} bodies ({} massive), {} kernel, {} integrator",
            system.len(),
            system.massive_count(),
            if engine.massless { "massless" } else { "direct" },
            engine.integrator
        );

        let simulator = Simulator::new(system, engine.integrator, forces, parameters.G)?;

        Ok(Self {
            engine,
            parameters,
            simulator,
        })
    }

    /// Run the configured batch and return the stored snapshots.
    pub fn run(&mut self) -> Result<Solution> {
        self.simulator.launch(
            self.parameters.t_end,
            self.parameters.dt,
            self.parameters.store_every_n,
        )
    }
}
