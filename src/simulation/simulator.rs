//! Step orchestration for the N-body engine
//!
//! [`Simulator`] owns the system state, the acceleration kernel, the active
//! integrator selection, and the carried acceleration buffer. Exactly one
//! integrator executes per `step` call, body indexing is preserved across
//! the call, and the energy diagnostic is recorded after every completed
//! step.
//!
//! Seeding is an explicit state machine, `Uninitialized -> Seeded`: the
//! first step performs one kernel evaluation to seed the chosen scheme, and
//! switching integrators passes back through `Uninitialized` so a stale
//! acceleration can never leak across schemes.

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::simulation::energy::total_energy;
use crate::simulation::forces::Acceleration;
use crate::simulation::integrator::{euler, euler_cromer, leapfrog, rk2, rk4, Integrator};
use crate::simulation::states::{NVec3, System};

/// Seeding state of the acceleration buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Seeded,
}

/// One stored state of a batched run.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub t: f64,
    pub x: Vec<NVec3>,
    pub v: Vec<NVec3>,
    pub energy: f64,
}

/// Snapshots produced by [`Simulator::launch`] at the requested stride.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    pub snapshots: Vec<Snapshot>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Largest relative energy drift across the stored snapshots,
    /// `max |E(t) - E(0)| / |E(0)|`. Snapshots with NaN energy are skipped
    /// by the max; check `Simulator::energy` for degeneracy instead.
    pub fn max_energy_drift(&self) -> f64 {
        let Some(first) = self.snapshots.first() else {
            return 0.0;
        };
        if first.energy == 0.0 {
            return 0.0;
        }
        self.snapshots
            .iter()
            .map(|s| (s.energy - first.energy).abs() / first.energy.abs())
            .fold(0.0, f64::max)
    }
}

#[allow(non_snake_case)]
pub struct Simulator {
    system: System,
    forces: Box<dyn Acceleration + Send + Sync>,
    integrator: Integrator,
    accel: Vec<NVec3>, // carried acceleration buffer, valid when phase == Seeded
    phase: Phase,
    energy: f64,
    G: f64,
}

impl Simulator {
    /// Build a simulator over an initial system.
    /// Masses are validated eagerly; negative mass is a configuration error.
    #[allow(non_snake_case)]
    pub fn new(
        system: System,
        integrator: Integrator,
        forces: Box<dyn Acceleration + Send + Sync>,
        G: f64,
    ) -> Result<Self> {
        for i in 0..system.len() {
            if system.m[i] < 0.0 || !system.m[i].is_finite() {
                return Err(Error::NegativeMass {
                    name: system.names[i].clone(),
                    mass: system.m[i],
                });
            }
        }

        let energy = total_energy(&system.x, &system.v, &system.m, G);
        Ok(Self {
            system,
            forces,
            integrator,
            accel: Vec::new(),
            phase: Phase::Uninitialized,
            energy,
            G,
        })
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Mutable access for collaborators between steps. Changing the body
    /// count invalidates the carried acceleration; the next step re-seeds.
    pub fn system_mut(&mut self) -> &mut System {
        &mut self.system
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Energy recorded after the most recent step (the initial state's
    /// energy before any step). Non-finite once a degenerate configuration
    /// has been stepped through.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Select the active integrator. Always passes back through
    /// `Uninitialized`, so the next step performs a fresh kernel
    /// evaluation instead of reusing another scheme's acceleration.
    pub fn select_integrator(&mut self, integrator: Integrator) {
        self.integrator = integrator;
        self.phase = Phase::Uninitialized;
    }

    /// String-facing selector; unknown names are a configuration error.
    pub fn set_integrator(&mut self, name: &str) -> Result<()> {
        self.select_integrator(name.parse()?);
        Ok(())
    }

    /// Advance the system by one fixed timestep under the active
    /// integrator, then record the energy diagnostic.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        // NaN fails this comparison too
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(Error::NonPositiveTimestep { dt });
        }

        // A body-count change between steps leaves the carried buffer
        // inconsistent with the state arrays; force a re-seed.
        if self.accel.len() != self.system.len() {
            self.phase = Phase::Uninitialized;
        }

        // The uninitialized -> seeded transition performs the one kernel
        // evaluation that seeds the chosen scheme.
        let just_seeded = self.phase == Phase::Uninitialized;
        if just_seeded {
            self.accel = vec![NVec3::zeros(); self.system.len()];
            self.refresh_accel();
            self.phase = Phase::Seeded;
        }

        match self.integrator {
            Integrator::Euler => {
                if !just_seeded {
                    self.refresh_accel();
                }
                euler(&mut self.system, &self.accel, dt);
            }
            Integrator::EulerCromer => {
                if !just_seeded {
                    self.refresh_accel();
                }
                euler_cromer(&mut self.system, &self.accel, dt);
            }
            Integrator::Rk2 => {
                if !just_seeded {
                    self.refresh_accel();
                }
                rk2(&mut self.system, &*self.forces, &self.accel, dt);
            }
            Integrator::Rk4 => {
                if !just_seeded {
                    self.refresh_accel();
                }
                rk4(&mut self.system, &*self.forces, &self.accel, dt);
            }
            Integrator::Leapfrog => {
                // Consumes the carried a0 and leaves a1 in the buffer
                leapfrog(&mut self.system, &*self.forces, &mut self.accel, dt);
            }
        }

        self.system.t += dt;

        let was_finite = self.energy.is_finite();
        self.energy = total_energy(&self.system.x, &self.system.v, &self.system.m, self.G);
        if was_finite && !self.energy.is_finite() {
            warn!(
                "non-finite energy at t = {}; coincident bodies or runaway step",
                self.system.t
            );
        }

        Ok(())
    }

    /// Batched-run mode: advance for `t_end` in fixed steps of `dt`,
    /// storing a snapshot of (time, positions, velocities, energy) every
    /// `store_every_n` steps. The initial state is always stored. The step
    /// count is `ceil(t_end / dt)`, so the final step may overshoot
    /// `t_end` by less than one dt.
    pub fn launch(&mut self, t_end: f64, dt: f64, store_every_n: usize) -> Result<Solution> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(Error::NonPositiveTimestep { dt });
        }
        if !(t_end >= 0.0 && t_end.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "t_end",
                message: format!("must be non-negative and finite, got {t_end}"),
            });
        }
        if store_every_n == 0 {
            return Err(Error::InvalidParameter {
                name: "store_every_n",
                message: "must be at least 1".to_string(),
            });
        }

        let steps = (t_end / dt).ceil() as usize;
        info!(
            "launching {} bodies ({} massive) for {} steps of dt = {} under {}",
            self.system.len(),
            self.system.massive_count(),
            steps,
            dt,
            self.integrator
        );

        let mut solution = Solution::default();
        solution.snapshots.push(self.snapshot());

        for count in 1..=steps {
            self.step(dt)?;
            if count % store_every_n == 0 {
                solution.snapshots.push(self.snapshot());
                debug!("snapshot at t = {}, E = {}", self.system.t, self.energy);
            }
        }

        Ok(solution)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            t: self.system.t,
            x: self.system.x.clone(),
            v: self.system.v.clone(),
            energy: self.energy,
        }
    }

    /// Recompute the buffer at the current positions, for the schemes that
    /// take the step-start acceleration as input.
    fn refresh_accel(&mut self) {
        self.forces
            .acceleration(&self.system.x, &self.system.m, &mut self.accel);
    }
}
