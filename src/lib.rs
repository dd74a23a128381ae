pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{System, NVec3};
pub use simulation::params::{years_to_days, Parameters, DAYS_PER_YEAR, G_AU_DAY_MSUN};
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, NewtonianGravity, NewtonianGravityMassless};
pub use simulation::energy::{kinetic_energy, potential_energy, total_energy};
pub use simulation::integrator::Integrator;
pub use simulation::simulator::{Phase, Simulator, Snapshot, Solution};
pub use simulation::scenario::Scenario;
pub use simulation::{elements, presets};

pub use configuration::config::{
    BeltConfig, BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig,
};

pub use error::{Error, Result};

pub use benchmark::benchmark::{bench_gravity, bench_step};
