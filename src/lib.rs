pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3, derived_radius};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::collision::collision_damping;
pub use simulation::integrator::euler_tick;
pub use simulation::engine::{Engine, run};
pub use simulation::scenario::Scenario;
pub use simulation::spacetime::{grid_vertices, warp_grid};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_euler_curve};
