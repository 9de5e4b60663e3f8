//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at tick 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is owned by the caller and stepped by the engine loop.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// A fully-initialized simulation scenario.
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, current system state and the set of active
/// force laws. It is read and stepped by the engine, diagnostics and any
/// external visualization layer.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            unit_m: p_cfg.unit_m,
            vel_step: p_cfg.vel_step,
            pos_step: p_cfg.pos_step,
            size_ratio: p_cfg.size_ratio,
            damping: p_cfg.damping,
            init_mass: p_cfg.init_mass,
            density: p_cfg.density,
            growth_rate: p_cfg.growth_rate,
            growth_step: p_cfg.growth_step,
            nudge_frac: p_cfg.nudge_frac,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`. The radius is always
        // derived from mass and density, never read from the file.
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                    NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                    bc.m,
                    bc.density,
                    parameters.size_ratio,
                )
            })
            .collect();

        // Initial system state: bodies at tick 0, unpaused
        let system = System {
            bodies,
            tick: 0,
            paused: false,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            ticks: e_cfg.ticks,
            log_every: e_cfg.log_every.unwrap_or(0),
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            unit_m: parameters.unit_m,
        });

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }
}
