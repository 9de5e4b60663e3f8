//! High-level runtime engine settings and the headless drive loop
//!
//! The engine stands in for the external render loop: it calls the
//! integrator once per tick and emits center-of-mass / momentum
//! diagnostics at a configurable cadence.

use crate::simulation::integrator::euler_tick;
use crate::simulation::scenario::Scenario;

#[derive(Debug, Clone)]
pub struct Engine {
    pub ticks: u64, // number of ticks to run in headless mode
    pub log_every: u64, // diagnostic log cadence in ticks (0 = silent)
}

/// Drive the scenario for its configured number of ticks.
pub fn run(scenario: &mut Scenario) {
    let ticks = scenario.engine.ticks;
    let log_every = scenario.engine.log_every;

    log::info!(
        "running {} ticks over {} bodies",
        ticks,
        scenario.system.bodies.len()
    );

    for i in 0..ticks {
        euler_tick(&mut scenario.system, &scenario.forces, &scenario.parameters);

        if log_every > 0 && (i + 1) % log_every == 0 {
            let com = scenario.system.center_of_mass();
            let p = scenario.system.momentum();
            log::info!(
                "tick {:>6}: com = ({:.3}, {:.3}, {:.3}), |p| = {:.3e}",
                scenario.system.tick,
                com.x,
                com.y,
                com.z,
                p.norm()
            );
        }
    }
}
