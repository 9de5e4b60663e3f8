//! Core state types for the N-body simulation.
//!
//! Defines the body and system structs:
//! - `Body` (position, velocity, mass, density, derived radius, placement flags)
//! - `System` holding the list of bodies, the tick counter and the pause flag
//!
//! The system also carries the interactive placement lifecycle: a body is
//! spawned in the `initializing` state, grows its mass and gets nudged into
//! place by external input, and is finally launched into the simulation.

use nalgebra::Vector3;

use crate::simulation::params::Parameters;

pub type NVec3 = Vector3<f64>;

/// Radius of a sphere of mass `m` (kg) and density (kg/m^3), scaled down
/// into simulation units by `size_ratio`.
///
/// `radius` is always a pure function of `(m, density, size_ratio)`: every
/// mass change and every integration step recomputes it through here.
pub fn derived_radius(m: f64, density: f64, size_ratio: f64) -> f64 {
    (3.0 * m / (4.0 * std::f64::consts::PI * density)).cbrt() / size_ratio
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position (simulation units)
    pub v: NVec3, // velocity (simulation units per tick)
    pub m: f64, // mass (kg)
    pub density: f64, // density (kg/m^3), only used to derive radius
    pub radius: f64, // derived from (m, density, size_ratio)
    pub initializing: bool, // being placed; exempt from forces and integration
    pub launched: bool, // placement finalized (diagnostic flag)
}

impl Body {
    /// Build a body with its radius derived from mass and density.
    pub fn new(x: NVec3, v: NVec3, m: f64, density: f64, size_ratio: f64) -> Self {
        Self {
            x,
            v,
            m,
            density,
            radius: derived_radius(m, density, size_ratio),
            initializing: false,
            launched: false,
        }
    }

    /// Recompute `radius` from the current mass and density.
    pub fn update_radius(&mut self, size_ratio: f64) {
        self.radius = derived_radius(self.m, self.density, size_ratio);
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub tick: u64, // completed simulation ticks
    pub paused: bool, // tick gate, toggled by the external driver
}

impl System {
    /// Empty, unpaused system at tick 0.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            tick: 0,
            paused: false,
        }
    }

    /// Spawn a body in the `initializing` placement state with the baseline
    /// mass from `params`, returning its index.
    ///
    /// While initializing, the body neither exerts nor receives force and
    /// its position and velocity are not integrated.
    pub fn spawn_initializing(&mut self, x: NVec3, v: NVec3, params: &Parameters) -> usize {
        let mut body = Body::new(x, v, params.init_mass, params.density, params.size_ratio);
        body.initializing = true;
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Grow the newest body's mass while its spawn button is held:
    /// `m *= 1 + growth_rate * dt`, with `dt` in wall-clock seconds.
    /// No-op unless that body is initializing.
    pub fn grow_held(&mut self, dt: f64, params: &Parameters) {
        if let Some(body) = self.bodies.last_mut() {
            if body.initializing {
                body.m *= 1.0 + params.growth_rate * dt;
                body.update_radius(params.size_ratio);
            }
        }
    }

    /// Grow the newest body's mass by one discrete step (`m *= growth_step`).
    /// No-op unless that body is initializing.
    pub fn bump_mass(&mut self, params: &Parameters) {
        if let Some(body) = self.bodies.last_mut() {
            if body.initializing {
                body.m *= params.growth_step;
                body.update_radius(params.size_ratio);
                log::debug!("placement mass: {:e}", body.m);
            }
        }
    }

    /// Offset the newest body along `dir` by a fraction of its own radius.
    /// No-op unless that body is initializing.
    pub fn nudge(&mut self, dir: NVec3, params: &Parameters) {
        if let Some(body) = self.bodies.last_mut() {
            if body.initializing {
                body.x += dir * (body.radius * params.nudge_frac);
            }
        }
    }

    /// Finalize placement of the newest body: it becomes eligible for force
    /// accumulation and integration from the next tick on.
    pub fn launch(&mut self) {
        if let Some(body) = self.bodies.last_mut() {
            body.initializing = false;
            body.launched = true;
        }
    }

    /// Center of mass of all non-initializing bodies.
    pub fn center_of_mass(&self) -> NVec3 {
        let mut total_m = 0.0;
        let mut weighted = NVec3::zeros();
        for b in self.bodies.iter().filter(|b| !b.initializing) {
            weighted += b.m * b.x;
            total_m += b.m;
        }
        if total_m > 0.0 {
            weighted / total_m
        } else {
            NVec3::zeros()
        }
    }

    /// Total momentum of all non-initializing bodies.
    pub fn momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .filter(|b| !b.initializing)
            .map(|b| b.m * b.v)
            .sum()
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
