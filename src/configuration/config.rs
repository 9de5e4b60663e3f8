//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run-length and diagnostic settings
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   ticks: 1000             # ticks to run headless
//!   log_every: 100          # diagnostic cadence (omit for silent)
//!
//! parameters:
//!   G: 6.6743e-11           # gravitational constant
//!   unit_m: 1000.0          # meters per simulation unit
//!   vel_step: 0.0104166667  # velocity kick per tick (1/96)
//!   pos_step: 0.0106382979  # position drift per tick (1/94)
//!   size_ratio: 30000.0     # physical radius -> simulation units divisor
//!   damping: -0.2           # velocity multiplier on sphere overlap
//!   init_mass: 1.0e22       # baseline mass for spawned bodies
//!   density: 3344.0         # default density for spawned bodies
//!   growth_rate: 1.0        # held-button mass growth per second
//!   growth_step: 1.2        # per-click mass growth multiplier
//!   nudge_frac: 0.2         # placement nudge as a fraction of radius
//!
//! bodies:
//!   - x: [ -5000.0, 650.0, -350.0 ]
//!     v: [ 0.0, 0.0, 1500.0 ]
//!     m: 5.97219e22
//!     density: 5515.0
//!   - x: [ 5000.0, 650.0, -350.0 ]
//!     v: [ 0.0, 0.0, -1500.0 ]
//!     m: 5.97219e22
//!     density: 5515.0
//! ```
//!
//! Radius never appears in a scenario file: it is always derived from mass
//! and density when the runtime body is built.

use serde::Deserialize;

/// Run-length and diagnostic configuration for the headless engine.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub ticks: u64, // number of ticks to run
    pub log_every: Option<u64>, // diagnostic log cadence in ticks
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub unit_m: f64, // meters per simulation distance unit
    pub vel_step: f64, // velocity kick per tick
    pub pos_step: f64, // position drift per tick
    pub size_ratio: f64, // radius scale divisor
    pub damping: f64, // collision velocity multiplier
    pub init_mass: f64, // baseline mass for spawned bodies
    pub density: f64, // default density for spawned bodies
    pub growth_rate: f64, // held-button mass growth per second
    pub growth_step: f64, // per-click mass growth multiplier
    pub nudge_frac: f64, // placement nudge as a fraction of radius
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position in simulation units
    pub v: Vec<f64>, // initial velocity in simulation units per tick
    pub m: f64, // mass of the body (kg)
    pub density: f64, // density (kg/m^3), the radius is derived from it
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // initial state of the system
}
