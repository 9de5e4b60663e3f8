//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and the simulation-unit-to-meter scale,
//! - fixed per-tick velocity and position steps,
//! - radius scale and collision damping,
//! - placement-state baseline mass, density and growth rates
//!
//! Every value that was a magic literal in earlier renditions of this
//! simulation is an explicit field here, with the canonical values as
//! the `Default`.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant (m^3 kg^-1 s^-2)
    pub unit_m: f64, // meters per simulation distance unit
    pub vel_step: f64, // velocity kick applied per tick (fixed, not wall-clock)
    pub pos_step: f64, // position drift applied per tick (fixed, not wall-clock)
    pub size_ratio: f64, // divisor scaling the physical radius into simulation units
    pub damping: f64, // velocity multiplier returned on sphere overlap
    pub init_mass: f64, // baseline mass for newly spawned bodies (kg)
    pub density: f64, // default density for newly spawned bodies (kg/m^3)
    pub growth_rate: f64, // held-button mass growth per wall-clock second
    pub growth_step: f64, // discrete mass growth multiplier per click
    pub nudge_frac: f64, // placement nudge distance as a fraction of radius
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 6.6743e-11,
            unit_m: 1000.0, // 1 simulation unit = 1 km
            vel_step: 1.0 / 96.0,
            pos_step: 1.0 / 94.0,
            size_ratio: 30000.0,
            damping: -0.2,
            init_mass: 1.0e22,
            density: 3344.0,
            growth_rate: 1.0,
            growth_step: 1.2,
            nudge_frac: 0.2,
        }
    }
}
