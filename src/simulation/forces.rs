//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and direct Newtonian gravity. All terms
//! write into a per-tick buffer computed from a single consistent snapshot
//! of positions; nothing mutates body state during accumulation.

use crate::simulation::states::{Body, NVec3, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]);
}

/// Direct Newtonian point-mass gravity, no softening.
///
/// Displacements are measured in simulation units and converted to meters
/// through `unit_m` before the force law is applied. Close approaches are
/// genuinely singular; only the exactly-coincident pair is guarded.
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub unit_m: f64, // meters per simulation unit
}

impl NewtonianGravity {
    /// Acceleration exerted on `a` by `b`.
    ///
    /// Direction is the normalized displacement toward `b`; magnitude is
    /// `G * b.m / |d_m|^2` with the separation converted to meters.
    /// Coincident bodies contribute the zero vector, never NaN.
    pub fn pair_accel(&self, a: &Body, b: &Body) -> NVec3 {
        // r is the displacement vector from a to b in simulation units
        let r = b.x - a.x;
        let r2 = r.dot(&r);
        if r2 == 0.0 {
            // coincident pair: no direction to pull along
            return NVec3::zeros();
        }
        let dist = r2.sqrt();

        // Separation in meters for the force law
        let d_m = dist * self.unit_m;

        // F = G * m_a * m_b / d_m^2, then a = F / m_a = G * m_b / d_m^2
        let mag = self.G * b.m / (d_m * d_m);

        // direction r / dist, magnitude mag
        (r / dist) * mag
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            if bi.initializing {
                // bodies being placed neither exert nor receive force
                continue;
            }
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                if bj.initializing {
                    continue;
                }
                let xj = bj.x; // position of body j
                let mj = bj.m; // mass of body j

                // r is the displacement vector from i to j.
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r.
                let r = xj - xi;

                // Squared separation distance |r|^2 in simulation units
                let r2 = r.dot(&r);
                if r2 == 0.0 {
                    // coincident pair contributes nothing (no softening here,
                    // so this is the only guard against dividing by zero)
                    continue;
                }
                let dist = r2.sqrt();

                // Separation in meters for the force law
                let d_m = dist * self.unit_m;

                // Combine G and the distance factors:
                // a_i = (r / dist) * G * m_j / d_m^2
                //     = r * (G / (dist * d_m^2)) * m_j
                // so coef carries everything except the partner mass
                let coef = self.G / (dist * d_m * d_m);

                // -------------------------
                // Apply Newton's law:
                // a_i +=  coef * m_j * r
                // a_j += -coef * m_i * r
                // (equal and opposite)
                // -------------------------

                // Acceleration on body i due to body j:
                // direction: along +r (toward j)
                // magnitude scaled by mass of j
                out[i] += coef * mj * r;

                // Acceleration on body j due to body i:
                // direction: along -r (toward i)
                // magnitude scaled by mass of i
                out[j] -= coef * mi * r;
            }
        }
    }
}
