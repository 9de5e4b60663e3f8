//! Sphere-overlap collision signal
//!
//! Collisions neither merge bodies nor conserve momentum: the detector
//! returns a scalar the caller multiplies into the whole velocity vector,
//! a sign-reversing, magnitude-reducing bounce approximation.

use crate::simulation::states::Body;

/// Damping factor for the pair `(a, b)`.
///
/// Returns `damping` when the spheres strictly overlap (center distance
/// less than the sum of radii) and `1.0` otherwise. Exact surface contact
/// (distance equal to the radius sum) is not a collision.
pub fn collision_damping(a: &Body, b: &Body, damping: f64) -> f64 {
    let distance = (b.x - a.x).norm();
    if a.radius + b.radius > distance {
        damping
    } else {
        1.0
    }
}
