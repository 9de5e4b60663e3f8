//! Fixed-step explicit Euler tick for the N-body system
//!
//! One tick, driven once per frame by the external loop:
//! 1. accumulate all pairwise accelerations from the tick-start positions
//! 2. kick velocities by `vel_step`
//! 3. apply collision damping factors to velocities
//! 4. drift positions by `pos_step` and refresh derived radii
//!
//! Accelerations and damping factors are both computed from a single
//! consistent snapshot of positions before any body is mutated, so the
//! result is independent of body ordering.

use crate::simulation::collision::collision_damping;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, System};

/// Advance the system by one tick. No-op while paused or empty.
///
/// Bodies flagged `initializing` are left untouched: no force, no kick,
/// no damping, no drift, no radius refresh.
pub fn euler_tick(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    if sys.paused {
        return;
    }
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // a[i] holds the summed acceleration on body i at the current tick,
    // computed before anything moves
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&*sys, &mut acc);

    // Kick: v += a * vel_step (fixed per-tick step, not wall-clock dt)
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        if !b.initializing {
            b.v += *a * params.vel_step;
        }
    }

    // Damping factors from the same position snapshot. A body overlapping
    // several others collects the product of the per-pair factors.
    let mut damp = vec![1.0_f64; n];
    for i in 0..n {
        if sys.bodies[i].initializing {
            continue;
        }
        for j in 0..n {
            if i == j || sys.bodies[j].initializing {
                continue;
            }
            damp[i] *= collision_damping(&sys.bodies[i], &sys.bodies[j], params.damping);
        }
    }
    for (b, d) in sys.bodies.iter_mut().zip(damp.iter()) {
        if !b.initializing && *d != 1.0 {
            b.v *= *d;
            log::trace!("tick {}: collision damping {}", sys.tick, d);
        }
    }

    // Drift: x += v * pos_step, then refresh the derived radius
    for b in sys.bodies.iter_mut() {
        if !b.initializing {
            b.x += b.v * params.pos_step;
            b.update_radius(params.size_ratio);
        }
    }

    sys.tick += 1;
}
