//! Spacetime-grid deformation for an external renderer
//!
//! Produces the warped line grid visualizing gravitational depression:
//! - `grid_vertices` builds a flat grid of line-segment endpoints in the
//!   XZ plane
//! - `warp_grid` displaces each vertex height by the Schwarzschild
//!   embedding depression of every body, anchored to the system's
//!   center-of-mass height
//!
//! Pure data in, data out: no GPU types here. The caller uploads the
//! returned vertices however it renders lines.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, System};

/// Speed of light (m/s), used for the Schwarzschild radius.
pub const C: f64 = 299_792_458.0;

/// Flat line grid in the XZ plane: consecutive vertex pairs form segments.
///
/// `size` is the total grid extent in simulation units, `divisions` the
/// cell count per axis.
pub fn grid_vertices(size: f64, divisions: usize) -> Vec<NVec3> {
    let mut vertices = Vec::new();
    let step = size / divisions as f64; // grid cell size
    let half = size / 2.0;
    let y = -half * 0.3 + 3.0 * step; // resting height of the sheet

    // Lines along the X axis, one segment per cell
    for z_step in 0..=divisions {
        let z = -half + z_step as f64 * step;
        for x_step in 0..divisions {
            let x_start = -half + x_step as f64 * step;
            vertices.push(NVec3::new(x_start, y, z));
            vertices.push(NVec3::new(x_start + step, y, z));
        }
    }

    // Lines along the Z axis
    for x_step in 0..=divisions {
        let x = -half + x_step as f64 * step;
        for z_step in 0..divisions {
            let z_start = -half + z_step as f64 * step;
            vertices.push(NVec3::new(x, y, z_start));
            vertices.push(NVec3::new(x, y, z_start + step));
        }
    }

    vertices
}

/// Warp the base grid under the system's gravity.
///
/// Each vertex height becomes the summed Schwarzschild depression
/// `dz = 2 * sqrt(rs * (d_m - rs))` with `rs = 2 * G * m / c^2`, doubled
/// for visual effect, then shifted so the sheet hangs below the system's
/// center-of-mass height. Bodies still in placement are ignored. The
/// radicand is clamped at zero inside `rs`, where the embedding formula
/// is undefined.
pub fn warp_grid(base: &[NVec3], sys: &System, params: &Parameters) -> Vec<NVec3> {
    // Center-of-mass height of the settled bodies
    let com_y = sys.center_of_mass().y;

    // Resting height of the sheet
    let original_max_y = base
        .iter()
        .map(|v| v.y)
        .fold(f64::NEG_INFINITY, f64::max);

    let vertical_shift = com_y - original_max_y;

    let mut warped = base.to_vec();
    for vertex in warped.iter_mut() {
        // Height grows with distance from each mass, so vertices near a
        // body sit lower: the well of the embedding diagram
        let mut height = 0.0;

        for b in sys.bodies.iter().filter(|b| !b.initializing) {
            let distance = (b.x - *vertex).norm(); // simulation units
            let distance_m = distance * params.unit_m;
            let rs = 2.0 * params.G * b.m / (C * C); // Schwarzschild radius

            let dz = 2.0 * (rs * (distance_m - rs).max(0.0)).sqrt();
            height += dz * 2.0; // exaggerate for visibility
        }

        vertex.y = height - vertical_shift.abs();
    }

    warped
}
