use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_tick;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a manual System of size `n`
fn make_system(n: usize, params: &Parameters) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5000.0,
            (i_f * 0.13).cos() * 5000.0,
            (i_f * 0.07).sin() * 5000.0,
        );

        bodies.push(Body::new(
            x,
            NVec3::zeros(),
            1.0e22,
            params.density,
            params.size_ratio,
        ));
    }

    System {
        bodies,
        tick: 0,
        paused: false,
    }
}

/// Time one direct O(n^2) force accumulation for a range of system sizes
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let params = Parameters::default();

    for n in ns {
        let sys = make_system(n, &params);
        let mut out = vec![NVec3::zeros(); n];

        let gravity = NewtonianGravity {
            G: params.G,
            unit_m: params.unit_m,
        };

        // Warm up
        gravity.acceleration(&sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(&sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt:8.6} s");
    }
}

/// Time whole Euler ticks (accumulate + kick + damping + drift) per n
/// Paste output directly into a spreadsheet to graph
pub fn bench_euler_curve() {
    println!("N,tick_ms");

    let params = Parameters::default();

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few ticks to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n, &params);
        let forces = AccelSet::new().with(NewtonianGravity {
            G: params.G,
            unit_m: params.unit_m,
        });

        // Warm-up one tick
        euler_tick(&mut sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_tick(&mut sys, &forces, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
