use approx::assert_relative_eq;

use gravsim::simulation::collision::collision_damping;
use gravsim::simulation::forces::{AccelSet, NewtonianGravity};
use gravsim::simulation::integrator::euler_tick;
use gravsim::simulation::params::Parameters;
use gravsim::simulation::spacetime::{grid_vertices, warp_grid};
use gravsim::simulation::states::{derived_radius, Body, NVec3, System};

/// Build a simple 2-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let p = test_params();
    let b1 = Body::new(
        [-dist / 2.0, 0.0, 0.0].into(),
        NVec3::zeros(),
        m1,
        p.density,
        p.size_ratio,
    );
    let b2 = Body::new(
        [dist / 2.0, 0.0, 0.0].into(),
        NVec3::zeros(),
        m2,
        p.density,
        p.size_ratio,
    );
    System {
        bodies: vec![b1, b2],
        tick: 0,
        paused: false,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters::default()
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: p.G,
        unit_m: p.unit_m,
    })
}

/// A body with an explicit radius, for collision threshold tests
fn body_with_radius(x: NVec3, radius: f64) -> Body {
    Body {
        x,
        v: NVec3::zeros(),
        m: 1.0,
        density: 1.0,
        radius,
        initializing: false,
        launched: true,
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1000.0, 2.0e22, 3.0e22);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(&sys, &mut acc);

    let net: NVec3 = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;

    assert!(net.norm() < 1e-9, "Net momentum change not zero: {:?}", net);
}

#[test]
fn gravity_pair_accel_symmetry() {
    let p = test_params();
    let gravity = NewtonianGravity {
        G: p.G,
        unit_m: p.unit_m,
    };
    let sys = two_body_system(700.0, 5.0e22, 9.0e21);

    let f_ab = gravity.pair_accel(&sys.bodies[0], &sys.bodies[1]) * sys.bodies[0].m;
    let f_ba = gravity.pair_accel(&sys.bodies[1], &sys.bodies[0]) * sys.bodies[1].m;

    // equal magnitude, opposite direction
    assert_relative_eq!(f_ab.norm(), f_ba.norm(), max_relative = 1e-12);
    assert!((f_ab + f_ba).norm() < f_ab.norm() * 1e-12);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2000.0, 1.0e22, 1.0e22);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(&sys, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    let a1 = acc[0];

    assert!(dx.norm() > 0.0);
    assert!(a1.dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1000.0, 1.0e22, 1.0e22);
    let sys_2r = two_body_system(2000.0, 1.0e22, 1.0e22);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![Default::default(); 2];
    let mut acc_2r = vec![Default::default(); 2];

    forces.accumulate_accels(&sys_r, &mut acc_r);
    forces.accumulate_accels(&sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_zero_distance_is_zero_not_nan() {
    let mut sys = two_body_system(1000.0, 1.0e22, 1.0e22);
    sys.bodies[1].x = sys.bodies[0].x; // coincident
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(&sys, &mut acc);

    for a in &acc {
        assert!(a.iter().all(|c| c.is_finite()), "Non-finite acceleration: {:?}", a);
        assert_eq!(a.norm(), 0.0, "Coincident pair must contribute nothing");
    }

    let gravity = NewtonianGravity {
        G: p.G,
        unit_m: p.unit_m,
    };
    let pair = gravity.pair_accel(&sys.bodies[0], &sys.bodies[1]);
    assert_eq!(pair, NVec3::zeros());
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn collision_boundary_contact_is_not_a_collision() {
    let p = test_params();
    let a = body_with_radius(NVec3::zeros(), 1.0);
    let b = body_with_radius([2.0, 0.0, 0.0].into(), 1.0);

    // touching surfaces, not overlapping
    assert_eq!(collision_damping(&a, &b, p.damping), 1.0);
}

#[test]
fn collision_overlap_returns_damping() {
    let p = test_params();
    let a = body_with_radius(NVec3::zeros(), 1.0);
    let b = body_with_radius([1.999, 0.0, 0.0].into(), 1.0);

    assert_eq!(collision_damping(&a, &b, p.damping), -0.2);
}

#[test]
fn collision_damping_reverses_velocity_in_tick() {
    let p = test_params();
    let forces = gravity_set(&p);

    // two overlapping, nearly massless spheres drifting apart
    let mut a = body_with_radius(NVec3::zeros(), 1.5);
    a.v = [1.0, 0.0, 0.0].into();
    let mut b = body_with_radius([2.0, 0.0, 0.0].into(), 1.5);
    b.v = [-1.0, 0.0, 0.0].into();
    let mut sys = System {
        bodies: vec![a, b],
        tick: 0,
        paused: false,
    };

    euler_tick(&mut sys, &forces, &p);

    // whole velocity vector scaled by -0.2 (gravity between unit masses is
    // far below the tolerance)
    assert!((sys.bodies[0].v.x + 0.2).abs() < 1e-9, "got {}", sys.bodies[0].v.x);
    assert!((sys.bodies[1].v.x - 0.2).abs() < 1e-9, "got {}", sys.bodies[1].v.x);
}

// ==================================================================================
// Radius derivation tests
// ==================================================================================

#[test]
fn radius_matches_mass_density_formula() {
    let p = test_params();
    let body = Body::new(NVec3::zeros(), NVec3::zeros(), 5.9722e24, 5515.0, p.size_ratio);

    let expected =
        (3.0 * 5.9722e24 / (4.0 * std::f64::consts::PI * 5515.0)).cbrt() / p.size_ratio;
    assert_relative_eq!(body.radius, expected, max_relative = 1e-12);
}

#[test]
fn radius_tracks_mass_growth() {
    let p = test_params();
    let mut sys = System::new();
    sys.spawn_initializing(NVec3::zeros(), NVec3::zeros(), &p);

    let before = sys.bodies[0].radius;
    sys.grow_held(1.0, &p); // growth_rate 1.0 -> mass doubles
    let body = &sys.bodies[0];

    assert_relative_eq!(body.m, 2.0 * p.init_mass, max_relative = 1e-12);
    assert!(body.radius > before, "radius must grow with mass");
    assert_relative_eq!(
        body.radius,
        derived_radius(body.m, body.density, p.size_ratio),
        max_relative = 1e-12
    );
}

// ==================================================================================
// Placement lifecycle tests
// ==================================================================================

#[test]
fn initializing_body_is_exempt_from_physics() {
    let p = test_params();
    let forces = gravity_set(&p);

    // one settled heavy body, one body still being placed right next to it
    let mut sys = System::new();
    sys.bodies.push(Body::new(
        NVec3::zeros(),
        NVec3::zeros(),
        1.989e25,
        5515.0,
        p.size_ratio,
    ));
    sys.spawn_initializing([100.0, 0.0, 0.0].into(), NVec3::zeros(), &p);

    let frozen_x = sys.bodies[1].x;
    let frozen_v = sys.bodies[1].v;

    for _ in 0..50 {
        euler_tick(&mut sys, &forces, &p);
    }

    // the placed body neither moved nor accelerated
    assert_eq!(sys.bodies[1].x, frozen_x);
    assert_eq!(sys.bodies[1].v, frozen_v);
    // and it exerted nothing on the settled body either
    assert_eq!(sys.bodies[0].v, NVec3::zeros());
}

#[test]
fn launch_makes_body_eligible_for_forces() {
    let p = test_params();
    let forces = gravity_set(&p);

    let mut sys = System::new();
    sys.bodies.push(Body::new(
        NVec3::zeros(),
        NVec3::zeros(),
        1.989e25,
        5515.0,
        p.size_ratio,
    ));
    sys.spawn_initializing([5000.0, 0.0, 0.0].into(), NVec3::zeros(), &p);
    sys.bump_mass(&p);
    sys.launch();

    assert!(!sys.bodies[1].initializing);
    assert!(sys.bodies[1].launched);
    assert_relative_eq!(sys.bodies[1].m, p.init_mass * p.growth_step, max_relative = 1e-12);

    euler_tick(&mut sys, &forces, &p);

    // now gravity pulls it toward the heavy body
    assert!(sys.bodies[1].v.x < 0.0, "launched body must feel gravity");
}

#[test]
fn nudge_moves_by_radius_fraction() {
    let p = test_params();
    let mut sys = System::new();
    sys.spawn_initializing(NVec3::zeros(), NVec3::zeros(), &p);

    let r = sys.bodies[0].radius;
    sys.nudge([0.0, 1.0, 0.0].into(), &p);

    assert_relative_eq!(sys.bodies[0].x.y, r * p.nudge_frac, max_relative = 1e-12);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn paused_system_does_not_advance() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = two_body_system(1000.0, 5.97219e22, 5.97219e22);
    sys.paused = true;

    let before = sys.clone();
    for _ in 0..10 {
        euler_tick(&mut sys, &forces, &p);
    }

    assert_eq!(sys.tick, before.tick);
    for (b, b0) in sys.bodies.iter().zip(before.bodies.iter()) {
        assert_eq!(b.x, b0.x);
        assert_eq!(b.v, b0.v);
    }
}

#[test]
fn symmetric_two_body_keeps_center_of_mass_fixed() {
    let p = test_params();
    let forces = gravity_set(&p);

    // equal masses, mirrored positions, equal-opposite velocities
    let b1 = Body::new(
        [-5000.0, 650.0, -350.0].into(),
        [0.0, 0.0, 1500.0].into(),
        5.97219e22,
        5515.0,
        p.size_ratio,
    );
    let b2 = Body::new(
        [5000.0, 650.0, -350.0].into(),
        [0.0, 0.0, -1500.0].into(),
        5.97219e22,
        5515.0,
        p.size_ratio,
    );
    let mut sys = System {
        bodies: vec![b1, b2],
        tick: 0,
        paused: false,
    };

    let com0 = sys.center_of_mass();

    for _ in 0..200 {
        euler_tick(&mut sys, &forces, &p);
    }

    let com = sys.center_of_mass();
    let momentum = sys.momentum();

    assert!(
        (com - com0).norm() < 1e-6,
        "Center of mass drifted: {:?} -> {:?}",
        com0,
        com
    );
    // total momentum started at zero and the force law is symmetric
    assert!(
        momentum.norm() < 5.97219e22 * 1500.0 * 1e-12,
        "Momentum not conserved: {:?}",
        momentum
    );
    assert_eq!(sys.tick, 200);
}

#[test]
fn velocities_stay_finite_through_close_pass() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut sys = two_body_system(10.0, 5.97219e22, 5.97219e22);

    for _ in 0..100 {
        euler_tick(&mut sys, &forces, &p);
    }

    // no softening, so close passes get violent, but never undefined
    // unless the pair lands exactly on top of each other
    for b in &sys.bodies {
        assert!(
            b.v.iter().all(|c| c.is_finite()) && b.x.iter().all(|c| c.is_finite()),
            "state went non-finite: {:?}",
            b
        );
    }
}

// ==================================================================================
// Spacetime grid tests
// ==================================================================================

#[test]
fn grid_has_expected_segment_count() {
    let divisions = 25;
    let grid = grid_vertices(20000.0, divisions);

    // two line directions, (divisions + 1) * divisions segments each,
    // two endpoints per segment
    assert_eq!(grid.len(), 2 * (divisions + 1) * divisions * 2);
}

#[test]
fn grid_warps_deeper_near_heavy_body() {
    let p = test_params();
    let mut sys = System::new();
    sys.bodies.push(Body::new(
        NVec3::zeros(),
        NVec3::zeros(),
        1.989e25,
        5515.0,
        p.size_ratio,
    ));

    let base = grid_vertices(20000.0, 25);
    let warped = warp_grid(&base, &sys, &p);
    assert_eq!(warped.len(), base.len());

    // vertex closest to the mass in the sheet plane vs the farthest one
    let xz = |v: &NVec3| (v.x * v.x + v.z * v.z).sqrt();
    let (near, _) = base
        .iter()
        .enumerate()
        .min_by(|a, b| xz(a.1).partial_cmp(&xz(b.1)).unwrap())
        .unwrap();
    let (far, _) = base
        .iter()
        .enumerate()
        .max_by(|a, b| xz(a.1).partial_cmp(&xz(b.1)).unwrap())
        .unwrap();

    assert!(warped.iter().all(|v| v.y.is_finite()));
    assert!(
        warped[near].y < warped[far].y,
        "well must be deepest near the mass: near {} far {}",
        warped[near].y,
        warped[far].y
    );
}
