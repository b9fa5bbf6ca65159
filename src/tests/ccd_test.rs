use nalgebra::Point3;

use crate::ccd::CcdSolver;
use crate::chain::JointChain;
use crate::parameters::ChainParameters;

fn planar_chain() -> JointChain {
    JointChain::new(&ChainParameters::planar_three_link()).expect("valid preset")
}

fn assert_within_limits(chain: &JointChain) {
    for joint in chain.joints() {
        assert!(
            joint.angle() >= joint.min_angle && joint.angle() <= joint.max_angle,
            "joint {} at {} outside [{}, {}]",
            joint.name,
            joint.angle(),
            joint.min_angle,
            joint.max_angle
        );
        assert!(joint.angle().is_finite());
    }
}

#[test]
fn test_reaches_reachable_goal() {
    let mut chain = planar_chain();
    let solver = CcdSolver::default(); // 15 iterations, 2 mm tolerance
    let goal = Point3::new(2.0, 0.0, 0.0);

    solver.solve(&mut chain, &goal);

    let distance = (chain.end_effector_position() - goal).norm();
    assert!(distance < solver.tolerance, "distance = {}", distance);
    assert_within_limits(&chain);
}

#[test]
fn test_repeated_solves_do_not_oscillate() {
    let mut chain = planar_chain();
    // Tight tolerance first, so the remaining error is tiny
    let precise = CcdSolver {
        iterations: 200,
        tolerance: 1e-6,
        max_step: None,
    };
    let goal = Point3::new(2.0, 0.0, 0.0);
    precise.solve(&mut chain, &goal);
    assert!((chain.end_effector_position() - goal).norm() < 1e-6);

    // Once at the goal, further solves barely move any joint
    let solver = CcdSolver::default();
    for _ in 0..10 {
        let before = chain.angles();
        solver.solve(&mut chain, &goal);
        let after = chain.angles();
        for (a, b) in before.iter().zip(after.iter()) {
            assert!((a - b).abs() < 1e-2, "joint moved {} degrees at the goal", (a - b).abs());
        }
        assert!((chain.end_effector_position() - goal).norm() < solver.tolerance);
    }
}

#[test]
fn test_out_of_reach_goal_degrades_gracefully() {
    let mut chain = planar_chain();
    let solver = CcdSolver::default();
    let goal = Point3::new(10.0, 0.0, 0.0); // beyond the 3 m workspace

    let before = (chain.end_effector_position() - goal).norm();
    solver.solve(&mut chain, &goal);
    let after = (chain.end_effector_position() - goal).norm();

    // No convergence, no error: the arm stretches toward the goal and stops
    assert!(after < before);
    assert_within_limits(&chain);
}

#[test]
fn test_limits_hold_through_solving() {
    let mut parameters = ChainParameters::planar_three_link();
    for joint in &mut parameters.joints {
        joint.min_angle = -45.0;
        joint.max_angle = 45.0;
    }
    let mut chain = JointChain::new(&parameters).expect("valid parameters");
    let solver = CcdSolver::default();

    // A sequence of goals all around the workspace, several behind the arm
    let goals = [
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(-2.0, 1.0, 0.0),
        Point3::new(0.0, -2.5, 0.0),
        Point3::new(1.0, 2.5, 0.0),
        Point3::new(-0.5, -0.5, 0.0),
    ];
    for goal in &goals {
        solver.solve(&mut chain, goal);
        assert_within_limits(&chain);
    }
}

#[test]
fn test_degenerate_goal_at_pivot_is_skipped() {
    let mut chain = planar_chain();
    let solver = CcdSolver::default();
    // The goal coincides with the base pivot: the base joint has no
    // well-defined correction and must be skipped, not produce NaN
    let goal = Point3::new(0.0, 0.0, 0.0);
    solver.solve(&mut chain, &goal);
    assert_within_limits(&chain);
    assert!(chain.end_effector_position().coords.iter().all(|v| v.is_finite()));
}

#[test]
fn test_max_step_caps_single_corrections() {
    let mut capped = planar_chain();
    let solver = CcdSolver {
        iterations: 1,
        tolerance: 1e-9,
        max_step: Some(1.0),
    };
    let before = capped.angles();
    solver.solve(&mut capped, &Point3::new(2.0, 0.0, 0.0));
    let after = capped.angles();

    // One sweep, one update per joint: no joint may move more than the cap
    for (a, b) in before.iter().zip(after.iter()) {
        assert!((a - b).abs() <= 1.0 + 1e-9);
    }
}

#[test]
fn test_capped_solver_still_converges() {
    let mut chain = planar_chain();
    let solver = CcdSolver {
        iterations: 300,
        tolerance: 0.002,
        max_step: Some(5.0),
    };
    let goal = Point3::new(2.0, 0.0, 0.0);
    solver.solve(&mut chain, &goal);
    assert!((chain.end_effector_position() - goal).norm() < solver.tolerance);
}

#[test]
fn test_deterministic_trajectories() {
    let goal = Point3::new(1.5, -1.0, 0.0);
    let solver = CcdSolver::default();

    let mut first = planar_chain();
    let mut second = planar_chain();
    for _ in 0..5 {
        solver.solve(&mut first, &goal);
        solver.solve(&mut second, &goal);
        assert_eq!(first.angles(), second.angles());
    }
}
