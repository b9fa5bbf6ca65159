use nalgebra::{Point3, Vector3};

use crate::chain::JointChain;
use crate::parameters::ChainParameters;
use crate::utils::assert_pose_eq;

fn planar_chain() -> JointChain {
    JointChain::new(&ChainParameters::planar_three_link()).expect("valid preset")
}

#[test]
fn test_planar_zero_pose() {
    let chain = planar_chain();
    // Bent mechanical zero: base link along +X, elbow base rotation turns
    // the rest of the chain to +Y
    let ee = chain.end_effector_position();
    assert!((ee - Point3::new(1.0, 2.0, 0.0)).norm() < 1e-12, "ee = {}", ee);
}

#[test]
fn test_six_axis_zero_pose() {
    let chain = JointChain::new(&ChainParameters::sample_six_axis()).expect("valid preset");
    // All links stack along +Z at zero
    let ee = chain.end_effector_position();
    assert!((ee - Point3::new(0.0, 0.0, 1.48)).norm() < 1e-12, "ee = {}", ee);
}

#[test]
fn test_base_rotation_turns_whole_chain() {
    let mut chain = planar_chain();
    chain.set_joint_angle(0, 90.0);
    // Rotating the base by 90 degrees about +Z maps (x, y) to (-y, x)
    let ee = chain.end_effector_position();
    assert!((ee - Point3::new(-2.0, 1.0, 0.0)).norm() < 1e-9, "ee = {}", ee);
}

#[test]
fn test_frames_match_pose_queries() {
    let mut chain = planar_chain();
    chain.set_joint_angle(0, 30.0);
    chain.set_joint_angle(1, -45.0);
    chain.set_joint_angle(2, 10.0);

    let frames = chain.frames();
    assert_eq!(frames.pivots.len(), 3);
    assert_eq!(frames.axes.len(), 3);
    assert!((frames.end_effector - chain.end_effector_position()).norm() < 1e-12);

    // Planar chain: every axis stays +Z whatever the angles are
    for axis in &frames.axes {
        assert!((axis - Vector3::z()).norm() < 1e-9);
    }

    // Unit links: consecutive pivots stay one meter apart
    assert!((frames.pivots[0] - Point3::origin()).norm() < 1e-12);
    assert!(((frames.pivots[1] - frames.pivots[0]).norm() - 1.0).abs() < 1e-9);
    assert!(((frames.pivots[2] - frames.pivots[1]).norm() - 1.0).abs() < 1e-9);
}

#[test]
fn test_repeated_reads_are_bit_identical() {
    let mut chain = planar_chain();
    chain.set_joint_angle(0, 12.34);
    chain.set_joint_angle(1, -56.78);

    // Forward kinematics is a pure function of the angles: reading must not
    // drift the state
    let first = chain.end_effector_position();
    for _ in 0..100 {
        assert_eq!(chain.end_effector_position(), first);
    }
    let angles = chain.angles();
    let _ = chain.snapshot();
    assert_eq!(chain.angles(), angles);
}

#[test]
fn test_snapshot_consistency() {
    let mut chain = planar_chain();
    chain.set_joint_angle(1, 33.0);

    let snapshot = chain.snapshot();
    assert_eq!(snapshot.angles, chain.angles());
    assert_eq!(snapshot.joint_poses.len(), chain.dof());
    assert_pose_eq(&snapshot.end_effector, &chain.end_effector_pose(), 1e-12, 1e-12);
    for i in 0..chain.dof() {
        assert_pose_eq(&snapshot.joint_poses[i], &chain.joint_pose(i), 1e-12, 1e-12);
    }
}

#[test]
fn test_round_trip_apply_read() {
    let mut chain = planar_chain();
    // Writing the angle a joint already has must not move the end effector
    chain.set_joint_angle(0, 25.0);
    chain.set_joint_angle(1, -40.0);
    let before = chain.end_effector_position();
    for _ in 0..50 {
        chain.set_joint_angle(0, 25.0);
        chain.set_joint_angle(1, -40.0);
    }
    assert_eq!(chain.end_effector_position(), before);
}
