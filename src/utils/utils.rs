//! Helper functions

use nalgebra::{Isometry3, UnitQuaternion, Vector3};

/// Convert angles in degrees to radians.
pub fn to_radians(angles: &[f64]) -> Vec<f64> {
    angles.iter().map(|a| a.to_radians()).collect()
}

/// Convert angles in radians to degrees.
pub fn to_degrees(angles: &[f64]) -> Vec<f64> {
    angles.iter().map(|a| a.to_degrees()).collect()
}

/// Component of `v` lying in the plane perpendicular to `normal`.
/// `normal` does not need to be unit length; a near-zero normal returns `v`
/// unchanged.
pub fn project_onto_plane(v: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    let nn = normal.norm_squared();
    if nn < f64::EPSILON {
        return *v;
    }
    v - normal * (v.dot(normal) / nn)
}

/// Signed angle in degrees from `from` to `to`, measured about `axis`
/// (positive counter-clockwise when looking against the axis direction).
pub fn signed_angle(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let cross = from.cross(to);
    let unsigned = cross.norm().atan2(from.dot(to));
    let sign = if axis.dot(&cross) < 0.0 { -1.0 } else { 1.0 };
    (unsigned * sign).to_degrees()
}

/// Print joint angles (degrees).
#[allow(dead_code)]
pub fn dump_angles(angles: &[f64]) {
    let mut row_str = String::new();
    for angle in angles {
        row_str.push_str(&format!("{:7.2} ", angle));
    }
    println!("[{}]", row_str.trim_end());
}

pub fn dump_pose(isometry: &Isometry3<f64>) {
    // Extract translation components
    let translation = isometry.translation.vector;

    // Extract rotation components
    let rotation: UnitQuaternion<f64> = isometry.rotation;

    // Print translation and rotation
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    );
}

pub fn assert_pose_eq(
    ta: &Isometry3<f64>,
    tb: &Isometry3<f64>,
    distance_tolerance: f64,
    angular_tolerance: f64,
) -> bool {
    fn bad(ta: &Isometry3<f64>, tb: &Isometry3<f64>) {
        dump_pose(ta);
        dump_pose(tb);
    }

    let translation_distance = (ta.translation.vector - tb.translation.vector).norm();
    let angular_distance = ta.rotation.angle_to(&tb.rotation);

    if translation_distance.abs() > distance_tolerance {
        bad(ta, tb);
        panic!("Poses have too different translations");
    }

    if angular_distance.abs() > angular_tolerance {
        bad(ta, tb);
        panic!("Poses have too different angles");
    }
    true
}
