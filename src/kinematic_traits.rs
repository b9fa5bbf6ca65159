//! Core type aliases and the goal ingestion seam.

use nalgebra::{Isometry3, Point3, Vector3};

/// Pose of a joint or of the end effector: Cartesian position plus rotation
/// quaternion.
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion, Vector3};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(1.0, 0.0, 0.0);
/// let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.5);
/// let pose = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// Joint angles in degrees, base to tip. The chain defines how many there are.
pub type Angles = Vec<f64>;

/// What the arm should currently do. Exactly one goal is active at a time;
/// replacing it is the only cancellation mechanism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Goal {
    /// Absolute 3-D point the end effector should reach (CCD solver).
    CartesianTarget(Point3<f64>),

    /// Instantaneous linear velocity command in the chain-root frame, m/s
    /// (damped least squares solver). The zero vector means "hold position"
    /// and makes the tick a no-op.
    CartesianVelocity(Vector3<f64>),
}

impl Goal {
    /// The neutral goal: zero velocity, arm holds its pose.
    pub fn hold() -> Self {
        Goal::CartesianVelocity(Vector3::zeros())
    }
}

/// Anything that produces goals for the arm: jog button panels, an absolute
/// target transform, a remote command channel. The controller reads the
/// current goal once per tick; when several sources feed one arm, the last
/// ingested goal wins.
pub trait GoalSource {
    fn current_goal(&self) -> Goal;
}
