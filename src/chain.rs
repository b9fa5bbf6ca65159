//! The joint chain: an ordered array of rotary joints with forward
//! kinematics recomputed from the current angles on demand.
//!
//! The chain is a plain data structure, not a live transform hierarchy.
//! World poses are a deterministic function of the joint angles, so the
//! state can be snapshot at any time and two chains with equal angles are
//! interchangeable.

use nalgebra::{Point3, Translation3, Unit, UnitQuaternion, Vector3};

use crate::kinematic_traits::{Angles, Pose};
use crate::parameter_error::ParameterError;
use crate::parameters::ChainParameters;

/// One rotary degree of freedom.
///
/// The current angle is private: every write goes through [`Joint::set_angle`],
/// which clamps to `[min_angle, max_angle]`. That method is the single
/// enforcement point of the joint-limit invariant.
#[derive(Debug, Clone)]
pub struct Joint {
    pub name: String,

    /// Pivot translation from the parent pivot, parent frame, meters.
    offset: Vector3<f64>,

    /// Orientation at angle = 0, captured at construction (mechanical zero).
    base_rotation: UnitQuaternion<f64>,

    /// Unit rotation axis in the joint's own frame.
    local_axis: Unit<Vector3<f64>>,

    /// Static angle limits, degrees.
    pub min_angle: f64,
    pub max_angle: f64,

    /// Current signed rotation about `local_axis` relative to
    /// `base_rotation`, degrees. Always within the limits.
    angle: f64,
}

impl Joint {
    /// Current angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Write the angle, clamped to `[min_angle, max_angle]`. The only way
    /// to mutate a joint.
    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = degrees.clamp(self.min_angle, self.max_angle);
    }

    pub fn local_axis(&self) -> &Unit<Vector3<f64>> {
        &self.local_axis
    }

    pub fn base_rotation(&self) -> &UnitQuaternion<f64> {
        &self.base_rotation
    }

    /// Parent-local rotation: mechanical zero composed with the current
    /// angle about the local axis.
    fn rotation(&self) -> UnitQuaternion<f64> {
        self.base_rotation
            * UnitQuaternion::from_axis_angle(&self.local_axis, self.angle.to_radians())
    }
}

/// Per-joint world-space quantities needed by the solvers: pivot positions,
/// rotation axes (with each joint's own rotation applied, which leaves the
/// axis itself unchanged), and the end-effector position.
#[derive(Debug, Clone)]
pub struct ChainFrames {
    pub pivots: Vec<Point3<f64>>,
    pub axes: Vec<Vector3<f64>>,
    pub end_effector: Point3<f64>,
}

/// State readable by presentation layers (UI labels, telemetry) after a
/// solve, decoupled from the chain itself.
#[derive(Debug, Clone)]
pub struct PoseSnapshot {
    /// Joint angles in degrees, base to tip.
    pub angles: Angles,
    /// World pose of every joint, its own rotation included.
    pub joint_poses: Vec<Pose>,
    /// World pose of the end effector.
    pub end_effector: Pose,
}

/// Ordered chain of rotary joints, base to tip, plus the end-effector
/// reference point. Joint order is fixed for the lifetime of the chain;
/// angles start at mechanical zero.
#[derive(Debug, Clone)]
pub struct JointChain {
    joints: Vec<Joint>,
    end_offset: Vector3<f64>,
}

impl JointChain {
    /// Build the chain from validated parameters, all angles at mechanical
    /// zero. Axis vectors are normalized here.
    pub fn new(parameters: &ChainParameters) -> Result<Self, ParameterError> {
        parameters.validate()?;
        let joints = parameters
            .joints
            .iter()
            .map(|p| Joint {
                name: p.name.clone(),
                offset: p.offset,
                base_rotation: p.base_rotation,
                local_axis: Unit::new_normalize(p.axis),
                min_angle: p.min_angle,
                max_angle: p.max_angle,
                angle: 0.0,
            })
            .collect();
        Ok(JointChain {
            joints,
            end_offset: parameters.end_offset,
        })
    }

    /// Number of joints.
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn joint(&self, index: usize) -> &Joint {
        &self.joints[index]
    }

    /// Current angles in degrees, base to tip.
    pub fn angles(&self) -> Angles {
        self.joints.iter().map(|j| j.angle()).collect()
    }

    /// Write one joint's angle (degrees), clamped to its limits.
    pub fn set_joint_angle(&mut self, index: usize, degrees: f64) {
        self.joints[index].set_angle(degrees);
    }

    /// Add a delta (degrees) to one joint's angle, clamped to its limits.
    pub fn add_joint_angle(&mut self, index: usize, delta: f64) {
        let angle = self.joints[index].angle();
        self.joints[index].set_angle(angle + delta);
    }

    /// One base-to-tip pass computing everything the solvers need.
    /// Pure function of the current angles.
    pub fn frames(&self) -> ChainFrames {
        let mut world = Pose::identity();
        let mut pivots = Vec::with_capacity(self.dof());
        let mut axes = Vec::with_capacity(self.dof());

        for joint in &self.joints {
            world = world * Translation3::from(joint.offset);
            pivots.push(Point3::from(world.translation.vector));
            world = world * joint.rotation();
            axes.push(world.rotation * joint.local_axis.into_inner());
        }

        let end_effector = world * Point3::from(self.end_offset);
        ChainFrames {
            pivots,
            axes,
            end_effector,
        }
    }

    /// World pose of joint `index`, its own rotation included.
    pub fn joint_pose(&self, index: usize) -> Pose {
        let mut world = Pose::identity();
        for joint in &self.joints[..=index] {
            world = world * Translation3::from(joint.offset);
            world = world * joint.rotation();
        }
        world
    }

    /// World pose of the end-effector reference point. Its orientation is
    /// that of the tip joint.
    pub fn end_effector_pose(&self) -> Pose {
        let mut world = Pose::identity();
        for joint in &self.joints {
            world = world * Translation3::from(joint.offset);
            world = world * joint.rotation();
        }
        world * Translation3::from(self.end_offset)
    }

    pub fn end_effector_position(&self) -> Point3<f64> {
        Point3::from(self.end_effector_pose().translation.vector)
    }

    /// Copy of the chain state for presentation layers.
    pub fn snapshot(&self) -> PoseSnapshot {
        PoseSnapshot {
            angles: self.angles(),
            joint_poses: (0..self.dof()).map(|i| self.joint_pose(i)).collect(),
            end_effector: self.end_effector_pose(),
        }
    }
}
