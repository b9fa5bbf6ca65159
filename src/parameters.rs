//! Static chain configuration: per-joint geometry and angle limits, plus
//! ready-made chains. See [`crate::parameters_from_file`] for reading the
//! same data from YAML.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{UnitQuaternion, Vector3};

use crate::parameter_error::ParameterError;

/// Static description of one rotary joint. All angles are in degrees.
#[derive(Debug, Clone)]
pub struct JointParameters {
    pub name: String,

    /// Pivot translation from the parent pivot (or the chain root for the
    /// first joint), expressed in the parent frame, meters.
    pub offset: Vector3<f64>,

    /// Rotation axis in the joint's own frame. Must be non-zero; it is
    /// normalized when the chain is built.
    pub axis: Vector3<f64>,

    /// Orientation of the joint at angle = 0, the mechanical zero.
    pub base_rotation: UnitQuaternion<f64>,

    pub min_angle: f64,
    pub max_angle: f64,
}

impl Default for JointParameters {
    fn default() -> Self {
        JointParameters {
            name: String::new(),
            offset: Vector3::zeros(),
            axis: Vector3::z(),
            base_rotation: UnitQuaternion::identity(),
            min_angle: -180.0,
            max_angle: 180.0,
        }
    }
}

/// Static description of a whole chain, base to tip.
#[derive(Debug, Clone)]
pub struct ChainParameters {
    pub joints: Vec<JointParameters>,

    /// End-effector reference point in the tip joint's frame, meters.
    pub end_offset: Vector3<f64>,
}

impl ChainParameters {
    /// Checks that every joint is a usable rotary degree of freedom:
    /// finite geometry, non-zero axis, `min_angle <= max_angle`.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (i, joint) in self.joints.iter().enumerate() {
            if !joint.offset.iter().all(|v| v.is_finite())
                || !joint.axis.iter().all(|v| v.is_finite())
                || !joint.min_angle.is_finite()
                || !joint.max_angle.is_finite()
            {
                return Err(ParameterError::ChainConfigurationError(format!(
                    "joint {} ({}): non-finite value in configuration",
                    i, joint.name
                )));
            }
            if joint.axis.norm_squared() < 1e-12 {
                return Err(ParameterError::ChainConfigurationError(format!(
                    "joint {} ({}): rotation axis is (near) zero",
                    i, joint.name
                )));
            }
            if joint.min_angle > joint.max_angle {
                return Err(ParameterError::ChainConfigurationError(format!(
                    "joint {} ({}): min_angle {} exceeds max_angle {}",
                    i, joint.name, joint.min_angle, joint.max_angle
                )));
            }
        }
        if !self.end_offset.iter().all(|v| v.is_finite()) {
            return Err(ParameterError::ChainConfigurationError(
                "end_offset: non-finite value".to_string(),
            ));
        }
        Ok(())
    }

    /// Planar 3R chain with unit links, all axes +Z. The mechanical zero is
    /// bent: the elbow base rotation is +90 degrees, putting the end effector
    /// at (1, 2, 0). Handy for tests and quick experiments.
    pub fn planar_three_link() -> Self {
        ChainParameters {
            joints: vec![
                JointParameters {
                    name: "base".to_string(),
                    ..JointParameters::default()
                },
                JointParameters {
                    name: "elbow".to_string(),
                    offset: Vector3::new(1.0, 0.0, 0.0),
                    base_rotation: UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
                    ..JointParameters::default()
                },
                JointParameters {
                    name: "wrist".to_string(),
                    offset: Vector3::new(1.0, 0.0, 0.0),
                    ..JointParameters::default()
                },
            ],
            end_offset: Vector3::new(1.0, 0.0, 0.0),
        }
    }

    /// A generic six-axis arm, links stacked along +Z at mechanical zero
    /// (end effector at z = 1.48), with plausible industrial joint limits.
    pub fn sample_six_axis() -> Self {
        fn joint(name: &str, offset_z: f64, axis: Vector3<f64>, min: f64, max: f64) -> JointParameters {
            JointParameters {
                name: name.to_string(),
                offset: Vector3::new(0.0, 0.0, offset_z),
                axis,
                min_angle: min,
                max_angle: max,
                ..JointParameters::default()
            }
        }

        ChainParameters {
            joints: vec![
                joint("waist", 0.33, Vector3::z(), -170.0, 170.0),
                joint("shoulder", 0.10, Vector3::y(), -120.0, 120.0),
                joint("elbow", 0.45, Vector3::y(), -150.0, 150.0),
                joint("forearm_roll", 0.12, Vector3::z(), -180.0, 180.0),
                joint("wrist_pitch", 0.30, Vector3::y(), -120.0, 120.0),
                joint("flange_roll", 0.08, Vector3::z(), -180.0, 180.0),
            ],
            end_offset: Vector3::new(0.0, 0.0, 0.10),
        }
    }
}
