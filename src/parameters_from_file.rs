//! Supports reading the chain description from a YAML file (optional)

use std::path::Path;

use nalgebra::{UnitQuaternion, Vector3};
use yaml_rust2::yaml::Yaml;
use yaml_rust2::YamlLoader;

use crate::parameter_error::ParameterError;
use crate::parameters::{ChainParameters, JointParameters};

impl ChainParameters {
    /// Read the chain description from a YAML file. A file like this is
    /// supported:
    /// ```yaml
    /// # Planar 3R test arm
    /// joints:
    ///   - name: base
    ///     offset: [0.0, 0.0, 0.0]
    ///     axis: [0, 0, 1]
    ///   - name: elbow
    ///     offset: [1.0, 0.0, 0.0]
    ///     base_rpy: [0, 0, 90.0]
    ///     min_angle: deg(-170)
    ///     max_angle: 170.0
    ///   - name: wrist
    ///     offset: [1.0, 0.0, 0.0]
    /// end_offset: [1.0, 0.0, 0.0]
    /// ```
    /// Per joint, only `offset` is required: `axis` defaults to +Z, limits
    /// to ±180 degrees and `base_rpy` to the identity. All angles are in
    /// degrees; the `deg(angle)` notation used by ROS-Industrial support
    /// packages is accepted and means the same as the plain number.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [`ChainParameters::from_yaml_file`], from an in-memory string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(e.to_string()))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty chain description".to_string()))?;

        let joints_yaml = doc["joints"]
            .as_vec()
            .ok_or_else(|| ParameterError::MissingField("joints".to_string()))?;

        let mut joints = Vec::with_capacity(joints_yaml.len());
        for (i, joint_yaml) in joints_yaml.iter().enumerate() {
            let defaults = JointParameters::default();
            let name = match joint_yaml["name"].as_str() {
                Some(name) => name.to_string(),
                None => format!("joint{}", i + 1),
            };

            if joint_yaml["offset"].is_badvalue() {
                return Err(ParameterError::MissingField(format!(
                    "joints[{}].offset",
                    i
                )));
            }
            let offset = vector3(&joint_yaml["offset"], &format!("joints[{}].offset", i))?;

            let axis = if joint_yaml["axis"].is_badvalue() {
                defaults.axis
            } else {
                vector3(&joint_yaml["axis"], &format!("joints[{}].axis", i))?
            };

            let base_rotation = if joint_yaml["base_rpy"].is_badvalue() {
                defaults.base_rotation
            } else {
                let rpy = vector3(&joint_yaml["base_rpy"], &format!("joints[{}].base_rpy", i))?;
                UnitQuaternion::from_euler_angles(
                    rpy.x.to_radians(),
                    rpy.y.to_radians(),
                    rpy.z.to_radians(),
                )
            };

            let min_angle = angle_or(
                &joint_yaml["min_angle"],
                defaults.min_angle,
                &format!("joints[{}].min_angle", i),
            )?;
            let max_angle = angle_or(
                &joint_yaml["max_angle"],
                defaults.max_angle,
                &format!("joints[{}].max_angle", i),
            )?;

            joints.push(JointParameters {
                name,
                offset,
                axis,
                base_rotation,
                min_angle,
                max_angle,
            });
        }

        let end_offset = if doc["end_offset"].is_badvalue() {
            Vector3::zeros()
        } else {
            vector3(&doc["end_offset"], "end_offset")?
        };

        let parameters = ChainParameters { joints, end_offset };
        parameters.validate()?;
        Ok(parameters)
    }
}

/// YAML numbers may come through as reals or integers.
fn number(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Real(_) => yaml.as_f64(),
        Yaml::Integer(value) => Some(*value as f64),
        _ => None,
    }
}

/// Angle in degrees: a plain number, or the `deg(x)` notation.
fn angle_or(yaml: &Yaml, default: f64, field: &str) -> Result<f64, ParameterError> {
    if yaml.is_badvalue() {
        return Ok(default);
    }
    if let Some(value) = number(yaml) {
        return Ok(value);
    }
    if let Some(text) = yaml.as_str() {
        if let Some(inner) = text
            .trim()
            .strip_prefix("deg(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            if let Ok(value) = inner.trim().parse::<f64>() {
                return Ok(value);
            }
        }
    }
    Err(ParameterError::ParseError(format!(
        "{}: expected an angle in degrees (number or deg(...))",
        field
    )))
}

fn vector3(yaml: &Yaml, field: &str) -> Result<Vector3<f64>, ParameterError> {
    let values = yaml
        .as_vec()
        .ok_or_else(|| ParameterError::ParseError(format!("{}: expected a list of 3 numbers", field)))?;
    if values.len() != 3 {
        return Err(ParameterError::InvalidLength {
            expected: 3,
            found: values.len(),
        });
    }
    let mut result = Vector3::zeros();
    for (i, value) in values.iter().enumerate() {
        result[i] = number(value).ok_or_else(|| {
            ParameterError::ParseError(format!("{}: component {} is not a number", field, i))
        })?;
    }
    Ok(result)
}
