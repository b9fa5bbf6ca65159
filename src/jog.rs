//! Goal source adapters for jog-style control: press-and-hold velocity
//! jogging and step-wise target nudging. These are thin ingestion shims in
//! front of the solvers, the shape a UI button panel or a remote command
//! channel would drive.

use nalgebra::{Point3, Vector3};

use crate::chain::JointChain;
use crate::kinematic_traits::{Goal, GoalSource};

/// Cartesian jog axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Press-and-hold jog state: each axis carries a direction in {-1, 0, +1},
/// combined into a velocity command by a fixed axis speed. Releasing all
/// axes yields the zero vector, which the velocity solver treats as idle.
#[derive(Debug, Clone)]
pub struct JogState {
    /// Speed per engaged axis, m/s.
    pub cartesian_speed: f64,
    velocity: Vector3<f64>,
}

impl Default for JogState {
    fn default() -> Self {
        JogState::new(0.05)
    }
}

impl JogState {
    pub fn new(cartesian_speed: f64) -> Self {
        JogState {
            cartesian_speed,
            velocity: Vector3::zeros(),
        }
    }

    /// Engage an axis with direction +1 or -1 (0 stops it). Axes are
    /// independent; jogging X does not affect a held Y.
    pub fn jog(&mut self, axis: Axis, direction: f64) {
        self.velocity[axis.index()] = direction * self.cartesian_speed;
    }

    /// Release one axis.
    pub fn stop(&mut self, axis: Axis) {
        self.velocity[axis.index()] = 0.0;
    }

    /// Release everything.
    pub fn stop_all(&mut self) {
        self.velocity = Vector3::zeros();
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }
}

impl GoalSource for JogState {
    fn current_goal(&self) -> Goal {
        Goal::CartesianVelocity(self.velocity)
    }
}

/// Step-wise target jogging: each nudge moves a persistent Cartesian goal
/// by a fixed step, and the CCD solver chases that goal. Seeded from the
/// arm's current end-effector position so the first nudge moves relative
/// to where the arm already is.
#[derive(Debug, Clone)]
pub struct TargetJog {
    /// Goal displacement per nudge, meters.
    pub jog_step: f64,
    goal: Point3<f64>,
}

impl TargetJog {
    pub fn new(start: Point3<f64>) -> Self {
        TargetJog {
            jog_step: 0.01,
            goal: start,
        }
    }

    /// Start from the chain's current end-effector position.
    pub fn from_chain(chain: &JointChain) -> Self {
        TargetJog::new(chain.end_effector_position())
    }

    /// Move the goal one step in `direction` (unit vectors give exactly
    /// `jog_step` of displacement).
    pub fn nudge(&mut self, direction: Vector3<f64>) {
        self.goal += direction * self.jog_step;
    }

    pub fn goal(&self) -> Point3<f64> {
        self.goal
    }
}

impl GoalSource for TargetJog {
    fn current_goal(&self) -> Goal {
        Goal::CartesianTarget(self.goal)
    }
}
