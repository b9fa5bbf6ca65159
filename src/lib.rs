//! Motion control for serial chains of one-axis rotary joints.
//!
//! The crate drives the end effector of an N-joint arm toward a commanded
//! Cartesian goal. Two goal kinds are supported, each with its own solver:
//!
//! - A fixed Cartesian point, reached with cyclic coordinate descent
//!   ([`ccd::CcdSolver`]): one joint is corrected at a time, sweeping from the
//!   tip back to the base, until the end effector is within tolerance.
//! - A Cartesian jog velocity (press-and-hold style commands), followed with a
//!   damped-least-squares pseudo-inverse of the instantaneous Jacobian
//!   ([`jacobian::JogSolver`]). The damping term keeps the solve finite when
//!   the arm passes through singular configurations.
//!
//! # Features
//!
//! - Explicit [`chain::JointChain`] data structure: an ordered array of joints
//!   with forward kinematics recomputed from angles on demand. No live object
//!   graph, so chain state is trivially snapshot-able.
//! - Per-joint angle limits, in degrees, enforced on every write. A solver
//!   cannot leave a joint outside `[min_angle, max_angle]`.
//! - Both numeric edge cases (degenerate CCD projection, near-singular
//!   Jacobian) degrade to "no motion this tick" rather than failing.
//! - Goal ingestion through the small [`kinematic_traits::GoalSource`] trait;
//!   jog button adapters in [`jog`].
//! - [`controller::ArmController`] runs one synchronous solve per simulation
//!   tick, with `dt` always an explicit parameter, never an ambient clock.
//! - Chain geometry can be read from a YAML description
//!   (`allow_filesystem` feature).

pub mod kinematic_traits;

pub mod chain;

pub mod ccd;
pub mod jacobian;

pub mod jog;
pub mod controller;

pub mod parameters;
pub mod parameter_error;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

#[path = "utils/utils.rs"]
pub mod utils;

#[cfg(test)]
mod tests;
