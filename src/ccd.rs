//! Cyclic coordinate descent solver for fixed Cartesian targets.
//!
//! One joint is corrected at a time, sweeping from the tip back to the base;
//! distal joints dominate reach, so the tip-first order converges faster on
//! typical arms. Each correction is the signed angle, about the joint's world
//! axis, between the projected end-effector and goal directions; every other
//! joint is treated as momentarily fixed. The full correction is applied in
//! one step (no damping) — overshoot is corrected by the following sweeps and
//! by the angle clamp.

use nalgebra::Point3;

use crate::chain::JointChain;
use crate::utils::{project_onto_plane, signed_angle};

/// Below this squared norm a projected direction no longer defines a
/// correction angle and the joint is skipped for the iteration.
const PROJECTION_EPSILON: f64 = 1e-6;

/// Iterative per-joint angular correction solver ("reach this point").
#[derive(Debug, Clone)]
pub struct CcdSolver {
    /// Outer sweeps over the whole chain per solve call.
    pub iterations: usize,

    /// Position tolerance, meters. Reaching it terminates the solve early.
    pub tolerance: f64,

    /// Optional cap on the per-step correction, degrees. `None` applies the
    /// full computed correction each step, matching the original behavior;
    /// a cap trades convergence speed for less overshoot on long chains.
    pub max_step: Option<f64>,
}

impl Default for CcdSolver {
    fn default() -> Self {
        CcdSolver {
            iterations: 15,
            tolerance: 0.002,
            max_step: None,
        }
    }
}

impl CcdSolver {
    /// Drive the chain's end effector toward `goal`, mutating joint angles
    /// in place.
    ///
    /// Stops early once within tolerance. If the goal is out of reach the
    /// iteration budget simply runs out and the chain is left at the best
    /// configuration found; that is expected behavior, not an error, so
    /// callers that need to know must compare the end-effector position
    /// against the goal afterwards.
    pub fn solve(&self, chain: &mut JointChain, goal: &Point3<f64>) {
        let goal = *goal;
        for _ in 0..self.iterations {
            // Tip back to base
            for i in (0..chain.dof()).rev() {
                let frames = chain.frames();
                let pivot = frames.pivots[i];
                let axis = frames.axes[i];

                let to_end = frames.end_effector - pivot;
                let to_goal = goal - pivot;

                // Only the components in the joint's rotation plane matter
                let projected_end = project_onto_plane(&to_end, &axis);
                let projected_goal = project_onto_plane(&to_goal, &axis);

                // Degenerate: no well-defined correction for this joint now
                if projected_end.norm_squared() < PROJECTION_EPSILON
                    || projected_goal.norm_squared() < PROJECTION_EPSILON
                {
                    continue;
                }

                let mut delta = signed_angle(&projected_end, &projected_goal, &axis);
                if let Some(cap) = self.max_step {
                    delta = delta.clamp(-cap, cap);
                }

                chain.add_joint_angle(i, delta);

                // Close enough: leave all remaining joints untouched
                if (chain.end_effector_position() - goal).norm() < self.tolerance {
                    return;
                }
            }
        }
    }
}
