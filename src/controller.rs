//! Per-tick orchestration: one controller owns one chain, reads the current
//! goal, runs the matching solver and exposes the resulting pose to the
//! outside. Single-threaded, single-writer: the controller is the only
//! component that mutates joint angles, once per externally driven tick.

use crate::ccd::CcdSolver;
use crate::chain::{JointChain, PoseSnapshot};
use crate::jacobian::JogSolver;
use crate::kinematic_traits::{Goal, GoalSource};

/// Motion controller for one arm.
pub struct ArmController {
    chain: JointChain,
    /// Solver used for [`Goal::CartesianTarget`].
    pub ccd: CcdSolver,
    /// Solver used for [`Goal::CartesianVelocity`].
    pub jog: JogSolver,
    goal: Goal,
}

impl ArmController {
    /// Wrap a chain with default solvers and the neutral (hold) goal.
    pub fn new(chain: JointChain) -> Self {
        ArmController {
            chain,
            ccd: CcdSolver::default(),
            jog: JogSolver::default(),
            goal: Goal::hold(),
        }
    }

    pub fn chain(&self) -> &JointChain {
        &self.chain
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Replace the current goal.
    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = goal;
    }

    /// Pull the goal from a source. When several sources feed one arm the
    /// last ingest before the tick wins.
    pub fn ingest(&mut self, source: &impl GoalSource) {
        self.goal = source.current_goal();
    }

    /// One simulation tick: run the solver matching the current goal.
    /// `dt` is supplied by the caller's clock; the controller keeps no
    /// time of its own.
    pub fn tick(&mut self, dt: f64) {
        match self.goal {
            Goal::CartesianTarget(target) => self.ccd.solve(&mut self.chain, &target),
            Goal::CartesianVelocity(velocity) => self.jog.solve(&mut self.chain, &velocity, dt),
        }
    }

    /// Direct forward control (UI slider, remote joint command). Angle in
    /// degrees, clamped like every other write. Out-of-range indices are
    /// ignored at this boundary; the chain itself assumes valid indices.
    pub fn set_joint_angle(&mut self, index: usize, degrees: f64) {
        if index >= self.chain.dof() {
            return;
        }
        self.chain.set_joint_angle(index, degrees);
    }

    /// Pose snapshot for presentation layers, taken after the last solve.
    pub fn snapshot(&self) -> PoseSnapshot {
        self.chain.snapshot()
    }
}
