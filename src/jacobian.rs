//! Damped least squares velocity follower for Cartesian jog commands.
//!
//! Converts a commanded end-effector linear velocity into joint angle
//! updates, once per tick: `dq = Jᵗ (J Jᵗ + λ² I)⁻¹ v·dt`, with `J` the 3×N
//! linear-velocity Jacobian. The damping term `λ²` keeps the 3×3 solve
//! well-conditioned as the chain approaches a singular configuration,
//! trading a little tracking accuracy for bounded joint velocities — which
//! is why this form is used instead of the plain pseudo-inverse: an arm
//! passes through or near singular poses all the time while jogging.

use nalgebra::{Matrix3, Matrix3xX, Vector3};

use crate::chain::JointChain;

/// Below this determinant magnitude the damped system is treated as
/// singular and the tick produces no motion.
const DET_EPSILON: f64 = 1e-9;

/// Differential solver for "track this Cartesian velocity" goals. It is a
/// velocity follower, not a point solver: there is no convergence criterion
/// and it runs for as long as a non-zero velocity is commanded.
#[derive(Debug, Clone)]
pub struct JogSolver {
    /// Damping coefficient λ. Larger values are more robust near
    /// singularities but track the commanded velocity less exactly.
    pub damping: f64,
}

impl Default for JogSolver {
    fn default() -> Self {
        JogSolver { damping: 0.1 }
    }
}

impl JogSolver {
    /// One tick of jogging: move the end effector by `velocity * dt`,
    /// mutating joint angles in place.
    ///
    /// An exactly zero velocity is the defined stop state and performs no
    /// work at all. A near-singular Jacobian (even after damping) also
    /// produces no motion for the tick — fail safe instead of a division
    /// blow-up.
    pub fn solve(&self, chain: &mut JointChain, velocity: &Vector3<f64>, dt: f64) {
        if *velocity == Vector3::zeros() {
            return;
        }

        let n = chain.dof();
        let frames = chain.frames();

        // Column i: linear velocity at the end effector per unit angular
        // velocity of joint i
        let mut jacobian = Matrix3xX::<f64>::zeros(n);
        for i in 0..n {
            let lever = frames.end_effector - frames.pivots[i];
            jacobian.set_column(i, &frames.axes[i].cross(&lever));
        }

        let jt = jacobian.transpose();
        let mut jjt: Matrix3<f64> = &jacobian * &jt;
        for k in 0..3 {
            jjt[(k, k)] += self.damping * self.damping;
        }

        if jjt.determinant().abs() < DET_EPSILON {
            return;
        }
        let inverse = match jjt.try_inverse() {
            Some(inverse) => inverse,
            None => return,
        };

        let dx = velocity * dt;
        let temp = inverse * dx;
        let dq = &jt * temp;

        for i in 0..n {
            chain.add_joint_angle(i, dq[i].to_degrees());
        }
    }
}
