use anyhow::Result;
use nalgebra::Point3;
use rs_chain_kinematics::chain::JointChain;
use rs_chain_kinematics::controller::ArmController;
use rs_chain_kinematics::jog::{Axis, JogState};
use rs_chain_kinematics::kinematic_traits::Goal;
use rs_chain_kinematics::parameters::ChainParameters;
use rs_chain_kinematics::utils::{dump_angles, dump_pose};

const DT: f64 = 0.02; // 50 Hz tick

/// Usage example.
fn main() -> Result<()> {
    let parameters = load_parameters()?;
    let chain = JointChain::new(&parameters)?;
    let mut controller = ArmController::new(chain);

    println!("Mechanical zero:");
    dump_angles(&controller.chain().angles());
    dump_pose(&controller.chain().end_effector_pose());

    // Reach a fixed point with the CCD solver
    let target = Point3::new(0.5, 0.3, 0.8);
    controller.set_goal(Goal::CartesianTarget(target));
    for tick in 0..5 {
        controller.tick(DT);
        let distance = (controller.chain().end_effector_position() - target).norm();
        println!("tick {}: distance to target {:.5} m", tick, distance);
    }
    dump_angles(&controller.chain().angles());

    // Jog the end effector along +X with the damped least squares solver
    println!("Jogging +X for one second:");
    let mut jog = JogState::default();
    jog.jog(Axis::X, 1.0);
    controller.ingest(&jog);
    for _ in 0..50 {
        controller.tick(DT);
    }
    jog.stop_all();
    controller.ingest(&jog);
    controller.tick(DT); // held: no motion

    dump_angles(&controller.chain().angles());
    dump_pose(&controller.chain().end_effector_pose());
    Ok(())
}

/// A YAML chain description can be passed as the first argument; without it
/// the bundled six-axis sample arm is used.
fn load_parameters() -> Result<ChainParameters> {
    #[cfg(feature = "allow_filesystem")]
    if let Some(path) = std::env::args().nth(1) {
        use anyhow::Context;
        return ChainParameters::from_yaml_file(&path)
            .with_context(|| format!("reading chain description from {}", path));
    }
    Ok(ChainParameters::sample_six_axis())
}
