// RUST_LOG=debug cargo run --example arm_orientation
//
// Builds a 5-joint arm and prints every world-relative frame plus a summary
// of the scene a visualizer would draw.
use armkin::{Chain, JointParams};

fn main() {
    env_logger::init();

    let chain = Chain::from_joints(&[
        JointParams::revolute("T_01", "z", 5.0, 150.0),
        JointParams::revolute("T_12", "y", 4.0, 100.0),
        JointParams::revolute("T_23", "z", 3.0, -90.0),
        JointParams::revolute("T_34", "z", 3.0, -60.0),
        JointParams::revolute("T_45", "x", 1.5, 90.0),
    ])
    .unwrap();

    println!("{chain}\n");
    for frame in chain.frames() {
        println!("{frame}");
    }

    let scene = chain.scene();
    println!(
        "scene: {} lines, {} joint markers",
        scene.lines.len(),
        scene.markers.len()
    );
    let end = chain.end_frame();
    println!("end effector at {:?}", end.origin());
}
