use armkin::scene::Color;
use armkin::{Chain, JointParams, Point3, Scene};

fn arm() -> Chain<f64> {
    Chain::from_joints(&[
        JointParams::revolute("T_01", "z", 5.0, 150.0),
        JointParams::revolute("T_12", "y", 4.0, 100.0),
        JointParams::revolute("T_23", "z", 3.0, -90.0),
    ])
    .unwrap()
}

#[test]
fn test_scene_element_counts() {
    let chain = arm();
    let scene = chain.scene();
    let n = chain.frames().len();
    // 3 axis lines per frame, one link segment between consecutive frames
    assert_eq!(scene.lines.len(), 3 * n + (n - 1));
    assert_eq!(scene.markers.len(), n);
}

#[test]
fn test_world_frame_axes() {
    let scene = Scene::from_frames(arm().frames());
    // first three lines are the world frame's axes, drawn thicker
    let x = &scene.lines[0];
    assert_eq!(x.from, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(x.to, Point3::new(1.0, 0.0, 0.0));
    assert_eq!(x.color, Color::RED);
    assert_eq!(x.width, 2.0);
    assert_eq!(scene.lines[1].color, Color::BLUE);
    assert_eq!(scene.lines[2].color, Color::GREEN);
    // joint axes are thinner
    assert_eq!(scene.lines[3].width, 1.0);
}

#[test]
fn test_link_segments_connect_origins() {
    let chain = arm();
    let scene = chain.scene();
    let frames = chain.frames();
    let segments: Vec<_> = scene
        .lines
        .iter()
        .filter(|l| l.color == Color::BLACK)
        .collect();
    assert_eq!(segments.len(), frames.len() - 1);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.from, frames[i].origin());
        assert_eq!(segment.to, frames[i + 1].origin());
    }
}

#[test]
fn test_markers_sit_on_frame_origins() {
    let chain = arm();
    let scene = chain.scene();
    for (marker, frame) in scene.markers.iter().zip(chain.frames()) {
        assert_eq!(marker.position, frame.origin());
        assert_eq!(marker.color, Color::ORANGE);
        assert_eq!(marker.size, 9.0);
    }
}
