use approx::assert_abs_diff_eq;
use armkin::{Chain, Error, Frame, JointParams, Matrix4};

fn demo_joints() -> Vec<JointParams<f64>> {
    vec![
        JointParams::revolute("T_01", "z", 5.0, 150.0),
        JointParams::revolute("T_12", "y", 4.0, 100.0),
        JointParams::revolute("T_23", "z", 3.0, -90.0),
        JointParams::revolute("T_34", "z", 3.0, -60.0),
        JointParams::revolute("T_45", "x", 1.5, 90.0),
    ]
}

#[test]
fn test_composed_is_matrix_product() {
    let t_01 = Frame::elementary("T_01", "z", 5.0, Some(150.0)).unwrap();
    let t_12 = Frame::elementary("T_12", "y", 4.0, Some(100.0)).unwrap();
    let t_02 = Frame::composed("T_02", &t_01, &t_12);
    assert_eq!(*t_02.matrix(), t_01.matrix() * t_12.matrix());

    // hand-computed entries, with c1 = -0.86603, c2 = -0.17365:
    //   (0,0) = c1 * c2             = 0.1503861095
    //   (0,3) = c1 * (4 * c2) + 5 * c1 = -3.728605562
    let m = t_02.matrix();
    assert_abs_diff_eq!(m[(0, 0)], 0.150_386_109_5, epsilon = 1e-9);
    assert_abs_diff_eq!(m[(0, 3)], -3.728_605_562, epsilon = 1e-9);
}

#[test]
fn test_composition_associative() {
    let a = Frame::elementary("a", "z", 5.0, Some(150.0)).unwrap();
    let b = Frame::elementary("b", "y", 4.0, Some(100.0)).unwrap();
    let c = Frame::elementary("c", "x", 3.0, Some(-60.0)).unwrap();
    let left = Frame::composed("left", &Frame::composed("ab", &a, &b), &c);
    let right = Frame::composed("right", &a, &Frame::composed("bc", &b, &c));
    assert!((left.matrix() - right.matrix()).norm() < 1e-12);
}

#[test]
fn test_identity_is_composition_unit() {
    let t = Frame::elementary("t", "y", 4.0, Some(100.0)).unwrap();
    let world = Frame::world();
    let left = Frame::composed("l", &world, &t);
    let right = Frame::composed("r", &t, &world);
    assert_eq!(left.matrix(), t.matrix());
    assert_eq!(right.matrix(), t.matrix());
}

#[test]
fn test_chain_assembly_order() {
    let chain = Chain::from_joints(&demo_joints()).unwrap();
    let frames = chain.frames();
    assert_eq!(frames.len(), 6);

    // world frame is the identity and always first
    assert_eq!(frames[0].name, "world");
    assert_eq!(*frames[0].matrix(), Matrix4::identity());

    // frame 1 is the first joint's elementary transform itself
    let t_01 = Frame::elementary("T_01", "z", 5.0, Some(150.0)).unwrap();
    assert_eq!(frames[1].matrix(), t_01.matrix());

    // frame i is the previous *frame* composed with joint i, not the
    // previous joint's elementary transform
    let t_12 = Frame::elementary("T_12", "y", 4.0, Some(100.0)).unwrap();
    let t_02 = Frame::composed("T_02", &frames[1], &t_12);
    assert_eq!(frames[2].matrix(), t_02.matrix());

    let names = frames.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["world", "T_01", "T_12", "T_23", "T_34", "T_45"]);
    assert_eq!(chain.end_frame().name, "T_45");
}

#[test]
fn test_chain_display() {
    let chain = Chain::from_joints(&demo_joints()[..2]).unwrap();
    assert_eq!(chain.to_string(), "Frame List: world, T_01, T_12");
}

#[test]
fn test_chain_halts_on_first_invalid_joint() {
    let joints = vec![
        JointParams::revolute("T_01", "z", 5.0, 150.0),
        // prismatic joints take no angle
        JointParams {
            name: "broken".to_owned(),
            axis_code: "i".to_owned(),
            link_length: 2.0,
            angle_degrees: Some(45.0),
        },
        JointParams::revolute("T_23", "z", 3.0, -90.0),
    ];
    let err = Chain::from_joints(&joints).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidJointSpecification { ref joint, .. } if joint == "broken"
    ));
}

#[test]
fn test_empty_chain_is_world_only() {
    let chain = Chain::<f64>::from_joints(&[]).unwrap();
    assert_eq!(chain.frames().len(), 1);
    assert_eq!(chain.end_frame().name, "world");
}

#[test]
fn test_prismatic_joint_offsets_chain() {
    let chain = Chain::from_joints(&[
        JointParams::prismatic("slide", 2.5),
        JointParams::revolute("T_12", "z", 1.0, 90.0),
    ])
    .unwrap();
    let end = chain.end_frame().origin();
    // slide 2.5 along X, then a zero-x-extent link pointing along +Y
    assert_abs_diff_eq!(end.x, 2.5, epsilon = 1e-9);
    assert_abs_diff_eq!(end.y, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(end.z, 0.0, epsilon = 1e-9);
}
