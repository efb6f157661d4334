// Host-side tests for landmark parsing and gesture classification.

use wish_tree_core::*;

/// An upright hand: wrist low in the frame, fingers extended upward, thumb
/// and index well apart.
fn open_hand() -> [Landmark; LANDMARK_COUNT] {
    let mut pts = [Landmark::new(0.5, 0.6); LANDMARK_COUNT];
    pts[WRIST] = Landmark::new(0.5, 0.9);
    pts[THUMB_TIP] = Landmark::new(0.35, 0.6);
    pts[INDEX_TIP] = Landmark::new(0.45, 0.35);
    pts[MIDDLE_MCP] = Landmark::new(0.4, 0.65);
    pts[MIDDLE_TIP] = Landmark::new(0.5, 0.3);
    pts[RING_TIP] = Landmark::new(0.55, 0.32);
    pts
}

#[test]
fn open_hand_is_open_and_not_pinching() {
    let s = classify(&HandLandmarks::new(open_hand()));
    assert!(s.is_open);
    assert!(!s.is_pinching);
}

#[test]
fn thumb_touching_index_is_a_pinch_and_never_open() {
    let mut pts = open_hand();
    pts[THUMB_TIP] = Landmark::new(0.45, 0.37);
    let s = classify(&HandLandmarks::new(pts));
    assert!(s.is_pinching);
    // fingers are still above the wrist but a pinch wins
    assert!(!s.is_open);
}

#[test]
fn pinch_threshold_is_strict() {
    let mut pts = open_hand();
    pts[THUMB_TIP] = Landmark::new(0.0, 0.0);
    pts[INDEX_TIP] = Landmark::new(0.06, 0.0);
    assert!(!classify(&HandLandmarks::new(pts)).is_pinching);
    pts[INDEX_TIP] = Landmark::new(0.04, 0.0);
    assert!(classify(&HandLandmarks::new(pts)).is_pinching);
}

#[test]
fn pinch_distance_ignores_depth() {
    let mut pts = open_hand();
    pts[THUMB_TIP] = Landmark {
        x: 0.45,
        y: 0.36,
        z: -0.5,
    };
    pts[INDEX_TIP].z = 0.5;
    assert!(classify(&HandLandmarks::new(pts)).is_pinching);
}

#[test]
fn curled_fingers_are_neither_open_nor_pinching() {
    let mut pts = open_hand();
    pts[MIDDLE_TIP] = Landmark::new(0.5, 0.95);
    let s = classify(&HandLandmarks::new(pts));
    assert!(!s.is_open);
    assert!(!s.is_pinching);

    // only one finger below the wrist is enough to fail the open test
    let mut pts = open_hand();
    pts[RING_TIP] = Landmark::new(0.55, 0.92);
    assert!(!classify(&HandLandmarks::new(pts)).is_open);
}

#[test]
fn position_is_mirrored_middle_knuckle() {
    let s = classify(&HandLandmarks::new(open_hand()));
    assert!((s.x - 0.6).abs() < 1e-6);
    assert!((s.y - 0.65).abs() < 1e-6);
}

#[test]
fn no_hand_is_an_absent_signal() {
    assert_eq!(classify_frame(None), None);
    let hand = HandLandmarks::new(open_hand());
    assert!(classify_frame(Some(&hand)).is_some());
}

#[test]
fn from_flat_reads_xyz_and_xy_layouts() {
    let pts = open_hand();
    let xyz: Vec<f32> = pts.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
    let xy: Vec<f32> = pts.iter().flat_map(|p| [p.x, p.y]).collect();
    let a = HandLandmarks::from_flat(&xyz, 3).expect("xyz parses");
    let b = HandLandmarks::from_flat(&xy, 2).expect("xy parses");
    assert_eq!(a.points, pts);
    assert_eq!(classify(&a), classify(&b));
}

#[test]
fn from_flat_rejects_malformed_frames() {
    assert_eq!(
        HandLandmarks::from_flat(&[0.0; 63], 4),
        Err(LandmarkError::UnsupportedStride(4))
    );
    assert_eq!(
        HandLandmarks::from_flat(&[0.0; 60], 3),
        Err(LandmarkError::WrongLength {
            expected: 63,
            actual: 60
        })
    );
    let mut values = [0.5_f32; 42];
    values[11] = f32::NAN;
    assert_eq!(
        HandLandmarks::from_flat(&values, 2),
        Err(LandmarkError::NonFinite(5))
    );
}
