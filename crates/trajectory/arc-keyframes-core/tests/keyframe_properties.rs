use arc_keyframes_core::{generate, Keyframer, KeyframerConfig, PathKind, Point2D, KEYFRAME_COUNT};

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn endpoints_are_exact_on_both_paths() {
    let cases = [
        // linear (inside the box)
        (Point2D::new(0.0, 0.0), Point2D::new(3.0, 3.0), 50.0),
        // quadratic
        (Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), 50.0),
        (Point2D::new(17.3, 250.9), Point2D::new(-80.1, 12.7), 33.0),
        (Point2D::new(0.1, 0.2), Point2D::new(300.7, -400.3), -20.0),
        // vertical fallback
        (Point2D::new(5.0, 0.0), Point2D::new(5.0, 100.0), 10.0),
    ];
    for (source, target, elevation) in cases {
        let frames = generate(source, target, elevation);
        assert_eq!(frames.len(), KEYFRAME_COUNT);
        assert_eq!(frames[0], source, "first keyframe for {source:?} -> {target:?}");
        assert_eq!(frames[9], target, "last keyframe for {source:?} -> {target:?}");
    }
}

#[test]
fn nearby_endpoints_follow_a_straight_line() {
    let frames = generate(Point2D::new(0.0, 0.0), Point2D::new(3.0, 3.0), 50.0);
    for (i, p) in frames.iter().enumerate() {
        assert_eq!(p.x, p.y, "sample {i} off the y = x segment");
        assert!(approx(p.x, 3.0 * i as f64 / 9.0, 1e-12), "sample {i} x = {}", p.x);
    }
}

#[test]
fn distant_endpoints_arc_through_the_apex() {
    let source = Point2D::new(0.0, 0.0);
    let target = Point2D::new(100.0, 0.0);
    let kf = Keyframer::default();
    let path = kf.plan(source, target, 50.0);
    assert_eq!(path.kind(), PathKind::Quadratic);
    // Apex of the fit is the control midpoint.
    assert!(approx(path.point_at(0.5).y, -50.0, 1e-9));

    let frames = generate(source, target, 50.0);
    for i in [4, 5] {
        assert!(frames[i].y < source.y, "sample {i} y = {}", frames[i].y);
        assert!(frames[i].y < target.y);
        assert!(frames[i].y > -50.0 - 1e-9);
    }
    // Symmetric arc: mirrored samples share a height.
    for i in 0..5 {
        assert!(approx(frames[i].y, frames[9 - i].y, 1e-9));
    }
}

#[test]
fn vertical_motion_stays_finite() {
    let frames = generate(Point2D::new(5.0, 0.0), Point2D::new(5.0, 100.0), 10.0);
    for (i, p) in frames.iter().enumerate() {
        assert!(p.is_finite(), "sample {i} = {p:?}");
        assert!(approx(p.x, 5.0, 1e-12));
        assert!(approx(p.y, 100.0 * i as f64 / 9.0, 1e-9));
    }
}

#[test]
fn nearly_vertical_motion_stays_finite() {
    let frames = generate(Point2D::new(5.0, 0.0), Point2D::new(5.0 + 1e-9, 100.0), 10.0);
    assert!(frames.iter().all(Point2D::is_finite));
}

#[test]
fn x_is_monotonic_outside_the_box() {
    let cases = [
        (Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), 50.0),
        (Point2D::new(10.0, 200.0), Point2D::new(-300.0, 0.0), 40.0),
        (Point2D::new(-2.0, 0.0), Point2D::new(1.0, 80.0), 5.0),
    ];
    for (source, target, elevation) in cases {
        let frames = generate(source, target, elevation);
        let increasing = target.x >= source.x;
        for w in frames.windows(2) {
            if increasing {
                assert!(w[1].x >= w[0].x, "{:?} then {:?}", w[0], w[1]);
            } else {
                assert!(w[1].x <= w[0].x, "{:?} then {:?}", w[0], w[1]);
            }
        }
    }
}

#[test]
fn apex_is_relative_to_source_height() {
    // Target far below the source: the control point is still 30 above the source.
    let source = Point2D::new(0.0, 100.0);
    let target = Point2D::new(60.0, 400.0);
    let path = Keyframer::default().plan(source, target, 30.0);
    assert!(approx(path.point_at(0.5).y, 70.0, 1e-9));
}

#[test]
fn configured_sample_count() {
    let kf = Keyframer::new(KeyframerConfig {
        sample_count: 25,
        ..KeyframerConfig::default()
    })
    .expect("valid config");
    let source = Point2D::new(0.0, 0.0);
    let target = Point2D::new(240.0, 60.0);
    let seq = kf.keyframes(source, target, 80.0);
    assert_eq!(seq.len(), 25);
    assert_eq!(seq.kind(), PathKind::Quadratic);
    assert_eq!(seq.first(), source);
    assert_eq!(seq.last(), target);
}

#[test]
fn configured_box_widens_linear_policy() {
    let kf = Keyframer::new(KeyframerConfig {
        degenerate_extent: 50.0,
        ..KeyframerConfig::default()
    })
    .expect("valid config");
    let seq = kf.keyframes(Point2D::new(0.0, 0.0), Point2D::new(40.0, 10.0), 30.0);
    assert_eq!(seq.kind(), PathKind::Linear);
}

#[test]
fn default_keyframer_matches_generate() {
    let source = Point2D::new(12.0, 34.0);
    let target = Point2D::new(210.0, -8.0);
    let seq = Keyframer::default().keyframes(source, target, 25.0);
    assert_eq!(seq.points(), &generate(source, target, 25.0)[..]);
}

#[test]
fn near_vertical_motion_stays_within_the_arc_span() {
    let cases = [
        (Point2D::new(1e6, 0.0), Point2D::new(1e6 + 1e-5, 100.0), 10.0),
        (Point2D::new(1e4, 0.0), Point2D::new(1e4 + 1e-4, 100.0), 10.0),
        (Point2D::new(0.0, 0.0), Point2D::new(1e-5, 100.0), 10.0),
        (Point2D::new(-5e5, 40.0), Point2D::new(-5e5 - 0.3, -200.0), 25.0),
    ];
    for (source, target, elevation) in cases {
        let apex = source.y - elevation;
        let dy = (target.y - source.y).abs();
        let lo = source.y.min(target.y).min(apex) - dy;
        let hi = source.y.max(target.y).max(apex) + dy;
        for (i, p) in generate(source, target, elevation).iter().enumerate() {
            assert!(
                p.y >= lo && p.y <= hi,
                "{source:?} -> {target:?}: sample {i} y = {} outside [{lo}, {hi}]",
                p.y
            );
        }
    }
}

#[test]
fn arc_shape_does_not_depend_on_screen_offset() {
    let at_origin = generate(Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), 50.0);
    let offset = generate(Point2D::new(1e6, 0.0), Point2D::new(1e6 + 100.0, 0.0), 50.0);
    for i in 0..KEYFRAME_COUNT {
        assert_eq!(offset[i].y, at_origin[i].y, "sample {i}");
    }
    for i in 0..5 {
        assert!(approx(offset[i].y, offset[9 - i].y, 1e-9));
    }
}

#[test]
fn non_finite_input_passes_through() {
    let frames = generate(Point2D::new(f64::NAN, 0.0), Point2D::new(100.0, 0.0), 50.0);
    assert_eq!(frames.len(), KEYFRAME_COUNT);
    assert!(frames[0].x.is_nan());

    let frames = generate(Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), f64::INFINITY);
    assert_eq!(frames.len(), KEYFRAME_COUNT);
    assert_eq!(frames[0], Point2D::new(0.0, 0.0));
}
