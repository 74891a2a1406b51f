use approx::assert_abs_diff_eq;
use chart_geometry::core::Point;
use chart_geometry::path::PathCommand;
use chart_geometry::polar::{
    PolarSegment, angle_of_point, arc_path, create_segment_path, find_segment_at_point,
    is_angle_in_sweep, is_point_in_segment, normalize_angle, normalize_angle_signed,
    point_on_circle, points_on_arc, segment_centroid, segment_outer_midpoint,
};

const CENTER: Point = Point::new(200.0, 150.0);

#[test]
fn normalize_angle_wraps_into_half_open_range() {
    assert_abs_diff_eq!(normalize_angle(370.0), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(normalize_angle(-90.0), 270.0, epsilon = 1e-9);
    assert_abs_diff_eq!(normalize_angle(720.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(normalize_angle(f64::NAN), 0.0, epsilon = 1e-12);

    assert_abs_diff_eq!(normalize_angle_signed(270.0), -90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(normalize_angle_signed(180.0), -180.0, epsilon = 1e-9);
}

#[test]
fn point_on_circle_follows_screen_clockwise_convention() {
    let right = point_on_circle(CENTER, 10.0, 0.0);
    let down = point_on_circle(CENTER, 10.0, 90.0);

    assert_abs_diff_eq!(right.x, 210.0, epsilon = 1e-9);
    assert_abs_diff_eq!(right.y, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(down.x, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(down.y, 160.0, epsilon = 1e-9);
    assert_eq!(point_on_circle(CENTER, 0.0, 123.0), CENTER);
}

#[test]
fn angle_of_point_inverts_point_on_circle() {
    for angle in [0.0, 30.0, 90.0, 179.0, 181.0, 270.0, 359.5] {
        let point = point_on_circle(CENTER, 42.0, angle);
        assert_abs_diff_eq!(angle_of_point(CENTER, point), angle, epsilon = 1e-9);
    }
}

#[test]
fn points_on_arc_handles_segment_counts() {
    assert!(points_on_arc(CENTER, 10.0, 0.0, 90.0, 0).is_empty());

    let single = points_on_arc(CENTER, 10.0, 0.0, 90.0, 1);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0], point_on_circle(CENTER, 10.0, 45.0));

    let many = points_on_arc(CENTER, 10.0, 0.0, 90.0, 4);
    assert_eq!(many.len(), 5);
    assert_eq!(many[0], point_on_circle(CENTER, 10.0, 0.0));
    assert_eq!(many[4], point_on_circle(CENTER, 10.0, 90.0));
}

#[test]
fn sweep_membership_wraps_past_zero() {
    assert!(is_angle_in_sweep(5.0, 350.0, 20.0));
    assert!(is_angle_in_sweep(355.0, 350.0, 20.0));
    assert!(!is_angle_in_sweep(15.0, 350.0, 20.0));
    assert!(is_angle_in_sweep(100.0, 120.0, -30.0));
    assert!(is_angle_in_sweep(42.0, 0.0, 360.0));
}

#[test]
fn point_in_segment_respects_wraparound_and_radii() {
    let inside = point_on_circle(CENTER, 50.0, 5.0);
    assert!(is_point_in_segment(inside, CENTER, 20.0, 80.0, 350.0, 20.0));

    let too_close = point_on_circle(CENTER, 10.0, 5.0);
    assert!(!is_point_in_segment(too_close, CENTER, 20.0, 80.0, 350.0, 20.0));

    let too_far = point_on_circle(CENTER, 90.0, 5.0);
    assert!(!is_point_in_segment(too_far, CENTER, 20.0, 80.0, 350.0, 20.0));

    let wrong_angle = point_on_circle(CENTER, 50.0, 30.0);
    assert!(!is_point_in_segment(wrong_angle, CENTER, 20.0, 80.0, 350.0, 20.0));
}

#[test]
fn find_segment_returns_first_match_or_none() {
    let segments = vec![
        PolarSegment::new(0.0, 90.0, 0.0, 100.0),
        PolarSegment::new(90.0, 90.0, 0.0, 100.0),
        PolarSegment::new(180.0, 180.0, 0.0, 100.0),
    ];

    let in_second = point_on_circle(CENTER, 50.0, 135.0);
    assert_eq!(find_segment_at_point(in_second, CENTER, &segments), Some(1));

    // The shared 90° edge belongs to the earlier slice.
    let on_edge = point_on_circle(CENTER, 50.0, 90.0);
    assert_eq!(find_segment_at_point(on_edge, CENTER, &segments), Some(0));

    let outside = point_on_circle(CENTER, 150.0, 45.0);
    assert_eq!(find_segment_at_point(outside, CENTER, &segments), None);
    assert_eq!(find_segment_at_point(CENTER, CENTER, &[]), None);
}

#[test]
fn segment_anchors_sit_on_mid_angle() {
    let segment = PolarSegment::new(0.0, 90.0, 40.0, 80.0);

    let centroid = segment_centroid(CENTER, segment);
    assert_eq!(centroid, point_on_circle(CENTER, 60.0, 45.0));

    let outer = segment_outer_midpoint(CENTER, segment);
    assert_abs_diff_eq!(outer.distance_to(CENTER), 80.0, epsilon = 1e-9);
}

#[test]
fn pie_slice_path_fills_the_wedge() {
    let path = create_segment_path(CENTER, 0.0, 100.0, 0.0, 90.0, 0.0);

    assert_eq!(path.commands().first(), Some(&PathCommand::MoveTo(CENTER)));
    assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    assert!(path.fill_contains(point_on_circle(CENTER, 60.0, 45.0)));
    assert!(!path.fill_contains(point_on_circle(CENTER, 60.0, 135.0)));
    assert!(!path.fill_contains(point_on_circle(CENTER, 110.0, 45.0)));
}

#[test]
fn donut_segment_path_excludes_the_hole() {
    let path = create_segment_path(CENTER, 40.0, 100.0, 350.0, 40.0, 0.0);

    assert!(path.fill_contains(point_on_circle(CENTER, 70.0, 10.0)));
    assert!(!path.fill_contains(point_on_circle(CENTER, 20.0, 10.0)));
    assert!(!path.fill_contains(CENTER));
}

#[test]
fn full_circle_donut_is_an_annulus() {
    let path = create_segment_path(CENTER, 50.0, 100.0, 0.0, 360.0, 0.0);

    assert_eq!(path.contour_count(), 2);
    assert!(path.fill_contains(point_on_circle(CENTER, 75.0, 200.0)));
    assert!(!path.fill_contains(point_on_circle(CENTER, 25.0, 200.0)));
}

#[test]
fn rounded_corners_stay_inside_the_sharp_wedge() {
    let sharp = create_segment_path(CENTER, 30.0, 100.0, 0.0, 60.0, 0.0);
    let rounded = create_segment_path(CENTER, 30.0, 100.0, 0.0, 60.0, 12.0);

    assert!(rounded.commands().len() > sharp.commands().len());
    // The sharp outer corner is cut off by rounding.
    let corner = point_on_circle(CENTER, 99.0, 1.0);
    assert!(sharp.fill_contains(corner));
    assert!(!rounded.fill_contains(corner));
    assert!(rounded.fill_contains(point_on_circle(CENTER, 65.0, 30.0)));
}

#[test]
fn degenerate_segments_produce_empty_paths() {
    assert!(create_segment_path(CENTER, 0.0, 100.0, 0.0, 0.0, 0.0).is_empty());
    assert!(create_segment_path(CENTER, 0.0, 0.0, 0.0, 90.0, 0.0).is_empty());
    assert!(create_segment_path(CENTER, 0.0, 100.0, f64::NAN, 90.0, 0.0).is_empty());
}

#[test]
fn negative_sweep_draws_the_same_wedge() {
    let forward = create_segment_path(CENTER, 0.0, 100.0, 30.0, 60.0, 0.0);
    let backward = create_segment_path(CENTER, 0.0, 100.0, 90.0, -60.0, 0.0);

    let probe = point_on_circle(CENTER, 50.0, 60.0);
    assert!(forward.fill_contains(probe));
    assert!(backward.fill_contains(probe));
}

#[test]
fn arc_path_hugs_the_circle() {
    let path = arc_path(CENTER, 80.0, 10.0, 200.0);

    assert_eq!(path.contour_count(), 1);
    for contour in path.flatten(32) {
        for point in contour.points {
            assert!((point.distance_to(CENTER) - 80.0).abs() < 0.05);
        }
    }
}
