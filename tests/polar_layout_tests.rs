use chart_geometry::core::{Point, Rect, Size};
use chart_geometry::polar::{
    LabelAnchor, LabelAnchorOptions, PolarLayoutOptions, PolarSegment, calculate_optimal_layout,
    distribute_labels, label_anchor, segments_from_values,
};
use chart_geometry::render::TextHAlign;

#[test]
fn layout_centers_and_scales_radius() {
    let layout = calculate_optimal_layout(Size::new(400.0, 300.0), PolarLayoutOptions::default());

    assert_eq!(layout.center, Point::new(200.0, 150.0));
    assert!((layout.radius - 120.0).abs() <= 1e-9);
    assert!((layout.inner_radius(0.5) - 60.0).abs() <= 1e-9);
}

#[test]
fn layout_reserves_padding_and_outside_label_space() {
    let options = PolarLayoutOptions {
        outer_radius_ratio: 1.0,
        has_outside_labels: true,
        label_space: 30.0,
        padding: 10.0,
    };
    let layout = calculate_optimal_layout(Size::new(400.0, 300.0), options);
    assert!((layout.radius - 110.0).abs() <= 1e-9);

    let ignored_labels = PolarLayoutOptions {
        has_outside_labels: false,
        ..options
    };
    let layout = calculate_optimal_layout(Size::new(400.0, 300.0), ignored_labels);
    assert!((layout.radius - 140.0).abs() <= 1e-9);
}

#[test]
fn layout_radius_never_goes_negative() {
    let options = PolarLayoutOptions {
        padding: 500.0,
        ..PolarLayoutOptions::default()
    };
    let layout = calculate_optimal_layout(Size::new(100.0, 100.0), options);
    assert_eq!(layout.radius, 0.0);
}

#[test]
fn layout_options_load_from_partial_json() {
    let options: PolarLayoutOptions =
        serde_json::from_str(r#"{"padding":4.0}"#).expect("parse layout options");
    assert!((options.outer_radius_ratio - 0.8).abs() <= 1e-12);
    assert!(!options.has_outside_labels);
}

#[test]
fn segments_from_values_split_the_circle_proportionally() {
    let segments = segments_from_values(&[1.0, 1.0, 2.0], -90.0, 0.0, 100.0, 0.0);

    assert_eq!(segments.len(), 3);
    assert!((segments[0].start_angle_deg + 90.0).abs() <= 1e-9);
    assert!((segments[0].sweep_angle_deg - 90.0).abs() <= 1e-9);
    assert!((segments[1].start_angle_deg - 0.0).abs() <= 1e-9);
    assert!((segments[2].sweep_angle_deg - 180.0).abs() <= 1e-9);
    assert!((segments[2].end_angle_deg() - 270.0).abs() <= 1e-9);
}

#[test]
fn segments_from_values_trim_padding_and_ignore_bad_values() {
    let segments = segments_from_values(&[3.0, -4.0, f64::NAN, 1.0], 0.0, 10.0, 50.0, 4.0);

    assert!((segments[0].start_angle_deg - 2.0).abs() <= 1e-9);
    assert!((segments[0].sweep_angle_deg - 266.0).abs() <= 1e-9);
    assert_eq!(segments[1].sweep_angle_deg, 0.0);
    assert_eq!(segments[2].sweep_angle_deg, 0.0);
    assert!((segments[3].start_angle_deg - 272.0).abs() <= 1e-9);
    assert!(segments.iter().all(|s| s.inner_radius == 10.0 && s.outer_radius == 50.0));
}

#[test]
fn label_anchor_aligns_by_side() {
    let center = Point::new(0.0, 0.0);
    let options = LabelAnchorOptions::default();

    let right = label_anchor(center, PolarSegment::new(-20.0, 40.0, 0.0, 100.0), options);
    assert_eq!(right.alignment, TextHAlign::Left);
    assert!((right.label_point.x - 120.0).abs() <= 1e-9);

    let left = label_anchor(center, PolarSegment::new(160.0, 40.0, 0.0, 100.0), options);
    assert_eq!(left.alignment, TextHAlign::Right);
    assert!((left.label_point.x + 120.0).abs() <= 1e-9);

    let bottom = label_anchor(center, PolarSegment::new(80.0, 20.0, 0.0, 100.0), options);
    assert_eq!(bottom.alignment, TextHAlign::Center);
    assert!((bottom.arc_point.y - 100.0).abs() <= 1e-9);
    assert!((bottom.label_point.y - 112.0).abs() <= 1e-9);
}

#[test]
fn distribute_labels_separates_overlapping_boxes() {
    let ideal = vec![Point::new(100.0, 100.0), Point::new(104.0, 102.0)];
    let sizes = vec![Size::new(60.0, 14.0), Size::new(60.0, 14.0)];
    let bounds = Rect::new(0.0, 0.0, 400.0, 400.0);

    let placed = distribute_labels(&ideal, &sizes, 4.0, bounds);
    assert_eq!(placed.len(), 2);
    let vertical_gap = (placed[1].y - placed[0].y).abs();
    assert!(vertical_gap >= 18.0 - 1e-6, "gap {vertical_gap}");
    assert!(placed[0].y < placed[1].y);
}

#[test]
fn distribute_labels_clamps_into_bounds() {
    let ideal = vec![Point::new(-50.0, 5.0)];
    let sizes = vec![Size::new(20.0, 10.0)];
    let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);

    let placed = distribute_labels(&ideal, &sizes, 0.0, bounds);
    assert_eq!(placed, vec![Point::new(10.0, 5.0)]);
}

#[test]
fn distribute_labels_leaves_separated_labels_alone() {
    let ideal = vec![Point::new(50.0, 20.0), Point::new(50.0, 80.0)];
    let sizes = vec![Size::new(30.0, 10.0); 2];
    let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);

    assert_eq!(distribute_labels(&ideal, &sizes, 2.0, bounds), ideal);
    assert!(distribute_labels(&[], &[], 2.0, bounds).is_empty());
}

#[test]
fn distribute_labels_survives_non_finite_sizes_and_bounds() {
    let ideal = vec![Point::new(10.0, 10.0)];

    let placed = distribute_labels(
        &ideal,
        &[Size::new(f64::NAN, 10.0)],
        2.0,
        Rect::new(0.0, 0.0, 100.0, 100.0),
    );
    assert_eq!(placed, ideal);

    let unbounded = Rect::new(f64::NEG_INFINITY, 0.0, f64::INFINITY, 100.0);
    let placed = distribute_labels(&ideal, &[Size::new(20.0, 10.0)], 2.0, unbounded);
    assert_eq!(placed, ideal);
}

#[test]
fn label_anchor_round_trips_through_json() {
    let center = Point::new(100.0, 100.0);
    let anchor = label_anchor(
        center,
        PolarSegment::new(-10.0, 20.0, 0.0, 50.0),
        LabelAnchorOptions::default(),
    );

    assert_eq!(anchor.label_point, Point::new(170.0, 100.0));

    let json = serde_json::to_string(&anchor).expect("serialize anchor");
    assert!(json.contains(r#""alignment":"left""#), "{json}");
    let parsed: LabelAnchor = serde_json::from_str(&json).expect("parse anchor");
    assert_eq!(parsed, anchor);
}
