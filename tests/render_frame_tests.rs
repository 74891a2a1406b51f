use chart_geometry::ChartError;
use chart_geometry::core::{CoordinateSystem, DataDomain, DataPoint, Point, Rect, Viewport};
use chart_geometry::path::{Path, create_area_path, create_line_path};
use chart_geometry::polar::create_segment_path;
use chart_geometry::render::{
    Color, NullRenderer, PathPrimitive, RenderFrame, Renderer, StrokeStyle, TextHAlign,
    TextPrimitive,
};

fn sample_frame() -> RenderFrame {
    let viewport = Viewport::new(320, 200);
    let coords = CoordinateSystem::new(viewport.rect(), DataDomain::new(0.0, 4.0, 0.0, 10.0));
    let points = vec![
        DataPoint::new(0.0, 2.0),
        DataPoint::new(1.0, 7.0),
        DataPoint::new(2.0, 4.0),
        DataPoint::new(4.0, 9.0),
    ];

    RenderFrame::new(viewport)
        .with_path(PathPrimitive::filled(
            create_area_path(&points, coords, 0.0, true),
            Color::rgba(0.1, 0.4, 0.9, 0.3),
        ))
        .with_path(PathPrimitive::stroked(
            create_line_path(&points, coords),
            StrokeStyle::new(2.0, Color::rgb(0.1, 0.4, 0.9)),
        ))
        .with_path(
            PathPrimitive::filled(
                create_segment_path(Point::new(60.0, 60.0), 20.0, 40.0, 0.0, 120.0, 4.0),
                Color::rgb(0.9, 0.5, 0.1),
            )
            .with_stroke(StrokeStyle::new(1.0, Color::rgb(1.0, 1.0, 1.0))),
        )
        .with_text(TextPrimitive::new(
            "peak",
            Point::new(300.0, 20.0),
            12.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Right,
        ))
}

#[test]
fn null_renderer_records_frame_counts() {
    let frame = sample_frame();
    let mut renderer = NullRenderer::default();

    renderer.render(&frame).expect("render sample frame");
    assert_eq!(renderer.last_path_count, 3);
    assert_eq!(renderer.last_text_count, 1);
    let commands: usize = frame.paths.iter().map(|p| p.path.commands().len()).sum();
    assert_eq!(renderer.last_command_count, commands);
}

#[test]
fn empty_frame_is_valid_and_empty() {
    let frame = RenderFrame::new(Viewport::new(10, 10));
    assert!(frame.is_empty());
    assert!(frame.validate().is_ok());
    assert!(!sample_frame().is_empty());
}

#[test]
fn zero_viewport_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(0, 50));
    assert!(matches!(
        frame.validate(),
        Err(ChartError::InvalidViewport { width: 0, height: 50 })
    ));
}

#[test]
fn non_finite_geometry_is_rejected() {
    let mut path = Path::new();
    path.move_to(Point::new(0.0, 0.0))
        .line_to(Point::new(f64::NAN, 4.0));
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_path(PathPrimitive::stroked(
        path,
        StrokeStyle::new(1.0, Color::rgb(0.0, 0.0, 0.0)),
    ));

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.last_path_count, 0);
}

#[test]
fn invalid_styles_are_rejected() {
    let line = {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0)).line_to(Point::new(5.0, 5.0));
        path
    };
    let viewport = Viewport::new(100, 100);

    let bad_color = RenderFrame::new(viewport)
        .with_path(PathPrimitive::filled(line.clone(), Color::rgba(1.2, 0.0, 0.0, 1.0)));
    assert!(bad_color.validate().is_err());

    let bad_width = RenderFrame::new(viewport).with_path(PathPrimitive::stroked(
        line.clone(),
        StrokeStyle::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
    ));
    assert!(bad_width.validate().is_err());

    let invisible = RenderFrame::new(viewport).with_path(PathPrimitive {
        path: line,
        stroke: None,
        fill: None,
    });
    assert!(invisible.validate().is_err());

    let empty_text = RenderFrame::new(viewport).with_text(TextPrimitive::new(
        "",
        Point::new(1.0, 1.0),
        10.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));
    assert!(empty_text.validate().is_err());
}

#[test]
fn viewport_rect_covers_the_whole_surface() {
    assert_eq!(Viewport::new(320, 200).rect(), Rect::new(0.0, 0.0, 320.0, 200.0));
}
