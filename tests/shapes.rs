use outline::math::{point, radii, size, vector, Point};
use outline::shapes::{AnyShape, Circle, Ellipse, Polygon, Polyline, Rectangle, Shape, ShapeError, ShapeOptions};

use std::f64::consts::PI;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn closed_shapes() -> Vec<AnyShape> {
    vec![
        Rectangle::new(point(0.0, 0.0), size(100.0, 50.0)).unwrap().into(),
        Rectangle::rounded(point(-3.0, 7.0), size(40.0, 30.0), radii(5.0, 8.0))
            .unwrap()
            .into(),
        Rectangle::rounded(point(0.0, 0.0), size(20.0, 20.0), radii(10.0, 10.0))
            .unwrap()
            .into(),
        Circle::new(point(12.5, -7.25), 10.0).unwrap().into(),
        Ellipse::new(point(0.1, 0.2), radii(123.0, 4.5)).unwrap().into(),
        Polygon::new(vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)])
            .unwrap()
            .into(),
    ]
}

#[test]
fn closed_shapes_end_where_they_start() {
    init_logger();

    for shape in closed_shapes() {
        assert!(shape.is_closed(), "{:?}", shape);
        assert!(shape.to_path().unwrap().is_closed(), "{:?}", shape);
        assert_eq!(shape.point(0.0).unwrap(), shape.point(1.0).unwrap(), "{:?}", shape);
    }
}

#[test]
fn decomposition_is_cached() {
    init_logger();

    for shape in closed_shapes() {
        assert!(!shape.is_decomposed());
        let first = shape.to_path().unwrap();
        assert!(shape.is_decomposed());
        let second = shape.to_path().unwrap();
        assert!(std::ptr::eq(first, second));

        // Queries reuse the same outline.
        shape.length().unwrap();
        shape.point(0.3).unwrap();
        assert!(std::ptr::eq(first, shape.to_path().unwrap()));
    }
}

#[test]
fn rectangle_bounding_box() {
    let rect = Rectangle::new(point(0.0, 0.0), size(100.0, 50.0)).unwrap();
    let b = rect.bounding_box().unwrap();

    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(100.0, 50.0));
}

#[test]
fn circle_circumference() {
    let circle = Circle::new(point(0.0, 0.0), 10.0).unwrap();
    let expected = 2.0 * PI * 10.0;

    assert!((circle.length().unwrap() - expected).abs() / expected < 1e-3);
}

#[test]
fn triangle_end_points() {
    let triangle = Polygon::new(vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]).unwrap();

    assert_eq!(triangle.point(0.0).unwrap(), point(0.0, 0.0));
    assert_eq!(triangle.point(1.0).unwrap(), point(0.0, 0.0));
}

#[test]
fn invalid_parameters() {
    let err = Rectangle::rounded(point(0.0, 0.0), size(10.0, 10.0), radii(6.0, 0.0)).unwrap_err();
    assert!(matches!(err, ShapeError::InvalidGeometry(..)));
    assert!(!err.is_internal());

    let err = Polyline::new(vec![point(10.0, 10.0)]).unwrap_err();
    assert!(matches!(err, ShapeError::InvalidGeometry(..)));
}

#[test]
fn parameters_out_of_range() {
    for shape in closed_shapes() {
        for &t in &[-0.001, 1.001, f64::NAN, f64::INFINITY] {
            assert!(matches!(shape.point(t), Err(ShapeError::ValueOutOfRange { .. })));
            assert!(matches!(shape.tangent(t), Err(ShapeError::ValueOutOfRange { .. })));
        }
    }
}

/// Distance along a chain of straight lines between the points at `t1` and `t2`.
fn distance_along(points: &[Point], shape: &dyn Shape, t1: f64, t2: f64) -> f64 {
    let outline = shape.outline().unwrap();
    let (i1, _) = outline.measurements().locate(t1).unwrap();
    let (i2, _) = outline.measurements().locate(t2).unwrap();
    let p1 = shape.point(t1).unwrap();
    let p2 = shape.point(t2).unwrap();

    if i1 == i2 {
        return (p2 - p1).length();
    }

    let mut d = (points[i1 + 1] - p1).length();
    for i in (i1 + 1)..i2 {
        d += (points[i + 1] - points[i]).length();
    }
    d + (p2 - points[i2]).length()
}

#[test]
fn parameter_is_proportional_to_length_on_lines() {
    let points = vec![
        point(0.0, 0.0),
        point(3.0, 4.0),
        point(3.0, 10.0),
        point(-5.0, 10.0),
        point(-5.0, -2.0),
    ];
    let polyline = Polyline::new(points.clone()).unwrap();
    let length = polyline.length().unwrap();
    assert!((length - 31.0).abs() < 1e-12);

    let samples = [0.0, 0.05, 0.1, 0.2, 0.33, 0.5, 0.61, 0.8, 0.99, 1.0];
    for (i, &t1) in samples.iter().enumerate() {
        for &t2 in &samples[i..] {
            let d = distance_along(&points, &polyline, t1, t2);
            assert!((d - length * (t2 - t1)).abs() < 1e-9, "t1 = {}, t2 = {}", t1, t2);
        }
    }
}

#[test]
fn parameter_is_proportional_to_length_on_circles() {
    let r = 25.0;
    let circle = Circle::with_options(point(1.0, 2.0), r, ShapeOptions::tolerance(1e-8)).unwrap();
    let length = circle.length().unwrap();
    let angle_at = |t: f64| {
        let v = circle.point(t).unwrap() - point(1.0, 2.0);
        let a = v.y.atan2(v.x);
        if a < 0.0 {
            a + 2.0 * PI
        } else {
            a
        }
    };

    let samples = [0.0, 0.1, 0.25, 0.4, 0.5, 0.72, 0.9];
    for (i, &t1) in samples.iter().enumerate() {
        for &t2 in &samples[i..] {
            let arc_length = (angle_at(t2) - angle_at(t1)) * r;
            assert!((arc_length - length * (t2 - t1)).abs() < length * 1e-4, "t1 = {}, t2 = {}", t1, t2);
        }
    }
}

#[test]
fn tangents_follow_the_outline() {
    let rect = Rectangle::new(point(0.0, 0.0), size(100.0, 50.0)).unwrap();

    // Top edge goes right, right edge goes down (y pointing down), and so on.
    let expected = [(0.1, vector(100.0, 0.0)), (0.4, vector(0.0, 50.0)), (0.6, vector(-100.0, 0.0)), (0.9, vector(0.0, -50.0))];
    for &(t, v) in &expected {
        assert_eq!(rect.tangent(t).unwrap(), v, "t = {}", t);
    }

    let polyline = Polyline::new(vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]).unwrap();
    assert_eq!(polyline.tangent(1.0).unwrap(), vector(0.0, 10.0));
}

#[test]
fn clones_and_equality() {
    let a = Ellipse::new(point(0.0, 0.0), radii(3.0, 2.0)).unwrap();
    a.length().unwrap();
    let b = a.clone();

    assert_eq!(a, b);
    assert!(a.is_decomposed());
    assert!(!b.is_decomposed());
    assert_eq!(a.length().unwrap(), b.length().unwrap());
}

#[test]
fn shapes_are_shareable_across_threads() {
    let circle = std::sync::Arc::new(Circle::new(point(0.0, 0.0), 3.0).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let circle = circle.clone();
            std::thread::spawn(move || circle.point(i as f64 / 4.0).unwrap())
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(circle.is_decomposed());
}
