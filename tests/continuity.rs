use outline::math::{point, radii, size};
use outline::path::Path;
use outline::shapes::{AnyShape, Circle, Ellipse, Polygon, Polyline, Rectangle, Shape, ShapeOptions};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every segment starts at the exact position the previous one ends at.
fn check_chaining(path: &Path) {
    for (i, pair) in path.segments().windows(2).enumerate() {
        assert_eq!(
            pair[0].to(),
            pair[1].from(),
            "segment {} ends at {:?} but segment {} starts at {:?}",
            i,
            pair[0].to(),
            i + 1,
            pair[1].from(),
        );
    }
}

fn check_shape(shape: &AnyShape) {
    let path = shape.to_path().unwrap();
    check_chaining(path);

    if shape.is_closed() {
        assert_eq!(path.first_point(), path.last_point(), "{:?}", shape);
        assert_eq!(shape.point(0.0).unwrap(), shape.point(1.0).unwrap(), "{:?}", shape);
    }

    let b = shape.bounding_box().unwrap();
    for i in 0..=32 {
        let p = shape.point(i as f64 / 32.0).unwrap();
        assert!(p.x >= b.min.x - 1e-9 && p.x <= b.max.x + 1e-9, "{:?} outside of {:?}", p, b);
        assert!(p.y >= b.min.y - 1e-9 && p.y <= b.max.y + 1e-9, "{:?} outside of {:?}", p, b);
    }
}

#[test]
fn fixed_shapes_are_chained() {
    init_logger();

    let shapes: Vec<AnyShape> = vec![
        Rectangle::new(point(0.0, 0.0), size(100.0, 50.0)).unwrap().into(),
        Rectangle::new(point(1.0, 1.0), size(0.0, 0.0)).unwrap().into(),
        Rectangle::rounded(point(0.0, 0.0), size(10.0, 10.0), radii(5.0, 5.0)).unwrap().into(),
        Rectangle::rounded(point(0.3, 0.7), size(10.0, 4.0), radii(5.0, 1.5)).unwrap().into(),
        Rectangle::rounded(point(0.0, 0.0), size(10.0, 10.0), radii(3.0, 0.0)).unwrap().into(),
        Circle::new(point(-1.0, 3.0), 0.1).unwrap().into(),
        Circle::with_options(point(0.0, 0.0), 1000.0, ShapeOptions::tolerance(0.5)).unwrap().into(),
        Ellipse::new(point(5.0, 5.0), radii(0.001, 300.0)).unwrap().into(),
        Polyline::new(vec![point(0.0, 0.0), point(0.0, 0.0), point(1.0, 0.0)]).unwrap().into(),
        Polyline::new(vec![point(0.0, 0.0), point(1.0, 0.0), point(0.0, 0.0)]).unwrap().into(),
        Polygon::new(vec![point(0.0, 0.0), point(2.0, 0.0), point(1.0, 1.0), point(0.0, 0.0)])
            .unwrap()
            .into(),
    ];

    for shape in &shapes {
        // Degenerate shapes have no defined points, only check their path.
        if shape.length().unwrap() == 0.0 {
            check_chaining(shape.to_path().unwrap());
            continue;
        }
        check_shape(shape);
    }
}

#[test]
fn random_rounded_rectangles_are_chained() {
    init_logger();

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let x = rng.gen_range(-1000.0..1000.0);
        let y = rng.gen_range(-1000.0..1000.0);
        let w: f64 = rng.gen_range(1.0..200.0);
        let h: f64 = rng.gen_range(1.0..200.0);
        let rx = rng.gen_range(0.0..=w * 0.5);
        let ry = rng.gen_range(0.0..=h * 0.5);

        let rect = Rectangle::rounded(point(x, y), size(w, h), radii(rx, ry)).unwrap();
        check_shape(&rect.into());
    }
}

#[test]
fn random_ellipses_are_chained() {
    init_logger();

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let center = point(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        let rx = rng.gen_range(0.01..300.0);
        let ry = rng.gen_range(0.01..300.0);
        let tolerance = rng.gen_range(1e-6..1.0);

        let ellipse = Ellipse::with_options(center, radii(rx, ry), ShapeOptions::tolerance(tolerance)).unwrap();
        check_shape(&ellipse.into());
    }
}

#[test]
fn random_polygons_are_chained() {
    init_logger();

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(3..20);
        let points = (0..n)
            .map(|_| point(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
            .collect();

        let polygon = Polygon::new(points).unwrap();
        check_shape(&polygon.into());
    }
}
