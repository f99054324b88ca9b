use crate::error::ShapeError;
use crate::geom::InvalidGeometry;
use crate::math::Point;
use crate::options::ShapeOptions;
use crate::outline::{Outline, OutlineCache};
use crate::path::{Path, PathBuilder};
use crate::shape::Shape;

use std::fmt;

/// An open chain of straight lines through a sequence of points.
#[derive(Clone)]
pub struct Polyline {
    points: Box<[Point]>,
    options: ShapeOptions,
    cache: OutlineCache,
}

impl Polyline {
    /// Requires at least two points.
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        Self::with_options(points, ShapeOptions::DEFAULT)
    }

    pub fn with_options(points: Vec<Point>, options: ShapeOptions) -> Result<Self, ShapeError> {
        options.validate()?;
        check_points("polyline", &points, 2)?;

        Ok(Polyline {
            points: points.into_boxed_slice(),
            options,
            cache: OutlineCache::new(),
        })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn options(&self) -> &ShapeOptions {
        &self.options
    }
}

impl Shape for Polyline {
    fn outline(&self) -> Result<&Outline, ShapeError> {
        self.cache.get_or_build("polyline", self.options.tolerance, || {
            build_poly(&self.points, false)
        })
    }

    fn is_decomposed(&self) -> bool {
        self.cache.is_initialized()
    }

    /// A polyline is closed when its last point is its first one.
    fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }
}

impl PartialEq for Polyline {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl fmt::Debug for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Polyline")
            .field("points", &self.points)
            .finish()
    }
}

/// A closed chain of straight lines through a sequence of points.
///
/// The last point is joined back to the first one.
#[derive(Clone)]
pub struct Polygon {
    points: Box<[Point]>,
    options: ShapeOptions,
    cache: OutlineCache,
}

impl Polygon {
    /// Requires at least three points.
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        Self::with_options(points, ShapeOptions::DEFAULT)
    }

    pub fn with_options(points: Vec<Point>, options: ShapeOptions) -> Result<Self, ShapeError> {
        options.validate()?;
        check_points("polygon", &points, 3)?;

        Ok(Polygon {
            points: points.into_boxed_slice(),
            options,
            cache: OutlineCache::new(),
        })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn options(&self) -> &ShapeOptions {
        &self.options
    }
}

impl Shape for Polygon {
    fn outline(&self) -> Result<&Outline, ShapeError> {
        self.cache.get_or_build("polygon", self.options.tolerance, || {
            build_poly(&self.points, true)
        })
    }

    fn is_decomposed(&self) -> bool {
        self.cache.is_initialized()
    }

    fn is_closed(&self) -> bool {
        true
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl fmt::Debug for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Polygon")
            .field("points", &self.points)
            .finish()
    }
}

fn check_points(kind: &str, points: &[Point], min: usize) -> Result<(), InvalidGeometry> {
    if points.len() < min {
        return Err(InvalidGeometry::new(format!(
            "a {} needs at least {} points, got {}",
            kind,
            min,
            points.len()
        )));
    }
    if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(InvalidGeometry::new(format!(
            "{} points must be finite, got {:?}",
            kind, p
        )));
    }

    Ok(())
}

/// One line per pair of consecutive points, plus a line from the last point back to
/// the first one when `close` is set, even if the two points are equal.
fn build_poly(points: &[Point], close: bool) -> Result<Path, ShapeError> {
    let (&first, rest) = points
        .split_first()
        .ok_or_else(|| InvalidGeometry::new("cannot build a chain without points"))?;

    let mut builder = PathBuilder::with_capacity(points.len());
    builder.begin(first);
    for &p in rest {
        builder.line_to(p);
    }
    if close {
        builder.line_to(first);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn polyline() {
    let line = Polyline::new(std::vec![point(0.0, 0.0), point(3.0, 0.0), point(3.0, 4.0)]).unwrap();

    assert_eq!(line.point_count(), 3);
    assert!(!line.is_closed());
    assert_eq!(line.to_path().unwrap().len(), 2);
    assert_eq!(line.length().unwrap(), 7.0);
    assert_eq!(line.point(0.0).unwrap(), point(0.0, 0.0));
    assert_eq!(line.point(1.0).unwrap(), point(3.0, 4.0));
    assert_eq!(line.tangent(0.25).unwrap(), vector(3.0, 0.0));
    assert_eq!(line.tangent(0.75).unwrap(), vector(0.0, 4.0));
}

#[test]
fn polyline_tangents_are_segment_vectors() {
    let line = Polyline::new(std::vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]).unwrap();

    assert_eq!(line.tangent(0.0).unwrap(), vector(10.0, 0.0));
    assert_eq!(line.tangent(0.4).unwrap(), vector(10.0, 0.0));
    assert_eq!(line.tangent(0.6).unwrap(), vector(0.0, 10.0));
    assert_eq!(line.tangent(1.0).unwrap(), vector(0.0, 10.0));
}

#[test]
fn polygon() {
    let triangle = Polygon::new(std::vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]).unwrap();

    assert_eq!(triangle.point_count(), 3);
    assert!(triangle.is_closed());
    assert_eq!(triangle.to_path().unwrap().len(), 3);
    assert_eq!(triangle.point(0.0).unwrap(), point(0.0, 0.0));
    assert_eq!(triangle.point(1.0).unwrap(), point(0.0, 0.0));

    let expected = 20.0 + 200.0f64.sqrt();
    assert!((triangle.length().unwrap() - expected).abs() < 1e-12);

    let b = triangle.bounding_box().unwrap();
    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(10.0, 10.0));
}

#[test]
fn polygon_ending_on_its_start() {
    let square = Polygon::new(std::vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
        point(0.0, 0.0),
    ])
    .unwrap();

    // One line per point, the last one is empty.
    let path = square.to_path().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.segments()[4].from(), path.segments()[4].to());
    assert_eq!(square.length().unwrap(), 4.0);
    assert_eq!(square.point(1.0).unwrap(), point(0.0, 0.0));
    assert_eq!(square.tangent(1.0).unwrap(), vector(0.0, -1.0));
}

#[test]
fn polygon_keeps_every_vertex() {
    let polygon = Polygon::new(std::vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(5e-9, 0.0),
    ])
    .unwrap();

    let path = polygon.to_path().unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.segments()[2].to(), point(5e-9, 0.0));
    assert_eq!(path.segments()[3].to(), point(0.0, 0.0));
    assert_eq!(polygon.point(1.0).unwrap(), point(0.0, 0.0));
}

#[test]
fn short_closing_edge_still_ends_on_the_start() {
    // The closing edge is too short to change the total length.
    let polygon = Polygon::new(std::vec![point(0.0, 0.0), point(1e8, 1.0), point(1e-9, 0.0)]).unwrap();

    assert_eq!(polygon.to_path().unwrap().len(), 3);
    assert_eq!(polygon.point(0.0).unwrap(), point(0.0, 0.0));
    assert_eq!(polygon.point(1.0).unwrap(), point(0.0, 0.0));
}

#[test]
fn too_few_points() {
    let err = Polyline::new(std::vec![point(10.0, 10.0)]).unwrap_err();
    assert!(matches!(err, ShapeError::InvalidGeometry(..)));
    assert!(Polyline::new(std::vec![]).is_err());
    assert!(Polygon::new(std::vec![point(0.0, 0.0), point(1.0, 1.0)]).is_err());
    assert!(Polygon::new(std::vec![point(0.0, 0.0), point(1.0, f64::NAN), point(2.0, 0.0)]).is_err());
}

#[test]
fn equality_and_debug() {
    let a = Polyline::new(std::vec![point(0.0, 0.0), point(1.0, 1.0)]).unwrap();
    let b = Polyline::new(std::vec![point(0.0, 0.0), point(1.0, 1.0)]).unwrap();
    let c = Polyline::new(std::vec![point(0.0, 0.0), point(1.0, 2.0)]).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(std::format!("{:?}", a).starts_with("Polyline { points: ["));
}
