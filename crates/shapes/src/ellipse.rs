use crate::error::ShapeError;
use crate::geom::{Arc, InvalidGeometry};
use crate::math::{radii, Angle, Point, Radii};
use crate::options::ShapeOptions;
use crate::outline::{Outline, OutlineCache};
use crate::path::Path;
use crate::shape::Shape;

use std::f64::consts::PI;
use std::fmt;

/// A circle.
///
/// The outline starts at the rightmost point (angle zero) and is made of two half
/// circles.
#[derive(Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
    options: ShapeOptions,
    cache: OutlineCache,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, ShapeError> {
        Self::with_options(center, radius, ShapeOptions::DEFAULT)
    }

    pub fn with_options(center: Point, radius: f64, options: ShapeOptions) -> Result<Self, ShapeError> {
        options.validate()?;
        check_ellipse(center, radii(radius, radius))?;

        Ok(Circle {
            center,
            radius,
            options,
            cache: OutlineCache::new(),
        })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn options(&self) -> &ShapeOptions {
        &self.options
    }
}

impl Shape for Circle {
    fn outline(&self) -> Result<&Outline, ShapeError> {
        self.cache.get_or_build("circle", self.options.tolerance, || {
            build_ellipse(self.center, radii(self.radius, self.radius), self.options.tolerance)
        })
    }

    fn is_decomposed(&self) -> bool {
        self.cache.is_initialized()
    }

    fn is_closed(&self) -> bool {
        true
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

impl fmt::Debug for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Circle")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .finish()
    }
}

/// An axis-aligned ellipse.
///
/// The outline starts at the point on the x axis of the ellipse with the greatest x
/// (angle zero) and is made of two half ellipses.
#[derive(Clone)]
pub struct Ellipse {
    center: Point,
    radii: Radii,
    options: ShapeOptions,
    cache: OutlineCache,
}

impl Ellipse {
    pub fn new(center: Point, radii: Radii) -> Result<Self, ShapeError> {
        Self::with_options(center, radii, ShapeOptions::DEFAULT)
    }

    pub fn with_options(center: Point, radii: Radii, options: ShapeOptions) -> Result<Self, ShapeError> {
        options.validate()?;
        check_ellipse(center, radii)?;

        Ok(Ellipse {
            center,
            radii,
            options,
            cache: OutlineCache::new(),
        })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radii(&self) -> Radii {
        self.radii
    }

    #[inline]
    pub fn options(&self) -> &ShapeOptions {
        &self.options
    }

    /// Whether both radii are equal.
    #[inline]
    pub fn is_circle(&self) -> bool {
        self.radii.x == self.radii.y
    }
}

impl Shape for Ellipse {
    fn outline(&self) -> Result<&Outline, ShapeError> {
        self.cache.get_or_build("ellipse", self.options.tolerance, || {
            build_ellipse(self.center, self.radii, self.options.tolerance)
        })
    }

    fn is_decomposed(&self) -> bool {
        self.cache.is_initialized()
    }

    fn is_closed(&self) -> bool {
        true
    }
}

impl PartialEq for Ellipse {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radii == other.radii
    }
}

impl fmt::Debug for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Ellipse")
            .field("center", &self.center)
            .field("radii", &self.radii)
            .finish()
    }
}

fn check_ellipse(center: Point, radii: Radii) -> Result<(), InvalidGeometry> {
    if !center.x.is_finite() || !center.y.is_finite() {
        return Err(InvalidGeometry::new("ellipse center must be finite"));
    }
    if !radii.is_finite() || radii.x <= 0.0 || radii.y <= 0.0 {
        return Err(InvalidGeometry::new(format!(
            "ellipse radii must be positive and finite, got ({}, {})",
            radii.x, radii.y
        )));
    }

    Ok(())
}

fn build_ellipse(center: Point, radii: Radii, tolerance: f64) -> Result<Path, ShapeError> {
    let upper = Arc {
        center,
        radii,
        start_angle: Angle::zero(),
        sweep_angle: Angle::radians(PI),
        x_rotation: Angle::zero(),
    };
    let lower = Arc {
        start_angle: Angle::radians(PI),
        ..upper
    };

    let mut builder = Path::builder();
    builder.begin(upper.from());
    builder.arc(&upper, tolerance)?;
    builder.arc(&lower, tolerance)?;
    builder.close();

    Ok(builder.build()?)
}

#[cfg(test)]
use crate::math::point;

#[test]
fn circle_length() {
    let circle = Circle::new(point(0.0, 0.0), 10.0).unwrap();
    let expected = 2.0 * PI * 10.0;

    assert!(!circle.is_decomposed());
    assert!((circle.length().unwrap() - expected).abs() / expected < 1e-3);
    assert!(circle.is_decomposed());
}

#[test]
fn circle_is_closed_exactly() {
    let circle = Circle::new(point(1.5, -2.5), 3.0).unwrap();
    let path = circle.to_path().unwrap();

    assert!(path.is_closed());
    assert!(path.iter().all(|s| !s.is_line()));
    assert_eq!(circle.point(0.0).unwrap(), point(4.5, -2.5));
    assert_eq!(circle.point(0.0).unwrap(), circle.point(1.0).unwrap());
}

#[test]
fn circle_queries() {
    let r = 2.0;
    let circle = Circle::with_options(point(0.0, 0.0), r, ShapeOptions::tolerance(1e-9)).unwrap();

    // A quarter of the way along the circle is the point at angle π/2.
    let p = circle.point(0.25).unwrap();
    assert!(p.x.abs() < 1e-6);
    assert!((p.y - r).abs() < 1e-6);

    // The tangent is perpendicular to the radius and turns the same way as the outline.
    let radius = circle.point(0.6).unwrap().to_vector();
    let tangent = circle.tangent(0.6).unwrap();
    assert!(radius.dot(tangent).abs() / (tangent.length() * r) < 1e-3);
    assert!(radius.cross(tangent) > 0.0);

    let b = circle.bounding_box().unwrap();
    assert!((b.min.x + r).abs() < 1e-6 && (b.max.y - r).abs() < 1e-6);
}

#[test]
fn ellipse() {
    let ellipse = Ellipse::new(point(0.0, 0.0), radii(3.0, 1.0)).unwrap();

    assert!(!ellipse.is_circle());
    assert!(Ellipse::new(point(0.0, 0.0), radii(2.0, 2.0)).unwrap().is_circle());
    assert_eq!(ellipse.point(0.0).unwrap(), point(3.0, 0.0));
    assert_eq!(ellipse.point(1.0).unwrap(), point(3.0, 0.0));

    // Ramanujan's approximation of the perimeter.
    let (a, b) = (3.0f64, 1.0f64);
    let h = (a - b).powi(2) / (a + b).powi(2);
    let expected = PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
    assert!((ellipse.length().unwrap() - expected).abs() / expected < 1e-4);

    // The box of the cubic curves, which may stick out of the ellipse by the tolerance.
    let bb = ellipse.bounding_box().unwrap();
    assert!((bb.max.x - 3.0).abs() < 1e-5 && (bb.min.y + 1.0).abs() < 1e-5);
}

#[test]
fn invalid_ellipses() {
    assert!(Circle::new(point(0.0, 0.0), 0.0).is_err());
    assert!(Circle::new(point(0.0, 0.0), -1.0).is_err());
    assert!(Circle::new(point(0.0, 0.0), f64::NAN).is_err());
    assert!(Circle::new(point(f64::INFINITY, 0.0), 1.0).is_err());
    assert!(Ellipse::new(point(0.0, 0.0), radii(1.0, 0.0)).is_err());
    assert!(Circle::with_options(point(0.0, 0.0), 1.0, ShapeOptions::tolerance(-1.0)).is_err());
}

#[test]
fn equality_and_debug() {
    let a = Circle::new(point(0.0, 0.0), 1.0).unwrap();
    let b = Circle::new(point(0.0, 0.0), 1.0).unwrap();
    let c = Circle::new(point(0.0, 0.0), 2.0).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(std::format!("{:?}", a).starts_with("Circle {"));
    assert!(std::format!("{:?}", Ellipse::new(point(0.0, 0.0), radii(1.0, 2.0)).unwrap()).contains("radii"));
}
