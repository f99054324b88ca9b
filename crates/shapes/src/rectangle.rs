use crate::error::ShapeError;
use crate::geom::{Arc, InvalidGeometry};
use crate::math::{point, Angle, Point, Radii, Size};
use crate::options::ShapeOptions;
use crate::outline::{Outline, OutlineCache};
use crate::path::Path;
use crate::shape::Shape;

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// An axis-aligned rectangle, optionally with rounded corners.
///
/// The outline starts at the top-left corner (shifted right by the corner radius) and
/// runs along the top edge first: clockwise on screen, with the y axis pointing down.
#[derive(Clone)]
pub struct Rectangle {
    start: Point,
    size: Size,
    radii: Radii,
    options: ShapeOptions,
    cache: OutlineCache,
}

impl Rectangle {
    /// A rectangle with sharp corners.
    pub fn new(start: Point, size: Size) -> Result<Self, ShapeError> {
        Self::with_options(start, size, Radii::zero(), ShapeOptions::DEFAULT)
    }

    /// A rectangle with rounded corners.
    ///
    /// If either radius is zero, the corners are sharp.
    pub fn rounded(start: Point, size: Size, radii: Radii) -> Result<Self, ShapeError> {
        Self::with_options(start, size, radii, ShapeOptions::DEFAULT)
    }

    pub fn with_options(
        start: Point,
        size: Size,
        radii: Radii,
        options: ShapeOptions,
    ) -> Result<Self, ShapeError> {
        options.validate()?;

        if !start.x.is_finite() || !start.y.is_finite() {
            return Err(InvalidGeometry::new("rectangle start must be finite").into());
        }
        if !size.width.is_finite() || !size.height.is_finite() || size.width < 0.0 || size.height < 0.0 {
            return Err(InvalidGeometry::new(format!(
                "rectangle size must be non-negative and finite, got {}x{}",
                size.width, size.height
            ))
            .into());
        }
        if !radii.is_finite() || radii.x < 0.0 || radii.y < 0.0 {
            return Err(InvalidGeometry::new(format!(
                "corner radii must be non-negative and finite, got ({}, {})",
                radii.x, radii.y
            ))
            .into());
        }
        if 2.0 * radii.x > size.width || 2.0 * radii.y > size.height {
            return Err(InvalidGeometry::new(format!(
                "corner radii ({}, {}) exceed half of the {}x{} rectangle",
                radii.x, radii.y, size.width, size.height
            ))
            .into());
        }

        Ok(Rectangle {
            start,
            size,
            radii,
            options,
            cache: OutlineCache::new(),
        })
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn radii(&self) -> Radii {
        self.radii
    }

    #[inline]
    pub fn options(&self) -> &ShapeOptions {
        &self.options
    }

    /// Whether the corners are rounded.
    #[inline]
    pub fn is_rounded(&self) -> bool {
        !self.radii.is_degenerate()
    }

    fn build_path(&self) -> Result<Path, ShapeError> {
        let (x0, y0) = (self.start.x, self.start.y);
        let (w, h) = (self.size.width, self.size.height);
        let (x1, y1) = (x0 + w, y0 + h);

        let mut builder = Path::builder();

        if !self.is_rounded() {
            builder.begin(self.start);
            builder.line_to(point(x1, y0));
            builder.line_to(point(x1, y1));
            builder.line_to(point(x0, y1));
            builder.close();

            return Ok(builder.build()?);
        }

        let (rx, ry) = (self.radii.x, self.radii.y);
        let tolerance = self.options.tolerance;
        let corner = |center: Point, start_angle: f64| Arc {
            center,
            radii: self.radii,
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(FRAC_PI_2),
            x_rotation: Angle::zero(),
        };

        builder.begin(point(x0 + rx, y0));
        // Each edge is shortened by the radius on both sides and is omitted when
        // nothing is left of it.
        if w > 2.0 * rx {
            builder.line_to(point(x1 - rx, y0));
        }
        builder.arc(&corner(point(x1 - rx, y0 + ry), -FRAC_PI_2), tolerance)?;
        if h > 2.0 * ry {
            builder.line_to(point(x1, y1 - ry));
        }
        builder.arc(&corner(point(x1 - rx, y1 - ry), 0.0), tolerance)?;
        if w > 2.0 * rx {
            builder.line_to(point(x0 + rx, y1));
        }
        builder.arc(&corner(point(x0 + rx, y1 - ry), FRAC_PI_2), tolerance)?;
        if h > 2.0 * ry {
            builder.line_to(point(x0, y0 + ry));
        }
        builder.arc(&corner(point(x0 + rx, y0 + ry), PI), tolerance)?;
        builder.close();

        Ok(builder.build()?)
    }
}

impl Shape for Rectangle {
    fn outline(&self) -> Result<&Outline, ShapeError> {
        self.cache
            .get_or_build("rectangle", self.options.tolerance, || self.build_path())
    }

    fn is_decomposed(&self) -> bool {
        self.cache.is_initialized()
    }

    fn is_closed(&self) -> bool {
        true
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.size == other.size && self.radii == other.radii
    }
}

impl fmt::Debug for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f.debug_struct("Rectangle");
        s.field("start", &self.start).field("size", &self.size);
        if self.radii != Radii::zero() {
            s.field("radii", &self.radii);
        }

        s.finish()
    }
}

#[cfg(test)]
use crate::math::{radii, size, vector};

#[test]
fn sharp_rectangle() {
    let rect = Rectangle::new(point(0.0, 0.0), size(100.0, 50.0)).unwrap();
    let path = rect.to_path().unwrap();

    assert_eq!(path.len(), 4);
    assert!(path.iter().all(|s| s.is_line()));
    assert_eq!(path.first_point(), Some(point(0.0, 0.0)));
    assert_eq!(path.segments()[1].from(), point(100.0, 0.0));
    assert_eq!(path.segments()[2].from(), point(100.0, 50.0));
    assert_eq!(path.segments()[3].from(), point(0.0, 50.0));

    let b = rect.bounding_box().unwrap();
    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(100.0, 50.0));
    assert_eq!(rect.length().unwrap(), 300.0);
    assert_eq!(rect.point(0.0).unwrap(), rect.point(1.0).unwrap());
    assert_eq!(rect.tangent(0.1).unwrap(), vector(100.0, 0.0));
}

#[test]
fn zero_component_gives_sharp_corners() {
    let rect = Rectangle::rounded(point(0.0, 0.0), size(10.0, 10.0), radii(3.0, 0.0)).unwrap();

    assert!(!rect.is_rounded());
    assert_eq!(rect.to_path().unwrap().len(), 4);
}

#[test]
fn rounded_rectangle() {
    let (w, h, r) = (100.0, 50.0, 10.0);
    let rect = Rectangle::rounded(point(0.0, 0.0), size(w, h), radii(r, r)).unwrap();
    assert!(rect.is_rounded());

    let path = rect.to_path().unwrap();
    assert!(path.is_closed());
    assert_eq!(path.first_point(), Some(point(r, 0.0)));
    assert_eq!(path.iter().filter(|s| s.is_line()).count(), 4);
    for pair in path.segments().windows(2) {
        assert_eq!(pair[0].to(), pair[1].from());
    }

    let expected = 2.0 * (w - 2.0 * r) + 2.0 * (h - 2.0 * r) + 2.0 * PI * r;
    let length = rect.length().unwrap();
    assert!((length - expected).abs() / expected < 1e-6);

    let b = rect.bounding_box().unwrap();
    assert!((b.min.x - 0.0).abs() < 1e-9 && (b.min.y - 0.0).abs() < 1e-9);
    assert!((b.max.x - w).abs() < 1e-9 && (b.max.y - h).abs() < 1e-9);
}

#[test]
fn fully_rounded_edges_are_omitted() {
    // A 20x10 rectangle with 10x5 radii is an ellipse: no straight edges are left.
    let rect = Rectangle::rounded(point(5.0, 5.0), size(20.0, 10.0), radii(10.0, 5.0)).unwrap();
    let path = rect.to_path().unwrap();

    assert!(path.iter().all(|s| !s.is_line()));
    assert!(path.is_closed());

    // A pill shape keeps its two long edges.
    let pill = Rectangle::rounded(point(0.0, 0.0), size(30.0, 10.0), radii(5.0, 5.0)).unwrap();
    assert_eq!(pill.to_path().unwrap().iter().filter(|s| s.is_line()).count(), 2);
}

#[test]
fn invalid_rectangles() {
    let origin = point(0.0, 0.0);

    let err = Rectangle::rounded(origin, size(10.0, 10.0), radii(6.0, 0.0)).unwrap_err();
    assert!(matches!(err, ShapeError::InvalidGeometry(..)));
    assert!(Rectangle::rounded(origin, size(10.0, 10.0), radii(1.0, 5.5)).is_err());
    assert!(Rectangle::new(origin, size(-1.0, 10.0)).is_err());
    assert!(Rectangle::new(origin, size(f64::INFINITY, 10.0)).is_err());
    assert!(Rectangle::new(point(f64::NAN, 0.0), size(1.0, 1.0)).is_err());
    assert!(Rectangle::rounded(origin, size(10.0, 10.0), radii(-1.0, 1.0)).is_err());
    assert!(Rectangle::with_options(origin, size(1.0, 1.0), Radii::zero(), ShapeOptions::tolerance(0.0)).is_err());
}

#[test]
fn zero_size_rectangle() {
    let rect = Rectangle::new(point(3.0, 4.0), size(0.0, 0.0)).unwrap();

    assert_eq!(rect.length().unwrap(), 0.0);
    let b = rect.bounding_box().unwrap();
    assert_eq!(b.min, point(3.0, 4.0));
    assert_eq!(b.max, point(3.0, 4.0));
    assert!(matches!(rect.point(0.5), Err(ShapeError::InvalidGeometry(..))));
}

#[test]
fn equality_and_debug() {
    let a = Rectangle::new(point(0.0, 0.0), size(2.0, 3.0)).unwrap();
    let b = Rectangle::new(point(0.0, 0.0), size(2.0, 3.0)).unwrap();
    let c = Rectangle::rounded(point(0.0, 0.0), size(2.0, 3.0), radii(1.0, 1.0)).unwrap();

    a.to_path().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let clone = a.clone();
    assert!(a.is_decomposed());
    assert!(!clone.is_decomposed());

    assert!(!std::format!("{:?}", a).contains("radii"));
    assert!(std::format!("{:?}", c).contains("radii"));
}
