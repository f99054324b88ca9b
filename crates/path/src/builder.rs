//! Path building.
//!
//! The [`PathBuilder`] records the current position and the start of the path, so that
//! every segment it produces starts exactly where the previous one ends.
//!
//! # Examples
//!
//! ```
//! use outline_path::Path;
//! use outline_path::geom::Arc;
//! use outline_path::math::{point, radii, Angle};
//!
//! let arc = Arc {
//!     center: point(0.0, 0.0),
//!     radii: radii(10.0, 10.0),
//!     start_angle: Angle::zero(),
//!     sweep_angle: Angle::pi(),
//!     x_rotation: Angle::zero(),
//! };
//!
//! let mut builder = Path::builder();
//! builder.begin(arc.from());
//! builder.arc(&arc, 1e-3).unwrap();
//! builder.close();
//!
//! let path = builder.build().unwrap();
//! assert!(path.is_closed());
//! ```

use crate::geom::euclid::approxeq::ApproxEq;
use crate::geom::{Arc, CubicBezierSegment, InvalidGeometry, LineSegment, Scalar};
use crate::math::{point, Point};
use crate::path::{ChainingError, Path};
use crate::segment::PathSegment;

/// Builds a [`Path`] out of lines, cubic bézier curves and arcs.
///
/// Only one sub-path is supported: `begin` sets the start point, `close` joins the
/// current point back to it.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
    first: Point,
    current: Point,
    begun: bool,
    // The last segment approximates the end of an arc.
    after_arc: bool,
}

impl PathBuilder {
    pub fn new() -> Self {
        PathBuilder {
            segments: Vec::new(),
            first: point(0.0, 0.0),
            current: point(0.0, 0.0),
            begun: false,
            after_arc: false,
        }
    }

    pub fn with_capacity(segments: usize) -> Self {
        PathBuilder {
            segments: Vec::with_capacity(segments),
            ..PathBuilder::new()
        }
    }

    /// Starts the path at a given position.
    pub fn begin(&mut self, at: Point) {
        debug_assert!(!self.begun, "begin() called twice");
        nan_check(at);

        self.first = at;
        self.current = at;
        self.begun = true;
    }

    #[inline]
    pub fn current_position(&self) -> Point {
        self.current
    }

    pub fn line_to(&mut self, to: Point) {
        debug_assert!(self.begun, "line_to() before begin()");
        nan_check(to);

        self.segments.push(PathSegment::Line(LineSegment {
            from: self.current,
            to,
        }));
        self.current = to;
        self.after_arc = false;
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        debug_assert!(self.begun, "cubic_bezier_to() before begin()");
        nan_check(ctrl1);
        nan_check(ctrl2);
        nan_check(to);

        self.segments.push(PathSegment::Cubic(CubicBezierSegment {
            from: self.current,
            ctrl1,
            ctrl2,
            to,
        }));
        self.current = to;
        self.after_arc = false;
    }

    /// Approximates an arc with cubic bézier curves within `tolerance`.
    ///
    /// If the arc starts at the current position, give or take rounding noise, the first
    /// curve is attached to the current position. Otherwise a line joins the current
    /// position to the start of the arc.
    pub fn arc(&mut self, arc: &Arc<f64>, tolerance: f64) -> Result<(), InvalidGeometry> {
        debug_assert!(self.begun, "arc() before begin()");
        arc.validate(tolerance)?;

        let start = arc.from();
        if !same_position(start, self.current) {
            self.line_to(start);
        }

        let mut first = true;
        let segments = &mut self.segments;
        let current = &mut self.current;
        let after_arc = &mut self.after_arc;
        arc.for_each_cubic_bezier(tolerance, &mut |curve| {
            let mut curve = *curve;
            if first {
                curve.from = *current;
                first = false;
            }
            *current = curve.to;
            *after_arc = true;
            segments.push(PathSegment::Cubic(curve));
        })
    }

    /// Joins the current position to the start of the path.
    ///
    /// Nothing is added if the path already ends on its start. When the path ends with
    /// an arc whose end agrees with the start up to rounding noise, the end of the last
    /// curve is moved onto the start of the path. Otherwise a line is added, so points
    /// given with `line_to` and `cubic_bezier_to` are never moved.
    pub fn close(&mut self) {
        debug_assert!(self.begun, "close() before begin()");
        if self.current == self.first {
            return;
        }

        let first = self.first;
        let snapped = self.after_arc
            && same_position(self.current, first)
            && self
                .segments
                .last_mut()
                .map_or(false, |last| last.set_to(first));

        if snapped {
            log::trace!("snapped {:?} onto the start of the path", self.current);
            self.current = first;
        } else {
            self.line_to(first);
        }
    }

    /// Number of segments added so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn build(self) -> Result<Path, ChainingError> {
        Path::new(self.segments)
    }
}

fn same_position(a: Point, b: Point) -> bool {
    let reference = a.x.abs().max(a.y.abs()).max(b.x.abs()).max(b.y.abs());
    let eps = f64::epsilon_for(reference);
    a.approx_eq_eps(&b, &point(eps, eps))
}

#[inline]
fn nan_check(p: Point) {
    debug_assert!(p.x.is_finite());
    debug_assert!(p.y.is_finite());
}

#[cfg(test)]
use crate::math::{radii, vector, Angle};
#[cfg(test)]
use std::f64::consts::PI;

#[cfg(test)]
fn assert_chained(path: &Path) {
    for pair in path.segments().windows(2) {
        assert_eq!(pair[0].to(), pair[1].from());
    }
}

#[test]
fn polygon() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(1.0, 1.0));
    builder.close();

    let path = builder.build().unwrap();
    assert_eq!(path.len(), 3);
    assert!(path.is_closed());
    assert!(path.iter().all(PathSegment::is_line));
}

#[test]
fn closing_an_already_closed_path_adds_nothing() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(0.0, 0.0));
    builder.close();

    assert_eq!(builder.len(), 2);
}

#[test]
fn two_half_circles() {
    let upper = Arc {
        center: point(5.0, 5.0),
        radii: radii(3.0, 3.0),
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
    builder.arc(&upper, 1e-6).unwrap();
    builder.arc(&lower, 1e-6).unwrap();
    let before_close = builder.len();
    builder.close();

    // The end of the second arc only differs from the start by rounding noise.
    assert_eq!(builder.len(), before_close);

    let path = builder.build().unwrap();
    assert!(path.is_closed());
    assert_chained(&path);
    assert!(path.iter().all(|s| !s.is_line()));
    assert!((path.length(1e-9) - 6.0 * PI).abs() < 1e-5);
}

#[test]
fn detached_arc_is_joined_with_a_line() {
    let arc = Arc {
        center: point(0.0, 0.0),
        radii: radii(1.0, 2.0),
        start_angle: Angle::zero(),
        sweep_angle: Angle::radians(PI / 2.0),
        x_rotation: Angle::zero(),
    };

    let mut builder = Path::builder();
    builder.begin(point(-3.0, 0.0));
    builder.arc(&arc, 1e-4).unwrap();
    builder.close();

    let path = builder.build().unwrap();
    assert!(path.segments()[0].is_line());
    assert_eq!(path.segments()[0].to(), arc.from());
    assert!(path.segments()[path.len() - 1].is_line());
    assert!(path.is_closed());
    assert_chained(&path);
}

#[test]
fn invalid_arc() {
    let arc = Arc {
        center: point(0.0, 0.0),
        radii: radii(-1.0, 2.0),
        start_angle: Angle::zero(),
        sweep_angle: Angle::radians(1.0),
        x_rotation: Angle::zero(),
    };

    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    assert!(builder.arc(&arc, 1e-4).is_err());
    assert!(builder.is_empty());
}

#[test]
fn cubic_bezier_to() {
    let mut builder = PathBuilder::with_capacity(2);
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(1.0, 1.0), point(2.0, 1.0), point(3.0, 0.0));
    assert_eq!(builder.current_position(), point(3.0, 0.0));
    builder.close();

    let path = builder.build().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.segments()[1].derivative(0.0), vector(-3.0, 0.0));
}

#[test]
fn lines_ending_near_the_start_are_kept() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.line_to(point(10.0, 10.0));
    builder.line_to(point(5e-9, 0.0));
    builder.close();

    let path = builder.build().unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.segments()[2].to(), point(5e-9, 0.0));
    assert!(path.segments()[3].is_line());
    assert!(path.is_closed());
    assert_chained(&path);
}

#[test]
fn line_after_arc_is_not_snapped() {
    let arc = Arc {
        center: point(0.0, 0.0),
        radii: radii(1.0, 1.0),
        start_angle: Angle::zero(),
        sweep_angle: Angle::radians(PI),
        x_rotation: Angle::zero(),
    };

    let mut builder = Path::builder();
    builder.begin(point(1.0, 0.0));
    builder.arc(&arc, 1e-4).unwrap();
    builder.line_to(point(1.0 + 1e-9, 0.0));
    builder.close();

    let path = builder.build().unwrap();
    assert_eq!(path.segments()[path.len() - 2].to(), point(1.0 + 1e-9, 0.0));
    assert!(path.segments()[path.len() - 1].is_line());
    assert!(path.is_closed());
}
