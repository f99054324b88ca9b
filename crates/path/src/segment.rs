use crate::geom::{Arc, CubicBezierSegment, LineSegment};
use crate::math::{Box2D, Point, Vector};

/// One element of a [`Path`](crate::Path).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathSegment {
    Line(LineSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
    Arc(Arc<f64>),
}

impl PathSegment {
    #[inline]
    pub fn from(&self) -> Point {
        match self {
            PathSegment::Line(segment) => segment.from,
            PathSegment::Cubic(segment) => segment.from,
            PathSegment::Arc(segment) => segment.from(),
        }
    }

    #[inline]
    pub fn to(&self) -> Point {
        match self {
            PathSegment::Line(segment) => segment.to,
            PathSegment::Cubic(segment) => segment.to,
            PathSegment::Arc(segment) => segment.to(),
        }
    }

    /// Sample the segment at t (expecting t between 0 and 1).
    ///
    /// `sample(0.0) == from()` and `sample(1.0) == to()` hold exactly.
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        match self {
            PathSegment::Line(segment) => segment.sample(t),
            PathSegment::Cubic(segment) => segment.sample(t),
            PathSegment::Arc(segment) => segment.sample(t),
        }
    }

    /// Sample the segment's derivative at t (expecting t between 0 and 1).
    #[inline]
    pub fn derivative(&self, t: f64) -> Vector {
        match self {
            PathSegment::Line(segment) => segment.to_vector(),
            PathSegment::Cubic(segment) => segment.derivative(t),
            PathSegment::Arc(segment) => segment.derivative(t),
        }
    }

    /// Length of the segment.
    ///
    /// Lines are measured exactly, curves within `tolerance`.
    pub fn length(&self, tolerance: f64) -> f64 {
        match self {
            PathSegment::Line(segment) => segment.length(),
            PathSegment::Cubic(segment) => segment.approximate_length(tolerance),
            PathSegment::Arc(segment) => segment.approximate_length(tolerance),
        }
    }

    /// Smallest rectangle containing the segment.
    pub fn bounding_box(&self) -> Box2D {
        match self {
            PathSegment::Line(segment) => segment.bounding_box(),
            PathSegment::Cubic(segment) => segment.bounding_box(),
            PathSegment::Arc(segment) => segment.bounding_box(),
        }
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        match self {
            PathSegment::Line(..) => true,
            _ => false,
        }
    }

    /// Moves the end of the segment.
    ///
    /// Arcs are defined by their center and angles and cannot be moved this way.
    pub(crate) fn set_to(&mut self, at: Point) -> bool {
        match self {
            PathSegment::Line(segment) => segment.to = at,
            PathSegment::Cubic(segment) => segment.to = at,
            PathSegment::Arc(..) => return false,
        }

        true
    }
}

impl From<LineSegment<f64>> for PathSegment {
    fn from(segment: LineSegment<f64>) -> Self {
        PathSegment::Line(segment)
    }
}

impl From<CubicBezierSegment<f64>> for PathSegment {
    fn from(segment: CubicBezierSegment<f64>) -> Self {
        PathSegment::Cubic(segment)
    }
}

impl From<Arc<f64>> for PathSegment {
    fn from(segment: Arc<f64>) -> Self {
        PathSegment::Arc(segment)
    }
}

#[cfg(test)]
use crate::math::{point, radii, vector, Angle};

#[test]
fn end_points_are_exact() {
    let segments = [
        PathSegment::Line(LineSegment {
            from: point(0.1, 0.2),
            to: point(3.3, -1.7),
        }),
        PathSegment::Cubic(CubicBezierSegment {
            from: point(0.1, 0.2),
            ctrl1: point(1.0, 5.0),
            ctrl2: point(2.0, -5.0),
            to: point(3.3, -1.7),
        }),
        PathSegment::Arc(Arc {
            center: point(1.0, 1.0),
            radii: radii(2.0, 0.5),
            start_angle: Angle::radians(0.3),
            sweep_angle: Angle::radians(2.5),
            x_rotation: Angle::radians(0.1),
        }),
    ];

    for segment in &segments {
        assert_eq!(segment.sample(0.0), segment.from());
        assert_eq!(segment.sample(1.0), segment.to());
    }
}

#[test]
fn line_queries() {
    let line: PathSegment = LineSegment {
        from: point(0.0, 0.0),
        to: point(3.0, 4.0),
    }
    .into();

    assert!(line.is_line());
    assert_eq!(line.length(1.0), 5.0);
    assert_eq!(line.derivative(0.5), vector(3.0, 4.0));
    assert_eq!(line.bounding_box().max, point(3.0, 4.0));
}

#[test]
fn arcs_cannot_be_moved() {
    let mut arc: PathSegment = Arc {
        center: point(0.0, 0.0),
        radii: radii(1.0, 1.0),
        start_angle: Angle::zero(),
        sweep_angle: Angle::radians(1.0),
        x_rotation: Angle::zero(),
    }
    .into();
    let to = arc.to();

    assert!(!arc.set_to(point(5.0, 5.0)));
    assert_eq!(arc.to(), to);

    let mut line: PathSegment = LineSegment {
        from: point(0.0, 0.0),
        to: point(1.0, 0.0),
    }
    .into();
    assert!(line.set_to(point(2.0, 0.0)));
    assert_eq!(line.to(), point(2.0, 0.0));
}
