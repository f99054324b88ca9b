//! The default path data structure.

use crate::builder::PathBuilder;
use crate::math::{Box2D, Point};
use crate::segment::PathSegment;

use std::fmt;
use thiserror::Error;

/// Two consecutive segments of a path do not share their endpoint.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
#[error("Segment {index} ends at {end:?} but segment {} starts at {start:?}", .index + 1)]
pub struct ChainingError {
    /// Index of the segment whose end does not match the start of the next one.
    pub index: usize,
    pub end: Point,
    pub start: Point,
}

/// A chain of segments.
///
/// Each segment starts exactly where the previous one ends. The chain is closed when
/// the last segment ends exactly where the first one starts.
///
/// # Examples
///
/// ```
/// use outline_path::{Path, PathSegment};
/// use outline_path::geom::LineSegment;
/// use outline_path::math::point;
///
/// let path = Path::new(vec![
///     PathSegment::Line(LineSegment { from: point(0.0, 0.0), to: point(1.0, 0.0) }),
///     PathSegment::Line(LineSegment { from: point(1.0, 0.0), to: point(1.0, 1.0) }),
/// ]).unwrap();
///
/// assert_eq!(path.len(), 2);
/// assert!(!path.is_closed());
/// ```
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    segments: Box<[PathSegment]>,
}

impl Path {
    /// Creates a path from a sequence of segments, checking that they are chained.
    pub fn new(segments: Vec<PathSegment>) -> Result<Path, ChainingError> {
        for (index, pair) in segments.windows(2).enumerate() {
            let end = pair[0].to();
            let start = pair[1].from();
            if end != start {
                return Err(ChainingError { index, end, start });
            }
        }

        Ok(Path {
            segments: segments.into_boxed_slice(),
        })
    }

    /// Creates a [`PathBuilder`].
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<PathSegment> {
        self.segments.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment.
    pub fn first_point(&self) -> Option<Point> {
        self.segments.first().map(PathSegment::from)
    }

    /// End of the last segment.
    pub fn last_point(&self) -> Option<Point> {
        self.segments.last().map(PathSegment::to)
    }

    /// Returns true if the last segment ends exactly where the first one starts.
    pub fn is_closed(&self) -> bool {
        match (self.first_point(), self.last_point()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Sum of the lengths of the segments, curves being measured within `tolerance`.
    pub fn length(&self, tolerance: f64) -> f64 {
        self.segments.iter().map(|s| s.length(tolerance)).sum()
    }

    /// Smallest rectangle containing every segment, or `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Box2D> {
        let mut segments = self.segments.iter();
        let first = segments.next()?.bounding_box();

        Some(segments.fold(first, |b, segment| b.union(&segment.bounding_box())))
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l PathSegment;
    type IntoIter = std::slice::Iter<'l, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::ops::Index<usize> for Path {
    type Output = PathSegment;
    fn index(&self, index: usize) -> &PathSegment {
        &self.segments[index]
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "\"")?;
        if let Some(first) = self.first_point() {
            write!(formatter, "M {} {}", first.x, first.y)?;
        }
        for segment in self.iter() {
            match segment {
                PathSegment::Line(line) => write!(formatter, " L {} {}", line.to.x, line.to.y)?,
                PathSegment::Cubic(curve) => write!(
                    formatter,
                    " C {} {} {} {} {} {}",
                    curve.ctrl1.x, curve.ctrl1.y, curve.ctrl2.x, curve.ctrl2.y, curve.to.x, curve.to.y
                )?,
                PathSegment::Arc(arc) => {
                    let to = arc.to();
                    write!(
                        formatter,
                        " A {} {} {} {} {}",
                        arc.radii.x,
                        arc.radii.y,
                        arc.sweep_angle.radians,
                        to.x,
                        to.y
                    )?
                }
            }
        }
        if self.is_closed() {
            write!(formatter, " Z")?;
        }
        write!(formatter, "\"")
    }
}

#[cfg(test)]
use crate::geom::{Arc, LineSegment};
#[cfg(test)]
use crate::math::{point, radii, Angle};

#[cfg(test)]
fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> PathSegment {
    PathSegment::Line(LineSegment {
        from: point(x0, y0),
        to: point(x1, y1),
    })
}

#[test]
fn chained_segments() {
    let path = Path::new(std::vec![
        line(0.0, 0.0, 2.0, 0.0),
        line(2.0, 0.0, 2.0, 3.0),
        line(2.0, 3.0, 0.0, 0.0),
    ])
    .unwrap();

    assert_eq!(path.len(), 3);
    assert!(path.is_closed());
    assert_eq!(path.first_point(), Some(point(0.0, 0.0)));
    assert_eq!(path.length(1e-3), 2.0 + 3.0 + 13.0f64.sqrt());

    let b = path.bounding_box().unwrap();
    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(2.0, 3.0));
    assert_eq!(path.iter().count(), 3);
    assert_eq!((&path).into_iter().count(), 3);
}

#[test]
fn broken_chain() {
    let err = Path::new(std::vec![
        line(0.0, 0.0, 1.0, 0.0),
        line(1.0, 0.0, 1.0, 1.0),
        line(1.0, 1.0 + 1e-12, 0.0, 0.0),
    ])
    .unwrap_err();

    assert_eq!(err.index, 1);
    assert_eq!(err.end, point(1.0, 1.0));
    assert_eq!(err.start, point(1.0, 1.0 + 1e-12));
}

#[test]
fn empty_path() {
    let path = Path::new(std::vec![]).unwrap();
    assert!(path.is_empty());
    assert!(!path.is_closed());
    assert_eq!(path.bounding_box(), None);
    assert_eq!(path.length(0.1), 0.0);
}

#[test]
fn arc_bounding_box() {
    let arc = Arc {
        center: point(0.0, 0.0),
        radii: radii(1.0, 1.0),
        start_angle: Angle::zero(),
        sweep_angle: Angle::radians(std::f64::consts::PI),
        x_rotation: Angle::zero(),
    };
    let path = Path::new(std::vec![PathSegment::Arc(arc), line(-1.0, 0.0, 1.0, 0.0)]);
    // The arc ends on (-1, sin(π)) which is not exactly the start of the line.
    assert!(path.is_err());

    let to = arc.to();
    let path = Path::new(std::vec![
        PathSegment::Arc(arc),
        line(to.x, to.y, 1.0, 0.0)
    ])
    .unwrap();
    assert!(path.is_closed());

    let b = path.bounding_box().unwrap();
    assert!((b.max.y - 1.0).abs() < 1e-12);
    assert!((b.min.x + 1.0).abs() < 1e-12);
}
