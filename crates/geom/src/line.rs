use crate::scalar::Scalar;
use crate::{Box2D, Point, Vector};

/// A straight segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    ///
    /// `sample(0.0)` and `sample(1.0)` return `from` and `to` exactly.
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// The derivative of `sample`, the same everywhere on the segment.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// The smallest rectangle containing the segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        Box2D {
            min: self.from.min(self.to),
            max: self.from.max(self.to),
        }
    }
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn bounding_box() {
    let cases = [
        ((1.0, 5.0), (5.0, 7.0), (1.0, 5.0), (5.0, 7.0)),
        ((5.0, 5.0), (1.0, 1.0), (1.0, 1.0), (5.0, 5.0)),
        ((3.0, 3.0), (1.0, 5.0), (1.0, 3.0), (3.0, 5.0)),
    ];

    for &(from, to, min, max) in &cases {
        let segment = LineSegment {
            from: point(from.0, from.1),
            to: point(to.0, to.1),
        };
        let b = segment.bounding_box();
        assert_eq!(b.min, point(min.0, min.1));
        assert_eq!(b.max, point(max.0, max.1));
    }
}

#[test]
fn sample_end_points() {
    let l = LineSegment {
        from: point(0.1f64, 0.7),
        to: point(13.3, -2.9),
    };

    assert_eq!(l.sample(0.0), l.from);
    assert_eq!(l.sample(1.0), l.to);
}

#[test]
fn length() {
    let l = LineSegment {
        from: point(1.0f64, 1.0),
        to: point(4.0, 5.0),
    };

    assert_eq!(l.length(), 5.0);
    assert_eq!(l.to_vector(), vector(3.0, 4.0));
    assert_eq!(l.sample(0.5), point(2.5, 3.0));
}
