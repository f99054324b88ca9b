use crate::scalar::Scalar;
use crate::{point, Box2D, Point, Vector};
use arrayvec::ArrayVec;

/// Maximum number of times the length approximation halves a curve.
const MAX_LENGTH_DEPTH: u32 = 16;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
///
/// The arcs of the shapes are approximated with these curves.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    ///
    /// `sample(0.0)` and `sample(1.0)` return `from` and `to` exactly.
    pub fn sample(&self, t: S) -> Point<S> {
        point(
            bernstein(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x, t),
            bernstein(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y, t),
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    ///
    /// The derivative of a cubic is three times the quadratic curve built on the
    /// differences of consecutive control points.
    pub fn derivative(&self, t: S) -> Vector<S> {
        let one_t = S::ONE - t;
        let d0 = self.ctrl1 - self.from;
        let d1 = self.ctrl2 - self.ctrl1;
        let d2 = self.to - self.ctrl2;

        (d0 * (one_t * one_t) + d1 * (S::TWO * one_t * t) + d2 * (t * t)) * S::THREE
    }

    /// Split this curve into two sub-curves with de Casteljau's algorithm.
    ///
    /// The two halves share the split point exactly.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ab = self.from.lerp(self.ctrl1, t);
        let bc = self.ctrl1.lerp(self.ctrl2, t);
        let cd = self.ctrl2.lerp(self.to, t);
        let abc = ab.lerp(bc, t);
        let bcd = bc.lerp(cd, t);
        let mid = abc.lerp(bcd, t);

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ab,
                ctrl2: abc,
                to: mid,
            },
            CubicBezierSegment {
                from: mid,
                ctrl1: bcd,
                ctrl2: cd,
                to: self.to,
            },
        )
    }

    /// Compute the length of the curve.
    ///
    /// The curve is recursively halved until the length of its control polygon and the
    /// length of its chord are within `tolerance` of each other, and each piece
    /// contributes the average of the two (Gravesen's estimate).
    pub fn approximate_length(&self, tolerance: S) -> S {
        let tolerance = tolerance.max(S::EPSILON * S::EPSILON);
        self.approximate_length_impl(tolerance, 0)
    }

    fn approximate_length_impl(&self, tolerance: S, depth: u32) -> S {
        let chord = (self.to - self.from).length();
        let polygon = (self.ctrl1 - self.from).length()
            + (self.ctrl2 - self.ctrl1).length()
            + (self.to - self.ctrl2).length();

        if polygon - chord <= tolerance || depth >= MAX_LENGTH_DEPTH {
            return (chord + polygon) * S::HALF;
        }

        let (a, b) = self.split(S::HALF);

        a.approximate_length_impl(tolerance, depth + 1)
            + b.approximate_length_impl(tolerance, depth + 1)
    }

    /// Returns the smallest rectangle that contains the curve.
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = axis_range(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x);
        let (min_y, max_y) = axis_range(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y);

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }
}

/// One coordinate of the curve at t.
#[inline]
fn bernstein<S: Scalar>(p0: S, p1: S, p2: S, p3: S, t: S) -> S {
    let one_t = S::ONE - t;
    let one_t2 = one_t * one_t;
    let t2 = t * t;

    p0 * one_t2 * one_t + p1 * S::THREE * one_t2 * t + p2 * S::THREE * one_t * t2 + p3 * t2 * t
}

/// Parameters in (0, 1) where one coordinate of the curve has a local extremum.
///
/// These are the roots of the derivative `a·t² + b·t + c`.
fn local_extrema<S: Scalar>(p0: S, p1: S, p2: S, p3: S) -> ArrayVec<S, 2> {
    let a = S::THREE * (p3 - p0 + S::THREE * (p1 - p2));
    let b = S::THREE * S::TWO * (p0 - S::TWO * p1 + p2);
    let c = S::THREE * (p1 - p0);

    let mut roots = ArrayVec::new();
    let mut push = |t: S| {
        if t > S::ZERO && t < S::ONE {
            roots.push(t);
        }
    };

    if a == S::ZERO {
        if b != S::ZERO {
            push(-c / b);
        }
    } else {
        let discriminant = b * b - S::FOUR * a * c;
        if discriminant == S::ZERO {
            push(-b / (S::TWO * a));
        } else if discriminant > S::ZERO {
            let sqrt = discriminant.sqrt();
            push((-b - sqrt) / (S::TWO * a));
            push((-b + sqrt) / (S::TWO * a));
        }
    }

    roots
}

/// Range covered by one coordinate of the curve: its end points and local extrema.
fn axis_range<S: Scalar>(p0: S, p1: S, p2: S, p3: S) -> (S, S) {
    let mut min = p0.min(p3);
    let mut max = p0.max(p3);
    for t in local_extrema(p0, p1, p2, p3) {
        let v = bernstein(p0, p1, p2, p3, t);
        min = min.min(v);
        max = max.max(v);
    }

    (min, max)
}

#[cfg(test)]
use crate::vector;

#[test]
fn bounding_box_of_s_curve() {
    let a = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.5, 2.0),
        ctrl2: point(1.5, -2.0),
        to: point(2.0, 0.0),
    };

    let b = a.bounding_box();
    let outer = Box2D {
        min: point(0.0, -0.6),
        max: point(2.0, 0.6),
    };
    let inner = Box2D {
        min: point(0.1, -0.5),
        max: point(2.0, 0.5),
    };

    assert!(outer.contains_box(&b));
    assert!(b.contains_box(&inner));
    // The curve is symmetric around its middle.
    assert!((b.max.y + b.min.y).abs() < 1e-12);
}

#[test]
fn bounding_box_of_monotonic_curve() {
    let a = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.5, 1.0),
        ctrl2: point(1.5, 1.0),
        to: point(2.0, 2.0),
    };

    let b = a.bounding_box();
    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(2.0, 2.0));
}

#[test]
fn single_extremum() {
    // x goes out and back, peaking half way.
    let roots = local_extrema(0.0f64, 1.0, 1.0, 0.0);
    assert_eq!(roots.as_slice(), &[0.5]);
    assert_eq!(axis_range(0.0f64, 1.0, 1.0, 0.0), (0.0, 0.75));
    assert!(local_extrema(0.0f64, 1.0, 2.0, 3.0).is_empty());
}

#[test]
fn derivatives() {
    let c = CubicBezierSegment {
        from: point(1.0f64, 1.0),
        ctrl1: point(1.0, 2.0),
        ctrl2: point(2.0, 1.0),
        to: point(2.0, 2.0),
    };

    assert_eq!(c.derivative(0.0), vector(0.0, 3.0));
    assert_eq!(c.derivative(1.0), vector(0.0, 3.0));
    assert_eq!(c.derivative(0.5).y, 0.0);

    // Compare with a finite difference.
    let h = 1e-6;
    let d = (c.sample(0.3 + h) - c.sample(0.3 - h)) / (2.0 * h);
    assert!((d - c.derivative(0.3)).length() < 1e-6);
}

#[test]
fn sample_end_points() {
    let c = CubicBezierSegment {
        from: point(0.3f64, -1.7),
        ctrl1: point(2.1, 5.5),
        ctrl2: point(7.9, -3.3),
        to: point(10.1, 0.9),
    };

    assert_eq!(c.sample(0.0), c.from);
    assert_eq!(c.sample(1.0), c.to);

    let (a, b) = c.split(0.3);
    assert_eq!(a.from, c.from);
    assert_eq!(a.to, b.from);
    assert_eq!(b.to, c.to);
    assert!((a.to - c.sample(0.3)).length() < 1e-12);
}

#[test]
fn straight_curve_length() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };

    assert!((c.approximate_length(1e-9) - 3.0).abs() < 1e-12);
}

#[test]
fn quarter_circle_length() {
    // Classic cubic approximation of a quarter of the unit circle.
    let kappa = 4.0 / 3.0 * (2.0f64.sqrt() - 1.0);
    let c = CubicBezierSegment {
        from: point(1.0f64, 0.0),
        ctrl1: point(1.0, kappa),
        ctrl2: point(kappa, 1.0),
        to: point(0.0, 1.0),
    };

    let expected = core::f64::consts::FRAC_PI_2;
    let coarse = c.approximate_length(1e-2);
    let fine = c.approximate_length(1e-9);
    assert!((fine - expected).abs() < 1e-3);
    assert!((coarse - fine).abs() < 1e-2);
}
