//! Elliptic arc related maths and tools.

use crate::scalar::{cast, Float, Scalar};
use crate::utils::positive_angle;
use crate::{Angle, Box2D, CubicBezierSegment, InvalidGeometry, Point, Radii, Rotation, Vector};

/// Upper bound on the number of cubic bézier curves produced for a single arc.
pub const MAX_SUB_ARCS: u32 = 1024;

/// An elliptic arc curve segment.
///
/// The ellipse is centered on `center`, its axes have the lengths given by `radii`
/// and are rotated by `x_rotation`. The arc starts at `start_angle` on the ellipse and
/// runs over `sweep_angle`, counter-clockwise for positive sweeps in a y-up coordinate
/// system (clockwise on screen with y pointing down).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radii: Radii<S>,
    pub start_angle: Angle<S>,
    pub sweep_angle: Angle<S>,
    pub x_rotation: Angle<S>,
}

impl<S: Scalar> Arc<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        if t == S::ONE {
            return self.to();
        }

        self.point_at_angle(self.get_angle(t))
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    #[inline]
    pub fn derivative(&self, t: S) -> Vector<S> {
        self.tangent_at_angle(self.get_angle(t).radians) * self.sweep_angle.radians
    }

    /// Sample the curve's angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn get_angle(&self, t: S) -> Angle<S> {
        self.start_angle + Angle::radians(self.sweep_angle.radians * t)
    }

    #[inline]
    pub fn end_angle(&self) -> Angle<S> {
        self.start_angle + self.sweep_angle
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.point_at_angle(self.start_angle)
    }

    /// The end of the arc.
    ///
    /// A full turn ends exactly where it starts.
    #[inline]
    pub fn to(&self) -> Point<S> {
        if self.is_full_turn() {
            return self.from();
        }

        self.point_at_angle(self.end_angle())
    }

    #[inline]
    pub fn is_full_turn(&self) -> bool {
        self.sweep_angle.radians.abs() == S::TWO * S::PI()
    }

    /// Checks that the arc can be approximated with the requested maximum error.
    pub fn validate(&self, max_error: S) -> Result<(), InvalidGeometry> {
        if !self.radii.is_finite() || self.radii.x <= S::ZERO || self.radii.y <= S::ZERO {
            return Err(InvalidGeometry::new(format!(
                "arc radii must be positive and finite, got ({}, {})",
                self.radii.x, self.radii.y
            )));
        }

        let tau = S::TWO * S::PI();
        let sweep = self.sweep_angle.radians;
        if !sweep.is_finite() || sweep <= -tau || sweep > tau {
            return Err(InvalidGeometry::new(format!(
                "arc sweep angle must be in (-2π, 2π], got {}",
                sweep
            )));
        }

        if !self.center.x.is_finite()
            || !self.center.y.is_finite()
            || !self.start_angle.radians.is_finite()
            || !self.x_rotation.radians.is_finite()
        {
            return Err(InvalidGeometry::new("arc parameters must be finite"));
        }

        if !max_error.is_finite() || max_error <= S::ZERO {
            return Err(InvalidGeometry::new(format!(
                "maximum error must be positive and finite, got {}",
                max_error
            )));
        }

        Ok(())
    }

    /// Approximates the arc with a sequence of cubic bézier curves, invoking a callback
    /// for each of them.
    ///
    /// The distance between the arc and its approximation does not exceed `max_error`.
    /// The first curve starts exactly at `self.from()`, the last one ends exactly at
    /// `self.to()`, and each curve starts exactly where the previous one ends.
    /// A zero sweep produces no curve.
    pub fn for_each_cubic_bezier<F>(&self, max_error: S, cb: &mut F) -> Result<(), InvalidGeometry>
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        self.validate(max_error)?;
        self.for_each_cubic_bezier_unchecked(max_error, cb);

        Ok(())
    }

    /// Approximates the arc with a sequence of cubic bézier curves.
    ///
    /// See `for_each_cubic_bezier`.
    pub fn to_cubic_beziers(&self, max_error: S) -> Result<Vec<CubicBezierSegment<S>>, InvalidGeometry> {
        let mut curves = Vec::new();
        self.for_each_cubic_bezier(max_error, &mut |curve| curves.push(*curve))?;

        Ok(curves)
    }

    fn for_each_cubic_bezier_unchecked<F>(&self, max_error: S, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        let sweep = self.sweep_angle.radians;
        if sweep == S::ZERO {
            return;
        }

        let n = self.sub_arc_count(max_error);
        log::trace!("approximating arc sweeping {} rad with {} curve(s)", sweep, n);

        let start = self.start_angle.radians;
        let step = sweep / S::value(f64::from(n));
        let kappa = S::FOUR / S::THREE * Float::tan(step / S::FOUR);

        let mut from = self.from();
        let mut from_angle = start;
        for i in 1..=n {
            let (to_angle, to) = if i == n {
                (start + sweep, self.to())
            } else {
                let a = start + step * S::value(f64::from(i));
                (a, self.point_at_angle(Angle::radians(a)))
            };

            let ctrl1 = from + self.tangent_at_angle(from_angle) * kappa;
            let ctrl2 = to - self.tangent_at_angle(to_angle) * kappa;

            cb(&CubicBezierSegment {
                from,
                ctrl1,
                ctrl2,
                to,
            });

            from = to;
            from_angle = to_angle;
        }
    }

    /// Number of equal sub-arcs, each approximated by one cubic bézier curve.
    ///
    /// Sub-arcs never span more than a quarter turn. The count never exceeds
    /// [`MAX_SUB_ARCS`]: when an arc would need more curves to stay within `max_error`,
    /// the limit is used anyway and the approximation error is larger than requested.
    pub fn sub_arc_count(&self, max_error: S) -> u32 {
        let sweep = self.sweep_angle.radians.abs();
        if sweep == S::ZERO {
            return 0;
        }

        let quarters: u32 = cast((sweep / S::FRAC_PI_2()).ceil()).unwrap_or(1);
        let mut n = quarters.clamp(1, MAX_SUB_ARCS);
        let r = self.radii.max_radius();
        while approximation_error(r, sweep / S::value(f64::from(n))) > max_error {
            if n == MAX_SUB_ARCS {
                log::warn!(
                    "arc of radius {} needs more than {} curves to stay within {}",
                    r,
                    MAX_SUB_ARCS,
                    max_error
                );
                break;
            }
            n += 1;
        }

        n
    }

    /// Returns the length of the arc, measured on its cubic bézier approximation.
    ///
    /// Degenerate arcs (zero radius) have a length of zero.
    pub fn approximate_length(&self, tolerance: S) -> S {
        if self.radii.is_degenerate() || self.sweep_angle.radians == S::ZERO {
            return S::ZERO;
        }

        let tolerance = tolerance.max(S::EPSILON * S::EPSILON);
        let mut length = S::ZERO;
        if self.validate(tolerance).is_err() {
            return length;
        }

        self.for_each_cubic_bezier_unchecked(tolerance, &mut |curve| {
            length += curve.approximate_length(tolerance);
        });

        length
    }

    /// Returns the smallest rectangle that contains the curve.
    pub fn bounding_box(&self) -> Box2D<S> {
        let from = self.from();
        let to = self.to();
        let mut min = from.min(to);
        let mut max = from.max(to);
        self.for_each_local_extremum_angle(&mut |angle| {
            let p = self.point_at_angle(angle);
            min = min.min(p);
            max = max.max(p);
        });

        Box2D { min, max }
    }

    /// Invokes the callback with the angles within the arc's sweep at which x or y
    /// reach a local extremum.
    fn for_each_local_extremum_angle<F>(&self, cb: &mut F)
    where
        F: FnMut(Angle<S>),
    {
        let (rx, ry) = (self.radii.x, self.radii.y);
        let (sin, cos) = (Float::sin(self.x_rotation.radians), Float::cos(self.x_rotation.radians));
        let theta_x = (-ry * sin).atan2(rx * cos);
        let theta_y = (ry * cos).atan2(rx * sin);

        for theta in [theta_x, theta_x + S::PI(), theta_y, theta_y + S::PI()] {
            if self.contains_angle(theta) {
                cb(Angle::radians(theta));
            }
        }
    }

    fn contains_angle(&self, angle: S) -> bool {
        let sweep = self.sweep_angle.radians;
        if self.is_full_turn() {
            return true;
        }

        let offset = if sweep >= S::ZERO {
            positive_angle(angle - self.start_angle.radians)
        } else {
            positive_angle(self.start_angle.radians - angle)
        };

        offset <= sweep.abs()
    }

    #[inline]
    fn point_at_angle(&self, angle: Angle<S>) -> Point<S> {
        self.center + sample_ellipse(self.radii, self.x_rotation, angle.radians)
    }

    #[inline]
    fn tangent_at_angle(&self, angle: S) -> Vector<S> {
        Rotation::new(self.x_rotation).transform_vector(Vector::new(
            -self.radii.x * Float::sin(angle),
            self.radii.y * Float::cos(angle),
        ))
    }
}

/// Maximum radial distance between a circular arc of radius `r` spanning `theta` and
/// its cubic bézier approximation.
#[inline]
fn approximation_error<S: Scalar>(r: S, theta: S) -> S {
    let quarter = theta / S::FOUR;
    let sin = Float::sin(quarter);
    let cos = Float::cos(quarter);
    let sin2 = sin * sin;

    r * S::FOUR / S::value(27.0) * sin2 * sin2 * sin2 / (cos * cos)
}

#[inline]
fn sample_ellipse<S: Scalar>(radii: Radii<S>, x_rotation: Angle<S>, angle: S) -> Vector<S> {
    Rotation::new(x_rotation).transform_vector(Vector::new(
        radii.x * Float::cos(angle),
        radii.y * Float::sin(angle),
    ))
}

#[cfg(test)]
use crate::{point, radii};
#[cfg(test)]
use core::f64::consts::PI;

#[cfg(test)]
fn circle_arc(r: f64, start: f64, sweep: f64) -> Arc<f64> {
    Arc {
        center: point(3.0, -2.0),
        radii: radii(r, r),
        start_angle: Angle::radians(start),
        sweep_angle: Angle::radians(sweep),
        x_rotation: Angle::zero(),
    }
}

#[test]
fn curves_are_chained_exactly() {
    let arc = Arc {
        center: point(10.0, 20.0),
        radii: radii(30.0, 7.5),
        start_angle: Angle::radians(0.3),
        sweep_angle: Angle::radians(-4.1),
        x_rotation: Angle::radians(0.7),
    };

    let curves = arc.to_cubic_beziers(1e-4).unwrap();
    assert!(curves.len() >= 3);
    assert_eq!(curves[0].from, arc.from());
    assert_eq!(curves[curves.len() - 1].to, arc.to());
    for pair in curves.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
}

#[test]
fn quarter_turn_needs_one_curve_for_coarse_errors() {
    let arc = circle_arc(1.0, 0.0, PI / 2.0);
    assert_eq!(arc.sub_arc_count(1e-3), 1);
    assert!(arc.sub_arc_count(1e-6) > 1);
    assert_eq!(circle_arc(1.0, 0.0, 3.0 * PI / 2.0 + 0.1).sub_arc_count(1.0), 4);
}

#[test]
fn approximation_stays_within_max_error() {
    let r = 25.0;
    let max_error = 1e-3;
    let arc = circle_arc(r, 0.4, 5.5);
    let curves = arc.to_cubic_beziers(max_error).unwrap();

    for curve in &curves {
        for i in 0..=32 {
            let p = curve.sample(i as f64 / 32.0);
            let d = (p - arc.center).length();
            assert!((d - r).abs() <= max_error, "distance {} from the circle", (d - r).abs());
        }
    }
}

#[test]
fn full_turn_closes_exactly() {
    let arc = circle_arc(5.0, 0.25, 2.0 * PI);
    assert!(arc.is_full_turn());
    assert_eq!(arc.to(), arc.from());
    assert_eq!(arc.sample(1.0), arc.from());

    let curves = arc.to_cubic_beziers(1e-6).unwrap();
    assert_eq!(curves[curves.len() - 1].to, curves[0].from);
}

#[test]
fn zero_sweep_produces_nothing() {
    let arc = circle_arc(5.0, 1.0, 0.0);
    assert_eq!(arc.to_cubic_beziers(0.1).unwrap(), std::vec![]);
    assert_eq!(arc.approximate_length(0.1), 0.0);
}

#[test]
fn invalid_parameters() {
    assert!(circle_arc(0.0, 0.0, 1.0).to_cubic_beziers(0.1).is_err());
    assert!(circle_arc(-1.0, 0.0, 1.0).to_cubic_beziers(0.1).is_err());
    assert!(circle_arc(f64::NAN, 0.0, 1.0).to_cubic_beziers(0.1).is_err());
    assert!(circle_arc(1.0, 0.0, 7.0).to_cubic_beziers(0.1).is_err());
    assert!(circle_arc(1.0, 0.0, -2.0 * PI).to_cubic_beziers(0.1).is_err());
    assert!(circle_arc(1.0, 0.0, 1.0).to_cubic_beziers(0.0).is_err());
    assert!(circle_arc(1.0, 0.0, 1.0).to_cubic_beziers(f64::INFINITY).is_err());
    assert!(circle_arc(1.0, 0.0, 2.0 * PI).to_cubic_beziers(0.1).is_ok());
}

#[test]
fn sub_arc_count_is_capped() {
    // A huge radius and a tiny error would need millions of curves.
    let arc = circle_arc(1e9, 0.0, 2.0 * PI);
    assert_eq!(arc.sub_arc_count(1e-9), MAX_SUB_ARCS);
    assert_eq!(arc.to_cubic_beziers(1e-9).unwrap().len(), MAX_SUB_ARCS as usize);
    assert!(circle_arc(1e9, 0.0, 2.0 * PI).sub_arc_count(1e3) < MAX_SUB_ARCS);
}

#[test]
fn half_circle_length() {
    let arc = circle_arc(10.0, 0.0, PI);
    let length = arc.approximate_length(1e-6);
    assert!((length - 10.0 * PI).abs() < 1e-4);
}

#[test]
fn bounding_box_of_quarter_arc() {
    let arc = Arc {
        center: point(0.0, 0.0),
        radii: radii(2.0, 1.0),
        start_angle: Angle::radians(-PI / 4.0),
        sweep_angle: Angle::radians(PI / 2.0),
        x_rotation: Angle::zero(),
    };

    let b = arc.bounding_box();
    // The arc goes through the rightmost point of the ellipse.
    assert!((b.max.x - 2.0).abs() < 1e-12);
    assert!((b.min.x - arc.from().x).abs() < 1e-12);
    assert!((b.min.y - arc.from().y).abs() < 1e-12);
    assert!((b.max.y - arc.to().y).abs() < 1e-12);
}

#[test]
fn bounding_box_of_rotated_ellipse() {
    let arc = Arc {
        center: point(1.0, 1.0),
        radii: radii(3.0, 1.0),
        start_angle: Angle::zero(),
        sweep_angle: Angle::radians(2.0 * PI),
        x_rotation: Angle::radians(PI / 4.0),
    };

    let b = arc.bounding_box();
    // Half extent of an ellipse rotated by 45°: sqrt((rx² + ry²) / 2).
    let half = 5.0f64.sqrt();
    assert!((b.max.x - (1.0 + half)).abs() < 1e-9);
    assert!((b.min.x - (1.0 - half)).abs() < 1e-9);
    assert!((b.max.y - (1.0 + half)).abs() < 1e-9);
    assert!((b.min.y - (1.0 - half)).abs() < 1e-9);
}

#[test]
fn derivative_is_scaled_by_sweep() {
    let arc = circle_arc(2.0, 0.0, PI);
    let d = arc.derivative(0.0);
    assert!((d.x - 0.0).abs() < 1e-12);
    assert!((d.y - 2.0 * PI).abs() < 1e-12);

    let h = 1e-6;
    let t = 0.3;
    let d = (arc.sample(t + h) - arc.sample(t - h)) / (2.0 * h);
    assert!((d - arc.derivative(t)).length() < 1e-6);
}
