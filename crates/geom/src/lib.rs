#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [outline](https://docs.rs/outline/).
//!
//! # Overview.
//!
//! This crate implements the maths to work with:
//!
//! - line segments,
//! - cubic bézier curves,
//! - elliptic arcs, and their approximation with sequences of cubic bézier curves.
//!
//! # Arc approximation
//!
//! Elliptic arcs cannot be represented exactly with bézier curves. The approximation
//! splits the arc into sub-arcs of equal angle and fits one cubic bézier curve on each
//! of them with the usual `4/3 * tan(θ/4)` control point distance. The number of
//! sub-arcs is chosen so that the distance between the curve and its approximation
//! stays below the requested maximum error.
//!
//! Consecutive curves produced by the approximation share their endpoints bit for bit,
//! which lets them be stitched into paths without any gap.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod cubic_bezier;
mod error;
mod line;
pub mod utils;

#[doc(inline)]
pub use crate::arc::Arc;
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::error::InvalidGeometry;
#[doc(inline)]
pub use crate::line::LineSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::cast::cast;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, MulAssign};

    /// Floating point type the segments are computed with.
    ///
    /// Outlines are measured and sampled in `f64`, the trait keeps the maths readable by
    /// naming the few constants the formulas need.
    pub trait Scalar:
        Float + NumCast + FloatConst + Trig + Display + Debug + AddAssign + MulAssign + Send + Sync
    {
        const ZERO: Self;
        const HALF: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;

        /// Smallest tolerance the length estimations work with.
        const EPSILON: Self;

        /// Distance under which two positions of the given magnitude are considered the
        /// same, absorbing the rounding noise of trigonometric evaluations.
        fn epsilon_for(reference: Self) -> Self;

        fn value(v: f64) -> Self;
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const HALF: Self = 0.5;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;

        const EPSILON: Self = 1e-8;

        fn epsilon_for(reference: Self) -> Self {
            let magnitude = reference.abs() as i64;
            match magnitude {
                0..=65_535 => 1e-8,
                65_536..=8_388_607 => 1e-5,
                8_388_608..=4_294_967_295 => 1e-3,
                _ => 1e-1,
            }
        }

        #[inline]
        fn value(v: f64) -> Self {
            v
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// Alias for `euclid::default::Rotation2D`
pub type Rotation<S> = euclid::default::Rotation2D<S>;

/// An angle in radians.
pub use euclid::Angle;

/// The two radii of an ellipse, or of the rounded corners of a rectangle.
///
/// `x` is the radius along the ellipse's first axis and `y` along the second one,
/// before any rotation is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Radii<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Radii<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Radii { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Radii {
            x: S::ZERO,
            y: S::ZERO,
        }
    }

    /// Returns true if either of the radii is zero.
    ///
    /// An ellipse with a zero radius collapses into a line segment or a point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.x == S::ZERO || self.y == S::ZERO
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn max_radius(&self) -> S {
        self.x.max(self.y)
    }
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Shorthand for `Radii::new(x, y)`.
#[inline]
pub fn radii<S: Scalar>(x: S, y: S) -> Radii<S> {
    Radii::new(x, y)
}

#[test]
fn degenerate_radii() {
    assert!(radii(0.0, 2.0).is_degenerate());
    assert!(radii(3.0, 0.0).is_degenerate());
    assert!(!radii(1.0f64, 1.0).is_degenerate());
    assert!(Radii::<f64>::zero().is_degenerate());
    assert!(!radii(f64::NAN, 1.0).is_finite());
    assert_eq!(radii(3.0f64, 5.0).max_radius(), 5.0);
}
