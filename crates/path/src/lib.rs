#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures to store, build and measure chains of 2D segments.
//!
//! A [`Path`] is an ordered sequence of line, cubic bézier and arc segments in which
//! each segment starts exactly (bit for bit) where the previous one ends. Paths are
//! usually created with a [`PathBuilder`], which stores every shared endpoint once
//! and therefore cannot produce gaps.
//!
//! This crate is reexported in [outline](https://docs.rs/outline/).
//!
//! # Examples
//!
//! ```
//! use outline_path::{Path, PathMeasurements};
//! use outline_path::math::point;
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! builder.line_to(point(10.0, 10.0));
//! builder.close();
//!
//! let path = builder.build().unwrap();
//! assert!(path.is_closed());
//!
//! let measurements = PathMeasurements::from_path(&path, 1e-6);
//! assert_eq!(measurements.locate(0.0), Some((0, 0.0)));
//! ```

pub use outline_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
pub mod measure;
pub mod path;
mod segment;

#[doc(inline)]
pub use crate::builder::PathBuilder;
#[doc(inline)]
pub use crate::measure::PathMeasurements;
#[doc(inline)]
pub use crate::path::{ChainingError, Path};
#[doc(inline)]
pub use crate::segment::PathSegment;

pub mod math {
    //! f64 version of the outline_geom types used everywhere. The other outline crates
    //! reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Size2D<f64>```.
    pub type Size = euclid::default::Size2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```
    pub type Box2D = euclid::default::Box2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Radii of an ellipse or of rounded corners (f64).
    pub type Radii = crate::geom::Radii<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(w, h)`.
    #[inline]
    pub fn size(w: f64, h: f64) -> Size {
        Size::new(w, h)
    }

    /// Shorthand for `Radii::new(x, y)`.
    #[inline]
    pub fn radii(x: f64, y: f64) -> Radii {
        Radii::new(x, y)
    }
}
