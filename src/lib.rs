#![deny(bare_trait_objects)]

//! Geometric shapes as chains of segments, in Rust.
//!
//! # Crates
//!
//! This meta-crate (`outline`) reexports the following sub-crates for convenience:
//!
//! * **outline_geom** - Line segments, cubic bézier curves, elliptic arcs and the
//!   approximation of arcs with cubic bézier curves.
//! * **outline_path** - Chains of segments with exact endpoint continuity, a builder
//!   and cumulative length measurements.
//! * **outline_shapes** - Rectangles, circles, ellipses, polylines and polygons with
//!   parametric point, tangent, length and bounding box queries.
//!
//! Each `outline_<name>` crate is reexported as a `<name>` module in `outline`. For example:
//!
//! ```ignore
//! extern crate outline_shapes;
//! use outline_shapes::Circle;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate outline;
//! use outline::shapes::Circle;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Walking along a rounded rectangle
//!
//! ```
//! use outline::math::{point, radii, size};
//! use outline::shapes::{Rectangle, Shape};
//!
//! fn main() {
//!     let rect = Rectangle::rounded(
//!         point(0.0, 0.0),
//!         size(100.0, 50.0),
//!         radii(10.0, 10.0),
//!     ).unwrap();
//!
//!     for i in 0..=8 {
//!         let t = i as f64 / 8.0;
//!         let p = rect.point(t).unwrap();
//!         let v = rect.tangent(t).unwrap();
//!         println!("t = {}: position {:?}, direction {:?}", t, p, v.normalize());
//!     }
//!
//!     // Closed shapes end exactly where they start.
//!     assert_eq!(rect.point(0.0).unwrap(), rect.point(1.0).unwrap());
//! }
//! ```
//!
//! ## Approximating an arc
//!
//! ```
//! use outline::geom::Arc;
//! use outline::math::{point, radii, Angle};
//!
//! let arc = Arc {
//!     center: point(0.0, 0.0),
//!     radii: radii(20.0, 10.0),
//!     start_angle: Angle::zero(),
//!     sweep_angle: Angle::frac_pi_2(),
//!     x_rotation: Angle::zero(),
//! };
//!
//! let curves = arc.to_cubic_beziers(0.01).unwrap();
//! assert_eq!(curves[0].from, arc.from());
//! assert_eq!(curves[curves.len() - 1].to, arc.to());
//! ```
//!
//! ## What is the tolerance?
//!
//! Elliptic arcs cannot be represented exactly with cubic bézier curves, so shapes
//! with rounded parts are approximated. The tolerance of a shape's
//! [`ShapeOptions`](shapes::ShapeOptions) is the maximum distance allowed between the
//! exact outline and its approximation. It also bounds the error of the length
//! measurements.

pub extern crate outline_shapes;

pub use outline_shapes as shapes;
pub use shapes::geom;
pub use shapes::math;
pub use shapes::path;
