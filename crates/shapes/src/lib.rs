#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Geometric shapes as chains of segments, with parametric queries.
//!
//! This crate is reexported in [outline](https://docs.rs/outline/).
//!
//! # Overview
//!
//! A shape descriptor ([`Rectangle`], [`Circle`], [`Ellipse`], [`Polyline`] or
//! [`Polygon`]) holds the few parameters defining the shape. They are validated when
//! the descriptor is created and cannot change afterwards.
//!
//! The first query on a descriptor decomposes it into a [`Path`](path::Path): lines for
//! straight edges and cubic bézier curves approximating the arcs, within the
//! [tolerance](ShapeOptions::tolerance) of the descriptor's options. The path and its
//! length measurements are cached in the descriptor and shared by all later queries.
//!
//! Queries take a parameter `t` in `[0, 1]` which moves at a constant speed along the
//! outline of the shape: `point(0.5)` is half way along the outline.
//!
//! # Examples
//!
//! ```
//! use outline_shapes::{Circle, Rectangle, Shape};
//! use outline_shapes::math::{point, size};
//!
//! let rect = Rectangle::new(point(0.0, 0.0), size(100.0, 50.0)).unwrap();
//! assert_eq!(rect.length().unwrap(), 300.0);
//! assert_eq!(rect.point(0.5).unwrap(), point(100.0, 50.0));
//!
//! let circle = Circle::new(point(0.0, 0.0), 10.0).unwrap();
//! let circumference = circle.length().unwrap();
//! assert!((circumference - 20.0 * std::f64::consts::PI).abs() < 1e-3);
//!
//! // The decomposition is computed once.
//! assert!(std::ptr::eq(circle.to_path().unwrap(), circle.to_path().unwrap()));
//! ```

pub use outline_path as path;
pub use outline_path::geom;
pub use outline_path::math;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod ellipse;
mod error;
mod options;
mod outline;
mod poly;
mod rectangle;
mod shape;

#[doc(inline)]
pub use crate::ellipse::{Circle, Ellipse};
#[doc(inline)]
pub use crate::error::ShapeError;
#[doc(inline)]
pub use crate::options::ShapeOptions;
#[doc(inline)]
pub use crate::outline::Outline;
#[doc(inline)]
pub use crate::poly::{Polygon, Polyline};
#[doc(inline)]
pub use crate::rectangle::Rectangle;
#[doc(inline)]
pub use crate::shape::{AnyShape, Shape};
