use crate::error::ShapeError;
use crate::math::{Box2D, Point, Vector};
use crate::outline::Outline;
use crate::path::Path;
use crate::{Circle, Ellipse, Polygon, Polyline, Rectangle};

/// Parametric queries on a shape.
///
/// Implementors only provide access to their cached [`Outline`]; every query is
/// answered from it, so the shape is decomposed into segments on first use only.
pub trait Shape {
    /// The decomposed shape, computed on first use.
    fn outline(&self) -> Result<&Outline, ShapeError>;

    /// Whether the outline has already been computed.
    fn is_decomposed(&self) -> bool;

    /// Whether the outline ends where it starts.
    fn is_closed(&self) -> bool;

    /// Total length of the outline.
    fn length(&self) -> Result<f64, ShapeError> {
        Ok(self.outline()?.length())
    }

    /// Position at `t`, `t` being in `[0, 1]`.
    fn point(&self, t: f64) -> Result<Point, ShapeError> {
        self.outline()?.point(t)
    }

    /// Tangent at `t`, `t` being in `[0, 1]`: the derivative of the segment holding `t`.
    fn tangent(&self, t: f64) -> Result<Vector, ShapeError> {
        self.outline()?.tangent(t)
    }

    /// Smallest rectangle containing the shape.
    fn bounding_box(&self) -> Result<Box2D, ShapeError> {
        Ok(self.outline()?.bounding_box())
    }

    /// The chain of segments of the shape.
    ///
    /// Repeated calls return the same path.
    fn to_path(&self) -> Result<&Path, ShapeError> {
        Ok(self.outline()?.path())
    }
}

/// Any of the supported shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl AnyShape {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            AnyShape::Rectangle(shape) => shape,
            AnyShape::Circle(shape) => shape,
            AnyShape::Ellipse(shape) => shape,
            AnyShape::Polyline(shape) => shape,
            AnyShape::Polygon(shape) => shape,
        }
    }
}

impl Shape for AnyShape {
    fn outline(&self) -> Result<&Outline, ShapeError> {
        self.as_shape().outline()
    }

    fn is_decomposed(&self) -> bool {
        self.as_shape().is_decomposed()
    }

    fn is_closed(&self) -> bool {
        self.as_shape().is_closed()
    }
}

impl From<Rectangle> for AnyShape {
    fn from(shape: Rectangle) -> Self {
        AnyShape::Rectangle(shape)
    }
}

impl From<Circle> for AnyShape {
    fn from(shape: Circle) -> Self {
        AnyShape::Circle(shape)
    }
}

impl From<Ellipse> for AnyShape {
    fn from(shape: Ellipse) -> Self {
        AnyShape::Ellipse(shape)
    }
}

impl From<Polyline> for AnyShape {
    fn from(shape: Polyline) -> Self {
        AnyShape::Polyline(shape)
    }
}

impl From<Polygon> for AnyShape {
    fn from(shape: Polygon) -> Self {
        AnyShape::Polygon(shape)
    }
}

#[test]
fn any_shape_dispatch() {
    use crate::math::{point, size};

    let shapes: std::vec::Vec<AnyShape> = std::vec![
        Rectangle::new(point(0.0, 0.0), size(2.0, 1.0)).unwrap().into(),
        Circle::new(point(0.0, 0.0), 1.0).unwrap().into(),
        Polyline::new(std::vec![point(0.0, 0.0), point(3.0, 4.0)]).unwrap().into(),
    ];

    assert!(shapes[0].is_closed());
    assert!(shapes[1].is_closed());
    assert!(!shapes[2].is_closed());

    assert!(!shapes[0].is_decomposed());
    assert_eq!(shapes[0].length().unwrap(), 6.0);
    assert!(shapes[0].is_decomposed());
    assert_eq!(shapes[2].point(0.5).unwrap(), point(1.5, 2.0));
}
