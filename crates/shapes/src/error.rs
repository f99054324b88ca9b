use crate::geom::InvalidGeometry;
use crate::path::ChainingError;
use thiserror::Error;

/// The shape error enumeration.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The parameters do not describe a valid shape, or the query makes no sense for
    /// it (sampling a shape of length zero).
    #[error(transparent)]
    InvalidGeometry(#[from] InvalidGeometry),
    /// A parametric query received a value outside of `[0, 1]`.
    #[error("Parameter {value} is outside of [0, 1]")]
    ValueOutOfRange { value: f64 },
    /// The decomposition produced a broken chain of segments.
    #[error("Internal error: {0}")]
    Chaining(#[from] ChainingError),
}

impl ShapeError {
    /// Whether the error comes from a defect in this library rather than from the
    /// caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ShapeError::Chaining(..))
    }
}

#[test]
fn conversions() {
    use crate::math::point;

    let err: ShapeError = InvalidGeometry::new("too few points").into();
    assert!(!err.is_internal());
    assert_eq!(std::format!("{err}"), "Invalid geometry: too few points");

    let err: ShapeError = ChainingError {
        index: 0,
        end: point(0.0, 0.0),
        start: point(1.0, 0.0),
    }
    .into();
    assert!(err.is_internal());

    let err = ShapeError::ValueOutOfRange { value: 1.5 };
    assert_eq!(std::format!("{err}"), "Parameter 1.5 is outside of [0, 1]");
}
