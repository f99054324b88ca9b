use thiserror::Error;

/// Parameters that do not describe a valid geometric object.
///
/// This is returned at the boundary, as soon as the parameters are known, rather than
/// when the geometry is first used.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("Invalid geometry: {reason}")]
pub struct InvalidGeometry {
    reason: String,
}

impl InvalidGeometry {
    pub fn new(reason: impl Into<String>) -> Self {
        InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// A human readable description of the problem.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[test]
fn display() {
    let error = InvalidGeometry::new("radius is negative");
    assert_eq!(error.reason(), "radius is negative");
    assert_eq!(
        std::format!("{error}"),
        "Invalid geometry: radius is negative"
    );
}
