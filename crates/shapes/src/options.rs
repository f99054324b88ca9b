use crate::geom::InvalidGeometry;

/// Parameters for the decomposition of shapes into segments.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ShapeOptions {
    /// Maximum allowed distance between a curve and its approximation.
    ///
    /// Bounds the error of the cubic bézier curves standing in for arcs, and of the
    /// length measurements of curves.
    ///
    /// Default value: `ShapeOptions::DEFAULT_TOLERANCE`.
    pub tolerance: f64,
}

impl ShapeOptions {
    /// Default approximation tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    pub const DEFAULT: Self = ShapeOptions {
        tolerance: Self::DEFAULT_TOLERANCE,
    };

    #[inline]
    pub fn tolerance(tolerance: f64) -> Self {
        Self::DEFAULT.with_tolerance(tolerance)
    }

    #[inline]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidGeometry> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(InvalidGeometry::new(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }

        Ok(())
    }
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn tolerance() {
    assert_eq!(ShapeOptions::default().tolerance, ShapeOptions::DEFAULT_TOLERANCE);
    assert_eq!(ShapeOptions::tolerance(0.5).tolerance, 0.5);
    assert!(ShapeOptions::tolerance(1e-3).validate().is_ok());
    assert!(ShapeOptions::tolerance(0.0).validate().is_err());
    assert!(ShapeOptions::tolerance(-1.0).validate().is_err());
    assert!(ShapeOptions::tolerance(f64::NAN).validate().is_err());
}
