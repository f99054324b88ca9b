//! The decomposed form of a shape and the parametric queries on it.

use crate::error::ShapeError;
use crate::geom::InvalidGeometry;
use crate::math::{Box2D, Point, Vector};
use crate::path::{Path, PathMeasurements};

use once_cell::sync::OnceCell;

/// A shape decomposed into a chain of segments, along with its measurements.
///
/// Queries take a parameter `t` in `[0, 1]` which advances at a constant speed along
/// the whole outline: `t = 0.5` is half way along its length.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    path: Path,
    measurements: PathMeasurements,
    bounding_box: Box2D,
}

impl Outline {
    /// Measures a path, curves within `tolerance`.
    pub fn new(path: Path, tolerance: f64) -> Result<Self, ShapeError> {
        let bounding_box = path
            .bounding_box()
            .ok_or_else(|| InvalidGeometry::new("a shape needs at least one segment"))?;
        let measurements = PathMeasurements::from_path(&path, tolerance);

        Ok(Outline {
            path,
            measurements,
            bounding_box,
        })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn measurements(&self) -> &PathMeasurements {
        &self.measurements
    }

    /// Total length of the outline.
    #[inline]
    pub fn length(&self) -> f64 {
        self.measurements.length()
    }

    /// Smallest rectangle containing the outline.
    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        self.bounding_box
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.path.is_closed()
    }

    /// Position at `t`.
    ///
    /// `point(0.0)` is the start of the first segment and `point(1.0)` the end of the last
    /// one, exactly.
    pub fn point(&self, t: f64) -> Result<Point, ShapeError> {
        let (index, local_t) = self.locate(t)?;

        Ok(self.path[index].sample(local_t))
    }

    /// Tangent at `t`: the derivative of the segment holding `t`, at the matching
    /// parameter on that segment.
    ///
    /// On a line this is the vector from its start to its end.
    pub fn tangent(&self, t: f64) -> Result<Vector, ShapeError> {
        let (index, local_t) = self.locate(t)?;

        Ok(self.path[index].derivative(local_t))
    }

    fn locate(&self, t: f64) -> Result<(usize, f64), ShapeError> {
        if !(0.0..=1.0).contains(&t) {
            return Err(ShapeError::ValueOutOfRange { value: t });
        }

        self.measurements
            .locate(t)
            .ok_or_else(|| InvalidGeometry::new("cannot sample a shape of length zero").into())
    }
}

/// Lazily computed outline of a shape descriptor.
///
/// The outline is computed at most once and never changes afterwards. Cloning the cache
/// produces an empty one.
#[derive(Default)]
pub(crate) struct OutlineCache {
    cell: OnceCell<Outline>,
}

impl OutlineCache {
    pub(crate) fn new() -> Self {
        OutlineCache {
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached outline, building and measuring the path first if needed.
    pub(crate) fn get_or_build<F>(
        &self,
        kind: &str,
        tolerance: f64,
        build: F,
    ) -> Result<&Outline, ShapeError>
    where
        F: FnOnce() -> Result<Path, ShapeError>,
    {
        self.cell.get_or_try_init(|| {
            let outline = Outline::new(build()?, tolerance)?;
            log::debug!(
                "decomposed {} into {} segment(s), length {}",
                kind,
                outline.path().len(),
                outline.length()
            );

            Ok(outline)
        })
    }

    #[inline]
    pub(crate) fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Clone for OutlineCache {
    fn clone(&self) -> Self {
        OutlineCache::new()
    }
}

#[cfg(test)]
use crate::math::{point, vector};

#[cfg(test)]
fn square_outline(side: f64) -> Outline {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(side, 0.0));
    builder.line_to(point(side, side));
    builder.line_to(point(0.0, side));
    builder.close();

    Outline::new(builder.build().unwrap(), 1e-6).unwrap()
}

#[test]
fn square_queries() {
    let outline = square_outline(2.0);

    assert!(outline.is_closed());
    assert_eq!(outline.length(), 8.0);
    assert_eq!(outline.point(0.0).unwrap(), point(0.0, 0.0));
    assert_eq!(outline.point(1.0).unwrap(), point(0.0, 0.0));
    assert_eq!(outline.point(0.125).unwrap(), point(1.0, 0.0));
    assert_eq!(outline.point(0.5).unwrap(), point(2.0, 2.0));
    assert_eq!(outline.tangent(0.1).unwrap(), vector(2.0, 0.0));
    assert_eq!(outline.tangent(0.3).unwrap(), vector(0.0, 2.0));
    assert_eq!(outline.tangent(1.0).unwrap(), vector(0.0, -2.0));
    assert_eq!(outline.bounding_box().max, point(2.0, 2.0));
}

#[test]
fn out_of_range_parameters() {
    let outline = square_outline(1.0);

    assert_eq!(
        outline.point(1.5),
        Err(ShapeError::ValueOutOfRange { value: 1.5 })
    );
    assert!(matches!(
        outline.tangent(-0.1),
        Err(ShapeError::ValueOutOfRange { .. })
    ));
    assert!(matches!(
        outline.point(f64::NAN),
        Err(ShapeError::ValueOutOfRange { .. })
    ));
}

#[test]
fn zero_length_outline() {
    let outline = square_outline(0.0);

    assert_eq!(outline.length(), 0.0);
    assert_eq!(outline.bounding_box().min, outline.bounding_box().max);
    assert!(matches!(
        outline.point(0.5),
        Err(ShapeError::InvalidGeometry(..))
    ));
}

#[test]
fn cache_is_computed_once() {
    let cache = OutlineCache::new();
    let mut calls = 0;

    for _ in 0..3 {
        let outline = cache
            .get_or_build("square", 1e-6, || {
                calls += 1;
                Ok(square_outline(1.0).path().clone())
            })
            .unwrap();
        assert_eq!(outline.length(), 4.0);
    }

    assert_eq!(calls, 1);
    assert!(cache.is_initialized());
    assert!(!cache.clone().is_initialized());
}

#[test]
fn failed_builds_are_not_cached() {
    let cache = OutlineCache::new();
    let result = cache.get_or_build("nothing", 1e-6, || Ok(Path::default()));

    assert!(result.is_err());
    assert!(!cache.is_initialized());
}
