//! Cached length measurements of a path.

use crate::path::Path;

/// Cumulative lengths along a path.
///
/// Holds `path.len() + 1` distances: the first one is zero and entry `i + 1` is the
/// length of the path up to the end of segment `i`. Mapping a position along the path
/// to a segment is a binary search in this table.
///
/// The length of each segment is kept as well: a segment much shorter than the
/// running total can vanish from the cumulative sums.
///
/// Building the measurements requires measuring every segment of the path, so they are
/// best computed once and reused.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMeasurements {
    distances: Vec<f64>,
    lengths: Vec<f64>,
}

impl PathMeasurements {
    /// Measures each segment of the path, curves within `tolerance`.
    pub fn from_path(path: &Path, tolerance: f64) -> Self {
        let mut distances = Vec::with_capacity(path.len() + 1);
        let mut lengths = Vec::with_capacity(path.len());
        let mut distance = 0.0;
        distances.push(distance);
        for segment in path {
            let length = segment.length(tolerance).max(0.0);
            distance += length;
            lengths.push(length);
            distances.push(distance);
        }

        PathMeasurements { distances, lengths }
    }

    /// Total length of the path.
    #[inline]
    pub fn length(&self) -> f64 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    /// Number of measured segments.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.lengths.len()
    }

    /// Length of the segment at `index`.
    pub fn segment_length(&self, index: usize) -> f64 {
        self.lengths[index]
    }

    /// The cumulative distances, starting with zero.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Maps a normalized position `t` along the path (0 at the start, 1 at the end) to a
    /// segment index and a parameter on that segment.
    ///
    /// Returns `None` if the path has a length of zero. `t` is clamped to `[0, 1]`.
    pub fn locate(&self, t: f64) -> Option<(usize, f64)> {
        let t = t.max(0.0).min(1.0);
        self.locate_distance(t * self.length())
    }

    /// Maps a distance from the start of the path to a segment index and a parameter on
    /// that segment.
    ///
    /// The segment is the first one whose end lies at or after `distance`, skipping
    /// segments of length zero at the start of the path. Its parameter is interpolated
    /// linearly between the distances at both ends of the segment.
    ///
    /// The end of the path maps to the end of its last segment with a non-zero length,
    /// so that sampling there gives the last point of the path exactly.
    pub fn locate_distance(&self, distance: f64) -> Option<(usize, f64)> {
        let total = self.length();
        if total.is_nan() || total <= 0.0 {
            return None;
        }

        if distance >= total {
            let last = self.lengths.iter().rposition(|&l| l > 0.0)?;
            return Some((last, 1.0));
        }

        let distance = distance.max(0.0);
        let ends = &self.distances[1..];
        let index = if distance == 0.0 {
            ends.partition_point(|&d| d <= 0.0)
        } else {
            ends.partition_point(|&d| d < distance)
        }
        .min(ends.len() - 1);

        let start = self.distances[index];
        let end = self.distances[index + 1];
        let t = if end > start {
            ((distance - start) / (end - start)).max(0.0).min(1.0)
        } else {
            0.0
        };

        Some((index, t))
    }
}

#[cfg(test)]
use crate::geom::LineSegment;
#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::segment::PathSegment;

#[cfg(test)]
fn polyline(points: &[(f64, f64)]) -> Path {
    let mut builder = Path::builder();
    builder.begin(point(points[0].0, points[0].1));
    for &(x, y) in &points[1..] {
        builder.line_to(point(x, y));
    }

    builder.build().unwrap()
}

#[test]
fn measure_line() {
    let path = polyline(&[(0.0, 0.0), (4.0, 0.0)]);
    let m = PathMeasurements::from_path(&path, 1e-3);

    assert_eq!(m.distances(), &[0.0, 4.0]);
    assert_eq!(m.length(), 4.0);
    assert_eq!(m.locate(0.0), Some((0, 0.0)));
    assert_eq!(m.locate(0.25), Some((0, 0.25)));
    assert_eq!(m.locate(1.0), Some((0, 1.0)));
}

#[test]
fn measure_square() {
    let path = polyline(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
    let m = PathMeasurements::from_path(&path, 1e-3);

    assert_eq!(m.num_segments(), 4);
    assert_eq!(m.length(), 4.0);
    assert_eq!(m.segment_length(2), 1.0);
    assert_eq!(m.locate(0.5), Some((1, 1.0)));
    assert_eq!(m.locate(0.625), Some((2, 0.5)));
    assert_eq!(m.locate(1.0), Some((3, 1.0)));
    assert_eq!(m.locate(2.0), Some((3, 1.0)));
    assert_eq!(m.locate(-1.0), Some((0, 0.0)));
}

#[test]
fn zero_length_segments() {
    let path = polyline(&[(0.0, 0.0), (0.0, 0.0), (2.0, 0.0), (2.0, 0.0)]);
    let m = PathMeasurements::from_path(&path, 1e-3);

    assert_eq!(m.distances(), &[0.0, 0.0, 2.0, 2.0]);
    // Leading empty segments are skipped, trailing ones are never reached.
    assert_eq!(m.locate(0.0), Some((1, 0.0)));
    assert_eq!(m.locate(0.5), Some((1, 0.5)));
    assert_eq!(m.locate(1.0), Some((1, 1.0)));
    assert_eq!(m.segment_length(0), 0.0);
}

#[test]
fn end_of_path_reaches_short_last_segment() {
    // The last segment is too short to change the running total.
    let path = polyline(&[(0.0, 0.0), (1e8, 1.0), (1e-9, 0.0), (0.0, 0.0)]);
    let m = PathMeasurements::from_path(&path, 1e-3);

    assert_eq!(m.distances()[2], m.distances()[3]);
    assert!(m.segment_length(2) > 0.0);
    assert_eq!(m.locate(1.0), Some((2, 1.0)));
    assert_eq!(path[2].sample(1.0), point(0.0, 0.0));
}

#[test]
fn zero_length_path() {
    let path = Path::new(std::vec![PathSegment::Line(LineSegment {
        from: point(3.0, 3.0),
        to: point(3.0, 3.0),
    })])
    .unwrap();
    let m = PathMeasurements::from_path(&path, 1e-3);

    assert_eq!(m.length(), 0.0);
    assert_eq!(m.locate(0.5), None);

    let empty = PathMeasurements::from_path(&Path::default(), 1e-3);
    assert_eq!(empty.num_segments(), 0);
    assert_eq!(empty.locate(0.0), None);
}
