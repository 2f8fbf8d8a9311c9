//! Flattening paths to points and back.

use alloc::vec::Vec;

use crate::{EmptyInputError, Path};
use types::{PathSegment, Point};

/// Returns the points of the given segments, in order.
///
/// Each segment contributes its points as they are stored, control points
/// before the end point: one for a move or line, two for a quadratic curve,
/// three for a cubic curve and none for a close. Coordinates are not
/// transformed and duplicates are kept.
///
/// An empty input produces an empty result.
pub fn extract_points<'a>(segments: impl IntoIterator<Item = &'a PathSegment>) -> Vec<Point<f32>> {
    segments.into_iter().flat_map(PathSegment::points).collect()
}

/// Builds a closed polygon visiting each of the given points in order.
///
/// The resulting path is a move to the first point, a line to each of the
/// remaining points and a final close. A single point produces the degenerate
/// path `[MoveTo, Close]`.
///
/// Returns an error if `points` is empty.
pub fn build_closed_polygon(points: &[Point<f32>]) -> Result<Path, EmptyInputError> {
    let (first, rest) = points.split_first().ok_or(EmptyInputError)?;
    if rest.is_empty() {
        log::debug!("closed polygon from a single point is degenerate");
    }
    Ok(Path::polygon(*first, rest))
}
