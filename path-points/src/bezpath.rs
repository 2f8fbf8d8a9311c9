//! Exchange of paths with [`kurbo`].
//!
//! kurbo stores coordinates as `f64` while paths in this crate use `f32`.
//! Converting from kurbo narrows every coordinate to single precision;
//! converting to kurbo is exact.

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl};

use crate::{MalformedPath, Path};
use types::{PathSegment, Point};

fn narrow(point: kurbo::Point) -> Point<f32> {
    Point::new(point.x, point.y).to_f32()
}

fn widen(point: Point<f32>) -> kurbo::Point {
    let Point { x, y } = Point::<f64>::from(point);
    kurbo::Point::new(x, y)
}

fn segment_from_el(el: PathEl) -> PathSegment {
    match el {
        PathEl::MoveTo(p) => PathSegment::MoveTo(narrow(p)),
        PathEl::LineTo(p) => PathSegment::LineTo(narrow(p)),
        PathEl::QuadTo(c0, p) => PathSegment::QuadTo(narrow(c0), narrow(p)),
        PathEl::CurveTo(c0, c1, p) => PathSegment::CurveTo(narrow(c0), narrow(c1), narrow(p)),
        PathEl::ClosePath => PathSegment::Close,
    }
}

fn el_from_segment(segment: &PathSegment) -> PathEl {
    match *segment {
        PathSegment::MoveTo(p) => PathEl::MoveTo(widen(p)),
        PathSegment::LineTo(p) => PathEl::LineTo(widen(p)),
        PathSegment::QuadTo(c0, p) => PathEl::QuadTo(widen(c0), widen(p)),
        PathSegment::CurveTo(c0, c1, p) => PathEl::CurveTo(widen(c0), widen(c1), widen(p)),
        PathSegment::Close => PathEl::ClosePath,
    }
}

impl Path {
    /// Attempt to create a path from a kurbo `BezPath`.
    ///
    /// Coordinates are narrowed to `f32`. Returns an error if the input is
    /// non-empty and does not begin with a move.
    pub fn from_bezpath(path: &BezPath) -> Result<Self, MalformedPath> {
        let segments = path
            .elements()
            .iter()
            .copied()
            .map(segment_from_el)
            .collect::<Vec<_>>();
        log::trace!("converted {} kurbo elements", segments.len());
        Self::from_segments(segments)
    }

    /// Converts this path to a kurbo `BezPath`.
    pub fn to_bezpath(&self) -> BezPath {
        BezPath::from_vec(self.iter().map(el_from_segment).collect())
    }
}

impl TryFrom<&BezPath> for Path {
    type Error = MalformedPath;

    fn try_from(value: &BezPath) -> Result<Self, Self::Error> {
        Self::from_bezpath(value)
    }
}

impl From<&Path> for BezPath {
    fn from(value: &Path) -> Self {
        value.to_bezpath()
    }
}

/// Returns the points of a kurbo `BezPath`, in order, narrowed to `f32`.
///
/// This reads the elements directly and does not require the path to begin
/// with a move. See [`extract_points`](crate::extract_points) for the
/// per-segment rules.
pub fn bezpath_points(path: &BezPath) -> Vec<Point<f32>> {
    let points = path
        .elements()
        .iter()
        .flat_map(|el| segment_from_el(*el).points())
        .collect::<Vec<_>>();
    log::trace!(
        "extracted {} points from {} kurbo elements",
        points.len(),
        path.elements().len()
    );
    points
}
