//! Ordered sequences of path segments.

use alloc::vec::Vec;
use core::slice;

use crate::{codec, MalformedPath};
use types::{PathSegment, Pen, Point, Rect};

/// An ordered sequence of [`PathSegment`]s.
///
/// A non-empty path always begins with [`PathSegment::MoveTo`]. This is
/// checked by [`Path::from_segments`] and maintained when drawing into a path
/// through its [`Pen`] implementation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<PathSegment>", into = "Vec<PathSegment>")
)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from the given segments.
    ///
    /// Returns an error if the sequence is non-empty and does not begin with
    /// a move.
    pub fn from_segments(segments: Vec<PathSegment>) -> Result<Self, MalformedPath> {
        match segments.first() {
            None | Some(PathSegment::MoveTo(_)) => Ok(Self { segments }),
            Some(_) => Err(MalformedPath::MissingMove),
        }
    }

    /// Creates a closed path tracing the outline of the given rectangle.
    ///
    /// The outline starts at the minimum corner and visits the corners in
    /// the order returned by [`Rect::corners`].
    pub fn from_rect(rect: Rect<f32>) -> Self {
        let [first, rest @ ..] = rect.corners();
        Self::polygon(first, &rest)
    }

    /// Creates a closed square path with its origin at `point` and sides of
    /// length `width`.
    ///
    /// With a width of `1.0` this covers the pixel at `point`.
    pub fn from_point(point: Point<f32>, width: f32) -> Self {
        Self::from_rect(Rect::from_origin_size(point, width, width))
    }

    /// A move to `first`, a line to each point in `rest`, then a close.
    pub(crate) fn polygon(first: Point<f32>, rest: &[Point<f32>]) -> Self {
        let mut segments = Vec::with_capacity(rest.len() + 2);
        segments.push(PathSegment::MoveTo(first));
        segments.extend(rest.iter().copied().map(PathSegment::LineTo));
        segments.push(PathSegment::Close);
        Self { segments }
    }

    /// Returns the segments of the path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Consumes the path, returning the underlying segments.
    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments of the path.
    pub fn iter(&self) -> slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// Returns every point of the path in order.
    ///
    /// See [`extract_points`](crate::extract_points).
    pub fn points(&self) -> Vec<Point<f32>> {
        codec::extract_points(self)
    }

    /// Replays the path into the given pen.
    pub fn draw(&self, pen: &mut impl Pen) {
        for segment in &self.segments {
            segment.draw(pen);
        }
    }

    /// Pushes a segment that requires a current point.
    fn push_continuation(&mut self, command: &str, segment: PathSegment) {
        if self.segments.is_empty() {
            log::warn!("{command} with no current point, ignoring");
            return;
        }
        self.segments.push(segment);
    }
}

impl Pen for Path {
    fn move_to(&mut self, x: f32, y: f32) {
        self.segments.push(PathSegment::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push_continuation("line_to", PathSegment::LineTo(Point::new(x, y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push_continuation(
            "quad_to",
            PathSegment::QuadTo(Point::new(cx0, cy0), Point::new(x, y)),
        );
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push_continuation(
            "curve_to",
            PathSegment::CurveTo(
                Point::new(cx0, cy0),
                Point::new(cx1, cy1),
                Point::new(x, y),
            ),
        );
    }

    fn close(&mut self) {
        self.push_continuation("close", PathSegment::Close);
    }
}

impl TryFrom<Vec<PathSegment>> for Path {
    type Error = MalformedPath;

    fn try_from(value: Vec<PathSegment>) -> Result<Self, Self::Error> {
        Self::from_segments(value)
    }
}

impl From<Path> for Vec<PathSegment> {
    fn from(value: Path) -> Self {
        value.segments
    }
}

impl AsRef<[PathSegment]> for Path {
    fn as_ref(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pt(x: f32, y: f32) -> Point<f32> {
        Point::new(x, y)
    }

    #[test]
    fn from_segments_requires_move() {
        assert!(Path::from_segments(Vec::new()).unwrap().is_empty());
        assert_eq!(
            Path::from_segments(vec![PathSegment::LineTo(pt(1.0, 1.0))]),
            Err(MalformedPath::MissingMove)
        );
        assert_eq!(
            Path::from_segments(vec![PathSegment::Close]),
            Err(MalformedPath::MissingMove)
        );
        let path = Path::from_segments(vec![
            PathSegment::MoveTo(pt(0.0, 0.0)),
            PathSegment::LineTo(pt(1.0, 1.0)),
        ])
        .unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn pen_ignores_segments_without_current_point() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut path = Path::new();
        path.line_to(1.0, 1.0);
        path.quad_to(1.0, 1.0, 2.0, 2.0);
        path.curve_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0);
        path.close();
        assert!(path.is_empty());

        path.move_to(0.0, 0.0);
        path.line_to(1.0, 1.0);
        path.close();
        // the closed subpath leaves a current point behind
        path.line_to(2.0, 0.0);
        assert_eq!(
            path.segments(),
            &[
                PathSegment::MoveTo(pt(0.0, 0.0)),
                PathSegment::LineTo(pt(1.0, 1.0)),
                PathSegment::Close,
                PathSegment::LineTo(pt(2.0, 0.0)),
            ]
        );
    }

    #[test]
    fn draw_copies_path() {
        let mut source = Path::new();
        source.move_to(0.0, 0.0);
        source.quad_to(5.0, 10.0, 10.0, 0.0);
        source.curve_to(12.0, -2.0, 14.0, -2.0, 16.0, 0.0);
        source.close();
        let mut copy = Path::new();
        source.draw(&mut copy);
        assert_eq!(copy, source);
    }

    #[test]
    fn point_path_covers_pixel() {
        let path = Path::from_point(pt(2.0, 3.0), 1.0);
        assert_eq!(
            path.segments(),
            &[
                PathSegment::MoveTo(pt(2.0, 3.0)),
                PathSegment::LineTo(pt(3.0, 3.0)),
                PathSegment::LineTo(pt(3.0, 4.0)),
                PathSegment::LineTo(pt(2.0, 4.0)),
                PathSegment::Close,
            ]
        );
        assert_eq!(
            path.points(),
            [pt(2.0, 3.0), pt(3.0, 3.0), pt(3.0, 4.0), pt(2.0, 4.0)]
        );
    }

    #[test]
    fn rect_path() {
        let rect = Rect::from_origin_size(pt(-1.0, -1.0), 2.0, 4.0);
        let path = Path::from_rect(rect);
        assert_eq!(path.len(), 5);
        assert_eq!(path.segments().last(), Some(&PathSegment::Close));
        assert_eq!(path.points(), rect.corners());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trip() {
        let path = Path::from_point(Point::new(0.0, 0.0), 2.0);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn rejects_missing_move() {
        let json = r#"[{"LineTo":{"x":1.0,"y":1.0}}]"#;
        let err = serde_json::from_str::<Path>(json).unwrap_err();
        assert!(err.to_string().contains("does not begin with a move"));
    }
}
