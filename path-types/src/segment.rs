use crate::{Pen, Point};

/// Single segment of a path.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSegment {
    /// Begin a new subpath at the given point.
    MoveTo(Point<f32>),
    /// Draw a line from the current point to the given point.
    LineTo(Point<f32>),
    /// Draw a quadratic bezier from the current point with a control point,
    /// ending at the second point.
    QuadTo(Point<f32>, Point<f32>),
    /// Draw a cubic bezier from the current point with two control points,
    /// ending at the third point.
    CurveTo(Point<f32>, Point<f32>, Point<f32>),
    /// Close the current subpath.
    Close,
}

impl PathSegment {
    /// Returns an iterator over the points of this segment, control points
    /// first and the end point last.
    ///
    /// `Close` has no points.
    pub fn points(&self) -> SegmentPoints {
        let (points, len) = match *self {
            Self::MoveTo(p) | Self::LineTo(p) => ([p, Point::ZERO, Point::ZERO], 1),
            Self::QuadTo(c0, p) => ([c0, p, Point::ZERO], 2),
            Self::CurveTo(c0, c1, p) => ([c0, c1, p], 3),
            Self::Close => ([Point::ZERO; 3], 0),
        };
        SegmentPoints { points, pos: 0, len }
    }

    /// Returns the point this segment ends at, if it has one.
    pub fn end_point(&self) -> Option<Point<f32>> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::QuadTo(_, p) | Self::CurveTo(_, _, p) => {
                Some(p)
            }
            Self::Close => None,
        }
    }

    /// Invokes the matching command on the given pen.
    pub fn draw(&self, pen: &mut impl Pen) {
        match *self {
            Self::MoveTo(p) => pen.move_to(p.x, p.y),
            Self::LineTo(p) => pen.line_to(p.x, p.y),
            Self::QuadTo(c0, p) => pen.quad_to(c0.x, c0.y, p.x, p.y),
            Self::CurveTo(c0, c1, p) => pen.curve_to(c0.x, c0.y, c1.x, c1.y, p.x, p.y),
            Self::Close => pen.close(),
        }
    }
}

/// Iterator over the points of a [`PathSegment`].
#[derive(Clone, Debug)]
pub struct SegmentPoints {
    points: [Point<f32>; 3],
    pos: usize,
    len: usize,
}

impl Iterator for SegmentPoints {
    type Item = Point<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let point = self.points[self.pos];
        self.pos += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentPoints {}
