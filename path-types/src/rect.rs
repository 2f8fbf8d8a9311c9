use crate::Point;

/// Axis aligned rectangle described by its minimum and maximum extents.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Minimum extent in the x direction.
    pub x_min: T,
    /// Minimum extent in the y direction.
    pub y_min: T,
    /// Maximum extent in the x direction.
    pub x_max: T,
    /// Maximum extent in the y direction.
    pub y_max: T,
}

impl Rect<f32> {
    /// Creates a rectangle from an origin and a size.
    ///
    /// Negative sizes extend the rectangle in the opposite direction, so the
    /// result always has `x_min <= x_max` and `y_min <= y_max`.
    pub fn from_origin_size(origin: Point<f32>, width: f32, height: f32) -> Self {
        let (x0, x1) = (origin.x, origin.x + width);
        let (y0, y1) = (origin.y, origin.y + height);
        Self {
            x_min: x0.min(x1),
            y_min: y0.min(y1),
            x_max: x0.max(x1),
            y_max: y0.max(y1),
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Returns the point at the center of the rectangle.
    pub fn center(&self) -> Point<f32> {
        Point::new(self.x_min, self.y_min).midpoint(Point::new(self.x_max, self.y_max))
    }

    /// The four corners, starting at the minimum corner and walking along
    /// the x axis first.
    pub fn corners(&self) -> [Point<f32>; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }
}
