/// Interface for accepting a sequence of path commands.
///
/// Anything that produces a path can drive a pen, and anything that
/// consumes one can be a pen. Coordinates are always `f32`.
pub trait Pen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

impl<P: Pen + ?Sized> Pen for &mut P {
    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y)
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        (**self).quad_to(cx0, cy0, x, y)
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        (**self).curve_to(cx0, cy0, cx1, cy1, x, y)
    }

    fn close(&mut self) {
        (**self).close()
    }
}
