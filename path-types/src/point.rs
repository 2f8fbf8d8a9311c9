use core::ops::{Add, Mul, Sub};

/// Two dimensional point with a generic coordinate type.
///
/// Paths store their coordinates as `Point<f32>`; other coordinate types are
/// useful at the boundaries, for example when a host works in `f64`.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck_derive::AnyBitPattern))]
#[repr(C)]
pub struct Point<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

/// SAFETY:
/// `NoUninit` requires that every field is `NoUninit`, that the layout is
/// `repr(C)` and that there is no padding. Both fields have the same type
/// under `repr(C)`, so there is none. The derive macro refuses generic
/// structs, hence the manual impl.
#[cfg(feature = "bytemuck")]
unsafe impl<T> bytemuck::NoUninit for Point<T> where T: bytemuck::NoUninit {}

impl<T> Point<T> {
    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Maps `Point<T>` to `Point<U>` by applying a function to each coordinate.
    #[inline(always)]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Point<U> {
        Point {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl Point<f32> {
    /// The origin, (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }
}

impl Point<f64> {
    /// Narrows both coordinates to `f32`.
    ///
    /// This loses precision for values that are not exactly representable
    /// in single precision.
    #[inline]
    pub fn to_f32(self) -> Point<f32> {
        self.map(|v| v as f32)
    }
}

impl From<Point<f32>> for Point<f64> {
    fn from(value: Point<f32>) -> Self {
        value.map(f64::from)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> Add for Point<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> Sub for Point<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Mul<T> for Point<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
