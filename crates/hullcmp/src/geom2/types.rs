//! Basic 2D types shared by the kernel and the hull engines.

use nalgebra::Vector2;

/// A planar point. Equality is exact on both coordinates (`0.0 == -0.0`).
pub type Point2 = Vector2<f64>;

/// Rotational sense of the turn `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn is_ccw(self) -> bool {
        self == Orientation::CounterClockwise
    }
    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}
