mod rng;

pub use rng::SpawnRng;

use crate::geometry::{CanvasPoint, CanvasRect, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    RoundedSquare,
}

impl ShapeKind {
    /// Closed set of drawable kinds, in spawn-table order.
    pub const ALL: [ShapeKind; 3] = [Self::Circle, Self::Square, Self::RoundedSquare];
}

/// One stamped shape. Immutable once spawned; discarded en masse when the
/// board resets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRecord {
    pub kind: ShapeKind,
    pub color: Rgba,
    pub size: f32,
    pub center: CanvasPoint,
}

impl ShapeRecord {
    pub const fn new(kind: ShapeKind, color: Rgba, size: f32, center: CanvasPoint) -> Self {
        Self {
            kind,
            color,
            size,
            center,
        }
    }

    /// Square footprint of the shape; `size` is the diameter for circles and
    /// the side length for squares.
    pub fn bounding_rect(&self) -> CanvasRect {
        CanvasRect::centered_square(self.center, self.size)
    }
}
