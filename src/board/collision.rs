//! Axis-aligned hit boxes
//!
//! Pieces are hit-tested as rectangles derived from their position and their
//! own tile size.

use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};

/// Screen rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: IVec2,
    pub size: IVec2,
}

impl Bounds {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Exclusive bottom-right corner, clamped to the pixel range
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.min.saturating_add(self.size)
    }

    /// Corners widened to i64 so boxes near the range limits compare exactly
    fn span(&self) -> (I64Vec2, I64Vec2) {
        let min = self.min.as_i64vec2();
        (min, min + self.size.as_i64vec2())
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Strict overlap: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_min, a_max) = self.span();
        let (b_min, b_max) = other.span();
        a_min.cmplt(b_max).all() && b_min.cmplt(a_max).all()
    }

    pub fn contains_point(&self, point: IVec2) -> bool {
        let (min, max) = self.span();
        let point = point.as_i64vec2();
        min.cmple(point).all() && point.cmplt(max).all()
    }
}

/// Narrow a widened point back to pixels, `None` if it does not fit in i32
pub fn narrow(point: I64Vec2) -> Option<IVec2> {
    let x = i32::try_from(point.x).ok()?;
    let y = i32::try_from(point.y).ok()?;
    Some(IVec2::new(x, y))
}

/// `pos + delta`, or `None` when the result leaves the pixel range
pub fn checked_offset(pos: IVec2, delta: IVec2) -> Option<IVec2> {
    narrow(pos.as_i64vec2() + delta.as_i64vec2())
}
