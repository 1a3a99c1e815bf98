//! Axis-aligned bounding boxes in scene coordinates.

use serde::{Deserialize, Serialize};

/// Box structure: left, top, right, bottom
///
/// No ordering is enforced between opposite edges. An inverted box
/// (`left > right` or `top > bottom`) is kept as given; its candidate
/// positions are computed with the same arithmetic as a normal box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge x
    pub left: f64,
    /// Top edge y
    pub top: f64,
    /// Right edge x
    pub right: f64,
    /// Bottom edge y
    pub bottom: f64,
}

impl BoundingBox {
    /// Creates a box from its four edges
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Horizontal midpoint `(left + right) / 2`
    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Vertical midpoint `(top + bottom) / 2`
    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Candidate x positions in priority order: left edge, midpoint, right edge.
    #[inline]
    pub fn x_candidates(&self) -> [f64; 3] {
        [self.left, self.center_x(), self.right]
    }

    /// Candidate y positions in priority order: top edge, midpoint, bottom edge.
    #[inline]
    pub fn y_candidates(&self) -> [f64; 3] {
        [self.top, self.center_y(), self.bottom]
    }
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from((left, top, right, bottom): (f64, f64, f64, f64)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([left, top, right, bottom]: [f64; 4]) -> Self {
        Self::new(left, top, right, bottom)
    }
}
