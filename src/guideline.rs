//! Alignment guidelines produced by a snap.

use serde::{Deserialize, Serialize};

use crate::BoundingBox;

/// Orientation of a guideline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Axis {
    /// Line of constant x
    Vertical,
    /// Line of constant y
    Horizontal,
}

/// A guideline the cursor snapped to on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guideline {
    axis: Axis,
    coordinate: f64,
}

impl Guideline {
    /// Creates a vertical guideline at `x`
    pub const fn vertical(x: f64) -> Self {
        Self { axis: Axis::Vertical, coordinate: x }
    }

    /// Creates a horizontal guideline at `y`
    pub const fn horizontal(y: f64) -> Self {
        Self { axis: Axis::Horizontal, coordinate: y }
    }

    /// Orientation of the guideline
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// x for a vertical guideline, y for a horizontal one
    pub fn coordinate(&self) -> f64 {
        self.coordinate
    }

    /// End points of the guideline drawn across `extent`.
    ///
    /// A vertical guideline runs from the extent's top to its bottom,
    /// a horizontal one from its left to its right.
    pub fn segment(&self, extent: &BoundingBox) -> ((f64, f64), (f64, f64)) {
        match self.axis {
            Axis::Vertical => ((self.coordinate, extent.top), (self.coordinate, extent.bottom)),
            Axis::Horizontal => ((extent.left, self.coordinate), (extent.right, self.coordinate)),
        }
    }
}
