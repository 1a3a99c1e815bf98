//! Nearest-guideline snapping of a cursor against bounding boxes.
//!
//! Each axis is resolved on its own. For x the candidates of every box are
//! its left edge, horizontal midpoint and right edge; for y its top edge,
//! vertical midpoint and bottom edge. The closest candidate strictly within
//! the threshold wins, and the first one seen wins on ties.

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Guideline};

/// Snapped cursor position plus the guideline that produced each axis snap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// Snapped x (cursor x when nothing was in range)
    pub x: f64,
    /// Snapped y (cursor y when nothing was in range)
    pub y: f64,
    /// x of the vertical guideline snapped to, `None` when x did not snap
    pub guideline_x: Option<f64>,
    /// y of the horizontal guideline snapped to, `None` when y did not snap
    pub guideline_y: Option<f64>,
}

impl SnapResult {
    /// Identity result: the cursor itself, no guidelines
    pub const fn unsnapped(x: f64, y: f64) -> Self {
        Self { x, y, guideline_x: None, guideline_y: None }
    }

    /// True when x moved to a guideline
    #[inline]
    pub fn snapped_x(&self) -> bool {
        self.guideline_x.is_some()
    }

    /// True when y moved to a guideline
    #[inline]
    pub fn snapped_y(&self) -> bool {
        self.guideline_y.is_some()
    }

    /// True when at least one axis snapped
    #[inline]
    pub fn is_snapped(&self) -> bool {
        self.snapped_x() || self.snapped_y()
    }

    /// Snapped `(x, y)`
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Present guidelines, vertical before horizontal
    pub fn guidelines(self) -> impl Iterator<Item = Guideline> {
        self.guideline_x
            .map(Guideline::vertical)
            .into_iter()
            .chain(self.guideline_y.map(Guideline::horizontal))
    }
}

/// Snaps a cursor to the nearest box edge or center on each axis.
///
/// A candidate snaps only when `|cursor - candidate| < threshold`, so a
/// candidate exactly `threshold` away is ignored and a negative threshold
/// never snaps. Boxes earlier in `boxes` take priority on exact ties, and
/// within a box the first edge beats the midpoint, which beats the
/// opposite edge.
///
/// The function is total: an empty slice, a zero or negative threshold and
/// inverted boxes all give a defined result. NaN never compares below the
/// running best, so NaN coordinates or thresholds simply do not snap.
///
/// # Example
///
/// ```
/// use snapline::prelude::*;
///
/// let boxes = [BoundingBox::new(0.0, 0.0, 10.0, 20.0)];
/// let result = snap(&boxes, 1.0, 1.0, 5.0);
/// assert_eq!(result.position(), (0.0, 0.0));
/// assert_eq!(result.guideline_x, Some(0.0));
/// assert_eq!(result.guideline_y, Some(0.0));
/// ```
pub fn snap(boxes: &[BoundingBox], cursor_x: f64, cursor_y: f64, threshold: f64) -> SnapResult {
    let guideline_x = nearest_guideline(cursor_x, threshold, boxes.iter().flat_map(BoundingBox::x_candidates));
    let guideline_y = nearest_guideline(cursor_y, threshold, boxes.iter().flat_map(BoundingBox::y_candidates));

    tracing::trace!(
        boxes = boxes.len(),
        cursor_x,
        cursor_y,
        threshold,
        ?guideline_x,
        ?guideline_y,
        "snap"
    );

    SnapResult {
        x: guideline_x.unwrap_or(cursor_x),
        y: guideline_y.unwrap_or(cursor_y),
        guideline_x,
        guideline_y,
    }
}

/// Closest candidate strictly within `threshold` of `cursor`, first wins on ties
fn nearest_guideline(cursor: f64, threshold: f64, candidates: impl Iterator<Item = f64>) -> Option<f64> {
    let mut best_distance = threshold;
    let mut best = None;
    for candidate in candidates {
        let distance = (cursor - candidate).abs();
        if distance < best_distance {
            best_distance = distance;
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_guideline_strict() {
        assert_eq!(nearest_guideline(0.0, 1.0, [1.0].into_iter()), None);
        assert_eq!(nearest_guideline(0.0, 1.0, [0.5, -0.5].into_iter()), Some(0.5));
        assert_eq!(nearest_guideline(0.0, 1.0, [0.5, 0.25].into_iter()), Some(0.25));
    }

    #[test]
    fn test_guidelines_iter() {
        let r = SnapResult { x: 1.0, y: 2.0, guideline_x: Some(1.0), guideline_y: Some(2.0) };
        let lines: Vec<_> = r.guidelines().collect();
        assert_eq!(lines, vec![Guideline::vertical(1.0), Guideline::horizontal(2.0)]);

        let r = SnapResult { guideline_x: None, ..r };
        let lines: Vec<_> = r.guidelines().collect();
        assert_eq!(lines, vec![Guideline::horizontal(2.0)]);
        assert!(r.is_snapped());
        assert!(!SnapResult::unsnapped(3.0, 4.0).is_snapped());
    }
}
