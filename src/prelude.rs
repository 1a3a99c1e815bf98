//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use snapline::prelude::*;
//! ```

pub use crate::{Axis, BoundingBox, Guideline, SnapResult, SnapSettings, Snapper, snap};
