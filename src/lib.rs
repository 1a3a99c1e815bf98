//! # snapline - Cursor Snapping to Object Guides
//!
//! A small Rust library that snaps a cursor to the edges and centers of
//! nearby axis-aligned bounding boxes, the way a 2D scene editor shows
//! alignment guides while the user drags.
//!
//! ## Features
//!
//! - **Per-Axis Snapping**: x and y are resolved independently against left/center/right and top/center/bottom
//! - **Strict Threshold**: a candidate exactly `threshold` away does not snap
//! - **Deterministic Ties**: earlier boxes win, then edge before midpoint before opposite edge
//! - **Total**: empty input, negative thresholds and inverted boxes all give a defined result
//! - **Settings**: JSON-backed enable/threshold/guideline-visibility preferences
//!
//! ## Quick Start
//!
//! ```rust
//! use snapline::prelude::*;
//!
//! // Objects in the scene (left, top, right, bottom)
//! let boxes = [
//!     BoundingBox::new(0.0, 0.0, 10.0, 20.0),
//!     BoundingBox::new(40.0, 5.0, 60.0, 15.0),
//! ];
//!
//! // Cursor at (1, 9), snap within 5 units
//! let result = snap(&boxes, 1.0, 9.0, 5.0);
//! assert_eq!(result.position(), (0.0, 10.0));
//!
//! for line in result.guidelines() {
//!     println!("{:?} guideline at {}", line.axis(), line.coordinate());
//! }
//! ```
//!
//! ## How It Works
//!
//! Every box contributes three candidates per axis. The cursor coordinate is
//! compared against all of them in order and moves to the closest one that is
//! strictly closer than the threshold. The coordinate it moved to is reported
//! as that axis' guideline; an axis that did not snap reports `None`.

pub mod bounding_box;
pub mod error;
pub mod guideline;
pub mod prelude;
pub mod settings;
pub mod snap;


pub use bounding_box::BoundingBox;
pub use error::{Error, Result};
pub use guideline::{Axis, Guideline};
pub use settings::{SnapSettings, Snapper};
pub use snap::{SnapResult, snap};
