//! Floor planner: architectural wall frames rendered as SVG
//!
//! This library models the pieces of a simple floor plan (rectangular wall
//! frames, door/window apertures cut into those walls, and hatch or flat
//! fills for the wall band) and turns them into plain SVG primitives.
//! The [`frame::RectFrame`] is the workhorse; a [`plan::Plan`] collects frames
//! into a finished document.
//!
//! ```rust
//! use floor_planner::prelude::*;
//!
//! let mut frame = RectFrame::new(10.0, 20.0, 350.0, 250.0, 25.0);
//! frame.add_hatching(30.0, 5.0, 2.0, "black");
//! frame.add_aperture(10.0, 50.0, 50.0).unwrap(); // A door on the left wall
//! let drawing = frame.draw();
//! assert_eq!(drawing.shapes.len(), 3);
//! ```

/// Error types for frames and plans.
pub mod errors;

/// Linear unit convention. Every coordinate is emitted as a [`units::Length`].
pub mod units;

/// Ordered style attributes which get passed through to the SVG shapes.
pub mod attributes;

/// Shape descriptors produced by frames, and their SVG conversions.
pub mod shape;

/// Hatch patterns, rendered as SVG `<pattern>` definitions.
pub mod hatch;

/// Wall frames, apertures and border detection.
pub mod frame;

/// Document assembly, plus the RON plan file loader.
pub mod plan;

/// Logger setup for binaries and demos.
pub mod logging;

/// Everything you need to build a plan in one import.
pub mod prelude {
    pub use crate::attributes::{AttrValue, Attributes};
    pub use crate::errors::{FrameError, PlanError};
    pub use crate::frame::{Aperture, Border, Frame, RectFrame};
    pub use crate::hatch::Hatching;
    pub use crate::plan::plan_file::PlanFile;
    pub use crate::plan::Plan;
    pub use crate::shape::{FrameDrawing, RectShape};
    pub use crate::units::{Length, Unit};
}
