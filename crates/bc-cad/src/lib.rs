//! Construction Planes and Sketch Topology
//!
//! This crate provides:
//! - The three fixed construction planes and their 2D bases
//! - Index-addressed sketch graph (points and line segments)
//! - Snapping, line splitting and closed-loop detection
//! - Document model with plane flags and the active sketch

pub mod document;
pub mod plane;
pub mod sketch;

// Re-exports for convenience
pub use document::{Document, DocumentError, DocumentResult, PlaneState};
pub use plane::ConstructionPlane;
pub use sketch::{
    LineId, LineSnap, POINT_MERGE_EPSILON, PointId, PointSnap, Sketch, SketchError, SketchLine,
    SketchPoint, SketchResult,
};
