//! 2D Sketch System
//!
//! A sketch is an index-addressed graph of points and line segments drawn on
//! one construction plane. Points are append-only; lines are never physically
//! removed, a split replaces the original with a tombstone so every
//! [`LineId`] handed out stays valid.

mod snap;
mod topology;

pub use snap::{LineSnap, PointSnap, closest_point_on_segment};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::plane::ConstructionPlane;

/// Distance below which `add_point` reuses an existing point.
///
/// Kept far below any interactive snap radius so near-coincident clicks are
/// only merged when the caller snaps them explicitly.
pub const POINT_MERGE_EPSILON: f32 = 1e-6;

/// Errors that can occur when editing a sketch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    #[error("Point not found: {0}")]
    PointNotFound(PointId),

    #[error("Line not found: {0}")]
    LineNotFound(LineId),

    #[error("Line {0} has been removed")]
    LineRemoved(LineId),

    #[error("Degenerate line: both endpoints are {0}")]
    DegenerateLine(PointId),

    #[error("Cannot split line {line} at its own endpoint {point}")]
    SplitAtEndpoint {
        /// Line that was asked to split
        line: LineId,
        /// Endpoint the split was requested at
        point: PointId,
    },
}

/// Result type for sketch operations
pub type SketchResult<T> = Result<T, SketchError>;

/// Stable handle of a point within its sketch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub usize);

impl PointId {
    /// Index into the sketch's point sequence
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Stable handle of a line within its sketch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(pub usize);

impl LineId {
    /// Index into the sketch's line sequence
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A point in plane-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchPoint {
    /// Position in the sketch plane's 2D basis
    pub position: Vec2,
}

/// A line slot in the sketch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SketchLine {
    /// Undirected segment between two distinct points
    Segment {
        /// First endpoint
        a: PointId,
        /// Second endpoint
        b: PointId,
    },
    /// Sentinel left behind when a line is replaced
    Removed,
}

impl SketchLine {
    /// Endpoints of an active line
    pub fn endpoints(&self) -> Option<(PointId, PointId)> {
        match *self {
            SketchLine::Segment { a, b } => Some((a, b)),
            SketchLine::Removed => None,
        }
    }

    /// Check whether the line is still part of the sketch
    pub fn is_active(&self) -> bool {
        matches!(self, SketchLine::Segment { .. })
    }

    /// Check whether the line connects the unordered pair `{p, q}`
    pub fn connects(&self, p: PointId, q: PointId) -> bool {
        match *self {
            SketchLine::Segment { a, b } => (a == p && b == q) || (a == q && b == p),
            SketchLine::Removed => false,
        }
    }
}

/// A 2D sketch on a construction plane
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSketch")]
pub struct Sketch {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Plane the sketch lies on
    pub plane: ConstructionPlane,
    /// Whether this sketch currently receives pointer input
    #[serde(skip)]
    pub(crate) is_editing: bool,
    points: Vec<SketchPoint>,
    lines: Vec<SketchLine>,
}

/// Sketch as read from disk, before its line references are checked
#[derive(Deserialize)]
struct RawSketch {
    id: Uuid,
    name: String,
    plane: ConstructionPlane,
    points: Vec<SketchPoint>,
    lines: Vec<SketchLine>,
}

impl TryFrom<RawSketch> for Sketch {
    type Error = SketchError;

    fn try_from(raw: RawSketch) -> SketchResult<Self> {
        let sketch = Self {
            id: raw.id,
            name: raw.name,
            plane: raw.plane,
            is_editing: false,
            points: raw.points,
            lines: raw.lines,
        };
        for line in &sketch.lines {
            if let Some((a, b)) = line.endpoints() {
                sketch.check_point(a)?;
                sketch.check_point(b)?;
                if a == b {
                    return Err(SketchError::DegenerateLine(a));
                }
            }
        }
        Ok(sketch)
    }
}

impl Sketch {
    /// Create a new empty sketch
    pub fn new(name: impl Into<String>, plane: ConstructionPlane) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            plane,
            is_editing: false,
            points: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Check whether this is the sketch currently being edited
    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    // ============== Points ==============

    /// Number of points (points are never removed)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get a point by ID
    pub fn point(&self, id: PointId) -> Option<&SketchPoint> {
        self.points.get(id.0)
    }

    /// Get the position of a point
    pub fn point_position(&self, id: PointId) -> Option<Vec2> {
        self.point(id).map(|p| p.position)
    }

    /// Iterate over all points with their IDs
    pub fn points(&self) -> impl Iterator<Item = (PointId, &SketchPoint)> {
        self.points.iter().enumerate().map(|(i, p)| (PointId(i), p))
    }

    /// Add a point, reusing a coincident one when `dedupe` is set
    pub fn add_point(&mut self, position: Vec2, dedupe: bool) -> PointId {
        if dedupe
            && let Some((id, _)) = self
                .points()
                .find(|(_, p)| p.position.distance(position) <= POINT_MERGE_EPSILON)
        {
            return id;
        }

        let id = PointId(self.points.len());
        self.points.push(SketchPoint { position });
        tracing::debug!("Sketch '{}': added point {} at {}", self.name, id, position);
        id
    }

    fn check_point(&self, id: PointId) -> SketchResult<()> {
        if id.0 < self.points.len() {
            Ok(())
        } else {
            Err(SketchError::PointNotFound(id))
        }
    }

    // ============== Lines ==============

    /// Number of line slots, tombstones included
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines that have not been replaced
    pub fn active_line_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_active()).count()
    }

    /// Get a line slot by ID
    pub fn line(&self, id: LineId) -> Option<&SketchLine> {
        self.lines.get(id.0)
    }

    /// Iterate over active lines as `(id, a, b)`
    pub fn active_lines(&self) -> impl Iterator<Item = (LineId, PointId, PointId)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.endpoints().map(|(a, b)| (LineId(i), a, b)))
    }

    /// Find the active line connecting the unordered pair `{a, b}`
    pub fn find_line(&self, a: PointId, b: PointId) -> Option<LineId> {
        self.lines
            .iter()
            .position(|l| l.connects(a, b))
            .map(LineId)
    }

    /// Endpoints of an active line, with errors for missing or removed lines
    pub fn line_endpoints(&self, id: LineId) -> SketchResult<(PointId, PointId)> {
        self.line(id)
            .ok_or(SketchError::LineNotFound(id))?
            .endpoints()
            .ok_or(SketchError::LineRemoved(id))
    }

    /// Add a line between two existing, distinct points.
    ///
    /// With `dedupe`, an active line already connecting `{a, b}` is returned
    /// instead of creating a parallel duplicate.
    pub fn add_line(&mut self, a: PointId, b: PointId, dedupe: bool) -> SketchResult<LineId> {
        self.check_point(a)?;
        self.check_point(b)?;
        if a == b {
            return Err(SketchError::DegenerateLine(a));
        }

        if dedupe && let Some(existing) = self.find_line(a, b) {
            return Ok(existing);
        }

        Ok(self.push_line(a, b))
    }

    fn push_line(&mut self, a: PointId, b: PointId) -> LineId {
        let id = LineId(self.lines.len());
        self.lines.push(SketchLine::Segment { a, b });
        tracing::debug!("Sketch '{}': added line {} ({} - {})", self.name, id, a, b);
        id
    }

    /// Split an active line `(A, B)` at `point`.
    ///
    /// The original line is tombstoned and `(A, point)`, `(point, B)` are
    /// appended, returned in that order. The caller is responsible for
    /// `point` lying on the segment; no other line is touched.
    pub fn split_line_at_point(
        &mut self,
        line: LineId,
        point: PointId,
    ) -> SketchResult<(LineId, LineId)> {
        let (a, b) = self.line_endpoints(line)?;
        self.check_point(point)?;
        if point == a || point == b {
            return Err(SketchError::SplitAtEndpoint { line, point });
        }

        self.lines[line.0] = SketchLine::Removed;
        let first = self.push_line(a, point);
        let second = self.push_line(point, b);
        tracing::debug!(
            "Sketch '{}': split {} at {} into {} and {}",
            self.name,
            line,
            point,
            first,
            second
        );
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point_sketch() -> (Sketch, PointId, PointId) {
        let mut sketch = Sketch::new("test", ConstructionPlane::XY);
        let p0 = sketch.add_point(Vec2::new(0.0, 0.0), true);
        let p1 = sketch.add_point(Vec2::new(1.0, 0.0), true);
        (sketch, p0, p1)
    }

    #[test]
    fn test_add_point_dedupes_coincident() {
        let (mut sketch, p0, _) = two_point_sketch();

        let again = sketch.add_point(Vec2::new(0.0, 0.0), true);
        assert_eq!(again, p0);
        assert_eq!(sketch.point_count(), 2);

        // Close but not coincident is a distinct point
        let near = sketch.add_point(Vec2::new(0.001, 0.0), true);
        assert_ne!(near, p0);
        assert_eq!(sketch.point_count(), 3);
    }

    #[test]
    fn test_add_point_without_dedupe_appends() {
        let (mut sketch, p0, _) = two_point_sketch();
        let dup = sketch.add_point(Vec2::new(0.0, 0.0), false);
        assert_ne!(dup, p0);
        assert_eq!(sketch.point_count(), 3);
    }

    #[test]
    fn test_add_line_dedupes_unordered_pair() {
        let (mut sketch, p0, p1) = two_point_sketch();

        let l0 = sketch.add_line(p0, p1, true).unwrap();
        let l1 = sketch.add_line(p1, p0, true).unwrap();

        assert_eq!(l0, l1);
        assert_eq!(sketch.active_line_count(), 1);
    }

    #[test]
    fn test_add_line_without_dedupe_duplicates() {
        let (mut sketch, p0, p1) = two_point_sketch();
        sketch.add_line(p0, p1, false).unwrap();
        sketch.add_line(p0, p1, false).unwrap();
        assert_eq!(sketch.active_line_count(), 2);
    }

    #[test]
    fn test_add_line_rejects_degenerate() {
        let (mut sketch, p0, _) = two_point_sketch();
        assert_eq!(
            sketch.add_line(p0, p0, true),
            Err(SketchError::DegenerateLine(p0))
        );
        assert_eq!(sketch.line_count(), 0);
    }

    #[test]
    fn test_add_line_rejects_unknown_point() {
        let (mut sketch, p0, _) = two_point_sketch();
        let bogus = PointId(42);
        assert_eq!(
            sketch.add_line(p0, bogus, true),
            Err(SketchError::PointNotFound(bogus))
        );
    }

    #[test]
    fn test_split_line_at_midpoint() {
        let (mut sketch, p0, p1) = two_point_sketch();
        let l0 = sketch.add_line(p0, p1, true).unwrap();
        let mid = sketch.add_point(Vec2::new(0.5, 0.0), true);

        let (first, second) = sketch.split_line_at_point(l0, mid).unwrap();

        assert_eq!(sketch.active_line_count(), 2);
        assert!(!sketch.line(l0).unwrap().is_active());
        assert_eq!(sketch.line_endpoints(first), Ok((p0, mid)));
        assert_eq!(sketch.line_endpoints(second), Ok((mid, p1)));
        // Tombstones keep their slot
        assert_eq!(sketch.line_count(), 3);
    }

    #[test]
    fn test_split_rejects_endpoint() {
        let (mut sketch, p0, p1) = two_point_sketch();
        let l0 = sketch.add_line(p0, p1, true).unwrap();

        assert_eq!(
            sketch.split_line_at_point(l0, p1),
            Err(SketchError::SplitAtEndpoint {
                line: l0,
                point: p1
            })
        );
        assert_eq!(sketch.active_line_count(), 1);
        assert!(sketch.line(l0).unwrap().is_active());
    }

    #[test]
    fn test_split_rejects_removed_line() {
        let (mut sketch, p0, p1) = two_point_sketch();
        let l0 = sketch.add_line(p0, p1, true).unwrap();
        let mid = sketch.add_point(Vec2::new(0.5, 0.0), true);
        sketch.split_line_at_point(l0, mid).unwrap();

        let other = sketch.add_point(Vec2::new(0.25, 0.0), true);
        assert_eq!(
            sketch.split_line_at_point(l0, other),
            Err(SketchError::LineRemoved(l0))
        );
        assert_eq!(
            sketch.split_line_at_point(LineId(99), other),
            Err(SketchError::LineNotFound(LineId(99)))
        );
    }

    #[test]
    fn test_removed_line_no_longer_dedupes() {
        let (mut sketch, p0, p1) = two_point_sketch();
        let l0 = sketch.add_line(p0, p1, true).unwrap();
        let mid = sketch.add_point(Vec2::new(0.5, 0.0), true);
        sketch.split_line_at_point(l0, mid).unwrap();

        assert_eq!(sketch.find_line(p0, p1), None);
        let fresh = sketch.add_line(p0, p1, true).unwrap();
        assert_ne!(fresh, l0);
    }

    #[test]
    fn test_load_round_trip_keeps_tombstones() {
        let (mut sketch, p0, p1) = two_point_sketch();
        let l0 = sketch.add_line(p0, p1, true).unwrap();
        let mid = sketch.add_point(Vec2::new(0.5, 0.0), true);
        sketch.split_line_at_point(l0, mid).unwrap();

        let text = ron::to_string(&sketch).unwrap();
        let loaded: Sketch = ron::from_str(&text).unwrap();

        assert_eq!(loaded.id, sketch.id);
        assert_eq!(loaded.line_count(), 3);
        assert!(!loaded.line(l0).unwrap().is_active());
        assert!(!loaded.is_editing());
    }

    #[test]
    fn test_load_rejects_dangling_line() {
        let (mut sketch, p0, p1) = two_point_sketch();
        sketch.add_line(p0, p1, true).unwrap();
        let text = ron::to_string(&sketch).unwrap();

        let dangling = text.replace("b:(1)", "b:(9)");
        assert_ne!(dangling, text);
        let err = ron::from_str::<Sketch>(&dangling).unwrap_err();
        assert!(err.to_string().contains("Point not found: P9"));
    }

    #[test]
    fn test_load_rejects_degenerate_line() {
        let (mut sketch, p0, p1) = two_point_sketch();
        sketch.add_line(p0, p1, true).unwrap();
        let text = ron::to_string(&sketch).unwrap();

        let degenerate = text.replace("b:(1)", "b:(0)");
        assert_ne!(degenerate, text);
        assert!(ron::from_str::<Sketch>(&degenerate).is_err());
    }
}
