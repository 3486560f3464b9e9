//! Sketch mode state types

use bc_cad::{LineId, POINT_MERGE_EPSILON, PointId, Sketch, SketchResult};
use glam::Vec2;

use crate::config::SketchConfig;

/// Tool for sketch editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchTool {
    /// Select entities
    #[default]
    Select,
    /// Draw a chain of connected line segments
    Line,
    /// Arc (not implemented yet)
    Arc,
    /// Circle (not implemented yet)
    Circle,
    /// Rectangle (not implemented yet)
    Rectangle,
    /// Spline (not implemented yet)
    Spline,
}

impl SketchTool {
    /// Get all tools in toolbar order
    pub fn all() -> [SketchTool; 6] {
        [
            SketchTool::Select,
            SketchTool::Line,
            SketchTool::Arc,
            SketchTool::Circle,
            SketchTool::Rectangle,
            SketchTool::Spline,
        ]
    }

    /// Get the display name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            SketchTool::Select => "Select",
            SketchTool::Line => "Line",
            SketchTool::Arc => "Arc",
            SketchTool::Circle => "Circle",
            SketchTool::Rectangle => "Rectangle",
            SketchTool::Spline => "Spline",
        }
    }

    /// Check whether the tool does anything to the geometry
    pub fn is_implemented(&self) -> bool {
        matches!(self, SketchTool::Select | SketchTool::Line)
    }
}

/// What a click at the cursor would land on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapTarget {
    /// An existing point
    Point { point: PointId, position: Vec2 },
    /// A point on an existing line (the line is split on commit)
    Line { line: LineId, position: Vec2 },
    /// The raw cursor coordinate
    Free(Vec2),
}

impl SnapTarget {
    /// Plane-local position of the target
    pub fn position(&self) -> Vec2 {
        match *self {
            SnapTarget::Point { position, .. }
            | SnapTarget::Line { position, .. }
            | SnapTarget::Free(position) => position,
        }
    }
}

/// Resolve the click target under `cursor`: existing point first, then a
/// point on a line, then the raw coordinate
pub fn resolve_target(sketch: &Sketch, cursor: Vec2, config: &SketchConfig) -> SnapTarget {
    if config.snap_enabled {
        if let Some(snap) = sketch.snap_to_point(cursor, config.snap_radius) {
            return SnapTarget::Point {
                point: snap.point,
                position: snap.position,
            };
        }
        if let Some(snap) = sketch.snap_to_line(cursor, config.snap_radius) {
            return SnapTarget::Line {
                line: snap.line,
                position: snap.position,
            };
        }
    } else if let Some(snap) = sketch.snap_to_point(cursor, POINT_MERGE_EPSILON) {
        // Coincident clicks would be merged by the sketch anyway
        return SnapTarget::Point {
            point: snap.point,
            position: snap.position,
        };
    }
    SnapTarget::Free(cursor)
}

/// Hover feedback for the host to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchPreview {
    /// Projected cursor in plane-local coordinates
    pub cursor: Vec2,
    /// Where a click would land
    pub target: SnapTarget,
    /// Rubber-band segment start (the chain end), if drawing
    pub from: Option<Vec2>,
    /// Whether clicking here would close the chain
    pub closes_shape: bool,
}

/// Result of a line-tool click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStep {
    /// First point of a new chain
    Started(PointId),
    /// Segment added, chain continues from `point`
    Extended { line: LineId, point: PointId },
    /// Segment added and the chain closed into a loop
    Closed { line: LineId, point: PointId },
    /// Click landed on the chain end and was ignored
    Ignored,
}

/// State for sketch editing mode.
///
/// The sketch being edited is the document's active sketch; this state only
/// tracks the tool and the chain in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchModeState {
    /// Current tool
    pub current_tool: SketchTool,
    /// First point of the chain being drawn
    pub chain_start: Option<PointId>,
    /// Last point of the chain being drawn
    pub chain_end: Option<PointId>,
    /// Hover feedback for the current frame
    pub preview: Option<SketchPreview>,
}

impl Default for SketchModeState {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchModeState {
    /// Create sketch mode state with the line tool armed
    pub fn new() -> Self {
        Self {
            current_tool: SketchTool::Line,
            chain_start: None,
            chain_end: None,
            preview: None,
        }
    }

    /// Check whether a chain is in progress
    pub fn is_drawing(&self) -> bool {
        self.chain_start.is_some()
    }

    /// Abandon the chain in progress
    pub fn cancel_chain(&mut self) {
        self.chain_start = None;
        self.chain_end = None;
    }

    /// Switch tools, abandoning any chain in progress
    pub fn set_tool(&mut self, tool: SketchTool) {
        self.current_tool = tool;
        self.cancel_chain();
        self.preview = None;
    }

    /// Whether committing `target` would close the current chain.
    ///
    /// Evaluated against the sketch as it is before the click mutates it.
    pub fn would_close(&self, sketch: &Sketch, target: SnapTarget) -> bool {
        let Some(start) = self.chain_start else {
            return false;
        };
        match target {
            SnapTarget::Point { point, .. } => sketch.would_close_shape(start, point),
            SnapTarget::Line { line, .. } => sketch.would_close_shape_on_line(start, line),
            SnapTarget::Free(_) => false,
        }
    }

    /// Recompute hover feedback for a projected cursor
    pub fn update_preview(&mut self, sketch: &Sketch, cursor: Option<Vec2>, config: &SketchConfig) {
        self.preview = cursor.map(|cursor| {
            let target = resolve_target(sketch, cursor, config);
            SketchPreview {
                cursor,
                target,
                from: self.chain_end.and_then(|p| sketch.point_position(p)),
                closes_shape: self.would_close(sketch, target),
            }
        });
    }

    /// Commit a line-tool click at a plane-local cursor position
    pub fn click_line(
        &mut self,
        sketch: &mut Sketch,
        cursor: Vec2,
        config: &SketchConfig,
    ) -> SketchResult<ChainStep> {
        let target = resolve_target(sketch, cursor, config);
        if let SnapTarget::Point { point, .. } = target
            && self.chain_end == Some(point)
        {
            return Ok(ChainStep::Ignored);
        }

        let closes = self.would_close(sketch, target);
        let point = materialize(sketch, target)?;

        let Some(end) = self.chain_end else {
            self.chain_start = Some(point);
            self.chain_end = Some(point);
            return Ok(ChainStep::Started(point));
        };

        let line = sketch.add_line(end, point, true)?;
        if closes {
            self.cancel_chain();
            tracing::debug!("Chain closed at {} with {}", point, line);
            Ok(ChainStep::Closed { line, point })
        } else {
            self.chain_end = Some(point);
            Ok(ChainStep::Extended { line, point })
        }
    }
}

/// Turn a snap target into a sketch point, splitting the snapped line
fn materialize(sketch: &mut Sketch, target: SnapTarget) -> SketchResult<PointId> {
    match target {
        SnapTarget::Point { point, .. } => Ok(point),
        SnapTarget::Free(position) => Ok(sketch.add_point(position, true)),
        SnapTarget::Line { line, position } => {
            let (a, b) = sketch.line_endpoints(line)?;
            let point = sketch.add_point(position, true);
            if point != a && point != b {
                sketch.split_line_at_point(line, point)?;
            }
            Ok(point)
        }
    }
}

/// Editor mode
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorMode {
    /// 3D view with plane hover and selection
    #[default]
    Model,
    /// 2D sketch editing on the active sketch
    Sketch(SketchModeState),
    /// Read-only inspection
    Inspect,
}

impl EditorMode {
    /// Check if in sketch mode
    pub fn is_sketch(&self) -> bool {
        matches!(self, EditorMode::Sketch(_))
    }

    /// Get sketch mode state if in sketch mode
    pub fn sketch(&self) -> Option<&SketchModeState> {
        match self {
            EditorMode::Sketch(state) => Some(state),
            _ => None,
        }
    }

    /// Get mutable sketch mode state if in sketch mode
    pub fn sketch_mut(&mut self) -> Option<&mut SketchModeState> {
        match self {
            EditorMode::Sketch(state) => Some(state),
            _ => None,
        }
    }

    /// Get the display name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            EditorMode::Model => "Model",
            EditorMode::Sketch(_) => "Sketch",
            EditorMode::Inspect => "Inspect",
        }
    }
}

/// Actions for sketch editing
#[derive(Debug, Clone, PartialEq)]
pub enum SketchAction {
    /// Create a sketch on the first selected plane and start editing it
    NewSketch,
    /// Start editing an existing sketch
    EditSketch { index: usize },
    /// Leave sketch mode
    ExitSketch,
    /// Change the active tool
    SetTool { tool: SketchTool },
    /// Primary click at a plane-local position
    Click { position: Vec2 },
    /// Cursor moved (`None` when it is off the sketch plane)
    Hover { position: Option<Vec2> },
    /// Abandon the chain in progress
    CancelChain,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_cad::ConstructionPlane;

    fn drawing() -> (Sketch, SketchModeState, SketchConfig) {
        (
            Sketch::new("test", ConstructionPlane::XY),
            SketchModeState::new(),
            SketchConfig::default(),
        )
    }

    #[test]
    fn test_square_closes_on_fourth_segment() {
        let (mut sketch, mut mode, config) = drawing();

        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.5, 0.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.0, 0.5),
        ];
        let start = mode.click_line(&mut sketch, corners[0], &config).unwrap();
        assert!(matches!(start, ChainStep::Started(_)));
        for corner in &corners[1..] {
            let step = mode.click_line(&mut sketch, *corner, &config).unwrap();
            assert!(matches!(step, ChainStep::Extended { .. }));
        }

        // Near the first corner, snaps back onto it
        let step = mode
            .click_line(&mut sketch, Vec2::new(0.01, -0.01), &config)
            .unwrap();
        assert!(matches!(step, ChainStep::Closed { point: PointId(0), .. }));

        assert!(!mode.is_drawing());
        assert_eq!(sketch.point_count(), 4);
        assert_eq!(sketch.active_line_count(), 4);
    }

    #[test]
    fn test_click_on_chain_end_ignored() {
        let (mut sketch, mut mode, config) = drawing();

        mode.click_line(&mut sketch, Vec2::ZERO, &config).unwrap();
        mode.click_line(&mut sketch, Vec2::new(0.3, 0.0), &config).unwrap();
        let step = mode
            .click_line(&mut sketch, Vec2::new(0.31, 0.0), &config)
            .unwrap();

        assert_eq!(step, ChainStep::Ignored);
        assert_eq!(sketch.active_line_count(), 1);
        assert!(mode.is_drawing());
    }

    #[test]
    fn test_click_on_line_splits_it() {
        let (mut sketch, mut mode, config) = drawing();
        let a = sketch.add_point(Vec2::new(0.0, 0.0), true);
        let b = sketch.add_point(Vec2::new(1.0, 0.0), true);
        let ab = sketch.add_line(a, b, true).unwrap();

        mode.click_line(&mut sketch, Vec2::new(0.5, 0.5), &config).unwrap();
        let step = mode
            .click_line(&mut sketch, Vec2::new(0.5, 0.02), &config)
            .unwrap();

        let ChainStep::Extended { point, .. } = step else {
            panic!("expected the chain to continue, got {step:?}");
        };
        assert!(!sketch.line(ab).unwrap().is_active());
        assert!(sketch.find_line(a, point).is_some());
        assert!(sketch.find_line(point, b).is_some());
        assert_eq!(sketch.active_line_count(), 3);
        assert!((sketch.point_position(point).unwrap() - Vec2::new(0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_line_snap_on_own_chain_closes() {
        let (mut sketch, mut mode, config) = drawing();

        mode.click_line(&mut sketch, Vec2::new(0.0, 0.0), &config).unwrap();
        mode.click_line(&mut sketch, Vec2::new(0.6, 0.0), &config).unwrap();
        mode.click_line(&mut sketch, Vec2::new(0.6, 0.6), &config).unwrap();

        // Lands on the first segment, which is connected back to the start
        let step = mode
            .click_line(&mut sketch, Vec2::new(0.3, 0.02), &config)
            .unwrap();
        assert!(matches!(step, ChainStep::Closed { .. }));
        assert!(!mode.is_drawing());
    }

    #[test]
    fn test_snap_disabled_uses_raw_coordinate() {
        let (mut sketch, mut mode, mut config) = drawing();
        config.snap_enabled = false;

        mode.click_line(&mut sketch, Vec2::ZERO, &config).unwrap();
        mode.click_line(&mut sketch, Vec2::new(0.5, 0.0), &config).unwrap();
        let step = mode
            .click_line(&mut sketch, Vec2::new(0.01, 0.0), &config)
            .unwrap();

        assert!(matches!(step, ChainStep::Extended { .. }));
        assert_eq!(sketch.point_count(), 3);
    }

    #[test]
    fn test_preview_reports_closure() {
        let (mut sketch, mut mode, config) = drawing();
        mode.click_line(&mut sketch, Vec2::ZERO, &config).unwrap();
        mode.click_line(&mut sketch, Vec2::new(0.5, 0.0), &config).unwrap();

        mode.update_preview(&sketch, Some(Vec2::new(0.02, 0.0)), &config);
        let preview = mode.preview.unwrap();
        assert!(preview.closes_shape);
        assert_eq!(preview.target.position(), Vec2::ZERO);
        assert_eq!(preview.from, Some(Vec2::new(0.5, 0.0)));

        mode.update_preview(&sketch, Some(Vec2::new(0.3, 0.4)), &config);
        assert!(!mode.preview.unwrap().closes_shape);

        mode.update_preview(&sketch, None, &config);
        assert!(mode.preview.is_none());
    }

    #[test]
    fn test_tool_change_cancels_chain() {
        let (mut sketch, mut mode, config) = drawing();
        mode.click_line(&mut sketch, Vec2::ZERO, &config).unwrap();
        assert!(mode.is_drawing());

        mode.set_tool(SketchTool::Arc);
        assert!(!mode.is_drawing());
        assert_eq!(mode.chain_end, None);
        assert!(!SketchTool::Arc.is_implemented());
    }
}
