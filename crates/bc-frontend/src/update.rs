//! Per-frame input processing
//!
//! Turns one polled input batch into hover state, queued actions and camera
//! motion. Picking and preview run against a snapshot of the camera taken
//! before this frame's camera deltas are applied.

use glam::Vec2;

use crate::actions::{ActionContext, process_pending_actions};
use crate::state::{
    AppAction, CameraAction, CameraDrag, EditorMode, PlaneAction, SharedAppState,
    SharedViewportState, SketchAction,
};

/// Input collected by the host for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Cursor in viewport pixels, `None` when outside the viewport
    pub cursor: Option<Vec2>,
    /// Viewport size in pixels
    pub viewport_size: Vec2,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Middle button is held
    pub middle_down: bool,
    /// Shift is held
    pub shift: bool,
    /// Ctrl is held
    pub ctrl: bool,
    /// Scroll amount this frame (positive zooms in)
    pub scroll: f32,
    /// Escape or secondary button release: abandon the current chain.
    ///
    /// Chains are drawn click to click, so the primary button is released
    /// after every vertex and its release cannot end a chain.
    pub cancel: bool,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            cursor: None,
            viewport_size: Vec2::new(800.0, 600.0),
            primary_pressed: false,
            middle_down: false,
            shift: false,
            ctrl: false,
            scroll: 0.0,
            cancel: false,
            dt: 0.0,
        }
    }
}

impl FrameInput {
    /// Frame with the cursor resting at `cursor`
    pub fn hover(cursor: Vec2) -> Self {
        Self {
            cursor: Some(cursor),
            ..Self::default()
        }
    }

    /// Frame with a primary click at `cursor`
    pub fn click(cursor: Vec2) -> Self {
        Self {
            primary_pressed: true,
            ..Self::hover(cursor)
        }
    }
}

/// Process one frame of input
pub fn process_frame(
    app_state: &SharedAppState,
    viewport_state: &SharedViewportState,
    input: &FrameInput,
) {
    let snapshot = {
        let mut vp = viewport_state.lock();
        vp.resize(input.viewport_size);
        vp.clone()
    };

    // Hover and clicks, against the pre-motion camera
    {
        let mut state = app_state.lock();
        let camera_busy = input.middle_down;

        // Plane hover highlight only exists in model mode
        if state.editor_mode != EditorMode::Model && state.hovered_plane.is_some() {
            state.queue_action(AppAction::Plane(PlaneAction::SetHovered(None)));
        }

        if state.editor_mode == EditorMode::Model {
            let hovered = input
                .cursor
                .filter(|_| !camera_busy)
                .and_then(|cursor| snapshot.pick_plane(cursor, &state.document))
                .map(|hit| hit.plane);
            if hovered != state.hovered_plane {
                state.queue_action(AppAction::Plane(PlaneAction::SetHovered(hovered)));
            }

            if input.primary_pressed && input.cursor.is_some() {
                match hovered {
                    Some(plane) => state.queue_action(AppAction::Plane(PlaneAction::Select {
                        plane,
                        add_to_selection: input.ctrl,
                    })),
                    None if !input.ctrl => {
                        state.queue_action(AppAction::Plane(PlaneAction::DeselectAll))
                    }
                    None => {}
                }
            }
        } else if state.editor_mode.is_sketch() {
            let plane = state.document.active_sketch().map(|s| s.plane);
            let position = input
                .cursor
                .zip(plane)
                .and_then(|(cursor, plane)| snapshot.project(cursor, plane));

            if input.cancel {
                state.queue_action(AppAction::Sketch(SketchAction::CancelChain));
            }
            state.queue_action(AppAction::Sketch(SketchAction::Hover { position }));
            if input.primary_pressed
                && !camera_busy
                && let Some(position) = position
            {
                state.queue_action(AppAction::Sketch(SketchAction::Click { position }));
            }
        }

        if input.scroll != 0.0 {
            state.queue_action(AppAction::Camera(CameraAction::Zoom(input.scroll)));
        }
    }

    // Camera motion
    {
        let mut vp = viewport_state.lock();
        let drag = input.middle_down.then_some(if input.shift {
            CameraDrag::Pan
        } else {
            CameraDrag::Orbit
        });
        match input.cursor {
            Some(cursor) => vp.drive_drag(drag, cursor),
            None => vp.drag = None,
        }
        vp.camera.tick(input.dt);
    }

    let viewport = Some(viewport_state.clone());
    process_pending_actions(&ActionContext::new(app_state, &viewport));
}
