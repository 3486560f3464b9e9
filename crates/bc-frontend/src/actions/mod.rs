//! Action handling module
//!
//! Actions are queued in AppState and processed each frame.

mod camera;
mod plane;
mod sketch;

use crate::state::{AppAction, SharedAppState, SharedViewportState};

pub use camera::handle_camera_action;
pub use plane::handle_plane_action;
pub use sketch::handle_sketch_action;

/// Context for action handlers
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub viewport_state: &'a Option<SharedViewportState>,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        app_state: &'a SharedAppState,
        viewport_state: &'a Option<SharedViewportState>,
    ) -> Self {
        Self {
            app_state,
            viewport_state,
        }
    }
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::Camera(action) => handle_camera_action(action, ctx),
        AppAction::Plane(action) => handle_plane_action(action, ctx),
        AppAction::Sketch(action) => handle_sketch_action(action, ctx),
    }
}

/// Dispatch every queued action, including ones queued by handlers
pub fn process_pending_actions(ctx: &ActionContext) {
    loop {
        let actions = ctx.app_state.lock().take_pending_actions();
        if actions.is_empty() {
            break;
        }
        for action in actions {
            dispatch_action(action, ctx);
        }
    }
}
