//! Sketch action handling
//!
//! Handles sketch mode transitions and line-chain drawing.

use tracing::info;

use crate::state::{
    AppAction, CameraAction, ChainStep, EditorMode, SketchAction, SketchModeState, SketchTool,
};

use super::ActionContext;

/// Handle sketch-related actions
pub fn handle_sketch_action(action: SketchAction, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();

    match action {
        SketchAction::NewSketch => {
            let Some(plane) = state.document.selected_planes().next() else {
                tracing::warn!("Select a construction plane before creating a sketch");
                return;
            };

            let name = format!("Sketch {}", state.document.sketch_count() + 1);
            let index = state.document.add_sketch(name, plane);
            if let Err(e) = state.document.set_active_sketch(Some(index)) {
                tracing::warn!("Failed to activate new sketch: {}", e);
                return;
            }
            state.editor_mode = EditorMode::Sketch(SketchModeState::new());
            state.modified = true;
            state.queue_action(AppAction::Camera(CameraAction::AnimateTo(plane)));
            info!("Created sketch {} on {}", index, plane.display_name());
        }

        SketchAction::EditSketch { index } => {
            if let Err(e) = state.document.set_active_sketch(Some(index)) {
                tracing::warn!("Cannot edit sketch: {}", e);
                state.editor_mode = EditorMode::Model;
                return;
            }
            let Some(plane) = state.document.sketch(index).map(|s| s.plane) else {
                return;
            };
            state.editor_mode = EditorMode::Sketch(SketchModeState::new());
            state.queue_action(AppAction::Camera(CameraAction::AnimateTo(plane)));
            info!("Entered sketch mode for sketch {}", index);
        }

        SketchAction::ExitSketch => {
            state.exit_sketch_mode();
            info!("Exited sketch mode");
        }

        SketchAction::SetTool { tool } => {
            if let Some(sketch_state) = state.editor_mode.sketch_mut() {
                sketch_state.set_tool(tool);
                if !tool.is_implemented() {
                    tracing::warn!("{} tool is not implemented yet", tool.name());
                }
            }
        }

        SketchAction::CancelChain => {
            if let Some(sketch_state) = state.editor_mode.sketch_mut() {
                sketch_state.cancel_chain();
            }
        }

        SketchAction::Hover { position } => {
            let config = state.config.sketch.clone();
            if let Some((mode, sketch)) = state.sketch_session_mut() {
                mode.update_preview(sketch, position, &config);
            }
        }

        SketchAction::Click { position } => {
            let config = state.config.sketch.clone();
            let Some((mode, sketch)) = state.sketch_session_mut() else {
                return;
            };
            if mode.current_tool != SketchTool::Line {
                return;
            }

            match mode.click_line(sketch, position, &config) {
                Ok(ChainStep::Closed { line, .. }) => {
                    info!("Closed shape with {} in '{}'", line, sketch.name);
                }
                Ok(ChainStep::Ignored) => return,
                Ok(step) => tracing::debug!("Line chain: {:?}", step),
                Err(e) => {
                    tracing::warn!("Failed to add line: {}", e);
                    mode.cancel_chain();
                    return;
                }
            }
            // Preview is stale after the sketch changed
            mode.update_preview(sketch, Some(position), &config);
            state.modified = true;
        }
    }
}
