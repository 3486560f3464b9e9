//! Construction plane action handling

use tracing::info;

use crate::state::PlaneAction;

use super::ActionContext;

/// Handle construction plane actions
pub fn handle_plane_action(action: PlaneAction, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();

    match action {
        PlaneAction::Select {
            plane,
            add_to_selection,
        } => {
            state.document.select_plane(plane, add_to_selection);
            info!("Selected {}", plane.display_name());
        }

        PlaneAction::DeselectAll => {
            state.document.deselect_all();
        }

        PlaneAction::SetVisibility { plane, visible } => {
            state.document.set_plane_visibility(plane, visible);
            if !visible && state.hovered_plane == Some(plane) {
                state.hovered_plane = None;
            }
            state.modified = true;
        }

        PlaneAction::SetHovered(plane) => {
            state.hovered_plane = plane;
        }
    }
}
