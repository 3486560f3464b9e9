//! Camera action handling

use tracing::info;

use crate::state::CameraAction;

use super::ActionContext;

/// Handle camera actions
pub fn handle_camera_action(action: CameraAction, ctx: &ActionContext) {
    let Some(viewport_state) = ctx.viewport_state.as_ref() else {
        tracing::warn!("Camera action without a viewport: {:?}", action);
        return;
    };
    let mut vp = viewport_state.lock();

    match action {
        CameraAction::SetPreset(preset) => {
            vp.camera.set_preset(preset);
            info!("View preset: {}", preset.name());
        }

        CameraAction::FitAll => {
            vp.camera.fit_all();
        }

        CameraAction::AnimateTo(plane) => {
            let duration = vp.camera.config().animation_duration;
            vp.camera.animate_to(plane, duration);
            info!("Animating view to {}", plane.display_name());
        }

        CameraAction::Zoom(amount) => {
            vp.camera.zoom(amount);
        }
    }
}
