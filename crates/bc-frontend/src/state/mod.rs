//! Application state module

mod sketch_mode;
mod viewport;

pub use sketch_mode::{
    ChainStep, EditorMode, SketchAction, SketchModeState, SketchPreview, SketchTool, SnapTarget,
    resolve_target,
};
pub use viewport::{CameraDrag, SharedViewportState, ViewportState, create_shared_viewport};

use std::sync::Arc;

use bc_cad::{ConstructionPlane, Document, Sketch};
use bc_renderer::ViewPreset;
use parking_lot::Mutex;

use crate::config::EditorConfig;

/// Camera actions
#[derive(Debug, Clone, PartialEq)]
pub enum CameraAction {
    /// Jump to a preset view
    SetPreset(ViewPreset),
    /// Reset zoom and pan
    FitAll,
    /// Animate to look straight into a plane
    AnimateTo(ConstructionPlane),
    /// Zoom by a scroll amount (positive zooms in)
    Zoom(f32),
}

/// Construction plane actions
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneAction {
    /// Select a plane, optionally adding to the selection
    Select {
        plane: ConstructionPlane,
        add_to_selection: bool,
    },
    /// Clear the plane selection
    DeselectAll,
    /// Show or hide a plane
    SetVisibility {
        plane: ConstructionPlane,
        visible: bool,
    },
    /// Update the hovered plane
    SetHovered(Option<ConstructionPlane>),
}

/// Actions that can be performed on the app state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Camera action
    Camera(CameraAction),
    /// Plane action
    Plane(PlaneAction),
    /// Sketch action
    Sketch(SketchAction),
}

/// Application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The open document
    pub document: Document,
    /// Current editor mode
    pub editor_mode: EditorMode,
    /// Construction plane under the cursor
    pub hovered_plane: Option<ConstructionPlane>,
    /// Has unsaved changes
    pub modified: bool,
    /// Editor settings
    pub config: EditorConfig,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new app state with the given settings
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// The document's active sketch together with the sketch mode state
    pub fn sketch_session_mut(&mut self) -> Option<(&mut SketchModeState, &mut Sketch)> {
        let EditorMode::Sketch(mode) = &mut self.editor_mode else {
            return None;
        };
        let sketch = self.document.active_sketch_mut()?;
        Some((mode, sketch))
    }

    /// Leave sketch mode, clearing the active sketch
    pub fn exit_sketch_mode(&mut self) {
        if let Err(e) = self.document.set_active_sketch(None) {
            tracing::warn!("Failed to clear active sketch: {}", e);
        }
        self.editor_mode = EditorMode::Model;
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state(config: EditorConfig) -> SharedAppState {
    Arc::new(Mutex::new(AppState::with_config(config)))
}
