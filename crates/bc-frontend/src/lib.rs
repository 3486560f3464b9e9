//! BadCAD sketch editor host layer
//!
//! Editor modes, sketch tools, line-chain drawing and per-frame input
//! handling on top of `bc-cad` and `bc-renderer`. Drawing is left to the
//! embedding UI.

pub mod actions;
pub mod config;
pub mod state;
pub mod update;

pub use actions::{ActionContext, dispatch_action, process_pending_actions};
pub use config::{ConfigError, EditorConfig, SketchConfig};
pub use state::{
    AppAction, AppState, CameraAction, EditorMode, PlaneAction, SharedAppState,
    SharedViewportState, SketchAction, SketchModeState, SketchTool, ViewportState,
    create_shared_state, create_shared_viewport,
};
pub use update::{FrameInput, process_frame};
