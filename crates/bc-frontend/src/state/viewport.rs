//! Viewport state: camera, picking and drag tracking

use std::sync::Arc;

use bc_cad::{ConstructionPlane, Document};
use bc_renderer::{Camera, PlaneHit, PlanePicker, RendererConfig, Viewport, screen_to_plane_point};
use glam::Vec2;
use parking_lot::Mutex;

/// Kind of camera drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraDrag {
    /// Orbit around the origin
    Orbit,
    /// Pan the view
    Pan,
}

/// Viewport state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Orbit camera
    pub camera: Camera,
    /// Viewport size in pixels
    pub viewport: Viewport,
    /// Construction plane picker
    pub picker: PlanePicker,
    /// Camera drag in progress
    pub drag: Option<CameraDrag>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(&RendererConfig::default())
    }
}

impl ViewportState {
    /// Create viewport state from renderer settings
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            camera: Camera::with_config(config.camera.clone()),
            viewport: Viewport::default(),
            picker: PlanePicker::new(config.picking.clone()),
            drag: None,
        }
    }

    /// Update the viewport size
    pub fn resize(&mut self, size: Vec2) {
        self.viewport = Viewport::new(size.x, size.y);
    }

    /// Pick the nearest visible construction plane under a pixel
    pub fn pick_plane(&self, screen: Vec2, document: &Document) -> Option<PlaneHit> {
        let ray = self.camera.screen_to_ray(screen, self.viewport);
        self.picker.pick_visible(&ray, document)
    }

    /// Project a pixel onto a sketch plane, with the picker's parallel
    /// tolerance
    pub fn project(&self, screen: Vec2, plane: ConstructionPlane) -> Option<Vec2> {
        let epsilon = self.picker.config().parallel_epsilon;
        screen_to_plane_point(screen, self.viewport, &self.camera, plane, epsilon)
    }

    /// Drive an orbit or pan drag for this frame.
    ///
    /// A drag of a different kind, or one resuming after an interruption,
    /// is restarted at the cursor instead of jumping.
    pub fn drive_drag(&mut self, drag: Option<CameraDrag>, cursor: Vec2) {
        match drag {
            None => {}
            Some(kind) if self.drag != Some(kind) => match kind {
                CameraDrag::Orbit => self.camera.begin_drag(cursor),
                CameraDrag::Pan => self.camera.begin_pan(cursor),
            },
            Some(CameraDrag::Orbit) => self.camera.orbit(cursor),
            Some(CameraDrag::Pan) => self.camera.pan(cursor),
        }
        self.drag = drag;
    }
}

pub type SharedViewportState = Arc<Mutex<ViewportState>>;

/// Create a new shared viewport state
pub fn create_shared_viewport(config: &RendererConfig) -> SharedViewportState {
    Arc::new(Mutex::new(ViewportState::new(config)))
}
