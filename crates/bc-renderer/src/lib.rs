//! BadCAD viewport math
//!
//! Orthographic orbit camera, screen-to-world ray casting, construction plane
//! picking and cursor projection onto sketch planes. Everything here is pure
//! state and geometry; drawing is left to the host.

pub mod camera;
pub mod config;
pub mod picking;
pub mod projector;
pub mod ray;

pub use camera::{Camera, CameraAnimation, ViewPreset};
pub use config::{CameraConfig, PickingConfig, RendererConfig};
pub use picking::{PlaneHit, PlanePicker, ray_plane_intersection};
pub use projector::{plane_point_to_screen, plane_to_world, screen_to_plane_point};
pub use ray::{Ray, VIEW_DEPTH, Viewport, compute_ray, ortho_half_extents};
