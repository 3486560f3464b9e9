//! Renderer configuration structures
//!
//! This module provides configurable settings for the viewport camera and
//! plane picking that can be serialized and loaded from configuration files.

use serde::{Deserialize, Serialize};

/// Camera interaction configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Orbit speed in degrees per pixel of cursor motion
    pub orbit_sensitivity: f32,
    /// Pan speed in world units per pixel (independent of zoom)
    pub pan_sensitivity: f32,
    /// Fraction of the distance removed per unit of zoom input
    pub zoom_sensitivity: f32,
    /// Closest allowed zoom distance
    pub min_distance: f32,
    /// Farthest allowed zoom distance
    pub max_distance: f32,
    /// Orbit pitch limit in degrees (applied symmetrically)
    pub pitch_limit: f32,
    /// Distance restored by fit-all
    pub default_distance: f32,
    /// Duration of animated view changes in seconds
    pub animation_duration: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.5,
            pan_sensitivity: 0.003,
            zoom_sensitivity: 0.1,
            min_distance: 0.1,
            max_distance: 20.0,
            pitch_limit: 89.0,
            default_distance: 2.0,
            animation_duration: 0.3,
        }
    }
}

/// Plane picking configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickingConfig {
    /// Half-size of the pickable construction plane quads
    pub plane_half_extent: f32,
    /// Rays whose direction is this close to parallel with a plane miss it
    pub parallel_epsilon: f32,
}

impl Default for PickingConfig {
    fn default() -> Self {
        Self {
            plane_half_extent: bc_cad::ConstructionPlane::HALF_EXTENT,
            parallel_epsilon: 1e-4,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
    /// Picking settings
    #[serde(default)]
    pub picking: PickingConfig,
}

impl RendererConfig {
    /// Create a new renderer configuration with default values
    pub fn new() -> Self {
        Self::default()
    }
}
