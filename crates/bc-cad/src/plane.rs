//! Construction Planes
//!
//! The three fixed, axis-aligned reference planes through the world origin
//! that sketches are drawn on.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Reference plane used as a sketch surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionPlane {
    /// XY plane (Z = 0), local basis (x, y)
    XY,
    /// XZ plane (Y = 0), local basis (x, z)
    XZ,
    /// YZ plane (X = 0), local basis (y, z)
    YZ,
}

impl ConstructionPlane {
    /// Half-size of the displayed plane quad, used for hit-testing
    pub const HALF_EXTENT: f32 = 0.7;

    /// Get all construction planes in pick order
    pub fn all() -> [ConstructionPlane; 3] {
        [
            ConstructionPlane::XY,
            ConstructionPlane::XZ,
            ConstructionPlane::YZ,
        ]
    }

    /// Canonical name of the plane
    pub fn name(&self) -> &'static str {
        match self {
            ConstructionPlane::XY => "planexy",
            ConstructionPlane::XZ => "planexz",
            ConstructionPlane::YZ => "planeyz",
        }
    }

    /// Look a plane up by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.name() == name)
    }

    /// Get the display name of the plane
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstructionPlane::XY => "XY Plane",
            ConstructionPlane::XZ => "XZ Plane",
            ConstructionPlane::YZ => "YZ Plane",
        }
    }

    /// Get the normal vector of the plane
    pub fn normal(&self) -> Vec3 {
        match self {
            ConstructionPlane::XY => Vec3::Z,
            ConstructionPlane::XZ => Vec3::Y,
            ConstructionPlane::YZ => Vec3::X,
        }
    }

    /// Get the display half-extent of the plane
    pub fn half_extent(&self) -> f32 {
        Self::HALF_EXTENT
    }

    /// Project a world-space point onto the plane's 2D basis
    pub fn to_local(&self, point: Vec3) -> Vec2 {
        match self {
            ConstructionPlane::XY => Vec2::new(point.x, point.y),
            ConstructionPlane::XZ => Vec2::new(point.x, point.z),
            ConstructionPlane::YZ => Vec2::new(point.y, point.z),
        }
    }

    /// Place a plane-local point back into world space
    pub fn to_world(&self, local: Vec2) -> Vec3 {
        match self {
            ConstructionPlane::XY => Vec3::new(local.x, local.y, 0.0),
            ConstructionPlane::XZ => Vec3::new(local.x, 0.0, local.y),
            ConstructionPlane::YZ => Vec3::new(0.0, local.x, local.y),
        }
    }

    /// Camera orientation (rot_x, rot_y, rot_z) in degrees that looks
    /// straight into the plane
    pub fn view_angles(&self) -> Vec3 {
        match self {
            ConstructionPlane::XY => Vec3::ZERO,
            ConstructionPlane::XZ => Vec3::new(90.0, 0.0, 0.0),
            ConstructionPlane::YZ => Vec3::new(0.0, -90.0, 0.0),
        }
    }
}

impl std::fmt::Display for ConstructionPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
