//! Construction plane picking
//!
//! Intersects a view ray with the fixed construction planes and reports the
//! one nearest to the viewer.

use bc_cad::{ConstructionPlane, Document};
use glam::{Vec2, Vec3};

use crate::config::PickingConfig;
use crate::ray::Ray;

/// A ray hit on a construction plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Plane that was hit
    pub plane: ConstructionPlane,
    /// Ray parameter of the hit
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Hit point in the plane's local basis
    pub local: Vec2,
}

/// Ray-plane intersection for a plane through the origin.
///
/// Returns the ray parameter, or `None` if the ray is within `epsilon` of
/// parallel. The sign of `t` is not checked.
pub fn ray_plane_intersection(ray: &Ray, normal: Vec3, epsilon: f32) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < epsilon {
        return None;
    }
    Some(-ray.origin.dot(normal) / denom)
}

/// Picks construction planes under a ray
#[derive(Debug, Clone, Default)]
pub struct PlanePicker {
    config: PickingConfig,
}

impl PlanePicker {
    /// Create a picker with the given settings
    pub fn new(config: PickingConfig) -> Self {
        Self { config }
    }

    /// Get the picking settings
    pub fn config(&self) -> &PickingConfig {
        &self.config
    }

    /// Intersect the ray with an unbounded plane
    pub fn intersect(&self, ray: &Ray, plane: ConstructionPlane) -> Option<PlaneHit> {
        let t = ray_plane_intersection(ray, plane.normal(), self.config.parallel_epsilon)?;
        let point = ray.at(t);
        Some(PlaneHit {
            plane,
            t,
            point,
            local: plane.to_local(point),
        })
    }

    /// Hit-test one plane: in front of the ray origin and inside its quad
    pub fn hit(&self, ray: &Ray, plane: ConstructionPlane) -> Option<PlaneHit> {
        let hit = self.intersect(ray, plane)?;
        if hit.t <= 0.0 {
            return None;
        }

        let extent = self.config.plane_half_extent;
        if hit.local.x.abs() > extent || hit.local.y.abs() > extent {
            return None;
        }
        Some(hit)
    }

    /// Nearest hit among `candidates`.
    ///
    /// Equal distances keep the earlier candidate.
    pub fn pick(
        &self,
        ray: &Ray,
        candidates: impl IntoIterator<Item = ConstructionPlane>,
    ) -> Option<PlaneHit> {
        let mut nearest: Option<PlaneHit> = None;
        for plane in candidates {
            let Some(hit) = self.hit(ray, plane) else {
                continue;
            };
            if nearest.is_none_or(|n| hit.t < n.t) {
                nearest = Some(hit);
            }
        }
        nearest
    }

    /// Nearest hit among the document's visible planes
    pub fn pick_visible(&self, ray: &Ray, document: &Document) -> Option<PlaneHit> {
        self.pick(ray, document.visible_planes())
    }
}
