//! Screen-to-world ray casting
//!
//! Inverts the camera transform chain in reverse order: zoom scale, pan,
//! then the X, Y and Z rotations with negated angles.

use glam::{Quat, Vec2, Vec3};

use crate::camera::Camera;

/// Depth of the view volume on either side of the camera plane.
///
/// Rays start on the far side of it and travel towards -Z in view space.
pub const VIEW_DEPTH: f32 = 100.0;

/// A world-space ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start of the ray
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport; each side is at least one pixel
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map a pixel to normalized device coordinates (Y up)
    pub fn to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x / self.width * 2.0 - 1.0,
            1.0 - screen.y / self.height * 2.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Half-size of the orthographic view volume at zoom distance 1.
///
/// The shorter side always spans [-1, 1].
pub fn ortho_half_extents(aspect: f32) -> Vec2 {
    if aspect > 1.0 {
        Vec2::new(aspect, 1.0)
    } else {
        Vec2::new(1.0, 1.0 / aspect)
    }
}

/// Compute the world-space ray under a screen pixel
pub fn compute_ray(screen: Vec2, viewport: Viewport, camera: &Camera) -> Ray {
    let ndc = viewport.to_ndc(screen);
    let half = ortho_half_extents(viewport.aspect());

    // Undo zoom
    let view = ndc * half * camera.distance();
    let mut origin = Vec3::new(view.x, view.y, VIEW_DEPTH);
    let direction = Vec3::NEG_Z;

    // Undo pan (directions are unaffected)
    let pan = camera.pan_offset();
    origin.x -= pan.x;
    origin.y -= pan.y;

    let angles = camera.angles();
    let inverse = Quat::from_rotation_z(-angles.z.to_radians())
        * Quat::from_rotation_y(-angles.y.to_radians())
        * Quat::from_rotation_x(-angles.x.to_radians());

    Ray::new(inverse * origin, (inverse * direction).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ViewPreset;
    use approx::assert_relative_eq;

    fn front_camera(distance: f32) -> Camera {
        let mut camera = Camera::new();
        camera.set_preset(ViewPreset::Front);
        camera.set_distance(distance);
        camera
    }

    #[test]
    fn test_ortho_bounds() {
        assert_eq!(ortho_half_extents(2.0), Vec2::new(2.0, 1.0));
        assert_eq!(ortho_half_extents(0.5), Vec2::new(1.0, 2.0));
        assert_eq!(ortho_half_extents(1.0), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_viewport_clamps_to_one_pixel() {
        let viewport = Viewport::new(0.0, 0.25);
        assert_eq!(viewport, Viewport::new(1.0, 1.0));
        assert_eq!(viewport.aspect(), 1.0);

        let ndc = viewport.to_ndc(Vec2::new(0.5, 0.5));
        assert!(ndc.is_finite());
        assert_eq!(ndc, Vec2::ZERO);
    }

    #[test]
    fn test_ndc_flips_vertical() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_front_center_ray() {
        let camera = front_camera(1.0);
        let ray = compute_ray(Vec2::new(400.0, 300.0), Viewport::new(800.0, 600.0), &camera);

        assert_relative_eq!(ray.origin.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.z, VIEW_DEPTH, epsilon = 1e-3);
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_scales_origin() {
        let viewport = Viewport::new(800.0, 600.0);
        let corner = Vec2::new(800.0, 0.0);

        let near = compute_ray(corner, viewport, &front_camera(1.0));
        let far = compute_ray(corner, viewport, &front_camera(2.0));

        assert_relative_eq!(near.origin.x, 4.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(far.origin.x, 8.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(far.origin.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_pan_moves_origin_only() {
        let mut camera = front_camera(1.0);
        camera.set_pan_offset(Vec2::new(0.25, -0.5));

        let ray = compute_ray(Vec2::new(400.0, 300.0), Viewport::new(800.0, 600.0), &camera);

        assert_relative_eq!(ray.origin.x, -0.25, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.y, 0.5, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_top_view_looks_down_y() {
        let mut camera = Camera::new();
        camera.set_preset(ViewPreset::Top);

        let ray = compute_ray(Vec2::new(400.0, 300.0), Viewport::new(800.0, 600.0), &camera);

        assert_relative_eq!(ray.direction.y, -1.0, epsilon = 1e-5);
        assert!(ray.origin.y > 0.0);
    }

    #[test]
    fn test_ray_inverts_forward_transform() {
        let mut camera = Camera::new();
        camera.set_distance(1.5);
        camera.set_pan_offset(Vec2::new(0.1, -0.2));
        let viewport = Viewport::new(1024.0, 768.0);

        let world = Vec3::new(0.3, -0.2, 0.1);
        let screen = camera.world_to_screen(world, viewport);
        let ray = compute_ray(screen, viewport, &camera);

        // The ray must pass through the original point
        let t = (world - ray.origin).dot(ray.direction);
        let closest = ray.at(t);
        assert!(closest.distance(world) < 1e-3);
    }
}
