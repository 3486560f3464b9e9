//! Cursor projection onto a sketch plane

use bc_cad::ConstructionPlane;
use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::picking::ray_plane_intersection;
use crate::ray::{Viewport, compute_ray};

/// Project a screen pixel onto `plane`, returning plane-local coordinates.
///
/// Unlike picking there is no extent check, so sketches can extend past the
/// displayed quad. Returns `None` only when the view ray is within
/// `parallel_epsilon` of parallel to the plane, the same tolerance picking
/// uses.
pub fn screen_to_plane_point(
    screen: Vec2,
    viewport: Viewport,
    camera: &Camera,
    plane: ConstructionPlane,
    parallel_epsilon: f32,
) -> Option<Vec2> {
    let ray = compute_ray(screen, viewport, camera);
    let t = ray_plane_intersection(&ray, plane.normal(), parallel_epsilon)?;
    Some(plane.to_local(ray.at(t)))
}

/// Map a plane-local sketch coordinate to the pixel it is drawn at
pub fn plane_point_to_screen(
    local: Vec2,
    viewport: Viewport,
    camera: &Camera,
    plane: ConstructionPlane,
) -> Vec2 {
    camera.world_to_screen(plane_to_world(local, plane), viewport)
}

/// Place a plane-local sketch coordinate in world space
pub fn plane_to_world(local: Vec2, plane: ConstructionPlane) -> Vec3 {
    plane.to_world(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ViewPreset;
    use crate::config::PickingConfig;
    use approx::assert_relative_eq;

    fn eps() -> f32 {
        PickingConfig::default().parallel_epsilon
    }

    #[test]
    fn test_front_view_projects_onto_xy() {
        let mut camera = Camera::new();
        camera.set_preset(ViewPreset::Front);
        camera.set_distance(1.0);
        let viewport = Viewport::new(800.0, 600.0);

        // Outside the plane quad, still projected
        let local = screen_to_plane_point(
            Vec2::new(670.0, 30.0),
            viewport,
            &camera,
            ConstructionPlane::XY,
            eps(),
        )
        .unwrap();
        assert_relative_eq!(local.x, 0.9, epsilon = 1e-4);
        assert_relative_eq!(local.y, 0.9, epsilon = 1e-4);
    }

    #[test]
    fn test_parallel_view_fails() {
        let mut camera = Camera::new();
        camera.set_preset(ViewPreset::Front);
        let viewport = Viewport::new(800.0, 600.0);

        let center = Vec2::new(400.0, 300.0);
        assert!(
            screen_to_plane_point(center, viewport, &camera, ConstructionPlane::XZ, eps())
                .is_none()
        );
    }

    #[test]
    fn test_parallel_tolerance_is_configurable() {
        let mut camera = Camera::new();
        // About 8.7e-4 off parallel to XZ
        camera.set_angles(Vec3::new(0.05, 0.0, 0.0));
        let viewport = Viewport::new(800.0, 600.0);
        let center = Vec2::new(400.0, 300.0);

        let plane = ConstructionPlane::XZ;
        assert!(screen_to_plane_point(center, viewport, &camera, plane, 1e-4).is_some());
        assert!(screen_to_plane_point(center, viewport, &camera, plane, 1e-3).is_none());
    }

    #[test]
    fn test_round_trip_through_screen() {
        let camera = Camera::new();
        let viewport = Viewport::new(1280.0, 720.0);

        for plane in ConstructionPlane::all() {
            let local = Vec2::new(0.2, -0.3);
            let screen = plane_point_to_screen(local, viewport, &camera, plane);
            let back = screen_to_plane_point(screen, viewport, &camera, plane, eps()).unwrap();

            assert_relative_eq!(back.x, local.x, epsilon = 1e-3);
            assert_relative_eq!(back.y, local.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_plane_to_world_uses_local_basis() {
        let world = plane_to_world(Vec2::new(1.0, 2.0), ConstructionPlane::YZ);
        assert_eq!(world, Vec3::new(0.0, 1.0, 2.0));
    }
}
