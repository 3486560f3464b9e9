//! Orbiting orthographic camera for the 3D viewport
//!
//! The camera is plain state plus transform math. World points are rotated
//! about Z, then Y, then X, translated by the pan offset and finally scaled
//! by `1 / distance`; [`crate::ray::compute_ray`] undoes exactly this chain.

use bc_cad::ConstructionPlane;
use glam::{Mat4, Quat, Vec2, Vec3};

use crate::config::CameraConfig;
use crate::ray::{Ray, VIEW_DEPTH, Viewport, compute_ray, ortho_half_extents};

/// Named view orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    /// Looking straight down -Z
    Front,
    /// Rotated 90 degrees about X
    Top,
    /// Rolled -90 degrees about Z
    Right,
    /// True isometric
    Iso,
}

impl ViewPreset {
    /// Get all presets
    pub fn all() -> [ViewPreset; 4] {
        [
            ViewPreset::Front,
            ViewPreset::Top,
            ViewPreset::Right,
            ViewPreset::Iso,
        ]
    }

    /// Orientation (rot_x, rot_y, rot_z) in degrees
    pub fn angles(&self) -> Vec3 {
        match self {
            ViewPreset::Front => Vec3::ZERO,
            ViewPreset::Top => Vec3::new(90.0, 0.0, 0.0),
            ViewPreset::Right => Vec3::new(0.0, 0.0, -90.0),
            // atan(1/sqrt(2)) below the horizon, 45 degrees around
            ViewPreset::Iso => Vec3::new(-35.264, 45.0, 0.0),
        }
    }

    /// Get the display name of the preset
    pub fn name(&self) -> &'static str {
        match self {
            ViewPreset::Front => "Front",
            ViewPreset::Top => "Top",
            ViewPreset::Right => "Right",
            ViewPreset::Iso => "Iso",
        }
    }

    /// Look a preset up by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

/// In-progress animated view change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimation {
    /// Angles when the animation started
    pub start: Vec3,
    /// Angles to end on
    pub target: Vec3,
    /// Seconds elapsed so far
    pub elapsed: f32,
    /// Total length in seconds
    pub duration: f32,
}

impl CameraAnimation {
    /// Interpolated angles at the current elapsed time
    pub fn current(&self) -> Vec3 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.start.lerp(self.target, t)
    }

    /// Check whether the animation has run its full duration
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Orbit camera with orthographic projection
#[derive(Debug, Clone)]
pub struct Camera {
    distance: f32,
    rot_x: f32,
    rot_y: f32,
    rot_z: f32,
    pan_x: f32,
    pan_y: f32,
    animation: Option<CameraAnimation>,
    // Cursor position from the last begin/step call
    last_cursor: Vec2,
    config: CameraConfig,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera with the default pose and settings
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera with the default pose and the given settings
    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            distance: config.default_distance,
            rot_x: 30.0,
            rot_y: 0.0,
            rot_z: -45.0,
            pan_x: 0.0,
            pan_y: 0.0,
            animation: None,
            last_cursor: Vec2::ZERO,
            config,
        }
    }

    /// Get the interaction settings
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Replace the interaction settings, re-clamping the zoom distance
    pub fn set_config(&mut self, config: CameraConfig) {
        self.config = config;
        self.set_distance(self.distance);
    }

    /// Zoom distance
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Set the zoom distance (clamped)
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Orientation (rot_x, rot_y, rot_z) in degrees
    pub fn angles(&self) -> Vec3 {
        Vec3::new(self.rot_x, self.rot_y, self.rot_z)
    }

    /// Set the orientation directly, cancelling any animation
    pub fn set_angles(&mut self, angles: Vec3) {
        self.animation = None;
        self.apply_angles(angles);
    }

    fn apply_angles(&mut self, angles: Vec3) {
        self.rot_x = angles.x;
        self.rot_y = angles.y;
        self.rot_z = angles.z;
    }

    /// Pan offset in world units
    pub fn pan_offset(&self) -> Vec2 {
        Vec2::new(self.pan_x, self.pan_y)
    }

    /// Set the pan offset directly
    pub fn set_pan_offset(&mut self, pan: Vec2) {
        self.pan_x = pan.x;
        self.pan_y = pan.y;
    }

    /// Rotation applied to world points (Z first, then Y, then X)
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.rot_x.to_radians())
            * Quat::from_rotation_y(self.rot_y.to_radians())
            * Quat::from_rotation_z(self.rot_z.to_radians())
    }

    // ============== Views ==============

    /// Jump to a preset orientation
    pub fn set_preset(&mut self, preset: ViewPreset) {
        self.set_angles(preset.angles());
    }

    /// Reset zoom and pan, keeping the orientation
    pub fn fit_all(&mut self) {
        self.set_distance(self.config.default_distance);
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    // ============== Interaction ==============

    /// Start an orbit drag at the given cursor position
    pub fn begin_drag(&mut self, cursor: Vec2) {
        self.last_cursor = cursor;
    }

    /// Orbit by the cursor motion since the last call
    pub fn orbit(&mut self, cursor: Vec2) {
        let delta = cursor - self.last_cursor;
        let limit = self.config.pitch_limit;

        self.rot_y += delta.x * self.config.orbit_sensitivity;
        self.rot_x = (self.rot_x + delta.y * self.config.orbit_sensitivity).clamp(-limit, limit);
        self.last_cursor = cursor;
    }

    /// Start a pan drag at the given cursor position
    pub fn begin_pan(&mut self, cursor: Vec2) {
        self.last_cursor = cursor;
    }

    /// Pan by the cursor motion since the last call.
    ///
    /// Speed is a fixed pixel-to-world factor, not scaled by zoom.
    pub fn pan(&mut self, cursor: Vec2) {
        let delta = cursor - self.last_cursor;

        self.pan_x += delta.x * self.config.pan_sensitivity;
        // Screen Y grows downward
        self.pan_y -= delta.y * self.config.pan_sensitivity;
        self.last_cursor = cursor;
    }

    /// Zoom by a scroll amount; positive values zoom in
    pub fn zoom(&mut self, factor: f32) {
        self.set_distance(self.distance * (1.0 - factor * self.config.zoom_sensitivity));
    }

    // ============== Animation ==============

    /// Animate to the orientation looking straight into `plane`
    pub fn animate_to(&mut self, plane: ConstructionPlane, duration: f32) {
        self.animate_to_angles(plane.view_angles(), duration);
    }

    /// Animate from the current orientation to `target` over `duration`
    /// seconds; a non-positive duration applies the target immediately
    pub fn animate_to_angles(&mut self, target: Vec3, duration: f32) {
        if duration <= 0.0 {
            self.set_angles(target);
            return;
        }
        self.animation = Some(CameraAnimation {
            start: self.angles(),
            target,
            elapsed: 0.0,
            duration,
        });
    }

    /// Advance any running animation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        let Some(mut animation) = self.animation else {
            return;
        };

        animation.elapsed += dt.max(0.0);
        if animation.is_finished() {
            self.apply_angles(animation.target);
            self.animation = None;
            tracing::debug!("Camera animation finished at {}", animation.target);
        } else {
            self.apply_angles(animation.current());
            self.animation = Some(animation);
        }
    }

    /// Check whether a view animation is running
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the running animation
    pub fn animation(&self) -> Option<&CameraAnimation> {
        self.animation.as_ref()
    }

    // ============== Transforms ==============

    /// Get view matrix (world to view space, zoom included)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(1.0 / self.distance))
            * Mat4::from_translation(Vec3::new(self.pan_x, self.pan_y, 0.0))
            * Mat4::from_quat(self.orientation())
    }

    /// Get orthographic projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let half = ortho_half_extents(aspect);
        Mat4::orthographic_rh_gl(-half.x, half.x, -half.y, half.y, -VIEW_DEPTH, VIEW_DEPTH)
    }

    /// Convert screen coordinates to a world-space ray
    pub fn screen_to_ray(&self, screen: Vec2, viewport: Viewport) -> Ray {
        compute_ray(screen, viewport, self)
    }

    /// Convert a world-space point to screen coordinates
    pub fn world_to_screen(&self, point: Vec3, viewport: Viewport) -> Vec2 {
        let view = self.view_matrix().transform_point3(point);
        let half = ortho_half_extents(viewport.aspect());
        let ndc = Vec2::new(view.x / half.x, view.y / half.y);

        Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc.y) * 0.5 * viewport.height,
        )
    }
}
