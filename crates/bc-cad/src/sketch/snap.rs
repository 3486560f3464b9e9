//! Nearest-feature snapping
//!
//! Replaces a raw cursor coordinate with an existing point, or with the
//! closest point on an existing line, when one lies within a radius.

use glam::Vec2;

use super::{LineId, PointId, Sketch};

/// Lines shorter than this are skipped by line snapping
const MIN_SEGMENT_LENGTH_SQ: f32 = 1e-12;

/// Result of snapping to an existing point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSnap {
    /// Snapped position (the point's own position)
    pub position: Vec2,
    /// Point that was snapped to
    pub point: PointId,
}

/// Result of snapping onto an existing line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSnap {
    /// Closest point on the segment
    pub position: Vec2,
    /// Line that was snapped to
    pub line: LineId,
}

/// Closest point to `p` on the segment `a`-`b`.
///
/// The perpendicular projection is clamped to the segment, so points beyond
/// either end snap to that endpoint.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= MIN_SEGMENT_LENGTH_SQ {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

impl Sketch {
    /// Snap to the nearest point within `radius`.
    ///
    /// Equal distances resolve to the lowest point index.
    pub fn snap_to_point(&self, position: Vec2, radius: f32) -> Option<PointSnap> {
        let mut best: Option<(PointId, Vec2, f32)> = None;

        for (id, point) in self.points() {
            let distance = point.position.distance(position);
            if distance > radius {
                continue;
            }
            if best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((id, point.position, distance));
            }
        }

        best.map(|(point, position, _)| PointSnap { position, point })
    }

    /// Snap onto the nearest active line within `radius`.
    ///
    /// Equal distances resolve to the lowest line index.
    pub fn snap_to_line(&self, position: Vec2, radius: f32) -> Option<LineSnap> {
        let mut best: Option<(LineId, Vec2, f32)> = None;

        for (id, a, b) in self.active_lines() {
            let (Some(pa), Some(pb)) = (self.point_position(a), self.point_position(b)) else {
                continue;
            };
            if pa.distance_squared(pb) <= MIN_SEGMENT_LENGTH_SQ {
                continue;
            }

            let closest = closest_point_on_segment(position, pa, pb);
            let distance = closest.distance(position);
            if best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((id, closest, distance));
            }
        }

        best.filter(|(_, _, d)| *d <= radius)
            .map(|(line, position, _)| LineSnap { position, line })
    }
}
