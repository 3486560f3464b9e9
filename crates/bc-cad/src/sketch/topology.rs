//! Connectivity queries over active lines
//!
//! Used by line-chain drawing to decide whether the next click closes the
//! chain into a loop.

use std::collections::{HashSet, VecDeque};

use super::{LineId, PointId, Sketch};

impl Sketch {
    /// Points joined to `point` by an active line
    pub fn neighbors(&self, point: PointId) -> Vec<PointId> {
        self.active_lines()
            .filter_map(|(_, a, b)| {
                if a == point {
                    Some(b)
                } else if b == point {
                    Some(a)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Check whether `to` is reachable from `from` through active lines.
    ///
    /// A point is always connected to itself.
    pub fn is_connected(&self, from: PointId, to: PointId) -> bool {
        if self.point(from).is_none() || self.point(to).is_none() {
            return false;
        }
        if from == to {
            return true;
        }

        let mut adjacency = vec![Vec::new(); self.point_count()];
        for (_, a, b) in self.active_lines() {
            if let Some(list) = adjacency.get_mut(a.0) {
                list.push(b);
            }
            if let Some(list) = adjacency.get_mut(b.0) {
                list.push(a);
            }
        }

        let mut visited = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            let Some(next_points) = adjacency.get(current.0) else {
                continue;
            };
            for &next in next_points {
                if next == to {
                    return true;
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        false
    }

    /// Check whether drawing from the chain end to `candidate` closes the
    /// chain that started at `start`
    pub fn would_close_shape(&self, start: PointId, candidate: PointId) -> bool {
        candidate == start || self.is_connected(start, candidate)
    }

    /// Line-snap variant of [`Sketch::would_close_shape`].
    ///
    /// Committing to a line snap splits that line, so reachability is
    /// evaluated against its current endpoints.
    pub fn would_close_shape_on_line(&self, start: PointId, candidate: LineId) -> bool {
        let Ok((a, b)) = self.line_endpoints(candidate) else {
            return false;
        };
        a == start || b == start || self.is_connected(start, a) || self.is_connected(start, b)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::plane::ConstructionPlane;
    use crate::sketch::Sketch;

    #[test]
    fn test_point_closes_on_itself() {
        let mut sketch = Sketch::new("loop", ConstructionPlane::XY);
        let s = sketch.add_point(Vec2::ZERO, true);
        assert!(sketch.would_close_shape(s, s));
    }

    #[test]
    fn test_chain_reachability() {
        let mut sketch = Sketch::new("chain", ConstructionPlane::XY);
        let a = sketch.add_point(Vec2::new(0.0, 0.0), true);
        let b = sketch.add_point(Vec2::new(1.0, 0.0), true);
        let c = sketch.add_point(Vec2::new(1.0, 1.0), true);
        let d = sketch.add_point(Vec2::new(5.0, 5.0), true);

        sketch.add_line(a, b, true).unwrap();
        assert!(!sketch.would_close_shape(a, c));

        sketch.add_line(b, c, true).unwrap();
        assert!(sketch.would_close_shape(a, c));
        assert!(!sketch.would_close_shape(a, d));

        sketch.add_line(c, a, true).unwrap();
        assert!(sketch.would_close_shape(a, a));
        assert!(sketch.would_close_shape(a, c));
    }

    #[test]
    fn test_reachability_survives_split() {
        let mut sketch = Sketch::new("split", ConstructionPlane::XY);
        let a = sketch.add_point(Vec2::new(0.0, 0.0), true);
        let b = sketch.add_point(Vec2::new(1.0, 0.0), true);
        let l0 = sketch.add_line(a, b, true).unwrap();
        let mid = sketch.add_point(Vec2::new(0.5, 0.0), true);

        sketch.split_line_at_point(l0, mid).unwrap();

        assert!(sketch.is_connected(a, mid));
        assert!(sketch.is_connected(a, b));
        assert_eq!(sketch.neighbors(mid).len(), 2);
    }

    #[test]
    fn test_would_close_on_line() {
        let mut sketch = Sketch::new("line", ConstructionPlane::XY);
        let a = sketch.add_point(Vec2::new(0.0, 0.0), true);
        let b = sketch.add_point(Vec2::new(1.0, 0.0), true);
        let c = sketch.add_point(Vec2::new(1.0, 1.0), true);
        let x = sketch.add_point(Vec2::new(3.0, 0.0), true);
        let y = sketch.add_point(Vec2::new(3.0, 1.0), true);

        let ab = sketch.add_line(a, b, true).unwrap();
        let bc = sketch.add_line(b, c, true).unwrap();
        let xy = sketch.add_line(x, y, true).unwrap();

        // Endpoint equals start
        assert!(sketch.would_close_shape_on_line(a, ab));
        // Endpoint reachable from start
        assert!(sketch.would_close_shape_on_line(a, bc));
        // Disconnected line
        assert!(!sketch.would_close_shape_on_line(a, xy));
    }

    #[test]
    fn test_removed_line_does_not_close() {
        let mut sketch = Sketch::new("removed", ConstructionPlane::XY);
        let a = sketch.add_point(Vec2::new(0.0, 0.0), true);
        let b = sketch.add_point(Vec2::new(1.0, 0.0), true);
        let ab = sketch.add_line(a, b, true).unwrap();
        let mid = sketch.add_point(Vec2::new(0.5, 0.0), true);
        sketch.split_line_at_point(ab, mid).unwrap();

        assert!(!sketch.would_close_shape_on_line(a, ab));
    }

    #[test]
    fn test_unknown_points_are_not_connected() {
        let mut sketch = Sketch::new("unknown", ConstructionPlane::XY);
        let a = sketch.add_point(Vec2::ZERO, true);
        assert!(!sketch.is_connected(a, crate::sketch::PointId(7)));
    }
}
