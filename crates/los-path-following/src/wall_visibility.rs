//! Visibility against a set of blocking wall segments
//!
//! Walls are tested on the xz-plane, height is ignored. The backend has no
//! notion of areas, so the query filter is not consulted and no corridor is
//! reported.

use crate::agent::AgentBody;
use crate::visibility::{VisibilityQuery, VisibilityResult};
use glam::Vec3;
use nav_common::intersect_segments_2d;
use navmesh::QueryFilter;

/// A set of wall segments blocking straight-line movement
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WallVisibility {
    walls: Vec<(Vec3, Vec3)>,
}

impl WallVisibility {
    /// Creates a backend from wall segments
    pub fn new(walls: Vec<(Vec3, Vec3)>) -> Self {
        Self { walls }
    }

    /// Adds a wall and returns the backend
    pub fn with_wall(mut self, a: Vec3, b: Vec3) -> Self {
        self.walls.push((a, b));
        self
    }

    /// Adds a wall
    pub fn add_wall(&mut self, a: Vec3, b: Vec3) {
        self.walls.push((a, b));
    }

    /// Wall segments
    pub fn walls(&self) -> &[(Vec3, Vec3)] {
        &self.walls
    }

    /// Parameter along `from -> to` of the nearest wall crossing
    fn nearest_crossing(&self, from: Vec3, to: Vec3) -> Option<f32> {
        self.walls
            .iter()
            .filter_map(|(a, b)| intersect_segments_2d(&from, &to, a, b))
            .filter(|(s, t)| (0.0..=1.0).contains(s) && (0.0..=1.0).contains(t))
            .map(|(s, _)| s)
            .min_by(f32::total_cmp)
    }
}

impl VisibilityQuery for WallVisibility {
    fn raycast(
        &self,
        from: Vec3,
        to: Vec3,
        _filter: &QueryFilter,
        _agent: &AgentBody,
    ) -> VisibilityResult {
        match self.nearest_crossing(from, to) {
            Some(s) => VisibilityResult::blocked(from.lerp(to, s)),
            None => VisibilityResult::clear(to),
        }
    }
}
