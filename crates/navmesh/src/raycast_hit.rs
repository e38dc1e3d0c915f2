//! Raycast hit information

use super::{PolyRef, Status};
use glam::Vec3;

/// Options for raycast behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaycastOptions {
    /// Accumulate the filter cost of the traversed segment
    pub include_cost: bool,
    /// Record the polygons visited by the ray
    pub include_path: bool,
}

impl Default for RaycastOptions {
    fn default() -> Self {
        Self {
            include_cost: false,
            include_path: true,
        }
    }
}

/// Provides information about a raycast hit
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastHit {
    /// Hit parameter along the ray in `[0, 1]`, `f32::MAX` if no wall was hit
    pub t: f32,
    /// Normal of the wall that was hit, facing back into the walkable side
    pub hit_normal: Vec3,
    /// Edge of the last polygon where the wall was hit
    pub hit_edge_index: Option<usize>,
    /// Polygons visited by the ray, starting polygon first
    pub path: Option<Vec<PolyRef>>,
    /// Cost of the traversed part of the ray
    pub path_cost: Option<f32>,
}

impl RaycastHit {
    /// Creates a result that did not hit a wall
    pub fn no_hit() -> Self {
        Self {
            t: f32::MAX,
            hit_normal: Vec3::ZERO,
            hit_edge_index: None,
            path: None,
            path_cost: None,
        }
    }

    /// Creates a result that hit a wall at `t`
    pub fn wall_hit(t: f32, normal: Vec3, edge_index: Option<usize>) -> Self {
        Self {
            t,
            hit_normal: normal,
            hit_edge_index: edge_index,
            path: None,
            path_cost: None,
        }
    }

    /// Checks if the ray was stopped by a wall
    pub fn hit_wall(&self) -> bool {
        self.t < f32::MAX
    }

    /// Visited polygons, empty when the path was not requested
    pub fn visited(&self) -> &[PolyRef] {
        self.path.as_deref().unwrap_or(&[])
    }
}

/// Result of a raycast query
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastResult {
    /// The polygon where the ray ends
    pub end_ref: PolyRef,
    /// The position where the ray ends, the hit location on a wall hit
    pub end_pos: Vec3,
    /// Hit information
    pub hit: RaycastHit,
    /// `Success`, or `PartialResult` when the walk was cut short
    pub status: Status,
}
