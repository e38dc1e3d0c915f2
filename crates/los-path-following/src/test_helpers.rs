//! Visibility backends and paths shared by the tests

use std::sync::{Arc, Mutex};

use crate::agent::AgentBody;
use crate::path::{NavPath, PathPoint};
use crate::visibility::{VisibilityQuery, VisibilityResult};
use glam::Vec3;
use nav_common::Result;
use navmesh::{NavMesh, NavMeshCreateParams, PolyFlags, PolyRef, QueryFilter};

/// Size of every square cell in the test meshes
pub const CELL: f32 = 2.0;

/// A raycast received by [`ScriptedVisibility`]
#[derive(Debug, Clone)]
pub struct RecordedRaycast {
    pub from: Vec3,
    pub to: Vec3,
    pub filter: QueryFilter,
}

/// Visibility backend blocking every ray that reaches past `blocked_beyond_x`
///
/// Each ray reports a corridor of one polygon, `to.x` rounded plus one, so a
/// path with a point per unit of x gets a distinct corridor per point.
#[derive(Debug, Default)]
pub struct ScriptedVisibility {
    pub blocked_beyond_x: Option<f32>,
    pub area_costs: bool,
    pub calls: Mutex<Vec<RecordedRaycast>>,
}

impl ScriptedVisibility {
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn blocked_beyond(x: f32) -> Self {
        Self {
            blocked_beyond_x: Some(x),
            ..Self::default()
        }
    }

    pub fn with_area_costs(mut self) -> Self {
        self.area_costs = true;
        self
    }

    pub fn calls(&self) -> Vec<RecordedRaycast> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    pub fn marker(to: Vec3) -> PolyRef {
        PolyRef::new(to.x.round() as u32 + 1)
    }
}

impl VisibilityQuery for ScriptedVisibility {
    fn raycast(
        &self,
        from: Vec3,
        to: Vec3,
        filter: &QueryFilter,
        _agent: &AgentBody,
    ) -> VisibilityResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedRaycast {
                from,
                to,
                filter: filter.clone(),
            });
        }

        let corridor = vec![Self::marker(to)];
        match self.blocked_beyond_x {
            Some(limit) if to.x > limit => {
                VisibilityResult::blocked(Vec3::new(limit, to.y, to.z)).with_corridor(corridor)
            }
            _ => VisibilityResult::clear(to).with_corridor(corridor),
        }
    }

    fn supports_area_costs(&self) -> bool {
        self.area_costs
    }
}

/// `count` points along +x, one unit apart, all in area 0
pub fn colinear_points(count: usize) -> Vec<PathPoint> {
    (0..count)
        .map(|i| PathPoint::new(Vec3::new(i as f32, 0.0, 0.0)))
        .collect()
}

/// A corridor path over `points` answered by `visibility`
pub fn scripted_path(points: Vec<PathPoint>, visibility: &Arc<ScriptedVisibility>) -> NavPath {
    NavPath::corridor(points, vec![PolyRef::new(1)]).with_navigation_data(visibility.clone())
}

/// Agent standing at the origin
pub fn agent_at_origin() -> AgentBody {
    AgentBody::new(Vec3::ZERO, 0.5, 1.0)
}

/// Creates a row of square polygons along +x, one per entry of `areas`
///
/// Polygon `i` covers `x in [2i, 2i + 2]`, `z in [0, 2]` and has reference `i + 1`.
pub fn create_strip_navmesh(areas: &[u8]) -> Result<NavMesh> {
    let count = areas.len();
    let verts = (0..=count)
        .flat_map(|i| {
            let x = i as f32 * CELL;
            [Vec3::new(x, 0.0, 0.0), Vec3::new(x, 0.0, CELL)]
        })
        .collect();

    let polys = (0..count)
        .map(|i| {
            let b0 = (i * 2) as u16;
            vec![b0, b0 + 1, b0 + 3, b0 + 2]
        })
        .collect();

    NavMesh::new(NavMeshCreateParams {
        verts,
        polys,
        poly_areas: areas.to_vec(),
        poly_flags: vec![PolyFlags::WALK; count],
    })
}

/// Creates an L-shaped mesh of cells `(0,0)`, `(1,0)` and `(1,1)`; the inner
/// corner sits at `(2, 2)`
pub fn create_l_shaped_navmesh() -> Result<NavMesh> {
    NavMesh::new(NavMeshCreateParams {
        verts: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(2.0, 0.0, 2.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 2.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 4.0),
            Vec3::new(4.0, 0.0, 4.0),
        ],
        polys: vec![vec![0, 1, 2, 3], vec![3, 2, 4, 5], vec![2, 6, 7, 4]],
        poly_areas: vec![0, 0, 0],
        poly_flags: vec![PolyFlags::WALK; 3],
    })
}

/// Centre of strip cell `i`, on the floor
pub fn cell_centre(i: usize) -> Vec3 {
    Vec3::new(i as f32 * CELL + CELL * 0.5, 0.0, CELL * 0.5)
}
