//! Visibility backed by a polygon navigation mesh

use std::sync::Arc;

use crate::agent::AgentBody;
use crate::visibility::{VisibilityQuery, VisibilityResult};
use glam::Vec3;
use navmesh::{NavMesh, NavMeshQuery, QueryFilter, RaycastOptions};

/// Smallest half extent used when locating the agent on the mesh
pub const MIN_QUERY_EXTENT: f32 = 0.1;

/// Raycasts along the surface of a shared navigation mesh and reports the
/// polygons crossed
#[derive(Debug, Clone)]
pub struct NavMeshVisibility {
    nav_mesh: Arc<NavMesh>,
}

impl NavMeshVisibility {
    /// Creates a backend over a shared mesh
    pub fn new(nav_mesh: Arc<NavMesh>) -> Self {
        Self { nav_mesh }
    }

    /// The navigation mesh
    pub fn nav_mesh(&self) -> &NavMesh {
        &self.nav_mesh
    }

    /// Half extents of the box used to find the polygon under the agent.
    /// The body position is its centre, so the vertical reach is a full height.
    pub fn query_extent(agent: &AgentBody) -> Vec3 {
        Vec3::new(agent.radius, agent.half_height * 2.0, agent.radius)
            .max(Vec3::splat(MIN_QUERY_EXTENT))
    }
}

impl VisibilityQuery for NavMeshVisibility {
    fn raycast(
        &self,
        from: Vec3,
        to: Vec3,
        filter: &QueryFilter,
        agent: &AgentBody,
    ) -> VisibilityResult {
        let query = NavMeshQuery::new(&self.nav_mesh);

        let start_ref = match query.find_nearest_poly(&from, &Self::query_extent(agent), filter) {
            Ok((poly_ref, _)) if poly_ref.is_valid() => poly_ref,
            Ok(_) => {
                log::trace!("No polygon under {:?} passes the filter", from);
                return VisibilityResult::blocked(from);
            }
            Err(e) => {
                log::trace!("Locating {:?} on the mesh failed: {}", from, e);
                return VisibilityResult::blocked(from);
            }
        };

        let options = RaycastOptions {
            include_cost: false,
            include_path: true,
        };

        match query.raycast(start_ref, &from, &to, filter, &options) {
            Ok(mut result) => {
                let corridor = result.hit.path.take().unwrap_or_default();
                let outcome = if result.hit.hit_wall() {
                    VisibilityResult::blocked(result.end_pos)
                } else {
                    VisibilityResult::clear(to)
                };
                outcome.with_corridor(corridor)
            }
            Err(e) => {
                log::trace!("Raycast {:?} -> {:?} failed: {}", from, to, e);
                VisibilityResult::blocked(from)
            }
        }
    }

    fn supports_area_costs(&self) -> bool {
        true
    }
}
