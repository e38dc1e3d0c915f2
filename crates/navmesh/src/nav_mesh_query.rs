//! Navigation mesh query implementation
//!
//! Queries borrow the mesh immutably, so any number of them can run against a
//! shared mesh at the same time.

use super::raycast_hit::{RaycastHit, RaycastOptions, RaycastResult};
use super::{NavMesh, PolyRef, QueryFilter, Status};
use glam::Vec3;
use nav_common::{Error, Result, intersect_segment_poly_2d};

/// Upper bound on the polygons a single raycast may walk through
const MAX_RAYCAST_ITERATIONS: usize = 256;

/// Navigation mesh query
#[derive(Debug, Clone, Copy)]
pub struct NavMeshQuery<'a> {
    nav_mesh: &'a NavMesh,
}

impl<'a> NavMeshQuery<'a> {
    /// Creates a new query against a navigation mesh
    pub fn new(nav_mesh: &'a NavMesh) -> Self {
        Self { nav_mesh }
    }

    /// Gets the navigation mesh
    pub fn nav_mesh(&self) -> &NavMesh {
        self.nav_mesh
    }

    /// Checks if a polygon reference is valid and passes the filter
    pub fn is_valid_poly_ref(&self, poly_ref: PolyRef, filter: &QueryFilter) -> bool {
        self.nav_mesh
            .get_poly_by_ref(poly_ref)
            .map(|poly| filter.pass_filter(poly))
            .unwrap_or(false)
    }

    /// Finds the polygon nearest to `center` within the box `center ± half_extents`
    ///
    /// Returns the null reference and `center` when no polygon passing the
    /// filter overlaps the box.
    pub fn find_nearest_poly(
        &self,
        center: &Vec3,
        half_extents: &Vec3,
        filter: &QueryFilter,
    ) -> Result<(PolyRef, Vec3)> {
        if !center.is_finite() || !half_extents.is_finite() || half_extents.min_element() < 0.0 {
            return Err(Error::Navigation(Status::InvalidParam.to_string()));
        }

        let qmin = *center - *half_extents;
        let qmax = *center + *half_extents;

        let mut nearest_ref = PolyRef::NULL;
        let mut nearest_pt = *center;
        let mut nearest_dist = f32::MAX;

        for poly_ref in self.nav_mesh.poly_refs() {
            let poly = self.nav_mesh.get_poly_by_ref(poly_ref)?;
            if !filter.pass_filter(poly) {
                continue;
            }

            let verts = self.nav_mesh.vertices_of(poly);
            let (pmin, pmax) = verts.iter().fold(
                (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
                |(lo, hi), v| (lo.min(*v), hi.max(*v)),
            );
            if pmin.cmpgt(qmax).any() || pmax.cmplt(qmin).any() {
                continue;
            }

            let (closest, over_poly) = self.nav_mesh.closest_point_on_poly(poly_ref, center)?;
            // Directly over the polygon only the vertical gap counts
            let d = if over_poly {
                let dy = center.y - closest.y;
                dy * dy
            } else {
                center.distance_squared(closest)
            };

            if d < nearest_dist {
                nearest_dist = d;
                nearest_ref = poly_ref;
                nearest_pt = closest;
            }
        }

        Ok((nearest_ref, nearest_pt))
    }

    /// Casts a ray along the surface of the mesh from `start_pos` towards `end_pos`
    ///
    /// The ray walks from polygon to polygon on the xz-plane. Leaving a polygon
    /// through an edge without a neighbour, or into a neighbour rejected by the
    /// filter, is a wall hit. The ray is unobstructed when `end_pos` lies
    /// inside a reachable polygon.
    pub fn raycast(
        &self,
        start_ref: PolyRef,
        start_pos: &Vec3,
        end_pos: &Vec3,
        filter: &QueryFilter,
        options: &RaycastOptions,
    ) -> Result<RaycastResult> {
        if !self.nav_mesh.is_valid_poly_ref(start_ref) {
            return Err(Error::Navigation(Status::InvalidParam.to_string()));
        }
        if !start_pos.is_finite() || !end_pos.is_finite() {
            return Err(Error::Navigation(Status::InvalidParam.to_string()));
        }

        let dir = *end_pos - *start_pos;
        let mut visited = Vec::new();
        let mut path_cost = 0.0;

        let mut cur_ref = start_ref;
        let mut cur_pos = *start_pos;
        let mut last_t = 0.0;

        let finish = |mut hit: RaycastHit, visited: Vec<PolyRef>, cost: f32| {
            if options.include_path {
                hit.path = Some(visited);
            }
            if options.include_cost {
                hit.path_cost = Some(cost);
            }
            hit
        };

        for _ in 0..MAX_RAYCAST_ITERATIONS {
            let poly = self.nav_mesh.get_poly_by_ref(cur_ref)?;
            let verts = self.nav_mesh.vertices_of(poly);

            let Some(isect) = intersect_segment_poly_2d(start_pos, end_pos, &verts) else {
                // The ray misses the current polygon, report a hit where it was last seen
                let hit = finish(RaycastHit::wall_hit(last_t, Vec3::ZERO, None), visited, path_cost);
                return Ok(RaycastResult {
                    end_ref: cur_ref,
                    end_pos: *start_pos + dir * last_t,
                    hit,
                    status: Status::Success,
                });
            };

            if isect.tmax > last_t {
                last_t = isect.tmax;
            }
            if options.include_path {
                visited.push(cur_ref);
            }

            let Some(edge) = isect.seg_max else {
                // The end point is inside this polygon
                if options.include_cost {
                    path_cost += filter.cost(&cur_pos, end_pos, poly);
                }
                let hit = finish(RaycastHit::no_hit(), visited, path_cost);
                return Ok(RaycastResult {
                    end_ref: cur_ref,
                    end_pos: *end_pos,
                    hit,
                    status: Status::Success,
                });
            };

            let next_ref = poly.neighbour(edge);
            let passable = self.is_valid_poly_ref(next_ref, filter);
            let edge_pos = *start_pos + dir * isect.tmax;

            if options.include_cost {
                path_cost += filter.cost(&cur_pos, &edge_pos, poly);
            }

            if !passable {
                let va = verts[edge];
                let vb = verts[(edge + 1) % verts.len()];
                let normal = Vec3::new(vb.z - va.z, 0.0, -(vb.x - va.x)).normalize_or_zero();
                let hit = finish(
                    RaycastHit::wall_hit(isect.tmax, normal, Some(edge)),
                    visited,
                    path_cost,
                );
                return Ok(RaycastResult {
                    end_ref: cur_ref,
                    end_pos: edge_pos,
                    hit,
                    status: Status::Success,
                });
            }

            cur_pos = edge_pos;
            cur_ref = next_ref;
        }

        log::warn!(
            "Raycast from {:?} to {:?} stopped after {} polygons",
            start_pos,
            end_pos,
            MAX_RAYCAST_ITERATIONS
        );

        let hit = finish(RaycastHit::wall_hit(last_t, Vec3::ZERO, None), visited, path_cost);
        Ok(RaycastResult {
            end_ref: cur_ref,
            end_pos: cur_pos,
            hit,
            status: Status::PartialResult,
        })
    }
}
