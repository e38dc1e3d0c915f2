//! Line-of-sight target selection along a path
//!
//! Given the index of the point an agent last passed, the optimizer picks the
//! furthest point further along the path the agent can head for directly.
//! Cheap structural checks run first: custom links and area changes force a
//! single step. Otherwise points are tested one after the other with
//! visibility raycasts from the agent position, stopping at the first
//! obstruction or at the first visible point that lies on an area or link
//! boundary.

use crate::agent::AgentController;
use crate::config::{LosConfig, ShortcutCorridorPolicy};
use crate::path::NavPath;
use crate::visibility::VisibilityResult;
use glam::Vec3;
use nav_common::Result;
use navmesh::{PolyRef, QueryFilter, MAX_AREAS, UNWALKABLE_POLY_COST};

/// The point to head for next and the polygons the shortcut crosses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct OptimizationResult {
    /// Index of the path point to move towards
    pub next_index: usize,
    /// Polygons crossed by the kept raycast, empty when none was kept
    pub shortcut_corridor: Vec<PolyRef>,
}

impl OptimizationResult {
    /// A single step from `start_index` with no shortcut
    pub fn advance(start_index: usize) -> Self {
        Self {
            next_index: start_index + 1,
            shortcut_corridor: Vec::new(),
        }
    }
}

/// Picks move targets along a path by line of sight
#[derive(Debug, Clone, Default)]
pub struct LosOptimizer {
    config: LosConfig,
}

impl LosOptimizer {
    /// Creates an optimizer, rejecting invalid configurations
    pub fn new(config: LosConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected line-of-sight configuration: {}", e);
            return Err(e);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &LosConfig {
        &self.config
    }

    /// Determines the next point to move towards after `start_index`
    ///
    /// The result is never before `start_index + 1`. Out of range indices
    /// produce `start_index + 1` without running any query.
    pub fn determine_next_target<A>(
        &self,
        path: &NavPath,
        start_index: usize,
        agent: &A,
    ) -> OptimizationResult
    where
        A: AgentController + ?Sized,
    {
        let result = self.select_next_target(path, start_index, agent);
        log::trace!(
            "Next target after {} is {} ({} corridor polygons)",
            start_index,
            result.next_index,
            result.shortcut_corridor.len()
        );
        result
    }

    /// Forces a single step across custom links and area changes, runs the
    /// visibility search otherwise
    pub fn select_next_target<A>(
        &self,
        path: &NavPath,
        start_index: usize,
        agent: &A,
    ) -> OptimizationResult
    where
        A: AgentController + ?Sized,
    {
        let (Some(current), Some(next)) = (path.point(start_index), path.point(start_index + 1))
        else {
            log::warn!(
                "Start index {} has no following point in a path of {} points",
                start_index,
                path.len()
            );
            return OptimizationResult::advance(start_index);
        };

        if current.has_custom_link() || next.has_custom_link() {
            return OptimizationResult::advance(start_index);
        }

        // Never shortcut across areas or chain two off-mesh connections
        if current.area() != next.area() || (current.is_off_mesh() && next.is_off_mesh()) {
            return OptimizationResult::advance(start_index);
        }

        self.optimize_segment(path, start_index, agent)
    }

    /// Finds the furthest point visible from the agent without crossing an
    /// area or link boundary
    pub fn optimize_segment<A>(
        &self,
        path: &NavPath,
        start_index: usize,
        agent: &A,
    ) -> OptimizationResult
    where
        A: AgentController + ?Sized,
    {
        let Some(body) = agent.body() else {
            log::debug!("Agent has no body, stepping from {}", start_index);
            return OptimizationResult::advance(start_index);
        };
        let Some(visibility) = path.navigation_data() else {
            log::debug!("Path has no navigation data, stepping from {}", start_index);
            return OptimizationResult::advance(start_index);
        };
        if path.is_direct() {
            log::debug!("Direct path, stepping from {}", start_index);
            return OptimizationResult::advance(start_index);
        }
        let Some(start_point) = path.point(start_index) else {
            return OptimizationResult::advance(start_index);
        };

        let start_area = start_point.area();
        let filter = if visibility.supports_area_costs() && self.config.restrict_to_start_area {
            Self::scoped_filter(path.filter(), start_area)
        } else {
            path.filter().clone()
        };
        let lift = Vec3::Y * (body.half_height * self.config.sight_height_scale);

        let mut next_index = start_index + 1;
        let mut shortcut_corridor = Vec::new();

        for (index, candidate) in path.points().iter().enumerate().skip(start_index + 2) {
            let target = candidate.location + lift;
            let VisibilityResult { hit, corridor, .. } =
                visibility.raycast(body.position, target, &filter, &body);
            log::trace!(
                "Raycast {:?} -> {:?} for point {}: hit {}",
                body.position,
                target,
                index,
                hit
            );

            if !hit || self.config.corridor_policy == ShortcutCorridorPolicy::LastIssued {
                shortcut_corridor = corridor.unwrap_or_default();
            }
            if hit {
                break;
            }

            if candidate.has_custom_link()
                || candidate.area() != start_area
                || candidate.is_off_mesh()
            {
                return OptimizationResult {
                    next_index: index,
                    shortcut_corridor,
                };
            }
            next_index = index;
        }

        OptimizationResult {
            next_index,
            shortcut_corridor,
        }
    }

    /// Copy of `base` where only `area` is walkable, at no cost
    pub fn scoped_filter(base: &QueryFilter, area: u8) -> QueryFilter {
        let mut costs = [UNWALKABLE_POLY_COST; MAX_AREAS];
        if let Some(cost) = costs.get_mut(area as usize) {
            *cost = 0.0;
        }

        let mut filter = base.clone();
        filter.set_all_area_costs(&costs);
        filter
    }
}
