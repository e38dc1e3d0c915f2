//! Straight-line visibility queries used to shortcut a path
//!
//! A backend answers one question: can an agent move in a straight line from
//! one point to another. Backends built on a navigation mesh also report the
//! polygons the line crosses, and honour per-area costs of the query filter.

use std::fmt;

use crate::agent::AgentBody;
use glam::Vec3;
use navmesh::{PolyRef, QueryFilter};

/// Outcome of a visibility raycast
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityResult {
    /// The line is obstructed
    pub hit: bool,
    /// Where the line stops: the obstruction, or the target when clear
    pub hit_location: Vec3,
    /// Polygons crossed by the line, when the backend tracks them
    pub corridor: Option<Vec<PolyRef>>,
}

impl VisibilityResult {
    /// An unobstructed line reaching `target`
    pub fn clear(target: Vec3) -> Self {
        Self {
            hit: false,
            hit_location: target,
            corridor: None,
        }
    }

    /// A line obstructed at `location`
    pub fn blocked(location: Vec3) -> Self {
        Self {
            hit: true,
            hit_location: location,
            corridor: None,
        }
    }

    /// Attaches the polygons crossed by the line
    pub fn with_corridor(mut self, corridor: Vec<PolyRef>) -> Self {
        self.corridor = Some(corridor);
        self
    }
}

/// Straight-line visibility against navigation data
///
/// Implementations must be safe to query from several agents at once.
pub trait VisibilityQuery: Send + Sync + fmt::Debug {
    /// Tests whether `agent` can move straight from `from` to `to`
    fn raycast(
        &self,
        from: Vec3,
        to: Vec3,
        filter: &QueryFilter,
        agent: &AgentBody,
    ) -> VisibilityResult;

    /// Whether the backend honours the area costs of `filter`
    fn supports_area_costs(&self) -> bool {
        false
    }
}
