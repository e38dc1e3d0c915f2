//! Query filter deciding which polygons a navigation query may use

use super::{MAX_AREAS, Poly, PolyFlags, UNWALKABLE_POLY_COST};
use glam::Vec3;

/// Defines polygon filtering and traversal costs for navigation mesh queries
///
/// A polygon passes the filter when it has at least one of the include flags,
/// none of the exclude flags, and its area cost is below
/// [`UNWALKABLE_POLY_COST`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    /// Cost multiplier per area id
    pub area_cost: [f32; MAX_AREAS],
    /// Polygons must have at least one of these flags
    pub include_flags: PolyFlags,
    /// Polygons must not have any of these flags
    pub exclude_flags: PolyFlags,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            area_cost: [1.0; MAX_AREAS],
            include_flags: PolyFlags::all() - PolyFlags::DISABLED,
            exclude_flags: PolyFlags::DISABLED,
        }
    }
}

impl QueryFilter {
    /// Creates a filter with default costs and flags
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if a polygon may be used by a query
    pub fn pass_filter(&self, poly: &Poly) -> bool {
        poly.flags.intersects(self.include_flags)
            && !poly.flags.intersects(self.exclude_flags)
            && self.area_cost(poly.area()) < UNWALKABLE_POLY_COST
    }

    /// Gets the traversal cost of an area, unknown areas are unwalkable
    pub fn area_cost(&self, area: u8) -> f32 {
        self.area_cost
            .get(area as usize)
            .copied()
            .unwrap_or(UNWALKABLE_POLY_COST)
    }

    /// Sets the traversal cost of an area; ids outside the table are ignored
    pub fn set_area_cost(&mut self, area: u8, cost: f32) {
        if let Some(slot) = self.area_cost.get_mut(area as usize) {
            *slot = cost;
        }
    }

    /// Replaces the cost table; entries beyond [`MAX_AREAS`] are ignored and
    /// missing entries keep their current value
    pub fn set_all_area_costs(&mut self, costs: &[f32]) {
        for (slot, cost) in self.area_cost.iter_mut().zip(costs) {
            *slot = *cost;
        }
    }

    /// Cost of moving between two points across a polygon
    pub fn cost(&self, pa: &Vec3, pb: &Vec3, poly: &Poly) -> f32 {
        pa.distance(*pb) * self.area_cost(poly.area())
    }
}
