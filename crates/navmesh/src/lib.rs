//! Polygon navigation mesh and the queries used for line-of-sight path following
//!
//! The mesh is a set of convex polygons linked through their shared edges.
//! Every polygon carries an area id and a set of [`PolyFlags`]; a
//! [`QueryFilter`] decides which polygons a query may enter and at what cost.
//!
//! # Example
//!
//! ```rust
//! use navmesh::{NavMesh, NavMeshCreateParams, NavMeshQuery, PolyFlags, QueryFilter, RaycastOptions};
//! use glam::Vec3;
//!
//! # fn example() -> nav_common::Result<()> {
//! let nav_mesh = NavMesh::new(NavMeshCreateParams {
//!     verts: vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(0.0, 0.0, 4.0),
//!         Vec3::new(4.0, 0.0, 4.0),
//!         Vec3::new(4.0, 0.0, 0.0),
//!     ],
//!     polys: vec![vec![0, 1, 2, 3]],
//!     poly_areas: vec![0],
//!     poly_flags: vec![PolyFlags::WALK],
//! })?;
//!
//! let query = NavMeshQuery::new(&nav_mesh);
//! let filter = QueryFilter::default();
//! let start = Vec3::new(1.0, 0.0, 1.0);
//! let (start_ref, _) = query.find_nearest_poly(&start, &Vec3::splat(0.5), &filter)?;
//! let result = query.raycast(
//!     start_ref,
//!     &start,
//!     &Vec3::new(3.0, 0.0, 3.0),
//!     &filter,
//!     &RaycastOptions::default(),
//! )?;
//! assert!(!result.hit.hit_wall());
//! # Ok(())
//! # }
//! ```

pub mod nav_mesh;
pub mod nav_mesh_query;
pub mod node_flags;
pub mod query_filter;
pub mod raycast_hit;
pub mod status;

pub use nav_mesh::{NavMesh, NavMeshCreateParams, Poly};
pub use nav_mesh_query::NavMeshQuery;
pub use node_flags::{NavNodeFlags, StraightPathFlags};
pub use query_filter::QueryFilter;
pub use raycast_hit::{RaycastHit, RaycastOptions, RaycastResult};
pub use status::Status;

#[cfg(test)]
mod test_mesh_helpers;


#[cfg(test)]
mod query_filter_tests;

/// Maximum number of vertices per polygon
pub const MAX_VERTS_PER_POLY: usize = 6;

/// Number of distinct area ids a query filter can price
pub const MAX_AREAS: usize = 64;

/// Area cost that makes a polygon impassable for a query
pub const UNWALKABLE_POLY_COST: f32 = f32::MAX;

/// Reference to a polygon in a navigation mesh
///
/// The null reference (0) never refers to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PolyRef(u32);

impl PolyRef {
    /// The null polygon reference
    pub const NULL: PolyRef = PolyRef(0);

    /// Creates a new polygon reference
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Gets the raw id of the reference
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// Checks if the reference is non-null
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl From<u32> for PolyRef {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

bitflags::bitflags! {
    /// Flags describing how a polygon may be traversed
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(
        feature = "serialization",
        derive(serde::Serialize, serde::Deserialize)
    )]
    pub struct PolyFlags: u16 {
        /// Ability to walk (ground, grass, road)
        const WALK = 0x01;
        /// Ability to swim (water)
        const SWIM = 0x02;
        /// Ability to move through doors
        const DOOR = 0x04;
        /// Ability to jump
        const JUMP = 0x08;
        /// Disabled polygon
        const DISABLED = 0x10;
    }
}
