//! Line-of-sight shortcutting for agents following navigation paths
//!
//! An agent following a path of points does not need to visit every point.
//! At each step the [`LosOptimizer`] tests straight-line visibility from the
//! agent to the points ahead and picks the furthest one that can be reached
//! directly, without crossing an area boundary, a custom link or an off-mesh
//! connection.
//!
//! Visibility is answered by a [`VisibilityQuery`] backend attached to the
//! path:
//!
//! - [`NavMeshVisibility`]: raycasts over a polygon navigation mesh and
//!   reports the polygons crossed by the shortcut
//! - [`WallVisibility`]: tests against a set of wall segments
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use glam::Vec3;
//! use los_path_following::{AgentBody, LosOptimizer, NavPath, PathPoint, WallVisibility};
//! use navmesh::PolyRef;
//!
//! let walls = WallVisibility::default()
//!     .with_wall(Vec3::new(5.0, 0.0, -1.0), Vec3::new(5.0, 0.0, 1.0));
//!
//! let points = (0..4)
//!     .map(|i| PathPoint::new(Vec3::new(i as f32 * 2.0, 0.0, 0.0)))
//!     .collect();
//! let path = NavPath::corridor(points, vec![PolyRef::new(1)])
//!     .with_navigation_data(Arc::new(walls));
//!
//! let agent = AgentBody::new(Vec3::new(0.0, 1.0, 0.0), 0.5, 1.0);
//! let result = LosOptimizer::default().determine_next_target(&path, 0, &agent);
//!
//! // The wall at x = 5 hides the point at x = 6
//! assert_eq!(result.next_index, 2);
//! ```

pub mod agent;
pub mod config;
pub mod follower;
pub mod navmesh_visibility;
pub mod optimizer;
pub mod path;
pub mod visibility;
pub mod wall_visibility;

pub use agent::{AgentBody, AgentController};
pub use config::{LosConfig, ShortcutCorridorPolicy};
pub use follower::{LosPathFollower, MoveSegment};
pub use navmesh_visibility::{NavMeshVisibility, MIN_QUERY_EXTENT};
pub use optimizer::{LosOptimizer, OptimizationResult};
pub use path::{CorridorData, NavPath, PathKind, PathPoint};
pub use visibility::{VisibilityQuery, VisibilityResult};
pub use wall_visibility::WallVisibility;

#[cfg(test)]
mod test_helpers;
