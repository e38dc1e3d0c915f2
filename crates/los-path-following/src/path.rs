//! Path model consumed by the line-of-sight optimizer

use std::sync::Arc;

use crate::visibility::VisibilityQuery;
use glam::Vec3;
use navmesh::{NavNodeFlags, PolyRef, QueryFilter};

/// A point of a straight path
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PathPoint {
    /// World position of the point
    pub location: Vec3,
    /// Area and straight path flags of the point
    pub flags: NavNodeFlags,
    /// Non-zero when the point starts or ends a custom navigation link
    pub custom_link_id: u32,
}

impl PathPoint {
    /// Creates a point in area 0 without links
    pub fn new(location: Vec3) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    /// Sets the area of the point
    pub fn with_area(mut self, area: u8) -> Self {
        self.flags.area = area;
        self
    }

    /// Marks the point as an off-mesh connection endpoint
    pub fn off_mesh(mut self) -> Self {
        self.flags = self.flags.off_mesh();
        self
    }

    /// Attaches a custom navigation link
    pub fn with_custom_link(mut self, link_id: u32) -> Self {
        self.custom_link_id = link_id;
        self
    }

    /// Area id of the point
    pub fn area(&self) -> u8 {
        self.flags.area
    }

    /// Checks if the point is an off-mesh connection endpoint
    pub fn is_off_mesh(&self) -> bool {
        self.flags.is_off_mesh_connection()
    }

    /// Checks if the point uses a custom navigation link
    pub fn has_custom_link(&self) -> bool {
        self.custom_link_id != 0
    }
}

/// Polygon corridor a path was built through
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CorridorData {
    /// Polygons from start to goal
    pub polys: Vec<PolyRef>,
}

/// Kind of path
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum PathKind {
    /// Path found through a navigation corridor
    Corridor(CorridorData),
    /// Unconstrained point to point path without a corridor
    Direct,
}

/// A path being followed by an agent
#[derive(Debug, Clone)]
pub struct NavPath {
    points: Vec<PathPoint>,
    kind: PathKind,
    filter: QueryFilter,
    navigation_data: Option<Arc<dyn VisibilityQuery>>,
    shortcut_corridor: Vec<PolyRef>,
}

impl NavPath {
    /// Creates a path with the default filter and no navigation data
    pub fn new(points: Vec<PathPoint>, kind: PathKind) -> Self {
        Self {
            points,
            kind,
            filter: QueryFilter::default(),
            navigation_data: None,
            shortcut_corridor: Vec::new(),
        }
    }

    /// Creates a path through a polygon corridor
    pub fn corridor(points: Vec<PathPoint>, polys: Vec<PolyRef>) -> Self {
        Self::new(points, PathKind::Corridor(CorridorData { polys }))
    }

    /// Creates a direct point to point path
    pub fn direct(points: Vec<PathPoint>) -> Self {
        Self::new(points, PathKind::Direct)
    }

    /// Sets the filter the path was found with
    pub fn with_filter(mut self, filter: QueryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the navigation data the path was found on
    pub fn with_navigation_data(mut self, navigation_data: Arc<dyn VisibilityQuery>) -> Self {
        self.navigation_data = Some(navigation_data);
        self
    }

    /// Path points
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Gets a point by index
    pub fn point(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks if the path has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kind of path
    pub fn kind(&self) -> &PathKind {
        &self.kind
    }

    /// Checks if the path is a direct path without corridor
    pub fn is_direct(&self) -> bool {
        matches!(self.kind, PathKind::Direct)
    }

    /// Polygons of the path corridor, `None` for direct paths
    pub fn corridor_polys(&self) -> Option<&[PolyRef]> {
        match &self.kind {
            PathKind::Corridor(data) => Some(&data.polys),
            PathKind::Direct => None,
        }
    }

    /// Filter the path was found with
    pub fn filter(&self) -> &QueryFilter {
        &self.filter
    }

    /// Navigation data the path was found on
    pub fn navigation_data(&self) -> Option<&Arc<dyn VisibilityQuery>> {
        self.navigation_data.as_ref()
    }

    /// Polygons crossed by the shortcut currently taken
    pub fn shortcut_corridor(&self) -> &[PolyRef] {
        &self.shortcut_corridor
    }

    /// Stores the polygons crossed by the shortcut currently taken
    pub fn set_shortcut_corridor(&mut self, corridor: Vec<PolyRef>) {
        self.shortcut_corridor = corridor;
    }
}
