//! Navigation meshes shared by the query tests

use crate::{NavMesh, NavMeshCreateParams, PolyFlags};
use glam::Vec3;
use nav_common::Result;

/// Size of every square cell in the test meshes
pub const CELL: f32 = 2.0;

/// Creates a row of square polygons along +x, one per entry of `areas`
///
/// Polygon `i` covers `x in [2i, 2i + 2]`, `z in [0, 2]` and has reference `i + 1`.
pub fn create_strip_navmesh(areas: &[u8]) -> Result<NavMesh> {
    let count = areas.len();
    let mut verts = Vec::with_capacity((count + 1) * 2);
    for i in 0..=count {
        let x = i as f32 * CELL;
        verts.push(Vec3::new(x, 0.0, 0.0));
        verts.push(Vec3::new(x, 0.0, CELL));
    }

    let polys = (0..count)
        .map(|i| {
            let b0 = (i * 2) as u16;
            let t0 = b0 + 1;
            let b1 = b0 + 2;
            let t1 = b0 + 3;
            vec![b0, t0, t1, b1]
        })
        .collect();

    NavMesh::new(NavMeshCreateParams {
        verts,
        polys,
        poly_areas: areas.to_vec(),
        poly_flags: vec![PolyFlags::WALK; count],
    })
}

/// Creates an L-shaped mesh of three cells: `(0,0)`, `(1,0)` and `(1,1)` in
/// cell coordinates. The inner corner at `(2, 2)` blocks diagonal sight lines
/// from the first cell to the last.
pub fn create_l_shaped_navmesh() -> Result<NavMesh> {
    let verts = vec![
        Vec3::new(0.0, 0.0, 0.0), // 0
        Vec3::new(0.0, 0.0, 2.0), // 1
        Vec3::new(2.0, 0.0, 2.0), // 2
        Vec3::new(2.0, 0.0, 0.0), // 3
        Vec3::new(4.0, 0.0, 2.0), // 4
        Vec3::new(4.0, 0.0, 0.0), // 5
        Vec3::new(2.0, 0.0, 4.0), // 6
        Vec3::new(4.0, 0.0, 4.0), // 7
    ];

    NavMesh::new(NavMeshCreateParams {
        verts,
        polys: vec![vec![0, 1, 2, 3], vec![3, 2, 4, 5], vec![2, 6, 7, 4]],
        poly_areas: vec![0, 0, 0],
        poly_flags: vec![PolyFlags::WALK; 3],
    })
}
