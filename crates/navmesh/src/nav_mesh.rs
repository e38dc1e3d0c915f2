//! Navigation mesh made of convex polygons linked through shared edges

use std::collections::HashMap;

use super::{MAX_AREAS, MAX_VERTS_PER_POLY, PolyFlags, PolyRef, Status};
use glam::Vec3;
use nav_common::{
    Error, Result, closest_height_on_triangle, closest_point_on_segment_2d,
    distance_squared_2d, point_in_polygon_2d, polygon_signed_area_2d,
};

/// Parameters used to build a [`NavMesh`]
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NavMeshCreateParams {
    /// Vertex positions
    pub verts: Vec<Vec3>,
    /// Polygons as lists of vertex indices, any winding
    pub polys: Vec<Vec<u16>>,
    /// Area id per polygon
    pub poly_areas: Vec<u8>,
    /// Flags per polygon
    pub poly_flags: Vec<PolyFlags>,
}

/// A convex polygon of the navigation mesh
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Poly {
    /// Vertex indices, clockwise when viewed from above
    pub verts: Vec<u16>,
    /// Neighbour across each edge, edge `i` runs from `verts[i]` to `verts[i + 1]`
    pub neighbours: Vec<PolyRef>,
    /// Polygon flags
    pub flags: PolyFlags,
    area: u8,
}

impl Poly {
    /// Area id of the polygon
    pub fn area(&self) -> u8 {
        self.area
    }

    /// Number of vertices
    pub fn vert_count(&self) -> usize {
        self.verts.len()
    }

    /// Neighbour across an edge, the null reference for a wall
    pub fn neighbour(&self, edge: usize) -> PolyRef {
        self.neighbours.get(edge).copied().unwrap_or(PolyRef::NULL)
    }
}

/// Navigation mesh structure
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NavMesh {
    verts: Vec<Vec3>,
    polys: Vec<Poly>,
    bmin: Vec3,
    bmax: Vec3,
}

impl NavMesh {
    /// Builds a navigation mesh, normalizing polygon winding and linking
    /// polygons that share an edge
    pub fn new(params: NavMeshCreateParams) -> Result<Self> {
        let NavMeshCreateParams {
            verts,
            polys,
            poly_areas,
            poly_flags,
        } = params;

        if polys.is_empty() {
            return Err(Error::InvalidMesh("mesh has no polygons".to_string()));
        }
        if poly_areas.len() != polys.len() || poly_flags.len() != polys.len() {
            return Err(Error::InvalidMesh(format!(
                "{} polygons but {} areas and {} flags",
                polys.len(),
                poly_areas.len(),
                poly_flags.len()
            )));
        }
        if verts.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidMesh("non-finite vertex".to_string()));
        }

        let mut mesh_polys = Vec::with_capacity(polys.len());
        for (i, ((mut indices, area), flags)) in polys
            .into_iter()
            .zip(poly_areas)
            .zip(poly_flags)
            .enumerate()
        {
            if indices.len() < 3 || indices.len() > MAX_VERTS_PER_POLY {
                return Err(Error::InvalidMesh(format!(
                    "polygon {} has {} vertices",
                    i,
                    indices.len()
                )));
            }
            if let Some(&bad) = indices.iter().find(|&&v| v as usize >= verts.len()) {
                return Err(Error::InvalidMesh(format!(
                    "polygon {} references missing vertex {}",
                    i, bad
                )));
            }
            if area as usize >= MAX_AREAS {
                return Err(Error::InvalidMesh(format!(
                    "polygon {} has area {} (max {})",
                    i,
                    area,
                    MAX_AREAS - 1
                )));
            }

            let positions: Vec<Vec3> = indices.iter().map(|&v| verts[v as usize]).collect();
            let signed_area = polygon_signed_area_2d(&positions);
            if signed_area.abs() < 1e-6 {
                return Err(Error::InvalidMesh(format!("polygon {} is degenerate", i)));
            }
            if signed_area > 0.0 {
                indices.reverse();
            }

            let edge_count = indices.len();
            mesh_polys.push(Poly {
                verts: indices,
                neighbours: vec![PolyRef::NULL; edge_count],
                flags,
                area,
            });
        }

        let link_count = Self::connect_polys(&mut mesh_polys);

        let (bmin, bmax) = verts.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| (lo.min(*v), hi.max(*v)),
        );

        log::debug!(
            "Built navigation mesh: {} verts, {} polys, {} shared edges",
            verts.len(),
            mesh_polys.len(),
            link_count
        );

        Ok(Self {
            verts,
            polys: mesh_polys,
            bmin,
            bmax,
        })
    }

    /// Links polygons across shared edges, returns the number of links made
    fn connect_polys(polys: &mut [Poly]) -> usize {
        let mut open_edges: HashMap<(u16, u16), (usize, usize)> = HashMap::new();
        let mut links = Vec::new();

        for (pi, poly) in polys.iter().enumerate() {
            let n = poly.verts.len();
            for e in 0..n {
                let a = poly.verts[e];
                let b = poly.verts[(e + 1) % n];
                let key = (a.min(b), a.max(b));
                match open_edges.remove(&key) {
                    Some((other_poly, other_edge)) if other_poly != pi => {
                        links.push(((pi, e), (other_poly, other_edge)));
                    }
                    _ => {
                        open_edges.insert(key, (pi, e));
                    }
                }
            }
        }

        for &((pa, ea), (pb, eb)) in &links {
            polys[pa].neighbours[ea] = Self::ref_for_index(pb);
            polys[pb].neighbours[eb] = Self::ref_for_index(pa);
        }

        links.len()
    }

    #[inline]
    fn ref_for_index(index: usize) -> PolyRef {
        PolyRef::new(index as u32 + 1)
    }

    #[inline]
    fn index_for_ref(&self, poly_ref: PolyRef) -> Option<usize> {
        let index = (poly_ref.id() as usize).checked_sub(1)?;
        (index < self.polys.len()).then_some(index)
    }

    /// Number of polygons
    pub fn poly_count(&self) -> usize {
        self.polys.len()
    }

    /// Bounding box of all vertices
    pub fn bounds(&self) -> (Vec3, Vec3) {
        (self.bmin, self.bmax)
    }

    /// References of all polygons
    pub fn poly_refs(&self) -> impl Iterator<Item = PolyRef> + '_ {
        (0..self.polys.len()).map(Self::ref_for_index)
    }

    /// Checks if a polygon reference is valid for this mesh
    pub fn is_valid_poly_ref(&self, poly_ref: PolyRef) -> bool {
        self.index_for_ref(poly_ref).is_some()
    }

    /// Gets a polygon by reference
    pub fn get_poly_by_ref(&self, poly_ref: PolyRef) -> Result<&Poly> {
        self.index_for_ref(poly_ref)
            .map(|i| &self.polys[i])
            .ok_or_else(|| Error::Navigation(Status::NotFound.to_string()))
    }

    fn get_poly_mut(&mut self, poly_ref: PolyRef) -> Result<&mut Poly> {
        match self.index_for_ref(poly_ref) {
            Some(i) => Ok(&mut self.polys[i]),
            None => Err(Error::Navigation(Status::NotFound.to_string())),
        }
    }

    /// Vertex positions of a polygon
    pub fn vertices_of(&self, poly: &Poly) -> Vec<Vec3> {
        poly.verts.iter().map(|&v| self.verts[v as usize]).collect()
    }

    /// Vertex positions of a polygon by reference
    pub fn poly_vertices(&self, poly_ref: PolyRef) -> Result<Vec<Vec3>> {
        let poly = self.get_poly_by_ref(poly_ref)?;
        Ok(self.vertices_of(poly))
    }

    /// Changes the area id of a polygon
    pub fn set_poly_area(&mut self, poly_ref: PolyRef, area: u8) -> Result<()> {
        if area as usize >= MAX_AREAS {
            return Err(Error::Navigation(Status::InvalidParam.to_string()));
        }
        self.get_poly_mut(poly_ref)?.area = area;
        Ok(())
    }

    /// Changes the flags of a polygon
    pub fn set_poly_flags(&mut self, poly_ref: PolyRef, flags: PolyFlags) -> Result<()> {
        self.get_poly_mut(poly_ref)?.flags = flags;
        Ok(())
    }

    /// Height of the polygon surface at the xz location of `pos`, `None`
    /// when `pos` is outside the polygon
    pub fn poly_height(&self, poly_ref: PolyRef, pos: &Vec3) -> Result<Option<f32>> {
        let verts = self.poly_vertices(poly_ref)?;
        for i in 1..verts.len() - 1 {
            if let Some(h) = closest_height_on_triangle(pos, &verts[0], &verts[i], &verts[i + 1])
            {
                return Ok(Some(h));
            }
        }
        Ok(None)
    }

    /// Closest point on a polygon to `pos`, and whether `pos` is directly
    /// over the polygon
    pub fn closest_point_on_poly(&self, poly_ref: PolyRef, pos: &Vec3) -> Result<(Vec3, bool)> {
        let verts = self.poly_vertices(poly_ref)?;

        if point_in_polygon_2d(pos, &verts) {
            let height = self.poly_height(poly_ref, pos)?.unwrap_or(pos.y);
            return Ok((Vec3::new(pos.x, height, pos.z), true));
        }

        let n = verts.len();
        let mut best = verts[0];
        let mut best_dist = f32::MAX;
        for i in 0..n {
            let candidate = closest_point_on_segment_2d(pos, &verts[i], &verts[(i + 1) % n]);
            let d = distance_squared_2d(pos, &candidate);
            if d < best_dist {
                best_dist = d;
                best = candidate;
            }
        }

        Ok((best, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_params() -> NavMeshCreateParams {
        // Two unit squares side by side along x, the second given counter-clockwise
        NavMeshCreateParams {
            verts: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 1.0),
                Vec3::new(2.0, 0.0, 0.0),
            ],
            polys: vec![vec![0, 1, 2, 3], vec![3, 5, 4, 2]],
            poly_areas: vec![0, 1],
            poly_flags: vec![PolyFlags::WALK, PolyFlags::WALK | PolyFlags::SWIM],
        }
    }

    #[test]
    fn test_shared_edge_is_linked() -> Result<()> {
        let mesh = NavMesh::new(strip_params())?;
        assert_eq!(mesh.poly_count(), 2);

        let first = mesh.get_poly_by_ref(PolyRef::new(1))?;
        let second = mesh.get_poly_by_ref(PolyRef::new(2))?;

        assert!(first.neighbours.contains(&PolyRef::new(2)));
        assert!(second.neighbours.contains(&PolyRef::new(1)));
        assert_eq!(
            first.neighbours.iter().filter(|r| r.is_valid()).count(),
            1
        );
        Ok(())
    }

    #[test]
    fn test_winding_is_normalized() -> Result<()> {
        let mesh = NavMesh::new(strip_params())?;
        for poly_ref in mesh.poly_refs() {
            let verts = mesh.poly_vertices(poly_ref)?;
            assert!(polygon_signed_area_2d(&verts) < 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_refs() -> Result<()> {
        let mesh = NavMesh::new(strip_params())?;
        assert!(!mesh.is_valid_poly_ref(PolyRef::NULL));
        assert!(!mesh.is_valid_poly_ref(PolyRef::new(3)));
        assert!(mesh.get_poly_by_ref(PolyRef::new(3)).is_err());
        Ok(())
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut params = strip_params();
        params.poly_areas.pop();
        assert!(matches!(NavMesh::new(params), Err(Error::InvalidMesh(_))));

        let mut params = strip_params();
        params.polys[0] = vec![0, 1, 9];
        assert!(NavMesh::new(params).is_err());

        let mut params = strip_params();
        params.poly_areas[1] = MAX_AREAS as u8;
        assert!(NavMesh::new(params).is_err());

        let mut params = strip_params();
        params.polys[0] = vec![0, 1, 1];
        assert!(NavMesh::new(params).is_err());

        assert!(NavMesh::new(NavMeshCreateParams::default()).is_err());
    }

    #[test]
    fn test_closest_point_on_poly() -> Result<()> {
        let mesh = NavMesh::new(strip_params())?;

        let (inside, over) = mesh.closest_point_on_poly(PolyRef::new(1), &Vec3::new(0.5, 3.0, 0.5))?;
        assert!(over);
        assert_eq!(inside, Vec3::new(0.5, 0.0, 0.5));

        let (edge, over) = mesh.closest_point_on_poly(PolyRef::new(1), &Vec3::new(-1.0, 0.0, 0.5))?;
        assert!(!over);
        assert!((edge - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_set_area_and_flags() -> Result<()> {
        let mut mesh = NavMesh::new(strip_params())?;
        mesh.set_poly_area(PolyRef::new(2), 5)?;
        mesh.set_poly_flags(PolyRef::new(2), PolyFlags::DISABLED)?;

        let poly = mesh.get_poly_by_ref(PolyRef::new(2))?;
        assert_eq!(poly.area(), 5);
        assert_eq!(poly.flags, PolyFlags::DISABLED);

        assert!(mesh.set_poly_area(PolyRef::new(2), MAX_AREAS as u8).is_err());
        Ok(())
    }
}
