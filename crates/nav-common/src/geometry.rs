//! Planar geometry on the xz-plane used by navigation queries

use crate::vector::perp_2d;
use glam::Vec3;

const EPS: f32 = 1e-6;

/// Result of clipping a segment against a convex polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPolyIntersection {
    /// Parameter where the segment enters the polygon
    pub tmin: f32,
    /// Parameter where the segment leaves the polygon
    pub tmax: f32,
    /// Edge crossed when entering, `None` if the segment starts inside
    pub seg_min: Option<usize>,
    /// Edge crossed when leaving, `None` if the segment ends inside
    pub seg_max: Option<usize>,
}

/// Twice the signed area of a polygon on the xz-plane.
///
/// Navigation polygons are expected to have a negative area (clockwise when
/// viewed from above with x to the right and z up).
pub fn polygon_signed_area_2d(verts: &[Vec3]) -> f32 {
    let n = verts.len();
    let mut area = 0.0;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        area += a.x * b.z - b.x * a.z;
    }
    area
}

/// Checks if a point lies inside a polygon on the xz-plane
pub fn point_in_polygon_2d(pt: &Vec3, verts: &[Vec3]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = verts[i];
        let vj = verts[j];
        if ((vi.z > pt.z) != (vj.z > pt.z))
            && (pt.x < (vj.x - vi.x) * (pt.z - vi.z) / (vj.z - vi.z) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Height of the triangle `(a, b, c)` at the xz location of `p`, if `p`
/// projects inside the triangle
pub fn closest_height_on_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> Option<f32> {
    let v0 = *c - *a;
    let v1 = *b - *a;
    let v2 = *p - *a;

    let mut denom = v0.x * v1.z - v0.z * v1.x;
    if denom.abs() < EPS {
        return None;
    }

    let mut u = v1.z * v2.x - v1.x * v2.z;
    let mut v = v0.x * v2.z - v0.z * v2.x;

    if denom < 0.0 {
        denom = -denom;
        u = -u;
        v = -v;
    }

    let tolerance = EPS * denom;
    if u >= -tolerance && v >= -tolerance && (u + v) <= denom + tolerance {
        Some(a.y + (v0.y * u + v1.y * v) / denom)
    } else {
        None
    }
}

/// Clips the segment `p0 -> p1` against a convex polygon on the xz-plane.
///
/// Edge `j` runs from `verts[j]` to `verts[(j + 1) % n]`. The polygon must use
/// the winding described in [`polygon_signed_area_2d`]. Returns `None` when the
/// segment misses the polygon.
pub fn intersect_segment_poly_2d(
    p0: &Vec3,
    p1: &Vec3,
    verts: &[Vec3],
) -> Option<SegmentPolyIntersection> {
    let n = verts.len();
    let mut result = SegmentPolyIntersection {
        tmin: 0.0,
        tmax: 1.0,
        seg_min: None,
        seg_max: None,
    };

    let dir = *p1 - *p0;

    let mut j = n - 1;
    for i in 0..n {
        let edge = verts[i] - verts[j];
        let diff = *p0 - verts[j];
        let num = perp_2d(&edge, &diff);
        let den = perp_2d(&dir, &edge);

        if den.abs() < EPS {
            // Parallel to this edge
            if num < 0.0 {
                return None;
            }
            j = i;
            continue;
        }

        let t = num / den;
        if den < 0.0 {
            // Entering across this edge
            if t > result.tmin {
                result.tmin = t;
                result.seg_min = Some(j);
                if result.tmin > result.tmax {
                    return None;
                }
            }
        } else if t < result.tmax {
            // Leaving across this edge
            result.tmax = t;
            result.seg_max = Some(j);
            if result.tmax < result.tmin {
                return None;
            }
        }
        j = i;
    }

    Some(result)
}

/// Intersects segments `ap -> aq` and `bp -> bq` on the xz-plane.
///
/// Returns the parameters `(s, t)` along each segment of the intersection of
/// the supporting lines, `None` when they are parallel. Callers check the
/// `[0, 1]` range themselves.
pub fn intersect_segments_2d(ap: &Vec3, aq: &Vec3, bp: &Vec3, bq: &Vec3) -> Option<(f32, f32)> {
    let u = *aq - *ap;
    let v = *bq - *bp;
    let w = *ap - *bp;

    let d = perp_2d(&u, &v);
    if d.abs() < EPS {
        return None;
    }

    let s = perp_2d(&v, &w) / d;
    let t = perp_2d(&u, &w) / d;
    Some((s, t))
}
