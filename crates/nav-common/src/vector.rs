//! Vector utilities

use glam::Vec3;

/// Calculates the distance between two points
#[inline]
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (*b - *a).length()
}

/// Calculates the squared distance between two points
#[inline]
pub fn distance_squared(a: &Vec3, b: &Vec3) -> f32 {
    (*b - *a).length_squared()
}

/// Calculates the squared distance between two points on the xz-plane
#[inline]
pub fn distance_squared_2d(a: &Vec3, b: &Vec3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    dx * dx + dz * dz
}

/// Perp-dot product of two vectors projected on the xz-plane
#[inline]
pub fn perp_2d(u: &Vec3, v: &Vec3) -> f32 {
    u.z * v.x - u.x * v.z
}

/// Finds the closest point on a line segment to a given point
pub fn closest_point_on_segment(p: &Vec3, a: &Vec3, b: &Vec3) -> Vec3 {
    let ab = *b - *a;
    let ap = *p - *a;

    let ab_len_sq = ab.length_squared();

    // Degenerate segment
    if ab_len_sq < f32::EPSILON {
        return *a;
    }

    let t = (ap.dot(ab) / ab_len_sq).clamp(0.0, 1.0);
    *a + ab * t
}

/// Finds the closest point on a line segment to a given point, measured on
/// the xz-plane. The returned point is interpolated along the segment, so it
/// keeps the segment's height.
pub fn closest_point_on_segment_2d(p: &Vec3, a: &Vec3, b: &Vec3) -> Vec3 {
    let abx = b.x - a.x;
    let abz = b.z - a.z;
    let len_sq = abx * abx + abz * abz;

    if len_sq < f32::EPSILON {
        return *a;
    }

    let t = (((p.x - a.x) * abx + (p.z - a.z) * abz) / len_sq).clamp(0.0, 1.0);
    a.lerp(*b, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance_squared(&a, &b), 25.0);
    }

    #[test]
    fn test_distance_2d_ignores_height() {
        let a = Vec3::new(0.0, 10.0, 0.0);
        let b = Vec3::new(3.0, -2.0, 4.0);
        assert_eq!(distance_squared_2d(&a, &b), 25.0);
    }

    #[test]
    fn test_closest_point_on_segment() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 0.0, 0.0);

        let mid = closest_point_on_segment(&Vec3::new(5.0, 3.0, 0.0), &a, &b);
        assert_eq!(mid, Vec3::new(5.0, 0.0, 0.0));

        let before = closest_point_on_segment(&Vec3::new(-4.0, 1.0, 0.0), &a, &b);
        assert_eq!(before, a);

        let after = closest_point_on_segment(&Vec3::new(14.0, 1.0, 0.0), &a, &b);
        assert_eq!(after, b);
    }

    #[test]
    fn test_closest_point_on_segment_2d_keeps_segment_height() {
        let a = Vec3::new(0.0, 1.0, 0.0);
        let b = Vec3::new(0.0, 3.0, 4.0);

        let p = closest_point_on_segment_2d(&Vec3::new(2.0, 50.0, 2.0), &a, &b);
        assert!((p.z - 2.0).abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }
}
