//! Tests for QueryFilter functionality
//!
//! The filter decides which polygons a query may enter from their flags and
//! the cost of their area.

#[cfg(test)]
mod tests {
    use crate::test_mesh_helpers::create_strip_navmesh;
    use crate::{MAX_AREAS, PolyFlags, PolyRef, QueryFilter, UNWALKABLE_POLY_COST};
    use glam::Vec3;
    use nav_common::Result;

    #[test]
    fn test_default_filter_passes_walkable() -> Result<()> {
        let mesh = create_strip_navmesh(&[0, 3])?;
        let filter = QueryFilter::default();

        for poly_ref in mesh.poly_refs() {
            assert!(filter.pass_filter(mesh.get_poly_by_ref(poly_ref)?));
        }
        Ok(())
    }

    #[test]
    fn test_include_flags() -> Result<()> {
        let mut mesh = create_strip_navmesh(&[0, 0])?;
        mesh.set_poly_flags(PolyRef::new(2), PolyFlags::SWIM)?;

        let mut walk_only = QueryFilter::default();
        walk_only.include_flags = PolyFlags::WALK;

        assert!(walk_only.pass_filter(mesh.get_poly_by_ref(PolyRef::new(1))?));
        assert!(!walk_only.pass_filter(mesh.get_poly_by_ref(PolyRef::new(2))?));
        Ok(())
    }

    #[test]
    fn test_empty_include_flags_pass_nothing() -> Result<()> {
        let mesh = create_strip_navmesh(&[0])?;
        let mut filter = QueryFilter::default();
        filter.include_flags = PolyFlags::empty();

        assert!(!filter.pass_filter(mesh.get_poly_by_ref(PolyRef::new(1))?));
        Ok(())
    }

    #[test]
    fn test_single_area_cost_table() -> Result<()> {
        let mesh = create_strip_navmesh(&[2, 5, 2])?;

        // Everything unwalkable except area 2, which is free
        let mut costs = vec![UNWALKABLE_POLY_COST; MAX_AREAS];
        costs[2] = 0.0;
        let mut filter = QueryFilter::default();
        filter.set_all_area_costs(&costs);

        assert_eq!(filter.area_cost(2), 0.0);
        assert!(filter.pass_filter(mesh.get_poly_by_ref(PolyRef::new(1))?));
        assert!(!filter.pass_filter(mesh.get_poly_by_ref(PolyRef::new(2))?));
        assert!(filter.pass_filter(mesh.get_poly_by_ref(PolyRef::new(3))?));
        Ok(())
    }

    #[test]
    fn test_short_cost_table_keeps_remaining_costs() {
        let mut filter = QueryFilter::default();
        filter.set_all_area_costs(&[4.0, 5.0]);

        assert_eq!(filter.area_cost(0), 4.0);
        assert_eq!(filter.area_cost(1), 5.0);
        assert_eq!(filter.area_cost(2), 1.0);
    }

    #[test]
    fn test_out_of_range_area_is_unwalkable() {
        let mut filter = QueryFilter::default();
        filter.set_area_cost(200, 1.0);

        assert_eq!(filter.area_cost(200), UNWALKABLE_POLY_COST);
    }

    #[test]
    fn test_copy_does_not_touch_original() {
        let original = QueryFilter::default();
        let mut copy = original.clone();
        copy.set_area_cost(0, UNWALKABLE_POLY_COST);

        assert_eq!(original.area_cost(0), 1.0);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_cost_scales_distance() -> Result<()> {
        let mesh = create_strip_navmesh(&[1])?;
        let mut filter = QueryFilter::default();
        filter.set_area_cost(1, 2.5);

        let poly = mesh.get_poly_by_ref(PolyRef::new(1))?;
        let cost = filter.cost(&Vec3::ZERO, &Vec3::new(0.0, 0.0, 2.0), poly);
        assert!((cost - 5.0).abs() < 1e-6);
        Ok(())
    }
}
