//! Per-point metadata attached to straight path points
//!
//! A straight path point records which area it lies in and whether it is the
//! start, the end or an endpoint of an off-mesh connection. The metadata packs
//! into a single `u32` so it can travel alongside the point location.

bitflags::bitflags! {
    /// Flags describing a straight path vertex
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(
        feature = "serialization",
        derive(serde::Serialize, serde::Deserialize)
    )]
    pub struct StraightPathFlags: u8 {
        /// The vertex is the start position of the path
        const START = 0x01;
        /// The vertex is the end position of the path
        const END = 0x02;
        /// The vertex is the start of an off-mesh connection
        const OFFMESH_CONNECTION = 0x04;
    }
}

/// Navigation metadata of a path point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NavNodeFlags {
    /// Straight path flags of the point
    pub path_flags: StraightPathFlags,
    /// Area id of the polygon the point lies on
    pub area: u8,
    /// Flags of the polygon the point lies on
    pub area_flags: u16,
}

impl NavNodeFlags {
    /// Creates flags for a point on the given area
    pub fn with_area(area: u8) -> Self {
        Self {
            area,
            ..Default::default()
        }
    }

    /// Marks the point as an off-mesh connection endpoint
    pub fn off_mesh(mut self) -> Self {
        self.path_flags |= StraightPathFlags::OFFMESH_CONNECTION;
        self
    }

    /// Checks if the point is an off-mesh connection endpoint
    pub fn is_off_mesh_connection(&self) -> bool {
        self.path_flags
            .contains(StraightPathFlags::OFFMESH_CONNECTION)
    }

    /// Unpacks flags stored as `path_flags | area << 8 | area_flags << 16`
    pub fn from_packed(packed: u32) -> Self {
        Self {
            path_flags: StraightPathFlags::from_bits_truncate((packed & 0xff) as u8),
            area: ((packed >> 8) & 0xff) as u8,
            area_flags: (packed >> 16) as u16,
        }
    }

    /// Packs the flags into a single `u32`
    pub fn packed(&self) -> u32 {
        u32::from(self.path_flags.bits())
            | (u32::from(self.area) << 8)
            | (u32::from(self.area_flags) << 16)
    }
}

impl From<u32> for NavNodeFlags {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}
