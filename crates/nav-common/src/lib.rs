//! Common utilities and data structures used by the navigation mesh and the
//! line-of-sight path following crates

mod geometry;
mod vector;

pub use geometry::*;
pub use vector::*;

/// Represents a 3D position (Y up)
pub type Vec3 = glam::Vec3;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid navigation mesh: {0}")]
    InvalidMesh(String),

    #[error("navigation query failed: {0}")]
    Navigation(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, Error>;
