//! Optimizer configuration

use nav_common::{Error, Result};

/// Which raycast's polygon corridor is kept as the shortcut corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ShortcutCorridorPolicy {
    /// Corridor of the last unobstructed raycast
    #[default]
    LastSuccessful,
    /// Corridor of the last raycast issued, obstructed or not
    LastIssued,
}

/// Configuration of the line-of-sight optimizer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LosConfig {
    /// Shortcut corridor bookkeeping
    pub corridor_policy: ShortcutCorridorPolicy,
    /// Raycast targets are lifted by `half_height * sight_height_scale`
    pub sight_height_scale: f32,
    /// Confine raycasts to the area of the start point when the backend
    /// supports area costs
    pub restrict_to_start_area: bool,
}

impl LosConfig {
    pub fn new() -> Self {
        Self {
            corridor_policy: ShortcutCorridorPolicy::LastSuccessful,
            sight_height_scale: 1.0,
            restrict_to_start_area: true,
        }
    }

    pub fn with_corridor_policy(mut self, corridor_policy: ShortcutCorridorPolicy) -> Self {
        self.corridor_policy = corridor_policy;
        self
    }

    pub fn with_sight_height_scale(mut self, sight_height_scale: f32) -> Self {
        self.sight_height_scale = sight_height_scale;
        self
    }

    pub fn with_restrict_to_start_area(mut self, restrict_to_start_area: bool) -> Self {
        self.restrict_to_start_area = restrict_to_start_area;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.sight_height_scale.is_finite() {
            return Err(Error::InvalidConfig(
                "Sight height scale must be finite".to_string(),
            ));
        }
        if self.sight_height_scale < 0.0 {
            return Err(Error::InvalidConfig(
                "Sight height scale cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LosConfig {
    fn default() -> Self {
        Self::new()
    }
}
