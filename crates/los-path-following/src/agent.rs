//! The agent seen by the optimizer: a controller that may or may not
//! currently drive a body

use glam::Vec3;

/// Collision body of an agent
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AgentBody {
    /// World position of the body centre
    pub position: Vec3,
    /// Collision cylinder radius
    pub radius: f32,
    /// Half of the collision cylinder height
    pub half_height: f32,
}

impl AgentBody {
    /// Creates a new agent body
    pub fn new(position: Vec3, radius: f32, half_height: f32) -> Self {
        Self {
            position,
            radius,
            half_height,
        }
    }

    /// Returns a copy of the body moved to `position`
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

/// Resolves the body an agent is currently controlling
pub trait AgentController {
    /// The controlled body, `None` when the controller has nothing to drive
    fn body(&self) -> Option<AgentBody>;
}

impl AgentController for AgentBody {
    fn body(&self) -> Option<AgentBody> {
        Some(*self)
    }
}

impl<T: AgentController> AgentController for Option<T> {
    fn body(&self) -> Option<AgentBody> {
        self.as_ref().and_then(AgentController::body)
    }
}

impl<T: AgentController + ?Sized> AgentController for std::sync::Arc<T> {
    fn body(&self) -> Option<AgentBody> {
        (**self).body()
    }
}
