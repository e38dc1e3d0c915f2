//! Minimal path follower driving the optimizer
//!
//! Tracks the segment of the path the agent is currently moving along. Moving
//! the agent and detecting arrival belong to the caller, which calls
//! [`LosPathFollower::advance_segment`] once the segment end is reached.

use crate::agent::AgentController;
use crate::optimizer::LosOptimizer;
use crate::path::NavPath;
use glam::Vec3;

/// Indices of the path points bounding the current move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSegment {
    pub start_index: usize,
    pub end_index: usize,
}

/// Follows a path segment by segment, shortcutting by line of sight
#[derive(Debug)]
pub struct LosPathFollower<A: AgentController> {
    optimizer: LosOptimizer,
    agent: A,
    path: Option<NavPath>,
    segment: Option<MoveSegment>,
}

impl<A: AgentController> LosPathFollower<A> {
    pub fn new(optimizer: LosOptimizer, agent: A) -> Self {
        Self {
            optimizer,
            agent,
            path: None,
            segment: None,
        }
    }

    pub fn optimizer(&self) -> &LosOptimizer {
        &self.optimizer
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    pub fn path(&self) -> Option<&NavPath> {
        self.path.as_ref()
    }

    /// Starts following `path` from its first point
    pub fn set_path(&mut self, path: NavPath) -> Option<MoveSegment> {
        self.path = Some(path);
        self.set_move_segment(0)
    }

    /// Stops following the current path
    pub fn clear_path(&mut self) {
        self.path = None;
        self.segment = None;
    }

    /// Starts a segment at `start_index` and picks its end by line of sight
    ///
    /// The shortcut corridor of the chosen segment is stored on the path.
    /// Returns `None`, leaving no active segment, when `start_index` has no
    /// following point.
    pub fn set_move_segment(&mut self, start_index: usize) -> Option<MoveSegment> {
        let Some(path) = self.path.as_mut() else {
            self.segment = None;
            return None;
        };
        if start_index + 1 >= path.len() {
            log::debug!(
                "No segment starts at {} in a path of {} points",
                start_index,
                path.len()
            );
            self.segment = None;
            return None;
        }

        let result = self
            .optimizer
            .determine_next_target(path, start_index, &self.agent);
        path.set_shortcut_corridor(result.shortcut_corridor);

        let segment = MoveSegment {
            start_index,
            end_index: result.next_index,
        };
        self.segment = Some(segment);
        Some(segment)
    }

    /// Moves on to the segment starting at the current segment end
    ///
    /// Keeps the current segment when it already ends at the last point.
    pub fn advance_segment(&mut self) -> Option<MoveSegment> {
        let segment = self.segment?;
        let len = self.path.as_ref().map_or(0, NavPath::len);
        if segment.end_index + 1 >= len {
            return Some(segment);
        }
        self.set_move_segment(segment.end_index)
    }

    pub fn move_segment(&self) -> Option<MoveSegment> {
        self.segment
    }

    /// Location of the point the agent is heading for
    pub fn current_target(&self) -> Option<Vec3> {
        let segment = self.segment?;
        self.path
            .as_ref()
            .and_then(|path| path.point(segment.end_index))
            .map(|point| point.location)
    }

    /// Checks if the current segment ends at the last path point
    pub fn is_on_last_segment(&self) -> bool {
        match (self.segment, self.path.as_ref()) {
            (Some(segment), Some(path)) => segment.end_index + 1 >= path.len(),
            _ => false,
        }
    }
}
