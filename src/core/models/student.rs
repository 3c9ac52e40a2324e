//! Student model

use crate::core::goal::{
    goal_progress, goal_progress_bar, goal_span, GoalProgress, GoalProgressBar,
};
use crate::core::progress::{assess_progress, Position, ProgressOutcome, ProgressReport};
use serde::{Deserialize, Serialize};

/// A student enrolled in a halaqa, with their recorded positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student name
    pub name: String,

    /// Last ayah memorized, if any progress has been recorded
    pub memorized: Option<Position>,

    /// Goal set by a teacher or parent
    pub target: Option<Position>,
}

impl Student {
    /// Create a new student with no recorded progress
    ///
    /// # Arguments
    /// * `name` - Student name
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            memorized: None,
            target: None,
        }
    }

    /// Builder-style setter for the memorized position
    #[must_use]
    pub fn with_memorized(mut self, position: Option<Position>) -> Self {
        self.memorized = position;
        self
    }

    /// Builder-style setter for the target position
    #[must_use]
    pub fn with_target(mut self, position: Option<Position>) -> Self {
        self.target = position;
        self
    }

    /// Assess the memorized position, keeping invalid records visible
    #[must_use]
    pub fn outcome(&self) -> ProgressOutcome {
        assess_progress(
            self.memorized.map(|p| p.surah_id),
            self.memorized.map(|p| p.ayah),
        )
    }

    /// Progress report for the memorized position (zero-state when unset)
    #[must_use]
    pub fn progress(&self) -> ProgressReport {
        self.outcome().into_report()
    }

    /// Progress toward the target
    #[must_use]
    pub fn goal(&self) -> GoalProgress {
        goal_progress(self.memorized, self.target)
    }

    /// Three-section goal bar
    #[must_use]
    pub fn goal_bar(&self) -> GoalProgressBar {
        goal_progress_bar(self.memorized, self.target)
    }

    /// Remaining ayah range toward the target
    #[must_use]
    pub fn goal_span(&self) -> Option<(Position, Position)> {
        goal_span(self.memorized, self.target)
    }
}
