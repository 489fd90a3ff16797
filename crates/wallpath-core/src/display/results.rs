//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::Seconds;
use crate::{
    coverage::GenerationReport,
    execution::ExecutionReport,
    models::{ActionKind, QueuedMessage, StoredTrajectory},
};

/// Outcome of a generation run, optionally saved.
pub struct GenerationResult<'a> {
    pub report: &'a GenerationReport,
    pub saved_as: Option<u64>,
}

impl<'a> GenerationResult<'a> {
    pub fn new(report: &'a GenerationReport) -> Self {
        Self {
            report,
            saved_as: None,
        }
    }

    pub fn saved_as(mut self, id: u64) -> Self {
        self.saved_as = Some(id);
        self
    }
}

impl fmt::Display for GenerationResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metadata = &self.report.metadata;
        let tool = &metadata.tool_config;

        writeln!(
            f,
            "Generated trajectory with {} points over {} lanes",
            metadata.points_count, metadata.lane_count
        )?;
        writeln!(f)?;
        writeln!(f, "- Wall: {}", metadata.wall_dimensions)?;
        writeln!(f, "- Obstacles: {}", metadata.obstacles_count)?;
        writeln!(
            f,
            "- Tool: width {} m, overlap {} m, safety margin {} m",
            tool.tool_width, tool.overlap, tool.safety_margin
        )?;
        writeln!(f, "- Lane spacing: {:.3} m", tool.effective_width)?;
        writeln!(f, "- Generation time: {}", Seconds(Some(metadata.generation_time)))?;

        if let Some(id) = self.saved_as {
            writeln!(f)?;
            writeln!(f, "Saved as trajectory ID: {id}")?;
        }
        Ok(())
    }
}

/// Confirmation of a stored trajectory.
pub struct SaveResult(pub StoredTrajectory);

impl fmt::Display for SaveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved trajectory with ID: {} ({} points)",
            self.0.id, self.0.total_points
        )
    }
}

/// Confirmation of a deleted trajectory.
pub struct DeleteResult {
    pub id: u64,
}

impl DeleteResult {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted trajectory {}", self.id)
    }
}

impl fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Executed trajectory {} as session {}",
            self.trajectory_id, self.session_id
        )?;
        writeln!(f)?;
        writeln!(f, "- Points executed: {}", self.points_executed)?;
        writeln!(f, "- Actions logged: {}", self.actions.len())?;

        let kinds = [
            ActionKind::MoveHorizontal,
            ActionKind::MoveVertical,
            ActionKind::MoveDiagonal,
            ActionKind::Turn,
        ];
        for kind in kinds {
            let count = self.actions.iter().filter(|a| a.action_type == kind).count();
            if count > 0 {
                writeln!(f, "  - `{kind}`: {count}")?;
            }
        }
        Ok(())
    }
}

/// Confirmation of a published message.
pub struct PublishResult(pub QueuedMessage);

impl fmt::Display for PublishResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Published message {} to '{}' with priority {}",
            self.0.id, self.0.topic, self.0.priority
        )
    }
}

/// Number of messages delivered by a processing run.
pub struct ProcessResult {
    pub processed: usize,
    pub topic: Option<String>,
}

impl fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.topic {
            Some(topic) => writeln!(f, "Processed {} messages on '{topic}'", self.processed),
            None => writeln!(f, "Processed {} messages", self.processed),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{
        coverage::CoveragePlanner,
        models::{RobotAction, WorkArea},
    };

    #[test]
    fn test_generation_result_mentions_saved_id() {
        let report = CoveragePlanner::default()
            .generate(&WorkArea::new(1.0, 1.0), &[])
            .unwrap();

        let unsaved = GenerationResult::new(&report).to_string();
        assert!(unsaved.contains("over 13 lanes"));
        assert!(!unsaved.contains("Saved as"));

        let saved = GenerationResult::new(&report).saved_as(9).to_string();
        assert!(saved.contains("Saved as trajectory ID: 9"));
    }

    #[test]
    fn test_execution_report_counts_kinds() {
        let action = |kind| RobotAction {
            session_id: "session_1".to_string(),
            action_type: kind,
            details: String::new(),
            timestamp: Timestamp::now(),
            position_x: None,
            position_y: None,
        };
        let report = ExecutionReport {
            session_id: "session_1".to_string(),
            trajectory_id: 2,
            points_executed: 3,
            actions: vec![
                action(ActionKind::SessionStart),
                action(ActionKind::MoveStart),
                action(ActionKind::MoveVertical),
                action(ActionKind::MoveVertical),
                action(ActionKind::Turn),
            ],
        };

        let output = report.to_string();
        assert!(output.contains("Executed trajectory 2 as session session_1"));
        assert!(output.contains("`MOVE_VERTICAL`: 2"));
        assert!(output.contains("`TURN`: 1"));
        assert!(!output.contains("MOVE_DIAGONAL"));
    }

    #[test]
    fn test_process_result() {
        let all = ProcessResult {
            processed: 3,
            topic: None,
        };
        assert_eq!(all.to_string(), "Processed 3 messages\n");

        let one = ProcessResult {
            processed: 1,
            topic: Some("robot_status".to_string()),
        };
        assert!(one.to_string().contains("on 'robot_status'"));
    }
}
