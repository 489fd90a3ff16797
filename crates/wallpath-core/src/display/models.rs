//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data types stay free of
//! presentation code. All output is markdown.

use std::fmt;

use super::datetime::{LocalDateTime, Seconds};
use crate::models::{
    ActionKind, LogLevel, MessageStatus, Obstacle, QueuedMessage, RobotAction, StoredTrajectory,
    SystemLogEntry, SystemStatus, TrajectoryPoint, TrajectorySummary,
};

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}) {:.2} x {:.2} m",
            self.x, self.y, self.width, self.height
        )
    }
}

impl fmt::Display for TrajectoryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {:.3} | {:.3} | {:.1} | {:.2} | {} |",
            self.x,
            self.y,
            self.angle,
            self.speed,
            if self.tool_active { "on" } else { "off" }
        )
    }
}

impl fmt::Display for StoredTrajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trajectory {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Wall: {} x {} m", self.wall_width, self.wall_height)?;
        writeln!(f, "- Points: {}", self.total_points)?;
        writeln!(f, "- Generation time: {}", Seconds(self.execution_time))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.obstacles.is_empty() {
            writeln!(f, "\n## Obstacles")?;
            writeln!(f)?;
            for obstacle in &self.obstacles {
                writeln!(f, "- {obstacle}")?;
            }
        }

        if self.points.is_empty() {
            writeln!(f, "\nNo points in this trajectory.")?;
            return Ok(());
        }

        writeln!(f, "\n## Points")?;
        writeln!(f)?;
        writeln!(f, "| # | x | y | angle | speed | tool |")?;
        writeln!(f, "|---:|---:|---:|---:|---:|:---:|")?;
        for (index, point) in self.points.iter().enumerate() {
            writeln!(f, "| {index} {point}")?;
        }

        Ok(())
    }
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} x {} m, {} points, created {}",
            self.id,
            self.wall_width,
            self.wall_height,
            self.total_points,
            LocalDateTime(&self.created_at)
        )
    }
}

impl fmt::Display for RobotAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- `{}` {} ({})",
            self.action_type,
            self.details,
            LocalDateTime(&self.timestamp)
        )
    }
}

impl fmt::Display for QueuedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **#{}** {} (priority {}, {}, queued {}",
            self.id,
            self.message,
            self.priority,
            self.status,
            LocalDateTime(&self.created_at)
        )?;
        if let Some(processed_at) = &self.processed_at {
            write!(f, ", processed {}", LocalDateTime(processed_at))?;
        }
        writeln!(f, ")")
    }
}

impl fmt::Display for SystemLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- `{}` {}", self.level, self.message)?;
        if let Some(request_id) = &self.request_id {
            write!(f, " [{request_id}]")?;
        }
        if self.execution_time.is_some() {
            write!(f, " in {}", Seconds(self.execution_time))?;
        }
        writeln!(f, " at {}", LocalDateTime(&self.timestamp))
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# System Status")?;
        writeln!(f)?;
        writeln!(f, "- Stored trajectories: {}", self.total_trajectories)?;
        writeln!(
            f,
            "- Average request time: {}",
            Seconds(Some(self.average_request_time))
        )?;

        writeln!(f, "\n## Recent Logs")?;
        writeln!(f)?;
        if self.recent_logs.is_empty() {
            writeln!(f, "No requests logged yet.")?;
        }
        for entry in &self.recent_logs {
            write!(f, "{entry}")?;
        }

        Ok(())
    }
}
