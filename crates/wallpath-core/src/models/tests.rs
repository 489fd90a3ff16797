//! Tests for model types and their display formatting.

use std::str::FromStr;

use jiff::Timestamp;

use super::*;

fn sample_trajectory() -> StoredTrajectory {
    StoredTrajectory {
        id: 3,
        wall_width: 2.0,
        wall_height: 1.0,
        obstacles: vec![Obstacle::new(0.5, 0.25, 0.5, 0.25)],
        points: vec![
            TrajectoryPoint::transit(0.0, 0.0, 0.0, 0.15),
            TrajectoryPoint::working(0.0, 1.0, 90.0, 0.1),
        ],
        total_points: 2,
        created_at: Timestamp::now(),
        execution_time: Some(0.0021),
    }
}

#[test]
fn test_action_kind_string_forms() {
    let kinds = [
        ActionKind::SessionStart,
        ActionKind::MoveStart,
        ActionKind::MoveHorizontal,
        ActionKind::MoveVertical,
        ActionKind::MoveDiagonal,
        ActionKind::Turn,
    ];
    for kind in kinds {
        assert_eq!(ActionKind::from_str(kind.as_str()), Ok(kind));
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
    assert!(ActionKind::from_str("JUMP").is_err());
}

#[test]
fn test_log_level_accepts_warn_alias() {
    assert_eq!(LogLevel::from_str("warn"), Ok(LogLevel::Warning));
    assert_eq!(LogLevel::from_str("info"), Ok(LogLevel::Info));
    assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "\"ERROR\"");
    assert!(LogLevel::from_str("debug").is_err());
}

#[test]
fn test_message_status_round_trip() {
    assert_eq!(MessageStatus::default(), MessageStatus::Pending);
    assert_eq!(
        MessageStatus::from_str(MessageStatus::Processed.as_str()),
        Ok(MessageStatus::Processed)
    );
}

#[test]
fn test_point_defaults_when_fields_missing() {
    let point: TrajectoryPoint = serde_json::from_str(r#"{"x": 1.0, "y": 2.0}"#).unwrap();
    assert_eq!(point, TrajectoryPoint::working(1.0, 2.0, 0.0, 0.1));
}

#[test]
fn test_obstacle_extent() {
    let obstacle = Obstacle::new(1.0, 0.5, 0.5, 0.3);
    assert_eq!(obstacle.right(), 1.5);
    assert!((obstacle.top() - 0.8).abs() < 1e-12);
}

#[test]
fn test_summary_from_trajectory() {
    let trajectory = sample_trajectory();
    let summary = TrajectorySummary::from(&trajectory);

    assert_eq!(summary.id, 3);
    assert_eq!(summary.total_points, 2);
    assert_eq!(summary.created_at, trajectory.created_at);
}

#[test]
fn test_trajectory_display() {
    let output = sample_trajectory().to_string();

    assert!(output.starts_with("# Trajectory 3"));
    assert!(output.contains("- Wall: 2 x 1 m"));
    assert!(output.contains("- Generation time: 0.002 s"));
    assert!(output.contains("(0.50, 0.25) 0.50 x 0.25 m"));
    assert!(output.contains("| 0 | 0.000 | 0.000 | 0.0 | 0.15 | off |"));
    assert!(output.contains("| 1 | 0.000 | 1.000 | 90.0 | 0.10 | on |"));
}

#[test]
fn test_system_status_display() {
    let status = SystemStatus {
        total_trajectories: 4,
        average_request_time: 0.125,
        recent_logs: vec![SystemLogEntry {
            level: LogLevel::Info,
            message: "list".to_string(),
            request_id: Some("req-1".to_string()),
            execution_time: Some(0.01),
            timestamp: Timestamp::now(),
        }],
    };

    let output = status.to_string();
    assert!(output.contains("- Stored trajectories: 4"));
    assert!(output.contains("- Average request time: 0.125 s"));
    assert!(output.contains("- `INFO` list [req-1] in 0.010 s"));
}
