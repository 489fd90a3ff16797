//! Narration of a stored trajectory into a robot action log.
//!
//! Execution here is a replay: consecutive points are classified into moves
//! and turns, each stamped with the time it was narrated. Nothing feeds back
//! into planning.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::{ActionKind, RobotAction, TrajectoryPoint};

/// A move with `|dy|` below this is horizontal.
pub const HORIZONTAL_TOLERANCE: f64 = 0.01;
/// A move with `|dx|` below this is vertical.
pub const VERTICAL_TOLERANCE: f64 = 0.01;
/// A heading change above this is a turn.
pub const TURN_THRESHOLD: f64 = 0.1;

/// Outcome of executing a stored trajectory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionReport {
    pub session_id: String,
    pub trajectory_id: u64,
    pub points_executed: usize,
    pub actions: Vec<RobotAction>,
}

/// Creates a session identifier from the current time in milliseconds.
pub fn new_session_id() -> String {
    format!("session_{}", Timestamp::now().as_millisecond())
}

/// Classifies the move from `previous` to `point`.
///
/// Horizontal is checked first, so a move that changes neither coordinate
/// counts as horizontal.
pub fn classify_move(previous: &TrajectoryPoint, point: &TrajectoryPoint) -> ActionKind {
    if (point.y - previous.y).abs() < HORIZONTAL_TOLERANCE {
        ActionKind::MoveHorizontal
    } else if (point.x - previous.x).abs() < VERTICAL_TOLERANCE {
        ActionKind::MoveVertical
    } else {
        ActionKind::MoveDiagonal
    }
}

/// Whether the heading changes between `previous` and `point`.
pub fn is_turn(previous: &TrajectoryPoint, point: &TrajectoryPoint) -> bool {
    (point.angle - previous.angle).abs() > TURN_THRESHOLD
}

/// Replays `points` into the action log of one session.
///
/// The log opens with a `SESSION_START` entry, then one `MOVE_START` for the
/// first point and one move per following point, each followed by a `TURN`
/// entry when the heading changes.
pub fn narrate(session_id: &str, trajectory_id: u64, points: &[TrajectoryPoint]) -> Vec<RobotAction> {
    let action = |kind: ActionKind, details: String, at: Option<&TrajectoryPoint>| RobotAction {
        session_id: session_id.to_string(),
        action_type: kind,
        details,
        timestamp: Timestamp::now(),
        position_x: at.map(|p| p.x),
        position_y: at.map(|p| p.y),
    };

    let mut actions = Vec::with_capacity(points.len() + 1);
    actions.push(action(
        ActionKind::SessionStart,
        format!("Started trajectory execution for ID: {trajectory_id}"),
        None,
    ));

    let Some(first) = points.first() else {
        return actions;
    };
    actions.push(action(
        ActionKind::MoveStart,
        format!("Starting at position ({:.2}, {:.2})", first.x, first.y),
        Some(first),
    ));

    for pair in points.windows(2) {
        let (previous, point) = (&pair[0], &pair[1]);
        let kind = classify_move(previous, point);
        let verb = match kind {
            ActionKind::MoveHorizontal => "horizontally",
            ActionKind::MoveVertical => "vertically",
            _ => "diagonally",
        };
        actions.push(action(
            kind,
            format!("Moving {verb} to ({:.2}, {:.2})", point.x, point.y),
            Some(point),
        ));

        if is_turn(previous, point) {
            actions.push(action(
                ActionKind::Turn,
                format!("Turning to angle {:.2} degrees", point.angle),
                Some(point),
            ));
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(actions: &[RobotAction]) -> Vec<ActionKind> {
        actions.iter().map(|a| a.action_type).collect()
    }

    #[test]
    fn test_classify_move() {
        let origin = TrajectoryPoint::working(0.0, 0.0, 0.0, 0.1);

        let right = TrajectoryPoint::working(1.0, 0.005, 0.0, 0.1);
        assert_eq!(classify_move(&origin, &right), ActionKind::MoveHorizontal);

        let up = TrajectoryPoint::working(0.005, 1.0, 0.0, 0.1);
        assert_eq!(classify_move(&origin, &up), ActionKind::MoveVertical);

        let diagonal = TrajectoryPoint::working(1.0, 1.0, 0.0, 0.1);
        assert_eq!(classify_move(&origin, &diagonal), ActionKind::MoveDiagonal);

        assert_eq!(classify_move(&origin, &origin), ActionKind::MoveHorizontal);
    }

    #[test]
    fn test_narrate_square_path() {
        let points = [
            TrajectoryPoint::transit(0.0, 0.0, 0.0, 0.15),
            TrajectoryPoint::working(0.0, 1.0, 90.0, 0.1),
            TrajectoryPoint::transit(0.5, 1.0, 0.0, 0.15),
            TrajectoryPoint::working(0.5, 0.0, 270.0, 0.1),
        ];

        let actions = narrate("session_1", 7, &points);

        assert_eq!(
            kinds(&actions),
            vec![
                ActionKind::SessionStart,
                ActionKind::MoveStart,
                ActionKind::MoveVertical,
                ActionKind::Turn,
                ActionKind::MoveHorizontal,
                ActionKind::Turn,
                ActionKind::MoveVertical,
                ActionKind::Turn,
            ]
        );
        assert_eq!(actions[0].details, "Started trajectory execution for ID: 7");
        assert_eq!(actions[0].position_x, None);
        assert_eq!(actions[1].details, "Starting at position (0.00, 0.00)");
        assert_eq!(actions[2].details, "Moving vertically to (0.00, 1.00)");
        assert_eq!(actions[3].details, "Turning to angle 90.00 degrees");
        assert_eq!(actions[6].position_x, Some(0.5));
        assert!(actions.iter().all(|a| a.session_id == "session_1"));
    }

    #[test]
    fn test_narrate_same_heading_has_no_turns() {
        let points = [
            TrajectoryPoint::working(0.0, 0.0, 90.0, 0.1),
            TrajectoryPoint::working(0.0, 0.5, 90.0, 0.1),
            TrajectoryPoint::transit(0.0, 0.9, 90.05, 0.2),
        ];

        let actions = narrate("s", 1, &points);
        assert!(!kinds(&actions).contains(&ActionKind::Turn));
        assert_eq!(actions.len(), 4);
    }

    #[test]
    fn test_narrate_empty_trajectory() {
        let actions = narrate("s", 3, &[]);
        assert_eq!(kinds(&actions), vec![ActionKind::SessionStart]);
    }

    #[test]
    fn test_session_id_format() {
        let id = new_session_id();
        let millis = id.strip_prefix("session_").expect("prefix");
        assert!(millis.parse::<i64>().is_ok());
    }
}
