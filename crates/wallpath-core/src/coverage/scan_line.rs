//! Single-lane trajectory generation.

use super::{
    obstacle_index::{Direction, ObstacleIndex},
    PlanningConfig,
};
use crate::models::{Obstacle, TrajectoryPoint};

/// Produces the points of one vertical lane, splitting it around obstacles.
///
/// The lane is walked greedily: find the nearest obstacle ahead, emit the
/// worked segment up to its margin-inflated span, emit a transit segment
/// across the span, move the cursor past it and repeat. Overlapping spans
/// are not merged, so each produces its own transit segment.
#[derive(Debug, Clone, Copy)]
pub struct ScanLineGenerator<'a> {
    config: &'a PlanningConfig,
    index: ObstacleIndex<'a>,
}

impl<'a> ScanLineGenerator<'a> {
    pub fn new(config: &'a PlanningConfig, obstacles: &'a [Obstacle]) -> Self {
        Self {
            config,
            index: ObstacleIndex::new(obstacles, config.safety_margin),
        }
    }

    /// Generates the lane at `lane_x` from `start_y` to `end_y`.
    ///
    /// Travel direction follows the sign of `end_y - start_y`; an empty span
    /// yields no points. Every point carries `heading` as its angle.
    pub fn generate_lane(
        &self,
        lane_x: f64,
        start_y: f64,
        end_y: f64,
        heading: f64,
    ) -> Vec<TrajectoryPoint> {
        let Some(direction) = Direction::between(start_y, end_y) else {
            return Vec::new();
        };

        let working = |y: f64| TrajectoryPoint::working(lane_x, y, heading, self.config.working_speed);
        let transit = |y: f64| TrajectoryPoint::transit(lane_x, y, heading, self.config.transit_speed);

        let mut points = Vec::new();
        let mut current_y = start_y;

        while direction.before(current_y, end_y) {
            let Some(obstacle) = self.index.find_nearest(lane_x, current_y, direction) else {
                points.push(working(current_y));
                points.push(working(end_y));
                break;
            };

            let (gap_start, gap_end) = self.gap(obstacle, direction);

            if direction.before(current_y, gap_start) {
                points.push(working(current_y));
                points.push(working(gap_start));
            }

            points.push(transit(gap_start));
            points.push(transit(gap_end));

            current_y = gap_end;
        }

        points
    }

    /// Margin-inflated vertical span of `obstacle`, ordered along `direction`.
    fn gap(&self, obstacle: &Obstacle, direction: Direction) -> (f64, f64) {
        let margin = self.config.safety_margin;
        let lower = obstacle.y - margin;
        let upper = obstacle.top() + margin;

        match direction {
            Direction::Up => (lower, upper),
            Direction::Down => (upper, lower),
        }
    }
}
