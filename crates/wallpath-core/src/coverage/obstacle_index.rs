//! Nearest-obstacle queries along a vertical lane.

use crate::models::Obstacle;

/// Vertical travel direction of a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Bottom to top, increasing y
    Up,
    /// Top to bottom, decreasing y
    Down,
}

impl Direction {
    /// Infers the direction of travel from `start` to `end`.
    ///
    /// Returns `None` when the span is empty.
    pub fn between(start: f64, end: f64) -> Option<Self> {
        if start < end {
            Some(Direction::Up)
        } else if start > end {
            Some(Direction::Down)
        } else {
            None
        }
    }

    /// Whether `a` lies strictly before `b` in this direction.
    pub fn before(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Up => a < b,
            Direction::Down => a > b,
        }
    }
}

/// Read-only query surface over an obstacle set.
///
/// The safety margin widens each obstacle's horizontal footprint when
/// deciding lane membership; vertical extents are compared unmodified. Every
/// query is a linear scan.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleIndex<'a> {
    obstacles: &'a [Obstacle],
    margin: f64,
}

impl<'a> ObstacleIndex<'a> {
    pub fn new(obstacles: &'a [Obstacle], margin: f64) -> Self {
        Self { obstacles, margin }
    }

    /// Whether the lane at `lane_x` crosses the margin-inflated footprint.
    pub fn in_lane(&self, obstacle: &Obstacle, lane_x: f64) -> bool {
        obstacle.x - self.margin <= lane_x && lane_x <= obstacle.right() + self.margin
    }

    /// Finds the in-lane obstacle nearest to `current_y` ahead in `direction`.
    ///
    /// Upward, candidates start strictly above the cursor (`y > current_y`).
    /// Downward, candidates end strictly below it (`top < current_y`). On
    /// equal distances the first obstacle in input order wins.
    pub fn find_nearest(
        &self,
        lane_x: f64,
        current_y: f64,
        direction: Direction,
    ) -> Option<&'a Obstacle> {
        let mut nearest: Option<(&'a Obstacle, f64)> = None;

        for obstacle in self.obstacles {
            if !self.in_lane(obstacle, lane_x) {
                continue;
            }

            let distance = match direction {
                Direction::Up if obstacle.y > current_y => obstacle.y - current_y,
                Direction::Down if obstacle.top() < current_y => current_y - obstacle.top(),
                _ => continue,
            };

            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((obstacle, distance));
            }
        }

        nearest.map(|(obstacle, _)| obstacle)
    }
}
