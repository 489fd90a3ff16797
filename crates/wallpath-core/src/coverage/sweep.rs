//! Boustrophedon lane iteration over the whole work area.

use log::debug;

use super::{PlanningConfig, ScanLineGenerator};
use crate::models::{Obstacle, TrajectoryPoint, WorkArea};

/// Heading of upward lanes, in degrees.
pub const HEADING_UP: f64 = 90.0;
/// Heading of downward lanes, in degrees.
pub const HEADING_DOWN: f64 = 270.0;
/// Heading of the repositioning point that opens each lane.
pub const HEADING_REPOSITION: f64 = 0.0;

/// Walks lanes left to right, alternating direction on every lane.
///
/// Lane `i` sits at `x = i * step`; even lanes run bottom to top, odd lanes
/// top to bottom. Lanes continue while `x < wall_width`, so the last lane may
/// overshoot the right edge.
#[derive(Debug, Clone, Copy)]
pub struct SweepOrchestrator<'a> {
    work_area: &'a WorkArea,
    config: &'a PlanningConfig,
    lanes: ScanLineGenerator<'a>,
}

impl<'a> SweepOrchestrator<'a> {
    /// Inputs must already be validated.
    pub fn new(
        work_area: &'a WorkArea,
        obstacles: &'a [Obstacle],
        config: &'a PlanningConfig,
    ) -> Self {
        Self {
            work_area,
            config,
            lanes: ScanLineGenerator::new(config, obstacles),
        }
    }

    /// X coordinates of every lane, in sweep order.
    pub fn lane_positions(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.config.step();
        let wall_width = self.work_area.wall_width;
        (0u64..)
            .map(move |lane| lane as f64 * step)
            .take_while(move |&x| x < wall_width)
    }

    /// Produces the full trajectory.
    pub fn run(&self) -> Vec<TrajectoryPoint> {
        let wall_height = self.work_area.wall_height;
        let mut trajectory = Vec::new();

        for (lane, lane_x) in self.lane_positions().enumerate() {
            let (start_y, end_y, heading) = if lane % 2 == 0 {
                (0.0, wall_height, HEADING_UP)
            } else {
                (wall_height, 0.0, HEADING_DOWN)
            };

            trajectory.push(TrajectoryPoint::transit(
                lane_x,
                start_y,
                HEADING_REPOSITION,
                self.config.reposition_speed,
            ));

            let points = self.lanes.generate_lane(lane_x, start_y, end_y, heading);
            debug!("Lane {lane} at x={lane_x:.3}: {} points", points.len());
            trajectory.extend(points);
        }

        trajectory
    }
}
