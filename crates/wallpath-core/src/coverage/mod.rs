//! Coverage path planning.
//!
//! Turns a rectangular work area, a set of rectangular obstacles and a
//! [`PlanningConfig`] into an ordered sequence of [`TrajectoryPoint`]s that
//! sweeps the tool over the wall in vertical lanes.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │ SweepOrchestrator│    │ ScanLineGenerator│    │  ObstacleIndex   │
//! │  (lane loop,     │───▶│  (one lane,      │───▶│  (nearest ahead  │
//! │   zig-zag)       │    │   split at gaps) │    │   in this lane)  │
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! All inputs are validated before the first point is produced; a rejected
//! input never yields a partial trajectory.
//!
//! # Example
//!
//! ```rust
//! use wallpath_core::coverage::{generate_coverage, PlanningConfig};
//! use wallpath_core::models::{Obstacle, WorkArea};
//!
//! let area = WorkArea::new(1.0, 2.0);
//! let obstacles = [Obstacle::new(0.4, 0.8, 0.2, 0.2)];
//! let config = PlanningConfig::new(0.1, 0.02, 0.05);
//!
//! let points = generate_coverage(&area, &obstacles, &config)?;
//! assert!(points.iter().any(|p| !p.tool_active && p.y > 0.0));
//! # Ok::<(), wallpath_core::WallpathError>(())
//! ```

use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WallpathError},
    models::{Obstacle, TrajectoryPoint, WorkArea},
};

pub mod config;
pub mod obstacle_index;
pub mod scan_line;
pub mod sweep;


pub use config::PlanningConfig;
pub use obstacle_index::{Direction, ObstacleIndex};
pub use scan_line::ScanLineGenerator;
pub use sweep::SweepOrchestrator;

/// Generates the coverage trajectory for `work_area`.
///
/// # Errors
///
/// Returns `InvalidDimension`, `InvalidToolConfig` or `InvalidObstacle` when
/// an input is out of range.
pub fn generate_coverage(
    work_area: &WorkArea,
    obstacles: &[Obstacle],
    config: &PlanningConfig,
) -> Result<Vec<TrajectoryPoint>> {
    validate_inputs(work_area, obstacles, config)?;
    Ok(SweepOrchestrator::new(work_area, obstacles, config).run())
}

/// Validates the work area, the config and every obstacle, in that order.
///
/// # Errors
///
/// Reports the first violation found.
pub fn validate_inputs(
    work_area: &WorkArea,
    obstacles: &[Obstacle],
    config: &PlanningConfig,
) -> Result<()> {
    let dimensions = [
        ("wall_width", work_area.wall_width),
        ("wall_height", work_area.wall_height),
    ];
    for (field, value) in dimensions {
        if !value.is_finite() || value <= 0.0 {
            return Err(WallpathError::invalid_dimension(field)
                .with_reason(format!("must be a positive number, got {value}")));
        }
    }

    config.validate()?;

    for (index, obstacle) in obstacles.iter().enumerate() {
        if !obstacle.x.is_finite() || !obstacle.y.is_finite() {
            return Err(WallpathError::invalid_obstacle(
                index,
                "coordinates must be finite",
            ));
        }
        if !obstacle.width.is_finite() || obstacle.width <= 0.0 {
            return Err(WallpathError::invalid_obstacle(
                index,
                format!("width must be positive, got {}", obstacle.width),
            ));
        }
        if !obstacle.height.is_finite() || obstacle.height <= 0.0 {
            return Err(WallpathError::invalid_obstacle(
                index,
                format!("height must be positive, got {}", obstacle.height),
            ));
        }
    }

    Ok(())
}

/// Tool parameters echoed back with a generated trajectory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ToolConfigSummary {
    pub tool_width: f64,
    pub overlap: f64,
    pub safety_margin: f64,
    /// Lateral distance between lanes
    pub effective_width: f64,
}

/// Metadata describing one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationMetadata {
    /// Wall size formatted as `"{width}x{height}m"`
    pub wall_dimensions: String,
    pub tool_config: ToolConfigSummary,
    pub obstacles_count: usize,
    pub points_count: usize,
    pub lane_count: usize,
    /// Wall-clock generation time in seconds
    pub generation_time: f64,
}

/// A generated trajectory plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationReport {
    pub work_area: WorkArea,
    pub obstacles: Vec<Obstacle>,
    pub points: Vec<TrajectoryPoint>,
    pub metadata: GenerationMetadata,
}

/// Planner bound to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoveragePlanner {
    config: PlanningConfig,
}

impl CoveragePlanner {
    pub fn new(config: PlanningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Generates a trajectory and reports timing and size metadata.
    ///
    /// # Errors
    ///
    /// Propagates validation failures from [`generate_coverage`].
    pub fn generate(&self, work_area: &WorkArea, obstacles: &[Obstacle]) -> Result<GenerationReport> {
        let config = &self.config;
        info!(
            "Generating vertical trajectory for {}x{}m wall",
            work_area.wall_width, work_area.wall_height
        );
        info!(
            "Tool config: width={}m, overlap={}m, safety_margin={}m",
            config.tool_width, config.overlap, config.safety_margin
        );

        let started = Instant::now();
        validate_inputs(work_area, obstacles, config)?;
        let sweep = SweepOrchestrator::new(work_area, obstacles, config);
        let points = sweep.run();
        let lane_count = sweep.lane_positions().count();
        let generation_time = started.elapsed().as_secs_f64();

        info!(
            "Generated trajectory with {} points over {lane_count} lanes in {generation_time:.3}s",
            points.len()
        );

        Ok(GenerationReport {
            work_area: *work_area,
            obstacles: obstacles.to_vec(),
            metadata: GenerationMetadata {
                wall_dimensions: format!("{}x{}m", work_area.wall_width, work_area.wall_height),
                tool_config: ToolConfigSummary {
                    tool_width: config.tool_width,
                    overlap: config.overlap,
                    safety_margin: config.safety_margin,
                    effective_width: config.step(),
                },
                obstacles_count: obstacles.len(),
                points_count: points.len(),
                lane_count,
                generation_time,
            },
            points,
        })
    }
}
