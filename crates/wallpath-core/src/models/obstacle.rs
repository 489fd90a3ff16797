//! Obstacle and work area geometry.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangular obstacle with its origin at the lower-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f64,
    /// Bottom edge
    pub y: f64,
    /// Horizontal extent, must be positive
    pub width: f64,
    /// Vertical extent, must be positive
    pub height: f64,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Rectangular wall area `[0, wall_width] x [0, wall_height]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkArea {
    pub wall_width: f64,
    pub wall_height: f64,
}

impl WorkArea {
    pub fn new(wall_width: f64, wall_height: f64) -> Self {
        Self {
            wall_width,
            wall_height,
        }
    }
}
