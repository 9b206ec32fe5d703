//! Collision detection module
//!
//! Axis-aligned rectangle primitives for the 2D arena. Rectangles are stored
//! as min/max corners in world space (top-left origin, +Y down).
//!
//! # Example
//!
//! ```ignore
//! use brickfire_engine::physics::collision::Aabb2;
//! use glam::Vec2;
//!
//! let player = Aabb2::from_pos_size(Vec2::new(400.0, 300.0), Vec2::new(40.0, 60.0));
//! let block = Aabb2::from_pos_size(Vec2::new(400.0, 320.0), Vec2::new(40.0, 40.0));
//! assert!(player.overlaps(&block));
//! ```

use glam::Vec2;

/// Axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left position and a size.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test on both axes.
    ///
    /// Rectangles that only share an edge do not overlap, so a player standing
    /// flush against a block is not considered colliding with it.
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
