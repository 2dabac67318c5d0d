//! Scene objects
//!
//! Objects are plain data: a kind tag plus a position fixed at construction.
//! What an object looks like (shape and base color) is a pure function of
//! its kind, so the draw backends never branch beyond what these methods
//! return.

use crate::math::Point;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Wall,
    Ground,
    Box,
    Player,
    /// Present in the map model but intentionally invisible
    Target,
}

/// Geometry drawn for an object
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Cube { size: f32 },
    Sphere { radius: f32 },
}

/// A placed scene object
#[derive(Debug, Clone, Copy)]
pub struct Object {
    pub kind: ObjectKind,
    pub position: Point,
}

impl Object {
    pub fn new(kind: ObjectKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Shape to draw, or `None` for kinds with no visible geometry
    pub fn shape(&self) -> Option<Shape> {
        match self.kind {
            ObjectKind::Wall | ObjectKind::Ground | ObjectKind::Box => {
                Some(Shape::Cube { size: 1.0 })
            }
            ObjectKind::Player => Some(Shape::Sphere { radius: 0.5 }),
            ObjectKind::Target => None,
        }
    }

    /// Base color before lighting (0.0-1.0 channels)
    pub fn base_color(&self) -> (f32, f32, f32) {
        match self.kind {
            ObjectKind::Wall => (0.41, 0.41, 0.41),
            ObjectKind::Ground => (0.38, 0.38, 0.38),
            ObjectKind::Box => (0.87, 0.72, 0.52),
            // Target has no shape, so its color is never sampled
            ObjectKind::Player | ObjectKind::Target => (0.19, 0.19, 0.19),
        }
    }
}
