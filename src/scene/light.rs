//! Light sources
//!
//! Every light is a white point light anchored to a map tile. The slot is
//! the light's stable identity: assigned densely from 0 in creation order,
//! it fixes the order lights are fed to the draw backends.

use crate::math::Point;

/// A point light placed by the map loader
#[derive(Debug, Clone, Copy)]
pub struct LightSource {
    /// Tile-anchored position (the light shines from one unit above this)
    pub position: Point,
    /// 0-based identity, assigned in creation order
    pub slot: usize,
    /// The light that travels with the player tile, as opposed to an
    /// ambient light placed on an open tile
    pub player_light: bool,
}

impl LightSource {
    pub fn new(position: Point, slot: usize, player_light: bool) -> Self {
        Self {
            position,
            slot,
            player_light,
        }
    }

    /// World-space point the light illuminates from
    pub fn emit_point(&self) -> Point {
        self.position + Point::new(0.0, 1.0, 0.0)
    }
}
