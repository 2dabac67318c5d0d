//! Scene state: objects, lights, and camera queries
//!
//! A `Scene` is an explicitly owned value built by one map load and
//! borrowed by the frame loop. It holds every object and light and knows
//! which object is the player, which anchors the four-way camera.

mod camera;
mod light;
mod map;
mod object;

pub use camera::Facing;
pub use light::LightSource;
pub use map::{load_map, parse_map, MapError};
pub use object::{Object, ObjectKind, Shape};

use crate::math::Point;
use crate::render::DrawBackend;

/// Everything one map load produced
#[derive(Debug)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<LightSource>,
    /// Index of the player in `objects`, if the map had a player tile
    player: Option<usize>,
}

impl Scene {
    fn from_parts(objects: Vec<Object>, lights: Vec<LightSource>, player: Option<usize>) -> Self {
        Self {
            objects,
            lights,
            player,
        }
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    /// Feed the scene to a draw backend: all lights first (slot order),
    /// then all objects (creation order). Light state has to be in place
    /// before any geometry is shaded, so this ordering is load-bearing.
    pub fn render(&self, backend: &mut dyn DrawBackend) {
        backend.begin_frame();
        for light in &self.lights {
            backend.light(light);
        }
        for object in &self.objects {
            backend.draw(object);
        }
    }

    /// Player position, if the loaded map had a player tile
    pub fn player_position(&self) -> Option<Point> {
        self.player.map(|index| self.objects[index].position)
    }

    /// Camera eye point for the given facing, anchored to the player
    pub fn camera_eye(&self, facing: Facing) -> Option<Point> {
        self.player_position().map(|player| facing.eye_point(player))
    }

    /// Camera look-at point for the given facing, anchored to the player
    pub fn camera_look_at(&self, facing: Facing) -> Option<Point> {
        self.player_position()
            .map(|player| facing.look_at_point(player))
    }
}
