//! Log-only draw backend
//!
//! The headless variant: every light and object the scene feeds is
//! reported through the logger instead of drawn. Useful for inspecting
//! what a map produced without caring about the picture.

use log::debug;

use crate::scene::{LightSource, Object};
use super::DrawBackend;

#[derive(Default)]
pub struct TraceBackend;

impl TraceBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DrawBackend for TraceBackend {
    fn light(&mut self, light: &LightSource) {
        debug!(
            "light {} at ({:.1}, {:.1}, {:.1}){}",
            light.slot,
            light.position.x,
            light.position.y,
            light.position.z,
            if light.player_light { " [player]" } else { "" }
        );
    }

    fn draw(&mut self, object: &Object) {
        debug!(
            "{:?} at ({:.1}, {:.1}, {:.1})",
            object.kind, object.position.x, object.position.y, object.position.z
        );
    }
}
