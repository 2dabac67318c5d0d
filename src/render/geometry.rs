//! Real-geometry draw backend
//!
//! macroquad exposes no fixed-function light channels, so shading happens
//! here: lights are collected as the scene feeds them, then each object's
//! base color is modulated by an ambient floor plus squared-falloff
//! contributions from every light at the object's position.

use macroquad::prelude::{draw_cube, draw_sphere, vec3, Color, Vec3};

use crate::math::Point;
use crate::scene::{LightSource, Object, Shape};
use super::DrawBackend;

/// Flat ambient term applied to every object
const AMBIENT: f32 = 0.35;
/// Falloff radius of a scene light
const LIGHT_RADIUS: f32 = 9.0;
/// Intensity of a scene light at zero distance
const LIGHT_INTENSITY: f32 = 0.9;

/// Draws the scene with macroquad's immediate-mode 3D calls
#[derive(Default)]
pub struct GeometryBackend {
    /// Emit points of the lights collected this frame
    lights: Vec<Point>,
}

impl GeometryBackend {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Brightness at a world position under the collected lights
    fn brightness_at(&self, position: Point) -> f32 {
        let mut total = AMBIENT;
        for light in &self.lights {
            let dist = light.distance(position);
            if dist < LIGHT_RADIUS {
                let attenuation = 1.0 - dist / LIGHT_RADIUS;
                total += LIGHT_INTENSITY * attenuation * attenuation;
            }
        }
        total.min(1.0)
    }
}

impl DrawBackend for GeometryBackend {
    fn begin_frame(&mut self) {
        self.lights.clear();
    }

    fn light(&mut self, light: &LightSource) {
        self.lights.push(light.emit_point());
    }

    fn draw(&mut self, object: &Object) {
        // Kinds without geometry (Target) draw nothing
        let Some(shape) = object.shape() else {
            return;
        };

        let (r, g, b) = object.base_color();
        let shade = self.brightness_at(object.position);
        let color = Color::new(r * shade, g * shade, b * shade, 1.0);
        let position = to_vec3(object.position);

        match shape {
            Shape::Cube { size } => draw_cube(position, vec3(size, size, size), None, color),
            Shape::Sphere { radius } => draw_sphere(position, radius, None, color),
        }
    }
}

fn to_vec3(point: Point) -> Vec3 {
    vec3(point.x, point.y, point.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lights_means_ambient_only() {
        let backend = GeometryBackend::new();
        let shade = backend.brightness_at(Point::new(3.0, 0.5, 3.0));
        assert!((shade - AMBIENT).abs() < 0.001);
    }

    #[test]
    fn test_brightness_falls_off_with_distance() {
        let mut backend = GeometryBackend::new();
        backend.light(&LightSource::new(Point::new(0.5, 0.5, 0.5), 0, true));

        let near = backend.brightness_at(Point::new(0.5, 0.5, 1.5));
        let far = backend.brightness_at(Point::new(0.5, 0.5, 7.5));
        let out_of_range = backend.brightness_at(Point::new(0.5, 0.5, 50.0));

        assert!(near > far);
        assert!(far > AMBIENT);
        assert!((out_of_range - AMBIENT).abs() < 0.001);
    }

    #[test]
    fn test_brightness_clamps_at_one() {
        let mut backend = GeometryBackend::new();
        for slot in 0..8 {
            backend.light(&LightSource::new(Point::new(0.5, 0.5, 0.5), slot, false));
        }
        // Right under a pile of lights the shade still tops out at 1.0
        let shade = backend.brightness_at(Point::new(0.5, 1.5, 0.5));
        assert!((shade - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_begin_frame_drops_stale_lights() {
        let mut backend = GeometryBackend::new();
        backend.light(&LightSource::new(Point::new(0.5, 0.5, 0.5), 0, true));
        backend.begin_frame();
        let shade = backend.brightness_at(Point::new(0.5, 1.5, 0.5));
        assert!((shade - AMBIENT).abs() < 0.001);
    }
}
