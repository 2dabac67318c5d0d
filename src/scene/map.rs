//! Map loading and parsing
//!
//! Maps are plain text: two whitespace-separated integers (width, height)
//! followed by width x height tile codes, columns outer and rows inner.
//! A cell at grid (i, j) lands at world (i + 0.5, 0.5, j + 0.5).
//!
//! Tile codes: 1 = wall, 2 = box, 3 = player (plus ground and the player
//! light), 4 = ground, anything else = ground plus an ambient light.
//!
//! Loading either succeeds with a fully populated scene or fails with a
//! `MapError`; a partial scene is never returned.

use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::math::Point;
use super::{LightSource, Object, ObjectKind, Scene};

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum grid dimension (width or height) for a map
    pub const MAX_MAP_SIZE: usize = 128;
}

/// Error type for map loading
#[derive(Debug)]
pub enum MapError {
    IoError(std::io::Error),
    ParseError(String),
    ValidationError(String),
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::IoError(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::IoError(e) => write!(f, "IO error: {}", e),
            MapError::ParseError(e) => write!(f, "Parse error: {}", e),
            MapError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Load a map from a plain-text file
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<Scene, MapError> {
    let contents = fs::read_to_string(path)?;
    parse_map(&contents)
}

/// Parse a map from a string (for embedded maps or testing)
pub fn parse_map(source: &str) -> Result<Scene, MapError> {
    let mut tokens = source.split_whitespace();

    let width = read_dimension(&mut tokens, "width")?;
    let height = read_dimension(&mut tokens, "height")?;

    let mut objects: Vec<Object> = Vec::new();
    let mut lights: Vec<LightSource> = Vec::new();
    let mut player: Option<usize> = None;

    for i in 0..width {
        for j in 0..height {
            let code = next_int(&mut tokens, &format!("tile ({}, {})", i, j))?;

            let x = i as f32 + 0.5;
            let y = 0.5;
            let z = j as f32 + 0.5;

            match code {
                // Wall and box sit on the grid plane
                1 => objects.push(Object::new(ObjectKind::Wall, Point::new(x, y, z))),
                2 => objects.push(Object::new(ObjectKind::Box, Point::new(x, y, z))),
                // Player stands on a ground tile and carries its own light
                3 => {
                    if player.is_some() {
                        return Err(MapError::ValidationError(format!(
                            "more than one player tile (second at cell ({}, {}))",
                            i, j
                        )));
                    }
                    objects.push(Object::new(ObjectKind::Ground, Point::new(x, y - 1.0, z)));
                    player = Some(objects.len());
                    objects.push(Object::new(ObjectKind::Player, Point::new(x, y, z)));
                    lights.push(LightSource::new(Point::new(x, y, z), lights.len(), true));
                }
                4 => objects.push(Object::new(ObjectKind::Ground, Point::new(x, y - 1.0, z))),
                // Any other code: open ground with an ambient light
                _ => {
                    objects.push(Object::new(ObjectKind::Ground, Point::new(x, y - 1.0, z)));
                    lights.push(LightSource::new(Point::new(x, y, z), lights.len(), false));
                }
            }
        }
    }

    Ok(Scene::from_parts(objects, lights, player))
}

/// Read a grid dimension and check it against the limits
fn read_dimension(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<usize, MapError> {
    let value = next_int(tokens, what)?;
    if value <= 0 {
        return Err(MapError::ValidationError(format!(
            "{} must be positive, got {}",
            what, value
        )));
    }
    let value = value as usize;
    if value > limits::MAX_MAP_SIZE {
        return Err(MapError::ValidationError(format!(
            "{} too large ({} > {})",
            what,
            value,
            limits::MAX_MAP_SIZE
        )));
    }
    Ok(value)
}

/// Pull the next whitespace-separated integer token
fn next_int(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<i32, MapError> {
    let token = tokens
        .next()
        .ok_or_else(|| MapError::ParseError(format!("unexpected end of map reading {}", what)))?;
    token
        .parse()
        .map_err(|_| MapError::ParseError(format!("malformed integer '{}' for {}", token, what)))
}
