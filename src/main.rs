//! Sokoban 3D demo
//!
//! Loads a plain-text tile map and renders it as a static 3D scene:
//! walls, ground tiles, boxes, a player sphere, and the point lights the
//! map placed. There is no game logic; the left/right arrow keys circle
//! the camera around the player in 90-degree steps.

mod math;
mod render;
mod scene;

use log::{debug, info};
use macroquad::prelude::*;
use std::process;

use render::{DrawBackend, GeometryBackend, TraceBackend};
use scene::{load_map, Facing, Scene};

const SCREEN_WIDTH: i32 = 1280;
const SCREEN_HEIGHT: i32 = 720;

fn window_conf() -> Conf {
    Conf {
        window_title: String::from("Sokoban"),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Parsed command line: the map path and the backend choice
struct Args {
    map_path: String,
    trace: bool,
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Option<Args> {
    let mut map_path = None;
    let mut trace = false;
    for arg in args {
        match arg.as_str() {
            "--trace" => trace = true,
            _ if map_path.is_none() => map_path = Some(arg),
            _ => return None,
        }
    }
    map_path.map(|map_path| Args { map_path, trace })
}

/// Load the scene or exit; the render loop never sees a broken scene
fn load_or_exit(args: &Args) -> Scene {
    let scene = match load_map(&args.map_path) {
        Ok(scene) => scene,
        Err(error) => {
            eprintln!("failed to load map '{}': {}", args.map_path, error);
            process::exit(1);
        }
    };
    if scene.player_position().is_none() {
        eprintln!(
            "map '{}' has no player tile; nothing to anchor the camera to",
            args.map_path
        );
        process::exit(1);
    }
    info!(
        "loaded map '{}': {} objects, {} lights",
        args.map_path,
        scene.objects().len(),
        scene.lights().len()
    );
    scene
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let Some(args) = parse_args(std::env::args().skip(1)) else {
        println!(
            "usage: {} <map-file> [--trace]",
            env!("CARGO_PKG_NAME")
        );
        process::exit(1);
    };

    // Trace mode logs every draw call, so open the logger up to debug there
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.trace { "debug" } else { "info" }),
    )
    .init();

    let scene = load_or_exit(&args);

    let mut backend: Box<dyn DrawBackend> = if args.trace {
        Box::new(TraceBackend::new())
    } else {
        Box::new(GeometryBackend::new())
    };
    let mut facing = Facing::default();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Left) {
            facing = facing.turn_left();
            debug!("camera facing {}", facing.index());
        }
        if is_key_pressed(KeyCode::Right) {
            facing = facing.turn_right();
            debug!("camera facing {}", facing.index());
        }

        clear_background(WHITE);

        // View transform first, from the current facing and player position
        if let (Some(eye), Some(look_at)) = (scene.camera_eye(facing), scene.camera_look_at(facing))
        {
            set_camera(&Camera3D {
                position: vec3(eye.x, eye.y, eye.z),
                target: vec3(look_at.x, look_at.y, look_at.z),
                up: vec3(0.0, 1.0, 0.0),
                ..Default::default()
            });
        }

        scene.render(backend.as_mut());

        next_frame().await;
    }
}
