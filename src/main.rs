//! Replay an input-event script through a trackball and dump the resulting
//! camera matrices as JSON.
//!
//! ```text
//! quatcam drag.toml > camera.json
//! ```
//!
//! A script holds an optional `window = [width, height]`, an optional
//! `[options]` table and an `[[events]]` list:
//!
//! ```toml
//! window = [800.0, 600.0]
//!
//! [options.trackball]
//! distance = 5.0
//!
//! [[events]]
//! type = "cursor_moved"
//! x = 400.0
//! y = 300.0
//!
//! [[events]]
//! type = "mouse_button"
//! button = "left"
//! pressed = true
//! ```

use std::io::Write;
use std::path::Path;

use quatcam::camera::{CameraUniform, Trackball};
use quatcam::error::QuatcamError;
use quatcam::input::{InputEvent, InputProcessor};
use quatcam::math::Quaternion;
use quatcam::options::Options;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Script {
    window: Option<[f32; 2]>,
    #[serde(default)]
    options: Options,
    #[serde(default)]
    events: Vec<InputEvent>,
}

#[derive(Debug, Serialize)]
struct Report {
    events: usize,
    commands: usize,
    orientation: Quaternion,
    distance: f32,
    camera_position: [f32; 3],
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

fn parse_script(text: &str) -> Result<Script, QuatcamError> {
    toml::from_str(text).map_err(|e| QuatcamError::Script(e.to_string()))
}

fn load_script(path: &Path) -> Result<Script, QuatcamError> {
    parse_script(&std::fs::read_to_string(path)?)
}

fn replay(script: Script) -> Report {
    let mut trackball = Trackball::from_options(&script.options.trackball);
    let mut processor =
        InputProcessor::with_key_bindings(script.options.keybindings);

    let window = script.window.map(|[width, height]| InputEvent::Resized {
        width,
        height,
    });
    let events = script.events.len();
    let mut commands = 0;
    for event in window.into_iter().chain(script.events) {
        if let Some(cmd) = processor.handle_event(event) {
            log::trace!("{cmd:?}");
            cmd.apply(&mut trackball);
            commands += 1;
        }
    }
    log::info!("replayed {events} events into {commands} commands");

    let mut uniform = CameraUniform::new();
    uniform.update(&trackball, processor.window_size());
    Report {
        events,
        commands,
        orientation: trackball.orientation(),
        distance: trackball.distance(),
        camera_position: uniform.w_camera_position,
        view: uniform.view,
        projection: uniform.projection,
    }
}

fn run(path: &Path) -> Result<(), QuatcamError> {
    let report = replay(load_script(path)?);
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| QuatcamError::Script(e.to_string()))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn main() {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            log::error!("Usage: quatcam <script.toml>");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(Path::new(&path)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
