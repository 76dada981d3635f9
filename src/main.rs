// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use strokevis::{
    animation::{FramePlan, Sequencer},
    config::{Config, SceneSource},
    draw::{coordinate_draw, grid_draw},
    models::{builtin_scene, scene::parse_hex_color, Point, Scene},
    render::NannouSurface,
};

struct Model {
    // Playback:
    sequencer: Sequencer,
    plan: Option<FramePlan>,

    // Canvas & overlays:
    canvas_width: f32,
    canvas_height: f32,
    auxiliary_line: bool,
    mouse_coordinate: bool,
    grid_segments: Vec<(Point, Point)>,
    mouse_point: Option<Point>,

    // Style:
    background: Rgb<f32>,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Resolve the scene for this session
    let scene = match config.resolve_scene() {
        SceneSource::Builtin(name) => {
            builtin_scene(&name).unwrap_or_else(|| panic!("Unknown built-in scene: {}", name))
        }
        SceneSource::File(path) => Scene::load(path).expect("Failed to load scene file"),
    };
    let items = scene.build_items().expect("Failed to build scene items");

    let background =
        parse_hex_color(&config.style.background).expect("Invalid background color in config");

    // Create window sized to the canvas
    app.new_window()
        .title(config.window.title.clone())
        .size(scene.canvas_width as u32, scene.canvas_height as u32)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .build()
        .unwrap();

    // The grid only depends on the canvas size; compute its dash
    // segments once up front.
    let grid_segments = if scene.auxiliary_line {
        grid_draw::grid_dash_segments(scene.canvas_width, scene.canvas_height)
    } else {
        Vec::new()
    };

    Model {
        sequencer: Sequencer::new(items),
        plan: None,

        canvas_width: scene.canvas_width,
        canvas_height: scene.canvas_height,
        auxiliary_line: scene.auxiliary_line,
        mouse_coordinate: scene.mouse_coordinate,
        grid_segments,
        mouse_point: None,

        background,

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => {
            app.quit();
        }
        _ => (),
    }
}

fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    model.mouse_point = Some(NannouSurface::screen_to_canvas(
        model.canvas_width,
        model.canvas_height,
        position,
    ));
}

fn mouse_exited(_app: &App, model: &mut Model) {
    model.mouse_point = None;
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    // Playback begins on the first update after the window exists.
    model.sequencer.start(app.time);
    model.plan = model.sequencer.tick(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    // Auxiliary grid sits behind the animated content.
    if model.auxiliary_line {
        let mut surface = NannouSurface::new(&draw, model.canvas_width, model.canvas_height);
        grid_draw::draw_grid(&model.grid_segments, &mut surface);
    }

    // Content layer: the current playback frame.
    if let Some(plan) = &model.plan {
        let mut surface = NannouSurface::new(&draw, model.canvas_width, model.canvas_height);
        model.sequencer.render(plan, &mut surface);
    }

    // Coordinate readout on top.
    if model.mouse_coordinate {
        let mut surface = NannouSurface::new(&draw, model.canvas_width, model.canvas_height);
        coordinate_draw::draw_coordinate(
            model.mouse_point,
            model.canvas_width,
            model.canvas_height,
            &mut surface,
        );
    }

    // Visualize FPS (Optional)
    if model.debug_flag {
        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(
                -model.canvas_width / 2.0 + 60.0,
                model.canvas_height / 2.0 - 20.0,
            )
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
