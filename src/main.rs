use macroquad::prelude::*;
use timed_life::{Engine, rendering};

// Presentation configuration. The engine only ever sees the derived grid
// size; window and pacing numbers stay on the host side.
const WINDOW_WIDTH: i32 = 640;
const WINDOW_HEIGHT: i32 = 480;
const CELL_SCALE: u32 = 5;
const STEPS_PER_SECOND: f32 = 60.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "game of life".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut engine = Engine::new(
        WINDOW_WIDTH as u32 / CELL_SCALE,
        WINDOW_HEIGHT as u32 / CELL_SCALE,
    );

    let step_interval = 1.0 / STEPS_PER_SECOND;
    let mut step_timer = 0.0;

    loop {
        step_timer += get_frame_time();
        if step_timer >= step_interval {
            engine.step();
            engine.commit();
            step_timer = 0.0;
        }

        clear_background(BLACK);
        rendering::draw_grid(&engine, CELL_SCALE as f32);

        next_frame().await;
    }
}
