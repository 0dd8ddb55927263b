use macroquad::prelude::*;

use crate::application::Engine;
use crate::domain::Rgb;

/// Draw every living cell as a filled square of `cell_scale` pixels at its
/// committed color. Dead cells are black, same as the cleared background,
/// so they are skipped.
pub fn draw_grid(engine: &Engine, cell_scale: f32) {
    for (x, y, cell) in engine.grid().iter_cells() {
        if !cell.is_alive() {
            continue;
        }

        let Rgb { r, g, b } = cell.color();
        draw_rectangle(
            x as f32 * cell_scale,
            y as f32 * cell_scale,
            cell_scale,
            cell_scale,
            Color::from_rgba(r, g, b, 255),
        );
    }
}
