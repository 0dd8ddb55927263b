mod cell;
mod grid;
mod rules;
pub mod color;

pub use cell::Cell;
pub use color::{Rgb, lerp};
pub use grid::{Grid, wrap};
pub use rules::{Band, next_state};
