pub mod renderer;

pub use renderer::{BoardLayout, CELL_WIDTH, Renderer};
