pub mod gesture;
pub mod handler;

pub use gesture::{Swipe, SwipeTracker, heading_from_swipe};
pub use handler::{InputHandler, KeyAction};
