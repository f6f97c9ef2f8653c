//! Swipe input from mouse drags
//!
//! A press/release pair of the left mouse button is treated as a swipe. The
//! translation is measured in grid cells, so the horizontal component is
//! divided by the number of terminal columns one cell occupies.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::game::Heading;

/// Map a translation to a heading along its dominant axis.
///
/// Larger horizontal magnitude picks Left/Right, anything else Up/Down
/// (ties included). +y points down. Returns `None` for no movement.
pub fn heading_from_swipe(dx: f32, dy: f32) -> Option<Heading> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Some(Heading::Right)
        } else {
            Some(Heading::Left)
        }
    } else if dy > 0.0 {
        Some(Heading::Down)
    } else {
        Some(Heading::Up)
    }
}

/// A finished press/release pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swipe {
    Steer(Heading),
    /// Released on the cell where it was pressed
    Tap { column: u16, row: u16 },
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    columns_per_cell: u16,
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(columns_per_cell: u16) -> Self {
        Self {
            columns_per_cell: columns_per_cell.max(1),
            origin: None,
        }
    }

    /// Feed a raw mouse event; yields a swipe when the left button is released
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Swipe> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (start_column, start_row) = self.origin.take()?;
                let dx = (f32::from(event.column) - f32::from(start_column))
                    / f32::from(self.columns_per_cell);
                let dy = f32::from(event.row) - f32::from(start_row);

                match heading_from_swipe(dx, dy) {
                    Some(heading) => Some(Swipe::Steer(heading)),
                    None => Some(Swipe::Tap {
                        column: event.column,
                        row: event.row,
                    }),
                }
            }
            _ => None,
        }
    }
}
