use super::heading::Heading;

/// A cell on the game grid, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell one step along `heading`
    pub fn stepped(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake, head first. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Create a straight snake whose tail trails behind `head` opposite to `heading`
    pub fn new(head: Cell, heading: Heading, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = heading.delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self { body }
    }

    /// Build a snake from explicit cells, head first. Returns `None` for an empty list.
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { body: cells })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepend `new_head`; the tail stays only when growing
    pub fn advance_to(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built by `new` or `from_cells`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head ran into the snake's own body
    SelfCollision,
}

/// Whether the simulation still accepts steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Running => f.write_str("Running"),
            Status::Terminated => f.write_str("Game Over"),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub heading: Heading,
    pub terminated: bool,
    pub grid_size: usize,
}

impl GameState {
    /// A running game with the given snake and food
    pub fn new(snake: Snake, food: Cell, heading: Heading, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            heading,
            terminated: false,
            grid_size,
        }
    }

    pub fn status(&self) -> Status {
        if self.terminated {
            Status::Terminated
        } else {
            Status::Running
        }
    }

    /// Check if a cell lies within [0, grid_size) on both axes
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        let size = self.grid_size as i32;
        cell.x >= 0 && cell.x < size && cell.y >= 0 && cell.y < size
    }
}
