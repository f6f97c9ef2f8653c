/// Direction the snake's head moves on the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Unit vector (dx, dy) in screen coordinates, +y pointing down
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_delta() {
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Down.delta(), (0, 1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }

    #[test]
    fn test_every_delta_is_a_unit_step() {
        for heading in Heading::ALL {
            let (dx, dy) = heading.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{heading:?} is not a unit step");
        }
    }
}
