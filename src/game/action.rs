/// Direction the snake is heading.
///
/// `None` is the resting heading a fresh snake starts with; it never moves
/// the head and never blocks a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    /// Resolve a requested turn against the current heading.
    ///
    /// Returns the heading the snake should take: `requested` when the turn
    /// is allowed, `self` when it is `None` or a reversal.
    pub fn turned(&self, requested: Direction) -> Direction {
        if requested == Direction::None || self.is_opposite(requested) {
            *self
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::None,
    ];

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::None.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::None.delta(), (0, 0));
    }

    #[test]
    fn test_reversal_never_changes_delta() {
        for current in ALL {
            for requested in ALL {
                let next = current.turned(requested);
                if current.is_opposite(requested) {
                    assert_eq!(next.delta(), current.delta());
                }
            }
        }
    }

    #[test]
    fn test_none_request_keeps_heading() {
        for current in ALL {
            assert_eq!(current.turned(Direction::None), current);
        }
    }

    #[test]
    fn test_any_turn_allowed_from_rest() {
        assert_eq!(Direction::None.turned(Direction::Left), Direction::Left);
        assert_eq!(Direction::None.turned(Direction::Down), Direction::Down);
    }
}
