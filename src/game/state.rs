use std::fmt;

use super::action::Direction;
use super::word::WordEntry;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// A single-segment snake at rest
    pub fn new(head: Position) -> Self {
        Self {
            body: vec![head],
            direction: Direction::None,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "snake needs at least one segment");
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Move one cell in the current direction, dropping the tail
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Lengthen by one segment stacked on the current tail
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// A letter tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterOption {
    pub letter: char,
    pub is_correct: bool,
    pub position: Position,
}

/// Why a game ended in defeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    Mistakes,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::SelfCollision => "self",
            Self::Mistakes => "mistakes",
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    GameOver(GameOverReason),
    Won,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver(_) | Phase::Won)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Current tiles, correct option first
    pub options: Vec<LetterOption>,
    /// Words for this game, in play order
    pub words: Vec<WordEntry>,
    pub tile_count: usize,
    pub score: u32,
    pub mistakes: u32,
    pub word_index: usize,
    pub completed_words: usize,
    pub speed_ms: u64,
    pub phase: Phase,
}

impl GameState {
    /// Create a running game state with no letter tiles placed yet
    pub fn new(snake: Snake, words: Vec<WordEntry>, tile_count: usize, speed_ms: u64) -> Self {
        Self {
            snake,
            options: Vec::new(),
            words,
            tile_count,
            score: 0,
            mistakes: 0,
            word_index: 0,
            completed_words: 0,
            speed_ms,
            phase: Phase::Running,
        }
    }

    /// The empty board shown before any game starts
    pub fn idle(snake: Snake, tile_count: usize, speed_ms: u64) -> Self {
        Self {
            phase: Phase::Idle,
            ..Self::new(snake, Vec::new(), tile_count, speed_ms)
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let n = self.tile_count as i32;
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        self.words.get(self.word_index)
    }

    pub fn option_at(&self, pos: Position) -> Option<&LetterOption> {
        self.options.iter().find(|option| option.position == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::None), pos);
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), snake.tail());
        assert_eq!(snake.direction, Direction::None);
        assert!(snake.body_segments().is_empty());
    }

    #[test]
    fn test_snake_advance_keeps_length() {
        let mut snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );
        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_snake_grow_duplicates_tail() {
        let mut snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5)],
            Direction::Right,
        );
        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(4, 5));
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(Snake::new(Position::new(5, 5)), Vec::new(), 20, 200);

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_phase_predicates() {
        assert!(!Phase::Idle.is_running());
        assert!(!Phase::Idle.is_terminal());
        assert!(Phase::Running.is_running());
        assert!(Phase::Won.is_terminal());
        assert!(Phase::GameOver(GameOverReason::Wall).is_terminal());
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(GameOverReason::Wall.to_string(), "wall");
        assert_eq!(GameOverReason::SelfCollision.to_string(), "self");
        assert_eq!(GameOverReason::Mistakes.to_string(), "mistakes");
    }
}
