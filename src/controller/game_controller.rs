use std::mem;

use tracing::{debug, info};

use crate::game::{
    Direction, GameEngine, GameError, GameOverReason, GameState, Phase, TickEvent, WordEntry,
};

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    MistakesChanged(u32),
    WordChanged(String),
    /// New tick interval in milliseconds; the timer must be rescheduled
    SpeedChanged(u64),
    GameOver { reason: GameOverReason, score: u32 },
    Won { score: u32, mistakes: u32 },
}

/// Result of asking for a new game from a finished one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartOutcome {
    Started(Vec<GameEvent>),
    /// No words are loaded; list selection has to happen first
    NeedsLists,
    /// A game is still running
    Ignored,
}

/// Owns the live game and drives it one tick at a time.
pub struct GameController {
    engine: GameEngine,
    state: GameState,
    words: Vec<WordEntry>,
    pending_direction: Direction,
}

impl GameController {
    pub fn new(engine: GameEngine) -> Self {
        let state = engine.idle_state();
        Self {
            engine,
            state,
            words: Vec::new(),
            pending_direction: Direction::None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn has_words(&self) -> bool {
        !self.words.is_empty()
    }

    pub fn speed_ms(&self) -> u64 {
        self.state.speed_ms
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Begin a new game over `words`, which are kept for later restarts
    pub fn start(&mut self, words: Vec<WordEntry>) -> Result<Vec<GameEvent>, GameError> {
        self.state = self.engine.reset(words.clone())?;
        self.words = words;
        self.pending_direction = Direction::None;

        let mut events = vec![
            GameEvent::ScoreChanged(self.state.score),
            GameEvent::MistakesChanged(self.state.mistakes),
        ];
        if let Some(entry) = self.state.current_word() {
            events.push(GameEvent::WordChanged(entry.word.clone()));
        }
        events.push(GameEvent::SpeedChanged(self.state.speed_ms));
        Ok(events)
    }

    /// Start over with the words already loaded
    pub fn restart(&mut self) -> Result<RestartOutcome, GameError> {
        if self.state.phase.is_running() {
            return Ok(RestartOutcome::Ignored);
        }
        if self.words.is_empty() {
            return Ok(RestartOutcome::NeedsLists);
        }
        info!(phase = ?self.state.phase, "restarting");
        let words = self.words.clone();
        self.start(words).map(RestartOutcome::Started)
    }

    /// Same as [`restart`](Self::restart), offered from the victory screen
    pub fn play_again(&mut self) -> Result<RestartOutcome, GameError> {
        self.restart()
    }

    /// Queue a turn for the next tick.
    ///
    /// Ignored unless a game is running, and ignored when it would reverse
    /// the current heading. Only the last accepted turn before a tick counts.
    pub fn on_direction_input(&mut self, direction: Direction) {
        if !self.state.phase.is_running() || direction == Direction::None {
            return;
        }
        if self.state.direction().is_opposite(direction) {
            debug!(?direction, current = ?self.state.direction(), "ignoring reversal");
            return;
        }
        self.pending_direction = direction;
    }

    /// Advance the game by one tick and report what changed
    pub fn on_tick(&mut self) -> Vec<GameEvent> {
        if !self.state.phase.is_running() {
            return Vec::new();
        }

        let direction = mem::take(&mut self.pending_direction);
        let (score, mistakes, word_index, speed_ms) = (
            self.state.score,
            self.state.mistakes,
            self.state.word_index,
            self.state.speed_ms,
        );

        let tick = self.engine.step(&mut self.state, direction);

        let mut events = Vec::new();
        if self.state.score != score {
            events.push(GameEvent::ScoreChanged(self.state.score));
        }
        if self.state.mistakes != mistakes {
            events.push(GameEvent::MistakesChanged(self.state.mistakes));
        }

        match tick {
            TickEvent::HitWall | TickEvent::HitSelf | TickEvent::TooManyMistakes => {
                if let Phase::GameOver(reason) = self.state.phase {
                    events.push(GameEvent::GameOver {
                        reason,
                        score: self.state.score,
                    });
                }
            }
            TickEvent::Won => events.push(GameEvent::Won {
                score: self.state.score,
                mistakes: self.state.mistakes,
            }),
            TickEvent::Continue | TickEvent::AteCorrect | TickEvent::AteWrong => {
                if self.state.word_index != word_index {
                    if let Some(entry) = self.state.current_word() {
                        events.push(GameEvent::WordChanged(entry.word.clone()));
                    }
                }
                if self.state.speed_ms != speed_ms {
                    events.push(GameEvent::SpeedChanged(self.state.speed_ms));
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, LetterOption, Position, Snake, SpawnError};

    fn words(n: usize) -> Vec<WordEntry> {
        (0..n)
            .map(|i| WordEntry::new(format!("w_rd{i}"), 'o', 'a'))
            .collect()
    }

    fn controller() -> GameController {
        GameController::new(GameEngine::with_seed(GameConfig::default(), 42))
    }

    /// Put a tile of the given kind right in front of the head
    fn place_ahead(ctl: &mut GameController, is_correct: bool) {
        let state = &mut ctl.state;
        let heading = if state.direction() == Direction::None {
            Direction::Right
        } else {
            state.direction()
        };
        state.snake.direction = heading;
        let ahead = state.snake.head().moved_in_direction(heading);
        let elsewhere = Position::new(1, 1);
        let (correct, incorrect) = if is_correct {
            (ahead, elsewhere)
        } else {
            (elsewhere, ahead)
        };
        state.options = vec![
            LetterOption {
                letter: 'o',
                is_correct: true,
                position: correct,
            },
            LetterOption {
                letter: 'a',
                is_correct: false,
                position: incorrect,
            },
        ];
    }

    #[test]
    fn test_starts_idle() {
        let ctl = controller();
        assert_eq!(ctl.phase(), Phase::Idle);
        assert!(!ctl.has_words());
    }

    #[test]
    fn test_tick_ignored_when_idle() {
        let mut ctl = controller();
        let before = ctl.state().clone();
        assert!(ctl.on_tick().is_empty());
        assert_eq!(ctl.state(), &before);
    }

    #[test]
    fn test_start_emits_initial_events() {
        let mut ctl = controller();
        let events = ctl.start(words(3)).unwrap();

        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(events[0], GameEvent::ScoreChanged(0));
        assert_eq!(events[1], GameEvent::MistakesChanged(0));
        assert!(matches!(events[2], GameEvent::WordChanged(_)));
        assert_eq!(events[3], GameEvent::SpeedChanged(200));
    }

    #[test]
    fn test_start_without_words_fails() {
        let mut ctl = controller();
        assert_eq!(ctl.start(Vec::new()), Err(GameError::EmptyWordList));
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_fails_when_tiles_do_not_fit() {
        let mut ctl = GameController::new(GameEngine::with_seed(GameConfig::new(3), 1));

        assert!(matches!(
            ctl.start(words(2)),
            Err(GameError::Spawn(SpawnError::Exhausted { tile_count: 3 }))
        ));
        assert_eq!(ctl.phase(), Phase::Idle);
        assert!(!ctl.has_words());
        assert!(ctl.on_tick().is_empty());
    }

    #[test]
    fn test_direction_input_ignored_unless_running() {
        let mut ctl = controller();
        ctl.on_direction_input(Direction::Up);
        assert_eq!(ctl.pending_direction, Direction::None);
    }

    #[test]
    fn test_reversal_rejected_at_input() {
        let mut ctl = controller();
        ctl.start(words(3)).unwrap();
        ctl.state.snake.direction = Direction::Right;

        ctl.on_direction_input(Direction::Left);
        assert_eq!(ctl.pending_direction, Direction::None);

        ctl.on_direction_input(Direction::Up);
        assert_eq!(ctl.pending_direction, Direction::Up);
    }

    #[test]
    fn test_two_inputs_in_one_tick_cannot_reverse() {
        let mut ctl = controller();
        ctl.start(words(3)).unwrap();
        ctl.state.snake = Snake::from_segments(vec![Position::new(10, 10)], Direction::Right);
        ctl.state.options = vec![];

        // Up is accepted, Left is still a reversal of the current heading
        ctl.on_direction_input(Direction::Up);
        ctl.on_direction_input(Direction::Left);
        ctl.on_tick();

        assert_eq!(ctl.state().direction(), Direction::Up);
        assert_eq!(ctl.state().snake.head(), Position::new(10, 9));
    }

    #[test]
    fn test_pending_direction_consumed_by_tick() {
        let mut ctl = controller();
        ctl.start(words(3)).unwrap();
        ctl.on_direction_input(Direction::Down);
        ctl.on_tick();
        assert_eq!(ctl.pending_direction, Direction::None);
        assert_eq!(ctl.state().direction(), Direction::Down);
    }

    #[test]
    fn test_correct_letter_events() {
        let mut ctl = controller();
        ctl.start(words(3)).unwrap();
        place_ahead(&mut ctl, true);

        let events = ctl.on_tick();

        assert_eq!(events[0], GameEvent::ScoreChanged(1));
        assert!(matches!(events[1], GameEvent::WordChanged(_)));
        assert_eq!(events[2], GameEvent::SpeedChanged(198));
        assert_eq!(ctl.speed_ms(), 198);
    }

    #[test]
    fn test_wall_ends_game() {
        let mut ctl = controller();
        ctl.start(words(3)).unwrap();
        ctl.state.snake = Snake::from_segments(vec![Position::new(0, 10)], Direction::Left);

        let events = ctl.on_tick();

        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                reason: GameOverReason::Wall,
                score: 0
            }]
        );
        assert_eq!(ctl.phase(), Phase::GameOver(GameOverReason::Wall));
        assert!(ctl.on_tick().is_empty());
    }

    #[test]
    fn test_three_mistakes_end_game() {
        let mut ctl = controller();
        ctl.start(words(3)).unwrap();

        for expected in 1..=2 {
            place_ahead(&mut ctl, false);
            let events = ctl.on_tick();
            assert_eq!(events, vec![GameEvent::MistakesChanged(expected)]);
            assert_eq!(ctl.phase(), Phase::Running);
        }

        place_ahead(&mut ctl, false);
        let events = ctl.on_tick();

        assert_eq!(
            events,
            vec![
                GameEvent::MistakesChanged(3),
                GameEvent::GameOver {
                    reason: GameOverReason::Mistakes,
                    score: 0
                }
            ]
        );
    }

    #[test]
    fn test_single_word_game_is_won() {
        let mut ctl = controller();
        ctl.start(words(1)).unwrap();
        place_ahead(&mut ctl, true);

        let events = ctl.on_tick();

        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged(1),
                GameEvent::Won {
                    score: 1,
                    mistakes: 0
                }
            ]
        );
        assert_eq!(ctl.phase(), Phase::Won);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut ctl = controller();
        ctl.start(words(2)).unwrap();
        ctl.state.phase = Phase::GameOver(GameOverReason::SelfCollision);
        ctl.state.score = 5;

        let outcome = ctl.restart().unwrap();

        assert!(matches!(outcome, RestartOutcome::Started(_)));
        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(ctl.state().score, 0);
        assert_eq!(ctl.state().words.len(), 2);
    }

    #[test]
    fn test_restart_while_running_ignored() {
        let mut ctl = controller();
        ctl.start(words(2)).unwrap();
        assert_eq!(ctl.restart().unwrap(), RestartOutcome::Ignored);
    }

    #[test]
    fn test_play_again_without_words_needs_lists() {
        let mut ctl = controller();
        assert_eq!(ctl.play_again().unwrap(), RestartOutcome::NeedsLists);
    }
}
