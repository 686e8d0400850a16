use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{
    action::Direction,
    config::GameConfig,
    spawn::{SpawnError, SpawnPlanner},
    state::{GameOverReason, GameState, Phase, Position, Snake},
    word::WordEntry,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot start a game without words")]
    EmptyWordList,
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Continue,
    AteCorrect,
    AteWrong,
    HitWall,
    HitSelf,
    /// The wrong letter that used up the last allowed mistake
    TooManyMistakes,
    Won,
}

impl TickEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::HitWall | Self::HitSelf | Self::TooManyMistakes | Self::Won
        )
    }

    fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::GameOver(GameOverReason::Wall) => Self::HitWall,
            Phase::GameOver(GameOverReason::SelfCollision) => Self::HitSelf,
            Phase::GameOver(GameOverReason::Mistakes) => Self::TooManyMistakes,
            Phase::Won => Self::Won,
            Phase::Idle | Phase::Running => Self::Continue,
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    planner: SpawnPlanner,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a fixed seed, for reproducible games
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            planner: SpawnPlanner::new(config.spawn_attempts),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board shown before the first game
    pub fn idle_state(&self) -> GameState {
        GameState::idle(
            self.starting_snake(),
            self.config.tile_count,
            self.config.initial_speed_ms,
        )
    }

    /// Start a fresh game over `words`, shuffled into a new order
    pub fn reset(&mut self, mut words: Vec<WordEntry>) -> Result<GameState, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        words.shuffle(&mut self.rng);

        let mut state = GameState::new(
            self.starting_snake(),
            words,
            self.config.tile_count,
            self.config.initial_speed_ms,
        );
        self.spawn_options(&mut state)?;

        info!(
            words = state.words.len(),
            tile_count = state.tile_count,
            "game started"
        );
        Ok(state)
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, direction: Direction) -> TickEvent {
        if !state.phase.is_running() {
            return TickEvent::for_phase(state.phase);
        }

        state.snake.direction = state.snake.direction.turned(direction);
        state.snake.advance();
        let head = state.snake.head();

        if !state.is_in_bounds(head) {
            return self.finish(state, GameOverReason::Wall);
        }
        if state.snake.collides_with_body(head) {
            return self.finish(state, GameOverReason::SelfCollision);
        }

        // Options are stored correct first, so a double overlap resolves to it
        match state.option_at(head).map(|option| option.is_correct) {
            Some(true) => self.eat_correct(state),
            Some(false) => self.eat_wrong(state),
            None => TickEvent::Continue,
        }
    }

    fn eat_correct(&mut self, state: &mut GameState) -> TickEvent {
        state.score += 1;
        state.snake.grow();
        state.completed_words += 1;

        if state.completed_words >= state.words.len() {
            info!(score = state.score, mistakes = state.mistakes, "all words completed");
            state.phase = Phase::Won;
            return TickEvent::Won;
        }

        state.word_index = (state.word_index + 1) % state.words.len();
        if state.speed_ms > self.config.min_speed_ms {
            state.speed_ms = state
                .speed_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_speed_ms);
        }
        debug!(
            score = state.score,
            word_index = state.word_index,
            speed_ms = state.speed_ms,
            "correct letter"
        );

        self.respawn_or_win(state, TickEvent::AteCorrect)
    }

    fn eat_wrong(&mut self, state: &mut GameState) -> TickEvent {
        state.mistakes += 1;
        debug!(mistakes = state.mistakes, "wrong letter");

        if state.mistakes >= self.config.max_mistakes {
            return self.finish(state, GameOverReason::Mistakes);
        }

        self.respawn_or_win(state, TickEvent::AteWrong)
    }

    /// A board with no room left for tiles cannot continue, so it counts as a win
    fn respawn_or_win(&mut self, state: &mut GameState, event: TickEvent) -> TickEvent {
        match self.spawn_options(state) {
            Ok(()) => event,
            Err(err) => {
                warn!(error = %err, "cannot place letter tiles, ending game as won");
                state.options.clear();
                state.phase = Phase::Won;
                TickEvent::Won
            }
        }
    }

    fn finish(&self, state: &mut GameState, reason: GameOverReason) -> TickEvent {
        info!(%reason, score = state.score, mistakes = state.mistakes, "game over");
        state.phase = Phase::GameOver(reason);
        TickEvent::for_phase(state.phase)
    }

    fn spawn_options(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let Some(entry) = state.words.get(state.word_index) else {
            return Err(GameError::EmptyWordList);
        };
        let options =
            self.planner
                .plan_options(&mut self.rng, entry, &state.snake, state.tile_count)?;
        state.options = options.to_vec();
        Ok(())
    }

    fn starting_snake(&self) -> Snake {
        let (x, y) = self.config.center();
        Snake::new(Position::new(x, y))
    }
}
