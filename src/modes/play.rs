//! Interactive terminal play
//!
//! Owns the terminal, the key event stream and the tick timer, and routes
//! everything through the [`GameController`]. Opens on the word list picker
//! unless lists were chosen on the command line.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::controller::{
    GameController, GameEvent, ListSelection, RestartOutcome, TickScheduler, describe_selection,
};
use crate::game::{GameConfig, GameEngine, Phase};
use crate::input::{InputHandler, KeyAction, MenuAction};
use crate::render::{Hud, Renderer};
use crate::words::{DirWordSource, WordListDescriptor, WordSource, load_selected};

/// Settings for a play session
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub game: GameConfig,
    /// Directory holding the index and the list files
    pub lists_dir: PathBuf,
    pub index_file: String,
    /// Lists to start with, skipping the picker
    pub preselected: Vec<String>,
}

pub struct PlayMode {
    source: DirWordSource,
    index: Vec<WordListDescriptor>,
    selected_ids: Vec<String>,
    preselected: Vec<String>,
    controller: GameController,
    renderer: Renderer,
    input_handler: InputHandler,
    picker: Option<ListSelection>,
    notice: Option<String>,
    max_mistakes: u32,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: PlayConfig) -> Self {
        let engine = GameEngine::new(config.game.clone());
        Self::with_engine(config, engine)
    }

    /// Play with a prepared engine, e.g. one with a fixed seed
    pub fn with_engine(config: PlayConfig, engine: GameEngine) -> Self {
        let max_mistakes = config.game.max_mistakes;
        Self {
            source: DirWordSource::new(config.lists_dir, config.index_file),
            index: Vec::new(),
            selected_ids: Vec::new(),
            preselected: config.preselected,
            controller: GameController::new(engine),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            picker: None,
            notice: None,
            max_mistakes,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // The game is useless without an index, so fail before touching the terminal
        self.index = self
            .source
            .index()
            .await
            .with_context(|| format!("Failed to load word lists index from {:?}", self.source.root()))?;
        info!(lists = self.index.len(), "loaded word list index");

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut scheduler = TickScheduler::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        if self.preselected.is_empty() {
            self.open_picker();
        } else {
            let ids = std::mem::take(&mut self.preselected);
            self.load_and_start(ids, &mut scheduler).await;
        }

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        // Only process key press events, not release
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(key, &mut scheduler).await;
                        }
                    }
                }

                // Game logic tick
                _ = scheduler.tick() => {
                    let events = self.controller.on_tick();
                    self.apply_events(events, &mut scheduler);
                }

                // Render frame
                _ = render_timer.tick() => {
                    let summary = describe_selection(&self.index, &self.selected_ids);
                    let hud = Hud {
                        max_mistakes: self.max_mistakes,
                        lists_summary: &summary,
                        picker: self.picker.as_ref(),
                        notice: self.notice.as_deref(),
                    };
                    let state = self.controller.state();
                    let renderer = &self.renderer;
                    terminal.draw(|frame| {
                        renderer.render(frame, state, &hud);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        scheduler.cancel();
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent, scheduler: &mut TickScheduler) {
        if self.picker.is_some() {
            let action = self.input_handler.handle_menu_key_event(key);
            self.handle_menu_action(action, scheduler).await;
            return;
        }

        let action = self.input_handler.handle_key_event(key);

        // A notice stays up until the player acknowledges it
        if self.notice.take().is_some() {
            if action == KeyAction::Quit {
                self.should_quit = true;
            } else {
                self.open_picker();
            }
            return;
        }

        match action {
            KeyAction::Steer(direction) => self.controller.on_direction_input(direction),
            KeyAction::Restart => self.restart(scheduler),
            KeyAction::ChangeLists => {
                if !self.controller.phase().is_running() {
                    self.open_picker();
                }
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    async fn handle_menu_action(&mut self, action: MenuAction, scheduler: &mut TickScheduler) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        match action {
            MenuAction::Up => picker.move_up(),
            MenuAction::Down => picker.move_down(),
            MenuAction::Toggle => picker.toggle(),
            MenuAction::Confirm => {
                if let Ok(ids) = picker.confirm() {
                    self.load_and_start(ids, scheduler).await;
                }
            }
            MenuAction::Cancel => {
                if picker.can_cancel() {
                    self.picker = None;
                }
            }
            MenuAction::Quit => self.should_quit = true,
            MenuAction::None => {}
        }
    }

    fn open_picker(&mut self) {
        self.picker = Some(ListSelection::new(
            self.index.clone(),
            self.selected_ids.clone(),
            self.controller.has_words(),
        ));
    }

    /// Load the chosen lists and start a game on them.
    ///
    /// On failure the picker stays (or opens) with an error.
    async fn load_and_start(&mut self, ids: Vec<String>, scheduler: &mut TickScheduler) {
        let words = match load_selected(&self.source, &self.index, &ids).await {
            Ok(words) => words,
            Err(err) => {
                warn!(error = %err, "no words loaded");
                if self.picker.is_none() {
                    self.selected_ids = ids;
                    self.open_picker();
                }
                if let Some(picker) = self.picker.as_mut() {
                    picker.report_no_words();
                }
                return;
            }
        };

        info!(lists = ?ids, words = words.len(), "word lists loaded");
        self.selected_ids = ids;
        self.picker = None;

        match self.controller.start(words) {
            Ok(events) => self.apply_events(events, scheduler),
            Err(err) => {
                warn!(error = %err, "cannot start game");
                scheduler.cancel();
                self.notice = Some(format!("Cannot start a game: {err}"));
            }
        }
    }

    fn restart(&mut self, scheduler: &mut TickScheduler) {
        match self.controller.restart() {
            Ok(RestartOutcome::Started(events)) => self.apply_events(events, scheduler),
            Ok(RestartOutcome::NeedsLists) => self.open_picker(),
            Ok(RestartOutcome::Ignored) => {}
            Err(err) => {
                warn!(error = %err, "cannot restart game");
                self.notice = Some(format!("Cannot start a game: {err}"));
            }
        }
    }

    fn apply_events(&mut self, events: Vec<GameEvent>, scheduler: &mut TickScheduler) {
        for event in events {
            match event {
                GameEvent::SpeedChanged(speed_ms) => scheduler.reschedule_ms(speed_ms),
                GameEvent::GameOver { reason, score } => {
                    scheduler.cancel();
                    info!(%reason, score, "game over");
                }
                GameEvent::Won { score, mistakes } => {
                    scheduler.cancel();
                    info!(score, mistakes, "game won");
                }
                other => debug!(event = ?other, "game event"),
            }
        }

        if self.controller.phase() != Phase::Running {
            scheduler.cancel();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
