use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::controller::ListSelection;
use crate::game::{Direction, GameOverReason, GameState, Phase, Position};

const BOARD_COLOR: Color = Color::Rgb(34, 34, 34);
const TILE_COLOR: Color = Color::Rgb(255, 140, 0);
const HEAD_COLOR: Color = Color::Rgb(0, 255, 0);

/// Everything besides the game state that shows up on screen
pub struct Hud<'a> {
    pub max_mistakes: u32,
    /// "Selected lists: ..." line
    pub lists_summary: &'a str,
    /// Open word list picker, drawn over the board
    pub picker: Option<&'a ListSelection>,
    /// Shown in place of the picker while lists are loading or failed to load
    pub notice: Option<&'a str>,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, hud: &Hud<'_>) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Word and stats
                Constraint::Min(0),    // Board
                Constraint::Length(2), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(state, hud), chunks[0]);

        let board_area = chunks[1];
        frame.render_widget(self.render_grid(state), board_area);

        if let Some(picker) = hud.picker {
            let area = centered(board_area, 60, 16);
            frame.render_widget(Clear, area);
            frame.render_widget(self.render_picker(picker), area);
        } else if let Some(notice) = hud.notice {
            let area = centered(board_area, 50, 5);
            frame.render_widget(Clear, area);
            frame.render_widget(self.render_notice(notice), area);
        } else {
            match state.phase {
                Phase::GameOver(reason) => {
                    let area = centered(board_area, 44, 9);
                    frame.render_widget(Clear, area);
                    frame.render_widget(self.render_game_over(state, reason, hud), area);
                }
                Phase::Won => {
                    let area = centered(board_area, 44, 9);
                    frame.render_widget(Clear, area);
                    frame.render_widget(self.render_win(state, hud), area);
                }
                Phase::Idle | Phase::Running => {}
            }
        }

        frame.render_widget(self.render_controls(hud), chunks[2]);
    }

    fn render_header(&self, state: &GameState, hud: &Hud<'_>) -> Paragraph<'_> {
        let word = match state.phase {
            Phase::Won => "VICTORY!".to_string(),
            _ => state
                .current_word()
                .map(|entry| entry.word.clone())
                .unwrap_or_default(),
        };

        let text = vec![
            Line::from(Span::styled(
                word,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Mistakes: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{}/{}", state.mistakes, hud.max_mistakes),
                    Style::default().fg(Color::White),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(state.tile_count);

        for y in 0..state.tile_count {
            let spans: Vec<Span> = (0..state.tile_count)
                .map(|x| self.render_cell(state, Position::new(x as i32, y as i32)))
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Word Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_cell(&self, state: &GameState, pos: Position) -> Span<'static> {
        // Snake is drawn over tiles
        if let Some(index) = state.snake.body.iter().position(|segment| *segment == pos) {
            if index == 0 {
                return Span::styled(
                    eyes(state.direction()),
                    Style::default().bg(HEAD_COLOR).fg(Color::Black),
                );
            }
            return Span::styled("  ", Style::default().bg(segment_color(index)));
        }

        if let Some(option) = state.option_at(pos) {
            return Span::styled(
                format!("{:^2}", option.letter),
                Style::default()
                    .bg(TILE_COLOR)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        }

        Span::styled("  ", Style::default().bg(BOARD_COLOR))
    }

    fn render_game_over(
        &self,
        state: &GameState,
        reason: GameOverReason,
        hud: &Hud<'_>,
    ) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(reason_message(reason, hud.max_mistakes)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            restart_hint("restart"),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_win(&self, state: &GameState, hud: &Hud<'_>) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "VICTORY!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Your final score: {}", state.score)),
            Line::from(format!(
                "Mistakes made: {}/{}",
                state.mistakes, hud.max_mistakes
            )),
            Line::from(""),
            restart_hint("play again"),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_picker<'a>(&self, picker: &'a ListSelection) -> Paragraph<'a> {
        let mut text = Vec::new();

        for (i, list) in picker.lists().iter().enumerate() {
            let mark = if picker.is_selected(&list.id) { "[x]" } else { "[ ]" };
            let mut style = Style::default().fg(Color::White);
            if i == picker.cursor() {
                style = style.fg(Color::Black).bg(Color::Cyan);
            }
            text.push(Line::from(vec![
                Span::styled(format!("{mark} {}", list.name), style),
                Span::styled(
                    format!("  {}", list.description),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }

        if picker.lists().is_empty() {
            text.push(Line::from(Span::styled(
                "No word lists available",
                Style::default().fg(Color::Gray),
            )));
        }

        text.push(Line::from(""));
        if let Some(error) = picker.error() {
            text.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )));
        }

        let mut help = vec![
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" select | "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" start"),
        ];
        if picker.can_cancel() {
            help.push(Span::raw(" | "));
            help.push(Span::styled("Esc", Style::default().fg(Color::Cyan)));
            help.push(Span::raw(" cancel"));
        }
        text.push(Line::from(help));

        Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Select Word Lists "),
        )
    }

    fn render_notice<'a>(&self, notice: &'a str) -> Paragraph<'a> {
        Paragraph::new(vec![Line::from(""), Line::from(notice)])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_controls<'a>(&self, hud: &Hud<'a>) -> Paragraph<'a> {
        let text = vec![
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("L", Style::default().fg(Color::Cyan)),
                Span::raw(" lists | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Line::from(Span::styled(
                hud.lists_summary,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Body shade for the segment at `index`, fading from bright to dark green
pub fn segment_color(index: usize) -> Color {
    let green = 255usize.saturating_sub(index * 15).max(100);
    Color::Rgb(0, green as u8, 0)
}

/// Head glyph with the eyes on the side the snake is facing
pub fn eyes(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => ": ",
        Direction::Up => "''",
        Direction::Down => "..",
        Direction::Right | Direction::None => " :",
    }
}

pub fn reason_message(reason: GameOverReason, max_mistakes: u32) -> String {
    match reason {
        GameOverReason::Wall => "You hit the wall!".to_string(),
        GameOverReason::SelfCollision => "You hit yourself!".to_string(),
        GameOverReason::Mistakes => format!("You made {max_mistakes} mistakes!"),
    }
}

fn restart_hint(verb: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" to {verb}, "), Style::default().fg(Color::Gray)),
        Span::styled("L", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(" to change lists, ", Style::default().fg(Color::Gray)),
        Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(" to quit", Style::default().fg(Color::Gray)),
    ])
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
