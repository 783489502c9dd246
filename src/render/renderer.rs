use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position};

/// What occupies a grid cell, in paint order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Food,
    PendingFood,
    Head,
    Body,
    Empty,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Classify a cell; food is painted over the snake, and so is the
    /// pending food when it is visible
    pub fn cell_at(state: &GameState, pos: Position) -> Cell {
        if pos == state.food {
            Cell::Food
        } else if state.visible_pending_food() == Some(pos) {
            Cell::PendingFood
        } else if pos == state.snake.head() {
            Cell::Head
        } else if state.snake.occupies(pos) {
            Cell::Body
        } else {
            Cell::Empty
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state), chunks[0]);

        if state.game_over {
            frame.render_widget(self.render_game_over(state), chunks[1]);
        } else {
            frame.render_widget(self.render_grid(state), chunks[1]);
        }

        frame.render_widget(self.render_controls(state), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(state.grid_height);

        for y in 0..state.grid_height {
            let spans: Vec<Span> = (0..state.grid_width)
                .map(|x| {
                    let pos = Position::new(x as i32, y as i32);
                    match Self::cell_at(state, pos) {
                        Cell::Food => Span::styled(
                            "● ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Cell::PendingFood => {
                            Span::styled("○ ", Style::default().fg(Color::LightRed))
                        }
                        Cell::Head => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Body => Span::styled("■ ", Style::default().fg(Color::LightGreen)),
                        Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.steps.to_string(), Style::default().fg(Color::White)),
        ];

        if state.paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, state: &GameState) -> Paragraph<'_> {
        let next_food = if state.show_next_food { "on" } else { "off" };
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / drag to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" next food ({next_food}) | ")),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn state() -> GameState {
        let snake = Snake::from_segments(
            [Position::new(2, 2), Position::new(1, 2)],
            Direction::Right,
        );
        let mut state = GameState::new(snake, Position::new(4, 4), 6, 6);
        state.pending_food = Some(Position::new(0, 0));
        state
    }

    fn screen_text(state: &GameState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cell_classification() {
        let state = state();
        assert_eq!(Renderer::cell_at(&state, Position::new(2, 2)), Cell::Head);
        assert_eq!(Renderer::cell_at(&state, Position::new(1, 2)), Cell::Body);
        assert_eq!(Renderer::cell_at(&state, Position::new(4, 4)), Cell::Food);
        assert_eq!(Renderer::cell_at(&state, Position::new(0, 0)), Cell::Empty);
    }

    #[test]
    fn test_pending_food_needs_toggle() {
        let mut state = state();
        state.show_next_food = true;
        assert_eq!(Renderer::cell_at(&state, Position::new(0, 0)), Cell::PendingFood);

        state.game_over = true;
        assert_eq!(Renderer::cell_at(&state, Position::new(0, 0)), Cell::Empty);
    }

    #[test]
    fn test_food_painted_over_snake() {
        let mut state = state();
        state.food = Position::new(1, 2);
        assert_eq!(Renderer::cell_at(&state, Position::new(1, 2)), Cell::Food);
    }

    #[test]
    fn test_render_running_game() {
        let mut state = state();
        state.score = 3;
        let text = screen_text(&state);
        assert!(text.contains("Score: 3"));
        assert!(text.contains("Snake"));
        assert!(!text.contains("PAUSED"));

        state.paused = true;
        assert!(screen_text(&state).contains("PAUSED"));
    }

    #[test]
    fn test_render_game_over() {
        let mut state = state();
        state.game_over = true;
        let text = screen_text(&state);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("to restart"));
    }
}
