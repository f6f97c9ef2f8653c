use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, GameState};

/// Terminal columns taken by one grid cell
pub const CELL_WIDTH: u16 = 2;

const OVERLAY_WIDTH: u16 = 25;
const OVERLAY_HEIGHT: u16 = 7;
const RESTART_LABEL: &str = "[ Restart ]";

/// Screen areas of the last drawn frame, for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    pub board: Rect,
    /// Present only while the game-over overlay is shown
    pub restart_button: Option<Rect>,
}

impl BoardLayout {
    /// Compute where the board and overlay land inside `area`
    pub fn compute(area: Rect, grid_size: usize, terminated: bool) -> Self {
        let [_, body, _] = split_screen(area);

        let cells = u16::try_from(grid_size).unwrap_or(u16::MAX);
        let board = centered(
            body,
            cells.saturating_mul(CELL_WIDTH).saturating_add(2),
            cells.saturating_add(2),
        );

        let restart_button = terminated.then(|| {
            let overlay = centered(body, OVERLAY_WIDTH, OVERLAY_HEIGHT);
            let label_width = RESTART_LABEL.len() as u16;
            let inner_width = overlay.width.saturating_sub(2);
            Rect::new(
                overlay.x + 1 + inner_width.saturating_sub(label_width) / 2,
                overlay.y + 4,
                label_width.min(inner_width),
                1,
            )
        });

        Self {
            board,
            restart_button,
        }
    }

    pub fn hits_restart(&self, column: u16, row: u16) -> bool {
        self.restart_button
            .is_some_and(|button| button.contains((column, row).into()))
    }
}

fn split_screen(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Footer
        ])
        .areas(area)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame from a state snapshot
    pub fn render(&self, frame: &mut Frame, state: &GameState) -> BoardLayout {
        let area = frame.area();
        let [header, body, footer] = split_screen(area);
        let layout = BoardLayout::compute(area, state.grid_size, state.terminated);

        frame.render_widget(self.render_stats(state), header);
        frame.render_widget(self.render_grid(state), layout.board);

        if state.terminated {
            let overlay = centered(body, OVERLAY_WIDTH, OVERLAY_HEIGHT);
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.render_game_over(), overlay);
        }

        frame.render_widget(self.render_controls(), footer);

        layout
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid_size);

        for y in 0..state.grid_size {
            let mut spans = Vec::with_capacity(state.grid_size);

            for x in 0..state.grid_size {
                let cell = Cell::new(x as i32, y as i32);

                let span = if cell == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.contains(cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == state.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, state: &GameState) -> Paragraph<'_> {
        let status_color = if state.terminated {
            Color::Red
        } else {
            Color::Green
        };

        let text = Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.len().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Status: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.status().to_string(), Style::default().fg(status_color)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                RESTART_LABEL,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(", "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or drag to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

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
    use crate::game::{Heading, Snake};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn state(cells: Vec<Cell>, food: Cell, terminated: bool) -> GameState {
        let mut state = GameState::new(
            Snake::from_cells(cells).unwrap(),
            food,
            Heading::Right,
            15,
        );
        state.terminated = terminated;
        state
    }

    fn draw(state: &GameState) -> (Buffer, BoardLayout) {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut layout = BoardLayout::default();
        terminal
            .draw(|frame| layout = Renderer::new().render(frame, state))
            .unwrap();
        (terminal.backend().buffer().clone(), layout)
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn symbol_at(buffer: &Buffer, layout: &BoardLayout, cell: Cell) -> String {
        let x = layout.board.x + 1 + cell.x as u16 * CELL_WIDTH;
        let y = layout.board.y + 1 + cell.y as u16;
        buffer[(x, y)].symbol().to_string()
    }

    #[test]
    fn test_running_board() {
        let state = state(
            vec![Cell::new(7, 7), Cell::new(6, 7)],
            Cell::new(2, 3),
            false,
        );
        let (buffer, layout) = draw(&state);

        assert_eq!(layout.board.width, 15 * CELL_WIDTH + 2);
        assert_eq!(layout.board.height, 17);
        assert_eq!(layout.restart_button, None);
        assert_eq!(symbol_at(&buffer, &layout, Cell::new(7, 7)), "■");
        assert_eq!(symbol_at(&buffer, &layout, Cell::new(6, 7)), "□");
        assert_eq!(symbol_at(&buffer, &layout, Cell::new(2, 3)), "●");
        assert_eq!(symbol_at(&buffer, &layout, Cell::new(0, 0)), ".");

        let screen = text(&buffer);
        assert!(screen.contains("Length: 2"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_snake_covers_overlapping_food() {
        let state = state(
            vec![Cell::new(7, 7), Cell::new(6, 7)],
            Cell::new(6, 7),
            false,
        );
        let (buffer, layout) = draw(&state);

        assert_eq!(symbol_at(&buffer, &layout, Cell::new(6, 7)), "□");
    }

    #[test]
    fn test_game_over_overlay() {
        let state = state(vec![Cell::new(14, 7)], Cell::new(2, 3), true);
        let (buffer, layout) = draw(&state);

        let screen = text(&buffer);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains(RESTART_LABEL));
        assert!(screen.contains("Game Over"));

        let button = layout.restart_button.expect("restart button while terminated");
        let label: String = (button.x..button.x + button.width)
            .map(|x| buffer[(x, button.y)].symbol().to_string())
            .collect();
        assert_eq!(label, RESTART_LABEL);
    }

    #[test]
    fn test_restart_hit_testing() {
        let area = Rect::new(0, 0, 60, 24);
        let layout = BoardLayout::compute(area, 15, true);
        let button = layout.restart_button.unwrap();

        assert!(layout.hits_restart(button.x, button.y));
        assert!(layout.hits_restart(button.x + button.width - 1, button.y));
        assert!(!layout.hits_restart(button.x, button.y + 1));
        assert!(!BoardLayout::compute(area, 15, false).hits_restart(button.x, button.y));
    }
}
