use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseEvent,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, Write, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};

use crate::game::{GameConfig, GameEngine, Heading};
use crate::input::{InputHandler, KeyAction, Swipe, SwipeTracker};
use crate::modes::Ticker;
use crate::render::{BoardLayout, CELL_WIDTH, Renderer};

/// Interactive terminal session: keyboard and mouse in, ticks from a
/// [`Ticker`], frames out through the [`Renderer`].
pub struct HumanMode {
    engine: GameEngine,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe_tracker: SwipeTracker,
    ticker: Ticker,
    layout: BoardLayout,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    fn with_engine(engine: GameEngine) -> Self {
        let ticker = Ticker::new(engine.config().tick_interval());

        Self {
            engine,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe_tracker: SwipeTracker::new(CELL_WIDTH),
            ticker,
            layout: BoardLayout::default(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                // Restore failures are logged inside
                let _ = restore_terminal(&mut stderr(), disable_raw_mode);
                return Err(err);
            }
        };

        info!(
            grid_size = self.engine.state().grid_size,
            tick = ?self.ticker.period(),
            "game started"
        );

        let result = self.run_game_loop(&mut terminal).await;
        let restored = restore_terminal(terminal.backend_mut(), disable_raw_mode);

        result.and(restored)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        self.ticker.start();

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = self.ticker.tick() => {
                    self.on_tick();
                }

                _ = render_timer.tick() => {
                    let state = self.engine.state();
                    let renderer = &self.renderer;
                    let mut layout = self.layout;
                    terminal.draw(|frame| {
                        layout = renderer.render(frame, state);
                    }).context("Failed to draw frame")?;
                    self.layout = layout;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Steer(heading) => self.steer(heading),
                    KeyAction::Restart => self.restart(),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match self.swipe_tracker.handle_mouse_event(mouse) {
            Some(Swipe::Steer(heading)) => self.steer(heading),
            Some(Swipe::Tap { column, row }) => {
                if self.layout.hits_restart(column, row) {
                    self.restart();
                }
            }
            None => {}
        }
    }

    fn steer(&mut self, heading: Heading) {
        if !self.engine.is_terminated() {
            self.engine.set_heading(heading);
        }
    }

    /// Restart is only offered from the game-over screen
    fn restart(&mut self) {
        if !self.engine.is_terminated() {
            return;
        }

        self.engine.reset();
        self.ticker.start();
    }

    fn on_tick(&mut self) {
        let result = self.engine.advance();

        if result.terminated {
            self.ticker.stop();
            info!(
                collision = ?result.info.collision_type,
                length = self.engine.state().snake.len(),
                "game over"
            );
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Undo terminal setup. Every step runs even when an earlier one fails;
/// failures are logged and the first one is returned.
fn restore_terminal<W: Write>(
    out: &mut W,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    let mut first_error: Option<anyhow::Error> = None;

    if let Err(err) = disable_raw() {
        error!(?err, "failed to disable raw mode");
        let err = anyhow::Error::new(err).context("Failed to disable raw mode");
        first_error = first_error.or(Some(err));
    }

    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show) {
        error!(?err, "failed to leave alternate screen");
        let err = anyhow::Error::new(err).context("Failed to leave alternate screen");
        first_error = first_error.or(Some(err));
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
