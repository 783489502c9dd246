use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyboardEnhancementFlags,
        MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tracing::{debug, info};

use super::scheduler::TickScheduler;
use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction, Point, SwipeTracker};
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    should_quit: bool,
    key_releases: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let swipe = SwipeTracker::new(config.min_swipe_distance);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(false),
            swipe,
            should_quit: false,
            key_releases: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;

        // Release reports are what make held-key debouncing possible
        self.key_releases = supports_keyboard_enhancement().unwrap_or(false);
        if self.key_releases {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release reporting")?;
        }
        self.input_handler = InputHandler::new(self.key_releases);
        debug!(key_releases = self.key_releases, "terminal ready");

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
        let mut scheduler = TickScheduler::new(self.engine.config().tick_interval());
        info!(period_ms = scheduler.period().as_millis() as u64, "game loop started");

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                scheduler.reset();
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Tick, then paint
                _ = scheduler.next_beat() => {
                    self.engine.update(&mut self.state);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state);
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

        info!(score = self.state.score, "quit");
        Ok(())
    }

    /// Apply one terminal event; returns true when the game was restarted
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => match self.input_handler.handle_key_event(key) {
                KeyAction::GameAction(action) => self.apply(action),
                KeyAction::Restart => return self.restart(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            },
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = Point::from_terminal(mouse.column, mouse.row, self.engine.config().cell_size);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.swipe.begin(point),
            MouseEventKind::Drag(MouseButton::Left) => {
                // The gesture origin only moves while directions are accepted
                if self.state.accepts_direction() {
                    if let Some(direction) = self.swipe.track(point) {
                        self.engine.enqueue_direction(&mut self.state, direction);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.swipe.end(),
            _ => {}
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Move(direction) => {
                self.engine.enqueue_direction(&mut self.state, direction);
            }
            Action::TogglePause => {
                self.engine.toggle_pause(&mut self.state);
            }
            Action::ToggleNextFood => {
                let show = !self.state.show_next_food;
                self.engine.set_show_next_food(&mut self.state, show);
            }
        }
    }

    /// Start over; only a finished game can be restarted
    fn restart(&mut self) -> bool {
        if !self.state.game_over {
            return false;
        }
        info!(score = self.state.score, "restart");
        self.engine.restart(&mut self.state);
        self.input_handler.clear();
        self.swipe.end();
        true
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        if self.key_releases {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard mode")?;
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
