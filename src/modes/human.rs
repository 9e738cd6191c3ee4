use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, interval, interval_at};

use crate::game::{GameConfig, GameEngine, GameEvent, GameMode};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::{ScoreTracker, SessionClock};
use crate::render::Renderer;

/// Interactive terminal session.
///
/// Owns the timers the engine deliberately does not: a tick interval at the
/// engine's current speed (re-armed whenever the engine reports a speed
/// change) and a render interval, multiplexed with keyboard input on one
/// task so engine calls never overlap.
pub struct HumanMode {
    engine: GameEngine,
    tracker: ScoreTracker,
    clock: SessionClock,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, mode: GameMode, tracker: ScoreTracker) -> Self {
        let mut engine = GameEngine::new(config, mode);
        engine.reset(mode);

        Self {
            engine,
            tracker,
            clock: SessionClock::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
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

        let mut tick_timer = tick_interval(self.engine.interval_ms());

        // Render at 30 FPS, independent of the simulation rate
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.step(&mut tick_timer)?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.clock.update();
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.tracker, &self.clock);
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

        Ok(())
    }

    /// Run one engine tick and react to what it reports
    fn step(&mut self, tick_timer: &mut Interval) -> Result<()> {
        for event in self.engine.tick() {
            match event {
                GameEvent::SpeedChanged { interval_ms } => {
                    *tick_timer = tick_interval(interval_ms);
                }
                GameEvent::GameOver { score, .. } => {
                    self.tracker.record_game_over(score)?;
                }
                GameEvent::Moved(_) | GameEvent::FoodEaten { .. } => {}
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.engine.set_direction(direction);
                }
                KeyAction::TogglePause => {
                    self.engine.toggle_pause();
                }
                KeyAction::Restart => {
                    let mode = self.engine.mode();
                    self.engine.reset(mode);
                    self.clock.on_game_start();
                    *tick_timer = tick_interval(self.engine.interval_ms());
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
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

/// An interval whose first tick is one full period out, so re-arming after
/// a speed change does not fire an immediate extra tick
fn tick_interval(interval_ms: u64) -> Interval {
    let period = Duration::from_millis(interval_ms);
    interval_at(Instant::now() + period, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameStatus};
    use crate::metrics::MemoryStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_mode() -> HumanMode {
        let tracker = ScoreTracker::load(Box::new(MemoryStore::new())).unwrap();
        HumanMode::new(GameConfig::default(), GameMode::Classic, tracker)
    }

    #[tokio::test]
    async fn test_game_initialization() {
        let mode = test_mode();
        assert_eq!(mode.engine.status(), GameStatus::Running);
        assert_eq!(mode.engine.score(), 0);
        assert_eq!(mode.engine.interval_ms(), 100);
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut mode = test_mode();
        let mut timer = tick_interval(mode.engine.interval_ms());

        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        mode.handle_event(q, &mut timer).unwrap();

        assert!(mode.should_quit);
    }

    #[tokio::test]
    async fn test_pause_key_toggles_engine() {
        let mut mode = test_mode();
        let mut timer = tick_interval(mode.engine.interval_ms());

        let space = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        mode.handle_event(space.clone(), &mut timer).unwrap();
        assert_eq!(mode.engine.status(), GameStatus::Paused);

        mode.handle_event(space, &mut timer).unwrap();
        assert_eq!(mode.engine.status(), GameStatus::Running);
    }

    #[tokio::test]
    async fn test_game_over_is_recorded() {
        let mut mode = test_mode();
        let mut timer = tick_interval(mode.engine.interval_ms());

        // Drive the snake into the left wall
        mode.engine.set_direction(Direction::Left);
        for _ in 0..=10 {
            mode.step(&mut timer).unwrap();
        }

        assert_eq!(mode.engine.status(), GameStatus::Over);
        assert_eq!(mode.tracker.games_played(), 1);
    }

    #[tokio::test]
    async fn test_restart_key_starts_fresh_game() {
        let mut mode = test_mode();
        let mut timer = tick_interval(mode.engine.interval_ms());

        mode.engine.set_direction(Direction::Up);
        for _ in 0..=10 {
            mode.step(&mut timer).unwrap();
        }
        assert_eq!(mode.engine.status(), GameStatus::Over);

        let r = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        mode.handle_event(r, &mut timer).unwrap();

        assert_eq!(mode.engine.status(), GameStatus::Running);
        assert_eq!(mode.engine.score(), 0);
        assert_eq!(mode.engine.mode(), GameMode::Classic);
    }
}
