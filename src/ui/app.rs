use crate::error::{ConfigError, MoveError};
use crate::game::{GameState, Outcome};
use crate::scene::{AnimationConfig, Scene};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Render loop settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Frames per second; the game clock advances once per frame.
    pub frame_rate: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { frame_rate: 60 }
    }
}

impl DisplayConfig {
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Validation(
                "display.frame_rate must be > 0".into(),
            ));
        }
        Ok(())
    }
}

pub struct App {
    game_state: GameState,
    animation: AnimationConfig,
    frame_period: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(display: &DisplayConfig, animation: AnimationConfig) -> Self {
        App {
            game_state: GameState::initial(),
            animation,
            frame_period: display.frame_period(),
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop: one engine frame per display frame, redrawn
    /// every iteration.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        let mut last_tick = Instant::now();

        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            let timeout = self.frame_period.saturating_sub(last_tick.elapsed());
            self.handle_events(timeout)?;

            if last_tick.elapsed() >= self.frame_period {
                self.game_state.advance_frame();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='7') => {
                if let Some(column) = c.to_digit(10) {
                    self.drop_disk(column as usize);
                }
            }
            KeyCode::Char('0') | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game_state.reset();
                self.message = Some("New game started!".to_string());
            }
            other => {
                debug!(key = ?other, "unmapped key");
            }
        }
    }

    /// Drop the current player's disk in a 1-indexed column
    fn drop_disk(&mut self, column: usize) {
        self.message = match self.game_state.drop_disk(column) {
            Ok(result) => match result.outcome.winner() {
                Some(player) => Some(format!("{} wins!", player.name())),
                None if result.outcome == Outcome::Draw => Some("It's a draw!".to_string()),
                None => None,
            },
            Err(MoveError::GameOver) => {
                Some("Game over! Press 0 or R to play another game.".to_string())
            }
            Err(err @ (MoveError::ColumnFull { .. } | MoveError::InvalidColumn { .. })) => {
                Some(format!("You can't play there: {err}."))
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let scene = Scene::capture(&self.game_state, &self.animation);
        super::game_view::render(frame, &scene, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&DisplayConfig::default(), AnimationConfig::default())
    }
}
