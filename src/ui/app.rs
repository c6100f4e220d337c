//! Main TUI application state and logic

use crate::engine::constants::DEFAULT_PLAYBACK_DELAY;
use crate::engine::{Replay, ReplayError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The run being replayed
    pub replay: Replay,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between frames while playing
    pub playback_delay: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app replaying the given run
    pub fn new(replay: Replay) -> Self {
        let playback_delay = replay
            .outcome()
            .algorithm
            .map_or(DEFAULT_PLAYBACK_DELAY, |a| a.playback_delay());

        App {
            replay,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            playback_delay,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.playback_delay {
                if self.replay.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Bars and description on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let outcome = self.replay.outcome();
        let title = outcome
            .algorithm
            .map_or(outcome.identifier.as_str(), |a| a.title());

        super::panes::render_bars_pane(frame, columns[0], self.replay.current(), title);
        super::panes::render_description_pane(frame, columns[1], outcome);
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.replay.position(),
            self.replay.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = usize::from(c as u8 - b'0');
                let stepped = self.replay.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.replay.step_backward();
                self.report(result, "Stepped backward", "Cannot step backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.replay.step_forward();
                self.report(result, "Stepped forward", "Cannot step forward");
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let result = self.replay.jump_to_end();
                self.report(result, "Jumped to end", "Cannot jump");
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let result = self.replay.rewind_to_start();
                self.report(result, "Jumped to start", "Cannot rewind");
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        if !self.is_playing {
            self.status_message = "Paused".to_string();
            return;
        }

        // Playing from the last frame starts over
        if self.replay.is_at_end() {
            let _ = self.replay.rewind_to_start();
        }
        self.last_play_time = Instant::now()
            .checked_sub(self.playback_delay)
            .unwrap_or(Instant::now());
        self.status_message = "Playing...".to_string();
    }

    fn report(&mut self, result: Result<(), ReplayError>, ok: &str, failed: &str) {
        self.status_message = match result {
            Ok(()) => ok.to_string(),
            Err(e) => format!("{}: {}", failed, e),
        };
    }
}
