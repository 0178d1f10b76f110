//! Main TUI application
//!
//! Single event loop: input is polled with a short timeout and the reminder
//! scan runs on a fixed interval between polls, so store operations never
//! interleave.

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

use super::board::BoardView;
use super::styles::Theme;
use crate::config::Config;

pub struct App {
    board: BoardView,
    theme: Theme,
    should_quit: bool,
    scan_interval: Duration,
}

impl App {
    pub fn new(config: Config) -> Self {
        let scan_interval = Duration::from_millis(config.board.reminder_scan_interval_ms.max(50));
        let board = BoardView::new(config);
        let theme = Theme::default();

        Self {
            board,
            theme,
            should_quit: false,
            scan_interval,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        // Initial render
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        let mut last_scan = std::time::Instant::now();

        loop {
            // Poll with short timeout for responsive input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);

                    // Draw immediately after input for responsiveness
                    terminal.draw(|f| self.render(f))?;

                    if self.should_quit {
                        break;
                    }
                    continue; // Skip the reminder scan this iteration
                }
            }

            // One complete scan per tick; the scan itself is synchronous so
            // ticks can never overlap.
            if last_scan.elapsed() >= self.scan_interval {
                last_scan = std::time::Instant::now();
                if self.board.tick_reminders(Utc::now()) {
                    terminal.draw(|f| self.render(f))?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.board.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global keybindings
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('q'), _) => {
                if !self.board.has_dialog() {
                    self.should_quit = true;
                    return;
                }
            }
            _ => {}
        }

        if let Some(action) = self.board.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}
