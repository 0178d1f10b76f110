//! CSV export dialog
//!
//! Asks for a destination path, prefilled with the configured default.
//! Write failures come back via [`ExportDialog::set_error`] so the path
//! can be corrected in place.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

pub struct ExportDialog {
    path: Input,
    error_message: Option<String>,
}

impl ExportDialog {
    pub fn new(default_path: String) -> Self {
        Self {
            path: Input::new(default_path),
            error_message: None,
        }
    }

    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let path = self.path.value().trim().to_string();
                if path.is_empty() {
                    self.error_message = Some("Export path cannot be empty".to_string());
                    return DialogResult::Continue;
                }
                self.error_message = None;
                DialogResult::Submit(path)
            }
            _ => {
                self.path.handle_event(&crossterm::event::Event::Key(key));
                self.error_message = None;
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 60, 7);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Export to CSV ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        render_text_field(
            frame,
            chunks[0],
            "Path:",
            &self.path,
            true,
            None,
            theme,
        );

        let footer = match &self.error_message {
            Some(error) => Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            )),
            None => Line::from(Span::styled(
                "Enter export · Esc cancel",
                Style::default().fg(theme.hint),
            )),
        };
        frame.render_widget(Paragraph::new(footer), chunks[1]);
    }
}
