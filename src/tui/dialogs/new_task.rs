//! New task dialog
//!
//! Collects the task fields and hands a [`TaskDraft`] back to the board
//! view, which runs it through the store. Store rejections come back via
//! [`NewTaskDialog::set_error`] so the form keeps its contents.

use chrono::{DateTime, NaiveDateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::board::{Priority, Status, TaskDraft};
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

const REMINDER_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

const FIELD_NAME: usize = 0;
const FIELD_CATEGORY: usize = 1;
const FIELD_PRIORITY: usize = 2;
const FIELD_REMINDER: usize = 3;
const FIELD_STATUS: usize = 4;
const FIELD_COUNT: usize = 5;

pub struct NewTaskDialog {
    name: Input,
    category: Input,
    reminder: Input,
    priority_index: usize,
    status_index: usize,
    focused_field: usize,
    category_suggestions: Vec<String>,
    error_message: Option<String>,
}

impl NewTaskDialog {
    pub fn new(category_suggestions: Vec<String>, initial_status: Status) -> Self {
        let status_index = Status::ALL
            .iter()
            .position(|s| *s == initial_status)
            .unwrap_or(0);

        Self {
            name: Input::default(),
            category: Input::default(),
            reminder: Input::default(),
            priority_index: 0,
            status_index,
            focused_field: FIELD_NAME,
            category_suggestions,
            error_message: None,
        }
    }

    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    fn is_cycle_field(&self) -> bool {
        matches!(self.focused_field, FIELD_PRIORITY | FIELD_STATUS)
    }

    fn cycle(&mut self, delta: isize) {
        match self.focused_field {
            FIELD_PRIORITY => {
                let len = Priority::ALL.len() as isize;
                self.priority_index =
                    ((self.priority_index as isize + delta).rem_euclid(len)) as usize;
            }
            FIELD_STATUS => {
                let len = Status::ALL.len() as isize;
                self.status_index =
                    ((self.status_index as isize + delta).rem_euclid(len)) as usize;
            }
            _ => {}
        }
    }

    fn current_input_mut(&mut self) -> Option<&mut Input> {
        match self.focused_field {
            FIELD_NAME => Some(&mut self.name),
            FIELD_CATEGORY => Some(&mut self.category),
            FIELD_REMINDER => Some(&mut self.reminder),
            _ => None,
        }
    }

    fn parse_reminder(&self) -> Result<Option<DateTime<Utc>>, String> {
        let value = self.reminder.value().trim();
        if value.is_empty() {
            return Ok(None);
        }
        NaiveDateTime::parse_from_str(value, REMINDER_INPUT_FORMAT)
            .map(|naive| Some(naive.and_utc()))
            .map_err(|_| format!("Reminder must look like '{}'", REMINDER_INPUT_FORMAT))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskDraft> {
        match key.code {
            KeyCode::Esc => {
                self.error_message = None;
                DialogResult::Cancel
            }
            KeyCode::Enter => {
                let reminder_at = match self.parse_reminder() {
                    Ok(at) => at,
                    Err(message) => {
                        self.error_message = Some(message);
                        return DialogResult::Continue;
                    }
                };
                self.error_message = None;
                DialogResult::Submit(TaskDraft {
                    name: self.name.value().to_string(),
                    category: self.category.value().to_string(),
                    priority: Priority::ALL[self.priority_index],
                    reminder_at,
                    status: Status::ALL[self.status_index],
                })
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = if self.focused_field == 0 {
                    FIELD_COUNT - 1
                } else {
                    self.focused_field - 1
                };
                DialogResult::Continue
            }
            KeyCode::Left if self.is_cycle_field() => {
                self.cycle(-1);
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if self.is_cycle_field() => {
                self.cycle(1);
                DialogResult::Continue
            }
            _ => {
                if let Some(input) = self.current_input_mut() {
                    input.handle_event(&crossterm::event::Event::Key(key));
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 64, 16);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" New Task ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[FIELD_NAME],
            "Name:",
            &self.name,
            self.focused_field == FIELD_NAME,
            None,
            theme,
        );

        let category_hint = self.category_suggestions.join(", ");
        render_text_field(
            frame,
            chunks[FIELD_CATEGORY],
            "Category:",
            &self.category,
            self.focused_field == FIELD_CATEGORY,
            Some(&category_hint),
            theme,
        );

        self.render_cycle_field(
            frame,
            chunks[FIELD_PRIORITY],
            "Priority:",
            Priority::ALL[self.priority_index].label(),
            self.focused_field == FIELD_PRIORITY,
            theme,
        );

        render_text_field(
            frame,
            chunks[FIELD_REMINDER],
            "Reminder:",
            &self.reminder,
            self.focused_field == FIELD_REMINDER,
            Some("optional, YYYY-MM-DD HH:MM (UTC)"),
            theme,
        );

        self.render_cycle_field(
            frame,
            chunks[FIELD_STATUS],
            "Column:",
            Status::ALL[self.status_index].label(),
            self.focused_field == FIELD_STATUS,
            theme,
        );

        let footer = match &self.error_message {
            Some(error) => Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            )),
            None => Line::from(Span::styled(
                "Tab next field · Space cycle · Enter add · Esc cancel",
                Style::default().fg(theme.hint),
            )),
        };
        frame.render_widget(Paragraph::new(footer), chunks[FIELD_COUNT]);
    }

    fn render_cycle_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        is_focused: bool,
        theme: &Theme,
    ) {
        let label_style = if is_focused {
            Style::default().fg(theme.accent).underlined()
        } else {
            Style::default().fg(theme.text)
        };
        let value_style = if is_focused {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.text)
        };

        let line = Line::from(vec![
            Span::styled(label.to_string(), label_style),
            Span::raw(" "),
            Span::styled(format!("< {} >", value), value_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> NewTaskDialog {
        NewTaskDialog::new(vec!["Work".to_string()], Status::ToDo)
    }

    fn type_text(dialog: &mut NewTaskDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = dialog();
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Esc)),
            DialogResult::Cancel
        ));
    }

    #[test]
    fn test_submit_carries_typed_name() {
        let mut dialog = dialog();
        type_text(&mut dialog, "Buy milk");

        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => {
                assert_eq!(draft.name, "Buy milk");
                assert_eq!(draft.priority, Priority::Low);
                assert_eq!(draft.status, Status::ToDo);
                assert!(draft.reminder_at.is_none());
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_initial_status_follows_active_column() {
        let mut dialog = NewTaskDialog::new(Vec::new(), Status::Doing);
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => assert_eq!(draft.status, Status::Doing),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_priority_cycles_with_space() {
        let mut dialog = dialog();
        dialog.focused_field = FIELD_PRIORITY;
        dialog.handle_key(key(KeyCode::Char(' ')));
        dialog.handle_key(key(KeyCode::Char(' ')));

        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => assert_eq!(draft.priority, Priority::High),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_priority_cycle_wraps_backwards() {
        let mut dialog = dialog();
        dialog.focused_field = FIELD_PRIORITY;
        dialog.handle_key(key(KeyCode::Left));

        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => assert_eq!(draft.priority, Priority::High),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_tab_moves_between_fields() {
        let mut dialog = dialog();
        type_text(&mut dialog, "Task");
        dialog.handle_key(key(KeyCode::Tab));
        type_text(&mut dialog, "Work");

        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => {
                assert_eq!(draft.name, "Task");
                assert_eq!(draft.category, "Work");
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_valid_reminder_parses_as_utc() {
        let mut dialog = dialog();
        dialog.focused_field = FIELD_REMINDER;
        type_text(&mut dialog, "2025-06-02 09:30");

        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => {
                let at = draft.reminder_at.expect("reminder should parse");
                assert_eq!(at.to_rfc3339(), "2025-06-02T09:30:00+00:00");
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_malformed_reminder_blocks_submit() {
        let mut dialog = dialog();
        dialog.focused_field = FIELD_REMINDER;
        type_text(&mut dialog, "tomorrow");

        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Continue
        ));
        assert!(dialog.error_message.is_some());
    }

    #[test]
    fn test_typing_clears_previous_error() {
        let mut dialog = dialog();
        dialog.set_error("A task named 'x' already exists".to_string());
        type_text(&mut dialog, "y");
        assert!(dialog.error_message.is_none());
    }
}
