//! Board view - three kanban columns and their key-driven gestures

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{
    ConfirmDialog, DialogResult, ExportDialog, NewTaskDialog, StatsDialog,
};
use super::styles::Theme;
use crate::board::{Status, Task, TaskStore};
use crate::config::Config;

struct Notice {
    text: String,
    is_error: bool,
}

pub struct BoardView {
    store: TaskStore,
    config: Config,

    // UI state
    column: usize,
    cursors: [usize; 3],
    notice: Option<Notice>,
    pending_delete: Option<String>,

    // Dialogs
    show_help: bool,
    new_dialog: Option<NewTaskDialog>,
    confirm_dialog: Option<ConfirmDialog>,
    stats_dialog: Option<StatsDialog>,
    export_dialog: Option<ExportDialog>,
}

impl BoardView {
    pub fn new(config: Config) -> Self {
        Self {
            store: TaskStore::new(),
            config,
            column: 0,
            cursors: [0; 3],
            notice: None,
            pending_delete: None,
            show_help: false,
            new_dialog: None,
            confirm_dialog: None,
            stats_dialog: None,
            export_dialog: None,
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help
            || self.new_dialog.is_some()
            || self.confirm_dialog.is_some()
            || self.stats_dialog.is_some()
            || self.export_dialog.is_some()
    }

    fn current_status(&self) -> Status {
        Status::ALL[self.column]
    }

    fn selected_task(&self) -> Option<&Task> {
        self.store
            .tasks_with_status(self.current_status())
            .nth(self.cursors[self.column])
    }

    fn clamp_cursors(&mut self) {
        for (idx, status) in Status::ALL.iter().enumerate() {
            let count = self.store.count_with_status(*status);
            self.cursors[idx] = self.cursors[idx].min(count.saturating_sub(1));
        }
    }

    fn set_notice(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            is_error: false,
        });
    }

    fn set_error(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            is_error: true,
        });
    }

    /// Run one reminder scan. Fired reminders surface on the notice line;
    /// returns whether anything changed and a redraw is needed.
    pub fn tick_reminders(&mut self, now: DateTime<Utc>) -> bool {
        let fired = self.store.scan_reminders(now);
        if fired.is_empty() {
            return false;
        }

        for task in &fired {
            tracing::debug!("reminder fired for '{}'", task.name);
        }
        let names: Vec<&str> = fired.iter().map(|t| t.name.as_str()).collect();
        if names.len() == 1 {
            self.set_notice(format!("Reminder: {}", names[0]));
        } else {
            self.set_notice(format!("Reminders: {}", names.join(", ")));
        }
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Handle dialog input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(mut dialog) = self.new_dialog.take() {
            match dialog.handle_key(key) {
                DialogResult::Continue => self.new_dialog = Some(dialog),
                DialogResult::Cancel => {}
                DialogResult::Submit(draft) => match self.store.add(draft, Utc::now()) {
                    Ok(task) => {
                        let name = task.name.clone();
                        let status = task.status;
                        self.focus_task(&name, status);
                        self.set_notice(format!("Added '{}'", name));
                    }
                    Err(e) => {
                        // Keep the dialog open with the field contents intact
                        dialog.set_error(e.to_string());
                        self.new_dialog = Some(dialog);
                    }
                },
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                    self.pending_delete = None;
                }
                DialogResult::Submit(()) => {
                    self.confirm_dialog = None;
                    if let Some(name) = self.pending_delete.take() {
                        match self.store.remove(&name) {
                            Ok(removed) => {
                                self.clamp_cursors();
                                self.set_notice(format!("Deleted '{}'", removed.name));
                            }
                            Err(e) => {
                                tracing::error!("Failed to delete task: {}", e);
                                self.set_error(e.to_string());
                            }
                        }
                    }
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.stats_dialog {
            if matches!(dialog.handle_key(key), DialogResult::Cancel) {
                self.stats_dialog = None;
            }
            return None;
        }

        if let Some(mut dialog) = self.export_dialog.take() {
            match dialog.handle_key(key) {
                DialogResult::Continue => self.export_dialog = Some(dialog),
                DialogResult::Cancel => {}
                DialogResult::Submit(path) => {
                    match self.store.export_csv(std::path::Path::new(&path)) {
                        Ok(()) => {
                            self.set_notice(format!(
                                "Exported {} tasks to {}",
                                self.store.len(),
                                path
                            ));
                        }
                        Err(e) => {
                            tracing::error!("CSV export failed: {}", e);
                            dialog.set_error(e.to_string());
                            self.export_dialog = Some(dialog);
                        }
                    }
                }
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Esc => {
                self.notice = None;
            }
            KeyCode::Char('n') => {
                self.new_dialog = Some(NewTaskDialog::new(
                    self.config.board.categories.clone(),
                    self.current_status(),
                ));
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.selected_task() {
                    let name = task.name.clone();
                    self.confirm_dialog = Some(ConfirmDialog::new(
                        "Delete Task",
                        &format!("Delete task '{}'?", name),
                    ));
                    self.pending_delete = Some(name);
                }
            }
            KeyCode::Char('s') => {
                self.stats_dialog = Some(StatsDialog::new(self.store.statistics()));
            }
            KeyCode::Char('e') => {
                self.export_dialog = Some(ExportDialog::new(
                    self.config.export.default_path.clone(),
                ));
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.column > 0 {
                    self.column -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.column < Status::ALL.len() - 1 {
                    self.column += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursors[self.column] = self.cursors[self.column].saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.store.count_with_status(self.current_status());
                if count > 0 && self.cursors[self.column] < count - 1 {
                    self.cursors[self.column] += 1;
                }
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.cursors[self.column] = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                let count = self.store.count_with_status(self.current_status());
                self.cursors[self.column] = count.saturating_sub(1);
            }
            KeyCode::Char('H') | KeyCode::Char('[') => {
                self.move_selected(MoveDirection::Left);
            }
            KeyCode::Char('L') | KeyCode::Char(']') => {
                self.move_selected(MoveDirection::Right);
            }
            _ => {}
        }

        None
    }

    /// Move the selected task one column over; the keyboard equivalent of
    /// dropping a card into the neighboring list. At the board edge this is
    /// a no-op.
    fn move_selected(&mut self, direction: MoveDirection) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let name = task.name.clone();

        let target = match direction {
            MoveDirection::Left => self.current_status().prev(),
            MoveDirection::Right => self.current_status().next(),
        };
        let Some(target) = target else {
            return;
        };

        match self.store.move_task(&name, target) {
            Ok(_) => self.focus_task(&name, target),
            Err(e) => {
                tracing::error!("Failed to move task: {}", e);
                self.set_error(e.to_string());
            }
        }
    }

    /// Put the cursor on the named task in its column.
    fn focus_task(&mut self, name: &str, status: Status) {
        self.clamp_cursors();
        let column = Status::ALL.iter().position(|s| *s == status).unwrap_or(0);
        if let Some(row) = self
            .store
            .tasks_with_status(status)
            .position(|t| t.name == name)
        {
            self.column = column;
            self.cursors[column] = row;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        self.render_columns(frame, chunks[0], theme);
        self.render_status_line(frame, chunks[1], theme);

        if let Some(dialog) = &self.new_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.stats_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.export_dialog {
            dialog.render(frame, area, theme);
        }
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
    }

    fn render_columns(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(area);

        for (idx, status) in Status::ALL.iter().enumerate() {
            let is_active = idx == self.column;
            let count = self.store.count_with_status(*status);

            let border_style = if is_active {
                Style::default().fg(theme.active_border)
            } else {
                Style::default().fg(theme.border)
            };

            let items: Vec<ListItem> = self
                .store
                .tasks_with_status(*status)
                .enumerate()
                .map(|(row, task)| {
                    let selected = is_active && row == self.cursors[idx];
                    self.render_card(task, selected, theme)
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .title(format!(" {} ({}) ", status.label(), count))
                    .title_style(Style::default().fg(theme.title).bold())
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );

            frame.render_widget(list, chunks[idx]);
        }
    }

    fn render_card(&self, task: &Task, selected: bool, theme: &Theme) -> ListItem<'static> {
        let name_style = Style::default()
            .fg(theme.priority_color(task.priority))
            .bold();

        let mut spans = vec![Span::styled(task.name.clone(), name_style)];
        if !task.category.is_empty() {
            spans.push(Span::styled(
                format!("  {}", task.category),
                Style::default().fg(theme.dimmed),
            ));
        }
        if let Some(at) = task.reminder_at {
            spans.push(Span::styled(
                format!("  ({})", at.format("%m-%d %H:%M")),
                Style::default().fg(theme.hint),
            ));
        }

        let mut line = Line::from(spans);
        if selected {
            line = line.style(Style::default().bg(theme.selection));
        }
        ListItem::new(line)
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = match &self.notice {
            Some(notice) => {
                let style = if notice.is_error {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.notice)
                };
                Line::from(Span::styled(format!(" {}", notice.text), style))
            }
            None => Line::from(Span::styled(
                " n new · d delete · H/L move card · s stats · e export · ? help · q quit",
                Style::default().fg(theme.hint),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

enum MoveDirection {
    Left,
    Right,
}

#[cfg(test)]
mod tests;
