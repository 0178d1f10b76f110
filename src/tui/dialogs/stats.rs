//! Statistics dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::board::Statistics;
use crate::tui::styles::Theme;

pub struct StatsDialog {
    stats: Statistics,
}

impl StatsDialog {
    pub fn new(stats: Statistics) -> Self {
        Self { stats }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('q') => {
                DialogResult::Cancel
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 44, 9);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Statistics ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let label_style = Style::default().fg(theme.dimmed);
        let value_style = Style::default().fg(theme.text).bold();

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Total tasks:      ", label_style),
                Span::styled(self.stats.total.to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("  Completed tasks:  ", label_style),
                Span::styled(self.stats.completed.to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("  Completion rate:  ", label_style),
                Span::styled(
                    format!("{:.2}%", self.stats.completion_rate),
                    value_style,
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Esc/Enter close",
                Style::default().fg(theme.hint),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
