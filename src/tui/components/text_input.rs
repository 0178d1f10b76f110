//! Shared text field rendering
//!
//! Dialog forms share one field renderer so the label, cursor, and hint
//! styling stay consistent across dialogs.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Render a labeled text field.
///
/// The focused field shows an inverse-video cursor; an unfocused empty
/// field falls back to its hint text.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    hint: Option<&str>,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).underlined()
    } else {
        Style::default().fg(theme.text)
    };
    let value_style = if is_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![Span::styled(label.to_string(), label_style), Span::raw(" ")];

    let value = input.value();
    if is_focused {
        spans.extend(cursor_spans(value, input.visual_cursor(), value_style, theme));
    } else if value.is_empty() {
        if let Some(hint) = hint {
            spans.push(Span::styled(
                hint.to_string(),
                Style::default().fg(theme.hint),
            ));
        }
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Split the value around the cursor position so the character under the
/// cursor renders in inverse video. A cursor past the end renders as a
/// highlighted space.
fn cursor_spans(
    value: &str,
    cursor: usize,
    value_style: Style,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let before: String = value.chars().take(cursor).collect();
    let at: String = value
        .chars()
        .nth(cursor)
        .map(String::from)
        .unwrap_or_else(|| " ".to_string());
    let after: String = value.chars().skip(cursor + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, value_style));
    }
    spans.push(Span::styled(at, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, value_style));
    }
    spans
}
