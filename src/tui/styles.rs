//! TUI theme and styling

use ratatui::style::Color;

use crate::board::Priority;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub active_border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Priority card colors
    pub priority_low: Color,
    pub priority_medium: Color,
    pub priority_high: Color,
    /// Neutral fallback used anywhere no priority is in play.
    pub neutral: Color,

    // UI elements
    pub notice: Color,
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(18, 20, 24),
            border: Color::Rgb(60, 68, 82),
            active_border: Color::Rgb(110, 170, 250),
            selection: Color::Rgb(40, 48, 62),

            title: Color::Rgb(130, 180, 255),
            text: Color::Rgb(205, 214, 224),
            dimmed: Color::Rgb(100, 110, 125),
            hint: Color::Rgb(130, 145, 160),

            priority_low: Color::Rgb(80, 200, 120),
            priority_medium: Color::Rgb(255, 170, 60),
            priority_high: Color::Rgb(255, 95, 85),
            neutral: Color::Rgb(170, 170, 170),

            notice: Color::Rgb(120, 220, 160),
            error: Color::Rgb(255, 100, 80),
            accent: Color::Rgb(110, 170, 250),
        }
    }

    /// Card color for a priority. Total over the enum; the neutral grey is
    /// reserved for contexts with no priority at all.
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.priority_low,
            Priority::Medium => self.priority_medium,
            Priority::High => self.priority_high,
        }
    }
}
