//! TUI dialog components

mod confirm;
mod export;
mod new_task;
mod stats;

pub use confirm::ConfirmDialog;
pub use export::ExportDialog;
pub use new_task::NewTaskDialog;
pub use stats::StatsDialog;

use ratatui::prelude::*;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
