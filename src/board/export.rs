//! CSV export
//!
//! Header row is fixed: `Task Name,Category,Priority,Reminder,Status`.
//! Rows follow store insertion order; the reminder column is empty when no
//! reminder is pending, otherwise a locale-independent UTC timestamp.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};

use super::error::Result;
use super::store::TaskStore;
use super::task::Task;

const CSV_HEADER: [&str; 5] = ["Task Name", "Category", "Priority", "Reminder", "Status"];
const REMINDER_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn format_reminder(reminder_at: Option<DateTime<Utc>>) -> String {
    reminder_at
        .map(|at| at.format(REMINDER_FORMAT).to_string())
        .unwrap_or_default()
}

/// Serialize tasks to any writer. The csv crate applies standard quoting for
/// embedded commas and quotes in free-text fields.
pub fn write_csv<W: Write>(tasks: &[Task], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for task in tasks {
        csv_writer.write_record([
            task.name.as_str(),
            task.category.as_str(),
            task.priority.label(),
            format_reminder(task.reminder_at).as_str(),
            task.status.label(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

impl TaskStore {
    /// Write the whole board to a CSV file. The file is created (or
    /// truncated), flushed, and closed before returning on every path.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        write_csv(self.tasks(), file)
    }
}
