//! Task record and its enumerated attributes

use chrono::{DateTime, Utc};

/// Display priority of a task. Determines the card color on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Board column a task currently occupies. Status and column are the same
/// thing; the view never tracks column membership separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    ToDo,
    Doing,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::ToDo, Status::Doing, Status::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Status::ToDo => "To-Do",
            Status::Doing => "Doing",
            Status::Completed => "Completed",
        }
    }

    /// Column to the left, if any.
    pub fn prev(&self) -> Option<Status> {
        match self {
            Status::ToDo => None,
            Status::Doing => Some(Status::ToDo),
            Status::Completed => Some(Status::Doing),
        }
    }

    /// Column to the right, if any.
    pub fn next(&self) -> Option<Status> {
        match self {
            Status::ToDo => Some(Status::Doing),
            Status::Doing => Some(Status::Completed),
            Status::Completed => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub category: String,
    pub priority: Priority,
    pub reminder_at: Option<DateTime<Utc>>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Field values for a task about to be added, as collected from the
/// new-task dialog. Validation happens in [`TaskStore::add`].
///
/// [`TaskStore::add`]: super::TaskStore::add
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: String,
    pub category: String,
    pub priority: Priority,
    pub reminder_at: Option<DateTime<Utc>>,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_neighbors() {
        assert_eq!(Status::ToDo.prev(), None);
        assert_eq!(Status::ToDo.next(), Some(Status::Doing));
        assert_eq!(Status::Doing.prev(), Some(Status::ToDo));
        assert_eq!(Status::Doing.next(), Some(Status::Completed));
        assert_eq!(Status::Completed.prev(), Some(Status::Doing));
        assert_eq!(Status::Completed.next(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Status::ToDo.label(), "To-Do");
        assert_eq!(Priority::High.to_string(), "High");
        assert_eq!(Priority::default(), Priority::Low);
        assert_eq!(Status::default(), Status::ToDo);
    }
}
