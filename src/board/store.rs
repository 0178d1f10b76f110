//! Ordered task collection and its operations
//!
//! Every operation is all-or-nothing: a failed add/remove/move leaves the
//! store exactly as it was. Name uniqueness is global across all columns,
//! not per column.

use chrono::{DateTime, Utc};

use super::error::{BoardError, Result};
use super::task::{Status, Task, TaskDraft};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    /// Percentage of completed tasks, 0.0 for an empty store.
    pub completion_rate: f64,
}

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Tasks occupying the given column, in insertion order.
    pub fn tasks_with_status(&self, status: Status) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    pub fn count_with_status(&self, status: Status) -> usize {
        self.tasks_with_status(status).count()
    }

    /// Validate and append a new task.
    pub fn add(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> Result<&Task> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(BoardError::InvalidName);
        }
        if self.find(name).is_some() {
            return Err(BoardError::DuplicateName(name.to_string()));
        }
        if let Some(reminder_at) = draft.reminder_at {
            if reminder_at <= now {
                return Err(BoardError::InvalidReminder);
            }
        }

        self.tasks.push(Task {
            name: name.to_string(),
            category: draft.category.trim().to_string(),
            priority: draft.priority,
            reminder_at: draft.reminder_at,
            status: draft.status,
            created_at: now,
        });
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Remove and return the named task.
    pub fn remove(&mut self, name: &str) -> Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| BoardError::NotFound(name.to_string()))?;
        Ok(self.tasks.remove(idx))
    }

    /// Move the named task to another column. Moving a task onto its current
    /// column is a successful no-op, which is what prevents duplicate cards
    /// in one column.
    pub fn move_task(&mut self, name: &str, new_status: Status) -> Result<&Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| BoardError::NotFound(name.to_string()))?;
        self.tasks[idx].status = new_status;
        Ok(&self.tasks[idx])
    }

    /// Collect every task whose reminder has come due, clearing each reminder
    /// so it can never fire twice. Invoked from the periodic scan tick.
    pub fn scan_reminders(&mut self, now: DateTime<Utc>) -> Vec<Task> {
        let mut fired = Vec::new();
        for task in &mut self.tasks {
            if task.reminder_at.is_some_and(|at| at <= now) {
                task.reminder_at = None;
                fired.push(task.clone());
            }
        }
        fired
    }

    pub fn statistics(&self) -> Statistics {
        let total = self.tasks.len();
        let completed = self.count_with_status(Status::Completed);
        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Statistics {
            total,
            completed,
            completion_rate,
        }
    }
}
