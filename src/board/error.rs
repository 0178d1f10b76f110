use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Task name cannot be empty")]
    InvalidName,

    #[error("A task named '{0}' already exists")]
    DuplicateName(String),

    #[error("Reminder must be strictly in the future")]
    InvalidReminder,

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
