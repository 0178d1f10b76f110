//! Taskdeck library - Core functionality for the terminal kanban board

pub mod board;
pub mod cli;
pub mod config;
pub mod tui;
