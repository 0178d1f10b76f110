//! Tests for BoardView

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::BoardView;
use crate::board::{Status, TaskDraft};
use crate::config::Config;
use crate::tui::app::Action;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn draft(name: &str, status: Status) -> TaskDraft {
    TaskDraft {
        name: name.to_string(),
        status,
        ..Default::default()
    }
}

fn empty_view() -> BoardView {
    BoardView::new(Config::default())
}

fn view_with_tasks() -> BoardView {
    let mut view = empty_view();
    view.store.add(draft("alpha", Status::ToDo), now()).unwrap();
    view.store.add(draft("beta", Status::ToDo), now()).unwrap();
    view.store.add(draft("gamma", Status::Doing), now()).unwrap();
    view
}

fn type_text(view: &mut BoardView, text: &str) {
    for c in text.chars() {
        view.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_starts_on_todo_column() {
    let view = view_with_tasks();
    assert_eq!(view.column, 0);
    assert_eq!(view.current_status(), Status::ToDo);
}

#[test]
fn test_q_returns_quit_action() {
    let mut view = empty_view();
    let action = view.handle_key(key(KeyCode::Char('q')));
    assert_eq!(action, Some(Action::Quit));
}

#[test]
fn test_h_l_switch_columns_and_clamp_at_edges() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('h')));
    assert_eq!(view.column, 0);

    view.handle_key(key(KeyCode::Char('l')));
    assert_eq!(view.current_status(), Status::Doing);
    view.handle_key(key(KeyCode::Char('l')));
    view.handle_key(key(KeyCode::Char('l')));
    assert_eq!(view.current_status(), Status::Completed);
}

#[test]
fn test_j_k_move_cursor_within_column() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('j')));
    assert_eq!(view.cursors[0], 1);
    // Only two tasks in To-Do
    view.handle_key(key(KeyCode::Char('j')));
    assert_eq!(view.cursors[0], 1);
    view.handle_key(key(KeyCode::Char('k')));
    assert_eq!(view.cursors[0], 0);
}

#[test]
fn test_g_and_shift_g_jump_to_ends() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('G')));
    assert_eq!(view.cursors[0], 1);
    view.handle_key(key(KeyCode::Char('g')));
    assert_eq!(view.cursors[0], 0);
}

#[test]
fn test_shift_l_moves_card_to_next_column() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('L')));

    assert_eq!(view.store.find("alpha").unwrap().status, Status::Doing);
    // Cursor follows the moved card
    assert_eq!(view.current_status(), Status::Doing);
    assert_eq!(view.selected_task().unwrap().name, "alpha");
}

#[test]
fn test_shift_h_at_leftmost_column_is_noop() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('H')));
    assert_eq!(view.store.find("alpha").unwrap().status, Status::ToDo);
}

#[test]
fn test_move_on_empty_column_is_noop() {
    let mut view = empty_view();
    view.handle_key(key(KeyCode::Char('L')));
    assert!(view.store.is_empty());
    assert!(view.notice.is_none());
}

#[test]
fn test_question_mark_toggles_help() {
    let mut view = empty_view();
    assert!(!view.show_help);
    view.handle_key(key(KeyCode::Char('?')));
    assert!(view.show_help);
    view.handle_key(key(KeyCode::Char('?')));
    assert!(!view.show_help);
}

#[test]
fn test_n_opens_new_task_dialog() {
    let mut view = empty_view();
    view.handle_key(key(KeyCode::Char('n')));
    assert!(view.new_dialog.is_some());
    assert!(view.has_dialog());
}

#[test]
fn test_add_through_dialog_inserts_and_focuses_task() {
    let mut view = empty_view();
    view.handle_key(key(KeyCode::Char('n')));
    type_text(&mut view, "Buy milk");
    view.handle_key(key(KeyCode::Enter));

    assert!(view.new_dialog.is_none());
    assert_eq!(view.store.len(), 1);
    assert_eq!(view.selected_task().unwrap().name, "Buy milk");
    assert_eq!(view.notice.as_ref().unwrap().text, "Added 'Buy milk'");
}

#[test]
fn test_duplicate_add_keeps_dialog_open() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('n')));
    type_text(&mut view, "alpha");
    view.handle_key(key(KeyCode::Enter));

    assert!(view.new_dialog.is_some());
    assert_eq!(view.store.len(), 3);
}

#[test]
fn test_blank_name_keeps_dialog_open() {
    let mut view = empty_view();
    view.handle_key(key(KeyCode::Char('n')));
    view.handle_key(key(KeyCode::Enter));

    assert!(view.new_dialog.is_some());
    assert!(view.store.is_empty());
}

#[test]
fn test_dialog_cancel_discards_input() {
    let mut view = empty_view();
    view.handle_key(key(KeyCode::Char('n')));
    type_text(&mut view, "Buy milk");
    view.handle_key(key(KeyCode::Esc));

    assert!(view.new_dialog.is_none());
    assert!(view.store.is_empty());
}

#[test]
fn test_d_opens_confirm_for_selected_task() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('d')));
    assert!(view.confirm_dialog.is_some());
    assert_eq!(view.pending_delete.as_deref(), Some("alpha"));
}

#[test]
fn test_d_on_empty_column_does_nothing() {
    let mut view = empty_view();
    view.handle_key(key(KeyCode::Char('d')));
    assert!(view.confirm_dialog.is_none());
}

#[test]
fn test_confirmed_delete_removes_task() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('d')));
    view.handle_key(key(KeyCode::Char('y')));

    assert!(view.confirm_dialog.is_none());
    assert!(view.store.find("alpha").is_none());
    assert_eq!(view.notice.as_ref().unwrap().text, "Deleted 'alpha'");
}

#[test]
fn test_cancelled_delete_keeps_task() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('d')));
    view.handle_key(key(KeyCode::Esc));

    assert!(view.store.find("alpha").is_some());
    assert!(view.pending_delete.is_none());
}

#[test]
fn test_s_opens_stats_and_esc_closes() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('s')));
    assert!(view.stats_dialog.is_some());
    view.handle_key(key(KeyCode::Esc));
    assert!(view.stats_dialog.is_none());
}

#[test]
fn test_e_opens_export_dialog() {
    let mut view = empty_view();
    view.handle_key(key(KeyCode::Char('e')));
    assert!(view.export_dialog.is_some());
}

#[test]
fn test_export_writes_file_and_notices() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut view = view_with_tasks();
    view.export_dialog = Some(super::ExportDialog::new(
        path.to_string_lossy().into_owned(),
    ));
    view.handle_key(key(KeyCode::Enter));

    assert!(view.export_dialog.is_none());
    assert!(path.exists());
    let notice = view.notice.as_ref().unwrap();
    assert!(notice.text.starts_with("Exported 3 tasks"));
    assert!(!notice.is_error);
}

#[test]
fn test_export_failure_keeps_dialog_open() {
    let mut view = view_with_tasks();
    view.export_dialog = Some(super::ExportDialog::new(
        "/nonexistent-dir/out.csv".to_string(),
    ));
    view.handle_key(key(KeyCode::Enter));

    assert!(view.export_dialog.is_some());
}

#[test]
fn test_tick_reminders_notices_due_task() {
    let mut view = empty_view();
    let due = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 30).unwrap();
    view.store
        .add(
            TaskDraft {
                name: "call mom".to_string(),
                reminder_at: Some(due),
                ..Default::default()
            },
            now(),
        )
        .unwrap();

    assert!(!view.tick_reminders(now()));
    assert!(view.notice.is_none());

    assert!(view.tick_reminders(due));
    assert_eq!(view.notice.as_ref().unwrap().text, "Reminder: call mom");

    // One-shot: a later tick stays quiet
    view.notice = None;
    assert!(!view.tick_reminders(Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap()));
    assert!(view.notice.is_none());
}

#[test]
fn test_tick_reminders_joins_multiple_names() {
    let mut view = empty_view();
    let due = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 30).unwrap();
    for name in ["one", "two"] {
        view.store
            .add(
                TaskDraft {
                    name: name.to_string(),
                    reminder_at: Some(due),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();
    }

    assert!(view.tick_reminders(due));
    assert_eq!(view.notice.as_ref().unwrap().text, "Reminders: one, two");
}

#[test]
fn test_esc_clears_notice() {
    let mut view = empty_view();
    view.set_notice("hello".to_string());
    view.handle_key(key(KeyCode::Esc));
    assert!(view.notice.is_none());
}

#[test]
fn test_delete_last_task_in_column_clamps_cursor() {
    let mut view = view_with_tasks();
    view.handle_key(key(KeyCode::Char('G')));
    assert_eq!(view.cursors[0], 1);

    view.handle_key(key(KeyCode::Char('d')));
    view.handle_key(key(KeyCode::Char('y')));

    assert_eq!(view.cursors[0], 0);
    assert_eq!(view.selected_task().unwrap().name, "alpha");
}
