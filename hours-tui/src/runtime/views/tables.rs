use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

/// Keys for the history and today tables.
pub(super) fn handle_table_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => app.edit_selected(),
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => {
            app.open_delete_for_selected()
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::LoadEntries);
        }
        KeyCode::Esc => app.clear_search(),
        _ => {}
    }
}
