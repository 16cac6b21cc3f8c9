use crate::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod form;
mod search;
mod tables;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.delete_modal.is_shown() {
        confirm_delete::handle_confirm_delete_key(key, app, action_tx);
        return;
    }

    match app.focus {
        Focus::Form => form::handle_form_key(key, app, action_tx),
        Focus::Search => search::handle_search_key(key, app, action_tx),
        Focus::History | Focus::Today => tables::handle_table_key(key, app, action_tx),
    }
}
