use crate::app::{App, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => {
            if !app.form.submitting {
                enqueue_action(action_tx, Action::SubmitForm);
            }
        }
        // Tab past the last field leaves the form.
        KeyCode::Tab => {
            if app.form.focused == FormField::Note {
                app.focus_next();
            } else {
                app.form.next_field();
            }
        }
        KeyCode::BackTab => {
            if app.form.focused == FormField::Date {
                app.focus_prev();
            } else {
                app.form.prev_field();
            }
        }
        KeyCode::Down => app.form.next_field(),
        KeyCode::Up => app.form.prev_field(),
        KeyCode::Left => app.form.move_cursor(true),
        KeyCode::Right => app.form.move_cursor(false),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Esc => {
            if app.form.is_editing() {
                app.cancel_edit();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.input_char(c);
        }
        _ => {}
    }
}
