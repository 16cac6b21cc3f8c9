use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_search_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => {
            let date = app.search_input.value.clone();
            enqueue_action(action_tx, Action::Search { date });
        }
        KeyCode::Esc => app.clear_search(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.home(),
        KeyCode::End => app.search_input.end(),
        KeyCode::Backspace => app.search_input.backspace(),
        KeyCode::Char(c)
            if (c.is_ascii_digit() || c == '-')
                && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.search_input.insert(c);
        }
        _ => {}
    }
}
