use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use hours_client::time_utils::today;
use hours_client::ApiClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::{mark_busy, run_action};
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let _ = action_tx.send(Action::LoadEntries);

    loop {
        app.today = today();
        app.toast.expire(Instant::now());
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            mark_busy(app, &action);
            terminal.draw(|f| ui::render(f, app))?;
            run_action(action, app, client).await;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
