use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod delete_dialog;
mod form_panel;
mod status_bar;
mod tables;
pub(super) mod utils;

const TITLE: &str = " Work Hours";

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(0)])
        .split(root[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(body[0]);
    form_panel::render_form_panel(frame, left[0], app);
    form_panel::render_search_box(frame, left[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(body[1]);
    tables::render_history_table(frame, right[0], app);
    tables::render_today_table(frame, right[1], app);
    tables::render_summary(frame, right[2], app);

    status_bar::render_toast(frame, root[2], app);
    status_bar::render_help_line(frame, root[3], app);

    if app.delete_modal.is_shown() {
        delete_dialog::render_delete_confirm_dialog(frame, app);
    }
}

/// Title with a throbber that spins while entries are loading.
fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let throbber_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);

    let mut spans = vec![Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(
        format!("  {}/h {}", app.hourly_rate, app.currency),
        Style::default().fg(Color::DarkGray),
    ));
    if app.is_loading {
        spans.push(Span::styled(
            "  Loading entries...",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), label_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HoursConfig;
    use hours_client::Entry;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_list_draws_zero_totals() {
        let mut app = App::new(&HoursConfig::default());
        let screen = draw(&mut app);

        assert!(screen.contains("History (0)"));
        assert!(screen.contains("0.00 ₪"));
        assert!(screen.contains("Add Entry"));
    }

    #[test]
    fn entries_and_delete_dialog_are_drawn() {
        let mut app = App::new(&HoursConfig::default());
        app.today = "2026-10-16".to_string();
        app.replace_entries(vec![Entry {
            id: Some(1),
            date: "2026-10-16".to_string(),
            day: "Friday".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            total_hours: Some(8.0),
            pay: Some(112.0),
            note: Some("inventory".to_string()),
        }]);
        app.delete_modal.open("2026-10-16");

        let screen = draw(&mut app);
        assert!(screen.contains("History (1)"));
        assert!(screen.contains("112.00 ₪"));
        assert!(screen.contains("Delete Entry?"));
        assert!(screen.contains("Yes, delete"));
    }
}
