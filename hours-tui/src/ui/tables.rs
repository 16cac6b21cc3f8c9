use super::utils::focus_border;
use super::*;
use crate::app::Focus;
use crate::view_model::{self, HistoryRow, TodayRow};
use ratatui::widgets::{Cell, Row, Table};

fn header(columns: &[&'static str]) -> Row<'static> {
    Row::new(columns.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn history_row(row: HistoryRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(row.date),
        Cell::from(row.day),
        Cell::from(row.start),
        Cell::from(row.end),
        Cell::from(row.hours),
        Cell::from(row.pay),
        Cell::from(row.note),
        Cell::from(Span::styled(row.actions, Style::default().fg(Color::DarkGray))),
    ])
}

fn today_row(row: TodayRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(row.start),
        Cell::from(row.end),
        Cell::from(row.hours),
        Cell::from(row.pay),
        Cell::from(row.note),
        Cell::from(Span::styled(row.actions, Style::default().fg(Color::DarkGray))),
    ])
}

pub fn render_history_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::History;
    let rows = view_model::history_rows(app.visible_entries(), &app.currency);
    let title = match &app.search_results {
        Some(_) => format!(
            " Search results for {} ({}) · Esc to show all ",
            app.search_input.value.trim(),
            rows.len()
        ),
        None => format!(" History ({}) ", rows.len()),
    };

    let table = Table::new(
        rows.into_iter().map(history_row),
        [
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(10),
            Constraint::Length(20),
        ],
    )
    .header(header(&[
        "Date", "Day", "Start", "End", "Hours", "Pay", "Note", "Actions",
    ]))
    .row_highlight_style(highlight(focused))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title(title),
    );

    frame.render_stateful_widget(table, area, &mut app.history_state);
}

pub fn render_today_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Today;
    let rows = view_model::today_rows(app.visible_entries(), &app.today, &app.currency);
    let title = format!(" Today · {} ({}) ", app.today, rows.len());

    let table = Table::new(
        rows.into_iter().map(today_row),
        [
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(10),
            Constraint::Length(20),
        ],
    )
    .header(header(&["Start", "End", "Hours", "Pay", "Note", "Actions"]))
    .row_highlight_style(highlight(focused))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title(title),
    );

    frame.render_stateful_widget(table, area, &mut app.today_state);
}

/// Totals over all loaded entries, independent of any search.
pub fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let summary = view_model::summary(&app.entries, &app.currency);
    let muted = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(" Total pay: ", muted),
        Span::styled(
            summary.total_pay,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Hours: ", muted),
        Span::raw(summary.total_hours),
        Span::styled("   Entries: ", muted),
        Span::raw(summary.count.to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
