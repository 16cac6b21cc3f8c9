use super::utils::centered_rect;
use super::*;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App) {
    let Some(date) = app.delete_modal.pending_date() else {
        return;
    };

    let on_date: Vec<_> = app.entries.iter().filter(|e| e.date == date).collect();
    let hours: f64 = on_date.iter().map(|e| e.total_hours.unwrap_or(0.0)).sum();
    let detail = format!("{} entries  ·  {:.2}h", on_date.len(), hours);

    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let confirm_style = if app.delete_modal.is_in_flight() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red)
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete everything logged on {}?", date),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[y] {}", app.delete_modal.confirm_label()),
                confirm_style,
            ),
            Span::raw("    "),
            Span::styled("[n] Cancel", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Delete Entry? ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
