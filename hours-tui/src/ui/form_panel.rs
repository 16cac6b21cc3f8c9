use super::utils::{focus_border, input_text};
use super::*;
use crate::app::{Focus, FormField};
use hours_client::time_utils::current_weekday_name;

const LABEL_WIDTH: usize = 8;

pub fn render_form_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let form_focused = app.focus == Focus::Form;

    let field_style = |field: FormField| {
        if form.is_read_only(field) {
            Style::default().fg(Color::DarkGray)
        } else if form_focused && form.focused == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };
    let value = |field: FormField| {
        Span::styled(
            input_text(form.field(field), form_focused && form.focused == field),
            field_style(field),
        )
    };
    let label = |text: &str| {
        Span::styled(
            format!("{:<width$}", text, width = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        )
    };
    let separator = || Span::styled(" : ", Style::default().fg(Color::DarkGray));

    let button_style = if form.submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![label("Date"), value(FormField::Date)]),
        Line::from(vec![
            label("Start"),
            value(FormField::StartHour),
            separator(),
            value(FormField::StartMinute),
        ]),
        Line::from(vec![
            label("End"),
            value(FormField::EndHour),
            separator(),
            value(FormField::EndMinute),
        ]),
        Line::from(vec![label("Notes"), value(FormField::Note)]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", form.submit_label()),
            button_style,
        )),
    ];
    if form.is_editing() {
        lines.push(Line::from(Span::styled(
            "Esc: cancel edit",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = match &form.editing {
        Some(target) => format!(" Edit Entry · {} {} ", target.day, target.date),
        None => format!(" New Entry · {} ", current_weekday_name()),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(form_focused))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search;
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let text = if app.search_input.value.is_empty() && !focused {
        Span::styled("YYYY-MM-DD", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input_text(&app.search_input, focused), style)
    };

    let paragraph = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title(" Search by date ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
