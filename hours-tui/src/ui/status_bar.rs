use super::*;
use crate::app::{Focus, ToastKind};

pub fn render_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(toast) = app.toast.current() else {
        return;
    };
    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✓", Color::Green),
        ToastKind::Error => ("✗", Color::Red),
    };
    let line = Line::from(Span::styled(
        format!(" {} {}", icon, toast.message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn bindings(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.delete_modal.is_shown() {
        return &[("y", "Delete"), ("n/Esc", "Cancel")];
    }
    match app.focus {
        Focus::Form if app.form.is_editing() => &[
            ("Tab/↑↓", "Field"),
            ("Enter", "Update"),
            ("Esc", "Cancel edit"),
            ("Ctrl+C", "Quit"),
        ],
        Focus::Form => &[
            ("Tab/↑↓", "Field"),
            ("Enter", "Add"),
            ("Ctrl+C", "Quit"),
        ],
        Focus::Search => &[
            ("Enter", "Search"),
            ("Esc", "Clear"),
            ("Tab", "Next panel"),
        ],
        Focus::History | Focus::Today => &[
            ("j/k", "Move"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("r", "Reload"),
            ("Esc", "Show all"),
            ("Tab", "Next panel"),
            ("q", "Quit"),
        ],
    }
}

pub fn render_help_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in bindings(app) {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(": {}  ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
