//! Display rows derived from entries, independent of how they are drawn.

use hours_client::Entry;

/// Key hint shown in the actions column of both tables.
pub const ACTIONS_HINT: &str = "[e] edit  [d] delete";

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub hours: String,
    pub pay: String,
    pub note: String,
    pub actions: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayRow {
    pub start: String,
    pub end: String,
    pub hours: String,
    pub pay: String,
    pub note: String,
    pub actions: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_pay: String,
    pub total_hours: String,
    pub count: usize,
}

pub fn format_hours(hours: Option<f64>) -> String {
    format!("{:.2}", hours.unwrap_or(0.0))
}

pub fn format_money(amount: Option<f64>, currency: &str) -> String {
    format!("{:.2} {}", amount.unwrap_or(0.0), currency)
}

pub fn history_rows(entries: &[Entry], currency: &str) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|entry| HistoryRow {
            date: entry.date.clone(),
            day: entry.day.clone(),
            start: entry.start_time.clone(),
            end: entry.end_time.clone(),
            hours: format_hours(entry.total_hours),
            pay: format_money(entry.pay, currency),
            note: entry.note.clone().unwrap_or_default(),
            actions: ACTIONS_HINT,
        })
        .collect()
}

/// Entries of `today` (ISO date), in list order.
pub fn today_entries<'a>(entries: &'a [Entry], today: &'a str) -> impl Iterator<Item = &'a Entry> {
    entries.iter().filter(move |entry| entry.date == today)
}

pub fn today_rows(entries: &[Entry], today: &str, currency: &str) -> Vec<TodayRow> {
    today_entries(entries, today)
        .map(|entry| TodayRow {
            start: entry.start_time.clone(),
            end: entry.end_time.clone(),
            hours: format_hours(entry.total_hours),
            pay: format_money(entry.pay, currency),
            note: entry.note.clone().unwrap_or_default(),
            actions: ACTIONS_HINT,
        })
        .collect()
}

pub fn summary(entries: &[Entry], currency: &str) -> Summary {
    let total_pay: f64 = entries.iter().map(|e| e.pay.unwrap_or(0.0)).sum();
    let total_hours: f64 = entries.iter().map(|e| e.total_hours.unwrap_or(0.0)).sum();
    Summary {
        total_pay: format_money(Some(total_pay), currency),
        total_hours: format_hours(Some(total_hours)),
        count: entries.len(),
    }
}
