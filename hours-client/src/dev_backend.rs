use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{Entry, NewEntry};
use crate::error::ApiError;
use crate::time_utils::{format_date, now_local, weekday_name_of};

const NOT_FOUND: &str = "Entry not found";

/// In-memory stand-in for the entries API, following the same error conventions.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<Vec<Entry>>>,
    requests: Arc<AtomicUsize>,
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DevBackend {
    /// A backend seeded with a few recent days of work.
    pub fn new() -> Self {
        Self::with_entries(seed_dev_entries())
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            store: Arc::new(Mutex::new(entries)),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of API calls served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.store.lock().expect("dev store lock poisoned").clone()
    }

    fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    pub fn list(&self) -> Vec<Entry> {
        self.record_request();
        let mut list = self.entries();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    }

    pub fn search(&self, date: &str) -> Vec<Entry> {
        self.record_request();
        self.entries()
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    pub fn create(&self, new_entry: &NewEntry) -> Result<Entry, ApiError> {
        self.record_request();
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let id = store.iter().filter_map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = Entry::from_new(new_entry, Some(id));
        store.push(entry.clone());
        Ok(entry)
    }

    pub fn update(&self, id: i64, entry: &Entry) -> Result<(), ApiError> {
        self.record_request();
        let mut store = self.store.lock().expect("dev store lock poisoned");
        match store.iter_mut().find(|e| e.id == Some(id)) {
            Some(existing) => {
                *existing = Entry {
                    id: Some(id),
                    ..entry.clone()
                };
                Ok(())
            }
            None => Err(ApiError::Rejected(NOT_FOUND.to_string())),
        }
    }

    pub fn delete(&self, date: &str) -> Result<(), ApiError> {
        self.record_request();
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let before = store.len();
        store.retain(|entry| entry.date != date);
        if store.len() == before {
            return Err(ApiError::Rejected(NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

fn seed_dev_entries() -> Vec<Entry> {
    let today = now_local().date();

    let entry = |id: i64, days_ago: i64, start: &str, end: &str, hours: f64, note: &str| {
        let date = today - time::Duration::days(days_ago);
        Entry {
            id: Some(id),
            date: format_date(date),
            day: weekday_name_of(date).to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            total_hours: Some(hours),
            pay: Some(hours * 14.0),
            note: Some(note.to_string()),
        }
    };

    vec![
        entry(1, 3, "08:00", "16:00", 8.0, "Inventory"),
        entry(2, 2, "09:00", "17:30", 8.5, "Front desk"),
        entry(3, 1, "07:30", "12:00", 4.5, "Half day"),
        entry(4, 0, "09:00", "13:00", 4.0, ""),
    ]
}
