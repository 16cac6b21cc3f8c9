use crate::config::HoursConfig;
use crate::view_model;
use hours_client::time_utils::today;
use hours_client::Entry;
use ratatui::widgets::TableState;

mod form;
mod modal;
mod state;
mod toast;
pub use form::{EditTarget, FormState};
pub use modal::DeleteModal;
pub use state::{Focus, FormField, TextInput};
pub use toast::{Notifier, ToastKind};

pub struct App {
    pub running: bool,
    pub focus: Focus,

    // Client cache of server state, replaced on load and patched on confirmed edits
    pub entries: Vec<Entry>,
    /// Search results shown instead of `entries` until the next reload.
    pub search_results: Option<Vec<Entry>>,
    pub search_input: TextInput,

    pub form: FormState,
    pub toast: Notifier,
    pub delete_modal: DeleteModal,

    pub history_state: TableState,
    pub today_state: TableState,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    // Config values used at runtime
    pub hourly_rate: f64,
    pub currency: String,
    /// ISO date used for the "today" table, refreshed every tick.
    pub today: String,
}

impl App {
    pub fn new(cfg: &HoursConfig) -> Self {
        Self {
            running: true,
            focus: Focus::Form,
            entries: Vec::new(),
            search_results: None,
            search_input: TextInput::with_limit(10),
            form: FormState::new(),
            toast: Notifier::default(),
            delete_modal: DeleteModal::default(),
            history_state: TableState::default(),
            today_state: TableState::default(),
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            hourly_rate: cfg.hourly_rate,
            currency: cfg.currency.clone(),
            today: today(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Entries currently on screen: search results when present, else all entries.
    pub fn visible_entries(&self) -> &[Entry] {
        self.search_results.as_deref().unwrap_or(&self.entries)
    }

    pub fn today_entries(&self) -> Vec<&Entry> {
        view_model::today_entries(self.visible_entries(), &self.today).collect()
    }

    /// Replace the cache with a fresh server list and drop any search projection.
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.search_results = None;
        self.clamp_selection();
    }

    pub fn show_search_results(&mut self, results: Vec<Entry>) {
        self.search_results = Some(results);
        self.history_state.select(Some(0));
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.search_results = None;
        self.search_input.clear();
        self.clamp_selection();
    }

    /// Swap in the updated entry at its id.
    pub fn patch_entry(&mut self, entry: Entry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        }
        self.search_results = None;
    }

    /// Drop every entry on `date`. Returns how many were removed.
    pub fn remove_entries_on(&mut self, date: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.date != date);
        self.search_results = None;
        self.clamp_selection();
        before - self.entries.len()
    }

    fn focused_table(&mut self) -> Option<(&mut TableState, usize)> {
        match self.focus {
            Focus::History => {
                let len = self.visible_entries().len();
                Some((&mut self.history_state, len))
            }
            Focus::Today => {
                let len = self.today_entries().len();
                Some((&mut self.today_state, len))
            }
            Focus::Form | Focus::Search => None,
        }
    }

    pub fn select_next(&mut self) {
        if let Some((state, len)) = self.focused_table() {
            if len == 0 {
                state.select(None);
                return;
            }
            let next = state.selected().map_or(0, |i| (i + 1).min(len - 1));
            state.select(Some(next));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some((state, len)) = self.focused_table() {
            if len == 0 {
                state.select(None);
                return;
            }
            let prev = state.selected().map_or(0, |i| i.saturating_sub(1));
            state.select(Some(prev));
        }
    }

    fn clamp_selection(&mut self) {
        let history_len = self.visible_entries().len();
        let today_len = self.today_entries().len();
        clamp(&mut self.history_state, history_len);
        clamp(&mut self.today_state, today_len);
    }

    /// Entry under the cursor of the focused table.
    pub fn selected_entry(&self) -> Option<&Entry> {
        match self.focus {
            Focus::History => self
                .history_state
                .selected()
                .and_then(|i| self.visible_entries().get(i)),
            Focus::Today => self
                .today_state
                .selected()
                .and_then(|i| self.today_entries().get(i).copied()),
            Focus::Form | Focus::Search => None,
        }
    }

    /// Load the entry stored for `date` into the form for editing.
    pub fn begin_edit(&mut self, date: &str) {
        let Some(entry) = self.entries.iter().find(|e| e.date == date) else {
            self.toast.error("Entry not found");
            return;
        };
        let Some(id) = entry.id else {
            self.toast.error("Entry has no id and cannot be edited");
            return;
        };
        let entry = entry.clone();
        self.form.load_entry(id, &entry);
        self.focus = Focus::Form;
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    pub fn open_delete_for_selected(&mut self) {
        if let Some(date) = self.selected_entry().map(|e| e.date.clone()) {
            self.delete_modal.open(&date);
        }
    }

    pub fn edit_selected(&mut self) {
        if let Some(date) = self.selected_entry().map(|e| e.date.clone()) {
            self.begin_edit(&date);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.select_first_if_unset();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.select_first_if_unset();
    }

    fn select_first_if_unset(&mut self) {
        if let Some((state, len)) = self.focused_table() {
            if state.selected().is_none() && len > 0 {
                state.select(Some(0));
            }
        }
    }
}

fn clamp(state: &mut TableState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        _ => {}
    }
}
