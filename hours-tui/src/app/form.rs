use hours_client::time_utils::{
    compute_pay, current_time_rounded_to_five, derive_end_time, elapsed_hours, split_time, today,
    weekday_name, TimeError,
};
use hours_client::{domain::round_to_cents, Entry, NewEntry};
use thiserror::Error;

use super::state::{FormField, TextInput};

const DATE_LEN: usize = 10;
const TIME_PART_LEN: usize = 2;
const NOTE_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("End time must be after start time")]
    NonPositiveDuration,
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// The stored entry being edited. Its date and day are kept as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub id: i64,
    pub date: String,
    pub day: String,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub date: TextInput,
    pub start_hour: TextInput,
    pub start_minute: TextInput,
    pub end_hour: TextInput,
    pub end_minute: TextInput,
    pub note: TextInput,
    pub focused: FormField,
    pub editing: Option<EditTarget>,
    pub submitting: bool,
}

impl FormState {
    /// Fresh form: today's date, start at the current time rounded down to five
    /// minutes, end eight hours later.
    pub fn new() -> Self {
        let (hour, minute) = current_time_rounded_to_five();
        Self::with_defaults(&today(), hour, minute)
    }

    pub fn with_defaults(date: &str, hour: u8, minute: u8) -> Self {
        let mut form = Self {
            date: TextInput::with_limit(DATE_LEN),
            start_hour: TextInput::with_limit(TIME_PART_LEN),
            start_minute: TextInput::with_limit(TIME_PART_LEN),
            end_hour: TextInput::with_limit(TIME_PART_LEN),
            end_minute: TextInput::with_limit(TIME_PART_LEN),
            note: TextInput::with_limit(NOTE_LEN),
            focused: FormField::Date,
            editing: None,
            submitting: false,
        };
        form.date.set(date);
        form.start_hour.set(&format!("{:02}", hour));
        form.start_minute.set(&format!("{:02}", minute));
        form.refresh_end_time();
        form
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Fill the form from a stored entry and switch to edit mode.
    pub fn load_entry(&mut self, id: i64, entry: &Entry) {
        let (start_hour, start_minute) = split_time(&entry.start_time);
        let (end_hour, end_minute) = split_time(&entry.end_time);

        self.date.set(&entry.date);
        self.start_hour.set(&start_hour);
        self.start_minute.set(&start_minute);
        self.end_hour.set(&end_hour);
        self.end_minute.set(&end_minute);
        self.note.set(entry.note.as_deref().unwrap_or_default());
        self.editing = Some(EditTarget {
            id,
            date: entry.date.clone(),
            day: entry.day.clone(),
        });
        self.focused = FormField::StartHour;
        self.submitting = false;
    }

    /// Suggest the end time from the current start time.
    pub fn refresh_end_time(&mut self) {
        let (hour, minute) = derive_end_time(&self.start_hour.value, &self.start_minute.value);
        self.end_hour.set(&hour);
        self.end_minute.set(&minute);
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_editing(), self.submitting) {
            (false, false) => "Add Entry",
            (false, true) => "Saving...",
            (true, false) => "Update Entry",
            (true, true) => "Updating...",
        }
    }

    /// The date cannot be changed while editing.
    pub fn is_read_only(&self, field: FormField) -> bool {
        field == FormField::Date && self.is_editing()
    }

    fn field_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::Date => &mut self.date,
            FormField::StartHour => &mut self.start_hour,
            FormField::StartMinute => &mut self.start_minute,
            FormField::EndHour => &mut self.end_hour,
            FormField::EndMinute => &mut self.end_minute,
            FormField::Note => &mut self.note,
        }
    }

    pub fn field(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Date => &self.date,
            FormField::StartHour => &self.start_hour,
            FormField::StartMinute => &self.start_minute,
            FormField::EndHour => &self.end_hour,
            FormField::EndMinute => &self.end_minute,
            FormField::Note => &self.note,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Type into the focused field. Dates take digits and dashes, times take digits.
    pub fn input_char(&mut self, c: char) {
        let field = self.focused;
        if self.is_read_only(field) {
            return;
        }
        let accepted = match field {
            FormField::Date => c.is_ascii_digit() || c == '-',
            FormField::Note => !c.is_control(),
            _ => c.is_ascii_digit(),
        };
        if accepted && self.field_mut(field).insert(c) && field.is_start() {
            self.refresh_end_time();
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        if self.is_read_only(field) {
            return;
        }
        self.field_mut(field).backspace();
        if field.is_start() {
            self.refresh_end_time();
        }
    }

    pub fn move_cursor(&mut self, left: bool) {
        let field = self.focused;
        let input = self.field_mut(field);
        if left {
            input.move_left();
        } else {
            input.move_right();
        }
    }

    fn start_time(&self) -> String {
        format!(
            "{:0>2}:{:0>2}",
            self.start_hour.value.trim(),
            self.start_minute.value.trim()
        )
    }

    fn end_time(&self) -> String {
        format!(
            "{:0>2}:{:0>2}",
            self.end_hour.value.trim(),
            self.end_minute.value.trim()
        )
    }

    fn check_required(&self) -> Result<(), FormError> {
        let missing = [
            &self.date,
            &self.start_hour,
            &self.start_minute,
            &self.end_hour,
            &self.end_minute,
        ]
        .iter()
        .any(|input| input.is_empty());
        if missing {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }

    /// Hours and pay for the entered times.
    fn derived_values(&self, hourly_rate: f64) -> Result<(f64, f64), FormError> {
        let hours = elapsed_hours(&self.start_time(), &self.end_time())?;
        if hours <= 0.0 {
            return Err(FormError::NonPositiveDuration);
        }
        Ok((hours, compute_pay(hours, hourly_rate)))
    }

    /// Validate the form and build the create payload.
    pub fn build_new_entry(&self, hourly_rate: f64) -> Result<NewEntry, FormError> {
        self.check_required()?;
        let date = self.date.value.trim().to_string();
        let day = weekday_name(&date)?;
        let (total_hours, pay) = self.derived_values(hourly_rate)?;

        Ok(NewEntry {
            date,
            day: day.to_string(),
            start: self.start_time(),
            end: self.end_time(),
            total_hours,
            pay,
            note: self.note.value.trim().to_string(),
        })
    }

    /// Validate the form and build the full entry for an update.
    pub fn build_updated_entry(
        &self,
        target: &EditTarget,
        hourly_rate: f64,
    ) -> Result<Entry, FormError> {
        self.check_required()?;
        let (total_hours, pay) = self.derived_values(hourly_rate)?;

        Ok(Entry {
            id: Some(target.id),
            date: target.date.clone(),
            day: target.day.clone(),
            start_time: self.start_time(),
            end_time: self.end_time(),
            total_hours: Some(round_to_cents(total_hours)),
            pay: Some(round_to_cents(pay)),
            note: Some(self.note.value.trim().to_string()),
        })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
