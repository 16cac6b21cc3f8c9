/// Delete confirmation dialog. The captured date is what gets deleted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteModal {
    #[default]
    Hidden,
    Shown { date: String, in_flight: bool },
}

impl DeleteModal {
    pub fn open(&mut self, date: &str) {
        if self.is_in_flight() {
            return;
        }
        *self = DeleteModal::Shown {
            date: date.to_string(),
            in_flight: false,
        };
    }

    /// Close without deleting. Ignored while the request is running.
    pub fn cancel(&mut self) {
        if !self.is_in_flight() {
            *self = DeleteModal::Hidden;
        }
    }

    pub fn close(&mut self) {
        *self = DeleteModal::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, DeleteModal::Shown { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, DeleteModal::Shown { in_flight: true, .. })
    }

    pub fn pending_date(&self) -> Option<&str> {
        match self {
            DeleteModal::Shown { date, .. } => Some(date),
            DeleteModal::Hidden => None,
        }
    }

    pub fn set_in_flight(&mut self, busy: bool) {
        if let DeleteModal::Shown { in_flight, .. } = self {
            *in_flight = busy;
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.is_in_flight() {
            "Deleting..."
        } else {
            "Yes, delete"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_cancel() {
        let mut modal = DeleteModal::default();
        modal.open("2026-10-16");
        assert_eq!(modal.pending_date(), Some("2026-10-16"));
        assert_eq!(modal.confirm_label(), "Yes, delete");

        modal.cancel();
        assert_eq!(modal, DeleteModal::Hidden);
        assert_eq!(modal.pending_date(), None);
    }

    #[test]
    fn in_flight_modal_ignores_cancel_and_reopen() {
        let mut modal = DeleteModal::default();
        modal.open("2026-10-16");
        modal.set_in_flight(true);
        assert_eq!(modal.confirm_label(), "Deleting...");

        modal.cancel();
        modal.open("2026-10-01");
        assert_eq!(modal.pending_date(), Some("2026-10-16"));

        modal.set_in_flight(false);
        modal.cancel();
        assert!(!modal.is_shown());
    }

    #[test]
    fn in_flight_on_hidden_modal_is_a_no_op() {
        let mut modal = DeleteModal::Hidden;
        modal.set_in_flight(true);
        assert_eq!(modal, DeleteModal::Hidden);
    }
}
