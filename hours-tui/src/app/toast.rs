use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

/// Single-slot transient notification. A new message replaces the current one
/// and restarts its timer.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Toast>,
}

impl Notifier {
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.notify_at(message, kind, Instant::now());
    }

    pub fn notify_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        match kind {
            ToastKind::Success => tracing::info!("{}", message),
            ToastKind::Error => tracing::warn!("{}", message),
        }
        self.current = Some(Toast {
            message,
            kind,
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, ToastKind::Error);
    }

    /// Hide the toast once it has been visible for [`TOAST_DURATION`].
    pub fn expire(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|toast| now.duration_since(toast.shown_at) >= TOAST_DURATION)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_hides_after_three_seconds() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.notify_at("Saved", ToastKind::Success, start);

        notifier.expire(start + Duration::from_millis(2999));
        assert_eq!(notifier.current().map(|t| t.message.as_str()), Some("Saved"));

        notifier.expire(start + TOAST_DURATION);
        assert!(notifier.current().is_none());
    }

    #[test]
    fn last_call_wins_and_restarts_timer() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.notify_at("first", ToastKind::Success, start);
        notifier.notify_at("second", ToastKind::Error, start + Duration::from_secs(2));

        notifier.expire(start + Duration::from_secs(4));
        let toast = notifier.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
    }
}
