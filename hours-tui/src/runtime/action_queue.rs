use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    LoadEntries,
    /// Create or update, depending on whether the form is editing.
    SubmitForm,
    Search {
        date: String,
    },
    ConfirmDelete,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
