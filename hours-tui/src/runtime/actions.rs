use crate::app::App;
use hours_client::{ApiClient, ApiError};

use super::action_queue::Action;

/// Flag the control an action belongs to as busy, so the next frame shows its
/// progress label before the request starts.
pub(super) fn mark_busy(app: &mut App, action: &Action) {
    match action {
        Action::LoadEntries => app.is_loading = true,
        Action::SubmitForm => app.form.submitting = true,
        Action::ConfirmDelete => app.delete_modal.set_in_flight(true),
        Action::Search { .. } => {}
    }
}

pub(super) async fn run_action(action: Action, app: &mut App, client: &ApiClient) {
    tracing::debug!("Running {:?}", action);
    match action {
        Action::LoadEntries => {
            load_entries(app, client).await;
        }
        Action::SubmitForm => match app.form.editing.clone() {
            Some(target) => handle_update(app, client, target).await,
            None => handle_create(app, client).await,
        },
        Action::Search { date } => {
            handle_search(app, client, &date).await;
        }
        Action::ConfirmDelete => {
            handle_confirm_delete(app, client).await;
        }
    }
}

/// Server message when there is one, otherwise the generic text.
fn failure_message(error: &ApiError, fallback: &str) -> String {
    error
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

async fn load_entries(app: &mut App, client: &ApiClient) {
    match client.list().await {
        Ok(entries) => {
            tracing::info!("Loaded {} entries", entries.len());
            app.replace_entries(entries);
        }
        Err(e) => {
            app.toast
                .error(failure_message(&e, &format!("Failed to load entries: {}", e)));
        }
    }
    app.is_loading = false;
}

async fn handle_create(app: &mut App, client: &ApiClient) {
    let new_entry = match app.form.build_new_entry(app.hourly_rate) {
        Ok(entry) => entry,
        Err(e) => {
            app.form.submitting = false;
            app.toast.error(e.to_string());
            return;
        }
    };

    match client.create(&new_entry).await {
        Ok(_) => {
            tracing::info!(
                "Added entry for {} ({:.2}h)",
                new_entry.date,
                new_entry.total_hours
            );
            app.form.reset();
            match client.list().await {
                Ok(entries) => app.replace_entries(entries),
                Err(e) => tracing::warn!("Reload after create failed: {}", e),
            }
            app.toast.success("Entry added successfully");
        }
        Err(e) => {
            app.toast.error(failure_message(&e, "Failed to add entry"));
        }
    }
    app.form.submitting = false;
}

async fn handle_update(app: &mut App, client: &ApiClient, target: crate::app::EditTarget) {
    let entry = match app.form.build_updated_entry(&target, app.hourly_rate) {
        Ok(entry) => entry,
        Err(e) => {
            app.form.submitting = false;
            app.toast.error(e.to_string());
            return;
        }
    };

    match client.update(target.id, &entry).await {
        Ok(()) => {
            tracing::info!("Updated entry {} on {}", target.id, target.date);
            app.patch_entry(entry);
            app.form.reset();
            app.toast.success("Entry updated successfully");
        }
        Err(e) => {
            app.toast.error(failure_message(&e, "Failed to update entry"));
        }
    }
    app.form.submitting = false;
}

async fn handle_search(app: &mut App, client: &ApiClient, date: &str) {
    let date = date.trim();
    if date.is_empty() {
        app.toast.error("Please enter a date to search");
        return;
    }

    match client.search_by_date(date).await {
        Ok(results) if results.is_empty() => {
            app.toast.error("No results.");
        }
        Ok(results) => {
            tracing::info!("Search for {} matched {} entries", date, results.len());
            app.show_search_results(results);
            app.toast.success("Search results displayed");
        }
        Err(e) => {
            app.toast.error(failure_message(&e, "Failed to search entries"));
        }
    }
}

async fn handle_confirm_delete(app: &mut App, client: &ApiClient) {
    let Some(date) = app.delete_modal.pending_date().map(str::to_string) else {
        return;
    };

    match client.delete(&date).await {
        Ok(()) => {
            let removed = app.remove_entries_on(&date);
            tracing::info!("Deleted {} entries on {}", removed, date);
            app.toast.success("Entry deleted successfully");
            app.delete_modal.close();
        }
        Err(e) => {
            app.toast.error(failure_message(&e, "Failed to delete entry"));
            app.delete_modal.set_in_flight(false);
        }
    }
}
