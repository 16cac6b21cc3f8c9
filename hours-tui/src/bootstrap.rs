use crate::config::HoursConfig;
use anyhow::{Context, Result};
use hours_client::ApiClient;

/// Build the API client for `hours-tui run`.
///
/// A token from the config is used as is; otherwise it is read from the
/// index page. A page without one only logs a warning, since some backends
/// do not enforce it.
pub async fn connect(config: &HoursConfig) -> Result<ApiClient> {
    let mut client = ApiClient::new(&config.api_url)
        .with_context(|| format!("Invalid api_url in config: {}", config.api_url))?
        .with_csrf_header(&config.csrf_header);

    match &config.csrf_token {
        Some(token) => {
            client = client.with_csrf_token(token);
        }
        None => match client.fetch_csrf_token().await {
            Ok(Some(_)) => tracing::info!("Using anti-forgery token from {}", config.api_url),
            Ok(None) => tracing::warn!("No csrf-token meta tag found at {}", config.api_url),
            Err(e) => tracing::warn!("Could not fetch anti-forgery token: {}", e),
        },
    }

    Ok(client)
}
