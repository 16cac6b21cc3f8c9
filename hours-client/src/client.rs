use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Deserialize};

use crate::dev_backend::DevBackend;
use crate::domain::{Entry, NewEntry};
use crate::error::ApiError;

pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// `name` of the `<meta>` tag carrying the anti-forgery token on the index page.
const CSRF_META_NAME: &str = "csrf-token";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the work-hours entries API.
///
/// Every request carries the anti-forgery token header once a token is known.
/// In dev mode all calls are served by an in-memory [`DevBackend`] instead.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    csrf_header: String,
    csrf_token: Option<String>,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Trailing slash so that joined paths stay under any path prefix.
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        // The session cookie set alongside the token must travel with later requests.
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            csrf_token: None,
            dev_backend: None,
        })
    }

    pub fn dev() -> Result<Self, ApiError> {
        Self::with_dev_backend(DevBackend::new())
    }

    pub fn with_dev_backend(backend: DevBackend) -> Result<Self, ApiError> {
        let mut client = Self::new("http://localhost")?;
        client.dev_backend = Some(backend);
        Ok(client)
    }

    pub fn with_csrf_header(mut self, header: &str) -> Self {
        self.csrf_header = header.to_string();
        self
    }

    pub fn with_csrf_token(mut self, token: &str) -> Self {
        self.csrf_token = Some(token.to_string());
        self
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn dev_backend(&self) -> Option<&DevBackend> {
        self.dev_backend.as_ref()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    fn with_token(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.csrf_token {
            Some(token) => request.header(self.csrf_header.as_str(), token.as_str()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response, ApiError> {
        tracing::debug!("Calling {}", call_name);

        let response = self.with_token(request).send().await.map_err(|e| {
            tracing::warn!("{} failed: {}", call_name, e);
            ApiError::Transport(e.to_string())
        })?;

        if !response.status().is_success() {
            let error = rejection(response).await;
            tracing::warn!("{} rejected: {}", call_name, error);
            return Err(error);
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, call_name).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(format!("{}: {}", call_name, e)))
    }

    /// Send a mutating request and surface an `error` field even on a 2xx answer.
    async fn send_checked(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<Vec<u8>, ApiError> {
        let response = self.send(request, call_name).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .to_vec();

        if let Some(message) = error_field(&body) {
            tracing::warn!("{} reported error: {}", call_name, message);
            return Err(ApiError::Rejected(message));
        }
        Ok(body)
    }

    /// Read the anti-forgery token from the index page's `<meta>` tag and keep it
    /// for subsequent requests.
    pub async fn fetch_csrf_token(&mut self) -> Result<Option<String>, ApiError> {
        if self.dev_backend.is_some() {
            return Ok(None);
        }

        let response = self
            .client
            .get(self.endpoint("/")?)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let html = response
            .text()
            .await
            .map_err(|e| ApiError::Parsing(format!("GET /: {}", e)))?;

        let token = extract_meta_content(&html, CSRF_META_NAME);
        if let Some(token) = &token {
            self.csrf_token = Some(token.clone());
        }
        Ok(token)
    }

    /// GET /api/entries
    pub async fn list(&self) -> Result<Vec<Entry>, ApiError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.list());
        }

        self.get_json(
            self.client.get(self.endpoint("/api/entries")?),
            "GET /api/entries",
        )
        .await
    }

    /// GET /api/entries/search/:date. An empty result is not an error.
    pub async fn search_by_date(&self, date: &str) -> Result<Vec<Entry>, ApiError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.search(date));
        }

        self.get_json(
            self.client.get(self.endpoint(&format!(
                "/api/entries/search/{}",
                urlencoding::encode(date)
            ))?),
            "GET /api/entries/search/:date",
        )
        .await
    }

    /// POST /api/entries. Returns the stored entry when the server echoes one.
    pub async fn create(&self, entry: &NewEntry) -> Result<Option<Entry>, ApiError> {
        if let Some(dev) = &self.dev_backend {
            return dev.create(entry).map(Some);
        }

        let body = self
            .send_checked(
                self.client.post(self.endpoint("/api/entries")?).json(entry),
                "POST /api/entries",
            )
            .await?;
        Ok(serde_json::from_slice::<Entry>(&body).ok())
    }

    /// PUT /api/entries/:id with the full entry.
    pub async fn update(&self, id: i64, entry: &Entry) -> Result<(), ApiError> {
        if let Some(dev) = &self.dev_backend {
            return dev.update(id, entry);
        }

        self.send_checked(
            self.client
                .put(self.endpoint(&format!("/api/entries/{}", id))?)
                .json(entry),
            "PUT /api/entries/:id",
        )
        .await?;
        Ok(())
    }

    /// DELETE /api/entries/:date
    pub async fn delete(&self, date: &str) -> Result<(), ApiError> {
        if let Some(dev) = &self.dev_backend {
            return dev.delete(date);
        }

        self.send_checked(
            self.client.delete(self.endpoint(&format!(
                "/api/entries/{}",
                urlencoding::encode(date)
            ))?),
            "DELETE /api/entries/:date",
        )
        .await?;
        Ok(())
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.bytes().await.unwrap_or_default();
    match error_field(&body) {
        Some(message) => ApiError::Rejected(message),
        None => ApiError::Status(status),
    }
}

fn error_field(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body).ok()?.error
}

/// Value of the `content` attribute of `<meta name="{name}" ...>`.
fn extract_meta_content(html: &str, name: &str) -> Option<String> {
    let name_attr = format!("name=\"{}\"", name);
    html.match_indices("<meta").find_map(|(start, _)| {
        let rest = &html[start..];
        let tag = &rest[..rest.find('>')?];
        if !tag.contains(&name_attr) {
            return None;
        }
        let value_start = tag.find("content=\"")? + "content=\"".len();
        let value = &tag[value_start..];
        Some(value[..value.find('"')?].to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_csrf_meta_tag() {
        let html = r#"<html><head>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width">
            <meta name="csrf-token" content="IjQ5ZTA.abc-123">
        </head></html>"#;

        assert_eq!(
            extract_meta_content(html, "csrf-token").as_deref(),
            Some("IjQ5ZTA.abc-123")
        );
        assert_eq!(extract_meta_content(html, "missing"), None);
    }

    #[test]
    fn csrf_meta_tag_attribute_order_does_not_matter() {
        let html = r#"<meta content="tok" name="csrf-token"/>"#;
        assert_eq!(
            extract_meta_content(html, "csrf-token").as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn error_field_only_matches_error_objects() {
        assert_eq!(
            error_field(br#"{"error":"not found"}"#).as_deref(),
            Some("not found")
        );
        assert_eq!(error_field(br#"{}"#), None);
        assert_eq!(error_field(br#"{"message":"deleted"}"#), None);
        assert_eq!(error_field(br#"[{"error":"x"}]"#), None);
        assert_eq!(error_field(b"not json"), None);
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn endpoints_keep_base_path_prefix() {
        let client = ApiClient::new("http://example.com/hours").unwrap();
        assert_eq!(
            client.endpoint("/api/entries").unwrap().as_str(),
            "http://example.com/hours/api/entries"
        );
        assert_eq!(
            client.endpoint("/").unwrap().as_str(),
            "http://example.com/hours/"
        );

        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.endpoint("/api/entries/search/2026-10-16").unwrap().as_str(),
            "http://localhost:5000/api/entries/search/2026-10-16"
        );
    }

    #[test]
    fn token_is_attached_once_known() {
        let client = ApiClient::new("http://localhost:5000")
            .unwrap()
            .with_csrf_header("X-CSRF")
            .with_csrf_token("secret");
        let request = client
            .with_token(client.client.get("http://localhost:5000/api/entries"))
            .build()
            .unwrap();

        assert_eq!(request.headers()["X-CSRF"], "secret");
        assert_eq!(client.csrf_token(), Some("secret"));
    }
}
