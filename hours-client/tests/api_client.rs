use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use hours_client::{ApiClient, ApiError, Entry, NewEntry};
use serde_json::{json, Value};

const TOKEN: &str = "IjE2YzQ.token";

fn stored_entry(id: i64, date: &str) -> Value {
    json!({
        "id": id,
        "date": date,
        "day": "Friday",
        "start_time": "09:00",
        "end_time": "17:00",
        "total_hours": 8.0,
        "pay": 112.0,
        "note": "shift"
    })
}

fn check_token(headers: &HeaderMap) -> Result<(), Response> {
    match headers.get("X-CSRFToken") {
        Some(value) if value == TOKEN => Ok(()),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "The CSRF token is missing." })),
        )
            .into_response()),
    }
}

async fn index() -> Html<String> {
    Html(format!(
        r#"<html><head><meta name="csrf-token" content="{}"></head><body></body></html>"#,
        TOKEN
    ))
}

async fn list(headers: HeaderMap) -> Response {
    if let Err(rejection) = check_token(&headers) {
        return rejection;
    }
    Json(json!([stored_entry(2, "2026-10-16"), stored_entry(1, "2026-10-15")])).into_response()
}

async fn search(headers: HeaderMap, Path(date): Path<String>) -> Response {
    if let Err(rejection) = check_token(&headers) {
        return rejection;
    }
    if date == "2026-10-16" {
        Json(json!([stored_entry(2, "2026-10-16")])).into_response()
    } else {
        Json(json!([])).into_response()
    }
}

async fn create(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(rejection) = check_token(&headers) {
        return rejection;
    }
    match body["date"].as_str() {
        Some("bad") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "time data 'bad' does not match format '%Y-%m-%d'" })),
        )
            .into_response(),
        Some("boom") => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        Some(date) => {
            assert_eq!(body["totalHours"], "8.00");
            assert_eq!(body["pay"], "112.00");
            assert_eq!(body["start"], "09:00");
            Json(stored_entry(3, date)).into_response()
        }
        None => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

async fn update(headers: HeaderMap, Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    if let Err(rejection) = check_token(&headers) {
        return rejection;
    }
    if id == 1 {
        assert_eq!(body["id"], 1);
        Json(body).into_response()
    } else {
        Json(json!({ "error": "not found" })).into_response()
    }
}

async fn delete(headers: HeaderMap, Path(date): Path<String>) -> Response {
    if let Err(rejection) = check_token(&headers) {
        return rejection;
    }
    if date == "2026-10-16" {
        Json(json!({})).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/", get(index))
        .route("/api/entries", get(list).post(create))
        .route("/api/entries/search/:date", get(search))
        .route("/api/entries/:key", put(update).delete(delete));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn authenticated_client() -> ApiClient {
    let mut client = ApiClient::new(&spawn_backend().await).unwrap();
    client.fetch_csrf_token().await.unwrap();
    client
}

fn new_entry(date: &str) -> NewEntry {
    NewEntry {
        date: date.to_string(),
        day: "Friday".to_string(),
        start: "09:00".to_string(),
        end: "17:00".to_string(),
        total_hours: 8.0,
        pay: 112.0,
        note: "shift".to_string(),
    }
}

#[tokio::test]
async fn fetches_token_from_index_page() {
    let mut client = ApiClient::new(&spawn_backend().await).unwrap();
    let token = client.fetch_csrf_token().await.unwrap();

    assert_eq!(token.as_deref(), Some(TOKEN));
    assert_eq!(client.csrf_token(), Some(TOKEN));
}

#[tokio::test]
async fn list_sends_token_header() {
    let client = authenticated_client().await;
    let entries = client.list().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, "2026-10-16");
    assert_eq!(entries[0].total_hours, Some(8.0));
}

#[tokio::test]
async fn missing_token_surfaces_server_error() {
    let client = ApiClient::new(&spawn_backend().await).unwrap();
    let result = client.list().await;

    assert!(matches!(result, Err(ApiError::Rejected(msg)) if msg == "The CSRF token is missing."));
}

#[tokio::test]
async fn search_returns_matches_or_empty() {
    let client = authenticated_client().await;

    let found = client.search_by_date("2026-10-16").await.unwrap();
    assert_eq!(found.len(), 1);

    let none = client.search_by_date("2020-01-01").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn create_returns_stored_entry() {
    let client = authenticated_client().await;
    let created = client.create(&new_entry("2026-10-16")).await.unwrap();

    assert_eq!(created.map(|e| e.id), Some(Some(3)));
}

#[tokio::test]
async fn create_rejection_uses_error_field_or_status() {
    let client = authenticated_client().await;

    let rejected = client.create(&new_entry("bad")).await;
    assert!(matches!(
        rejected,
        Err(ApiError::Rejected(msg)) if msg.starts_with("time data 'bad'")
    ));

    let failed = client.create(&new_entry("boom")).await;
    assert!(matches!(failed, Err(ApiError::Status(500))));
}

#[tokio::test]
async fn update_checks_error_field_on_success_status() {
    let client = authenticated_client().await;
    let mut entry: Entry = serde_json::from_value(stored_entry(1, "2026-10-16")).unwrap();

    client.update(1, &entry).await.unwrap();

    entry.id = Some(99);
    let result = client.update(99, &entry).await;
    assert!(matches!(result, Err(ApiError::Rejected(msg)) if msg == "not found"));
}

#[tokio::test]
async fn delete_by_date() {
    let client = authenticated_client().await;

    client.delete("2026-10-16").await.unwrap();

    let missing = client.delete("2026-10-01").await;
    assert!(matches!(missing, Err(ApiError::Rejected(msg)) if msg == "not found"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let result = client.list().await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
}
