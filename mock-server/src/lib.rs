use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the fake API saw, echoed back on success.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub account: String,
    pub endpoint: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
pub struct AppState {
    password: Arc<str>,
}

/// Router for `/v2/accounts/{account}/...`.
///
/// Requests must carry Basic auth whose user's account number matches the
/// path and whose password is `password`, otherwise 401. Endpoints starting
/// with `fail` answer 500.
pub fn app(password: &str) -> Router {
    let state = AppState {
        password: Arc::from(password),
    };
    Router::new()
        .route("/v2/accounts/{account}/{*endpoint}", any(handle))
        .with_state(state)
}

pub async fn run(listener: TcpListener, password: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(password)).await
}

async fn handle(
    State(state): State<AppState>,
    method: Method,
    Path((account, endpoint)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    tracing::info!(%method, %account, %endpoint, "request received");

    if !authorized(&headers, &account, &state.password) {
        return (StatusCode::UNAUTHORIZED, "unauthorized").into_response();
    }
    if endpoint.starts_with("fail") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response();
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(Echo {
        method: method.to_string(),
        account,
        endpoint: format!("/{endpoint}"),
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
    .into_response()
}

/// Decode `Authorization: Basic ...` into `(user, password)`.
pub fn decode_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

fn authorized(headers: &HeaderMap, account: &str, password: &str) -> bool {
    let Some((user, pass)) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(decode_basic)
    else {
        return false;
    };
    user.split('-').next() == Some(account) && pass == password
}
