//! Thin `gloo-net` wrapper: builds URLs from [`API_BASE_URL`], sends the
//! request and hands back the raw body, or an [`ApiError`] for transport
//! failures and non-2xx statuses.

use common::error::{ApiError, Result};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;

use crate::config::API_BASE_URL;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Reads the body of a 2xx response; anything else becomes a status error
/// carrying the server's message when the body has one.
async fn read_body(response: Response) -> Result<String> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(
            response.status(),
            response.status_text(),
            &body,
        ));
    }
    response.text().await.map_err(transport)
}

async fn send(builder: RequestBuilder) -> Result<String> {
    let response = builder.send().await.map_err(transport)?;
    read_body(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<String> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request.send().await.map_err(transport)?;
    read_body(response).await
}

pub async fn get(path: &str) -> Result<String> {
    send(Request::get(&url(path))).await
}

pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<String> {
    send_json(Request::post(&url(path)), body).await
}

pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<String> {
    send_json(Request::put(&url(path)), body).await
}

/// DELETE; the response body is ignored.
pub async fn delete(path: &str) -> Result<()> {
    send(Request::delete(&url(path))).await.map(|_| ())
}

/// Logs a failed call to the browser console and hands the result back untouched.
pub fn log_failure<T>(result: Result<T>, context: impl FnOnce() -> String) -> Result<T> {
    if let Err(e) = &result {
        gloo_console::error!(format!("{}: {}", context(), e));
    }
    result
}
