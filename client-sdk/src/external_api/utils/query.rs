use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use vtex_filter_interfaces::api::error::ServerError;

const APPLICATION_JSON: &str = "application/json";

/// Sends a GET and decodes the JSON body. Any status outside `accepted` is
/// returned as `ServerError::ServerError` carrying the raw response body.
pub async fn get_request<R: DeserializeOwned>(
    client: &Client,
    url: Url,
    accepted: &[StatusCode],
    timeout: Option<Duration>,
) -> Result<R, ServerError> {
    let url_str = url.to_string();
    let request = client.get(url).header(header::ACCEPT, APPLICATION_JSON);
    let response = send(request, timeout, &url_str).await?;
    let response = check_status(response, accepted, &url_str, "").await?;
    response
        .json::<R>()
        .await
        .map_err(|e| ServerError::DeserializationError(e.to_string()))
}

/// Sends a PUT with a JSON body. The response body is ignored on success.
pub async fn put_request<B: Serialize>(
    client: &Client,
    url: Url,
    body: &B,
    accepted: &[StatusCode],
    timeout: Option<Duration>,
) -> Result<(), ServerError> {
    let url_str = url.to_string();
    let request = client
        .put(url)
        .header(header::ACCEPT, APPLICATION_JSON)
        .json(body);
    let response = send(request, timeout, &url_str).await?;
    let request_str = serde_json::to_string(body).unwrap_or_default();
    check_status(response, accepted, &url_str, &request_str).await?;
    Ok(())
}

async fn send(
    request: RequestBuilder,
    timeout: Option<Duration>,
    url: &str,
) -> Result<Response, ServerError> {
    let request = match timeout {
        Some(timeout) => request.timeout(timeout),
        None => request,
    };
    request
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(format!("{}: {}", url, e)))
}

async fn check_status(
    response: Response,
    accepted: &[StatusCode],
    url: &str,
    request_str: &str,
) -> Result<Response, ServerError> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error response".to_string());
    log::debug!("{} answered {}: {}", url, status, error_text);
    Err(ServerError::ServerError(
        status.as_u16(),
        error_text,
        url.to_string(),
        request_str.to_string(),
    ))
}
