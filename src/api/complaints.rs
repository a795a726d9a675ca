//! Complaint Endpoints

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{endpoint, ensure_success, ApiError, ApiResult};
use crate::models::{decode_complaints, Complaint, NewComplaint, Status};

/// List URL, with `?status=` only when filtering
pub fn complaints_url(base_url: &str, status: Option<Status>) -> String {
    let url = endpoint(base_url, "complaints");
    match status {
        Some(s) => format!("{}?status={}", url, utf8_percent_encode(s.as_str(), NON_ALPHANUMERIC)),
        None => url,
    }
}

/// `GET /complaints[?status=...]`
pub async fn list_complaints(base_url: &str, status: Option<Status>) -> ApiResult<Vec<Complaint>> {
    let resp = Request::get(&complaints_url(base_url, status))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = ensure_success(resp)?;
    let rows = resp
        .json::<Vec<serde_json::Value>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let decoded = decode_complaints(rows);
    for skipped in &decoded.skipped {
        web_sys::console::warn_1(&format!("[Api] Skipped complaint {}", skipped).into());
    }
    Ok(decoded.complaints)
}

/// `POST /complaints`. The response body is not needed.
pub async fn create_complaint(base_url: &str, payload: &NewComplaint) -> ApiResult<()> {
    let request = Request::post(&endpoint(base_url, "complaints"))
        .json(payload)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_success(resp).map(|_| ())
}
