//! Stats Endpoint

use gloo_net::http::Request;

use super::{endpoint, ensure_success, ApiError, ApiResult};
use crate::models::Stats;

/// `GET /stats`
pub async fn fetch_stats(base_url: &str) -> ApiResult<Stats> {
    let resp = Request::get(&endpoint(base_url, "stats"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = ensure_success(resp)?;
    resp.json::<Stats>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
