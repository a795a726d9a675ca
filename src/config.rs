//! API Configuration
//!
//! The service base URL comes from, in order: a
//! `<meta name="citizen-connect:api-url" content="...">` tag injected by the
//! host page, the `CITIZEN_CONNECT_API_URL` variable at build time, or the
//! local development default.

use wasm_bindgen::JsCast;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const META_API_URL: &str = "citizen-connect:api-url";

/// Poll period for stats and the unfiltered list
pub const REFRESH_INTERVAL_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve configuration for the running page
    pub fn load() -> Self {
        Self {
            base_url: resolve_base_url(read_meta(META_API_URL), option_env!("CITIZEN_CONNECT_API_URL")),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string() }
    }
}

/// First non-blank candidate wins; trailing slashes are dropped so paths
/// can be appended with a single `/`.
pub fn resolve_base_url(meta: Option<String>, build_env: Option<&str>) -> String {
    let chosen = meta
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| build_env.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_API_URL);
    chosen.trim_end_matches('/').to_string()
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
