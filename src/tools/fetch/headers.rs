use crate::config::FetchConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};

const FALLBACK_USER_AGENT: &str = "Mozilla/5.0";

/// Browser-like request headers, including User-Agent and Accept-Language.
pub(crate) fn headers_for_config(cfg: &FetchConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (k, v) in header_pairs() {
        let name = HeaderName::from_lowercase(k.to_ascii_lowercase().as_bytes())
            .unwrap_or_else(|_| HeaderName::from_static("accept"));
        if let Ok(val) = HeaderValue::from_str(v) {
            headers.insert(name, val);
        }
    }

    if let Ok(lang) = HeaderValue::from_str(&cfg.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, lang);
    }
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&cfg.user_agent)
            .unwrap_or(HeaderValue::from_static(FALLBACK_USER_AGENT)),
    );

    headers
}

fn header_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        ("Upgrade-Insecure-Requests", "1"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
    ]
}
