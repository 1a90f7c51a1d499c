use shared::share_link::results_page_for;
use web_sys::window;

/// Trunk dev server, used when there is no usable `window.location`.
const FALLBACK_RESULTS_PAGE: &str = "http://127.0.0.1:8080/index.html";

/// URL of the read-only results page next to the page the app is served from.
pub fn results_page_url() -> String {
    let href = window().and_then(|w| w.location().href().ok());
    match href.as_deref().map(results_page_for) {
        Some(Ok(page)) => page,
        Some(Err(e)) => {
            log::warn!("Could not resolve results page: {}", e);
            FALLBACK_RESULTS_PAGE.to_string()
        }
        None => FALLBACK_RESULTS_PAGE.to_string(),
    }
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
