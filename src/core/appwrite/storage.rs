//! Cookie fallback persisted in localStorage
//!
//! When third-party cookies are blocked the backend returns the session
//! cookies in a response header instead. They are kept under
//! [`STORAGE_KEY_COOKIE_FALLBACK`] and replayed on every request.

/// localStorage key for the mirrored session cookies
pub const STORAGE_KEY_COOKIE_FALLBACK: &str = "cookieFallback";

/// Whether a stored fallback value represents a live session
///
/// The backend writes `[]` after a session is deleted.
pub fn is_session_marker(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("[]") | Some("{}") => false,
        Some(_) => true,
    }
}

/// Read the stored fallback cookies
#[cfg(target_arch = "wasm32")]
pub fn load_cookie_fallback() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY_COOKIE_FALLBACK).ok()?
}

/// Store the fallback cookies returned by the backend
#[cfg(target_arch = "wasm32")]
pub fn save_cookie_fallback(value: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(Some(storage)) = window.local_storage()
    {
        let _ = storage.set_item(STORAGE_KEY_COOKIE_FALLBACK, value);
    }
}

/// Remove the fallback cookies
#[cfg(target_arch = "wasm32")]
pub fn clear_cookie_fallback() {
    if let Some(window) = web_sys::window()
        && let Ok(Some(storage)) = window.local_storage()
    {
        let _ = storage.remove_item(STORAGE_KEY_COOKIE_FALLBACK);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_cookie_fallback() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_cookie_fallback(_value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_cookie_fallback() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_fallback_is_not_a_session() {
        assert!(!is_session_marker(None));
        assert!(!is_session_marker(Some("")));
        assert!(!is_session_marker(Some("[]")));
        assert!(!is_session_marker(Some(" [] ")));
        assert!(!is_session_marker(Some("{}")));
    }

    #[test]
    fn test_stored_cookie_is_a_session() {
        assert!(is_session_marker(Some(
            r#"{"a_session_snapgram":"eyJpZCI6IjEyMyJ9"}"#
        )));
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_native_storage_is_empty() {
        save_cookie_fallback("{\"a\":\"b\"}");
        assert_eq!(load_cookie_fallback(), None);
        clear_cookie_fallback();
    }
}
