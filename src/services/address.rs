//! Turns input-bar text into a navigation target.
//!
//! This is a prefix heuristic, not a URL normalizer: anything that does not
//! already start with `http` gets `https://` in front, so a bare search term
//! becomes `https://<term>` and the page view shows its own error page.

/// Address opened by a tab created without one.
pub const DEFAULT_ADDRESS: &str = "https://www.google.com";

/// Prefix added to input that does not look like an http(s) address.
pub const HTTPS_PREFIX: &str = "https://";

/// Resolve raw input-bar text into the address for a new tab.
pub fn resolve_input(text: &str) -> String {
    if text.starts_with("http") {
        text.to_string()
    } else {
        format!("{}{}", HTTPS_PREFIX, text)
    }
}
