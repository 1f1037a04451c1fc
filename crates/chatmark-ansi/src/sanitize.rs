//! Terminal output sanitization.
//!
//! Chat text is untrusted; it is stripped of control characters before our
//! own escape codes are wrapped around it.

/// Remove control characters except tab.
///
/// ```
/// use chatmark_ansi::sanitize::sanitize_for_terminal;
/// assert_eq!(sanitize_for_terminal("Hello\x1b[31mWorld"), "Hello[31mWorld");
/// ```
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars().filter(|c| !c.is_control() || *c == '\t').collect()
}

/// Whether a URL may be emitted inside an OSC 8 hyperlink.
///
/// Only http, https and mailto are allowed, and no control characters.
///
/// ```
/// use chatmark_ansi::sanitize::is_safe_url;
/// assert!(is_safe_url("https://example.com"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let scheme_ok = ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme));
    scheme_ok && !url.chars().any(char::is_control)
}
