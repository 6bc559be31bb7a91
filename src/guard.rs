//! Route guard: coarse access gate run ahead of page render.
//!
//! Presence-only check on the `access_token` cookie. Token validity is
//! never inspected here; the backend re-verifies authorization on every
//! request. A missing token is a redirect, not a failure.

use crate::utils::constants::{ACCESS_TOKEN_COOKIE, LOGIN_PATH};
use crate::utils::storage::cookie_string;

/// Paths reachable without a session: the login flow itself, auth
/// callbacks, API routes and static assets.
const PUBLIC_PREFIXES: &[&str] = &["/login", "/auth", "/api", "/assets", "/static"];

const ASSET_SUFFIXES: &[&str] = &[".ico", ".js", ".wasm", ".css", ".png", ".svg", ".webmanifest"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    RedirectToLogin,
}

/// Extracts a cookie's value from a `document.cookie`-style string.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

fn is_public_path(path: &str) -> bool {
    PUBLIC_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
        || ASSET_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Decides whether navigation to `path` may proceed given the request's
/// cookies. An empty token counts as absent.
pub fn decide(path: &str, cookie_header: &str) -> GuardDecision {
    if is_public_path(path) {
        return GuardDecision::Allowed;
    }

    match cookie_value(cookie_header, ACCESS_TOKEN_COOKIE) {
        Some(token) if !token.is_empty() => GuardDecision::Allowed,
        _ => GuardDecision::RedirectToLogin,
    }
}

/// Runs the guard against the current browser location and performs the
/// redirect when access is denied. Windowless contexts pass through.
pub fn enforce() -> GuardDecision {
    let Some(window) = web_sys::window() else {
        return GuardDecision::Allowed;
    };

    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());
    let decision = decide(&path, &cookie_string());

    if decision == GuardDecision::RedirectToLogin {
        log::info!("🔒 No session, redirecting {} -> {}", path, LOGIN_PATH);
        let _ = window.location().set_href(LOGIN_PATH);
    }

    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_path_without_token_redirects() {
        assert_eq!(decide("/dashboard", ""), GuardDecision::RedirectToLogin);
        assert_eq!(decide("/", ""), GuardDecision::RedirectToLogin);
        assert_eq!(
            decide("/dashboard", "theme=dark; lang=ja"),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn login_without_token_passes_through() {
        // No redirect loop on the login page itself
        assert_eq!(decide("/login", ""), GuardDecision::Allowed);
        assert_eq!(decide("/auth/callback", ""), GuardDecision::Allowed);
    }

    #[test]
    fn any_present_token_allows_protected_paths() {
        // Presence only; even a garbage token passes this layer
        assert_eq!(
            decide("/dashboard", "access_token=not-even-a-jwt"),
            GuardDecision::Allowed
        );
        assert_eq!(
            decide("/dashboard", "theme=dark; access_token=abc; lang=ja"),
            GuardDecision::Allowed
        );
    }

    #[test]
    fn empty_token_counts_as_absent() {
        assert_eq!(
            decide("/dashboard", "access_token="),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn api_and_assets_are_excluded() {
        assert_eq!(decide("/api/v1/campaigns", ""), GuardDecision::Allowed);
        assert_eq!(decide("/favicon.ico", ""), GuardDecision::Allowed);
        assert_eq!(decide("/assets/logo.png", ""), GuardDecision::Allowed);
        assert_eq!(decide("/oa-console_bg.wasm", ""), GuardDecision::Allowed);
    }

    #[test]
    fn prefix_matching_does_not_leak_onto_lookalike_paths() {
        // "/loginX" is not the login page
        assert_eq!(decide("/loginx", ""), GuardDecision::RedirectToLogin);
        assert_eq!(decide("/authors", ""), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn cookie_parsing_handles_spacing_and_order() {
        assert_eq!(
            cookie_value("a=1; access_token=tok; b=2", "access_token"),
            Some("tok".to_string())
        );
        assert_eq!(
            cookie_value("access_token=tok", "access_token"),
            Some("tok".to_string())
        );
        assert_eq!(cookie_value("", "access_token"), None);
        assert_eq!(cookie_value("a=1;b=2", "access_token"), None);
    }
}
