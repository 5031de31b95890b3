//! Session cookie construction and parsing
//!
//! The session token travels exclusively in the `jwt` cookie. The clearing
//! cookie sent on logout must mirror every attribute of the issuing one;
//! browsers silently keep a cookie whose removal attributes differ.

use axum::http::{header, HeaderMap};
use cookie::{time, Cookie, SameSite};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "jwt";

/// Build the session cookie set on signup/login
///
/// `secure` follows the runtime mode: HTTPS-only in production.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

/// Build the clearing cookie sent on logout
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

/// Extract the session token from a request's Cookie header
///
/// An empty value counts as absent, so a half-cleared cookie reports
/// "missing" rather than "invalid".
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    Cookie::split_parse(raw.to_owned())
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
