//! Error types for the Property Manager application

use thiserror::Error;

/// Session/credential failures surfaced by the auth flow.
///
/// The display strings are the exact messages sent to clients, so changing
/// them is a wire-format change. `InvalidCredentials` deliberately covers
/// both an unknown username and a wrong password so callers cannot tell
/// the two apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Wrong username or password")]
    InvalidCredentials,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token is missing")]
    MissingToken,
}
