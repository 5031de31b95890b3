//! Session extraction for handlers
//!
//! Handlers that need the logged-in manager take a `CurrentManager`
//! argument; the extractor reads the session cookie and verifies it with
//! the pre-computed keys in AppState.

use crate::auth::cookie;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::FromRef, http::request::Parts};
use uuid::Uuid;

/// The authenticated building manager for this request
#[derive(Debug, Clone)]
pub struct CurrentManager {
    pub manager_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentManager
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = cookie::session_token(&parts.headers);
        let manager_id = app_state.jwt().verify(token.as_deref())?;

        Ok(CurrentManager { manager_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_manager_debug() {
        let manager = CurrentManager {
            manager_id: Uuid::new_v4(),
        };
        let debug_str = format!("{:?}", manager);
        assert!(debug_str.contains("CurrentManager"));
    }
}
