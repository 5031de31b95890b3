//! Building manager routes
//!
//! Signup and login set the session cookie; logout clears it with the same
//! attributes. Handlers delegate to `ManagerService` and never pick status
//! codes themselves.

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::CurrentManager;
use crate::error::ApiResult;
use crate::services::ManagerService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use property_manager_shared::types::{
    AccountData, EmailRequest, LoginRequest, MessageBody, SignUpRequest, SuccessBody,
};

/// Create building manager routes
pub fn manager_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
        .route("/current", get(current))
        .route("/logout", post(logout))
        .route("/signup-google", post(sign_up_google))
        .route("/current-by-email", post(current_by_email))
}

/// POST /api/v1/building-manager/signup
async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> ApiResult<Response> {
    let (account, token) = ManagerService::sign_up(&state.db, state.jwt(), req).await?;

    Ok(session_response(
        &state,
        &token,
        SuccessBody::with_message("Building manager sign up success", AccountData { account }),
    ))
}

/// POST /api/v1/building-manager/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Response> {
    let (account, token) = ManagerService::login(&state.db, state.jwt(), req).await?;

    Ok(session_response(
        &state,
        &token,
        SuccessBody::new(AccountData { account }),
    ))
}

/// GET /api/v1/building-manager/current
///
/// The session cookie is the only input; `CurrentManager` rejects the
/// request before this body runs when the token is missing or bad.
async fn current(
    State(state): State<AppState>,
    session: CurrentManager,
) -> ApiResult<Json<SuccessBody<AccountData>>> {
    let account = ManagerService::current(&state.db, session.manager_id).await?;
    Ok(Json(SuccessBody::new(AccountData { account })))
}

/// POST /api/v1/building-manager/logout
///
/// Stateless: nothing to revoke server-side, only the cookie to clear.
async fn logout(State(state): State<AppState>) -> Response {
    let cookie = clear_session_cookie(state.secure_cookies());

    (
        AppendHeaders([(SET_COOKIE, cookie.to_string())]),
        Json(MessageBody::success("Building manager signed out")),
    )
        .into_response()
}

/// POST /api/v1/building-manager/signup-google
///
/// Returns the account either way but never starts a session; the client
/// still has to authenticate.
async fn sign_up_google(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> ApiResult<Json<SuccessBody<AccountData>>> {
    let account = ManagerService::provision_by_email(&state.db, req.email).await?;
    Ok(Json(SuccessBody::new(AccountData { account })))
}

/// POST /api/v1/building-manager/current-by-email
async fn current_by_email(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> ApiResult<Json<SuccessBody<AccountData>>> {
    let account = ManagerService::lookup_by_email(&state.db, req.email).await?;
    Ok(Json(SuccessBody::new(AccountData { account })))
}

/// Attach the session cookie to a success body
fn session_response(
    state: &AppState,
    token: &str,
    body: SuccessBody<AccountData>,
) -> Response {
    let cookie = session_cookie(token, state.jwt().ttl().num_seconds(), state.secure_cookies());

    (
        AppendHeaders([(SET_COOKIE, cookie.to_string())]),
        Json(body),
    )
        .into_response()
}
