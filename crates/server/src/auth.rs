//! Registration, login, and session API endpoints.

use api_types::auth::{AuthResponse, LoginRequest, LogoutResponse, MeResponse, RegisterNew};
use axum::{Json, extract::State};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{ServerError, server::ServerState};

pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterNew>,
) -> Result<Json<AuthResponse>, ServerError> {
    let session = state
        .engine
        .register(&payload.username, &payload.password, &payload.name)
        .await?;

    Ok(Json(AuthResponse {
        success: true,
        name: session.name,
        token: session.token,
    }))
}

pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ServerError> {
    let session = state
        .engine
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(AuthResponse {
        success: true,
        name: session.name,
        token: session.token,
    }))
}

/// Runs behind the session layer, so the token has already been validated;
/// the engine-side delete is idempotent regardless.
pub async fn logout(
    bearer: TypedHeader<Authorization<Bearer>>,
    State(state): State<ServerState>,
) -> Result<Json<LogoutResponse>, ServerError> {
    state.engine.logout(bearer.token()).await?;
    Ok(Json(LogoutResponse { success: true }))
}

/// Session probe for the frontend. Never fails on a bad token; it just
/// reports `loggedIn: false`.
pub async fn me(
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    State(state): State<ServerState>,
) -> Result<Json<MeResponse>, ServerError> {
    let user = match bearer {
        Some(bearer) => state.engine.session_user(bearer.token()).await?,
        None => None,
    };

    Ok(Json(MeResponse {
        logged_in: user.is_some(),
        name: user.map(|u| u.name),
    }))
}
