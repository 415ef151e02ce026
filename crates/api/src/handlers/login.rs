use axum::extract::{Json, State};
use crate::extractors::SoftJson;
use prescripto_core::services::auth_service::AuthService;
use prescripto_core::AppState;
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::auth_dto::{AuthResponse, LoginRequest};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "`success: true` with a token, or `success: false` on invalid credentials", body = AuthResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(()),
    tag = "User"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    SoftJson(payload): SoftJson<LoginRequest>,
) -> Result<Json<AuthResponse>, SoftError> {
    let response = AuthService::login(&state, payload).await?;
    Ok(Json(response))
}
