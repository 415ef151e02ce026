use axum::extract::{Json, State};
use crate::extractors::SoftJson;
use prescripto_core::services::auth_service::AuthService;
use prescripto_core::AppState;
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::auth_dto::{AuthResponse, RegisterRequest};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "`success: true` with a token, or `success: false` with the reason \
                                      (missing details, invalid email, weak password, existing user)", body = AuthResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(()),
    tag = "User"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    SoftJson(payload): SoftJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, SoftError> {
    let response = AuthService::register(&state, payload).await?;
    Ok(Json(response))
}
